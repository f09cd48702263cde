//! Terminal delivery stage.

use std::any::Any;

use super::error::InspectionError;
use super::handler::MailService;
use crate::mail::Item;

/// The real mail service: hands items over for dispatch.
///
/// Accepts any item and returns it as-is. Keeps a count of delivered items.
#[derive(Debug, Default)]
pub struct RealMailService {
    delivered: usize,
}

impl RealMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items delivered so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl MailService for RealMailService {
    fn process(&mut self, item: Item) -> Result<Item, InspectionError> {
        self.delivered += 1;
        tracing::debug!(
            kind = item.kind(),
            from = item.sender(),
            to = item.recipient(),
            "Item delivered"
        );
        Ok(item)
    }

    fn name(&self) -> &'static str {
        "delivery"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
