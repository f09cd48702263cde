//! MailService trait.

use std::any::Any;

use super::error::InspectionError;
use crate::mail::Item;

/// A stage that can process an item on its way through the mailroom.
///
/// Implementations pass items they don't care about through unchanged.
/// A changed item is returned as a new value; returning an error aborts
/// the whole pipeline for that item.
pub trait MailService: Send {
    /// Process one item.
    fn process(&mut self, item: Item) -> Result<Item, InspectionError>;

    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Access to the concrete type, for reading handler state after a run.
    fn as_any(&self) -> &dyn Any;
}
