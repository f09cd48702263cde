//! Covert correspondence surveillance.

use std::any::Any;
use std::sync::Arc;

use crate::logging::{LogSink, Severity};
use crate::mail::Item;
use crate::service::error::InspectionError;
use crate::service::handler::MailService;

/// Default name the spy watches for.
pub const AUSTIN_POWERS: &str = "Austin Powers";

/// Logs every message that passes by.
///
/// Messages to or from the watched name are logged at [`Severity::High`]
/// with their full text; everything else at [`Severity::Low`] with sender
/// and recipient only. Packages are ignored. Items are never altered.
pub struct Spy {
    watched: String,
    sink: Arc<dyn LogSink>,
}

impl Spy {
    pub fn new(watched: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            watched: watched.into(),
            sink,
        }
    }

    /// The name this spy is watching for.
    pub fn watched(&self) -> &str {
        &self.watched
    }
}

impl MailService for Spy {
    fn process(&mut self, item: Item) -> Result<Item, InspectionError> {
        if let Item::Message(message) = &item {
            if message.from == self.watched || message.to == self.watched {
                self.sink.log(
                    Severity::High,
                    &format!(
                        "Detected target mail correspondence: from {} to {} \"{}\"",
                        message.from, message.to, message.text
                    ),
                );
            } else {
                self.sink.log(
                    Severity::Low,
                    &format!(
                        "Usual correspondence: from {} to {}",
                        message.from, message.to
                    ),
                );
            }
        }
        Ok(item)
    }

    fn name(&self) -> &'static str {
        "spy"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
