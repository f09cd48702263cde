//! Package content inspection.

use std::any::Any;

use super::thief::FILLER_MARKER;
use crate::mail::Item;
use crate::service::error::InspectionError;
use crate::service::handler::MailService;

/// Marker for prohibited weapons.
pub const WEAPONS: &str = "weapons";
/// Marker for banned substances.
pub const BANNED_SUBSTANCE: &str = "banned substance";

/// Rejects packages whose description reveals illegal or tampered contents.
///
/// Checks are case-sensitive substring matches, in order:
/// 1. [`WEAPONS`] or [`BANNED_SUBSTANCE`] -> [`InspectionError::IllegalContent`]
/// 2. [`FILLER_MARKER`] -> [`InspectionError::Tampered`]
///
/// Tampering can only be seen if the inspector runs after whatever did the
/// substituting; that ordering is up to the pipeline configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inspector;

impl Inspector {
    pub fn new() -> Self {
        Self
    }

    fn inspect(description: &str) -> Result<(), InspectionError> {
        for marker in [WEAPONS, BANNED_SUBSTANCE] {
            if description.contains(marker) {
                return Err(InspectionError::illegal_content(format!(
                    "found \"{}\" in \"{}\"",
                    marker, description
                )));
            }
        }
        if description.contains(FILLER_MARKER) {
            return Err(InspectionError::tampered(format!(
                "found \"{}\" in \"{}\"",
                FILLER_MARKER, description
            )));
        }
        Ok(())
    }
}

impl MailService for Inspector {
    fn process(&mut self, item: Item) -> Result<Item, InspectionError> {
        let description = match &item {
            Item::Package(package) => package
                .content
                .as_ref()
                .and_then(|parcel| parcel.description.as_deref()),
            Item::Message(_) => None,
        };

        if let Some(description) = description {
            if let Err(err) = Self::inspect(description) {
                tracing::debug!(
                    from = item.sender(),
                    to = item.recipient(),
                    kind = err.kind().name(),
                    "Package rejected"
                );
                return Err(err);
            }
        }

        Ok(item)
    }

    fn name(&self) -> &'static str {
        "inspector"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
