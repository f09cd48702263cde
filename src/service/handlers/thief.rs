//! Value-based parcel substitution.

use std::any::Any;

use crate::mail::{Item, MailPackage, Parcel};
use crate::service::error::InspectionError;
use crate::service::handler::MailService;

/// Marker written into every substituted parcel description.
///
/// The [`Inspector`](super::Inspector) looks for this exact text to detect
/// tampering, so it must appear verbatim in [`substitute_description`].
pub const FILLER_MARKER: &str = "substituted filler";

/// Description placed in a stolen parcel.
pub fn substitute_description(original: Option<&str>) -> String {
    format!(
        "{} instead of {}",
        FILLER_MARKER,
        original.unwrap_or("unknown contents")
    )
}

/// Steals parcels worth at least `min_cost` and replaces them with filler.
///
/// Stolen packages continue down the pipeline with the same sender and
/// recipient, a filler description and a declared value of zero. Nothing
/// is reported to the caller.
pub struct Thief {
    min_cost: i64,
    stolen_value: i64,
}

impl Thief {
    pub fn new(min_cost: i64) -> Self {
        Self {
            min_cost,
            stolen_value: 0,
        }
    }

    pub fn min_cost(&self) -> i64 {
        self.min_cost
    }

    /// Total declared value of everything stolen so far.
    ///
    /// Never decreases: parcels declared below zero add nothing.
    pub fn stolen_value(&self) -> i64 {
        self.stolen_value
    }
}

impl MailService for Thief {
    fn process(&mut self, item: Item) -> Result<Item, InspectionError> {
        match item {
            Item::Package(MailPackage {
                from,
                to,
                content: Some(parcel),
            }) if parcel.declared_value >= self.min_cost => {
                self.stolen_value = self
                    .stolen_value
                    .saturating_add(parcel.declared_value.max(0));
                tracing::debug!(
                    from = %from,
                    to = %to,
                    value = parcel.declared_value,
                    "Parcel substituted"
                );

                let description = substitute_description(parcel.description.as_deref());
                Ok(Item::Package(MailPackage::new(
                    from,
                    to,
                    Some(Parcel::new(description, 0)),
                )))
            }
            other => Ok(other),
        }
    }

    fn name(&self) -> &'static str {
        "thief"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
