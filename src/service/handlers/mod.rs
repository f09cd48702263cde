//! Inspection handlers.

mod inspector;
mod spy;
mod thief;

pub use inspector::{Inspector, BANNED_SUBSTANCE, WEAPONS};
pub use spy::{Spy, AUSTIN_POWERS};
pub use thief::{substitute_description, Thief, FILLER_MARKER};
