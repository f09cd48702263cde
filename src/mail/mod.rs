//! Item model for the mailroom pipeline.

mod item;

pub use item::{Item, MailMessage, MailPackage, Parcel};
