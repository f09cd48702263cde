//! Mail handling services: inspection handlers, delivery and the worker
//! that chains them.
//!
//! # Module Structure
//!
//! - [`handler`] - the [`MailService`] trait every stage implements
//! - [`handlers`] - spy, thief and inspector stages
//! - [`delivery`] - the terminal [`RealMailService`]
//! - [`worker`] - [`UntrustworthyMailWorker`], which chains stages in order
//! - [`error`] - failure kinds raised by inspection

pub mod delivery;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod worker;

pub use delivery::RealMailService;
pub use error::{BoxError, FailureKind, InspectionError};
pub use handler::MailService;
pub use handlers::{Inspector, Spy, Thief};
pub use worker::UntrustworthyMailWorker;
