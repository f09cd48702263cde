//! Mailroom - a postal processing pipeline.
//!
//! Items ([`Item`]) pass through an ordered list of [`MailService`] stages
//! held by an [`UntrustworthyMailWorker`], then reach the terminal
//! [`RealMailService`]. Any stage may abort with an [`InspectionError`].
//!
//! # Module Structure
//!
//! - [`mail`] - messages, packages and parcels
//! - [`service`] - handler trait, handlers, delivery and the worker
//! - [`logging`] - log sinks for observing handlers
//! - [`config`] - TOML pipeline configuration
//! - [`streams`] - standalone byte stream utilities
//! - [`cli`] - command-line definitions

pub mod cli;
pub mod config;
pub mod logging;
pub mod mail;
pub mod service;
pub mod streams;

pub use config::Config;
pub use mail::{Item, MailMessage, MailPackage, Parcel};
pub use service::{
    FailureKind, InspectionError, MailService, RealMailService, UntrustworthyMailWorker,
};
