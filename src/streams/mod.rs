//! Single-pass byte stream utilities.
//!
//! These are independent of the mail pipeline:
//! - [`checksum`] - rotating XOR checksum
//! - [`line_endings`] - CRLF to LF normalization

pub mod checksum;
pub mod line_endings;

pub use checksum::{checksum, checksum_bytes};
pub use line_endings::{normalize_bytes, normalize_line_endings, CrlfNormalizer};
