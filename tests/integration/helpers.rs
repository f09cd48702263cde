//! Shared helpers for integration tests

use std::path::PathBuf;
use std::sync::Arc;

use mailroom::logging::MemorySink;
use mailroom::service::handlers::{Inspector, Spy, Thief, AUSTIN_POWERS};
use mailroom::service::MailService;

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path to a named fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// A spy watching the default target, with a sink to inspect afterwards.
pub fn spy() -> (Box<dyn MailService>, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Box::new(Spy::new(AUSTIN_POWERS, sink.clone())), sink)
}

pub fn thief(min_cost: i64) -> Box<dyn MailService> {
    Box::new(Thief::new(min_cost))
}

pub fn inspector() -> Box<dyn MailService> {
    Box::new(Inspector::new())
}
