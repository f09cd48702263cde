//! Config file loading and pipeline construction

use std::sync::Arc;

use mailroom::config::HandlerKind;
use mailroom::logging::{MemorySink, Severity};
use mailroom::service::{FailureKind, MailService, Thief};
use mailroom::{Config, Item, Parcel};
use tempfile::TempDir;

#[test]
fn load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[pipeline]\nhandlers = [\"thief\", \"inspector\"]\n\n[thief]\nmin_cost = 10\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(
        config.pipeline.handlers,
        vec![HandlerKind::Thief, HandlerKind::Inspector]
    );
    assert_eq!(config.thief.min_cost, 10);
}

#[test]
fn load_from_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn configured_spy_watches_custom_name() {
    let config = Config::parse("[pipeline]\nhandlers = [\"spy\"]\n[spy]\nwatched = \"Dr. Evil\"\n")
        .unwrap();
    let sink = Arc::new(MemorySink::new());
    let mut worker = config.build_worker(sink.clone());

    worker
        .process(Item::message("Dr. Evil", "Number Two", "one million dollars"))
        .unwrap();
    worker
        .process(Item::message("Austin Powers", "Basil", "groovy"))
        .unwrap();

    let records = sink.records();
    assert_eq!(records[0].severity, Severity::High);
    assert!(records[0].message.contains("one million dollars"));
    assert_eq!(records[1].severity, Severity::Low);
}

#[test]
fn default_pipeline_steals_then_rejects() {
    let mut worker = Config::default().build_worker(Arc::new(MemorySink::new()));

    let err = worker
        .process(Item::package("A", "B", Some(Parcel::new("gold bars", 100))))
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::Tampered);
    assert_eq!(worker.service::<Thief>().unwrap().stolen_value(), 100);
    assert_eq!(worker.real_mail_service().delivered(), 0);
}
