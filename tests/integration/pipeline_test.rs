//! Pipeline scenarios across handlers

use mailroom::logging::Severity;
use mailroom::service::{FailureKind, MailService, Thief, UntrustworthyMailWorker};
use mailroom::{Item, Parcel};

use crate::helpers::{inspector, spy, thief};

fn gold_bars() -> Item {
    Item::package("A", "B", Some(Parcel::new("gold bars", 100)))
}

#[test]
fn spy_logs_target_correspondence_once() {
    let (spy, sink) = spy();
    let mut worker = UntrustworthyMailWorker::new(vec![spy]);
    let item = Item::message("Austin Powers", "Basil", "hi");

    let delivered = worker.process(item.clone()).unwrap();

    assert_eq!(delivered, item);
    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].severity, Severity::High);
    assert_eq!(worker.real_mail_service().delivered(), 1);
}

#[test]
fn thief_substitutes_valuable_package() {
    let mut worker = UntrustworthyMailWorker::new(vec![thief(50)]);

    let delivered = worker.process(gold_bars()).unwrap();

    insta::assert_debug_snapshot!("thief_substitutes_valuable_package", delivered);
    assert_eq!(worker.service::<Thief>().unwrap().stolen_value(), 100);
}

#[test]
fn inspector_after_thief_detects_tampering() {
    let mut worker = UntrustworthyMailWorker::new(vec![thief(50), inspector()]);

    let err = worker.process(gold_bars()).unwrap_err();

    assert_eq!(err.kind(), FailureKind::Tampered);
    assert_eq!(worker.service::<Thief>().unwrap().stolen_value(), 100);
    assert_eq!(worker.real_mail_service().delivered(), 0);
}

#[test]
fn inspector_before_thief_misses_tampering() {
    let mut worker = UntrustworthyMailWorker::new(vec![inspector(), thief(50)]);

    let delivered = worker.process(gold_bars()).unwrap();

    let Item::Package(package) = delivered else {
        panic!("expected a package");
    };
    assert_eq!(package.content.unwrap().declared_value, 0);
    assert_eq!(worker.real_mail_service().delivered(), 1);
}

#[test]
fn weapons_are_rejected_before_delivery() {
    let mut worker = UntrustworthyMailWorker::new(vec![inspector()]);
    let item = Item::package("A", "B", Some(Parcel::new("concealed weapons", 0)));

    let err = worker.process(item).unwrap_err();

    assert_eq!(err.kind(), FailureKind::IllegalContent);
    assert_eq!(worker.real_mail_service().delivered(), 0);
}

#[test]
fn illegal_content_wins_over_tampering() {
    let mut worker = UntrustworthyMailWorker::new(vec![thief(1), inspector()]);
    let item = Item::package("A", "B", Some(Parcel::new("banned substance", 10)));

    let err = worker.process(item).unwrap_err();

    assert_eq!(err.kind(), FailureKind::IllegalContent);
}

#[test]
fn failure_does_not_reach_later_spy() {
    let (spy, sink) = spy();
    let mut worker = UntrustworthyMailWorker::new(vec![inspector(), spy]);

    let _ = worker.process(Item::package("A", "B", Some(Parcel::new("weapons", 1))));
    worker
        .process(Item::message("Basil", "Vanessa", "hi"))
        .unwrap();

    assert_eq!(sink.records().len(), 1);
    assert_eq!(worker.real_mail_service().delivered(), 1);
}

#[test]
fn thief_total_sums_stolen_values() {
    let mut worker = UntrustworthyMailWorker::new(vec![thief(50)]);
    let values = [50, 10, 75, 200, 49];

    for value in values {
        worker
            .process(Item::package("A", "B", Some(Parcel::new("stuff", value))))
            .unwrap();
    }

    let expected: i64 = values.iter().filter(|&&v| v >= 50).sum();
    assert_eq!(worker.service::<Thief>().unwrap().stolen_value(), expected);
    assert_eq!(worker.real_mail_service().delivered(), values.len());
}

#[test]
fn non_matching_items_pass_every_handler_unchanged() {
    let (spy, _sink) = spy();
    let mut worker = UntrustworthyMailWorker::new(vec![spy, thief(0), inspector()]);
    let items = [
        Item::message("Basil", "Vanessa", "weapons"),
        Item::package("A", "B", None),
        Item::package("A", "B", Some(Parcel::undescribed(-1))),
    ];

    for item in items {
        assert_eq!(worker.process(item.clone()).unwrap(), item);
    }
}
