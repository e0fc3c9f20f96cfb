mod common;

use chrono::NaiveTime;
use domain_order::model::vo::FormField;
use service_order::{validate, validate_required};

fn time(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

#[test]
fn test_no_schedule_is_valid() {
    let errors = validate::<NaiveTime>(None, None, &common::messages());

    assert!(errors.is_empty());
}

#[test]
fn test_end_without_start() {
    let errors = validate(None, time(9, 0), &common::messages());

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FormField::ScheduledStartTime),
        Some("Start time missing while end time given.")
    );
}

#[test]
fn test_start_without_end() {
    let errors = validate(time(9, 0), None, &common::messages());

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FormField::ScheduledEndTime),
        Some("End time missing while start time given.")
    );
}

#[test]
fn test_start_after_end() {
    let errors = validate(time(9, 0), time(8, 0), &common::messages());

    assert_eq!(errors.len(), 1);
    let message = errors.get(FormField::ScheduledStartTime).unwrap();
    assert!(message.contains("09:00"));
    assert!(message.contains("08:00"));
    assert_eq!(
        message,
        "Start time (09:00:00) must be earlier than end time (08:00:00)."
    );
}

#[test]
fn test_equal_bounds_rejected() {
    let errors = validate(time(8, 0), time(8, 0), &common::messages());

    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::ScheduledStartTime]);
}

#[test]
fn test_start_before_end() {
    let errors = validate(time(8, 0), time(9, 0), &common::messages());

    assert!(errors.is_empty());
}

#[test]
fn test_idempotent() {
    let messages = common::messages();
    let cases = [
        (None, None),
        (None, time(8, 0)),
        (time(8, 0), None),
        (time(9, 0), time(8, 0)),
        (time(8, 0), time(9, 0)),
    ];

    for (start, end) in cases {
        assert_eq!(validate(start, end, &messages), validate(start, end, &messages));
    }
}

#[test]
fn test_required_selections() {
    let messages = common::messages();

    let missing = validate_required(None, None, &messages);
    let present = validate_required(Some(1), Some(1), &messages);

    assert_eq!(missing.get(FormField::OrderType), Some("Select an order type."));
    assert_eq!(missing.get(FormField::OrderStatus), Some("Select an order status."));
    assert!(present.is_empty());
}
