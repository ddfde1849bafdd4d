// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{NotificationEvent, NotificationSink, RecordingSink};
use staff_cover_domain::{MonthKey, UserId, parse_date};
use time::Month;

fn confirmed_event(token: &str, dates: &[&str]) -> NotificationEvent {
    NotificationEvent::AssignmentsConfirmed {
        user_id: UserId::new(token).unwrap(),
        dates: dates.iter().map(|d| parse_date(d).unwrap()).collect(),
    }
}

fn cleared_event(token: &str) -> NotificationEvent {
    NotificationEvent::AvailabilityCleared {
        user_id: UserId::new(token).unwrap(),
        month: MonthKey::new(2025, Month::March),
    }
}

#[test]
fn test_event_kind_and_recipient() {
    let confirmed: NotificationEvent = confirmed_event("usr-1", &["2025-03-10"]);
    assert_eq!(confirmed.kind(), "assignments_confirmed");
    assert_eq!(confirmed.recipient().value(), "usr-1");

    let cleared: NotificationEvent = cleared_event("usr-2");
    assert_eq!(cleared.kind(), "availability_cleared");
    assert_eq!(cleared.recipient().value(), "usr-2");
}

#[test]
fn test_event_display_lists_dates() {
    let event: NotificationEvent = confirmed_event("usr-1", &["2025-03-10", "2025-03-12"]);
    assert_eq!(
        event.to_string(),
        "assignments confirmed for usr-1: 2025-03-10, 2025-03-12"
    );
    assert_eq!(
        cleared_event("usr-2").to_string(),
        "availability cleared for usr-2 in 2025-03"
    );
}

#[test]
fn test_recording_sink_records_in_order() {
    let sink: RecordingSink = RecordingSink::new();
    sink.deliver(&confirmed_event("usr-1", &["2025-03-10"]))
        .unwrap();
    sink.deliver(&cleared_event("usr-2")).unwrap();

    let attempted: Vec<NotificationEvent> = sink.attempted();
    assert_eq!(attempted.len(), 2);
    assert_eq!(attempted[0].recipient().value(), "usr-1");
    assert_eq!(attempted[1].recipient().value(), "usr-2");
    assert_eq!(sink.delivered().len(), 2);
}

#[test]
fn test_failing_sink_still_records_the_attempt() {
    let sink: RecordingSink = RecordingSink::failing_for(vec![UserId::new("usr-1").unwrap()]);
    assert!(sink.deliver(&cleared_event("usr-1")).is_err());
    assert!(sink.deliver(&cleared_event("usr-2")).is_ok());

    assert_eq!(sink.attempted().len(), 2);
    assert_eq!(sink.delivered().len(), 1);
    assert_eq!(sink.delivered()[0].recipient().value(), "usr-2");
}
