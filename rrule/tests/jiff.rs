// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `UNTIL` bounds built from `jiff` values.

#![cfg(feature = "jiff")]

use ical_rrule::{DayOfWeek, Frequency, RecurrenceRule, Until, encode};

#[test]
fn test_until_from_civil_date_ignores_time() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    let until = Until::try_from(jiff::civil::date(2026, 10, 31)).unwrap();
    rule.set_until(until);

    assert!(rule.until().unwrap().ignores_time());
    assert_eq!(encode(&rule), "FREQ=DAILY;UNTIL=20261031");
}

#[test]
fn test_until_from_zoned_is_utc() {
    let start: jiff::Zoned = "2026-03-01T09:00:00+08:00[+08:00]".parse().unwrap();
    let mut rule = RecurrenceRule::new(Frequency::Weekly);
    rule.set_by_day([DayOfWeek::from(start.weekday())]);
    rule.set_until(Until::try_from(&start).unwrap());

    assert_eq!(
        encode(&rule),
        "FREQ=WEEKLY;UNTIL=20260301T010000Z;BYDAY=SU"
    );
}
