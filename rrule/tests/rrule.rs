// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for recurrence rule validation and encoding.

use ical_rrule::{
    Bound, Day, DayOfWeek, Frequency, IntoEnumIterator, PropertyValue, RecurrenceRule, RuleError,
    RulePart, Until, ValueDate, ValueDateTime, ValueTime, encode,
};

fn until_utc() -> Until {
    let date = ValueDate::new(1997, 12, 24).unwrap();
    let time = ValueTime::new(0, 0, 0, true).unwrap();
    Until::DateTime(ValueDateTime::new(date, time))
}

/// Keys of the encoded rule, in output order.
fn keys(encoded: &str) -> Vec<&str> {
    encoded
        .split(';')
        .map(|pair| pair.split_once('=').unwrap().0)
        .collect()
}

#[test]
fn test_weekly_every_other_monday_and_wednesday() {
    let mut rule = RecurrenceRule::new(Frequency::Weekly);
    rule.set_interval(2);
    rule.set_by_day([Day::every(DayOfWeek::Monday), Day::every(DayOfWeek::Wednesday)]);

    assert_eq!(encode(&rule), "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO;BYDAY=WE");
}

#[test]
fn test_monthly_last_friday() {
    let mut rule = RecurrenceRule::new(Frequency::Monthly);
    rule.set_by_day([DayOfWeek::Friday]);
    rule.set_by_set_pos([-1]).unwrap();

    assert_eq!(encode(&rule), "FREQ=MONTHLY;BYDAY=FR;BYSETPOS=-1");
}

#[test]
fn test_until_set_after_count_drops_count() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    rule.set_count(10);
    rule.set_until(until_utc());

    let encoded = encode(&rule);
    assert_eq!(encoded, "FREQ=DAILY;UNTIL=19971224T000000Z");
    assert!(!encoded.contains("COUNT"));
}

#[test]
fn test_count_set_after_until_drops_until() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    rule.set_until(until_utc());
    rule.set_count(10);

    assert_eq!(rule.until(), None);
    assert_eq!(encode(&rule), "FREQ=DAILY;COUNT=10");
}

#[test]
fn test_frequency_only() {
    let rule = RecurrenceRule::new(Frequency::Yearly);
    assert_eq!(encode(&rule), "FREQ=YEARLY");
    assert_eq!(rule.to_string(), "FREQ=YEARLY");
    assert_eq!(rule.to_token(), "FREQ=YEARLY");
}

#[test]
fn test_every_frequency_token() {
    for freq in Frequency::iter() {
        let rule = RecurrenceRule::new(freq);
        assert_eq!(encode(&rule), format!("FREQ={}", freq.name()));
    }
}

#[test]
fn test_date_only_until() {
    let mut rule = RecurrenceRule::new(Frequency::Weekly);
    rule.set_until(ValueDate::new(2025, 3, 1).unwrap());
    assert!(rule.until().unwrap().ignores_time());
    assert_eq!(encode(&rule), "FREQ=WEEKLY;UNTIL=20250301");
}

#[test]
fn test_output_order_is_independent_of_assignment_order() {
    let canonical = [
        "FREQ",
        "INTERVAL",
        "UNTIL",
        "COUNT",
        "BYSECOND",
        "BYMINUTE",
        "BYHOUR",
        "BYDAY",
        "BYMONTHDAY",
        "BYYEARDAY",
        "BYWEEKNO",
        "BYMONTH",
        "BYSETPOS",
        "WKST",
    ];

    let mut forward = RecurrenceRule::new(Frequency::Yearly);
    forward.set_interval(1);
    forward.set_count(3);
    forward.set_by_second([0]).unwrap();
    forward.set_by_minute([1]).unwrap();
    forward.set_by_hour([2]).unwrap();
    forward.set_by_day([DayOfWeek::Tuesday]);
    forward.set_by_month_day([3]).unwrap();
    forward.set_by_year_day([4]).unwrap();
    forward.set_by_week_no([5]).unwrap();
    forward.set_by_month([6]).unwrap();
    forward.set_by_set_pos([7]).unwrap();
    forward.set_week_start(DayOfWeek::Monday);

    let mut backward = RecurrenceRule::new(Frequency::Yearly);
    backward.set_week_start(DayOfWeek::Monday);
    backward.set_by_set_pos([7]).unwrap();
    backward.set_by_month([6]).unwrap();
    backward.set_by_week_no([5]).unwrap();
    backward.set_by_year_day([4]).unwrap();
    backward.set_by_month_day([3]).unwrap();
    backward.set_by_day([DayOfWeek::Tuesday]);
    backward.set_by_hour([2]).unwrap();
    backward.set_by_minute([1]).unwrap();
    backward.set_by_second([0]).unwrap();
    backward.set_count(3);
    backward.set_interval(1);

    let expected: Vec<_> = canonical
        .iter()
        .copied()
        .filter(|key| *key != "UNTIL")
        .collect();
    assert_eq!(keys(&encode(&forward)), expected);
    assert_eq!(encode(&forward), encode(&backward));

    // Every key produced is in canonical order when UNTIL replaces COUNT
    backward.set_until(until_utc());
    let produced = encode(&backward);
    let positions: Vec<_> = keys(&produced)
        .iter()
        .map(|key| canonical.iter().position(|k| k == key).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_until_and_count_never_both_rendered() {
    let mut rule = RecurrenceRule::new(Frequency::Hourly);
    for step in 0..6 {
        if step % 2 == 0 {
            rule.set_count(step);
        } else {
            rule.set_until(until_utc());
        }
        let encoded = encode(&rule);
        assert!(!(encoded.contains("UNTIL=") && encoded.contains("COUNT=")));
    }
    rule.set_bound(Bound::None);
    assert_eq!(encode(&rule), "FREQ=HOURLY");
}

#[test]
fn test_empty_lists_produce_no_pairs() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    rule.set_by_hour([9]).unwrap();
    rule.set_by_day([DayOfWeek::Saturday]);
    rule.set_by_hour(Vec::<u8>::new()).unwrap();
    rule.set_by_day(Vec::<Day>::new());
    rule.set_by_month_day(Vec::<i8>::new()).unwrap();

    assert_eq!(encode(&rule), "FREQ=DAILY");
}

#[test]
fn test_rejected_list_keeps_previous_value() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    rule.set_by_minute([0, 30]).unwrap();
    let before = encode(&rule);

    for _ in 0..3 {
        let err = rule.set_by_minute([15, 60, 45]).unwrap_err();
        assert!(matches!(
            err,
            RuleError::OutOfRange {
                part: RulePart::ByMinute,
                value: 60,
                ..
            }
        ));
        assert_eq!(rule.by_minute(), [0, 30]);
        assert_eq!(encode(&rule), before);
    }
}

#[test]
fn test_day_occurrence_bounds() {
    assert!(Day::nth(54, DayOfWeek::Sunday).is_err());
    assert!(Day::new(DayOfWeek::Sunday, Some(54)).is_err());

    let last_sunday = Day::nth(-1, DayOfWeek::Sunday).unwrap();
    assert_eq!(last_sunday.to_token(), "-1SU");

    let mut rule = RecurrenceRule::new(Frequency::Monthly);
    rule.set_by_day([last_sunday, Day::nth(2, DayOfWeek::Monday).unwrap()]);
    assert_eq!(encode(&rule), "FREQ=MONTHLY;BYDAY=-1SU;BYDAY=2MO");
}

#[test]
fn test_builder_matches_scenarios() {
    let rule = RecurrenceRule::builder(Frequency::Weekly)
        .by_day([DayOfWeek::Monday, DayOfWeek::Wednesday])
        .interval(2)
        .build()
        .unwrap();
    assert_eq!(rule.to_string(), "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO;BYDAY=WE");

    let errors = RecurrenceRule::builder(Frequency::Daily)
        .by_hour([25])
        .by_week_no([0, 54])
        .build()
        .unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.part().is_some()));
}

#[test]
fn test_rfc_example_yearly_in_january() {
    // Every Sunday in January at 8:30 and 9:30, every other year
    let rule = RecurrenceRule::builder(Frequency::Yearly)
        .interval(2)
        .by_month([1])
        .by_day([DayOfWeek::Sunday])
        .by_hour([8, 9])
        .by_minute([30])
        .build()
        .unwrap();
    assert_eq!(
        encode(&rule),
        "FREQ=YEARLY;INTERVAL=2;BYMINUTE=30;BYHOUR=8;BYHOUR=9;BYDAY=SU;BYMONTH=1"
    );
}
