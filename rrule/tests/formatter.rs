// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the `RRULE` content line formatter.

use ical_rrule::formatter::{FoldingStyle, FormatOptions, Formatter, format};
use ical_rrule::{DayOfWeek, Frequency, RecurrenceRule, write_recurrence_rule};

#[test]
fn test_format_creates_crlf_line_ending() {
    let mut rule = RecurrenceRule::new(Frequency::Daily);
    rule.set_count(10);

    let formatted = format(&rule).unwrap();
    assert_eq!(formatted, "RRULE:FREQ=DAILY;COUNT=10\r\n");
}

#[test]
fn test_format_folds_long_lines() {
    let mut rule = RecurrenceRule::new(Frequency::Yearly);
    rule.set_by_month([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])
        .unwrap();

    let formatted = format(&rule).unwrap();
    for line in formatted.split("\r\n").filter(|l| !l.is_empty()) {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }
    assert_eq!(
        formatted.replace("\r\n ", ""),
        format!("RRULE:{rule}\r\n")
    );
}

#[test]
fn test_write_with_options() {
    let mut rule = RecurrenceRule::new(Frequency::Weekly);
    rule.set_by_day([DayOfWeek::Saturday, DayOfWeek::Sunday]);

    let options = FormatOptions::default()
        .folding(Some(30))
        .folding_style(FoldingStyle::Tab);
    let mut buffer = Vec::new();
    options.write(&rule, &mut buffer).unwrap();
    let formatted = String::from_utf8(buffer).unwrap();

    assert_eq!(
        formatted,
        "RRULE:FREQ=WEEKLY;BYDAY=SA;BYD\r\n\tAY=SU\r\n"
    );
}

#[test]
fn test_formatter_writes_several_lines() {
    let mut formatter = Formatter::new(Vec::new(), FormatOptions::default());
    let mut rule = RecurrenceRule::new(Frequency::Monthly);
    rule.set_by_month_day([-1]).unwrap();
    formatter.write_rrule(&rule).unwrap();
    rule.set_by_month_day([1]).unwrap();
    formatter.write_rrule(&rule).unwrap();

    let output = String::from_utf8(formatter.into_writer()).unwrap();
    assert_eq!(
        output,
        "RRULE:FREQ=MONTHLY;BYMONTHDAY=-1\r\nRRULE:FREQ=MONTHLY;BYMONTHDAY=1\r\n"
    );
}

#[test]
fn test_bare_value_writer() {
    let mut rule = RecurrenceRule::new(Frequency::Minutely);
    rule.set_interval(15);

    let mut buffer = Vec::new();
    write_recurrence_rule(&mut buffer, &rule).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "FREQ=MINUTELY;INTERVAL=15");
}
