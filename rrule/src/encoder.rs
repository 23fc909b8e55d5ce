// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical text encoding of a recurrence rule.
//!
//! Rule parts are emitted in a fixed order, one `KEY=value` pair per scalar
//! part and one pair per element of a list part, joined with `;`:
//!
//! ```txt
//! FREQ=WEEKLY;INTERVAL=2;BYDAY=MO;BYDAY=WE
//! ```
//!
//! List parts repeat their key instead of using the comma-separated form of
//! RFC 5545 (`BYDAY=MO,WE`).

use std::io::{self, Write};

use strum::EnumCount;

use crate::part::RulePart;
use crate::value::{PropertyValue, RecurrenceRule};

/// One entry of the encoding schema: a rule part and how to flatten the
/// rule's value for it into tokens.
struct PartEncoder {
    part: RulePart,
    tokens: fn(&RecurrenceRule, &mut Vec<String>),
}

/// Encoding schema, in canonical output order.
static SCHEMA: [PartEncoder; RulePart::COUNT] = [
    PartEncoder {
        part: RulePart::Freq,
        tokens: |rule, out| push_one(out, Some(&rule.frequency())),
    },
    PartEncoder {
        part: RulePart::Interval,
        tokens: |rule, out| push_one(out, rule.interval().as_ref()),
    },
    PartEncoder {
        part: RulePart::Until,
        tokens: |rule, out| push_one(out, rule.until()),
    },
    PartEncoder {
        part: RulePart::Count,
        tokens: |rule, out| push_one(out, rule.count().as_ref()),
    },
    PartEncoder {
        part: RulePart::BySecond,
        tokens: |rule, out| push_all(out, rule.by_second()),
    },
    PartEncoder {
        part: RulePart::ByMinute,
        tokens: |rule, out| push_all(out, rule.by_minute()),
    },
    PartEncoder {
        part: RulePart::ByHour,
        tokens: |rule, out| push_all(out, rule.by_hour()),
    },
    PartEncoder {
        part: RulePart::ByDay,
        tokens: |rule, out| push_all(out, rule.by_day()),
    },
    PartEncoder {
        part: RulePart::ByMonthDay,
        tokens: |rule, out| push_all(out, rule.by_month_day()),
    },
    PartEncoder {
        part: RulePart::ByYearDay,
        tokens: |rule, out| push_all(out, rule.by_year_day()),
    },
    PartEncoder {
        part: RulePart::ByWeekNo,
        tokens: |rule, out| push_all(out, rule.by_week_no()),
    },
    PartEncoder {
        part: RulePart::ByMonth,
        tokens: |rule, out| push_all(out, rule.by_month()),
    },
    PartEncoder {
        part: RulePart::BySetPos,
        tokens: |rule, out| push_all(out, rule.by_set_pos()),
    },
    PartEncoder {
        part: RulePart::Wkst,
        tokens: |rule, out| push_one(out, rule.week_start().as_ref()),
    },
];

fn push_one<T: PropertyValue>(out: &mut Vec<String>, value: Option<&T>) {
    if let Some(value) = value {
        out.push(value.to_token().into_owned());
    }
}

fn push_all<T: PropertyValue>(out: &mut Vec<String>, values: &[T]) {
    out.extend(values.iter().map(|v| v.to_token().into_owned()));
}

/// Collect the `(part, token)` pairs of a rule in canonical order.
fn pairs(rule: &RecurrenceRule) -> impl Iterator<Item = (RulePart, String)> + '_ {
    SCHEMA.iter().flat_map(move |encoder| {
        let mut tokens = Vec::new();
        (encoder.tokens)(rule, &mut tokens);
        tokens.into_iter().map(move |token| (encoder.part, token))
    })
}

/// Encode a recurrence rule to its canonical text, the value of an `RRULE`
/// property.
///
/// ```
/// # use ical_rrule::{Frequency, RecurrenceRule, encode};
/// let mut rule = RecurrenceRule::new(Frequency::Daily);
/// rule.set_count(10);
/// assert_eq!(encode(&rule), "FREQ=DAILY;COUNT=10");
/// ```
#[must_use]
pub fn encode(rule: &RecurrenceRule) -> String {
    let mut buffer = String::new();
    for (i, (part, token)) in pairs(rule).enumerate() {
        if i > 0 {
            buffer.push(';');
        }
        buffer.push_str(part.name());
        buffer.push('=');
        buffer.push_str(&token);
    }
    buffer
}

/// Write the canonical text of a recurrence rule to `w`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_recurrence_rule<W: Write + ?Sized>(w: &mut W, rule: &RecurrenceRule) -> io::Result<()> {
    for (i, (part, token)) in pairs(rule).enumerate() {
        if i > 0 {
            write!(w, ";")?;
        }
        write!(w, "{part}={token}")?;
    }
    Ok(())
}
