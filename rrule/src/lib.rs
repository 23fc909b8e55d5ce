// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Model and encode iCalendar recurrence rules (RFC 5545 Section 3.3.10).
//!
//! A [`RecurrenceRule`] checks the range of every `BY*` part when it is
//! assigned and keeps `UNTIL` and `COUNT` mutually exclusive. Encoding is
//! write-only: [`encode`] renders the canonical `RRULE` value and
//! [`formatter`] wraps it into a folded content line.
//!
//! ```
//! use ical_rrule::{Day, DayOfWeek, Frequency, RecurrenceRule};
//!
//! let mut rule = RecurrenceRule::new(Frequency::Weekly);
//! rule.set_interval(2);
//! rule.set_by_day([DayOfWeek::Monday, DayOfWeek::Wednesday]);
//! assert_eq!(rule.to_string(), "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO;BYDAY=WE");
//!
//! assert!(Day::nth(54, DayOfWeek::Sunday).is_err());
//! assert!(rule.set_by_hour([24]).is_err());
//! ```

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

#[macro_use]
mod util;

mod encoder;
mod error;
pub mod formatter;
pub mod keyword;
mod part;
mod value;

pub use crate::encoder::{encode, write_recurrence_rule};
pub use crate::error::RuleError;
pub use crate::part::{PartRange, RulePart};
pub use crate::value::{
    Bound, Day, DayOfWeek, Frequency, PropertyValue, RecurrenceRule, RecurrenceRuleBuilder, Until,
    ValueDate, ValueDateTime, ValueTime,
};
pub use strum::IntoEnumIterator;
