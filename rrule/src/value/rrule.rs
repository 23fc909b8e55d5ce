// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule type definitions for iCalendar.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::encoder::encode;
use crate::error::{RuleError, check_range};
use crate::keyword::{
    KW_RRULE_FREQ_DAILY, KW_RRULE_FREQ_HOURLY, KW_RRULE_FREQ_MINUTELY, KW_RRULE_FREQ_MONTHLY,
    KW_RRULE_FREQ_SECONDLY, KW_RRULE_FREQ_WEEKLY, KW_RRULE_FREQ_YEARLY,
};
use crate::part::RulePart;
use crate::value::{Day, DayOfWeek, PropertyValue, RecurrenceRuleBuilder, Until};

define_keyword_enum! {
    /// Recurrence frequency
    ///
    /// ```txt
    /// freq        = "SECONDLY" / "MINUTELY" / "HOURLY" / "DAILY"
    ///             / "WEEKLY" / "MONTHLY" / "YEARLY"
    /// ```
    #[expect(missing_docs)]
    enum Frequency {
        Secondly => KW_RRULE_FREQ_SECONDLY,
        Minutely => KW_RRULE_FREQ_MINUTELY,
        Hourly => KW_RRULE_FREQ_HOURLY,
        Daily => KW_RRULE_FREQ_DAILY,
        Weekly => KW_RRULE_FREQ_WEEKLY,
        Monthly => KW_RRULE_FREQ_MONTHLY,
        Yearly => KW_RRULE_FREQ_YEARLY,
    }
}

impl PropertyValue for Frequency {
    fn to_token(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name())
    }
}

/// How a recurrence ends.
///
/// `UNTIL` and `COUNT` must not occur in the same rule, so the two are
/// variants of one value rather than two fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Bound {
    /// The recurrence repeats forever
    #[default]
    None,
    /// The recurrence ends at the given date or date-time, inclusive
    Until(Until),
    /// The recurrence ends after the given number of occurrences
    Count(u32),
}

impl Bound {
    /// The `UNTIL` value, if the recurrence is bounded by a date.
    #[must_use]
    pub const fn until(&self) -> Option<&Until> {
        match self {
            Self::Until(until) => Some(until),
            Self::None | Self::Count(_) => None,
        }
    }

    /// The `COUNT` value, if the recurrence is bounded by a count.
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        match self {
            Self::Count(count) => Some(*count),
            Self::None | Self::Until(_) => None,
        }
    }
}

/// Recurrence rule, the value of the `RRULE` property.
///
/// ```txt
/// recur           = recur-rule-part *( ";" recur-rule-part )
///                 ;
///                 ; The FREQ rule part is REQUIRED,
///                 ; but MUST NOT occur more than once.
///                 ;
///                 ; The UNTIL or COUNT rule parts are OPTIONAL,
///                 ; but they MUST NOT occur in the same 'recur'.
/// ```
///
/// Every `BY*` list is checked against the range of its own part whenever it
/// is assigned; a rejected assignment keeps the previous list. An empty list
/// means the part is absent. Constraints between parts, such as `BYSETPOS`
/// requiring another `BY*` part, are not checked.
///
/// Rendering with [`Display`] or [`PropertyValue::to_token`] produces the
/// canonical text, see [`encode`](crate::encode).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurrenceRule {
    pub(super) freq: Frequency,
    pub(super) interval: Option<u32>,
    pub(super) bound: Bound,
    pub(super) by_second: Vec<u8>,
    pub(super) by_minute: Vec<u8>,
    pub(super) by_hour: Vec<u8>,
    pub(super) by_day: Vec<Day>,
    pub(super) by_month_day: Vec<i8>,
    pub(super) by_year_day: Vec<i16>,
    pub(super) by_week_no: Vec<i8>,
    pub(super) by_month: Vec<u8>,
    pub(super) by_set_pos: Vec<i16>,
    pub(super) wkst: Option<DayOfWeek>,
}

impl RecurrenceRule {
    /// Create a rule with the given frequency and no other part.
    #[must_use]
    pub const fn new(freq: Frequency) -> Self {
        Self {
            freq,
            interval: None,
            bound: Bound::None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            wkst: None,
        }
    }

    /// Start building a rule whose parts are validated all at once.
    #[must_use]
    pub const fn builder(freq: Frequency) -> RecurrenceRuleBuilder {
        RecurrenceRuleBuilder::new(freq)
    }

    /// Frequency of recurrence
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.freq
    }

    /// Interval between recurrences, absent means 1
    #[must_use]
    pub const fn interval(&self) -> Option<u32> {
        self.interval
    }

    /// How the recurrence ends
    #[must_use]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }

    /// Until date for recurrence
    #[must_use]
    pub const fn until(&self) -> Option<&Until> {
        self.bound.until()
    }

    /// Number of occurrences
    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        self.bound.count()
    }

    /// Second specifier
    #[must_use]
    pub fn by_second(&self) -> &[u8] {
        &self.by_second
    }

    /// Minute specifier
    #[must_use]
    pub fn by_minute(&self) -> &[u8] {
        &self.by_minute
    }

    /// Hour specifier
    #[must_use]
    pub fn by_hour(&self) -> &[u8] {
        &self.by_hour
    }

    /// Day of week specifier
    #[must_use]
    pub fn by_day(&self) -> &[Day] {
        &self.by_day
    }

    /// Day of month specifier
    #[must_use]
    pub fn by_month_day(&self) -> &[i8] {
        &self.by_month_day
    }

    /// Day of year specifier
    #[must_use]
    pub fn by_year_day(&self) -> &[i16] {
        &self.by_year_day
    }

    /// Week number specifier
    #[must_use]
    pub fn by_week_no(&self) -> &[i8] {
        &self.by_week_no
    }

    /// Month specifier
    #[must_use]
    pub fn by_month(&self) -> &[u8] {
        &self.by_month
    }

    /// Position within the set of occurrences in the interval
    #[must_use]
    pub fn by_set_pos(&self) -> &[i16] {
        &self.by_set_pos
    }

    /// Start day of week, absent means Monday
    #[must_use]
    pub const fn week_start(&self) -> Option<DayOfWeek> {
        self.wkst
    }

    /// Set the frequency.
    pub fn set_frequency(&mut self, freq: Frequency) {
        self.freq = freq;
    }

    /// Set or clear the interval.
    pub fn set_interval(&mut self, interval: impl Into<Option<u32>>) {
        self.interval = interval.into();
    }

    /// Bound the recurrence by a date, replacing any count.
    pub fn set_until(&mut self, until: impl Into<Until>) {
        self.bound = Bound::Until(until.into());
    }

    /// Bound the recurrence by a number of occurrences, replacing any until
    /// date.
    pub fn set_count(&mut self, count: u32) {
        self.bound = Bound::Count(count);
    }

    /// Replace the bound as a whole.
    pub fn set_bound(&mut self, bound: Bound) {
        self.bound = bound;
    }

    /// Let the recurrence repeat forever.
    pub fn clear_bound(&mut self) {
        self.bound = Bound::None;
    }

    /// Set the seconds, each within `0..=60`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_second(&mut self, values: impl Into<Vec<u8>>) -> Result<(), RuleError> {
        assign(RulePart::BySecond, &mut self.by_second, values.into())
    }

    /// Set the minutes, each within `0..=59`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_minute(&mut self, values: impl Into<Vec<u8>>) -> Result<(), RuleError> {
        assign(RulePart::ByMinute, &mut self.by_minute, values.into())
    }

    /// Set the hours, each within `0..=23`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_hour(&mut self, values: impl Into<Vec<u8>>) -> Result<(), RuleError> {
        assign(RulePart::ByHour, &mut self.by_hour, values.into())
    }

    /// Set the weekdays. [`Day`] validates its own occurrence.
    pub fn set_by_day<D: Into<Day>>(&mut self, days: impl IntoIterator<Item = D>) {
        self.by_day = days.into_iter().map(Into::into).collect();
    }

    /// Set the days of the month, each with a magnitude within `1..=31`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_month_day(&mut self, values: impl Into<Vec<i8>>) -> Result<(), RuleError> {
        assign(RulePart::ByMonthDay, &mut self.by_month_day, values.into())
    }

    /// Set the days of the year, each with a magnitude within `1..=366`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_year_day(&mut self, values: impl Into<Vec<i16>>) -> Result<(), RuleError> {
        assign(RulePart::ByYearDay, &mut self.by_year_day, values.into())
    }

    /// Set the weeks of the year, each with a magnitude within `1..=53`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_week_no(&mut self, values: impl Into<Vec<i8>>) -> Result<(), RuleError> {
        assign(RulePart::ByWeekNo, &mut self.by_week_no, values.into())
    }

    /// Set the months, each within `1..=12`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_month(&mut self, values: impl Into<Vec<u8>>) -> Result<(), RuleError> {
        assign(RulePart::ByMonth, &mut self.by_month, values.into())
    }

    /// Set the set positions, each with a magnitude within `1..=366`.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] for the first offending value; the
    /// previous list is kept.
    pub fn set_by_set_pos(&mut self, values: impl Into<Vec<i16>>) -> Result<(), RuleError> {
        assign(RulePart::BySetPos, &mut self.by_set_pos, values.into())
    }

    /// Set or clear the start day of the workweek.
    pub fn set_week_start(&mut self, wkst: impl Into<Option<DayOfWeek>>) {
        self.wkst = wkst.into();
    }
}

fn assign<T>(part: RulePart, slot: &mut Vec<T>, values: Vec<T>) -> Result<(), RuleError>
where
    T: Copy + Into<i32>,
{
    if let Err(err) = check_range(part, &values) {
        tracing::debug!(%part, %err, "rejected rule part assignment");
        return Err(err);
    }
    *slot = values;
    Ok(())
}

impl PropertyValue for RecurrenceRule {
    fn to_token(&self) -> Cow<'_, str> {
        Cow::Owned(encode(self))
    }
}

impl Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}
