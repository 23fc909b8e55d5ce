// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::error::{RuleError, collect_range_errors};
use crate::part::RulePart;
use crate::value::{Bound, Day, DayOfWeek, Frequency, RecurrenceRule, Until};

/// Builder for a [`RecurrenceRule`] that validates every part at once.
///
/// Values are accepted as given and only checked by [`build`](Self::build),
/// which reports every violation instead of stopping at the first one.
///
/// ```
/// # use ical_rrule::{DayOfWeek, Frequency, RecurrenceRule};
/// let rule = RecurrenceRule::builder(Frequency::Monthly)
///     .by_day([DayOfWeek::Friday])
///     .by_set_pos([-1])
///     .build()
///     .unwrap();
/// assert_eq!(rule.to_string(), "FREQ=MONTHLY;BYDAY=FR;BYSETPOS=-1");
/// ```
#[derive(Debug, Clone)]
pub struct RecurrenceRuleBuilder {
    rule: RecurrenceRule,
}

impl RecurrenceRuleBuilder {
    /// Start a rule with the given frequency.
    #[must_use]
    pub const fn new(freq: Frequency) -> Self {
        Self {
            rule: RecurrenceRule::new(freq),
        }
    }

    /// Set the interval between recurrences.
    #[must_use]
    pub fn interval(mut self, interval: u32) -> Self {
        self.rule.interval = Some(interval);
        self
    }

    /// Bound the recurrence by a date, replacing any count.
    #[must_use]
    pub fn until(mut self, until: impl Into<Until>) -> Self {
        self.rule.bound = Bound::Until(until.into());
        self
    }

    /// Bound the recurrence by a number of occurrences, replacing any until
    /// date.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.rule.bound = Bound::Count(count);
        self
    }

    /// Set the seconds.
    #[must_use]
    pub fn by_second(mut self, values: impl Into<Vec<u8>>) -> Self {
        self.rule.by_second = values.into();
        self
    }

    /// Set the minutes.
    #[must_use]
    pub fn by_minute(mut self, values: impl Into<Vec<u8>>) -> Self {
        self.rule.by_minute = values.into();
        self
    }

    /// Set the hours.
    #[must_use]
    pub fn by_hour(mut self, values: impl Into<Vec<u8>>) -> Self {
        self.rule.by_hour = values.into();
        self
    }

    /// Set the weekdays.
    #[must_use]
    pub fn by_day<D: Into<Day>>(mut self, days: impl IntoIterator<Item = D>) -> Self {
        self.rule.set_by_day(days);
        self
    }

    /// Set the days of the month.
    #[must_use]
    pub fn by_month_day(mut self, values: impl Into<Vec<i8>>) -> Self {
        self.rule.by_month_day = values.into();
        self
    }

    /// Set the days of the year.
    #[must_use]
    pub fn by_year_day(mut self, values: impl Into<Vec<i16>>) -> Self {
        self.rule.by_year_day = values.into();
        self
    }

    /// Set the weeks of the year.
    #[must_use]
    pub fn by_week_no(mut self, values: impl Into<Vec<i8>>) -> Self {
        self.rule.by_week_no = values.into();
        self
    }

    /// Set the months.
    #[must_use]
    pub fn by_month(mut self, values: impl Into<Vec<u8>>) -> Self {
        self.rule.by_month = values.into();
        self
    }

    /// Set the set positions.
    #[must_use]
    pub fn by_set_pos(mut self, values: impl Into<Vec<i16>>) -> Self {
        self.rule.by_set_pos = values.into();
        self
    }

    /// Set the start day of the workweek.
    #[must_use]
    pub fn week_start(mut self, wkst: DayOfWeek) -> Self {
        self.rule.wkst = Some(wkst);
        self
    }

    /// Validate all parts and produce the rule.
    ///
    /// # Errors
    ///
    /// Returns one [`RuleError::OutOfRange`] per offending element, in
    /// canonical part order.
    pub fn build(self) -> Result<RecurrenceRule, Vec<RuleError>> {
        let rule = self.rule;
        let mut errors = Vec::new();
        collect_range_errors(RulePart::BySecond, &rule.by_second, &mut errors);
        collect_range_errors(RulePart::ByMinute, &rule.by_minute, &mut errors);
        collect_range_errors(RulePart::ByHour, &rule.by_hour, &mut errors);
        collect_range_errors(RulePart::ByMonthDay, &rule.by_month_day, &mut errors);
        collect_range_errors(RulePart::ByYearDay, &rule.by_year_day, &mut errors);
        collect_range_errors(RulePart::ByWeekNo, &rule.by_week_no, &mut errors);
        collect_range_errors(RulePart::ByMonth, &rule.by_month, &mut errors);
        collect_range_errors(RulePart::BySetPos, &rule.by_set_pos, &mut errors);

        if errors.is_empty() {
            Ok(rule)
        } else {
            tracing::debug!(errors = errors.len(), "rejected recurrence rule");
            Err(errors)
        }
    }
}
