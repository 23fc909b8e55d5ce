// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Weekdays and weekday occurrences used by `BYDAY` and `WKST`.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::error::RuleError;
use crate::keyword::{KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE};
use crate::part::RulePart;
use crate::value::PropertyValue;

define_keyword_enum! {
    /// Day of the week
    enum DayOfWeek {
        /// Monday, `MO`
        Monday => KW_DAY_MO,
        /// Tuesday, `TU`
        Tuesday => KW_DAY_TU,
        /// Wednesday, `WE`
        Wednesday => KW_DAY_WE,
        /// Thursday, `TH`
        Thursday => KW_DAY_TH,
        /// Friday, `FR`
        Friday => KW_DAY_FR,
        /// Saturday, `SA`
        Saturday => KW_DAY_SA,
        /// Sunday, `SU`
        Sunday => KW_DAY_SU,
    }
}

impl PropertyValue for DayOfWeek {
    fn to_token(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.name())
    }
}

#[cfg(feature = "jiff")]
impl From<jiff::civil::Weekday> for DayOfWeek {
    fn from(value: jiff::civil::Weekday) -> Self {
        use jiff::civil::Weekday;
        match value {
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
            Weekday::Sunday => Self::Sunday,
        }
    }
}

#[cfg(feature = "jiff")]
impl From<DayOfWeek> for jiff::civil::Weekday {
    fn from(value: DayOfWeek) -> Self {
        match value {
            DayOfWeek::Monday => Self::Monday,
            DayOfWeek::Tuesday => Self::Tuesday,
            DayOfWeek::Wednesday => Self::Wednesday,
            DayOfWeek::Thursday => Self::Thursday,
            DayOfWeek::Friday => Self::Friday,
            DayOfWeek::Saturday => Self::Saturday,
            DayOfWeek::Sunday => Self::Sunday,
        }
    }
}

/// Day of week with optional occurrence, the element of `BYDAY`.
///
/// ```txt
/// weekdaynum  = [[plus / minus] ordwk] weekday
/// ordwk       = 1*2DIGIT       ;1 to 53
/// ```
///
/// A positive occurrence `n` selects the n-th such weekday within the
/// recurrence interval, a negative one counts from the end: `-1SU` is the
/// last Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    day_of_week: DayOfWeek,
    occurrence: Option<i8>,
}

impl Day {
    /// Every `day_of_week` within the interval.
    #[must_use]
    pub const fn every(day_of_week: DayOfWeek) -> Self {
        Self {
            day_of_week,
            occurrence: None,
        }
    }

    /// Create a weekday with an optional occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] if the magnitude of `occurrence` is
    /// not within `1..=53`.
    pub fn new(day_of_week: DayOfWeek, occurrence: Option<i8>) -> Result<Self, RuleError> {
        if let Some(n) = occurrence
            && let Some(range) = RulePart::ByWeekNo.range()
            && !range.contains(n.into())
        {
            tracing::debug!(day = %day_of_week, occurrence = n, "rejected weekday occurrence");
            return Err(RuleError::OutOfRange {
                part: RulePart::ByDay,
                value: n.into(),
                range,
            });
        }
        Ok(Self {
            day_of_week,
            occurrence,
        })
    }

    /// The `n`-th `day_of_week` within the interval, counting from the end
    /// when `n` is negative.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] if the magnitude of `n` is not
    /// within `1..=53`.
    pub fn nth(n: i8, day_of_week: DayOfWeek) -> Result<Self, RuleError> {
        Self::new(day_of_week, Some(n))
    }

    /// Day of the week
    #[must_use]
    pub const fn day_of_week(self) -> DayOfWeek {
        self.day_of_week
    }

    /// Occurrence within the interval, if restricted
    #[must_use]
    pub const fn occurrence(self) -> Option<i8> {
        self.occurrence
    }
}

impl From<DayOfWeek> for Day {
    fn from(day_of_week: DayOfWeek) -> Self {
        Self::every(day_of_week)
    }
}

impl PropertyValue for Day {
    fn to_token(&self) -> Cow<'_, str> {
        match self.occurrence {
            Some(n) => Cow::Owned(format!("{n}{}", self.day_of_week)),
            None => Cow::Borrowed(self.day_of_week.name()),
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}
