// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date and date-time values bounding a recurrence with `UNTIL`.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::error::RuleError;
use crate::value::PropertyValue;

/// Date value in the iCalendar format.
///
/// ```txt
/// date-value         = date-fullyear date-month date-mday
/// date-fullyear      = 4DIGIT
/// date-month         = 2DIGIT        ;01-12
/// date-mday          = 2DIGIT        ;01-28, 01-29, 01-30, 01-31
///                                    ;based on month/year
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    year: i16,
    month: i8,
    day: i8,
}

impl ValueDate {
    /// Create a date, checking it exists in the proleptic Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidDate`] if the year is not representable
    /// with four digits or the month or day does not exist.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self, RuleError> {
        let valid = (0..=9999).contains(&year)
            && (1..=12).contains(&month)
            && 1 <= day
            && day <= days_in_month(year, month);
        if valid {
            Ok(Self { year, month, day })
        } else {
            Err(RuleError::InvalidDate { year, month, day })
        }
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> i16 {
        self.year
    }

    /// Month component, 1-12.
    #[must_use]
    pub const fn month(self) -> i8 {
        self.month
    }

    /// Day component, 1-31.
    #[must_use]
    pub const fn day(self) -> i8 {
        self.day
    }

    /// Convert to `jiff::civil::Date`.
    #[cfg(feature = "jiff")]
    #[must_use]
    pub fn civil_date(self) -> jiff::civil::Date {
        self.into()
    }
}

fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        _ => 31,
    }
}

impl PropertyValue for ValueDate {
    fn to_token(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:04}{:02}{:02}", self.year, self.month, self.day))
    }
}

/// Time value in the iCalendar format, `HHMMSS` with an optional UTC
/// designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueTime {
    hour: u8,
    minute: u8,
    second: u8,
    utc: bool,
}

impl ValueTime {
    /// Create a time of day. A second of 60 denotes a leap second.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidTime`] if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8, utc: bool) -> Result<Self, RuleError> {
        if hour < 24 && minute < 60 && second <= 60 {
            Ok(Self {
                hour,
                minute,
                second,
                utc,
            })
        } else {
            Err(RuleError::InvalidTime {
                hour,
                minute,
                second,
            })
        }
    }

    /// Midnight, floating.
    #[must_use]
    pub const fn midnight() -> Self {
        Self {
            hour: 0,
            minute: 0,
            second: 0,
            utc: false,
        }
    }

    /// Hour component, 0-23.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component, 0-59.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Second component, 0-60.
    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Whether the time is in UTC.
    #[must_use]
    pub const fn is_utc(self) -> bool {
        self.utc
    }
}

impl PropertyValue for ValueTime {
    fn to_token(&self) -> Cow<'_, str> {
        let utc = if self.utc { "Z" } else { "" };
        Cow::Owned(format!(
            "{:02}{:02}{:02}{utc}",
            self.hour, self.minute, self.second
        ))
    }
}

/// Date-Time value defined in the RFC 5545 Section 3.3.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueDateTime {
    date: ValueDate,
    time: ValueTime,
}

impl ValueDateTime {
    /// Combine a date and a time of day.
    #[must_use]
    pub const fn new(date: ValueDate, time: ValueTime) -> Self {
        Self { date, time }
    }

    /// Date component.
    #[must_use]
    pub const fn date(self) -> ValueDate {
        self.date
    }

    /// Time component.
    #[must_use]
    pub const fn time(self) -> ValueTime {
        self.time
    }
}

impl PropertyValue for ValueDateTime {
    fn to_token(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{}T{}",
            self.date.to_token(),
            self.time.to_token()
        ))
    }
}

/// End bound of a recurrence, the value of `UNTIL`.
///
/// ```txt
/// enddate     = date / date-time
/// ```
///
/// The variant carries the "ignore time of day" flag: it must agree with the
/// value type of the `DTSTART` the rule belongs to, which is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Until {
    /// Last date of the recurrence, inclusive
    Date(ValueDate),
    /// Last date-time of the recurrence, inclusive
    DateTime(ValueDateTime),
}

impl Until {
    /// Whether the bound is a date only, ignoring the time of day.
    #[must_use]
    pub const fn ignores_time(self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// The date part of the bound.
    #[must_use]
    pub const fn date(self) -> ValueDate {
        match self {
            Self::Date(date) => date,
            Self::DateTime(date_time) => date_time.date,
        }
    }
}

impl From<ValueDate> for Until {
    fn from(value: ValueDate) -> Self {
        Self::Date(value)
    }
}

impl From<ValueDateTime> for Until {
    fn from(value: ValueDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl PropertyValue for Until {
    fn to_token(&self) -> Cow<'_, str> {
        match self {
            Self::Date(date) => date.to_token(),
            Self::DateTime(date_time) => date_time.to_token(),
        }
    }
}

macro_rules! impl_display_via_token {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.to_token())
                }
            }
        )+
    };
}

impl_display_via_token!(ValueDate, ValueTime, ValueDateTime, Until);

#[cfg(feature = "jiff")]
mod jiff_impls {
    use super::{Until, ValueDate, ValueDateTime, ValueTime};
    use crate::error::RuleError;

    impl From<ValueDate> for jiff::civil::Date {
        fn from(value: ValueDate) -> Self {
            jiff::civil::date(value.year, value.month, value.day)
        }
    }

    impl TryFrom<jiff::civil::Date> for ValueDate {
        type Error = RuleError;

        fn try_from(value: jiff::civil::Date) -> Result<Self, Self::Error> {
            ValueDate::new(value.year(), value.month(), value.day())
        }
    }

    /// Floating date-time, without the UTC designator.
    impl TryFrom<jiff::civil::DateTime> for ValueDateTime {
        type Error = RuleError;

        fn try_from(value: jiff::civil::DateTime) -> Result<Self, Self::Error> {
            civil_to_value(value, false)
        }
    }

    /// UTC date-time.
    impl TryFrom<jiff::Timestamp> for ValueDateTime {
        type Error = RuleError;

        fn try_from(value: jiff::Timestamp) -> Result<Self, Self::Error> {
            let civil = value.to_zoned(jiff::tz::TimeZone::UTC).datetime();
            civil_to_value(civil, true)
        }
    }

    /// UTC date-time of the same instant.
    impl TryFrom<&jiff::Zoned> for ValueDateTime {
        type Error = RuleError;

        fn try_from(value: &jiff::Zoned) -> Result<Self, Self::Error> {
            Self::try_from(value.timestamp())
        }
    }

    impl TryFrom<jiff::civil::Date> for Until {
        type Error = RuleError;

        fn try_from(value: jiff::civil::Date) -> Result<Self, Self::Error> {
            ValueDate::try_from(value).map(Until::Date)
        }
    }

    impl TryFrom<jiff::civil::DateTime> for Until {
        type Error = RuleError;

        fn try_from(value: jiff::civil::DateTime) -> Result<Self, Self::Error> {
            ValueDateTime::try_from(value).map(Until::DateTime)
        }
    }

    impl TryFrom<jiff::Timestamp> for Until {
        type Error = RuleError;

        fn try_from(value: jiff::Timestamp) -> Result<Self, Self::Error> {
            ValueDateTime::try_from(value).map(Until::DateTime)
        }
    }

    impl TryFrom<&jiff::Zoned> for Until {
        type Error = RuleError;

        fn try_from(value: &jiff::Zoned) -> Result<Self, Self::Error> {
            ValueDateTime::try_from(value).map(Until::DateTime)
        }
    }

    fn civil_to_value(value: jiff::civil::DateTime, utc: bool) -> Result<ValueDateTime, RuleError> {
        let date = ValueDate::try_from(value.date())?;
        let time = ValueTime::new(
            value.hour().unsigned_abs(),
            value.minute().unsigned_abs(),
            value.second().unsigned_abs(),
            utc,
        )?;
        Ok(ValueDateTime::new(date, time))
    }
}
