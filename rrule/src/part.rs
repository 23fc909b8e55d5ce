// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Rule parts of a recurrence rule and the numeric bounds of their elements.

use std::fmt;

use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT,
    KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, KW_RRULE_WKST,
};

define_keyword_enum! {
    /// Rule parts of the RFC 5545 `recur` value.
    ///
    /// Variants are declared in canonical output order.
    enum RulePart {
        /// `FREQ`
        Freq => KW_RRULE_FREQ,
        /// `INTERVAL`
        Interval => KW_RRULE_INTERVAL,
        /// `UNTIL`
        Until => KW_RRULE_UNTIL,
        /// `COUNT`
        Count => KW_RRULE_COUNT,
        /// `BYSECOND`
        BySecond => KW_RRULE_BYSECOND,
        /// `BYMINUTE`
        ByMinute => KW_RRULE_BYMINUTE,
        /// `BYHOUR`
        ByHour => KW_RRULE_BYHOUR,
        /// `BYDAY`
        ByDay => KW_RRULE_BYDAY,
        /// `BYMONTHDAY`
        ByMonthDay => KW_RRULE_BYMONTHDAY,
        /// `BYYEARDAY`
        ByYearDay => KW_RRULE_BYYEARDAY,
        /// `BYWEEKNO`
        ByWeekNo => KW_RRULE_BYWEEKNO,
        /// `BYMONTH`
        ByMonth => KW_RRULE_BYMONTH,
        /// `BYSETPOS`
        BySetPos => KW_RRULE_BYSETPOS,
        /// `WKST`
        Wkst => KW_RRULE_WKST,
    }
}

impl RulePart {
    /// Allowed range of a single element of this part, if it carries one.
    ///
    /// `BYDAY` elements are validated by [`Day`](crate::Day) itself, whose
    /// ordinal shares the `BYWEEKNO` range.
    #[must_use]
    pub const fn range(self) -> Option<PartRange> {
        match self {
            Self::BySecond => Some(PartRange::unsigned(0, 60)),
            Self::ByMinute => Some(PartRange::unsigned(0, 59)),
            Self::ByHour => Some(PartRange::unsigned(0, 23)),
            Self::ByMonthDay => Some(PartRange::signed(1, 31)),
            Self::ByYearDay | Self::BySetPos => Some(PartRange::signed(1, 366)),
            Self::ByWeekNo => Some(PartRange::signed(1, 53)),
            Self::ByMonth => Some(PartRange::unsigned(1, 12)),
            Self::Freq
            | Self::Interval
            | Self::Until
            | Self::Count
            | Self::ByDay
            | Self::Wkst => None,
        }
    }

    /// Whether the part holds a list of elements rather than a single value.
    #[must_use]
    pub const fn is_list(self) -> bool {
        !matches!(
            self,
            Self::Freq | Self::Interval | Self::Until | Self::Count | Self::Wkst
        )
    }
}

/// Inclusive bound on the elements of a rule part.
///
/// A signed range bounds the magnitude: `±1..=31` accepts `-31..=-1` and
/// `1..=31`, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartRange {
    min: u16,
    max: u16,
    signed: bool,
}

impl PartRange {
    /// Range of non-negative values `min..=max`.
    #[must_use]
    pub const fn unsigned(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            signed: false,
        }
    }

    /// Range of values whose magnitude lies in `min..=max`.
    #[must_use]
    pub const fn signed(min: u16, max: u16) -> Self {
        Self {
            min,
            max,
            signed: true,
        }
    }

    /// Lower bound (of the magnitude for signed ranges).
    #[must_use]
    pub const fn min(self) -> u16 {
        self.min
    }

    /// Upper bound (of the magnitude for signed ranges).
    #[must_use]
    pub const fn max(self) -> u16 {
        self.max
    }

    /// Whether negative values are allowed.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        self.signed
    }

    /// Check whether `value` lies within this range.
    #[must_use]
    pub fn contains(self, value: i32) -> bool {
        if value < 0 && !self.signed {
            return false;
        }
        let magnitude = value.unsigned_abs();
        u32::from(self.min) <= magnitude && magnitude <= u32::from(self.max)
    }
}

impl fmt::Display for PartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.signed { "±" } else { "" };
        write!(f, "{sign}{}..={}", self.min, self.max)
    }
}
