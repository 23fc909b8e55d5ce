// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::part::{PartRange, RulePart};

/// Errors raised while building or mutating a recurrence rule.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A rule part element lies outside the range the part allows
    #[error("{part} value {value} is out of range, expected {range}")]
    OutOfRange {
        /// The rule part the value was assigned to
        part: RulePart,
        /// The offending value
        value: i32,
        /// The range the part allows
        range: PartRange,
    },

    /// Not a valid calendar date
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component
        year: i16,
        /// Month component
        month: i8,
        /// Day component
        day: i8,
    },

    /// Not a valid time of day
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour component
        hour: u8,
        /// Minute component
        minute: u8,
        /// Second component
        second: u8,
    },
}

impl RuleError {
    /// The rule part an out-of-range error refers to.
    #[must_use]
    pub const fn part(&self) -> Option<RulePart> {
        match self {
            Self::OutOfRange { part, .. } => Some(*part),
            Self::InvalidDate { .. } | Self::InvalidTime { .. } => None,
        }
    }
}

/// Validate every element of `values` against the range of `part`.
///
/// Returns the first offending element.
pub(crate) fn check_range<T>(part: RulePart, values: &[T]) -> Result<(), RuleError>
where
    T: Copy + Into<i32>,
{
    let Some(range) = part.range() else {
        return Ok(());
    };
    match values.iter().map(|&v| v.into()).find(|&v| !range.contains(v)) {
        Some(value) => Err(RuleError::OutOfRange { part, value, range }),
        None => Ok(()),
    }
}

/// Like [`check_range`], but collects one error per offending element.
pub(crate) fn collect_range_errors<T>(part: RulePart, values: &[T], errors: &mut Vec<RuleError>)
where
    T: Copy + Into<i32>,
{
    let Some(range) = part.range() else {
        return;
    };
    errors.extend(
        values
            .iter()
            .map(|&v| v.into())
            .filter(|&v| !range.contains(v))
            .map(|value| RuleError::OutOfRange { part, value, range }),
    );
}
