// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value types of the recurrence rule and its collaborators.
//!
//! Every type that can appear on the right-hand side of a rule part
//! implements [`PropertyValue`], rendering itself to the token RFC 5545
//! Section 3.3 prescribes.

mod builder;
mod datetime;
mod rrule;
mod weekday;

use std::borrow::Cow;

pub use builder::RecurrenceRuleBuilder;
pub use datetime::{Until, ValueDate, ValueDateTime, ValueTime};
pub use rrule::{Bound, Frequency, RecurrenceRule};
pub use weekday::{Day, DayOfWeek};

/// A value that renders itself as a property value token.
///
/// Rendering is total: any value that could be constructed can be rendered.
pub trait PropertyValue {
    /// Render the value as its textual token, e.g. `WEEKLY`, `-1SU` or
    /// `19971224T000000Z`.
    fn to_token(&self) -> Cow<'_, str>;
}

macro_rules! impl_property_value_for_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PropertyValue for $ty {
                fn to_token(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )+
    };
}

impl_property_value_for_integer!(u8, i8, i16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_as_signed_decimals() {
        assert_eq!(7u8.to_token(), "7");
        assert_eq!((-1i8).to_token(), "-1");
        assert_eq!((-366i16).to_token(), "-366");
        assert_eq!(10u32.to_token(), "10");
    }
}
