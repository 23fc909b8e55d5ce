// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Declares a closed enum whose variants map one-to-one onto RFC 5545 keywords.
///
/// Variants are declared in the order `iter()` yields them.
macro_rules! define_keyword_enum {
    (
        $(#[$attr:meta])*
        enum $ty:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident => $kw:ident
            ),+ $(,)?
        }
    ) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::strum::EnumIter,
            ::strum::EnumCount,
        )]
        $(#[$attr])*
        pub enum $ty {
            $(
                $(#[$vattr])*
                $variant,
            )+
        }

        impl $ty {
            /// Returns the keyword spelling of this variant.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $kw,
                    )+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
