// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `RRULE` content line formatter.
//!
//! This module writes a recurrence rule as a complete RFC 5545 content line,
//! `RRULE:<value>` followed by CRLF, folding lines longer than the configured
//! limit, to any `std::io::Write` implementer.
//!
//! # Example
//!
//! ```
//! use ical_rrule::{Frequency, RecurrenceRule, formatter::format};
//!
//! let mut rule = RecurrenceRule::new(Frequency::Weekly);
//! rule.set_interval(2);
//! assert_eq!(format(&rule).unwrap(), "RRULE:FREQ=WEEKLY;INTERVAL=2\r\n");
//! ```

use std::io::{self, Write};

use crate::encoder::write_recurrence_rule;
use crate::keyword::KW_RRULE;
use crate::value::RecurrenceRule;

/// Convenience function to format a rule as an `RRULE` content line (uses
/// default options).
///
/// # Errors
///
/// Returns an error if writing to the internal buffer fails or if the output
/// contains invalid UTF-8 data.
pub fn format(rule: &RecurrenceRule) -> io::Result<String> {
    FormatOptions::default().write_to_string(rule)
}

/// Formatting options for the content line formatter.
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Write a rule as an `RRULE` content line to any `Write` implementer.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write(&self, rule: &RecurrenceRule, w: &mut impl Write) -> io::Result<()> {
        let mut formatter = Formatter::new(w, *self);
        formatter.write_rrule(rule)
    }

    /// Write a rule as an `RRULE` content line to a `String`.
    ///
    /// # Errors
    /// Returns an error if writing fails or if the output contains invalid UTF-8 data.
    pub fn write_to_string(&self, rule: &RecurrenceRule) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write(rule, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::Space => b"\r\n ",
            Self::Tab => b"\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// Content line formatter that writes to any `Write` implementer.
///
/// Bytes written through its `Write` implementation are folded; line endings
/// are only produced by [`Formatter::write_rrule`].
#[derive(Debug)]
pub struct Formatter<W: Write> {
    /// The underlying writer.
    writer: W,
    /// Formatting options.
    options: FormatOptions,
    /// Current line length in bytes (excluding the pending CRLF).
    line_length: usize,
}

impl<W: Write> Formatter<W> {
    /// Create a new formatter with options.
    #[must_use]
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self {
            writer,
            options,
            line_length: 0,
        }
    }

    /// Get a mutable reference to the underlying writer.
    #[must_use]
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this formatter, returning the underlying writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write a rule as a complete `RRULE` content line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_rrule(&mut self, rule: &RecurrenceRule) -> io::Result<()> {
        write!(self, "{KW_RRULE}:")?;
        write_recurrence_rule(self, rule)?;
        tracing::trace!(freq = %rule.frequency(), "wrote RRULE content line");
        self.writeln()
    }

    /// Write a CRLF line ending.
    fn writeln(&mut self) -> io::Result<()> {
        self.writer.write_all(b"\r\n")?;
        self.line_length = 0;
        Ok(())
    }

    /// Insert line folding: CRLF + whitespace.
    fn insert_fold(&mut self) -> io::Result<()> {
        self.writer
            .write_all(self.options.folding_style.as_bytes())?;
        self.line_length = FoldingStyle::continuation_len();
        Ok(())
    }
}

impl<W: Write> Write for Formatter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(max_len) = self.options.folding else {
            // Folding disabled, write directly
            return self.writer.write(buf);
        };

        // A limit at or below the continuation length could never make progress
        let max_len = max_len.max(FoldingStyle::continuation_len() + 1);

        let mut remaining = buf;
        while !remaining.is_empty() {
            if self.line_length >= max_len {
                self.insert_fold()?;
            }

            let available = max_len - self.line_length;
            let (chunk, rest) = remaining.split_at(available.min(remaining.len()));
            self.writer.write_all(chunk)?;
            self.line_length += chunk.len();
            remaining = rest;
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
