// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during calendar arithmetic.
///
/// Group codes never produce errors; an unknown or missing group is a
/// reportable rotation state, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Date arithmetic left the representable calendar.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(
                    f,
                    "Failed to parse date '{date_string}': {error}. Expected DD/MM/YYYY"
                )
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
        }
    }
}

impl std::error::Error for DomainError {}
