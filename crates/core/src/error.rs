// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use guardia_domain::{DomainError, Group, format_date};
use time::Date;

/// Errors that can occur while resolving a rotation state.
///
/// Missing or unknown group codes are never errors; they resolve to
/// `RotationState::Unassigned` and `RotationState::UnknownGroup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The next on-duty window lies beyond the representable calendar.
    WindowOutOfRange {
        /// The group being resolved.
        group: Group,
        /// The queried date.
        date: Date,
        /// The underlying date arithmetic failure.
        cause: DomainError,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowOutOfRange { group, date, cause } => write!(
                f,
                "Cannot project the next window of group {group} from {}: {cause}",
                format_date(*date)
            ),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WindowOutOfRange { cause, .. } => Some(cause),
        }
    }
}
