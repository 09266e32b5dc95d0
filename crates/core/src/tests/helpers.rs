// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RotationState, resolve};
use guardia_domain::TRACK_ONE;
use time::{Date, Duration};

/// Returns the date `days` after the track 1 anchor (2026-02-21).
pub fn track_one_day(days: i64) -> Date {
    TRACK_ONE.anchor + Duration::days(days)
}

/// Resolves `code` on `date`, panicking on calendar overflow.
pub fn resolve_code(code: &str, date: Date) -> RotationState {
    resolve(Some(code), date).expect("date within the representable calendar")
}
