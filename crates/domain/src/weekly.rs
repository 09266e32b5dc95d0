// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fixed-weekday rotations.

use crate::calendar::weekday_index;
use crate::group::WeeklyGroup;
use time::Date;

/// On-duty weekdays of `group`, numbered 0 = Sunday through 6 = Saturday.
#[must_use]
pub const fn on_duty_days(group: WeeklyGroup) -> &'static [u8] {
    match group {
        WeeklyGroup::J => &[1, 2, 3, 4],
        WeeklyGroup::K => &[2, 3, 4, 5],
    }
}

/// Human-readable span of the on-duty weekdays of `group`.
#[must_use]
pub const fn on_duty_span(group: WeeklyGroup) -> &'static str {
    match group {
        WeeklyGroup::J => "de lunes a jueves",
        WeeklyGroup::K => "de martes a viernes",
    }
}

/// A weekly group's state on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyStatus {
    /// Weekday of the queried date (0 = Sunday).
    pub weekday: u8,
    /// Whether the group works on that weekday.
    pub on_duty: bool,
}

/// Resolves whether `group` is on duty on `date`.
#[must_use]
pub fn resolve_weekly(group: WeeklyGroup, date: Date) -> WeeklyStatus {
    let weekday: u8 = weekday_index(date);
    WeeklyStatus {
        weekday,
        on_duty: on_duty_days(group).contains(&weekday),
    }
}
