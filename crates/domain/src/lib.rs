// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod calendar;
mod cycle;
mod error;
mod group;
mod next_window;
mod track;
mod weekly;

#[cfg(test)]
mod tests;

pub use calendar::{
    add_days, date_in_timezone, day_index_since, format_date, parse_date, parse_timezone,
    today_in, weekday_index,
};
pub use cycle::cycle_position;
pub use error::DomainError;
pub use group::{Group, GroupKind, TrackId, WeeklyGroup};
pub use next_window::{NextWindow, PairMembership, days_until_next_window, next_window};
pub use track::{
    CYCLE_LENGTH_DAYS, PHASE_LENGTH_DAYS, PHASES_PER_CYCLE, Pair, PairSlot, Phase, Shift,
    TRACK_ONE, TRACK_TWO, Track, TrackMember, TrackResolution, resolve_track,
};
pub use weekly::{WeeklyStatus, on_duty_days, on_duty_span, resolve_weekly};

// Re-exported so downstream crates name the same timezone type.
pub use chrono_tz::Tz;
