// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projection of a track group's next on-duty window.
//!
//! Each pair works two phases of the cycle with the other pair's phase
//! between them: the first pair works phases 0 and 2, the second pair works
//! phases 1 and 3. The distance to the next window therefore depends on the
//! active phase and on whether the group's own pair is the one on duty.
//!
//! | phase | own pair on duty → next start | other pair on duty → next start |
//! |-------|-------------------------------|---------------------------------|
//! | 0     | 28 (phase 2)                  | 14 (phase 1)                    |
//! | 1     | 42 (phase 3)                  | 28 (phase 2)                    |
//! | 2     | 56 (phase 0, next cycle)      | 42 (phase 3)                    |
//! | 3     | 70 (phase 1, next cycle)      | 56 (phase 0, next cycle)        |
//!
//! Positions are cycle-relative; the distance in days is `boundary - pos`.

use crate::calendar::add_days;
use crate::error::DomainError;
use crate::track::{PHASE_LENGTH_DAYS, PHASES_PER_CYCLE, TrackMember, resolve_track};
use time::Date;

/// Whether a group's pair is the one on duty in the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairMembership {
    /// The group's own pair is on duty.
    OwnPair,
    /// The other pair of the track is on duty.
    OtherPair,
}

/// Cycle positions at which the next window starts, per active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhaseTransition {
    own_pair_boundary: u32,
    other_pair_boundary: u32,
}

const TRANSITIONS: [PhaseTransition; PHASES_PER_CYCLE] = [
    PhaseTransition {
        own_pair_boundary: 28,
        other_pair_boundary: 14,
    },
    PhaseTransition {
        own_pair_boundary: 42,
        other_pair_boundary: 28,
    },
    PhaseTransition {
        own_pair_boundary: 56,
        other_pair_boundary: 42,
    },
    PhaseTransition {
        own_pair_boundary: 70,
        other_pair_boundary: 56,
    },
];

/// The next contiguous on-duty date range of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextWindow {
    /// First day of the window (inclusive).
    pub start: Date,
    /// Last day of the window (inclusive), always `start + 13`.
    pub end: Date,
    /// Days from the queried date to `start`.
    pub days_until: u32,
}

/// Returns the number of days from cycle `position` to the start of the next
/// window, given the active phase and the group's pair membership.
///
/// Phase indices past the table are clamped to the last phase.
#[must_use]
pub fn days_until_next_window(phase_index: usize, position: u32, membership: PairMembership) -> u32 {
    let transition: PhaseTransition = TRANSITIONS[phase_index.min(PHASES_PER_CYCLE - 1)];
    let boundary: u32 = match membership {
        PairMembership::OwnPair => transition.own_pair_boundary,
        PairMembership::OtherPair => transition.other_pair_boundary,
    };
    boundary.saturating_sub(position)
}

/// Computes the next on-duty window of `member` as seen from `date`.
///
/// If the member's pair is on duty, the window is the pair's next
/// occurrence after the upcoming rest; otherwise it is the next phase.
///
/// # Errors
///
/// Returns an error if the window falls outside the representable calendar.
pub fn next_window(member: &TrackMember, date: Date) -> Result<NextWindow, DomainError> {
    let resolution = resolve_track(member.track, date);
    let membership: PairMembership = if member.pair_on_duty(&resolution.phase) {
        PairMembership::OwnPair
    } else {
        PairMembership::OtherPair
    };

    let days_until: u32 =
        days_until_next_window(resolution.phase_index, resolution.position, membership);
    let start: Date = add_days(date, i64::from(days_until))?;
    let end: Date = add_days(start, i64::from(PHASE_LENGTH_DAYS - 1))?;

    Ok(NextWindow {
        start,
        end,
        days_until,
    })
}
