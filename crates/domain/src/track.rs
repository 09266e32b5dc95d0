// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Paired-track rotation tables.
//!
//! Each track runs a 56-day cycle anchored at a fixed calendar date and
//! split into four contiguous 14-day phases:
//!
//! ```text
//! pos   0..14   first pair, normal    (first letter days, second letter nights)
//! pos  14..28   second pair, normal
//! pos  28..42   first pair, inverted  (first letter nights, second letter days)
//! pos  42..56   second pair, inverted
//! ```
//!
//! The combined group of a pair (CD, AB, GH, EF) covers both shifts whenever
//! its pair is on duty.
//!
//! ## Invariants
//!
//! - Phase boundaries are half-open: `[k * 14, (k + 1) * 14)`
//! - Exactly one phase is active for any date
//! - A group is on duty in exactly two of the four phases
//! - The anchors are fixed and must not change; stored expectations depend on them

use crate::cycle::cycle_position;
use crate::group::{Group, GroupKind, TrackId};
use time::Date;
use time::macros::date;

/// Number of days in a full rotation cycle.
pub const CYCLE_LENGTH_DAYS: u32 = 56;

/// Number of days in a single phase.
pub const PHASE_LENGTH_DAYS: u32 = 14;

/// Number of phases in a cycle.
pub const PHASES_PER_CYCLE: usize = 4;

/// Selects one of the two pairs of a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairSlot {
    /// The pair that opens the cycle (phases 0 and 2).
    First,
    /// The pair that follows (phases 1 and 3).
    Second,
}

/// The sub-schedule a group follows while on duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    /// Day shift.
    Day,
    /// Night shift.
    Night,
    /// Both shifts (combined groups).
    Combined,
}

impl Shift {
    /// Returns the work-hours description of this shift.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Day => "Diurno 07:00 - 19:00",
            Self::Night => "Nocturno 19:00 - 07:00",
            Self::Combined => "Diurno y nocturno 07:00 - 07:00",
        }
    }
}

/// Two alternating groups plus the combined group that covers both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    /// Works days in the normal phase, nights in the inverted one.
    pub first: Group,
    /// Works nights in the normal phase, days in the inverted one.
    pub second: Group,
    /// Works both shifts in every phase of the pair.
    pub combined: Group,
}

impl Pair {
    /// Returns the groups of this pair.
    #[must_use]
    pub const fn groups(&self) -> [Group; 3] {
        [self.first, self.second, self.combined]
    }

    /// Returns whether `group` belongs to this pair.
    #[must_use]
    pub fn contains(&self, group: Group) -> bool {
        self.groups().contains(&group)
    }

    /// Returns the shift `group` works while this pair is on duty.
    #[must_use]
    pub fn shift_for(&self, group: Group, inverted: bool) -> Option<Shift> {
        if group == self.combined {
            Some(Shift::Combined)
        } else if group == self.first {
            Some(if inverted { Shift::Night } else { Shift::Day })
        } else if group == self.second {
            Some(if inverted { Shift::Day } else { Shift::Night })
        } else {
            None
        }
    }
}

/// A 14-day segment of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Phase name as reported to clients (e.g. `CD_normal`).
    pub name: &'static str,
    /// The pair on duty during this phase.
    pub pair: PairSlot,
    /// Whether day and night assignments are swapped.
    pub inverted: bool,
}

/// A paired-track rotation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    /// Track identifier.
    pub id: TrackId,
    /// The date whose cycle position is 0.
    pub anchor: Date,
    /// The pair that opens the cycle.
    pub first_pair: Pair,
    /// The pair that follows.
    pub second_pair: Pair,
    /// Phase table indexed by `position / 14`.
    pub phases: [Phase; PHASES_PER_CYCLE],
}

/// Track 1: C/D/CD open the cycle, A/B/AB follow.
pub const TRACK_ONE: Track = Track {
    id: TrackId::One,
    anchor: date!(2026 - 02 - 21),
    first_pair: Pair {
        first: Group::C,
        second: Group::D,
        combined: Group::CD,
    },
    second_pair: Pair {
        first: Group::A,
        second: Group::B,
        combined: Group::AB,
    },
    phases: [
        Phase {
            name: "CD_normal",
            pair: PairSlot::First,
            inverted: false,
        },
        Phase {
            name: "AB_normal",
            pair: PairSlot::Second,
            inverted: false,
        },
        Phase {
            name: "CD_invertido",
            pair: PairSlot::First,
            inverted: true,
        },
        Phase {
            name: "AB_invertido",
            pair: PairSlot::Second,
            inverted: true,
        },
    ],
};

/// Track 2: G/H/GH open the cycle, E/F/EF follow.
pub const TRACK_TWO: Track = Track {
    id: TrackId::Two,
    anchor: date!(2026 - 02 - 14),
    first_pair: Pair {
        first: Group::G,
        second: Group::H,
        combined: Group::GH,
    },
    second_pair: Pair {
        first: Group::E,
        second: Group::F,
        combined: Group::EF,
    },
    phases: [
        Phase {
            name: "GH_normal",
            pair: PairSlot::First,
            inverted: false,
        },
        Phase {
            name: "EF_normal",
            pair: PairSlot::Second,
            inverted: false,
        },
        Phase {
            name: "GH_invertido",
            pair: PairSlot::First,
            inverted: true,
        },
        Phase {
            name: "EF_invertido",
            pair: PairSlot::Second,
            inverted: true,
        },
    ],
};

impl Track {
    /// Returns the configuration of a track.
    #[must_use]
    pub const fn get(id: TrackId) -> &'static Self {
        match id {
            TrackId::One => &TRACK_ONE,
            TrackId::Two => &TRACK_TWO,
        }
    }

    /// Returns the pair in `slot`.
    #[must_use]
    pub const fn pair(&self, slot: PairSlot) -> &Pair {
        match slot {
            PairSlot::First => &self.first_pair,
            PairSlot::Second => &self.second_pair,
        }
    }

    /// Returns the slot of the pair `group` belongs to, if it is on this track.
    #[must_use]
    pub fn pair_slot_of(&self, group: Group) -> Option<PairSlot> {
        if self.first_pair.contains(group) {
            Some(PairSlot::First)
        } else if self.second_pair.contains(group) {
            Some(PairSlot::Second)
        } else {
            None
        }
    }

    /// Returns the groups on duty during `phase`.
    #[must_use]
    pub const fn on_duty_groups(&self, phase: &Phase) -> [Group; 3] {
        self.pair(phase.pair).groups()
    }

    /// Returns the shift `group` works during `phase`, or `None` if it rests.
    #[must_use]
    pub fn shift_in_phase(&self, phase: &Phase, group: Group) -> Option<Shift> {
        self.pair(phase.pair).shift_for(group, phase.inverted)
    }
}

/// A group together with the track and pair it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMember {
    /// The track governing the group.
    pub track: &'static Track,
    /// The group.
    pub group: Group,
    /// The pair the group belongs to.
    pub slot: PairSlot,
}

impl TrackMember {
    /// Returns the track membership of `group`, or `None` for weekly groups.
    #[must_use]
    pub fn of(group: Group) -> Option<Self> {
        let GroupKind::Track(id) = group.kind() else {
            return None;
        };
        let track: &'static Track = Track::get(id);
        let slot: PairSlot = track.pair_slot_of(group)?;
        Some(Self { track, group, slot })
    }

    /// Returns whether this member's pair is on duty during `phase`.
    #[must_use]
    pub fn pair_on_duty(&self, phase: &Phase) -> bool {
        phase.pair == self.slot
    }
}

/// A track's state on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackResolution {
    /// Cycle-relative day index in `[0, 56)`.
    pub position: u32,
    /// Phase index in `[0, 4)`.
    pub phase_index: usize,
    /// The active phase.
    pub phase: Phase,
    /// Days left in the active phase, counting the queried date, in `[1, 14]`.
    pub days_remaining_in_phase: u32,
    /// Groups on duty during the active phase.
    pub on_duty_groups: [Group; 3],
}

impl TrackResolution {
    /// Returns whether `group` is on duty.
    #[must_use]
    pub fn is_on_duty(&self, group: Group) -> bool {
        self.on_duty_groups.contains(&group)
    }
}

/// Resolves the active phase of `track` on `date`.
#[must_use]
pub fn resolve_track(track: &Track, date: Date) -> TrackResolution {
    let position: u32 = cycle_position(track.anchor, CYCLE_LENGTH_DAYS, date);
    let phase_index: usize = phase_index_at(position);
    let phase: Phase = track.phases[phase_index];

    TrackResolution {
        position,
        phase_index,
        phase,
        days_remaining_in_phase: PHASE_LENGTH_DAYS - position % PHASE_LENGTH_DAYS,
        on_duty_groups: track.on_duty_groups(&phase),
    }
}

/// Maps a cycle position to its phase index, clamped to the last phase.
fn phase_index_at(position: u32) -> usize {
    usize::try_from(position / PHASE_LENGTH_DAYS)
        .map_or(PHASES_PER_CYCLE - 1, |index| index.min(PHASES_PER_CYCLE - 1))
}
