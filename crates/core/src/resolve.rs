// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rotation state resolution.
//!
//! Resolution is a pure function of the group code and the date: it reads
//! only the constant rotation tables and never consults the clock, so it may
//! be called concurrently and repeatedly with identical results.

use crate::error::CoreError;
use crate::state::{Rotation, RotationState, TrackOutlook};
use guardia_domain::{
    Group, GroupKind, NextWindow, Shift, TrackMember, TrackResolution, WeeklyGroup, next_window,
    resolve_track, resolve_weekly,
};
use time::Date;

/// A resting track group whose next window starts within this many days is
/// reported as imminent. The boundary is inclusive.
pub const IMMINENT_THRESHOLD_DAYS: u32 = 7;

/// Literal group value meaning "explicitly no group".
const NO_GROUP: &str = "none";

/// Resolves the rotation state for the group value stored on a worker record.
///
/// `None`, an empty value or the literal `none` (any case) mean the worker
/// has no group. Unknown codes resolve to [`RotationState::UnknownGroup`].
///
/// # Errors
///
/// Returns an error only if the next window would fall past the end of the
/// representable calendar (year 9999).
pub fn resolve(assignment: Option<&str>, date: Date) -> Result<RotationState, CoreError> {
    let Some(code) = assignment.map(str::trim) else {
        return Ok(RotationState::Unassigned);
    };

    if code.is_empty() || code.eq_ignore_ascii_case(NO_GROUP) {
        return Ok(RotationState::Unassigned);
    }

    Group::from_code(code).map_or_else(
        || {
            Ok(RotationState::UnknownGroup {
                code: code.to_string(),
            })
        },
        |group| resolve_group(group, date),
    )
}

/// Resolves the rotation state of a known group.
///
/// # Errors
///
/// Returns an error only if the next window would fall past the end of the
/// representable calendar (year 9999).
pub fn resolve_group(group: Group, date: Date) -> Result<RotationState, CoreError> {
    match group.kind() {
        GroupKind::Weekly(weekly) => Ok(resolve_weekly_group(group, weekly, date)),
        GroupKind::Track(_) => TrackMember::of(group).map_or_else(
            || {
                Ok(RotationState::UnknownGroup {
                    code: group.code().to_string(),
                })
            },
            |member| resolve_track_group(&member, date),
        ),
    }
}

fn resolve_weekly_group(group: Group, weekly: WeeklyGroup, date: Date) -> RotationState {
    let rotation: Rotation = Rotation::Weekly(weekly);
    if resolve_weekly(weekly, date).on_duty {
        RotationState::OnDuty { group, rotation }
    } else {
        RotationState::Resting { group, rotation }
    }
}

fn resolve_track_group(member: &TrackMember, date: Date) -> Result<RotationState, CoreError> {
    let group: Group = member.group;
    let today: TrackResolution = resolve_track(member.track, date);
    let window: NextWindow =
        next_window(member, date).map_err(|cause| CoreError::WindowOutOfRange {
            group,
            date,
            cause,
        })?;

    if today.is_on_duty(group) {
        let outlook: TrackOutlook = TrackOutlook {
            track: member.track.id,
            phase: today.phase.name,
            shift: member.track.shift_in_phase(&today.phase, group),
            days_remaining: today.days_remaining_in_phase,
            next_window: window,
        };
        return Ok(RotationState::OnDuty {
            group,
            rotation: Rotation::Track(outlook),
        });
    }

    // Resting: report the shift the group will work once the window opens
    let upcoming: TrackResolution = resolve_track(member.track, window.start);
    let shift: Option<Shift> = member.track.shift_in_phase(&upcoming.phase, group);
    let outlook: TrackOutlook = TrackOutlook {
        track: member.track.id,
        phase: today.phase.name,
        shift,
        days_remaining: window.days_until,
        next_window: window,
    };

    if window.days_until <= IMMINENT_THRESHOLD_DAYS {
        Ok(RotationState::Imminent { group, outlook })
    } else {
        Ok(RotationState::Resting {
            group,
            rotation: Rotation::Track(outlook),
        })
    }
}
