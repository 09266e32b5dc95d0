// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{resolve_code, track_one_day};
use crate::{
    CoreError, IMMINENT_THRESHOLD_DAYS, RotationKind, RotationState, StateKind, resolve,
    resolve_group,
};
use guardia_domain::{Group, NextWindow, TrackId};
use time::macros::date;
use time::{Date, Duration};

#[test]
fn test_group_c_on_duty_at_anchor() {
    let state: RotationState = resolve_code("C", date!(2026 - 02 - 21));

    assert_eq!(state.kind(), StateKind::EnTurno);
    assert_eq!(state.current_phase(), Some("CD_normal"));
    assert_eq!(state.days_remaining(), Some(14));
    assert_eq!(state.schedule(), Some("Diurno 07:00 - 19:00"));
    assert_eq!(
        state.rotation_kind(),
        Some(RotationKind::Track(TrackId::One))
    );

    let window: NextWindow = state.next_window().unwrap();
    assert_eq!(window.start, date!(2026 - 03 - 21));
    assert_eq!(window.end, date!(2026 - 04 - 03));
}

#[test]
fn test_group_d_works_nights_in_normal_phase() {
    let state: RotationState = resolve_code("D", date!(2026 - 02 - 21));
    assert_eq!(state.schedule(), Some("Nocturno 19:00 - 07:00"));
}

#[test]
fn test_group_a_resting_at_anchor() {
    let state: RotationState = resolve_code("A", date!(2026 - 02 - 21));

    assert_eq!(state.kind(), StateKind::EnDescanso);
    assert_eq!(state.current_phase(), None);
    assert_eq!(state.days_remaining(), Some(14));

    let window: NextWindow = state.next_window().unwrap();
    assert_eq!(window.start, date!(2026 - 03 - 07));
    assert_eq!(window.end, date!(2026 - 03 - 20));
    // A opens AB_normal on the day shift
    assert_eq!(state.schedule(), Some("Diurno 07:00 - 19:00"));
}

#[test]
fn test_imminent_threshold_is_inclusive() {
    // A rests through CD_normal; its window opens at position 14
    let at_threshold: RotationState = resolve_code("A", track_one_day(7));
    let before_threshold: RotationState = resolve_code("A", track_one_day(6));

    assert_eq!(at_threshold.kind(), StateKind::ProximoTurno);
    assert_eq!(
        at_threshold.days_remaining(),
        Some(IMMINENT_THRESHOLD_DAYS)
    );
    assert_eq!(before_threshold.kind(), StateKind::EnDescanso);
    assert_eq!(before_threshold.days_remaining(), Some(8));
}

#[test]
fn test_imminent_on_last_rest_day() {
    let state: RotationState = resolve_code("AB", track_one_day(13));
    assert_eq!(state.kind(), StateKind::ProximoTurno);
    assert_eq!(state.days_remaining(), Some(1));
    assert_eq!(state.schedule(), Some("Diurno y nocturno 07:00 - 07:00"));
}

#[test]
fn test_resting_group_reports_upcoming_inverted_shift() {
    // position 28: CD_invertido, B rests until AB_invertido at 42
    let state: RotationState = resolve_code("B", track_one_day(28));
    assert_eq!(state.kind(), StateKind::EnDescanso);
    assert_eq!(state.days_remaining(), Some(14));
    assert_eq!(state.schedule(), Some("Diurno 07:00 - 19:00"));
}

#[test]
fn test_on_duty_in_last_phase_wraps_to_next_cycle() {
    // position 42: AB_invertido, A on nights
    let state: RotationState = resolve_code("A", track_one_day(42));
    assert_eq!(state.kind(), StateKind::EnTurno);
    assert_eq!(state.current_phase(), Some("AB_invertido"));
    assert_eq!(state.schedule(), Some("Nocturno 19:00 - 07:00"));

    let window: NextWindow = state.next_window().unwrap();
    assert_eq!(window.start, track_one_day(70));
    assert_eq!(window.days_until, 28);
}

#[test]
fn test_wraparound_resolves_like_first_cycle() {
    for code in ["A", "B", "C", "D", "AB", "CD"] {
        let first: RotationState = resolve_code(code, track_one_day(14));
        let wrapped: RotationState = resolve_code(code, track_one_day(70));
        assert_eq!(first.kind(), wrapped.kind(), "group {code}");
        assert_eq!(first.current_phase(), wrapped.current_phase());
        assert_eq!(first.days_remaining(), wrapped.days_remaining());
        assert_eq!(first.schedule(), wrapped.schedule());
    }
}

#[test]
fn test_date_before_anchor() {
    // 2026-01-01 sits at position 5 of the cycle preceding the anchor
    let state: RotationState = resolve_code("C", date!(2026 - 01 - 01));
    assert_eq!(state.kind(), StateKind::EnTurno);
    assert_eq!(state.current_phase(), Some("CD_normal"));
    assert_eq!(state.days_remaining(), Some(9));
}

#[test]
fn test_track_two_groups() {
    let on_duty: RotationState = resolve_code("GH", date!(2026 - 02 - 14));
    let resting: RotationState = resolve_code("F", date!(2026 - 02 - 14));

    assert_eq!(on_duty.kind(), StateKind::EnTurno);
    assert_eq!(on_duty.current_phase(), Some("GH_normal"));
    assert_eq!(
        on_duty.rotation_kind(),
        Some(RotationKind::Track(TrackId::Two))
    );
    assert_eq!(resting.kind(), StateKind::EnDescanso);
    assert_eq!(
        resting.next_window().unwrap().start,
        date!(2026 - 02 - 28)
    );
}

#[test]
fn test_weekly_group_j() {
    let sunday: RotationState = resolve_code("J", date!(2026 - 02 - 22));
    let monday: RotationState = resolve_code("J", date!(2026 - 02 - 23));
    let friday: RotationState = resolve_code("J", date!(2026 - 02 - 27));

    assert_eq!(sunday.kind(), StateKind::EnDescanso);
    assert_eq!(monday.kind(), StateKind::EnTurno);
    assert_eq!(friday.kind(), StateKind::EnDescanso);

    assert_eq!(monday.rotation_kind(), Some(RotationKind::Weekly));
    assert_eq!(monday.days_remaining(), None);
    assert_eq!(monday.next_window(), None);
    assert_eq!(monday.current_phase(), None);
    assert_eq!(monday.schedule(), None);
}

#[test]
fn test_weekly_group_k() {
    let monday: RotationState = resolve_code("K", date!(2026 - 02 - 23));
    let friday: RotationState = resolve_code("K", date!(2026 - 02 - 27));
    assert_eq!(monday.kind(), StateKind::EnDescanso);
    assert_eq!(friday.kind(), StateKind::EnTurno);
}

#[test]
fn test_unknown_group() {
    let state: RotationState = resolve_code("X", date!(2026 - 02 - 21));
    assert_eq!(state.kind(), StateKind::SinDatos);
    assert_eq!(state.group_code(), Some("X"));
    assert_eq!(state.rotation_kind(), None);
    assert_eq!(state.next_window(), None);
}

#[test]
fn test_missing_group_variants() {
    let date: Date = date!(2026 - 02 - 21);
    for assignment in [None, Some(""), Some("   "), Some("none"), Some("NONE")] {
        let state: RotationState = resolve(assignment, date).unwrap();
        assert_eq!(state, RotationState::Unassigned, "{assignment:?}");
        assert_eq!(state.kind(), StateKind::SinGrupo);
        assert_eq!(state.group_code(), None);
    }
}

#[test]
fn test_group_codes_case_insensitive() {
    let date: Date = date!(2026 - 02 - 21);
    assert_eq!(resolve_code("cd", date), resolve_code("CD", date));
}

#[test]
fn test_resolve_is_idempotent() {
    let date: Date = date!(2026 - 05 - 17);
    for group in Group::ALL {
        let first: RotationState = resolve_group(group, date).unwrap();
        let second: RotationState = resolve_group(group, date).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_track_state_invariants_hold_every_day() {
    let first_day: Date = date!(2025 - 11 - 01);
    for offset in 0..400 {
        let date: Date = first_day + Duration::days(offset);
        for group in Group::ALL {
            let state: RotationState = resolve_group(group, date).unwrap();
            let Some(outlook) = state.outlook() else {
                continue;
            };
            let window: NextWindow = outlook.next_window;

            assert_eq!((window.end - window.start).whole_days(), 13);
            assert!((1..=14).contains(&outlook.days_remaining));
            assert!(state.schedule().is_some());
            match state.kind() {
                StateKind::EnTurno => assert!(window.days_until >= 15),
                StateKind::ProximoTurno => assert!(window.days_until <= 7),
                StateKind::EnDescanso => assert!(window.days_until > 7),
                other => panic!("unexpected {other} for a track group"),
            }
        }
    }
}

#[test]
fn test_exactly_one_pair_on_duty_per_track() {
    for offset in 0..56 {
        let date: Date = track_one_day(offset);
        let on_duty: Vec<Group> = [Group::A, Group::C]
            .into_iter()
            .filter(|group| resolve_group(*group, date).unwrap().kind() == StateKind::EnTurno)
            .collect();
        assert_eq!(on_duty.len(), 1, "offset {offset}: {on_duty:?}");
    }
}

#[test]
fn test_window_past_end_of_calendar_is_an_error() {
    let result = resolve(Some("C"), Date::MAX);
    assert!(matches!(
        result,
        Err(CoreError::WindowOutOfRange {
            group: Group::C,
            ..
        })
    ));
}

#[test]
fn test_weekly_group_near_end_of_calendar_resolves() {
    assert!(resolve(Some("J"), Date::MAX).is_ok());
}
