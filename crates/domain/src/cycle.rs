// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projection of calendar dates onto a repeating cycle.

use crate::calendar::day_index_since;
use time::Date;

/// Returns the cycle-relative day index of `date`.
///
/// The index is `day_index_since(anchor, date)` reduced with a non-negative
/// modulo, so dates before `anchor` fall into the tail of the previous cycle
/// rather than producing a negative index. The result is always in
/// `[0, cycle_length)`; a zero-length cycle yields 0.
#[must_use]
pub fn cycle_position(anchor: Date, cycle_length: u32, date: Date) -> u32 {
    day_index_since(anchor, date)
        .checked_rem_euclid(i64::from(cycle_length))
        .and_then(|position| u32::try_from(position).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    const ANCHOR: Date = date!(2026 - 02 - 21);

    #[test]
    fn test_position_at_anchor_is_zero() {
        assert_eq!(cycle_position(ANCHOR, 56, ANCHOR), 0);
    }

    #[test]
    fn test_position_last_day_of_cycle() {
        assert_eq!(cycle_position(ANCHOR, 56, date!(2026 - 04 - 17)), 55);
    }

    #[test]
    fn test_position_wraps_to_next_cycle() {
        assert_eq!(cycle_position(ANCHOR, 56, date!(2026 - 04 - 18)), 0);
        // 70 days after the anchor
        assert_eq!(cycle_position(ANCHOR, 56, date!(2026 - 05 - 02)), 14);
    }

    #[test]
    fn test_position_before_anchor_is_non_negative() {
        // 51 days before the anchor: -51 mod 56 = 5
        assert_eq!(cycle_position(ANCHOR, 56, date!(2026 - 01 - 01)), 5);
        // the day before the anchor is the last day of the previous cycle
        assert_eq!(cycle_position(ANCHOR, 56, date!(2026 - 02 - 20)), 55);
    }

    #[test]
    fn test_position_many_cycles_before_anchor() {
        // 10 full cycles before the anchor
        let date: Date = ANCHOR - time::Duration::days(560);
        assert_eq!(cycle_position(ANCHOR, 56, date), 0);
        assert_eq!(
            cycle_position(ANCHOR, 56, date - time::Duration::days(1)),
            55
        );
    }

    #[test]
    fn test_position_always_in_range() {
        let mut date: Date = date!(2024 - 01 - 01);
        while date < date!(2028 - 01 - 01) {
            let position: u32 = cycle_position(ANCHOR, 56, date);
            assert!(position < 56, "position {position} out of range for {date}");
            date = date.next_day().unwrap_or(Date::MAX);
        }
    }

    #[test]
    fn test_zero_length_cycle() {
        assert_eq!(cycle_position(ANCHOR, 0, date!(2026 - 03 - 01)), 0);
    }
}
