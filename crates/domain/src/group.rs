// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rotation group identifiers.
//!
//! The set of groups is closed. Which workers belong to which group is
//! external configuration; this module only knows the codes and which
//! rotation system governs each one.

use serde::{Deserialize, Serialize};

/// Identifies one of the two paired-track rotation systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackId {
    /// Track 1: groups C/D/CD and A/B/AB.
    One,
    /// Track 2: groups G/H/GH and E/F/EF.
    Two,
}

impl TrackId {
    /// Returns the wire label of this track (`pista1` / `pista2`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::One => "pista1",
            Self::Two => "pista2",
        }
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Identifies one of the two fixed-weekday groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeeklyGroup {
    /// On duty Monday through Thursday.
    J,
    /// On duty Tuesday through Friday.
    K,
}

/// The rotation system that governs a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A 56-day paired-track rotation.
    Track(TrackId),
    /// A fixed weekday rotation.
    Weekly(WeeklyGroup),
}

/// A rotation group code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    AB,
    CD,
    EF,
    GH,
    J,
    K,
}

impl Group {
    /// Every known group, in display order.
    pub const ALL: [Self; 14] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::AB,
        Self::CD,
        Self::EF,
        Self::GH,
        Self::J,
        Self::K,
    ];

    /// Looks up a group by its code.
    ///
    /// Codes are matched case-insensitively and surrounding whitespace is
    /// ignored. Returns `None` for codes that no rotation table knows.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|group| group.code() == normalized)
    }

    /// Returns the canonical code of this group.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::AB => "AB",
            Self::CD => "CD",
            Self::EF => "EF",
            Self::GH => "GH",
            Self::J => "J",
            Self::K => "K",
        }
    }

    /// Returns the rotation system that governs this group.
    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        match self {
            Self::A | Self::B | Self::C | Self::D | Self::AB | Self::CD => {
                GroupKind::Track(TrackId::One)
            }
            Self::E | Self::F | Self::G | Self::H | Self::EF | Self::GH => {
                GroupKind::Track(TrackId::Two)
            }
            Self::J => GroupKind::Weekly(WeeklyGroup::J),
            Self::K => GroupKind::Weekly(WeeklyGroup::K),
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
