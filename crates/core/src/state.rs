// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use guardia_domain::{
    Group, NextWindow, Shift, TrackId, WeeklyGroup, format_date, on_duty_span,
};

/// Discriminant of a [`RotationState`], as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// The worker record carries no group.
    SinGrupo,
    /// The group code is not known to any rotation table.
    SinDatos,
    /// On duty today.
    EnTurno,
    /// Resting, next window more than a week away.
    EnDescanso,
    /// Resting, next window within a week.
    ProximoTurno,
}

impl StateKind {
    /// Returns the wire representation of this state.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SinGrupo => "sin_grupo",
            Self::SinDatos => "sin_datos",
            Self::EnTurno => "en_turno",
            Self::EnDescanso => "en_descanso",
            Self::ProximoTurno => "proximo_turno",
        }
    }
}

impl std::fmt::Display for StateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Rotation system label reported as `turno_tipo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationKind {
    /// Fixed weekday rotation.
    Weekly,
    /// Paired-track rotation.
    Track(TrackId),
}

impl RotationKind {
    /// Returns the wire label (`weekly`, `pista1`, `pista2`).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Track(id) => id.label(),
        }
    }
}

/// Where a track group stands and what comes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackOutlook {
    /// The governing track.
    pub track: TrackId,
    /// Name of the phase active on the queried date.
    pub phase: &'static str,
    /// Shift worked today when on duty, or in the next window when resting.
    pub shift: Option<Shift>,
    /// Days left in the current state, counting the queried date when on duty.
    pub days_remaining: u32,
    /// The next on-duty window.
    pub next_window: NextWindow,
}

/// Rotation details for an assigned group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Fixed weekday rotation.
    Weekly(WeeklyGroup),
    /// Paired-track rotation.
    Track(TrackOutlook),
}

impl Rotation {
    const fn kind(&self) -> RotationKind {
        match self {
            Self::Weekly(_) => RotationKind::Weekly,
            Self::Track(outlook) => RotationKind::Track(outlook.track),
        }
    }

    const fn outlook(&self) -> Option<&TrackOutlook> {
        match self {
            Self::Weekly(_) => None,
            Self::Track(outlook) => Some(outlook),
        }
    }
}

/// A worker's position in the rotation calendar on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationState {
    /// No group on the worker record.
    Unassigned,
    /// Group value not recognized by any track or weekly table.
    UnknownGroup {
        /// The code as supplied.
        code: String,
    },
    /// On duty.
    OnDuty {
        /// The group.
        group: Group,
        /// Rotation details.
        rotation: Rotation,
    },
    /// Resting, next window more than a week away (or weekly rest day).
    Resting {
        /// The group.
        group: Group,
        /// Rotation details.
        rotation: Rotation,
    },
    /// Resting, next window within a week.
    Imminent {
        /// The group.
        group: Group,
        /// Track details.
        outlook: TrackOutlook,
    },
}

impl RotationState {
    /// Returns the discriminant of this state.
    #[must_use]
    pub const fn kind(&self) -> StateKind {
        match self {
            Self::Unassigned => StateKind::SinGrupo,
            Self::UnknownGroup { .. } => StateKind::SinDatos,
            Self::OnDuty { .. } => StateKind::EnTurno,
            Self::Resting { .. } => StateKind::EnDescanso,
            Self::Imminent { .. } => StateKind::ProximoTurno,
        }
    }

    /// Returns the group code this state refers to, if any.
    #[must_use]
    pub fn group_code(&self) -> Option<&str> {
        match self {
            Self::Unassigned => None,
            Self::UnknownGroup { code } => Some(code.as_str()),
            Self::OnDuty { group, .. }
            | Self::Resting { group, .. }
            | Self::Imminent { group, .. } => Some(group.code()),
        }
    }

    /// Returns the rotation system governing the group, if known.
    #[must_use]
    pub const fn rotation_kind(&self) -> Option<RotationKind> {
        match self {
            Self::Unassigned | Self::UnknownGroup { .. } => None,
            Self::OnDuty { rotation, .. } | Self::Resting { rotation, .. } => {
                Some(rotation.kind())
            }
            Self::Imminent { outlook, .. } => Some(RotationKind::Track(outlook.track)),
        }
    }

    /// Returns the track details, for track groups.
    #[must_use]
    pub const fn outlook(&self) -> Option<&TrackOutlook> {
        match self {
            Self::Unassigned | Self::UnknownGroup { .. } => None,
            Self::OnDuty { rotation, .. } | Self::Resting { rotation, .. } => rotation.outlook(),
            Self::Imminent { outlook, .. } => Some(outlook),
        }
    }

    /// Returns the work-hours description, for track groups.
    #[must_use]
    pub fn schedule(&self) -> Option<&'static str> {
        self.outlook()
            .and_then(|outlook| outlook.shift)
            .map(|shift| shift.description())
    }

    /// Returns the days remaining in the current state, for track groups.
    #[must_use]
    pub fn days_remaining(&self) -> Option<u32> {
        self.outlook().map(|outlook| outlook.days_remaining)
    }

    /// Returns the next on-duty window, for track groups.
    #[must_use]
    pub fn next_window(&self) -> Option<NextWindow> {
        self.outlook().map(|outlook| outlook.next_window)
    }

    /// Returns the active phase name, only when on duty on a track.
    #[must_use]
    pub const fn current_phase(&self) -> Option<&'static str> {
        match self {
            Self::OnDuty {
                rotation: Rotation::Track(outlook),
                ..
            } => Some(outlook.phase),
            _ => None,
        }
    }

    /// Returns the human-readable message for this state.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Unassigned => String::from("No tienes un grupo asignado"),
            Self::UnknownGroup { code } => {
                format!("No hay datos de rotación para el grupo '{code}'")
            }
            Self::OnDuty {
                group,
                rotation: Rotation::Weekly(weekly),
            } => format!(
                "Hoy estás de turno (grupo {group}, {})",
                on_duty_span(*weekly)
            ),
            Self::OnDuty {
                rotation: Rotation::Track(outlook),
                ..
            } => {
                if outlook.days_remaining == 1 {
                    String::from("Estás de turno: hoy es tu último día de jornada")
                } else {
                    format!(
                        "Estás de turno: te quedan {} días de jornada",
                        outlook.days_remaining
                    )
                }
            }
            Self::Resting {
                group,
                rotation: Rotation::Weekly(weekly),
            } => format!(
                "Hoy descansas (grupo {group}, turno {})",
                on_duty_span(*weekly)
            ),
            Self::Resting {
                rotation: Rotation::Track(outlook),
                ..
            } => format!(
                "Estás de descanso: tu próxima jornada empieza el {}",
                format_date(outlook.next_window.start)
            ),
            Self::Imminent { outlook, .. } => {
                let start: String = format_date(outlook.next_window.start);
                if outlook.next_window.days_until == 1 {
                    format!("Tu próxima jornada empieza mañana ({start})")
                } else {
                    format!(
                        "Tu próxima jornada empieza en {} días ({start})",
                        outlook.next_window.days_until
                    )
                }
            }
        }
    }
}
