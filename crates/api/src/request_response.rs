// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Response field names follow the wire contract consumed by existing
//! clients, which is in Spanish (`estado`, `mensaje`, `proxima_jornada`...).

use serde::{Deserialize, Serialize};

/// API request for the rotation state of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRotationRequest {
    /// The raw group code. `None` means no group.
    pub group: Option<String>,
    /// The date to resolve (`DD/MM/YYYY`). `None` means today.
    pub date: Option<String>,
}

/// API request for the rotation state of a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerRotationRequest {
    /// The worker's identifier.
    pub worker_id: String,
    /// The date to resolve (`DD/MM/YYYY`). `None` means today.
    pub date: Option<String>,
}

/// A next on-duty window, with dates formatted as `DD/MM/YYYY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextWindowResponse {
    /// First day of the window (inclusive).
    #[serde(rename = "inicio")]
    pub start: String,
    /// Last day of the window (inclusive).
    #[serde(rename = "fin")]
    pub end: String,
}

/// API response describing a rotation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationStateResponse {
    /// State discriminant (`sin_grupo`, `sin_datos`, `en_turno`,
    /// `en_descanso`, `proximo_turno`).
    #[serde(rename = "estado")]
    pub state: String,
    /// Human-readable message.
    #[serde(rename = "mensaje")]
    pub message: String,
    /// The group code, if the worker has one.
    #[serde(rename = "grupo")]
    pub group: Option<String>,
    /// The resolved date (`DD/MM/YYYY`).
    #[serde(rename = "fecha")]
    pub date: String,
    /// Rotation system (`weekly`, `pista1`, `pista2`), when the group is known.
    #[serde(
        rename = "turno_tipo",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_kind: Option<String>,
    /// Work-hours description, for track groups.
    #[serde(rename = "horario")]
    pub schedule: Option<String>,
    /// Days remaining in the current state, for track groups.
    #[serde(rename = "dias_restantes")]
    pub days_remaining: Option<u32>,
    /// Next on-duty window, for track groups.
    #[serde(rename = "proxima_jornada")]
    pub next_window: Option<NextWindowResponse>,
    /// Active phase, only when on duty on a track.
    #[serde(
        rename = "fase_actual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub current_phase: Option<String>,
}

/// API response describing a worker's rotation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRotationResponse {
    /// The worker's identifier.
    #[serde(rename = "trabajador")]
    pub worker_id: String,
    /// The worker's display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// The worker's rotation state.
    #[serde(flatten)]
    pub rotation: RotationStateResponse,
}

/// A group and the rotation system that governs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInfo {
    /// The group code.
    #[serde(rename = "grupo")]
    pub code: String,
    /// Rotation system (`weekly`, `pista1`, `pista2`).
    #[serde(rename = "turno_tipo")]
    pub rotation_kind: String,
}

/// API response listing every known group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListGroupsResponse {
    /// The known groups.
    #[serde(rename = "grupos")]
    pub groups: Vec<GroupInfo>,
}
