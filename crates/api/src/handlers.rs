// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rotation handlers.
//!
//! Handlers are synchronous and pure apart from the directory lookup. The
//! caller supplies "today" so that the timezone used to pick the default date
//! is a service concern, not an API one.

use crate::directory::{WorkerDirectory, WorkerRecord};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    GroupInfo, GroupRotationRequest, ListGroupsResponse, NextWindowResponse,
    RotationStateResponse, WorkerRotationRequest, WorkerRotationResponse,
};
use guardia::{RotationKind, RotationState, resolve};
use guardia_domain::{Group, GroupKind, format_date, parse_date};
use time::Date;
use tracing::debug;

/// Resolves the requested date, defaulting to `today`.
fn resolve_request_date(date: Option<&str>, today: Date) -> Result<Date, ApiError> {
    match date.map(str::trim) {
        None | Some("") => Ok(today),
        Some(text) => parse_date(text).map_err(translate_domain_error),
    }
}

/// Converts a `RotationState` to a `RotationStateResponse`.
#[must_use]
pub fn state_to_response(state: &RotationState, date: Date) -> RotationStateResponse {
    RotationStateResponse {
        state: state.kind().as_str().to_string(),
        message: state.message(),
        group: state.group_code().map(str::to_string),
        date: format_date(date),
        rotation_kind: state.rotation_kind().map(|kind| kind.label().to_string()),
        schedule: state.schedule().map(str::to_string),
        days_remaining: state.days_remaining(),
        next_window: state.next_window().map(|window| NextWindowResponse {
            start: format_date(window.start),
            end: format_date(window.end),
        }),
        current_phase: state.current_phase().map(str::to_string),
    }
}

/// Gets the rotation state of a group on a date.
///
/// # Arguments
///
/// * `request` - The group code and optional date
/// * `today` - The date used when the request carries none
///
/// # Returns
///
/// * `Ok(RotationStateResponse)` for every group value, known or not
///
/// # Errors
///
/// Returns an error if:
/// - The date is not a valid `DD/MM/YYYY` date
/// - The next window falls beyond the supported calendar
pub fn get_group_rotation(
    request: &GroupRotationRequest,
    today: Date,
) -> Result<RotationStateResponse, ApiError> {
    let date: Date = resolve_request_date(request.date.as_deref(), today)?;
    let state: RotationState =
        resolve(request.group.as_deref(), date).map_err(translate_core_error)?;

    debug!(
        group = ?request.group,
        date = %format_date(date),
        state = %state.kind(),
        "Resolved group rotation"
    );

    Ok(state_to_response(&state, date))
}

/// Gets the rotation state of a worker on a date.
///
/// The worker's group is read from the directory; a worker without a group
/// resolves to `sin_grupo`.
///
/// # Errors
///
/// Returns an error if:
/// - The worker is not in the directory
/// - The date is not a valid `DD/MM/YYYY` date
/// - The next window falls beyond the supported calendar
pub fn get_worker_rotation<D>(
    directory: &D,
    request: &WorkerRotationRequest,
    today: Date,
) -> Result<WorkerRotationResponse, ApiError>
where
    D: WorkerDirectory + ?Sized,
{
    let date: Date = resolve_request_date(request.date.as_deref(), today)?;

    let worker: WorkerRecord =
        directory
            .find_worker(&request.worker_id)
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Worker"),
                message: format!("Worker '{}' does not exist", request.worker_id),
            })?;

    let state: RotationState =
        resolve(worker.group.as_deref(), date).map_err(translate_core_error)?;

    debug!(
        worker_id = %worker.worker_id,
        group = ?worker.group,
        date = %format_date(date),
        state = %state.kind(),
        "Resolved worker rotation"
    );

    Ok(WorkerRotationResponse {
        worker_id: worker.worker_id,
        name: worker.name,
        rotation: state_to_response(&state, date),
    })
}

/// Lists every known group with the rotation system that governs it.
#[must_use]
pub fn list_groups() -> ListGroupsResponse {
    let groups: Vec<GroupInfo> = Group::ALL
        .iter()
        .map(|group| {
            let kind: RotationKind = match group.kind() {
                GroupKind::Weekly(_) => RotationKind::Weekly,
                GroupKind::Track(id) => RotationKind::Track(id),
            };
            GroupInfo {
                code: group.code().to_string(),
                rotation_kind: kind.label().to_string(),
            }
        })
        .collect();

    ListGroupsResponse { groups }
}
