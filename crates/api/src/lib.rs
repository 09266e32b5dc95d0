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
    clippy::all
)]

mod directory;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use directory::{DirectoryError, InMemoryWorkerDirectory, WorkerDirectory, WorkerRecord};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{get_group_rotation, get_worker_rotation, list_groups, state_to_response};
pub use request_response::{
    GroupInfo, GroupRotationRequest, ListGroupsResponse, NextWindowResponse,
    RotationStateResponse, WorkerRotationRequest, WorkerRotationResponse,
};
