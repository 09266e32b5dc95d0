// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use time::Date;
use time::macros::date;

use crate::{GroupRotationRequest, InMemoryWorkerDirectory, WorkerRecord, WorkerRotationRequest};

/// The first day of track 1's `CD_normal` phase.
pub const TRACK_ONE_ANCHOR: Date = date!(2026 - 02 - 21);

pub fn create_group_request(group: Option<&str>, date: Option<&str>) -> GroupRotationRequest {
    GroupRotationRequest {
        group: group.map(str::to_string),
        date: date.map(str::to_string),
    }
}

pub fn create_worker_request(worker_id: &str, date: Option<&str>) -> WorkerRotationRequest {
    WorkerRotationRequest {
        worker_id: String::from(worker_id),
        date: date.map(str::to_string),
    }
}

pub fn create_test_directory() -> InMemoryWorkerDirectory {
    InMemoryWorkerDirectory::from_records(vec![
        WorkerRecord {
            worker_id: String::from("w-100"),
            name: String::from("Ana Ruiz"),
            group: Some(String::from("C")),
        },
        WorkerRecord {
            worker_id: String::from("w-200"),
            name: String::from("Luis Gil"),
            group: None,
        },
        WorkerRecord {
            worker_id: String::from("w-300"),
            name: String::from("Eva Sanz"),
            group: Some(String::from("Z")),
        },
        WorkerRecord {
            worker_id: String::from("w-400"),
            name: String::from("Marta Vidal"),
            group: Some(String::from("k")),
        },
    ])
    .expect("valid test roster")
}
