// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker lookup.
//!
//! Worker records live outside this system. The resolver only needs the
//! group value stored on a worker's record, which the service obtains
//! through the [`WorkerDirectory`] trait.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A worker as known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// The worker's unique identifier.
    pub worker_id: String,
    /// The worker's display name.
    #[serde(default)]
    pub name: String,
    /// The raw group value stored on the record, if any.
    #[serde(default)]
    pub group: Option<String>,
}

/// Maps worker identities to their records.
pub trait WorkerDirectory {
    /// Returns the record of `worker_id`, or `None` if the worker is unknown.
    fn find_worker(&self, worker_id: &str) -> Option<WorkerRecord>;
}

/// Errors raised while building a worker directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The roster document is not valid JSON for a list of workers.
    #[error("Invalid roster: {0}")]
    InvalidRoster(#[from] serde_json::Error),

    /// Two records share the same worker identifier.
    #[error("Duplicate worker id '{worker_id}' in roster")]
    DuplicateWorker { worker_id: String },

    /// A record has an empty worker identifier.
    #[error("Roster entry {index} has an empty worker id")]
    EmptyWorkerId { index: usize },
}

/// A read-only directory held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryWorkerDirectory {
    workers: HashMap<String, WorkerRecord>,
}

impl InMemoryWorkerDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory from worker records.
    ///
    /// Worker identifiers are trimmed before use.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker id is empty or appears more than once.
    pub fn from_records<I>(records: I) -> Result<Self, DirectoryError>
    where
        I: IntoIterator<Item = WorkerRecord>,
    {
        let mut workers: HashMap<String, WorkerRecord> = HashMap::new();

        for (index, mut record) in records.into_iter().enumerate() {
            let worker_id: String = record.worker_id.trim().to_string();
            if worker_id.is_empty() {
                return Err(DirectoryError::EmptyWorkerId { index });
            }
            if workers.contains_key(&worker_id) {
                return Err(DirectoryError::DuplicateWorker { worker_id });
            }
            record.worker_id.clone_from(&worker_id);
            workers.insert(worker_id, record);
        }

        Ok(Self { workers })
    }

    /// Builds a directory from a JSON array of worker records.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or violates the
    /// constraints of [`Self::from_records`].
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let records: Vec<WorkerRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Returns the number of workers in the directory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Returns whether the directory holds no workers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

impl WorkerDirectory for InMemoryWorkerDirectory {
    fn find_worker(&self, worker_id: &str) -> Option<WorkerRecord> {
        self.workers.get(worker_id.trim()).cloned()
    }
}
