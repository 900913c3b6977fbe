//! Wire codec for the persisted task sequence.
//!
//! # Responsibility
//! - Serialize the task sequence to the stored JSON array form.
//! - Decode stored payloads back into domain tasks.
//!
//! # Invariants
//! - The stored shape is exactly `[{"id": <number>, "name": <string>,
//!   "complete": <bool>}, ...]` in sequence order.
//! - Round-trips preserve every field and the order.
//! - Decoding does not re-validate names; validity is enforced at
//!   creation time only.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stored record shape. Kept separate from the domain type so the
/// persisted contract cannot drift with internal refactors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredTask {
    id: u64,
    name: String,
    complete: bool,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.0,
            name: task.name.clone(),
            complete: task.complete,
        }
    }
}

impl From<StoredTask> for Task {
    fn from(record: StoredTask) -> Self {
        Self {
            id: TaskId(record.id),
            name: record.name,
            complete: record.complete,
        }
    }
}

/// Codec error for slot payload (de)serialization.
#[derive(Debug)]
pub enum CodecError {
    Json(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes the sequence into its slot payload form.
pub fn encode_tasks(tasks: &[Task]) -> Result<String, CodecError> {
    let records: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decodes a slot payload back into the task sequence.
///
/// # Errors
/// - `Json` when the payload is not the expected record array. Callers
///   decide the recovery policy; the bridge resets to an empty sequence.
pub fn decode_tasks(payload: &str) -> Result<Vec<Task>, CodecError> {
    let records: Vec<StoredTask> = serde_json::from_str(payload)?;
    Ok(records.into_iter().map(Task::from).collect())
}
