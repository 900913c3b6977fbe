//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by the list view.
//! - Enforce name validity at creation time.
//!
//! # Invariants
//! - `id` is unique within one task sequence and never reused while that
//!   sequence lives.
//! - `name` is trimmed and non-empty at construction and is never edited
//!   afterwards (no rename operation exists).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task within one sequence.
///
/// Kept as a newtype to make semantic intent explicit in signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation error for task construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Submitted name is empty after trimming.
    EmptyName,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be empty or whitespace-only"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for toggle/delete targeting.
    pub id: TaskId,
    /// Trimmed, non-empty display text.
    pub name: String,
    /// Completion flag, flipped in place by toggle.
    pub complete: bool,
}

impl Task {
    /// Creates a task from raw user input.
    ///
    /// # Invariants
    /// - `name` is trimmed before storage.
    /// - `complete` starts as `false`.
    ///
    /// # Errors
    /// - `EmptyName` when the input trims to the empty string.
    pub fn new(id: TaskId, name: &str) -> Result<Self, TaskValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
            complete: false,
        })
    }

    /// Returns a copy of this task with the completion flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            complete: !self.complete,
            ..self.clone()
        }
    }
}
