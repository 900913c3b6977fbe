//! Closed action set for task sequence transitions.
//!
//! # Responsibility
//! - Name every user-visible intent against the task sequence.
//!
//! # Invariants
//! - The set is matched exhaustively by the transition function, so a
//!   new action cannot be added without deciding its semantics.

use crate::model::task::{Task, TaskId};

/// One intent against the task sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Append a new task built from raw input text.
    Add { name: String },
    /// Flip the completion flag of the task with this id.
    Toggle { id: TaskId },
    /// Remove the task with this id.
    Delete { id: TaskId },
    /// Replace the whole sequence. Used once, at startup hydration.
    Load { tasks: Vec<Task> },
}
