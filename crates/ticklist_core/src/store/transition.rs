//! Pure transition function and the owning task store.
//!
//! # Responsibility
//! - Apply one `TaskAction` to a sequence, producing a new sequence.
//! - Allocate collision-free task identifiers.
//!
//! # Invariants
//! - `apply` never mutates the input slice.
//! - Toggle/delete of an absent id return an unchanged copy.
//! - The allocator never hands out an id present in the sequence it was
//!   seeded from.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::store::action::TaskAction;

/// Monotonic identifier source for one task sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Re-seeds the allocator so every future id lands past the ids in
    /// `tasks`. Never moves backwards.
    pub fn seed_past(&mut self, tasks: &[Task]) {
        let max = tasks.iter().map(|task| task.id.0).max().unwrap_or(0);
        self.next = self.next.max(max + 1);
    }

    fn allocate(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies one action to `tasks`, returning the resulting sequence.
///
/// The input slice is never mutated. Add with an empty-after-trim name
/// and toggle/delete with an unknown id return an unchanged copy rather
/// than an error; such inputs are guarded at the view boundary and are
/// not failure conditions here.
pub fn apply(tasks: &[Task], action: &TaskAction, ids: &mut IdAllocator) -> Vec<Task> {
    match action {
        TaskAction::Add { name } => match Task::new(ids.allocate(), name) {
            Ok(task) => {
                let mut next = tasks.to_vec();
                next.push(task);
                next
            }
            // Rejected input leaves the allocator advanced; ids stay
            // unique either way.
            Err(TaskValidationError::EmptyName) => tasks.to_vec(),
        },
        TaskAction::Toggle { id } => tasks
            .iter()
            .map(|task| {
                if task.id == *id {
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect(),
        TaskAction::Delete { id } => tasks
            .iter()
            .filter(|task| task.id != *id)
            .cloned()
            .collect(),
        TaskAction::Load { tasks: loaded } => {
            ids.seed_past(loaded);
            loaded.clone()
        }
    }
}

/// Owning wrapper around one task sequence and its id source.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    ids: IdAllocator,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Applies `action` and reports whether the sequence changed.
    pub fn dispatch(&mut self, action: &TaskAction) -> bool {
        let next = apply(&self.tasks, action, &mut self.ids);
        let changed = next != self.tasks;
        self.tasks = next;
        changed
    }
}
