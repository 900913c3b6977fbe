//! View state for the terminal front end.
//!
//! # Responsibility
//! - Hold the input buffer, focus mode and list selection.
//! - Translate view intents into task list service dispatches.
//!
//! # Invariants
//! - The selection is always clamped to the current sequence bounds.
//! - Empty-after-trim submissions are discarded here and never reach
//!   the service as a task.

use ticklist_core::{ServiceResult, SlotRepository, Task, TaskAction, TaskListService};

/// Which surface currently receives printable keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys navigate the list and trigger toggle/delete.
    Browse,
    /// Keys edit the new-task input line.
    Edit,
}

/// View state bound to the task list service.
pub struct AppState<R: SlotRepository> {
    service: TaskListService<R>,
    pub mode: InputMode,
    pub input: String,
    selected: usize,
}

impl<R: SlotRepository> AppState<R> {
    pub fn new(service: TaskListService<R>) -> Self {
        Self {
            service,
            mode: InputMode::Browse,
            input: String::new(),
            selected: 0,
        }
    }

    /// Current sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.service.tasks()
    }

    /// Index of the highlighted row, clamped to the sequence bounds.
    pub fn selection(&self) -> Option<usize> {
        let len = self.service.tasks().len();
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = self.selection() {
            self.selected = index.saturating_sub(1);
        }
    }

    pub fn select_next(&mut self) {
        if let Some(index) = self.selection() {
            self.selected = (index + 1).min(self.service.tasks().len() - 1);
        }
    }

    /// Submits the input line.
    ///
    /// Empty-after-trim input is silently discarded and the buffer is
    /// left as typed; otherwise the task is appended and the buffer is
    /// cleared for the next entry.
    pub fn submit_input(&mut self) -> ServiceResult<()> {
        if self.input.trim().is_empty() {
            return Ok(());
        }
        let name = std::mem::take(&mut self.input);
        self.service.dispatch(TaskAction::Add { name })
    }

    /// Flips the completion flag of the highlighted task, if any.
    pub fn toggle_selected(&mut self) -> ServiceResult<()> {
        let Some(index) = self.selection() else {
            return Ok(());
        };
        let id = self.service.tasks()[index].id;
        self.service.dispatch(TaskAction::Toggle { id })
    }

    /// Deletes the highlighted task, if any, keeping the selection in
    /// range afterwards.
    pub fn delete_selected(&mut self) -> ServiceResult<()> {
        let Some(index) = self.selection() else {
            return Ok(());
        };
        let id = self.service.tasks()[index].id;
        self.service.dispatch(TaskAction::Delete { id })?;
        if self.selected >= self.service.tasks().len() {
            self.selected = self.selected.saturating_sub(1);
        }
        Ok(())
    }
}
