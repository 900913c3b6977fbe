//! Task list use-case service and persistence bridge.
//!
//! # Responsibility
//! - Hydrate the in-memory sequence from the slot once at startup.
//! - Persist the full sequence back to the slot after every transition.
//!
//! # Invariants
//! - `hydrate` runs before the first dispatch and never fails on missing
//!   or undecodable payloads; both hydrate as the empty sequence.
//! - Every dispatch overwrites the slot with the complete current
//!   sequence (last write wins).
//! - The service layer remains storage-agnostic.

use crate::model::task::Task;
use crate::repo::codec::{decode_tasks, encode_tasks, CodecError};
use crate::repo::slot_repo::{SlotError, SlotRepository};
use crate::store::{TaskAction, TaskStore};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the serialized task sequence.
pub const TASKS_SLOT_KEY: &str = "tasks";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for task list hydration and persistence.
#[derive(Debug)]
pub enum ServiceError {
    Slot(SlotError),
    Encode(CodecError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slot(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Slot(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<SlotError> for ServiceError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

impl From<CodecError> for ServiceError {
    fn from(value: CodecError) -> Self {
        Self::Encode(value)
    }
}

/// Persistence-bridging facade over the task store.
pub struct TaskListService<R: SlotRepository> {
    repo: R,
    store: TaskStore,
    hydrated: bool,
}

impl<R: SlotRepository> TaskListService<R> {
    /// Creates a service using the provided slot repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            store: TaskStore::new(),
            hydrated: false,
        }
    }

    /// Loads the persisted sequence into the store.
    ///
    /// A missing slot or an undecodable payload hydrates as the empty
    /// sequence; the stale payload is overwritten by the next persisted
    /// write. Calling hydrate again is a no-op.
    ///
    /// # Errors
    /// - `Slot` when the storage read itself fails. Decode failures are
    ///   recovered locally, transport failures are not.
    pub fn hydrate(&mut self) -> ServiceResult<()> {
        if self.hydrated {
            debug!("event=hydrate module=service status=skipped reason=already_hydrated");
            return Ok(());
        }

        let tasks = match self.repo.get(TASKS_SLOT_KEY)? {
            None => Vec::new(),
            Some(payload) => match decode_tasks(&payload) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=slot_decode module=service status=error slot={TASKS_SLOT_KEY} error={err}"
                    );
                    Vec::new()
                }
            },
        };

        info!(
            "event=hydrate module=service status=ok count={}",
            tasks.len()
        );
        self.store.dispatch(&TaskAction::Load { tasks });
        self.hydrated = true;
        Ok(())
    }

    /// Applies one action and persists the resulting sequence.
    ///
    /// The slot is overwritten on every dispatch, including no-op
    /// transitions, matching write-on-every-change semantics of the
    /// rendering loop that drives this service.
    ///
    /// # Errors
    /// - `Encode` when serialization fails.
    /// - `Slot` when the storage write fails. There is no retry path;
    ///   callers treat this as fatal.
    pub fn dispatch(&mut self, action: TaskAction) -> ServiceResult<()> {
        let changed = self.store.dispatch(&action);
        let payload = encode_tasks(self.store.tasks())?;
        self.repo.set(TASKS_SLOT_KEY, &payload)?;
        debug!(
            "event=dispatch module=service status=ok changed={changed} count={}",
            self.store.tasks().len()
        );
        Ok(())
    }

    /// Current sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }
}
