//! Core domain logic for ticklist.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::codec::{decode_tasks, encode_tasks, CodecError};
pub use repo::slot_repo::{
    MemorySlotRepository, SlotError, SlotRepository, SlotResult, SqliteSlotRepository,
};
pub use service::task_service::{ServiceError, ServiceResult, TaskListService, TASKS_SLOT_KEY};
pub use store::{apply, IdAllocator, TaskAction, TaskStore};
