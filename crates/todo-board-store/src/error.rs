//! Store errors

use thiserror::Error;

use crate::domain::{ProjectId, TodoId};
use crate::storage::StorageError;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),
    #[error("no unused project id left")]
    ProjectIdsExhausted,
    #[error("project {project} already holds {limit} todos")]
    TodoLimitReached { project: ProjectId, limit: usize },
    #[error("todo {todo} already exists in project {project}")]
    DuplicateTodo { project: ProjectId, todo: TodoId },
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize projects: {0}")]
    Serialize(#[from] serde_json::Error),
}
