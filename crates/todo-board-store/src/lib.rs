//! Todo Board Store
//!
//! Layered architecture:
//! - domain: projects, todos and their typed fields
//! - storage: key-value persistence abstraction
//! - store: the project collection and its mutations
//!
//! The store is the single source of truth; every successful mutation
//! rewrites the whole collection to storage.

mod config;
mod domain;
mod error;
mod storage;
mod store;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY, MAX_TODOS_PER_PROJECT};
pub use domain::{
    find_index, DueDate, Entity, Priority, Project, ProjectId, Todo, TodoFields, TodoId,
    ValidationError,
};
pub use error::{StoreError, StoreResult};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};
pub use store::{ProjectRemoval, ProjectStore};
