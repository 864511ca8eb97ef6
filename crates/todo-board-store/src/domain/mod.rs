//! Domain Layer
//!
//! Projects, todos and the typed fields they carry.
//! This layer has NO storage knowledge (only serde for the wire shape).

mod entity;
mod project;
mod todo;

pub use entity::{find_index, Entity};
pub use project::{Project, ProjectId};
pub use todo::{DueDate, Priority, Todo, TodoFields, TodoId, ValidationError};
