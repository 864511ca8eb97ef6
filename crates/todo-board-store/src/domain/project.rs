//! Project Entity
//!
//! A named, ordered list of todos.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::entity::Entity;
use super::todo::Todo;

/// Project identifier.
///
/// Generated from the wall clock in milliseconds; `1` is reserved for the
/// default project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u64);

impl ProjectId {
    /// Sentinel id of the default project
    pub const DEFAULT: ProjectId = ProjectId(1);

    /// Next time-based id that collides with none of `existing`.
    ///
    /// Normally `max(now, largest + 1)`; once the largest id is `u64::MAX`
    /// the highest free id below it is used instead. `None` only when every
    /// non-sentinel id is taken.
    pub fn generate<'a>(existing: impl IntoIterator<Item = &'a ProjectId>) -> Option<Self> {
        let taken: HashSet<u64> = existing.into_iter().map(|id| id.0).collect();
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        let lowest = Self::DEFAULT.0 + 1;

        match taken.iter().max().map_or(Some(0), |largest| largest.checked_add(1)) {
            Some(floor) => Some(ProjectId(now.max(floor).max(lowest))),
            None => (lowest..=u64::MAX)
                .rev()
                .find(|candidate| !taken.contains(candidate))
                .map(ProjectId),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project owning its todos in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub todos: Vec<Todo>,
}

impl Project {
    /// Create an empty project
    pub fn new(id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// The sentinel default project
    pub fn default_project(title: impl Into<String>) -> Self {
        Self::new(ProjectId::DEFAULT, title)
    }

    /// True when two todos share an id
    pub fn has_duplicate_todos(&self) -> bool {
        let mut seen = HashSet::new();
        self.todos.iter().any(|todo| !seen.insert(todo.todo_id))
    }
}

impl Entity for Project {
    type Id = ProjectId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_skips_sentinel_and_existing() {
        let existing = [ProjectId::DEFAULT, ProjectId(u64::MAX - 1)];
        let id = ProjectId::generate(&existing);
        assert_eq!(id, Some(ProjectId(u64::MAX)));

        let fresh = ProjectId::generate(std::iter::empty()).unwrap();
        assert!(!fresh.is_default());
    }

    #[test]
    fn test_generated_id_below_max_when_max_is_taken() {
        let existing = [ProjectId::DEFAULT, ProjectId(u64::MAX), ProjectId(u64::MAX - 1)];
        let id = ProjectId::generate(&existing).unwrap();
        assert_eq!(id, ProjectId(u64::MAX - 2));
        assert!(!existing.contains(&id));
    }

    #[test]
    fn test_default_project_is_empty() {
        let project = Project::default_project("Default Project");
        assert!(project.id.is_default());
        assert!(project.todos.is_empty());
        assert!(!project.has_duplicate_todos());
    }
}
