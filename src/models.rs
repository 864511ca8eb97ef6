//! Frontend Models
//!
//! View fragments projected from store state, and the patches the
//! controller emits to keep the rendered page in sync.

use std::fmt;

use todo_board_store::{Priority, ProjectId, TodoId};

/// One project tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub id: ProjectId,
    pub title: String,
}

/// One rendered todo card
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskView {
    pub id: TodoId,
    pub title: String,
    /// Human label, e.g. `Jan 10, 2026`
    pub due: String,
    pub priority: Priority,
    pub description: String,
}

/// Raw values of the four edit-overlay inputs, tagged with the todo being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub todo_id: TodoId,
    pub title: String,
    /// `YYYY-MM-DD`, the `<input type="date">` value
    pub due: String,
    pub priority: String,
    pub description: String,
}

/// Full page projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub tabs: Vec<TabView>,
    pub active: ProjectId,
    /// Tasks of the active project, newest first
    pub tasks: Vec<TaskView>,
}

/// Blocking user notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LimitReached { limit: usize },
    SaveFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LimitReached { limit } => {
                write!(f, "Limit reached! You cannot add more than {} tasks.", limit)
            }
            Notice::SaveFailed(reason) => write!(f, "Could not save your changes: {}", reason),
        }
    }
}

/// Incremental change to the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPatch {
    AppendTab(TabView),
    RemoveTab(ProjectId),
    /// Mark one tab active, all others inactive
    ActivateTab(ProjectId),
    /// Replace the whole task list
    RebuildTasks(Vec<TaskView>),
    /// Insert a task at the top of the list
    PrependTask(TaskView),
    RemoveTask(TodoId),
    ShowOverlay(EditForm),
    HideOverlay,
    /// Validation message inside the open overlay
    FormError(String),
    Notify(Notice),
}
