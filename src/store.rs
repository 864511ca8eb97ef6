//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds only
//! what is on screen; the project store stays the source of truth.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_board_store::ProjectId;

use crate::browser;
use crate::models::{BoardView, EditForm, TabView, TaskView, ViewPatch};

/// Rendered page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Project tabs in collection order
    pub tabs: Vec<TabView>,
    /// Tab carrying the active marker
    pub active: Option<ProjectId>,
    /// Task cards of the active project, newest first
    pub tasks: Vec<TaskView>,
    /// Edit overlay contents while it is open
    pub editing: Option<EditForm>,
    /// Validation message shown in the overlay
    pub form_error: Option<String>,
}

impl AppState {
    pub fn from_view(view: BoardView) -> Self {
        Self {
            tabs: view.tabs,
            active: Some(view.active),
            tasks: view.tasks,
            editing: None,
            form_error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply one controller patch to the rendered state
pub fn apply_patch(store: &AppStore, patch: ViewPatch) {
    match patch {
        ViewPatch::AppendTab(tab) => store.tabs().write().push(tab),
        ViewPatch::RemoveTab(id) => store.tabs().write().retain(|tab| tab.id != id),
        ViewPatch::ActivateTab(id) => *store.active().write() = Some(id),
        ViewPatch::RebuildTasks(tasks) => *store.tasks().write() = tasks,
        ViewPatch::PrependTask(task) => store.tasks().write().insert(0, task),
        ViewPatch::RemoveTask(id) => store.tasks().write().retain(|task| task.id != id),
        ViewPatch::ShowOverlay(form) => {
            *store.form_error().write() = None;
            *store.editing().write() = Some(form);
        }
        ViewPatch::HideOverlay => {
            *store.form_error().write() = None;
            *store.editing().write() = None;
        }
        ViewPatch::FormError(message) => *store.form_error().write() = Some(message),
        ViewPatch::Notify(notice) => browser::alert(&notice),
    }
}
