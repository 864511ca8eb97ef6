//! Application Context
//!
//! The controller and the view store, provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_board_store::{ProjectId, TodoId};

use crate::browser::BrowserStorage;
use crate::controller::BoardController;
use crate::models::{EditForm, ViewPatch};
use crate::store::{apply_patch, AppState, AppStore};

type Controller = BoardController<BrowserStorage>;

/// Handle components use to dispatch interactions
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller>,
    /// Rendered page state
    pub view: AppStore,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        let view = Store::new(AppState::from_view(controller.view()));
        Self {
            controller: StoredValue::new(controller),
            view,
        }
    }

    /// Run one interaction, then patch the page
    fn dispatch(&self, action: impl FnOnce(&mut Controller) -> Vec<ViewPatch>) {
        let patches = self.controller.try_update_value(action).unwrap_or_default();
        for patch in patches {
            apply_patch(&self.view, patch);
        }
    }

    pub fn select_project(&self, id: ProjectId) {
        self.dispatch(|c| c.select_project(id));
    }

    pub fn add_project(&self, title: &str) {
        self.dispatch(|c| c.add_project(title));
    }

    pub fn delete_project(&self, id: ProjectId) {
        self.dispatch(|c| c.delete_project(id));
    }

    pub fn add_todo(&self) {
        self.dispatch(|c| c.add_todo());
    }

    pub fn open_edit(&self, todo_id: TodoId) {
        self.dispatch(|c| c.open_edit(todo_id));
    }

    pub fn submit_edit(&self, form: EditForm) {
        self.dispatch(|c| c.submit_edit(form));
    }

    pub fn dismiss_edit(&self) {
        self.dispatch(|c| c.dismiss_edit());
    }

    pub fn remove_todo(&self, todo_id: TodoId) {
        self.dispatch(|c| c.remove_todo(todo_id));
    }
}
