//! Todo Board App
//!
//! Project tabs on the left, task cards in the middle, edit overlay on top.

use leptos::prelude::*;

use crate::browser::BrowserStorage;
use crate::components::{EditOverlay, ProjectTabBar, TaskList};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::controller::BoardController;

#[component]
pub fn App() -> impl IntoView {
    let controller = BoardController::new(BrowserStorage, BoardConfig::default());
    let ctx = AppContext::new(controller);

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.view);

    view! {
        <div class="app-layout">
            <ProjectTabBar />
            <TaskList />
            <EditOverlay />
        </div>
    }
}
