//! Task List Component
//!
//! Task cards of the active project with the add control.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <main class="task-list">
            <button class="add-todo" on:click=move |_| ctx.add_todo()>"Add Todo"</button>

            <For
                each=move || store.tasks().get()
                // Key on every displayed field so an edited card re-renders
                key=|task| task.clone()
                children=move |task| view! { <TaskCard task=task /> }
            />
        </main>
    }
}
