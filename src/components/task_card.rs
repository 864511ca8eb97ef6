//! Task Card Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::TaskView;

/// A single rendered todo
#[component]
pub fn TaskCard(task: TaskView) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let priority_class = format!("priority priority-{}", task.priority.as_str().to_lowercase());

    view! {
        <div class="todo-item" data-todo-id=id.to_string()>
            <h2 class="todo-heading">{task.title}</h2>
            <p class="due">"Due: " {task.due}</p>
            <p class=priority_class>"Priority: " {task.priority.as_str()}</p>
            <p class="description">{task.description}</p>
            <div class="todo-buttons-container">
                <button class="edit-todo" on:click=move |_| ctx.open_edit(id)>"Edit"</button>
                <button class="remove-todo" on:click=move |_| ctx.remove_todo(id)>"Remove"</button>
            </div>
        </div>
    }
}
