//! Project Tab Bar Component
//!
//! One tab per project, with delete controls and an inline add form.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Blank names fall back to "New Project"
        ctx.add_project(&new_name.get());
        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <nav class="project-section">
            <For
                each=move || store.tabs().get()
                key=|tab| (tab.id, tab.title.clone())
                children=move |tab| {
                    let id = tab.id;
                    let tab_class = move || {
                        if store.active().get() == Some(id) {
                            "project-container active"
                        } else {
                            "project-container"
                        }
                    };

                    view! {
                        <div
                            class=tab_class
                            data-id=id.to_string()
                            on:click=move |_| ctx.select_project(id)
                        >
                            <p>{tab.title.clone()}</p>
                            <button
                                class="delete-project-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    ctx.delete_project(id);
                                }
                            >
                                "X"
                            </button>
                        </div>
                    }
                }
            />

            <div class="buttons">
                {move || if adding.get() {
                    view! {
                        <form class="project-add-form" on:submit=on_add>
                            <input
                                type="text"
                                placeholder="Project name"
                                prop:value=move || new_name.get()
                                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            />
                            <button type="submit">"+"</button>
                            <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                        </form>
                    }.into_any()
                } else {
                    view! {
                        <button class="add-project" on:click=move |_| set_adding.set(true)>
                            "Add Project"
                        </button>
                    }.into_any()
                }}
            </div>
        </nav>
    }
}
