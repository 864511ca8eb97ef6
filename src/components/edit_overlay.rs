//! Edit Overlay Component
//!
//! Modal form for the four editable fields of the todo being edited.

use leptos::prelude::*;
use todo_board_store::Priority;

use crate::context::AppContext;
use crate::models::EditForm;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn EditOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (due, set_due) = signal(String::new());
    let (priority, set_priority) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Pre-fill inputs whenever a todo is opened
    Effect::new(move |_| {
        if let Some(form) = store.editing().get() {
            set_title.set(form.title);
            set_due.set(form.due);
            set_priority.set(form.priority);
            set_description.set(form.description);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(open) = store.editing().get_untracked() else {
            return;
        };
        ctx.submit_edit(EditForm {
            todo_id: open.todo_id,
            title: title.get_untracked(),
            due: due.get_untracked(),
            priority: priority.get_untracked(),
            description: description.get_untracked(),
        });
    };

    view! {
        <Show when=move || store.editing().with(|form| form.is_some())>
            <div class="blur"></div>
            <form class="edit-overlay" on:submit=on_submit>
                <button type="button" class="x" on:click=move |_| ctx.dismiss_edit()>"X"</button>

                <label for="task">"Task"</label>
                <input
                    id="task"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label for="due">"Due date"</label>
                <input
                    id="due"
                    type="date"
                    prop:value=move || due.get()
                    on:input=move |ev| set_due.set(event_target_value(&ev))
                />

                <label for="priority">"Priority"</label>
                <select
                    id="priority"
                    on:change=move |ev| set_priority.set(event_target_value(&ev))
                >
                    {Priority::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.as_str()
                                    prop:selected=move || is_selected(&priority.get(), option)
                                >
                                    {option.as_str()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                {move || store.form_error().get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <button type="submit" class="done">"Done"</button>
            </form>
        </Show>
    }
}

/// Whether `option` matches the priority currently in the form
fn is_selected(current: &str, option: Priority) -> bool {
    current.parse::<Priority>().ok() == Some(option)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_priority_selects_matching_option() {
        let selected: Vec<_> = Priority::ALL
            .into_iter()
            .filter(|option| is_selected("High", *option))
            .collect();
        assert_eq!(selected, vec![Priority::High]);

        assert!(is_selected("medium", Priority::Medium));
        assert!(!Priority::ALL.into_iter().any(|option| is_selected("", option)));
    }
}
