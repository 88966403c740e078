//! Todo Item Component
//!
//! One row of the list: completion checkbox, badges, edit and an
//! inline delete confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::http::ApiClient;
use crate::models::Todo;
use crate::store::{store_remove_todo, store_replace_todo, use_app_store};

#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_edit: Callback<Todo>,
    #[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");
    let store = use_app_store();

    let (confirm_delete, set_confirm_delete) = signal(false);
    let (busy, set_busy) = signal(false);

    let toggle_client = client.clone();
    let toggle_id = todo.id.clone();
    let toggle = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let client = toggle_client.clone();
        let id = toggle_id.clone();
        spawn_local(async move {
            // Local state changes only once the server has confirmed.
            // The store write re-renders the row, so release the busy
            // flag first.
            match api::toggle_todo_completion(&client, &id).await {
                Ok(updated) => {
                    set_busy.set(false);
                    store_replace_todo(&store, updated);
                }
                Err(e) => {
                    set_busy.set(false);
                    on_error.run(format!("Failed to toggle todo completion: {}", e));
                }
            }
        });
    };

    let delete_client = client.clone();
    let delete_id = todo.id.clone();
    let delete = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let client = delete_client.clone();
        let id = delete_id.clone();
        spawn_local(async move {
            match api::delete_todo(&client, &id).await {
                Ok(()) => {
                    set_busy.set(false);
                    set_confirm_delete.set(false);
                    store_remove_todo(&store, &id);
                }
                Err(e) => {
                    set_busy.set(false);
                    set_confirm_delete.set(false);
                    on_error.run(format!("Failed to delete todo: {}", e));
                }
            }
        });
    };

    let edit_todo = todo.clone();
    let priority_class = format!("badge priority-{}", todo.priority.as_str().to_lowercase());
    let is_completed = todo.is_completed;

    view! {
        <div class=move || if is_completed { "todo-item completed" } else { "todo-item" }>
            <input
                type="checkbox"
                class="todo-checkbox"
                prop:checked=is_completed
                disabled=move || busy.get()
                on:change=toggle
            />

            <div class="todo-body">
                <span class="todo-title">{todo.title.clone()}</span>
                {todo.description.clone().map(|description| view! {
                    <p class="todo-description">{description}</p>
                })}
                <div class="todo-badges">
                    <span class=priority_class>{todo.priority.as_str()}</span>
                    {todo.category.clone().map(|category| view! {
                        <span class="badge category">{category}</span>
                    })}
                    {todo.due_date.clone().map(|due_date| view! {
                        <span class="badge due-date">{format!("Due {}", due_date)}</span>
                    })}
                </div>
            </div>

            <div class="todo-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_todo.clone())>
                    "Edit"
                </button>
                <Show when=move || !confirm_delete.get()>
                    <button class="delete-btn" on:click=move |_| set_confirm_delete.set(true)>
                        "Delete"
                    </button>
                </Show>
                <Show when=move || confirm_delete.get()>
                    <span class="delete-confirm">
                        <span class="delete-confirm-text">"Delete?"</span>
                        <button class="confirm-btn" disabled=move || busy.get() on:click=delete.clone()>
                            "✓"
                        </button>
                        <button class="cancel-btn" on:click=move |_| set_confirm_delete.set(false)>
                            "✗"
                        </button>
                    </span>
                </Show>
            </div>
        </div>
    }
}
