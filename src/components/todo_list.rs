//! Todo List Component
//!
//! Loads the collection from the backend and hosts the create/edit
//! modal. Every mutation waits for the server before the store moves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{TodoForm, TodoItem};
use crate::context::AppContext;
use crate::http::ApiClient;
use crate::models::{FilterCriteria, Todo};
use crate::store::{store_set_todos, use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList(filters: ReadSignal<FilterCriteria>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_form, set_show_form) = signal(false);
    let (editing_todo, set_editing_todo) = signal::<Option<Todo>>(None);

    // Fetch on login, on filter snapshots, and on explicit reloads.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let criteria = filters.get();
        if !ctx.auth.get().is_authenticated() {
            return;
        }
        let client = client.clone();
        spawn_local(async move {
            set_loading.set(true);
            match api::list_todos(&client, &criteria, api::DEFAULT_PAGE_LIMIT, 0).await {
                Ok(page) => {
                    web_sys::console::log_1(
                        &format!("[Todos] Loaded {} of {} todo(s)", page.items.len(), page.total).into(),
                    );
                    store_set_todos(&store, page.items);
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Todos] List failed: {}", e).into());
                    set_error.set(Some("Failed to fetch todos".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let close_form = move || {
        set_show_form.set(false);
        set_editing_todo.set(None);
    };

    view! {
        <div class="todo-list">
            <div class="todo-list-header">
                <h2>"Your Todos"</h2>
                <button
                    class="add-btn"
                    on:click=move |_| {
                        set_editing_todo.set(None);
                        set_show_form.set(true);
                    }
                >
                    "Add New Todo"
                </button>
            </div>

            {move || error.get().map(|msg| view! {
                <div class="error-banner">{msg}</div>
            })}

            <Show when=move || loading.get()>
                <div class="loading">"Loading todos..."</div>
            </Show>

            <Show when=move || !loading.get() && store.todos().read().is_empty()>
                <div class="empty-state">
                    <p>"No todos found. Create your first todo!"</p>
                </div>
            </Show>

            <div class="todo-items">
                {move || store.todos().get().into_iter().map(|todo| view! {
                    <TodoItem
                        todo=todo
                        on_edit=move |todo: Todo| {
                            set_editing_todo.set(Some(todo));
                            set_show_form.set(true);
                        }
                        on_error=move |msg: String| set_error.set(Some(msg))
                    />
                }).collect_view()}
            </div>

            {move || show_form.get().then(|| view! {
                <TodoForm
                    todo=editing_todo.get()
                    on_saved=move |_| close_form()
                    on_cancel=move |_| close_form()
                />
            })}

            <p class="item-count">
                {move || format!("{} todo(s)", store.todos().read().len())}
            </p>
        </div>
    }
}
