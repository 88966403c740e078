//! Todo Form Component
//!
//! Modal form for creating a todo or editing one. Edits submit a
//! minimal diff: only fields whose value changed reach the server.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateTodoData, UpdateTodoData};
use crate::http::ApiClient;
use crate::models::{Priority, Todo};
use crate::store::{store_insert_todo, store_replace_todo, use_app_store};

fn validate_title(title: &str) -> Option<String> {
    if title.trim().is_empty() {
        Some("Title is required".to_string())
    } else {
        None
    }
}

fn validate_due_date(due_date: &str) -> Option<String> {
    if due_date.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(due_date, "%Y-%m-%d") {
        Ok(_) => None,
        Err(_) => Some("Invalid date format. Use YYYY-MM-DD".to_string()),
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Build the update payload from form fields, keeping only fields that
/// differ from the original. Absent optional fields compare as "".
/// Completion is not part of the form; toggling goes through its own
/// endpoint.
fn build_update_diff(
    original: &Todo,
    title: &str,
    description: &str,
    priority: Priority,
    category: &str,
    due_date: &str,
) -> UpdateTodoData {
    let mut data = UpdateTodoData::default();
    if title != original.title {
        data.title = Some(title.to_string());
    }
    if description != original.description.as_deref().unwrap_or("") {
        data.description = Some(description.to_string());
    }
    if priority != original.priority {
        data.priority = Some(priority);
    }
    if category != original.category.as_deref().unwrap_or("") {
        data.category = Some(category.to_string());
    }
    if due_date != original.due_date.as_deref().unwrap_or("") {
        data.due_date = Some(due_date.to_string());
    }
    data
}

/// Modal create/edit form
#[component]
pub fn TodoForm(
    todo: Option<Todo>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient should be provided");
    let store = use_app_store();

    let editing = todo.clone();
    let is_editing = editing.is_some();

    let (title, set_title) = signal(todo.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(todo.as_ref().and_then(|t| t.description.clone()).unwrap_or_default());
    let (priority, set_priority) =
        signal(todo.as_ref().map(|t| t.priority).unwrap_or(Priority::Medium));
    let (category, set_category) =
        signal(todo.as_ref().and_then(|t| t.category.clone()).unwrap_or_default());
    let (due_date, set_due_date) =
        signal(todo.as_ref().and_then(|t| t.due_date.clone()).unwrap_or_default());

    let (title_error, set_title_error) = signal::<Option<String>>(None);
    let (due_date_error, set_due_date_error) = signal::<Option<String>>(None);
    let (banner, set_banner) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let title_value = title.get();
        let description_value = description.get();
        let priority_value = priority.get();
        let category_value = category.get();
        let due_date_value = due_date.get();

        // Local validation; nothing goes over the wire when it fails.
        let title_err = validate_title(&title_value);
        let due_err = validate_due_date(&due_date_value);
        set_title_error.set(title_err.clone());
        set_due_date_error.set(due_err.clone());
        if title_err.is_some() || due_err.is_some() {
            return;
        }

        set_saving.set(true);
        set_banner.set(None);
        let client = client.clone();
        let editing = editing.clone();
        spawn_local(async move {
            let result = match &editing {
                Some(original) => {
                    let diff = build_update_diff(
                        original,
                        &title_value,
                        &description_value,
                        priority_value,
                        &category_value,
                        &due_date_value,
                    );
                    api::update_todo(&client, &original.id, &diff)
                        .await
                        .map(|updated| store_replace_todo(&store, updated))
                }
                None => {
                    let data = CreateTodoData {
                        title: title_value,
                        description: none_if_empty(description_value),
                        priority: Some(priority_value),
                        category: none_if_empty(category_value),
                        due_date: none_if_empty(due_date_value),
                    };
                    api::create_todo(&client, &data)
                        .await
                        .map(|created| store_insert_todo(&store, created))
                }
            };
            // Closing the modal unmounts this form, so local signals
            // are only touched on failure.
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_saving.set(false);
                    set_banner.set(Some(format!("Failed to save todo: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <h2 class="modal-title">
                    {if is_editing { "Edit Todo" } else { "Create New Todo" }}
                </h2>

                {move || banner.get().map(|msg| view! {
                    <div class="error-banner">{msg}</div>
                })}

                <form on:submit=submit>
                    <div class="form-field">
                        <label>"Title *"</label>
                        <input
                            type="text"
                            placeholder="What needs to be done?"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                                set_title_error.set(None);
                            }
                        />
                        {move || title_error.get().map(|msg| view! {
                            <p class="field-error">{msg}</p>
                        })}
                    </div>

                    <div class="form-field">
                        <label>"Description"</label>
                        <textarea
                            placeholder="Add details..."
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_description.set(input.value());
                            }
                        ></textarea>
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label>"Priority"</label>
                            <select
                                prop:value=move || priority.get().as_str()
                                on:change=move |ev| {
                                    let target = ev.target().unwrap();
                                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                    set_priority.set(Priority::from_value(&select.value()));
                                }
                            >
                                <option value="Low">"Low"</option>
                                <option value="Medium">"Medium"</option>
                                <option value="High">"High"</option>
                            </select>
                        </div>

                        <div class="form-field">
                            <label>"Due Date"</label>
                            <input
                                type="date"
                                prop:value=move || due_date.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_due_date.set(input.value());
                                    set_due_date_error.set(None);
                                }
                            />
                            {move || due_date_error.get().map(|msg| view! {
                                <p class="field-error">{msg}</p>
                            })}
                        </div>
                    </div>

                    <div class="form-field">
                        <label>"Category"</label>
                        <input
                            type="text"
                            placeholder="Work, Personal, etc."
                            prop:value=move || category.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_category.set(input.value());
                            }
                        />
                    </div>

                    <div class="form-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || saving.get()>
                            {if is_editing { "Update Todo" } else { "Create Todo" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> Todo {
        Todo {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            title: "Write report".to_string(),
            description: Some("quarterly".to_string()),
            is_completed: false,
            priority: Priority::Medium,
            category: Some("Work".to_string()),
            due_date: Some("2024-06-01".to_string()),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(validate_title(""), Some("Title is required".to_string()));
        assert_eq!(validate_title("   "), Some("Title is required".to_string()));
        assert_eq!(validate_title("Buy milk"), None);
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        assert_eq!(
            validate_due_date("junk"),
            Some("Invalid date format. Use YYYY-MM-DD".to_string())
        );
        assert_eq!(
            validate_due_date("2024-13-40"),
            Some("Invalid date format. Use YYYY-MM-DD".to_string())
        );
        assert_eq!(validate_due_date("2024-06-01"), None);
        assert_eq!(validate_due_date(""), None);
    }

    #[test]
    fn priority_only_change_diffs_only_priority() {
        let original = todo();
        let diff = build_update_diff(
            &original,
            "Write report",
            "quarterly",
            Priority::High,
            "Work",
            "2024-06-01",
        );
        assert_eq!(
            diff,
            UpdateTodoData {
                priority: Some(Priority::High),
                ..Default::default()
            }
        );
    }

    #[test]
    fn unchanged_fields_produce_an_empty_diff() {
        let original = todo();
        let diff = build_update_diff(
            &original,
            "Write report",
            "quarterly",
            Priority::Medium,
            "Work",
            "2024-06-01",
        );
        assert_eq!(diff, UpdateTodoData::default());
    }

    #[test]
    fn absent_optionals_compare_as_empty_strings() {
        let mut original = todo();
        original.description = None;
        original.category = None;
        original.due_date = None;
        let diff = build_update_diff(&original, "Write report", "", Priority::Medium, "", "");
        assert_eq!(diff, UpdateTodoData::default());
    }

    #[test]
    fn cleared_field_is_included_in_the_diff() {
        let original = todo();
        let diff = build_update_diff(
            &original,
            "Write report",
            "",
            Priority::Medium,
            "Work",
            "2024-06-01",
        );
        assert_eq!(diff.description, Some(String::new()));
        assert_eq!(diff.title, None);
    }

    #[test]
    fn completion_flag_is_never_part_of_the_diff() {
        let mut original = todo();
        original.is_completed = true;
        let diff = build_update_diff(
            &original,
            "Renamed",
            "quarterly",
            Priority::Medium,
            "Work",
            "2024-06-01",
        );
        assert_eq!(diff.is_completed, None);
        assert_eq!(diff.title, Some("Renamed".to_string()));
    }
}
