//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo
//! collection here is the client-side source of truth for the active
//! session; it is written only from resolved service calls and reset
//! wholesale on sign-out.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ChatAction;
use crate::models::Todo;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos for the authenticated session
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection from a fresh list query
pub fn store_set_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Insert a newly created todo at the head
pub fn store_insert_todo(store: &AppStore, todo: Todo) {
    insert_head(&mut store.todos().write(), todo);
}

/// Replace a todo in the store by ID
pub fn store_replace_todo(store: &AppStore, updated: Todo) {
    replace_by_id(&mut store.todos().write(), updated);
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &AppStore, todo_id: &str) {
    remove_by_id(&mut store.todos().write(), todo_id);
}

/// Reset the collection; called whenever authentication goes away
pub fn store_clear(store: &AppStore) {
    store.todos().write().clear();
}

/// Adopt a server-confirmed chat mutation.
///
/// This is the only entry point for chat-triggered changes: the server
/// already applied them, so the normal create/update/delete calls must
/// not run again for these items.
pub fn store_apply_chat_patch(store: &AppStore, action: ChatAction, updated_tasks: &[Todo]) {
    apply_external_patch(&mut store.todos().write(), action, updated_tasks);
}

// ========================
// Collection Operations
// ========================

fn insert_head(todos: &mut Vec<Todo>, todo: Todo) {
    todos.insert(0, todo);
}

fn replace_by_id(todos: &mut [Todo], updated: Todo) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == updated.id) {
        *todo = updated;
    }
}

fn remove_by_id(todos: &mut Vec<Todo>, todo_id: &str) {
    todos.retain(|todo| todo.id != todo_id);
}

fn apply_external_patch(todos: &mut Vec<Todo>, action: ChatAction, updated_tasks: &[Todo]) {
    match action {
        ChatAction::Delete => {
            for task in updated_tasks {
                remove_by_id(todos, &task.id);
            }
        }
        ChatAction::Create | ChatAction::Update | ChatAction::Complete => {
            for task in updated_tasks {
                if todos.iter().any(|todo| todo.id == task.id) {
                    replace_by_id(todos, task.clone());
                } else {
                    insert_head(todos, task.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn todo(id: &str, title: &str) -> Todo {
        Todo {
            id: id.to_string(),
            user_id: "u1".to_string(),
            title: title.to_string(),
            description: None,
            is_completed: false,
            priority: Priority::Medium,
            category: None,
            due_date: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn insert_head_puts_new_todo_first() {
        let mut todos = vec![todo("t1", "old")];
        insert_head(&mut todos, todo("t2", "new"));
        assert_eq!(todos[0].id, "t2");
        assert_eq!(todos.len(), 2);
    }

    #[test]
    fn replace_by_id_swaps_exactly_one_entry() {
        let mut todos = vec![todo("t1", "a"), todo("t2", "b")];
        let mut updated = todo("t2", "b edited");
        updated.is_completed = true;
        replace_by_id(&mut todos, updated);
        assert_eq!(todos[0].title, "a");
        assert_eq!(todos[1].title, "b edited");
        assert!(todos[1].is_completed);
    }

    #[test]
    fn replace_by_id_ignores_unknown_ids() {
        let mut todos = vec![todo("t1", "a")];
        replace_by_id(&mut todos, todo("t9", "ghost"));
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "a");
    }

    #[test]
    fn remove_by_id_drops_only_the_target() {
        let mut todos = vec![todo("t1", "a"), todo("t2", "b")];
        remove_by_id(&mut todos, "t1");
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "t2");
    }

    #[test]
    fn chat_delete_patch_removes_listed_tasks() {
        let mut todos = vec![todo("t1", "a"), todo("t2", "b"), todo("t3", "c")];
        apply_external_patch(&mut todos, ChatAction::Delete, &[todo("t1", "a"), todo("t3", "c")]);
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "t2");
    }

    #[test]
    fn chat_update_patch_replaces_known_tasks() {
        let mut todos = vec![todo("t1", "a")];
        let mut patched = todo("t1", "a done");
        patched.is_completed = true;
        apply_external_patch(&mut todos, ChatAction::Complete, &[patched]);
        assert_eq!(todos.len(), 1);
        assert!(todos[0].is_completed);
        assert_eq!(todos[0].title, "a done");
    }

    #[test]
    fn chat_create_patch_inserts_unknown_tasks_at_head() {
        let mut todos = vec![todo("t1", "a")];
        apply_external_patch(&mut todos, ChatAction::Create, &[todo("t2", "fresh")]);
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, "t2");
    }
}
