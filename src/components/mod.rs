//! UI Components
//!
//! Reusable Leptos components.

mod chat_widget;
mod login_form;
mod register_form;
mod todo_filter;
mod todo_form;
mod todo_item;
mod todo_list;

pub use chat_widget::ChatWidget;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use todo_filter::TodoFilterPanel;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
