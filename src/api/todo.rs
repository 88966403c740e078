//! Todo Service
//!
//! CRUD and filtered queries against `/todos`, normalized to one page
//! shape regardless of how the server frames its list response.

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::{FilterCriteria, Priority, Todo};

pub const DEFAULT_PAGE_LIMIT: u32 = 50;

// ========================
// Payloads
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTodoData {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Partial update; only set fields reach the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTodoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

// ========================
// List Envelope
// ========================

/// Normalized list result.
///
/// `total` falls back to the returned item count when the server does
/// not report one; callers must not read it as a true server-side count
/// in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoPage {
    pub items: Vec<Todo>,
    pub total: usize,
    pub limit: u32,
    pub offset: u32,
}

/// The backend answers `/todos` either with a bare array or an envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawListResponse {
    Enveloped {
        todos: Vec<Todo>,
        #[serde(default)]
        total: Option<usize>,
    },
    Bare(Vec<Todo>),
}

fn normalize_page(raw: RawListResponse, limit: u32, offset: u32) -> TodoPage {
    match raw {
        RawListResponse::Enveloped { todos, total } => {
            let total = total.unwrap_or(todos.len());
            TodoPage { items: todos, total, limit, offset }
        }
        RawListResponse::Bare(items) => {
            let total = items.len();
            TodoPage { items, total, limit, offset }
        }
    }
}

/// Translate one filter snapshot into `/todos` query parameters.
///
/// Neutral criteria are omitted entirely; `limit` and `offset` are
/// always present.
pub fn list_query(filters: &FilterCriteria, limit: u32, offset: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(search) = filters.search_param() {
        params.push(("search", search.to_string()));
    }
    if let Some(status) = filters.status.query_value() {
        params.push(("status", status.to_string()));
    }
    if let Some(priority) = filters.priority.query_value() {
        params.push(("priority", priority.to_string()));
    }
    if let Some(category) = filters.category_param() {
        params.push(("category", category.to_string()));
    }
    if let Some(due_date) = filters.due_date.query_value() {
        params.push(("due_date", due_date.to_string()));
    }
    params.push(("limit", limit.to_string()));
    params.push(("offset", offset.to_string()));
    params
}

// ========================
// Commands
// ========================

pub async fn list_todos(
    client: &ApiClient,
    filters: &FilterCriteria,
    limit: u32,
    offset: u32,
) -> ApiResult<TodoPage> {
    let raw: RawListResponse = client
        .get_json("/todos", &list_query(filters, limit, offset))
        .await?;
    Ok(normalize_page(raw, limit, offset))
}

pub async fn create_todo(client: &ApiClient, data: &CreateTodoData) -> ApiResult<Todo> {
    client.post_json("/todos", data).await
}

pub async fn update_todo(client: &ApiClient, id: &str, data: &UpdateTodoData) -> ApiResult<Todo> {
    client.put_json(&format!("/todos/{}", id), data).await
}

pub async fn toggle_todo_completion(client: &ApiClient, id: &str) -> ApiResult<Todo> {
    client.patch_json(&format!("/todos/{}/toggle", id)).await
}

pub async fn delete_todo(client: &ApiClient, id: &str) -> ApiResult<()> {
    client.delete(&format!("/todos/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DueDateFilter, PriorityFilter, StatusFilter};

    fn parse(json: &str) -> RawListResponse {
        serde_json::from_str(json).expect("should deserialize")
    }

    #[test]
    fn neutral_filters_send_only_pagination() {
        let params = list_query(&FilterCriteria::default(), 50, 0);
        assert_eq!(
            params,
            vec![("limit", "50".to_string()), ("offset", "0".to_string())]
        );
    }

    #[test]
    fn full_criteria_translate_in_order() {
        let criteria = FilterCriteria {
            status: StatusFilter::Pending,
            priority: PriorityFilter::High,
            category: "Work".to_string(),
            due_date: DueDateFilter::Overdue,
            search_term: "report".to_string(),
        };
        let params = list_query(&criteria, 20, 40);
        assert_eq!(
            params,
            vec![
                ("search", "report".to_string()),
                ("status", "false".to_string()),
                ("priority", "High".to_string()),
                ("category", "Work".to_string()),
                ("due_date", "overdue".to_string()),
                ("limit", "20".to_string()),
                ("offset", "40".to_string()),
            ]
        );
    }

    #[test]
    fn bare_array_normalizes_with_count_as_total() {
        let raw = parse(
            r#"[{"id":"t1","user_id":"u1","title":"A","is_completed":false,
                "priority":"Low","created_at":"c","updated_at":"u"}]"#,
        );
        let page = normalize_page(raw, 50, 0);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 1);
        assert_eq!(page.limit, 50);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn envelope_without_total_falls_back_to_count() {
        let raw = parse(
            r#"{"todos":[
                {"id":"t1","user_id":"u1","title":"A","is_completed":false,
                 "priority":"Low","created_at":"c","updated_at":"u"},
                {"id":"t2","user_id":"u1","title":"B","is_completed":true,
                 "priority":"High","created_at":"c","updated_at":"u"}
            ]}"#,
        );
        let page = normalize_page(raw, 10, 0);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn envelope_with_total_keeps_server_count() {
        let raw = parse(
            r#"{"todos":[
                {"id":"t1","user_id":"u1","title":"A","is_completed":false,
                 "priority":"Low","created_at":"c","updated_at":"u"}
            ],"total":37}"#,
        );
        let page = normalize_page(raw, 1, 0);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 37);
    }

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let json = serde_json::to_string(&UpdateTodoData::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let data = UpdateTodoData {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"priority":"High"}"#);
    }
}
