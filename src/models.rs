//! Frontend Models
//!
//! Data structures matching the backend REST contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user profile (matches `GET /auth/profile`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: String,
}

/// Todo priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a select-option value; unknown values fall back to Medium.
    pub fn from_value(value: &str) -> Self {
        match value {
            "Low" => Priority::Low,
            "High" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_completed: bool,
    pub priority: Priority,
    #[serde(default)]
    pub category: Option<String>,
    /// ISO date string (YYYY-MM-DD)
    #[serde(default)]
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// ========================
// Filter Criteria
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    /// Query value for `status=`; `All` means no constraint.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Completed => Some("true"),
            StatusFilter::Pending => Some("false"),
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "completed" => StatusFilter::Completed,
            "pending" => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            PriorityFilter::All => None,
            PriorityFilter::Low => Some("Low"),
            PriorityFilter::Medium => Some("Medium"),
            PriorityFilter::High => Some("High"),
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "Low" => PriorityFilter::Low,
            "Medium" => PriorityFilter::Medium,
            "High" => PriorityFilter::High,
            _ => PriorityFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.query_value().unwrap_or("all")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DueDateFilter {
    #[default]
    All,
    Today,
    Upcoming,
    Overdue,
}

impl DueDateFilter {
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            DueDateFilter::All => None,
            DueDateFilter::Today => Some("today"),
            DueDateFilter::Upcoming => Some("upcoming"),
            DueDateFilter::Overdue => Some("overdue"),
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "today" => DueDateFilter::Today,
            "upcoming" => DueDateFilter::Upcoming,
            "overdue" => DueDateFilter::Overdue,
            _ => DueDateFilter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.query_value().unwrap_or("all")
    }
}

/// One snapshot of the five list criteria.
///
/// "all"/empty fields mean "no constraint" and are never sent to the
/// server as literal filter values.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub category: String,
    pub due_date: DueDateFilter,
    pub search_term: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            priority: PriorityFilter::All,
            category: "all".to_string(),
            due_date: DueDateFilter::All,
            search_term: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Build a snapshot from raw form fields, normalizing empty and
    /// whitespace-only text to "no constraint".
    pub fn normalized(
        status: StatusFilter,
        priority: PriorityFilter,
        category: &str,
        due_date: DueDateFilter,
        search_term: &str,
    ) -> Self {
        let category = category.trim();
        Self {
            status,
            priority,
            category: if category.is_empty() { "all".to_string() } else { category.to_string() },
            due_date,
            search_term: search_term.trim().to_string(),
        }
    }

    /// `category=` query value; "all" or blank means no constraint.
    pub fn category_param(&self) -> Option<&str> {
        let category = self.category.trim();
        if category.is_empty() || category == "all" {
            None
        } else {
            Some(category)
        }
    }

    /// `search=` query value; blank means no constraint.
    pub fn search_param(&self) -> Option<&str> {
        let search = self.search_term.trim();
        if search.is_empty() {
            None
        } else {
            Some(search)
        }
    }
}

// ========================
// Chat Messages
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the conversation log. UI-only, reset on page reload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_criteria_are_all_neutral() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.status, StatusFilter::All);
        assert_eq!(criteria.priority, PriorityFilter::All);
        assert_eq!(criteria.category, "all");
        assert_eq!(criteria.due_date, DueDateFilter::All);
        assert_eq!(criteria.search_term, "");
    }

    #[test]
    fn neutral_criteria_emit_no_query_values() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.status.query_value(), None);
        assert_eq!(criteria.priority.query_value(), None);
        assert_eq!(criteria.category_param(), None);
        assert_eq!(criteria.due_date.query_value(), None);
        assert_eq!(criteria.search_param(), None);
    }

    #[test]
    fn status_maps_to_boolean_query_values() {
        assert_eq!(StatusFilter::Completed.query_value(), Some("true"));
        assert_eq!(StatusFilter::Pending.query_value(), Some("false"));
    }

    #[test]
    fn normalized_trims_and_neutralizes_blank_text() {
        let criteria = FilterCriteria::normalized(
            StatusFilter::Pending,
            PriorityFilter::High,
            "   ",
            DueDateFilter::Overdue,
            "  groceries  ",
        );
        assert_eq!(criteria.category, "all");
        assert_eq!(criteria.search_term, "groceries");
        assert_eq!(criteria.status, StatusFilter::Pending);
    }

    #[test]
    fn priority_round_trips_through_select_values() {
        for filter in [PriorityFilter::Low, PriorityFilter::Medium, PriorityFilter::High] {
            assert_eq!(PriorityFilter::from_value(filter.as_str()), filter);
        }
        assert_eq!(PriorityFilter::from_value("all"), PriorityFilter::All);
    }

    #[test]
    fn todo_deserializes_with_optional_fields_missing() {
        let json = r#"{
            "id": "t1",
            "user_id": "u1",
            "title": "Buy milk",
            "is_completed": false,
            "priority": "Medium",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;
        let todo: Todo = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(todo.description, None);
        assert_eq!(todo.category, None);
        assert_eq!(todo.due_date, None);
        assert_eq!(todo.priority, Priority::Medium);
    }
}
