//! Chat Service
//!
//! Assistant endpoint bindings. A chat turn may mutate the todo
//! collection server-side; the response is the authoritative statement
//! of what changed.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::http::ApiClient;
use crate::models::Todo;

#[derive(Serialize)]
struct ProcessArgs<'a> {
    message: &'a str,
}

/// What the assistant did server-side, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChatAction {
    Create,
    Update,
    Delete,
    Complete,
}

/// Outcome of one chat turn.
///
/// When `updated_tasks` is present it is the new source of truth for
/// the affected items; the client must not re-derive the mutation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub action_performed: Option<ChatAction>,
    #[serde(default)]
    pub updated_tasks: Option<Vec<Todo>>,
}

/// POST /chat/process when a credential is present, otherwise the
/// public variant with the same payload shape — anonymous chat works.
pub async fn send_message(client: &ApiClient, message: &str) -> ApiResult<ChatResponse> {
    let path = if client.session().has_credential() {
        "/chat/process"
    } else {
        "/chat/process_public"
    };
    client.post_json(path, &ProcessArgs { message }).await
}

/// User-facing text for a failed chat turn. Every failure path speaks;
/// the conversation log never fails silently.
pub fn failure_reply(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized => "Authentication error. Please log in again.".to_string(),
        ApiError::Validation(_) => {
            "Invalid request format. Please try rephrasing your message.".to_string()
        }
        ApiError::Conflict(_) => "Server error (409). Please try again later.".to_string(),
        ApiError::Server(status) => {
            format!("Server error ({}). Please try again later.", status)
        }
        ApiError::Network(_) => {
            "Network error. Please check your connection and try again.".to_string()
        }
        ApiError::Decode(_) => "An unexpected error occurred. Please try again.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parses_without_action_or_tasks() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"reply":"Hello!"}"#).expect("should deserialize");
        assert_eq!(response.reply, "Hello!");
        assert_eq!(response.action_performed, None);
        assert_eq!(response.updated_tasks, None);
    }

    #[test]
    fn response_parses_uppercase_actions() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"reply":"Done","action_performed":"DELETE","updated_tasks":[]}"#,
        )
        .expect("should deserialize");
        assert_eq!(response.action_performed, Some(ChatAction::Delete));
        assert_eq!(response.updated_tasks, Some(Vec::new()));
    }

    #[test]
    fn failure_replies_follow_status_mapping() {
        assert_eq!(
            failure_reply(&ApiError::Unauthorized),
            "Authentication error. Please log in again."
        );
        assert_eq!(
            failure_reply(&ApiError::Validation("bad".to_string())),
            "Invalid request format. Please try rephrasing your message."
        );
        assert_eq!(
            failure_reply(&ApiError::Server(503)),
            "Server error (503). Please try again later."
        );
        assert_eq!(
            failure_reply(&ApiError::Network("timeout".to_string())),
            "Network error. Please check your connection and try again."
        );
        assert_eq!(
            failure_reply(&ApiError::Decode("eof".to_string())),
            "An unexpected error occurred. Please try again."
        );
    }
}
