//! Auth Service
//!
//! Login, registration, logout and token validation against `/auth`.

use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::User;

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Token grant from `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Deserialize)]
struct ValidateResponse {
    valid: bool,
}

/// POST /auth/login — persists the returned token on success only.
pub async fn login(client: &ApiClient, credentials: &Credentials<'_>) -> ApiResult<AuthResponse> {
    let response: AuthResponse = client.post_json("/auth/login", credentials).await?;
    client.session().set_credential(&response.access_token);
    Ok(response)
}

/// POST /auth/register — a 409 means the account already exists.
pub async fn register(client: &ApiClient, credentials: &Credentials<'_>) -> ApiResult<User> {
    client.post_json("/auth/register", credentials).await
}

/// POST /auth/logout — best effort. The local credential is cleared no
/// matter what the server says; a stale session must never survive.
pub async fn logout(client: &ApiClient) {
    if let Err(e) = client.post_discard("/auth/logout").await {
        web_sys::console::warn_1(&format!("[Auth] Logout request failed: {}", e).into());
    }
    client.session().clear_credential();
}

/// GET /auth/profile
pub async fn fetch_profile(client: &ApiClient) -> ApiResult<User> {
    client.get_json("/auth/profile", &[]).await
}

/// POST /auth/validate-token — any failure reads as "invalid".
pub async fn validate_token(client: &ApiClient) -> bool {
    match client.post_empty_json::<ValidateResponse>("/auth/validate-token").await {
        Ok(response) => response.valid,
        Err(_) => false,
    }
}
