//! Application Context
//!
//! Shared session state provided via Leptos Context API, plus the auth
//! lifecycle flows that drive it. The context object is created once in
//! `App` and handed to components explicitly — there is no module-level
//! session global.

use leptos::prelude::*;

use crate::api;
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::models::User;

/// Authentication lifecycle for the session.
///
/// Always starts in `Loading` until the startup validation round trip
/// completes; `Authenticated` requires a valid token AND a fetched
/// profile.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl AuthPhase {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current auth lifecycle state - read
    pub auth: ReadSignal<AuthPhase>,
    set_auth: WriteSignal<AuthPhase>,
    /// Trigger to reload todos from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        auth: (ReadSignal<AuthPhase>, WriteSignal<AuthPhase>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            auth: auth.0,
            set_auth: auth.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of todos
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_unauthenticated(&self) {
        self.set_auth.set(AuthPhase::Unauthenticated);
    }

    // ========================
    // Auth Flows
    // ========================

    /// Login then fetch the profile. A valid token whose profile fetch
    /// fails counts as unauthenticated and the token is discarded, so
    /// no failure leaves partial session state behind.
    pub async fn login(&self, client: &ApiClient, email: &str, password: &str) -> ApiResult<()> {
        api::login(client, &api::Credentials { email, password }).await?;
        match api::fetch_profile(client).await {
            Ok(user) => {
                self.set_auth.set(AuthPhase::Authenticated(user));
                Ok(())
            }
            Err(e) => {
                client.session().clear_credential();
                self.set_auth.set(AuthPhase::Unauthenticated);
                Err(e)
            }
        }
    }

    /// Register, then login with the same credentials.
    pub async fn register(&self, client: &ApiClient, email: &str, password: &str) -> ApiResult<()> {
        api::register(client, &api::Credentials { email, password }).await?;
        self.login(client, email, password).await
    }

    /// Best-effort server notification; local state is cleared regardless.
    pub async fn logout(&self, client: &ApiClient) {
        api::logout(client).await;
        self.set_auth.set(AuthPhase::Unauthenticated);
    }

    /// Startup check: decide whether the stored credential is usable.
    /// Resolves `Loading` into one of the two settled phases.
    pub async fn restore_session(&self, client: &ApiClient) {
        if client.session().has_credential() && api::validate_token(client).await {
            match api::fetch_profile(client).await {
                Ok(user) => {
                    self.set_auth.set(AuthPhase::Authenticated(user));
                    return;
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[Auth] Profile fetch failed after validation: {}", e).into(),
                    );
                    client.session().clear_credential();
                }
            }
        }
        self.set_auth.set(AuthPhase::Unauthenticated);
    }
}
