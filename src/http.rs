//! HTTP Client Layer
//!
//! Shared request plumbing for the todo and chat backends: one client,
//! bearer injection on every call, uniform 401 handling.

use leptos::prelude::*;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Backend base URL: `API_URL` at build time, localhost fallback.
pub fn base_url() -> String {
    option_env!("API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Client shared by every data service.
///
/// Cloneable; constructed once at app start and handed down via context,
/// so the todo and chat services cannot diverge in interceptor behavior.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
    session: SessionStore,
    /// Bumped on every 401 so the app can fall back to the login view
    unauthorized: RwSignal<u32>,
}

impl ApiClient {
    pub fn new(unauthorized: RwSignal<u32>) -> Self {
        Self::with_base(base_url(), unauthorized)
    }

    pub fn with_base(base: impl Into<String>, unauthorized: RwSignal<u32>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
            session: SessionStore,
            unauthorized,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base, path));
        if let Some(token) = self.session.credential() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and apply the uniform response policy.
    ///
    /// A 401 from any endpoint fails closed: the credential is cleared
    /// and the unauthorized signal bumped before the error is returned.
    async fn dispatch(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        match status {
            StatusCode::UNAUTHORIZED => {
                self.session.clear_credential();
                self.unauthorized.update(|n| *n += 1);
                Err(ApiError::Unauthorized)
            }
            StatusCode::CONFLICT => Err(ApiError::Conflict(Self::error_detail(response).await)),
            StatusCode::UNPROCESSABLE_ENTITY => {
                Err(ApiError::Validation(Self::error_detail(response).await))
            }
            other => Err(ApiError::Server(other.as_u16())),
        }
    }

    async fn error_detail(response: Response) -> String {
        response.text().await.unwrap_or_default()
    }

    async fn into_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let response = self.dispatch(self.request(Method::GET, path).query(query)).await?;
        Self::into_json(response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.dispatch(self.request(Method::POST, path).json(body)).await?;
        Self::into_json(response).await
    }

    /// POST with no payload, decoding the response body.
    pub async fn post_empty_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.dispatch(self.request(Method::POST, path)).await?;
        Self::into_json(response).await
    }

    /// POST with no payload, discarding the response body.
    pub async fn post_discard(&self, path: &str) -> ApiResult<()> {
        self.dispatch(self.request(Method::POST, path)).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.dispatch(self.request(Method::PUT, path).json(body)).await?;
        Self::into_json(response).await
    }

    /// PATCH with no payload, decoding the response body.
    pub async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.dispatch(self.request(Method::PATCH, path)).await?;
        Self::into_json(response).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.dispatch(self.request(Method::DELETE, path)).await?;
        Ok(())
    }
}
