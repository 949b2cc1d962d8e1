//! REST Client
//!
//! Typed bindings to the admin backend, organized by domain. Every call site
//! goes through [`ApiClient`], which attaches the bearer token and applies
//! the one global rule: a 401 from any endpoint except login clears the
//! session.

mod admins;
mod auth;
mod content;
mod dashboard;
mod moods;
mod sessions;
mod sounds;
mod users;

use leptos::prelude::GetUntracked;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use crate::store::{self, SessionStateStoreFields, SessionStore};

// Re-export all public items
pub use admins::*;
pub use auth::*;
pub use content::*;
pub use dashboard::*;
pub use moods::*;
pub use sessions::*;
pub use sounds::*;
pub use users::*;

/// Backend base URL, configurable at build time
pub fn base_url() -> String {
    let base = option_env!("API_BASE_URL").unwrap_or("http://localhost:5000/api/");
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Errors surfaced by the network boundary
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// Non-2xx response, message taken from the body where present
    Server { status: u16, message: String },
    /// 401 outside the login flow; the session has already been cleared
    Unauthorized,
    /// Response body did not match the endpoint schema
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(_) => write!(f, "Error connecting to server. Please try again."),
            ApiError::Server { message, .. } => write!(f, "{message}"),
            ApiError::Unauthorized => write!(f, "Your session has expired. Please log in again."),
            ApiError::Decode(_) => write!(f, "Unexpected response from server."),
        }
    }
}

impl ApiError {
    fn js(value: JsValue) -> Self {
        ApiError::Decode(format!("{value:?}"))
    }
}

/// Pagination block shared by the list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub total_pages: u32,
}

enum Body<'a> {
    None,
    Json(String),
    Form(&'a FormData),
}

/// HTTP client every endpoint module calls through
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
}

/// Get the api client from context
pub fn use_api() -> ApiClient {
    leptos::prelude::expect_context::<ApiClient>()
}

impl ApiClient {
    pub fn new(base_url: String, session: SessionStore) -> Self {
        Self { base_url, session }
    }

    async fn send(&self, method: &str, path: &str, body: Body<'_>) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let headers = Headers::new().map_err(ApiError::js)?;
        let token = self.session.token().get_untracked();
        if !token.is_empty() {
            headers
                .append("Authorization", &format!("Bearer {token}"))
                .map_err(ApiError::js)?;
        }

        let opts = RequestInit::new();
        opts.set_method(method);
        match body {
            Body::None => {}
            Body::Json(json) => {
                headers
                    .append("Content-Type", "application/json")
                    .map_err(ApiError::js)?;
                opts.set_body(&JsValue::from_str(&json));
            }
            // Content-Type left to the browser so the multipart boundary is set
            Body::Form(form) => opts.set_body(form),
        }
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::js)?;
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let response: Response = response.dyn_into().map_err(ApiError::js)?;

        let status = response.status();
        if status == 401 && !path.contains("/login") {
            store::clear_session(&self.session);
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&status) {
            let message = Self::error_body_message(&response, status).await;
            web_sys::console::error_1(
                &format!("[API] {method} {path} failed with status {status}").into(),
            );
            return Err(ApiError::Server { status, message });
        }
        Ok(response)
    }

    /// Best-effort extraction of the server's `message`/`error` field
    async fn error_body_message(response: &Response, status: u16) -> String {
        let fallback = format!("Request failed ({status})");
        let Ok(promise) = response.json() else {
            return fallback;
        };
        let Ok(value) = JsFuture::from(promise).await else {
            return fallback;
        };
        let Ok(body) = serde_wasm_bindgen::from_value::<serde_json::Value>(value) else {
            return fallback;
        };
        body.get("message")
            .or_else(|| body.get("error"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or(fallback)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let promise = response.json().map_err(ApiError::js)?;
        let value = JsFuture::from(promise).await.map_err(ApiError::js)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send("GET", path, Body::None).await?;
        Self::decode(response).await
    }

    /// GET decoded loosely, for endpoints whose envelope shape varies
    pub(crate) async fn get_value(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.get_json(path).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self.send("POST", path, Body::Json(json)).await?;
        Self::decode(response).await
    }

    /// POST where the response body is irrelevant
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send("POST", path, Body::Json(json)).await?;
        Ok(())
    }

    pub(crate) async fn post_form(&self, path: &str, form: &FormData) -> Result<(), ApiError> {
        self.send("POST", path, Body::Form(form)).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send("DELETE", path, Body::None).await?;
        Ok(())
    }
}
