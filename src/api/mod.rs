//! API Client
//!
//! Fetch wrappers for the backend REST API, organized by domain. Every call
//! attaches the session bearer token when present; failed calls made while
//! logged in are reported to the backend's frontend-error log endpoint on a
//! best-effort, fire-and-forget basis.

mod auth;
mod chat;
mod meal_plans;
mod pantry;

pub use auth::*;
pub use chat::*;
pub use meal_plans::*;
pub use pantry::*;

use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::session::Session;

/// Base URL of the backend API
pub const API_BASE_URL: &str = match option_env!("PANTRY_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

const LOG_PATH: &str = "/log/frontend-error";

/// Discriminated outcome of a failed API call
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Server answered with a non-2xx status; `detail` is the body's
    /// `detail` field when one was present
    Http { status: u16, detail: Option<String> },
    /// Request never produced a response
    Network(String),
    /// Response body could not be decoded
    Decode(String),
}

impl ApiError {
    /// Message to surface to the user, with a per-operation fallback
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Http {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {status}: {detail}"),
            Self::Http { status, detail: None } => write!(f, "HTTP {status}"),
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Encode a request body as JSON
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

fn build_request(
    session: Session,
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<Request, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(json) = body {
        init.set_body(&JsValue::from_str(&json));
    }
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;
    let headers = request.headers();
    let _ = headers.set("Content-Type", "application/json");
    if let Some(token) = session.load() {
        let _ = headers.set("Authorization", &format!("Bearer {token}"));
    }
    Ok(request)
}

async fn read_text(response: &Response) -> Option<String> {
    let promise = response.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

fn extract_detail(raw: Option<&str>) -> Option<String> {
    serde_json::from_str::<ErrorBody>(raw?).ok()?.detail
}

/// Perform a fetch and classify the outcome. Failures are reported to the
/// log endpoint unless `report` is false (the log endpoint itself is exempt,
/// which prevents reporting recursion).
async fn send(
    session: Session,
    method: &'static str,
    path: &str,
    body: Option<String>,
    report: bool,
) -> Result<Response, ApiError> {
    let url = format!("{API_BASE_URL}{path}");
    let request = build_request(session, method, &url, body)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    match JsFuture::from(window.fetch_with_request(&request)).await {
        Err(e) => {
            let err = ApiError::Network(js_error_message(&e));
            if report {
                report_failure(session, method, &url, None, None, err.to_string());
            }
            Err(err)
        }
        Ok(value) => {
            let response: Response = value
                .dyn_into()
                .map_err(|_| ApiError::Decode("fetch did not return a Response".to_string()))?;
            if response.ok() {
                return Ok(response);
            }
            let status = response.status();
            let raw = read_text(&response).await;
            let err = ApiError::Http {
                status,
                detail: extract_detail(raw.as_deref()),
            };
            if report {
                report_failure(session, method, &url, Some(status), raw, err.to_string());
            }
            Err(err)
        }
    }
}

/// Issue a request and decode the JSON response body
pub(crate) async fn request<T: DeserializeOwned>(
    session: Session,
    method: &'static str,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let response = send(session, method, path, body, path != LOG_PATH).await?;
    let promise = response
        .json()
        .map_err(|e| ApiError::Decode(js_error_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_error_message(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a request whose success body is ignored (201/204 endpoints)
pub(crate) async fn request_empty(
    session: Session,
    method: &'static str,
    path: &str,
    body: Option<String>,
) -> Result<(), ApiError> {
    send(session, method, path, body, path != LOG_PATH)
        .await
        .map(|_| ())
}

#[derive(Serialize)]
struct FrontendErrorReport {
    error_message: String,
    error_stack: Option<String>,
    url: String,
    user_agent: String,
    timestamp: String,
    additional_data: RequestDetails,
}

#[derive(Serialize)]
struct RequestDetails {
    method: String,
    url: String,
    status: Option<u16>,
    body: Option<String>,
}

/// Best-effort diagnostic report for a failed call. Only fires while a
/// session token is present; its own failure is swallowed and never retried.
fn report_failure(
    session: Session,
    method: &str,
    url: &str,
    status: Option<u16>,
    body: Option<String>,
    message: String,
) {
    if session.load().is_none() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let report = FrontendErrorReport {
        error_message: message,
        error_stack: None,
        url: window.location().href().unwrap_or_default(),
        user_agent: window.navigator().user_agent().unwrap_or_default(),
        timestamp: String::from(js_sys::Date::new_0().to_iso_string()),
        additional_data: RequestDetails {
            method: method.to_string(),
            url: url.to_string(),
            status,
            body,
        },
    };
    let Ok(json) = serde_json::to_string(&report) else {
        return;
    };
    spawn_local(async move {
        let _ = send(session, "POST", LOG_PATH, Some(json), false).await;
    });
}
