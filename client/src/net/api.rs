//! REST helpers: endpoint paths, the uniform [`ApiError`], and [`api_call`].
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: [`api_call`] fails with "not available on server" since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! [`api_call`] reports every failure twice: once as a dismissible on-screen
//! alert and once to the caller as an [`ApiError`] for local handling.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::util::alert::{Alert, AlertKind, show_alert};

/// Message used when a failed response carries no `error` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";

/// Uniform error for every API failure: transport, status, or decoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The `{ message }` object page scripts receive when a call fails.
    pub fn to_json(&self) -> Value {
        serde_json::json!({ "message": self.message })
    }
}

/// HTTP verbs accepted by [`api_call`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Parse a fetch-style method name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Request options handed over by page scripts as a fetch-style
/// `{ method, body }` object. Other fields (headers) are ignored; requests
/// always carry a JSON content type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl CallOptions {
    /// Read options from their JSON form. A string `body` is decoded as the
    /// JSON text a script produced with `JSON.stringify`.
    ///
    /// # Errors
    ///
    /// Returns an error for a non-object options value, an unknown method,
    /// or a string body that is not JSON.
    pub fn from_json(options: Option<&Value>) -> Result<Self, ApiError> {
        let Some(options) = options.filter(|options| !options.is_null()) else {
            return Ok(Self::default());
        };
        let Some(fields) = options.as_object() else {
            return Err(ApiError::new("request options must be an object"));
        };
        let method = match fields.get("method") {
            None | Some(Value::Null) => Method::Get,
            Some(Value::String(name)) => {
                Method::parse(name).ok_or_else(|| ApiError::new(format!("unsupported method: {name}")))?
            }
            Some(other) => return Err(ApiError::new(format!("unsupported method: {other}"))),
        };
        let body = match fields.get("body") {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => Some(
                serde_json::from_str(raw).map_err(|err| ApiError::new(format!("request body is not JSON: {err}")))?,
            ),
            Some(body) => Some(body.clone()),
        };
        Ok(Self { method, body })
    }
}

/// Join `base_url` and an absolute API `path`.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

pub fn set_language_endpoint(base_url: &str) -> String {
    endpoint(base_url, "/api/set-language")
}

pub fn translations_endpoint(base_url: &str, language: &str) -> String {
    endpoint(base_url, &format!("/api/get-translations/{language}"))
}

pub fn supported_languages_endpoint(base_url: &str) -> String {
    endpoint(base_url, "/api/supported-languages")
}

pub fn translate_endpoint(base_url: &str) -> String {
    endpoint(base_url, "/api/translate")
}

/// Map a decoded response body to the helper result.
///
/// # Errors
///
/// Returns the body's `error` string (or [`DEFAULT_ERROR_MESSAGE`]) when
/// the HTTP status was not OK.
pub fn interpret_response(ok: bool, body: Value) -> Result<Value, ApiError> {
    if ok {
        return Ok(body);
    }
    let message = body
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(DEFAULT_ERROR_MESSAGE);
    Err(ApiError::new(message))
}

/// The alert shown for a failed [`api_call`].
pub fn error_alert(err: &ApiError) -> Alert {
    Alert::new(format!("Error: {}", err.message), AlertKind::Danger)
}

/// Send a JSON request to `path` and decode the JSON response as `T`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, non-OK status, or a body
/// that does not decode as `T`. The error has already been shown as an alert.
pub async fn api_call<T: DeserializeOwned>(
    config: &ClientConfig,
    method: Method,
    path: &str,
    body: Option<&Value>,
) -> Result<T, ApiError> {
    let result = send_json(&endpoint(&config.base_url, path), method, body).await;
    let decoded = result.and_then(|value| {
        serde_json::from_value::<T>(value).map_err(|err| ApiError::new(err.to_string()))
    });
    if let Err(err) = &decoded {
        leptos::logging::error!("API call failed: path={path} error={err}");
        show_alert(config, &error_alert(err));
    }
    decoded
}

/// [`api_call`] driven by fetch-style options from a page script.
///
/// # Errors
///
/// Same as [`api_call`]; invalid options are reported the same way.
pub async fn api_call_json(config: &ClientConfig, path: &str, options: Option<&Value>) -> Result<Value, ApiError> {
    let options = match CallOptions::from_json(options) {
        Ok(options) => options,
        Err(err) => {
            leptos::logging::error!("API call failed: path={path} error={err}");
            show_alert(config, &error_alert(&err));
            return Err(err);
        }
    };
    api_call(config, options.method, path, options.body.as_ref()).await
}

async fn send_json(url: &str, method: Method, body: Option<&Value>) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
        .header("Content-Type", "application/json");
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::new(e.to_string()))?;
        let resp = request.send().await.map_err(|e| ApiError::new(e.to_string()))?;
        let ok = resp.ok();
        let body: Value = resp.json().await.map_err(|e| ApiError::new(e.to_string()))?;
        interpret_response(ok, body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, method, body);
        Err(ApiError::new("not available on server"))
    }
}
