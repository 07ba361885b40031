//! A small helper around `reqwest` for the versioned street API.

use std::env;

use anyhow::Context;
use serde_json::Value;

use crate::user::User;
use crate::ApiError;

const DEFAULT_API_URL: &str = "http://localhost:8000/api/";
const API_VERSION: &str = "v1";

/// The two verbs callers pick between. `Post` becomes a `PUT` when an id is
/// given, so callers never choose between create and update themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    root: String,
    http: reqwest::Client,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl ApiClient {
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        Self {
            root,
            http: reqwest::Client::new(),
        }
    }

    /// Reads the API root from `API_URL` at runtime, then at compile time,
    /// then falls back to a local development server.
    pub fn from_env() -> Self {
        let root = env::var("API_URL")
            .ok()
            .or_else(|| option_env!("API_URL").map(str::to_owned))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(root)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Resolves the HTTP verb and URL for a request.
    pub fn route(&self, method: Method, endpoint: &str, id: &str) -> (reqwest::Method, String) {
        let base = format!("{}{}/{}", self.root, API_VERSION, endpoint);
        match (method, id.is_empty()) {
            (Method::Post, true) => (reqwest::Method::POST, base),
            (Method::Post, false) => (reqwest::Method::PUT, format!("{base}/{id}")),
            (Method::Get, true) => (reqwest::Method::GET, base),
            (Method::Get, false) => (reqwest::Method::GET, format!("{base}/{id}")),
        }
    }

    /// Sends a request and returns the JSON body. An empty body is `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        id: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let (verb, url) = self.route(method, endpoint, id);
        let mut builder = self.http.request(verb.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let text = builder
            .send()
            .await
            .with_context(|| format!("{verb} {url}"))?
            .error_for_status()
            .with_context(|| format!("{verb} {url}"))?
            .text()
            .await
            .with_context(|| format!("reading response of {verb} {url}"))?;

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).with_context(|| format!("decoding response of {verb} {url}"))
    }

    /// Like [`ApiClient::request`], but any failure is logged and degraded to
    /// `Value::Null`.
    pub async fn fetch_or_empty(
        &self,
        method: Method,
        endpoint: &str,
        id: &str,
        body: Option<&Value>,
    ) -> Value {
        match self.request(method, endpoint, id, body).await {
            Ok(value) => value,
            Err(e) => {
                dioxus_logger::tracing::warn!("api request failed: {:#}", e);
                Value::Null
            }
        }
    }

    /// Fetches the metadata extension stored for a street. `None` means the
    /// street has no metadata, or that it could not be fetched.
    pub async fn street_extension(&self, street_id: &str) -> Option<Value> {
        let value = self
            .fetch_or_empty(Method::Get, "streetExtension", street_id, None)
            .await;
        (!is_empty_value(&value)).then_some(value)
    }

    /// Creates (no id) or replaces (with id) a street's metadata extension.
    pub async fn save_street_extension(
        &self,
        street_id: Option<&str>,
        body: &Value,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::Post,
            "streetExtension",
            street_id.unwrap_or_default(),
            Some(body),
        )
        .await
    }

    /// Fetches a saved street by id.
    pub async fn street(&self, street_id: &str) -> Result<Value, ApiError> {
        self.request(Method::Get, "streets", street_id, None).await
    }

    /// The signed-in user, if the session cookie identifies one.
    pub async fn current_user(&self) -> Option<User> {
        match self.fetch_or_empty(Method::Get, "user", "", None).await {
            Value::Null => None,
            value => serde_json::from_value(value)
                .inspect_err(|e| dioxus_logger::tracing::warn!("unexpected user payload: {}", e))
                .ok(),
        }
    }

    /// Lists every stored street extension. Used by the admin views.
    pub async fn street_extensions(&self) -> Result<Vec<Value>, ApiError> {
        match self.request(Method::Get, "streetExtension", "", None).await? {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            other => Ok(vec![other]),
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
