//! Outbound request envelope.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result};

/// A single request to the Whistle API, before it is dispatched.
///
/// Requests carry authorization by default; call
/// [`without_auth`](Self::without_auth) for public endpoints. Header
/// overrides replace the baseline headers of the same name.
///
/// # Example
///
/// ```
/// use whistle_rs::OutboundRequest;
///
/// let request = OutboundRequest::get("api/pet_foods")
///     .query("type", "dog_food")
///     .header("Accept", "application/json");
/// assert!(request.requires_auth());
/// ```
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    auth: bool,
}

impl OutboundRequest {
    /// Create a request for `path`, relative to the environment base URL.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            auth: true,
        }
    }

    /// Create a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Override a header for this request only.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Append a query string parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for GET requests, which never carry
    /// a body, and [`Error::Json`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        if self.method == Method::GET {
            return Err(Error::InvalidInput(format!(
                "GET {} cannot carry a request body",
                self.path
            )));
        }
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Attach a flat string map as the JSON body.
    pub fn json_map(self, body: &HashMap<String, String>) -> Result<Self> {
        self.json(body)
    }

    /// Send the request without an authorization header.
    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Header overrides, in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Query string parameters, in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Whether an authorization header will be attached.
    pub fn requires_auth(&self) -> bool {
        self.auth
    }
}

/// Percent-encode a caller-supplied value for use as one path segment.
///
/// Empty values and dot segments are rejected since they would address a
/// different resource.
pub(crate) fn segment(value: impl AsRef<str>) -> Result<String> {
    let value = value.as_ref();
    if value.is_empty() || value == "." || value == ".." {
        return Err(Error::InvalidInput(format!(
            "invalid path segment: {:?}",
            value
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}
