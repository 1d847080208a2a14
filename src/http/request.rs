//! Inbound request envelope.

use crate::error::GatewayResult;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An inbound HTTP request as delivered by the load balancer.
///
/// Field names mirror the wire envelope (`httpMethod`, `path`, `headers`,
/// `body`, `isBase64Encoded`). A request is immutable once received; the
/// gateway only reads it.
///
/// # Examples
///
/// ```rust
/// use directory_gateway::HttpRequest;
///
/// let request = HttpRequest::new("POST", "/users")
///     .with_header("content-type", "application/json")
///     .with_body(r#"{"username": "alice"}"#);
/// assert_eq!(request.http_method, "POST");
/// assert_eq!(request.decoded_body().unwrap().as_deref(), Some(r#"{"username": "alice"}"#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    /// HTTP method, uppercase on the wire
    pub http_method: String,
    /// Request path, without the query string
    pub path: String,
    /// Request headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Raw request body, possibly base64-encoded
    #[serde(default)]
    pub body: Option<String>,
    /// Whether `body` is base64-encoded
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl HttpRequest {
    /// Create a request with the given method and path and no body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: None,
            is_base64_encoded: false,
        }
    }

    /// Set a plain-text body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Set a body that is already base64-encoded.
    pub fn with_base64_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = true;
        self
    }

    /// Add a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Return the body with transfer encoding undone.
    ///
    /// A plain body is returned as-is; a base64-encoded body is decoded and
    /// reinterpreted as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns a transport fault when the base64 flag is set but the body
    /// does not decode, or when the decoded bytes are not valid UTF-8.
    pub fn decoded_body(&self) -> GatewayResult<Option<String>> {
        match &self.body {
            None => Ok(None),
            Some(body) if self.is_base64_encoded => {
                let bytes = BASE64.decode(body)?;
                Ok(Some(String::from_utf8(bytes)?))
            }
            Some(body) => Ok(Some(body.clone())),
        }
    }
}
