//! Outbound response envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Content type declared on every response.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// An outbound HTTP response in the load balancer's envelope shape.
///
/// Serializes with camelCase keys (`statusCode`, `headers`, `body`,
/// `isBase64Encoded`). Every response carries a JSON content-type header, a
/// JSON-encoded body and a false binary flag, whichever path produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// JSON-encoded response body
    pub body: String,
    /// Binary transfer flag, always false
    pub is_base64_encoded: bool,
}

impl HttpResponse {
    /// Assemble a response with the uniform envelope.
    ///
    /// Every response the gateway produces goes through here.
    pub fn json(status_code: u16, body: &Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());
        Self {
            status_code,
            headers,
            body: body.to_string(),
            is_base64_encoded: false,
        }
    }

    /// Assemble an error response with an `{"error": <message>}` body.
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, &json!({ "error": message }))
    }

    /// The fixed response for an unmatched route.
    pub fn not_found() -> Self {
        Self::error(404, "Not Found")
    }

    /// Parse the body back into a JSON value.
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}
