//! HTTP envelope types for load-balancer-routed requests.
//!
//! Requests and responses travel as JSON event envelopes with camelCase
//! keys. [`HttpRequest`] is what the invoking runtime deserializes and hands
//! to the gateway; [`HttpResponse`] is what the gateway hands back. Bodies
//! may arrive base64-encoded when the envelope says so; responses are always
//! plain JSON text.

mod request;
mod response;

pub use request::HttpRequest;
pub use response::HttpResponse;
