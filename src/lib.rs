//! User-provisioning gateway library.
//!
//! Routes load-balancer-delivered HTTP events, validates user-creation
//! payloads, provisions users through an injected directory provider, and
//! maps every outcome to a uniform JSON response envelope.
//!
//! # Core Components
//!
//! - [`Router`] - Single entry point: route table, dispatch, outer fault guard
//! - [`UserProvisioningHandler`] - Payload validation and outcome mapping
//! - [`DirectoryProvider`] - Trait for pluggable identity directories
//!
//! # Quick Start
//!
//! ```rust
//! use directory_gateway::{GatewayConfig, HttpRequest, InMemoryDirectory, Router};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GatewayConfig::new("us-east-1_Example1");
//! let router = Router::new(config, InMemoryDirectory::new())?;
//!
//! let request = HttpRequest::new("POST", "/users")
//!     .with_body(r#"{"username": "alice", "email": "a@example.com"}"#);
//! let response = router.handle_request(&request).await;
//! assert_eq!(response.status_code, 201);
//! # Ok(())
//! # }
//! ```
//!
//! Every response, whatever the outcome, carries a JSON content-type header,
//! a JSON body and a false binary flag; status codes are 201 (created),
//! 400 (validation failure or directory rejection), 404 (unmatched route)
//! and 500 (unexpected fault, detail logged but never returned).

pub mod command;
pub mod config;
pub mod context;
pub mod directory;
pub mod error;
pub mod handler;
pub mod http;
pub mod router;

// Re-export commonly used types for convenience
pub use command::{CreateUserCommand, UserAttribute};
pub use config::{GatewayConfig, POOL_ID_ENV_VAR};
pub use context::RequestContext;
pub use directory::{
    DirectoryError, DirectoryProvider, DirectoryStats, InMemoryDirectory, NEW_USER_STATUS,
    ProvisionedUser, UserRecord,
};
pub use error::{BuildError, BuildResult, GatewayError, GatewayResult, ValidationError};
pub use handler::UserProvisioningHandler;
pub use http::{HttpRequest, HttpResponse};
pub use router::{Route, RouteTarget, Router};
