//! Request routing and the outermost fault guard.
//!
//! The router owns a fixed table of registered routes and the provisioning
//! handler. Its `handle_request` is the single entry point the invoking
//! runtime calls, and it always produces a response: unmatched routes become
//! 404 and escaped faults become 500. No error value leaves the router.

use crate::config::GatewayConfig;
use crate::context::RequestContext;
use crate::directory::DirectoryProvider;
use crate::error::BuildResult;
use crate::handler::{UserProvisioningHandler, error_response};
use crate::http::{HttpRequest, HttpResponse};
use log::{debug, info, warn};

/// Operations a route can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Create a user in the directory
    CreateUser,
}

/// A registered route: a (method, path) pair mapped to one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// HTTP method, matched exactly
    pub method: String,
    /// Request path, matched exactly
    pub path: String,
    /// Operation the route dispatches to
    pub target: RouteTarget,
}

impl Route {
    /// Create a route.
    pub fn new(method: impl Into<String>, path: impl Into<String>, target: RouteTarget) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            target,
        }
    }
}

/// The gateway router.
///
/// # Examples
///
/// ```rust
/// use directory_gateway::{GatewayConfig, HttpRequest, InMemoryDirectory, Router};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let router = Router::new(GatewayConfig::new("pool-1"), InMemoryDirectory::new())?;
///
/// let request = HttpRequest::new("POST", "/users")
///     .with_body(r#"{"username": "alice", "email": "a@example.com"}"#);
/// let response = router.handle_request(&request).await;
/// assert_eq!(response.status_code, 201);
/// # Ok(())
/// # }
/// ```
pub struct Router<P: DirectoryProvider> {
    routes: Vec<Route>,
    handler: UserProvisioningHandler<P>,
}

impl<P: DirectoryProvider> Router<P> {
    /// Create a router from a configuration and a directory provider.
    ///
    /// The configuration is validated here so a misconfigured gateway fails
    /// at startup rather than on its first request.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::BuildError`] when the configuration fails
    /// validation.
    pub fn new(config: GatewayConfig, directory: P) -> BuildResult<Self> {
        config.validate()?;
        Ok(Self {
            routes: vec![Route::new("POST", "/users", RouteTarget::CreateUser)],
            handler: UserProvisioningHandler::new(config, directory),
        })
    }

    /// The registered routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Dispatch one request and produce its response.
    ///
    /// Generates a request id, resolves the route table, runs the matched
    /// operation, and applies the outermost guard.
    pub async fn handle_request(&self, request: &HttpRequest) -> HttpResponse {
        let context = RequestContext::with_generated_id();
        info!(
            "Received {} {} (request: '{}')",
            request.http_method, request.path, context.request_id
        );

        match self.resolve(&request.http_method, &request.path) {
            Some(RouteTarget::CreateUser) => {
                match self.handler.handle_create(request, &context).await {
                    Ok(response) => response,
                    Err(error) => {
                        warn!(
                            "Dispatch fault for {} {}: {} (request: '{}')",
                            request.http_method, request.path, error, context.request_id
                        );
                        error_response(&error)
                    }
                }
            }
            None => {
                debug!(
                    "No route matches {} {} (request: '{}')",
                    request.http_method, request.path, context.request_id
                );
                HttpResponse::not_found()
            }
        }
    }

    /// Look up the operation registered for a (method, path) pair.
    fn resolve(&self, method: &str, path: &str) -> Option<RouteTarget> {
        self.routes
            .iter()
            .find(|route| route.method == method && route.path == path)
            .map(|route| route.target)
    }
}
