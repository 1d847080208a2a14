//! The user-provisioning operation handler.
//!
//! Decodes a user-creation payload, builds a provisioning command, invokes
//! the injected directory provider, and maps the tagged outcome to an HTTP
//! response. All caller-visible messages are decided here, in one exhaustive
//! mapping.

use crate::command::CreateUserCommand;
use crate::config::GatewayConfig;
use crate::context::RequestContext;
use crate::directory::{DirectoryError, DirectoryProvider, ProvisionedUser};
use crate::error::{GatewayError, GatewayResult, ValidationError};
use crate::http::{HttpRequest, HttpResponse};
use log::{info, warn};
use serde_json::json;
use std::collections::HashMap;

/// Caller-visible message for failures whose detail must not leak.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handler for the user-creation operation.
///
/// Holds the gateway configuration and the injected directory provider, both
/// shared across requests; nothing else survives a single call.
pub struct UserProvisioningHandler<P: DirectoryProvider> {
    config: GatewayConfig,
    directory: P,
}

impl<P: DirectoryProvider> UserProvisioningHandler<P> {
    /// Create a handler with the given configuration and provider.
    pub fn new(config: GatewayConfig, directory: P) -> Self {
        Self { config, directory }
    }

    /// Handle a user-creation request.
    ///
    /// Outcomes map as follows:
    ///
    /// - provisioned → 201 with the created username and directory status
    /// - validation failure → 400 with a field-specific message
    /// - directory rejection → 400 with the directory's message verbatim
    /// - unexpected directory failure → 500 with a generic message, detail
    ///   logged only
    ///
    /// # Errors
    ///
    /// Transport faults (a body that fails base64 or UTF-8 decoding)
    /// propagate to the router's outer guard instead of being mapped here.
    pub async fn handle_create(
        &self,
        request: &HttpRequest,
        context: &RequestContext,
    ) -> GatewayResult<HttpResponse> {
        let body = request.decoded_body()?;

        match self.create_user(body.as_deref(), context).await {
            Ok(user) => {
                info!(
                    "User '{}' created with status '{}' (request: '{}')",
                    user.username, user.status, context.request_id
                );
                Ok(created_response(&user))
            }
            Err(error) => {
                warn!(
                    "User creation failed: {} (request: '{}')",
                    error, context.request_id
                );
                Ok(error_response(&error))
            }
        }
    }

    /// Run the parse-validate-provision pipeline.
    async fn create_user(
        &self,
        body: Option<&str>,
        context: &RequestContext,
    ) -> GatewayResult<ProvisionedUser> {
        let body = body
            .map(str::trim)
            .filter(|body| !body.is_empty())
            .ok_or(ValidationError::MissingBody)?;
        let payload: HashMap<String, String> = serde_json::from_str(body)
            .map_err(|error| ValidationError::malformed_body(error.to_string()))?;

        let command = CreateUserCommand::from_payload(&self.config.user_pool_id, &payload)?;
        let user = self.directory.create_user(command, context).await?;
        Ok(user)
    }
}

/// Build the 201 response for a provisioned user.
fn created_response(user: &ProvisionedUser) -> HttpResponse {
    HttpResponse::json(
        201,
        &json!({
            "message": "User created successfully",
            "username": user.username,
            "status": user.status,
        }),
    )
}

/// Map a dispatch error to its caller-visible response.
///
/// The single place that decides which messages leak: validation messages
/// and directory rejections go to the caller, unexpected directory failures
/// are replaced with a generic message, and transport faults surface their
/// own description under the router's 500 guard.
pub fn error_response(error: &GatewayError) -> HttpResponse {
    match error {
        GatewayError::Validation(validation) => HttpResponse::error(400, &validation.to_string()),
        GatewayError::Directory(DirectoryError::Rejected { message }) => {
            HttpResponse::error(400, message)
        }
        GatewayError::Directory(DirectoryError::Unexpected { .. }) => {
            HttpResponse::error(500, INTERNAL_ERROR_MESSAGE)
        }
        GatewayError::BodyDecode(_) | GatewayError::BodyEncoding(_) => {
            HttpResponse::error(500, &error.to_string())
        }
    }
}
