//! The directory provider trait and its outcome types.

use crate::command::CreateUserCommand;
use crate::context::RequestContext;
use std::future::Future;

/// Record returned by the directory for a successfully provisioned user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedUser {
    /// Username as recorded by the directory
    pub username: String,
    /// Account status reported by the directory, e.g. `FORCE_CHANGE_PASSWORD`
    pub status: String,
}

impl ProvisionedUser {
    /// Create a provisioned-user record.
    pub fn new(username: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            status: status.into(),
        }
    }
}

/// Failure outcomes a directory provider can report.
///
/// The tag drives the caller-visible mapping: a rejection is the directory
/// declining the operation for a reason the caller can correct, and its
/// message is surfaced verbatim; an unexpected failure is anything else,
/// and only a generic message ever reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The directory declined the operation (duplicate user, policy
    /// violation, malformed attribute)
    #[error("Rejected by the directory: {message}")]
    Rejected { message: String },

    /// Transport failures, provider bugs, anything the caller cannot correct
    #[error("Unexpected directory failure: {message}")]
    Unexpected { message: String },
}

impl DirectoryError {
    /// Create a rejection with the directory's own message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create an unexpected failure.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }
}

/// A capability that creates users in an identity directory.
///
/// Implementations wrap a concrete directory and classify every failure as
/// [`DirectoryError::Rejected`] or [`DirectoryError::Unexpected`], so
/// callers can map outcomes exhaustively without inspecting provider
/// internals. A provider is constructed once per process and shared across
/// concurrent requests.
///
/// # Examples
///
/// ```rust
/// use directory_gateway::{
///     CreateUserCommand, DirectoryProvider, InMemoryDirectory, RequestContext,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let directory = InMemoryDirectory::new();
/// let context = RequestContext::with_generated_id();
/// let command = CreateUserCommand::from_payload(
///     "pool-1",
///     &[("username".to_string(), "alice".to_string())].into_iter().collect(),
/// )?;
///
/// let user = directory.create_user(command, &context).await?;
/// assert_eq!(user.username, "alice");
/// # Ok(())
/// # }
/// ```
pub trait DirectoryProvider: Send + Sync {
    /// Create a user in the pool named by the command.
    ///
    /// # Errors
    ///
    /// [`DirectoryError::Rejected`] when the directory declines the
    /// operation; [`DirectoryError::Unexpected`] for any other failure.
    fn create_user(
        &self,
        command: CreateUserCommand,
        context: &RequestContext,
    ) -> impl Future<Output = Result<ProvisionedUser, DirectoryError>> + Send;
}
