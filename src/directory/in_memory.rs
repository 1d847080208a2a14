//! In-memory directory implementation.
//!
//! A thread-safe stand-in for a managed identity directory, used in tests,
//! examples and development. Users live in nested maps keyed by pool and
//! username behind an async RwLock; cloning is cheap and clones operate on
//! the same underlying directory.

use crate::command::{CreateUserCommand, UserAttribute};
use crate::context::RequestContext;
use crate::directory::provider::{DirectoryError, DirectoryProvider, ProvisionedUser};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Status assigned to newly created users, who must replace their temporary
/// password at first sign-in.
pub const NEW_USER_STATUS: &str = "FORCE_CHANGE_PASSWORD";

/// A user record held by the in-memory directory.
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Username, unique within a pool
    pub username: String,
    /// Account status
    pub status: String,
    /// Whether the account is enabled
    pub enabled: bool,
    /// Profile attributes from the creating command
    pub attributes: Vec<UserAttribute>,
    /// Temporary password from the creating command
    pub temporary_password: String,
    /// Creation time
    pub created: DateTime<Utc>,
}

/// Directory statistics, for tests and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Number of pools holding at least one user
    pub pool_count: usize,
    /// Number of users across all pools
    pub total_users: usize,
}

/// Thread-safe in-memory directory.
///
/// Structure: `pool_id` → `username` → [`UserRecord`]. Pools are created
/// implicitly the first time a user is added under them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    pools: Arc<RwLock<HashMap<String, HashMap<String, UserRecord>>>>,
}

impl InMemoryDirectory {
    /// Create a new empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user record.
    pub async fn get_user(&self, pool_id: &str, username: &str) -> Option<UserRecord> {
        let pools = self.pools.read().await;
        pools
            .get(pool_id)
            .and_then(|users| users.get(username))
            .cloned()
    }

    /// Number of users in a pool.
    pub async fn user_count(&self, pool_id: &str) -> usize {
        let pools = self.pools.read().await;
        pools.get(pool_id).map_or(0, HashMap::len)
    }

    /// Directory statistics for debugging and tests.
    pub async fn stats(&self) -> DirectoryStats {
        let pools = self.pools.read().await;
        DirectoryStats {
            pool_count: pools.len(),
            total_users: pools.values().map(HashMap::len).sum(),
        }
    }

    /// Remove all users and pools (useful for testing).
    pub async fn clear(&self) {
        let mut pools = self.pools.write().await;
        pools.clear();
    }
}

impl DirectoryProvider for InMemoryDirectory {
    async fn create_user(
        &self,
        command: CreateUserCommand,
        context: &RequestContext,
    ) -> Result<ProvisionedUser, DirectoryError> {
        let mut pools = self.pools.write().await;
        let users = pools.entry(command.pool_id.clone()).or_default();

        if users.contains_key(&command.username) {
            debug!(
                "Username '{}' already present in pool '{}' (request: '{}')",
                command.username, command.pool_id, context.request_id
            );
            return Err(DirectoryError::rejected("User already exists"));
        }

        let record = UserRecord {
            username: command.username.clone(),
            status: NEW_USER_STATUS.to_string(),
            enabled: true,
            attributes: command.attributes,
            temporary_password: command.temporary_password,
            created: Utc::now(),
        };
        let user = ProvisionedUser::new(&record.username, &record.status);
        users.insert(record.username.clone(), record);

        info!(
            "Created user '{}' in pool '{}' (request: '{}')",
            user.username, command.pool_id, context.request_id
        );
        Ok(user)
    }
}
