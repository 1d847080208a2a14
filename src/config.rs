//! Gateway configuration.
//!
//! Configuration is an explicit value constructed once at process startup,
//! validated, and handed to the gateway. Request handling reads it by
//! reference and never consults the environment itself.

use crate::error::{BuildError, BuildResult};

/// Environment variable holding the target user pool identifier.
pub const POOL_ID_ENV_VAR: &str = "USER_POOL_ID";

/// Configuration for a provisioning gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Identifier of the directory user pool new users are created under.
    pub user_pool_id: String,
}

impl GatewayConfig {
    /// Create a configuration with an explicit pool identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use directory_gateway::GatewayConfig;
    ///
    /// let config = GatewayConfig::new("us-east-1_Example1");
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(user_pool_id: impl Into<String>) -> Self {
        Self {
            user_pool_id: user_pool_id.into(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Looks up [`POOL_ID_ENV_VAR`] and validates the result. Intended for
    /// the embedding runtime's startup path; library consumers that already
    /// hold the pool identifier should prefer [`GatewayConfig::new`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingUserPoolId`] when the variable is unset,
    /// or the validation error for an unusable value.
    pub fn from_env() -> BuildResult<Self> {
        let user_pool_id =
            std::env::var(POOL_ID_ENV_VAR).map_err(|_| BuildError::MissingUserPoolId)?;
        let config = Self::new(user_pool_id);
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingUserPoolId`] for an empty pool identifier
    /// and [`BuildError::InvalidConfiguration`] for one containing whitespace.
    pub fn validate(&self) -> BuildResult<()> {
        if self.user_pool_id.is_empty() {
            return Err(BuildError::MissingUserPoolId);
        }
        if self.user_pool_id.chars().any(char::is_whitespace) {
            return Err(BuildError::invalid_configuration(
                "user pool id must not contain whitespace",
            ));
        }
        Ok(())
    }
}
