//! Provisioning command construction.
//!
//! The caller's JSON payload is reduced to a [`CreateUserCommand`] before it
//! reaches the directory provider. Construction applies the validation and
//! defaulting rules in one place, so providers only ever see well-formed
//! commands.

use crate::error::{ValidationError, ValidationResult};
use std::collections::HashMap;
use uuid::Uuid;

/// A single directory attribute attached to a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAttribute {
    /// Directory attribute name, e.g. `email`
    pub name: String,
    /// Attribute value
    pub value: String,
}

impl UserAttribute {
    /// Create an attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Command describing one user to provision.
///
/// Carries everything the directory provider needs: the target pool, the
/// username, the temporary password valid until first sign-in, and the
/// profile attributes supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserCommand {
    /// Pool the user is created under
    pub pool_id: String,
    /// Requested username
    pub username: String,
    /// Temporary password the user must change at first sign-in
    pub temporary_password: String,
    /// Profile attributes as (name, value) pairs
    pub attributes: Vec<UserAttribute>,
}

impl CreateUserCommand {
    /// Build a command from a parsed request payload.
    ///
    /// Rules:
    /// - `username` is required and must be non-empty.
    /// - `temporaryPassword` is used exactly as supplied when the key is
    ///   present; otherwise a random password is generated.
    /// - a non-empty `email` is attached together with an
    ///   `email_verified=true` attribute, so the address needs no
    ///   confirmation round-trip.
    /// - a non-empty `phoneNumber` is attached as `phone_number`.
    ///
    /// Empty optional values and unknown keys are ignored; no format
    /// validation is applied to email or phone values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUsername`] when `username` is
    /// absent or empty.
    pub fn from_payload(
        pool_id: &str,
        payload: &HashMap<String, String>,
    ) -> ValidationResult<Self> {
        let username = payload
            .get("username")
            .filter(|username| !username.is_empty())
            .ok_or(ValidationError::MissingUsername)?;

        let temporary_password = payload
            .get("temporaryPassword")
            .cloned()
            .unwrap_or_else(generate_temporary_password);

        let mut attributes = Vec::new();
        if let Some(email) = payload.get("email").filter(|email| !email.is_empty()) {
            attributes.push(UserAttribute::new("email", email.as_str()));
            attributes.push(UserAttribute::new("email_verified", "true"));
        }
        if let Some(phone) = payload.get("phoneNumber").filter(|phone| !phone.is_empty()) {
            attributes.push(UserAttribute::new("phone_number", phone.as_str()));
        }

        Ok(Self {
            pool_id: pool_id.to_string(),
            username: username.clone(),
            temporary_password,
            attributes,
        })
    }

    /// Look up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }
}

/// Generate a temporary password for callers that did not supply one.
///
/// The fixed prefix covers the upper, lower, digit and symbol character
/// classes commonly required by directory password policies; the uuid
/// suffix carries the entropy.
fn generate_temporary_password() -> String {
    format!("Tmp1!{}", Uuid::new_v4().simple())
}
