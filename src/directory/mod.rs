//! Directory provider seam and implementations.
//!
//! The gateway never talks to an identity directory directly; every
//! provisioning call goes through the [`DirectoryProvider`] trait.
//! Production deployments wrap the managed directory's client; tests,
//! examples and development use [`InMemoryDirectory`].

mod in_memory;
mod provider;

pub use in_memory::{DirectoryStats, InMemoryDirectory, NEW_USER_STATUS, UserRecord};
pub use provider::{DirectoryError, DirectoryProvider, ProvisionedUser};
