//! Error types for module graph operations.

use thiserror::Error;

use crate::DependencyId;

pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported by [`ModuleGraph`](crate::ModuleGraph).
///
/// These are programmer errors from a calling pass, not recoverable runtime
/// conditions. Propagate them instead of continuing with a half-updated view.
#[derive(Debug, Error)]
pub enum Error {
    /// The dependency was already resolved to a module.
    #[error("dependency {0} already has a connection")]
    DuplicateReference(DependencyId),

    /// The dependency has never been resolved.
    #[error("dependency {0} has no connection")]
    UnknownReference(DependencyId),

    /// A metadata field could not be converted to or from JSON.
    #[error("metadata conversion failed: {0}")]
    Metadata(#[from] serde_json::Error),
}
