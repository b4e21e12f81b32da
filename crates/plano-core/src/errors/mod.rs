//! Error types, one enum per layer, unified under [`PlanoError`].
//!
//! The validation engine itself is total and never produces errors;
//! these cover the storage and config layers around it.

mod config_error;
mod storage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Top-level error for the plano workspace.
#[derive(Debug, thiserror::Error)]
pub enum PlanoError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type PlanoResult<T> = Result<T, PlanoError>;
