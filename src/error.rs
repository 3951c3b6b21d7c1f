//! Error types for the store and reducer injection.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building a store or injecting reducers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A namespace already maps to a different reducer and no override was requested.
    #[error("Attempted to inject reducer '{namespace}' but it already exists")]
    DuplicateNamespace { namespace: String },

    /// The combinator was handed a mapping without any reducers.
    #[error("Cannot combine an empty reducer map")]
    EmptyReducerMap,

    /// Store configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StoreError {
    /// The conflicting namespace, if this is a duplicate error.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            StoreError::DuplicateNamespace { namespace } => Some(namespace),
            _ => None,
        }
    }
}
