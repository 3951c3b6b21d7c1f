//! Store configuration.
//!
//! Configuration is plain data: it can be built in code or loaded from a
//! TOML file. It selects the conflict policy and the placeholder namespace
//! used to keep the reducer mapping non-empty.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ConflictPolicy, StoreConfig, DEFAULT_PLACEHOLDER_NAMESPACE};
