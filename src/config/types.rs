use serde::{Deserialize, Serialize};

/// Namespace of the inert entry that keeps the reducer map non-empty.
pub const DEFAULT_PLACEHOLDER_NAMESPACE: &str = "___";

/// How an injection into an already registered namespace is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// A different reducer under an existing namespace is an error.
    #[default]
    Strict,
    /// A different reducer under an existing namespace is skipped with a
    /// warning unless the injection is forced.
    Forceable,
}

/// Root configuration for an injectable store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Conflict resolution for re-registered namespaces.
    pub conflict_policy: ConflictPolicy,
    /// Reserved namespace holding the identity reducer.
    pub placeholder_namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            conflict_policy: ConflictPolicy::default(),
            placeholder_namespace: DEFAULT_PLACEHOLDER_NAMESPACE.to_string(),
        }
    }
}

impl StoreConfig {
    /// Default configuration with the given conflict policy.
    pub fn with_policy(conflict_policy: ConflictPolicy) -> Self {
        Self {
            conflict_policy,
            ..Self::default()
        }
    }
}
