//! Actions dispatched through the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const INTERNAL_PREFIX: &str = "@@store/";

/// Application-defined message describing a requested state transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    payload: Value,
}

impl Action {
    /// Create an action without payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Value::Null,
        }
    }

    /// Create an action carrying a payload.
    pub fn with_payload(kind: impl Into<String>, payload: Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// The action type.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    /// Whether this action was emitted by the store itself.
    pub fn is_internal(&self) -> bool {
        self.kind.starts_with(INTERNAL_PREFIX)
    }
}

/// Action types reserved by the store.
pub struct ActionTypes;

impl ActionTypes {
    /// Type of the action dispatched once when a store is created.
    ///
    /// Carries a random suffix so application reducers never match it.
    pub fn init() -> String {
        format!("{}INIT.{}", INTERNAL_PREFIX, uuid::Uuid::new_v4().simple())
    }

    /// Type of the action dispatched after the root reducer is replaced.
    pub fn replace() -> String {
        format!("{}REPLACE", INTERNAL_PREFIX)
    }
}
