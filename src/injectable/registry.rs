//! Namespace-to-reducer mapping.

use indexmap::IndexMap;

use super::outcome::InjectOutcome;
use crate::config::ConflictPolicy;
use crate::error::StoreError;
use crate::store::{combine_reducers, RootReducer, SliceReducer};

/// Mapping from namespace to slice reducer.
///
/// Never empty: a placeholder namespace holding the identity reducer is
/// present from construction and after every [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct ReducerRegistry {
    reducers: IndexMap<String, SliceReducer>,
    placeholder: String,
    placeholder_reducer: SliceReducer,
}

impl ReducerRegistry {
    /// Create a registry holding only the placeholder entry.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let placeholder_reducer = SliceReducer::identity();
        let mut reducers = IndexMap::new();
        reducers.insert(placeholder.clone(), placeholder_reducer.clone());
        Self {
            reducers,
            placeholder,
            placeholder_reducer,
        }
    }

    /// Drop every registered reducer, keeping only the placeholder.
    pub fn reset(&mut self) {
        self.reducers.clear();
        self.reducers
            .insert(self.placeholder.clone(), self.placeholder_reducer.clone());
    }

    /// Register `reducer` under `namespace` according to `policy`.
    ///
    /// The mapping is only touched when the outcome changes it.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateNamespace`] under the strict policy
    /// when `namespace` holds a different reducer and `force` is false.
    pub fn insert(
        &mut self,
        namespace: String,
        reducer: SliceReducer,
        policy: ConflictPolicy,
        force: bool,
    ) -> Result<InjectOutcome, StoreError> {
        let outcome = match self.reducers.get(&namespace) {
            None => InjectOutcome::Inserted,
            Some(existing) if existing.ptr_eq(&reducer) => InjectOutcome::Unchanged,
            Some(_) if force => InjectOutcome::Replaced,
            Some(_) => match policy {
                ConflictPolicy::Strict => {
                    return Err(StoreError::DuplicateNamespace { namespace });
                }
                ConflictPolicy::Forceable => {
                    tracing::warn!(
                        namespace = %namespace,
                        "Reducer already injected under this namespace, skipping (use force to overwrite)"
                    );
                    InjectOutcome::Skipped
                }
            },
        };

        if outcome.changes_mapping() {
            self.reducers.insert(namespace, reducer);
        }
        Ok(outcome)
    }

    /// Build the combined reducer for the current mapping.
    pub fn combine(&self) -> Result<RootReducer, StoreError> {
        combine_reducers(&self.reducers)
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.reducers.contains_key(namespace)
    }

    pub fn get(&self, namespace: &str) -> Option<&SliceReducer> {
        self.reducers.get(namespace)
    }

    /// Registered namespaces in insertion order, placeholder included.
    pub fn namespaces(&self) -> Vec<String> {
        self.reducers.keys().cloned().collect()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether only the placeholder entry is registered.
    pub fn is_placeholder_only(&self) -> bool {
        self.reducers.len() == 1
            && self
                .reducers
                .get(&self.placeholder)
                .is_some_and(|r| r.ptr_eq(&self.placeholder_reducer))
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Never true while the placeholder entry is present.
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}
