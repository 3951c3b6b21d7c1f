use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::reducer::{RootReducer, SliceReducer};
use crate::error::StoreError;

/// Combine per-namespace reducers into one whole-state reducer.
///
/// Each reducer receives `state[namespace]` and its result is stored back
/// under the same key. The produced state holds exactly the registered
/// namespaces, in mapping order; keys without a reducer are dropped.
///
/// The mapping is snapshotted, so later changes to `reducers` do not affect
/// the returned reducer.
///
/// # Errors
/// Returns [`StoreError::EmptyReducerMap`] if `reducers` is empty.
pub fn combine_reducers(
    reducers: &IndexMap<String, SliceReducer>,
) -> Result<RootReducer, StoreError> {
    if reducers.is_empty() {
        return Err(StoreError::EmptyReducerMap);
    }

    let reducers = Arc::new(reducers.clone());

    Ok(RootReducer::from_fn(move |state, action| {
        let previous = state.as_object();

        if let Some(previous) = previous {
            let unexpected = previous
                .keys()
                .filter(|key| !reducers.contains_key(key.as_str()))
                .count();
            if unexpected > 0 {
                tracing::debug!(
                    unexpected = unexpected,
                    action = %action.kind(),
                    "Dropping state keys with no registered reducer"
                );
            }
        }

        let mut next = Map::with_capacity(reducers.len());
        for (namespace, reducer) in reducers.iter() {
            let slice = previous.and_then(|p| p.get(namespace));
            next.insert(namespace.clone(), reducer.reduce(slice, action));
        }
        Value::Object(next)
    }))
}
