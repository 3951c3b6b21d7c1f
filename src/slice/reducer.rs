//! Reducer trait for typed slices.

use serde_json::Value;

use super::state::SliceState;
use crate::store::{Action, SliceReducer};

/// Reducer transforms typed slice state based on actions.
///
/// It must be a pure function: (State, &Action) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: &Action) -> Self::State;
}

impl SliceReducer {
    /// Adapt a typed reducer into a JSON slice reducer.
    ///
    /// A missing or null slice starts from `State::default()`. A slice that
    /// does not decode into `State` is passed through unchanged.
    ///
    /// Each call creates a new reducer identity; keep the returned handle
    /// and clone it to re-inject the same reducer.
    pub fn from_reducer<R>() -> Self
    where
        R: Reducer + 'static,
    {
        SliceReducer::from_fn(|slice, action| {
            let state = match slice {
                None | Some(Value::Null) => R::State::default(),
                Some(value) => match serde_json::from_value::<R::State>(value.clone()) {
                    Ok(state) => state,
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            action = %action.kind(),
                            "Slice does not match reducer state type, leaving it unchanged"
                        );
                        return value.clone();
                    }
                },
            };

            let next = R::reduce(state, action);
            match serde_json::to_value(&next) {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to encode slice state");
                    slice.cloned().unwrap_or(Value::Null)
                }
            }
        })
    }
}
