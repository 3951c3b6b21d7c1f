//! Shared reducer handles.
//!
//! Reducers are compared by reference identity: two handles are the same
//! reducer only if one was cloned from the other.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::action::Action;

type SliceFn = dyn Fn(Option<&Value>, &Action) -> Value + Send + Sync;
type RootFn = dyn Fn(&Value, &Action) -> Value + Send + Sync;

/// Reducer for one namespace's slice of the state.
///
/// Receives `None` when the slice does not exist yet.
#[derive(Clone)]
pub struct SliceReducer {
    inner: Arc<SliceFn>,
}

impl SliceReducer {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &Action) -> Value + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Reducer that returns its slice unchanged, or null if absent.
    pub fn identity() -> Self {
        Self::from_fn(|state, _| state.cloned().unwrap_or(Value::Null))
    }

    pub fn reduce(&self, state: Option<&Value>, action: &Action) -> Value {
        (self.inner)(state, action)
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &SliceReducer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SliceReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceReducer")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

/// Reducer over the whole state, as installed in a [`Store`](super::Store).
#[derive(Clone)]
pub struct RootReducer {
    inner: Arc<RootFn>,
}

impl RootReducer {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value, &Action) -> Value + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn reduce(&self, state: &Value, action: &Action) -> Value {
        (self.inner)(state, action)
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &RootReducer) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for RootReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootReducer")
            .field("ptr", &Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
