//! Thread-safe store with hot-swappable root reducer.
//!
//! Uses a read-write lock for the reducer and state: readers take a
//! snapshot of the state, dispatches and reducer swaps are exclusive.
//! Listeners are called after the lock is released, so they can read the
//! state or dispatch again.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use serde_json::Value;

use super::action::{Action, ActionTypes};
use super::reducer::RootReducer;

/// Builds a store from a root reducer and preloaded state.
pub type StoreCreator = Box<dyn FnOnce(RootReducer, Value) -> Store>;

/// Decorates store creation.
///
/// Receives the base creator and returns the creator actually used.
pub type StoreEnhancer = Box<dyn FnOnce(StoreCreator) -> StoreCreator>;

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Shared handle to a state container.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
    listeners: Arc<Mutex<Vec<(ListenerId, Listener)>>>,
    next_listener: Arc<AtomicU64>,
}

struct StoreInner {
    reducer: RootReducer,
    state: Value,
}

impl Store {
    /// Create a store, optionally through an enhancer.
    ///
    /// The base creator dispatches an `INIT` action so every reducer
    /// produces its initial slice.
    pub fn create(reducer: RootReducer, preloaded: Value, enhancer: Option<StoreEnhancer>) -> Self {
        match enhancer {
            Some(enhance) => {
                let base: StoreCreator = Box::new(Store::create_base);
                enhance(base)(reducer, preloaded)
            }
            None => Store::create_base(reducer, preloaded),
        }
    }

    fn create_base(reducer: RootReducer, preloaded: Value) -> Self {
        let store = Self {
            inner: Arc::new(RwLock::new(StoreInner {
                reducer,
                state: preloaded,
            })),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener: Arc::new(AtomicU64::new(0)),
        };
        store.dispatch(Action::new(ActionTypes::init()));
        store
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> Value {
        self.inner.read().state.clone()
    }

    /// Run `action` through the root reducer, then notify listeners.
    pub fn dispatch(&self, action: Action) {
        {
            let mut inner = self.inner.write();
            let next = inner.reducer.reduce(&inner.state, &action);
            inner.state = next;
        }

        tracing::trace!(action = %action.kind(), "Action dispatched");
        self.notify();
    }

    /// Register a listener called after every dispatch.
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Install a new root reducer and dispatch `REPLACE`.
    ///
    /// The current state is kept and fed to the new reducer.
    pub fn replace_reducer(&self, reducer: RootReducer) {
        self.swap_reducer(reducer);
        self.dispatch(Action::new(ActionTypes::replace()));
    }

    /// Swap the root reducer without dispatching anything.
    pub(crate) fn swap_reducer(&self, reducer: RootReducer) -> RootReducer {
        std::mem::replace(&mut self.inner.write().reducer, reducer)
    }

    /// The currently installed root reducer.
    pub fn reducer(&self) -> RootReducer {
        self.inner.read().reducer.clone()
    }

    fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener();
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("listeners", &self.listeners.lock().len())
            .finish()
    }
}
