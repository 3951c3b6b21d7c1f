//! Centralized state container whose reducers can be injected after creation.
//!
//! Feature modules that load lazily register their slice reducers under a
//! namespace. Every change to the namespace mapping rebuilds the combined
//! reducer and swaps it into the running store without touching the state
//! it already holds.
//!
//! ```
//! use injectable_store::{Action, InjectableStore, SliceReducer};
//! use serde_json::{json, Value};
//!
//! let store = InjectableStore::create(json!({}), None, None).unwrap();
//! let counter = SliceReducer::from_fn(|state, action| {
//!     let current = state.and_then(Value::as_i64).unwrap_or(0);
//!     match action.kind() {
//!         "INC" => json!(current + 1),
//!         _ => json!(current),
//!     }
//! });
//!
//! store.inject("counter", counter).unwrap();
//! store.dispatch(Action::new("INC"));
//! assert_eq!(store.get_state()["counter"], json!(1));
//! ```

pub mod config;
pub mod error;
pub mod injectable;
pub mod logging;
pub mod slice;
pub mod store;

pub use config::{ConfigError, ConflictPolicy, StoreConfig};
pub use error::StoreError;
pub use injectable::{
    InjectOutcome, InjectReport, InjectableStore, InjectableStoreBuilder, ReducerRegistry,
    ReducerWrapper,
};
pub use store::{
    combine_reducers, Action, ActionTypes, ListenerId, RootReducer, SliceReducer, Store,
    StoreCreator, StoreEnhancer,
};
