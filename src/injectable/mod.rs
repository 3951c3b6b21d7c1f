//! Reducer injection into a running store.
//!
//! Provides a namespace-to-reducer registry owned by the store instance and
//! the inject/merge/replace protocol that keeps the installed root reducer
//! in sync with it.

mod outcome;
mod registry;
mod store;

pub use outcome::{InjectOutcome, InjectReport};
pub use registry::ReducerRegistry;
pub use store::{InjectableStore, InjectableStoreBuilder, ReducerWrapper};
