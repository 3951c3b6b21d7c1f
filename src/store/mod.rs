//! Base state container.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ RootReducer ──→ State ──→ Listeners
//!                 ↑
//!      combine_reducers(namespace → SliceReducer)
//! ```
//!
//! - **State**: a JSON value, an object keyed by namespace once combined
//! - **Action**: application-defined message with a `type` and a payload
//! - **SliceReducer**: pure function over one namespace's slice
//! - **RootReducer**: pure function over the whole state

mod action;
mod combine;
mod container;
mod reducer;

pub use action::{Action, ActionTypes};
pub use combine::combine_reducers;
pub use container::{ListenerId, Store, StoreCreator, StoreEnhancer};
pub use reducer::{RootReducer, SliceReducer};
