//! Typed slice reducers.
//!
//! The store works on JSON values. Feature modules usually prefer a
//! concrete state type; these traits bridge the two.
//!
//! ```text
//! Option<&Value> ──decode──→ State ──reduce──→ State ──encode──→ Value
//! ```
//!
//! - **SliceState**: typed representation of one namespace's state
//! - **Reducer**: pure function (State, &Action) -> State

mod reducer;
mod state;

pub use reducer::Reducer;
pub use state::SliceState;
