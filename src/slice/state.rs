//! Base trait for typed slice state.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Marker trait for typed slice state.
///
/// States should be:
/// - Serializable (stored as JSON inside the store)
/// - Defaultable (the initial slice when none exists yet)
/// - Comparable (PartialEq for detecting changes)
pub trait SliceState:
    Serialize + DeserializeOwned + Clone + PartialEq + Default + Send + 'static
{
}

impl<T> SliceState for T where
    T: Serialize + DeserializeOwned + Clone + PartialEq + Default + Send + 'static
{
}
