//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use injectable_store::{Action, SliceReducer};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;

pub type SpyBuffer = Arc<Mutex<Vec<u8>>>;

/// Counter slice: starts at 0, `INC` adds one, `ADD` adds the payload.
pub fn counter() -> SliceReducer {
    SliceReducer::from_fn(|state, action| {
        let current = state.and_then(Value::as_i64).unwrap_or(0);
        match action.kind() {
            "INC" => json!(current + 1),
            "ADD" => json!(current + action.payload().as_i64().unwrap_or(0)),
            _ => json!(current),
        }
    })
}

/// Slice that appends every non-internal action type it sees.
pub fn action_log() -> SliceReducer {
    SliceReducer::from_fn(|state, action| {
        let mut seen = state
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if !action.is_internal() {
            seen.push(json!(action.kind()));
        }
        Value::Array(seen)
    })
}

pub fn inc() -> Action {
    Action::new("INC")
}

/// Writer that appends into a shared buffer.
#[derive(Clone)]
pub struct SpyWriter(pub SpyBuffer);

impl io::Write for SpyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a thread-local subscriber and return everything it logged.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer: SpyBuffer = Arc::new(Mutex::new(Vec::new()));
    let writer = SpyWriter(Arc::clone(&buffer));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.lock()).into_owned();
    (result, logs)
}
