mod common;

use common::{action_log, counter, inc};
use injectable_store::{
    combine_reducers, Action, InjectableStore, RootReducer, Store, StoreCreator, StoreEnhancer,
};
use indexmap::IndexMap;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn exposes_base_store_surface() {
    let store = InjectableStore::create(json!({}), None, None).unwrap();
    store.inject("log", action_log()).unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter_calls = Arc::clone(&calls);
    let id = store.subscribe(move || {
        counter_calls.fetch_add(1, Ordering::SeqCst);
    });

    store.dispatch(Action::new("FIRST"));
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(Action::new("SECOND"));

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(store.get_state()["log"], json!(["FIRST", "SECOND"]));
}

#[test]
fn listeners_are_notified_of_injection() {
    let store = InjectableStore::create(json!({}), None, None).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    store.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let reducer = counter();
    store.inject("a", reducer.clone()).unwrap();
    store.inject("a", reducer).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_can_read_state_and_inject() {
    let store = InjectableStore::create(json!({}), None, None).unwrap();
    store.inject("counter", counter()).unwrap();

    let observed = Arc::new(Mutex::new(Vec::new()));
    let handle = store.clone();
    let sink = Arc::clone(&observed);
    store.subscribe(move || {
        let state = handle.get_state();
        sink.lock().push(state["counter"].clone());
        if state["counter"] == json!(1) && !handle.has_reducer("late") {
            handle.inject("late", counter()).unwrap();
        }
    });

    store.dispatch(inc());

    assert!(store.has_reducer("late"));
    assert_eq!(observed.lock()[0], json!(1));
}

#[test]
fn enhancer_wraps_store_creation() {
    let created = Arc::new(AtomicUsize::new(0));
    let flag = Arc::clone(&created);
    let enhancer: StoreEnhancer = Box::new(move |create: StoreCreator| -> StoreCreator {
        Box::new(move |reducer: RootReducer, preloaded: Value| {
            flag.fetch_add(1, Ordering::SeqCst);
            let mut preloaded = preloaded;
            preloaded["___"] = json!("seeded");
            create(reducer, preloaded)
        })
    });

    let store = InjectableStore::create(json!({}), Some(enhancer), None).unwrap();

    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(store.get_state()["___"], json!("seeded"));
}

#[test]
fn plain_store_runs_combined_reducers() {
    let mut reducers = IndexMap::new();
    reducers.insert("hits".to_string(), counter());
    let store = Store::create(combine_reducers(&reducers).unwrap(), Value::Null, None);

    store.dispatch(inc());
    store.dispatch(Action::with_payload("ADD", json!(3)));

    assert_eq!(store.get_state(), json!({ "hits": 4 }));
}
