mod common;

use injectable_store::slice::Reducer;
use injectable_store::{Action, InjectableStore, SliceReducer};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
struct Session {
    user: Option<String>,
    visits: u32,
}

struct SessionReducer;

impl Reducer for SessionReducer {
    type State = Session;

    fn reduce(state: Session, action: &Action) -> Session {
        match action.kind() {
            "LOGIN" => Session {
                user: action.payload().as_str().map(str::to_string),
                visits: state.visits + 1,
            },
            "LOGOUT" => Session {
                user: None,
                ..state
            },
            _ => state,
        }
    }
}

#[test]
fn typed_reducer_runs_inside_store() {
    let store = InjectableStore::create(json!({}), None, None).unwrap();
    store
        .inject("session", SliceReducer::from_reducer::<SessionReducer>())
        .unwrap();

    assert_eq!(store.get_state()["session"], json!({ "user": null, "visits": 0 }));

    store.dispatch(Action::with_payload("LOGIN", json!("ada")));
    store.dispatch(Action::new("LOGOUT"));
    store.dispatch(Action::with_payload("LOGIN", json!("grace")));

    let session: Session = serde_json::from_value(store.get_state()["session"].clone()).unwrap();
    assert_eq!(
        session,
        Session {
            user: Some("grace".to_string()),
            visits: 2,
        }
    );
}

#[test]
fn typed_reducer_identity_follows_the_handle() {
    let store = InjectableStore::create(json!({}), None, None).unwrap();
    let reducer = SliceReducer::from_reducer::<SessionReducer>();

    store.inject("session", reducer.clone()).unwrap();
    assert!(store.inject("session", reducer).is_ok());
    assert!(store
        .inject("session", SliceReducer::from_reducer::<SessionReducer>())
        .is_err());
}
