use blend_monitor::{ChildAddedCallback, MemoryStore, Store, StorePath};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn path(s: &str) -> StorePath {
    StorePath::parse(s).unwrap()
}

fn recorder() -> (Arc<Mutex<Vec<(String, Value)>>>, ChildAddedCallback) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback: ChildAddedCallback = Box::new(move |key: &str, value: &Value| {
        sink.lock().unwrap().push((key.to_string(), value.clone()));
    });
    (seen, callback)
}

#[test]
fn push_keys_sort_in_insertion_order() {
    let mut store = MemoryStore::new();
    let samples = path("usage/samples");
    let keys: Vec<String> = (0..100)
        .map(|i| store.push(&samples, json!({ "n": i })).unwrap())
        .collect();

    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(sorted, keys);

    let stored: Vec<String> = store
        .last_n(&samples, usize::MAX)
        .unwrap()
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    assert_eq!(stored, keys);
}

#[test]
fn last_n_returns_newest_in_order() {
    let mut store = MemoryStore::new();
    let log = path("log");
    for i in 0..5 {
        store.push(&log, json!(i)).unwrap();
    }
    let values: Vec<Value> = store
        .last_n(&log, 3)
        .unwrap()
        .into_iter()
        .map(|(_, v)| v)
        .collect();
    assert_eq!(values, [json!(2), json!(3), json!(4)]);

    assert_eq!(store.last_n(&log, 0).unwrap().len(), 0);
    assert_eq!(store.last_n(&log, 50).unwrap().len(), 5);
    assert!(store.last_n(&path("missing"), 3).unwrap().is_empty());
}

#[test]
fn listener_replays_then_follows() {
    let mut store = MemoryStore::new();
    let events = path("events");
    store.push(&events, json!("a")).unwrap();
    store.push(&events, json!("b")).unwrap();

    let (seen, callback) = recorder();
    store.on_child_added(&events, callback);
    assert_eq!(seen.lock().unwrap().len(), 2);

    store.push(&events, json!("c")).unwrap();
    // other paths and overwrites of existing children do not fire
    store.push(&path("other"), json!("x")).unwrap();
    let first = seen.lock().unwrap()[0].0.clone();
    store.set(&events.child(&first).unwrap(), json!("a2")).unwrap();

    let values: Vec<Value> = seen.lock().unwrap().iter().map(|(_, v)| v.clone()).collect();
    assert_eq!(values, [json!("a"), json!("b"), json!("c")]);
}

#[test]
fn listeners_stop_after_off() {
    let mut store = MemoryStore::new();
    let events = path("events");
    let (seen, callback) = recorder();
    let id = store.on_child_added(&events, callback);
    assert_eq!(store.listener_count(), 1);

    store.set(&path("events/one"), json!(1)).unwrap();
    assert!(store.off(id));
    assert!(!store.off(id));
    store.set(&path("events/two"), json!(2)).unwrap();

    let keys: Vec<String> = seen.lock().unwrap().iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, ["one"]);
    assert_eq!(store.listener_count(), 0);
}

#[test]
fn nested_and_whole_object_writes_fire_for_new_children() {
    let mut store = MemoryStore::new();
    let events = path("events");
    let (seen, callback) = recorder();
    store.on_child_added(&events, callback);

    // creates the intermediate branch `x`
    store.set(&path("events/x/y"), json!(1)).unwrap();
    // `x` already exists, only `z` is new
    store
        .set(&events, json!({ "x": { "y": 1 }, "z": 2 }))
        .unwrap();

    let seen = seen.lock().unwrap();
    let keys: Vec<&str> = seen.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["x", "z"]);
    assert_eq!(seen[0].1, json!({ "y": 1 }));
    assert_eq!(seen[1].1, json!(2));
    assert_eq!(
        store.get(&events).unwrap(),
        Some(json!({ "x": { "y": 1 }, "z": 2 }))
    );
}

#[test]
fn nested_listener_sees_children_from_ancestor_write() {
    let mut store = MemoryStore::new();
    let (seen, callback) = recorder();
    store.on_child_added(&path("events/x"), callback);

    store.set(&path("events"), json!({ "x": { "a": 1, "b": 2 } })).unwrap();
    store.set(&path("events/x/a"), Value::Null).unwrap();

    let keys: Vec<String> = seen.lock().unwrap().iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys, ["a", "b"]);
}
