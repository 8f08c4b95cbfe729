//! Collectible list and sweeping

use super::{create_test_runtime, enumerate, object_with};
use propstore::{JsValue, ObjectClass, Runtime, RuntimeConfig};

#[test]
fn test_every_object_is_registered() {
    let mut rt = create_test_runtime();
    let a = rt.new_object(ObjectClass::Object, None);
    let b = rt.new_object(ObjectClass::Array, None);
    let io = rt.new_iterator(a, true).unwrap();

    let listed: Vec<_> = rt.heap().collectible().collect();
    assert_eq!(listed, vec![io, b, a]);
    assert_eq!(rt.stats().allocations_since_sweep, 3);
}

#[test]
fn test_threshold_triggers_should_collect() {
    let mut rt = Runtime::with_config(RuntimeConfig {
        gc_threshold: 3,
        ..RuntimeConfig::default()
    });
    rt.new_object(ObjectClass::Object, None);
    rt.new_object(ObjectClass::Object, None);
    assert!(!rt.should_collect());
    rt.new_object(ObjectClass::Object, None);
    assert!(rt.should_collect());

    rt.collect(&[]);
    assert!(!rt.should_collect());
    assert_eq!(rt.stats().live_objects, 0);
}

#[test]
fn test_collect_keeps_reachable_objects() {
    let mut rt = create_test_runtime();
    let proto = object_with(&mut rt, None, &["p"]);
    let child = object_with(&mut rt, None, &["c"]);
    let root = object_with(&mut rt, Some(proto), &["r"]);
    rt.set_property(root, "child", JsValue::Object(child)).unwrap();
    let garbage = object_with(&mut rt, None, &["g"]);

    let freed = rt.collect(&[root]);
    assert_eq!(freed, 1);
    assert!(rt.heap().contains(proto));
    assert!(rt.heap().contains(child));
    assert!(!rt.heap().contains(garbage));
    assert_eq!(enumerate(&mut rt, root, false), vec!["r", "child", "p"]);
}

#[test]
fn test_abandoned_iterator_is_collected() {
    let mut rt = create_test_runtime();
    let obj = object_with(&mut rt, None, &["a", "b", "c"]);
    let io = rt.new_iterator(obj, true).unwrap();
    assert_eq!(rt.next_iterator(io).unwrap().unwrap().as_str(), "a");

    rt.collect(&[obj]);
    assert!(!rt.heap().contains(io));
    assert!(rt.next_iterator(io).is_err());
}

#[test]
fn test_live_iterator_keeps_target_alive() {
    let mut rt = create_test_runtime();
    let obj = object_with(&mut rt, None, &["a"]);
    let io = rt.new_iterator(obj, true).unwrap();

    rt.collect(&[io]);
    assert!(rt.heap().contains(obj));
    assert_eq!(rt.next_iterator(io).unwrap().unwrap().as_str(), "a");
}

#[test]
fn test_swept_slots_are_reused() {
    let mut rt = create_test_runtime();
    let first = rt.new_object(ObjectClass::Object, None);
    rt.collect(&[]);
    assert_eq!(rt.stats().free_slots, 1);

    let second = rt.new_object(ObjectClass::Object, None);
    assert_eq!(first, second);
    assert_eq!(rt.stats().free_slots, 0);
    assert!(rt.own_keys(second).unwrap().is_empty());
}
