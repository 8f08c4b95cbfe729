//! Own and inherited property access

use super::{create_test_runtime, object_with, own_keys};
use propstore::{Attributes, JsValue, ObjectClass};

#[test]
fn test_set_then_get() {
    let mut rt = create_test_runtime();
    let obj = rt.new_object(ObjectClass::Object, None);
    rt.set_property(obj, "a", JsValue::from(1)).unwrap();

    let record = rt.get_own_property(obj, "a").unwrap();
    assert_eq!(record.value, JsValue::Number(1.0));
    assert_eq!(record.name().as_str(), "a");
    assert!(rt.get_own_property(obj, "b").is_none());
}

#[test]
fn test_set_twice_keeps_position_and_last_value() {
    let mut rt = create_test_runtime();
    let obj = object_with(&mut rt, None, &["a", "b", "c"]);
    rt.set_property(obj, "a", JsValue::from("again")).unwrap();
    rt.set_property(obj, "a", JsValue::from("last")).unwrap();

    assert_eq!(own_keys(&rt, obj), vec!["a", "b", "c"]);
    assert_eq!(
        rt.get_own_property(obj, "a").unwrap().value.as_str(),
        Some("last")
    );
    let table = &rt.heap().get(obj).unwrap().properties;
    assert_eq!(table.len(), 3);
    table.validate().unwrap();
}

#[test]
fn test_attributes_are_writable_through_set() {
    let mut rt = create_test_runtime();
    let obj = rt.new_object(ObjectClass::Object, None);
    rt.set_property(obj, "hidden", JsValue::Null)
        .unwrap()
        .attributes = Attributes::DONT_ENUM | Attributes::READ_ONLY;

    let record = rt.get_own_property(obj, "hidden").unwrap();
    assert!(!record.is_enumerable());
    assert!(record.attributes.contains(Attributes::READ_ONLY));
    assert!(!record.attributes.contains(Attributes::DONT_CONF));
}

#[test]
fn test_delete_is_silent_for_absent_names() {
    let mut rt = create_test_runtime();
    let obj = object_with(&mut rt, None, &["a"]);
    assert!(!rt.delete_property(obj, "missing").unwrap());
    assert!(rt.delete_property(obj, "a").unwrap());
    assert!(!rt.delete_property(obj, "a").unwrap());
    assert!(own_keys(&rt, obj).is_empty());
}

#[test]
fn test_own_vs_inherited() {
    let mut rt = create_test_runtime();
    let proto = object_with(&mut rt, None, &["inherited"]);
    let obj = object_with(&mut rt, Some(proto), &["own"]);

    assert!(rt.get_own_property(obj, "inherited").is_none());
    assert!(rt.get_property(obj, "inherited").is_some());
    assert!(rt.has_property(obj, "inherited"));
    assert!(rt.get_own_property(obj, "own").is_some());
    assert!(!rt.has_property(proto, "own"));
}

#[test]
fn test_set_prototype_changes_lookup() {
    let mut rt = create_test_runtime();
    let first = object_with(&mut rt, None, &["x"]);
    let second = object_with(&mut rt, None, &["y"]);
    let obj = rt.new_object(ObjectClass::Object, Some(first));
    assert_eq!(rt.prototype_of(obj), Some(first));
    assert!(rt.has_property(obj, "x"));

    rt.set_prototype(obj, Some(second)).unwrap();
    assert!(!rt.has_property(obj, "x"));
    assert!(rt.has_property(obj, "y"));

    rt.set_prototype(obj, None).unwrap();
    assert_eq!(rt.prototype_of(obj), None);
    assert!(!rt.has_property(obj, "y"));
}

#[test]
fn test_insertion_order_after_mixed_deletes() {
    let mut rt = create_test_runtime();
    let names: Vec<String> = (0..64).map(|i| format!("k{:02}", (i * 37) % 64)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let obj = object_with(&mut rt, None, &refs);

    for name in refs.iter().step_by(3) {
        rt.delete_property(obj, name).unwrap();
    }
    rt.set_property(obj, "late", JsValue::Null).unwrap();

    let mut expected: Vec<String> = refs
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 0)
        .map(|(_, n)| n.to_string())
        .collect();
    expected.push("late".to_string());
    assert_eq!(own_keys(&rt, obj), expected);
    rt.heap().get(obj).unwrap().properties.validate().unwrap();
}
