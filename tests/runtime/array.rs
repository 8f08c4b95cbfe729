//! Array length changes

use super::{create_test_runtime, own_keys};
use propstore::{JsError, JsValue, ObjectClass};

#[test]
fn test_truncate_only_touches_canonical_indices() {
    let mut rt = create_test_runtime();
    let arr = rt.new_object(ObjectClass::Array, None);
    for name in ["0", "1", "2", "10", "01"] {
        rt.set_property(arr, name, JsValue::from(name)).unwrap();
    }
    rt.resize_array(arr, 11).unwrap();

    rt.resize_array(arr, 1).unwrap();
    assert_eq!(own_keys(&rt, arr), vec!["0", "01"]);
    assert_eq!(rt.array_length(arr), Some(1));
}

#[test]
fn test_truncate_to_zero_keeps_named_properties() {
    let mut rt = create_test_runtime();
    let arr = rt.new_object(ObjectClass::Array, None);
    for name in ["0", "name", "1", "1e0"] {
        rt.set_property(arr, name, JsValue::Null).unwrap();
    }
    rt.resize_array(arr, 2).unwrap();

    rt.resize_array(arr, 0).unwrap();
    assert_eq!(own_keys(&rt, arr), vec!["name", "1e0"]);
    assert_eq!(rt.array_length(arr), Some(0));
}

#[test]
fn test_truncate_ignores_inherited_indices() {
    let mut rt = create_test_runtime();
    let proto = rt.new_object(ObjectClass::Object, None);
    rt.set_property(proto, "5", JsValue::Null).unwrap();
    let arr = rt.new_object(ObjectClass::Array, Some(proto));
    rt.set_property(arr, "5", JsValue::Null).unwrap();
    rt.resize_array(arr, 6).unwrap();

    rt.resize_array(arr, 3).unwrap();
    assert!(rt.get_own_property(arr, "5").is_none());
    assert!(rt.get_own_property(proto, "5").is_some());
}

#[test]
fn test_grow_then_shrink() {
    let mut rt = create_test_runtime();
    let arr = rt.new_object(ObjectClass::Array, None);
    assert_eq!(rt.array_length(arr), Some(0));

    rt.resize_array(arr, u32::MAX).unwrap();
    rt.set_property(arr, "4294967294", JsValue::Null).unwrap();
    assert_eq!(rt.array_length(arr), Some(u32::MAX));

    rt.resize_array(arr, 7).unwrap();
    assert!(own_keys(&rt, arr).is_empty());
}

#[test]
fn test_resize_plain_object_is_type_error() {
    let mut rt = create_test_runtime();
    let obj = rt.new_object(ObjectClass::Object, None);
    assert_eq!(
        rt.resize_array(obj, 0),
        Err(JsError::type_error("not an array"))
    );
    assert_eq!(rt.array_length(obj), None);
}
