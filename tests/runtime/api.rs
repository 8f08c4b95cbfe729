//! Building objects from JSON

use super::{create_test_runtime, own_keys};
use propstore::{JsValue, ObjectClass, api};
use serde_json::json;

#[test]
fn test_create_from_json_nested() {
    let mut rt = create_test_runtime();
    let value = api::create_from_json(
        &mut rt,
        &json!({"items": [1, 2, 3], "meta": {"count": 3}}),
        None,
    )
    .unwrap();

    let items = api::get_property(&rt, &value, "items").unwrap();
    let items_id = items.as_object().unwrap();
    assert_eq!(rt.array_length(items_id), Some(3));
    assert_eq!(own_keys(&rt, items_id), vec!["0", "1", "2"]);

    let meta = api::get_property(&rt, &value, "meta").unwrap();
    assert_eq!(
        api::get_property(&rt, &meta, "count").unwrap(),
        JsValue::Number(3.0)
    );
}

#[test]
fn test_json_array_can_be_truncated() {
    let mut rt = create_test_runtime();
    let arr = api::create_from_json(&mut rt, &json!(["a", "b", "c", "d"]), None).unwrap();
    let id = arr.as_object().unwrap();

    rt.resize_array(id, 2).unwrap();
    assert_eq!(own_keys(&rt, id), vec!["0", "1"]);
    assert_eq!(api::get_property(&rt, &arr, "3").unwrap(), JsValue::Undefined);
}

#[test]
fn test_set_property_then_enumerate() {
    let mut rt = create_test_runtime();
    let proto = rt.new_object(ObjectClass::Object, None);
    let obj = api::create_object(&mut rt, Some(proto));
    api::set_property(&mut rt, &obj, "b", api::create_value(1)).unwrap();
    api::set_property(&mut rt, &obj, "a", api::create_value(2)).unwrap();
    rt.set_property(proto, "a", JsValue::Null).unwrap();
    rt.set_property(proto, "p", JsValue::Null).unwrap();

    let names: Vec<String> = api::for_in_keys(&mut rt, &obj)
        .unwrap()
        .iter()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(names, vec!["b", "a", "p"]);
}

#[test]
fn test_create_array_is_empty() {
    let mut rt = create_test_runtime();
    let arr = api::create_array(&mut rt);
    let id = arr.as_object().unwrap();
    assert_eq!(rt.array_length(id), Some(0));
    assert!(own_keys(&rt, id).is_empty());
}
