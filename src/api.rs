//! Helpers for building and reading objects from Rust.
//!
//! # Example
//!
//! ```ignore
//! use propstore::{api, Runtime};
//!
//! let mut runtime = Runtime::new();
//! let user = api::create_from_json(&mut runtime, &serde_json::json!({"name": "Alice"}), None)?;
//! let name = api::get_property(&runtime, &user, "name")?;
//! assert_eq!(name.as_str(), Some("Alice"));
//! ```

use crate::error::JsError;
use crate::object::{ObjectClass, ObjectId};
use crate::prelude::*;
use crate::runtime::Runtime;
use crate::value::{CheapClone, JsString, JsValue};

/// Create a JsValue from any type that implements Into<JsValue>.
///
/// For objects and arrays use [`create_from_json`].
pub fn create_value<T: Into<JsValue>>(value: T) -> JsValue {
    value.into()
}

/// Build objects from a JSON value.
///
/// JSON objects become ordinary objects whose prototype is `prototype`, with
/// properties added in the map's iteration order. JSON arrays become array
/// objects with one property per element and a matching length. Nested
/// values are converted recursively with the same prototype for objects.
pub fn create_from_json(
    runtime: &mut Runtime,
    json: &serde_json::Value,
    prototype: Option<ObjectId>,
) -> Result<JsValue, JsError> {
    Ok(match json {
        serde_json::Value::Null => JsValue::Null,
        serde_json::Value::Bool(b) => JsValue::Boolean(*b),
        serde_json::Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => JsValue::String(runtime.intern(s)),
        serde_json::Value::Array(items) => {
            let arr = runtime.new_object(ObjectClass::Array, None);
            for (index, item) in items.iter().enumerate() {
                let value = create_from_json(runtime, item, prototype)?;
                runtime.set_property(arr, &format!("{}", index), value)?;
            }
            let length = u32::try_from(items.len())
                .map_err(|_| JsError::type_error("array too long"))?;
            runtime.resize_array(arr, length)?;
            JsValue::Object(arr)
        }
        serde_json::Value::Object(map) => {
            let obj = runtime.new_object(ObjectClass::Object, prototype);
            for (key, value) in map {
                let value = create_from_json(runtime, value, prototype)?;
                runtime.set_property(obj, key, value)?;
            }
            JsValue::Object(obj)
        }
    })
}

/// Create an empty ordinary object
pub fn create_object(runtime: &mut Runtime, prototype: Option<ObjectId>) -> JsValue {
    JsValue::Object(runtime.new_object(ObjectClass::Object, prototype))
}

/// Create an empty array
pub fn create_array(runtime: &mut Runtime) -> JsValue {
    JsValue::Object(runtime.new_object(ObjectClass::Array, None))
}

/// Get a property value by name, searching the prototype chain.
/// Missing properties read as `undefined`.
pub fn get_property(runtime: &Runtime, obj: &JsValue, key: &str) -> Result<JsValue, JsError> {
    let id = obj
        .as_object()
        .ok_or_else(|| JsError::type_error("Cannot get property of non-object"))?;
    Ok(runtime
        .get_property(id, key)
        .map(|record| record.value.clone())
        .unwrap_or(JsValue::Undefined))
}

/// Set an own property value
pub fn set_property(
    runtime: &mut Runtime,
    obj: &JsValue,
    key: &str,
    value: JsValue,
) -> Result<(), JsError> {
    let id = obj
        .as_object()
        .ok_or_else(|| JsError::type_error("Cannot set property of non-object"))?;
    runtime.set_property(id, key, value)?;
    Ok(())
}

/// Enumerable names of the object and its prototypes, in for-in order
pub fn for_in_keys(runtime: &mut Runtime, obj: &JsValue) -> Result<Vec<JsString>, JsError> {
    let id = obj
        .as_object()
        .ok_or_else(|| JsError::type_error("Cannot enumerate non-object"))?;
    let io = runtime.new_iterator(id, false)?;
    let mut names = Vec::new();
    while let Some(name) = runtime.next_iterator(io)? {
        names.push(name.cheap_clone());
    }
    Ok(names)
}
