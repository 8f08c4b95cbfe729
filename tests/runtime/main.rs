//! Integration tests for the property store, organized by feature
//!
//! These tests exercise the store through the public [`Runtime`] API.
//!
//! ## Aggressive Test Defaults
//!
//! Tests run with `GC_THRESHOLD=1` so that `should_collect` fires on every
//! allocation and the collection helpers see the most churn.
//!
//! Override via environment variables:
//!
//! ```bash
//! cargo test                           # Default: aggressive settings
//! GC_THRESHOLD=100 cargo test          # Collect less often
//! ```

mod api;
mod array;
mod config;
mod gc;
mod object;

use propstore::{JsValue, ObjectClass, ObjectId, Runtime, RuntimeConfig};

/// Create a runtime with aggressive defaults for testing:
/// - GC_THRESHOLD=1 (collection requested after every allocation)
pub fn create_test_runtime() -> Runtime {
    let gc_threshold = std::env::var("GC_THRESHOLD")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1);
    Runtime::with_config(RuntimeConfig {
        gc_threshold,
        ..RuntimeConfig::default()
    })
}

/// Allocate an ordinary object with the given own properties, in order
pub fn object_with(rt: &mut Runtime, proto: Option<ObjectId>, names: &[&str]) -> ObjectId {
    let obj = rt.new_object(ObjectClass::Object, proto);
    for (i, name) in names.iter().enumerate() {
        rt.set_property(obj, name, JsValue::from(i as i32)).unwrap();
    }
    obj
}

/// Drain a fresh enumerator over `obj`
pub fn enumerate(rt: &mut Runtime, obj: ObjectId, own_only: bool) -> Vec<String> {
    let io = rt.new_iterator(obj, own_only).unwrap();
    let mut names = Vec::new();
    while let Some(name) = rt.next_iterator(io).unwrap() {
        names.push(name.to_string());
    }
    names
}

/// Own names in insertion order, enumerable or not
pub fn own_keys(rt: &Runtime, obj: ObjectId) -> Vec<String> {
    rt.own_keys(obj)
        .unwrap()
        .iter()
        .map(|k| k.to_string())
        .collect()
}
