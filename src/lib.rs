//! Object property storage for a small JavaScript engine
//!
//! Each object keeps its own properties in an AA-tree keyed by interned name,
//! threaded with an insertion-ordered list for enumeration. On top of that sit
//! prototype-chain lookup, for-in style enumeration and array length
//! truncation.
//!
//! # Example
//!
//! ```
//! use propstore::{JsValue, ObjectClass, Runtime};
//!
//! let mut runtime = Runtime::new();
//! let proto = runtime.new_object(ObjectClass::Object, None);
//! let obj = runtime.new_object(ObjectClass::Object, Some(proto));
//! runtime.set_property(proto, "inherited", JsValue::from(1)).unwrap();
//! runtime.set_property(obj, "own", JsValue::from(2)).unwrap();
//!
//! let io = runtime.new_iterator(obj, false).unwrap();
//! let mut names = Vec::new();
//! while let Some(name) = runtime.next_iterator(io).unwrap() {
//!     names.push(name.to_string());
//! }
//! assert_eq!(names, ["own", "inherited"]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod api;
pub mod array;
pub mod config;
pub mod conversion;
pub mod error;
pub mod heap;
pub mod iterator;
pub mod object;
pub mod prelude;
pub mod property;
pub mod prototype;
pub mod runtime;
pub mod string_dict;
pub mod value;

pub use config::RuntimeConfig;
pub use error::JsError;
pub use heap::{Heap, HeapStats};
pub use iterator::IteratorState;
pub use object::{ExoticObject, JsObject, ObjectClass, ObjectId};
pub use property::{Attributes, PropId, PropertyRecord, PropertyTable};
pub use runtime::Runtime;
pub use string_dict::StringDict;
pub use value::CheapClone;
pub use value::JsString;
pub use value::JsValue;
