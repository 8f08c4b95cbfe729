//! Runtime facade: a heap, its string dictionary and configuration.
//!
//! Embedders go through [`Runtime`] so that every property name is interned
//! before it reaches a property table.

use crate::config::RuntimeConfig;
use crate::error::JsError;
use crate::heap::{Heap, HeapStats};
use crate::object::{JsObject, ObjectClass, ObjectId};
use crate::prelude::*;
use crate::property::PropertyRecord;
use crate::string_dict::StringDict;
use crate::value::{JsString, JsValue};

pub struct Runtime {
    heap: Heap,
    strings: StringDict,
    config: RuntimeConfig,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        let strings = if config.preload_common_strings {
            StringDict::with_common_strings()
        } else {
            StringDict::new()
        };
        Self {
            heap: Heap::with_threshold(config.gc_threshold),
            strings,
            config,
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn strings(&self) -> &StringDict {
        &self.strings
    }

    /// Intern a name in this runtime's string dictionary
    pub fn intern(&mut self, s: &str) -> JsString {
        self.strings.get_or_insert(s)
    }

    pub fn set_gc_threshold(&mut self, threshold: usize) {
        self.config.gc_threshold = threshold;
        self.heap.set_gc_threshold(threshold);
    }

    // ───────────────────────────────────────────────────────────────────────
    // Objects
    // ───────────────────────────────────────────────────────────────────────

    /// Allocate an object with no own properties
    pub fn new_object(&mut self, class: ObjectClass, prototype: Option<ObjectId>) -> ObjectId {
        self.heap.alloc(JsObject::new(class, prototype))
    }

    pub fn prototype_of(&self, obj: ObjectId) -> Option<ObjectId> {
        self.heap.get(obj)?.prototype
    }

    /// Replace the prototype link. The caller keeps chains acyclic.
    pub fn set_prototype(
        &mut self,
        obj: ObjectId,
        prototype: Option<ObjectId>,
    ) -> Result<(), JsError> {
        self.object_mut(obj)?.prototype = prototype;
        Ok(())
    }

    pub fn array_length(&self, obj: ObjectId) -> Option<u32> {
        self.heap.get(obj)?.array_length()
    }

    // ───────────────────────────────────────────────────────────────────────
    // Properties
    // ───────────────────────────────────────────────────────────────────────

    pub fn get_own_property(&self, obj: ObjectId, name: &str) -> Option<&PropertyRecord> {
        self.heap.get_own_property(obj, name)
    }

    pub fn get_property(&self, obj: ObjectId, name: &str) -> Option<&PropertyRecord> {
        self.heap.get_property(obj, name)
    }

    /// Own or inherited
    pub fn has_property(&self, obj: ObjectId, name: &str) -> bool {
        self.heap.get_property(obj, name).is_some()
    }

    /// Create or overwrite an own property and return its record so the
    /// caller can adjust attributes. An existing property keeps its
    /// enumeration position.
    pub fn set_property(
        &mut self,
        obj: ObjectId,
        name: &str,
        value: JsValue,
    ) -> Result<&mut PropertyRecord, JsError> {
        let key = self.strings.get_or_insert(name);
        let record = self.object_mut(obj)?.properties.set(key);
        record.value = value;
        Ok(record)
    }

    /// Remove an own property; returns whether one was removed
    pub fn delete_property(&mut self, obj: ObjectId, name: &str) -> Result<bool, JsError> {
        Ok(self.object_mut(obj)?.properties.delete(name))
    }

    /// Own names in insertion order, including non-enumerable ones
    pub fn own_keys(&self, obj: ObjectId) -> Result<Vec<JsString>, JsError> {
        Ok(self.object(obj)?.properties.keys())
    }

    // ───────────────────────────────────────────────────────────────────────
    // Enumeration and arrays
    // ───────────────────────────────────────────────────────────────────────

    pub fn new_iterator(&mut self, obj: ObjectId, own_only: bool) -> Result<ObjectId, JsError> {
        self.heap.new_iterator(obj, own_only)
    }

    pub fn next_iterator(&mut self, io: ObjectId) -> Result<Option<JsString>, JsError> {
        self.heap.next_iterator(io)
    }

    pub fn resize_array(&mut self, obj: ObjectId, new_len: u32) -> Result<(), JsError> {
        self.heap.resize_array(obj, new_len)
    }

    // ───────────────────────────────────────────────────────────────────────
    // Collection
    // ───────────────────────────────────────────────────────────────────────

    pub fn should_collect(&self) -> bool {
        self.heap.should_collect()
    }

    /// Free everything not reachable from `roots`; returns the freed count
    pub fn collect(&mut self, roots: &[ObjectId]) -> usize {
        let marks = self.heap.mark(roots);
        self.heap
            .sweep(|id| marks.get(id.index()).copied().unwrap_or(false))
    }

    pub fn stats(&self) -> HeapStats {
        self.heap.stats()
    }

    fn object(&self, obj: ObjectId) -> Result<&JsObject, JsError> {
        self.heap
            .get(obj)
            .ok_or_else(|| JsError::type_error("invalid object reference"))
    }

    fn object_mut(&mut self, obj: ObjectId) -> Result<&mut JsObject, JsError> {
        self.heap
            .get_mut(obj)
            .ok_or_else(|| JsError::type_error("invalid object reference"))
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
