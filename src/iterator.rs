//! For-in enumeration.
//!
//! Starting an enumeration flattens the prototype chain into a queue of
//! names right away. Each name appears once, ordered by distance from the
//! target and then by insertion order within its object. A name is hidden
//! at a level when some object closer to the target already has an own
//! property of that name, enumerable or not. Pulling names drains the queue
//! and skips names that stopped resolving on the target since the snapshot
//! was taken.

use crate::error::JsError;
use crate::heap::Heap;
use crate::object::{JsObject, ObjectClass, ObjectId};
use crate::prelude::*;
use crate::value::{CheapClone, JsString};

/// Pending names of an enumeration and the object they were taken from
#[derive(Debug, Default)]
pub struct IteratorState {
    target: Option<ObjectId>,
    pending: VecDeque<JsString>,
}

impl IteratorState {
    /// Snapshot the enumerable names of `target` (and its prototypes unless
    /// `own_only`).
    pub fn snapshot(heap: &Heap, target: ObjectId, own_only: bool) -> Self {
        let mut pending = VecDeque::new();

        for level in heap.prototype_chain(target) {
            let Some(object) = heap.get(level) else {
                break;
            };
            for record in &object.properties {
                let name = record.name();
                if record.is_enumerable() && !is_shadowed(heap, target, level, name.as_str()) {
                    pending.push_back(name.cheap_clone());
                }
            }
            if own_only {
                break;
            }
        }

        Self {
            target: Some(target),
            pending,
        }
    }

    pub fn target(&self) -> Option<ObjectId> {
        self.target
    }

    /// Names left in the queue, including ones that may no longer resolve
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Take the next name that still resolves on the target.
    ///
    /// Consumed names are dropped whether or not they are returned.
    pub fn next_name(&mut self, heap: &Heap) -> Option<JsString> {
        let target = self.target?;
        while let Some(name) = self.pending.pop_front() {
            if heap.get_property(target, name.as_str()).is_some() {
                return Some(name);
            }
        }
        None
    }
}

/// True when an object from `top` (inclusive) down to `bottom` (exclusive)
/// has an own property called `name`.
///
/// Every intermediate level is checked, not just the nearest prototype, and a
/// non-enumerable own property hides deeper ones as well.
fn is_shadowed(heap: &Heap, top: ObjectId, bottom: ObjectId, name: &str) -> bool {
    heap.prototype_chain(top)
        .take_while(|level| *level != bottom)
        .any(|level| heap.get_own_property(level, name).is_some())
}

impl Heap {
    /// Create an iterator object enumerating `obj`.
    ///
    /// The iterator is an ordinary heap object and is registered for
    /// collection like any other.
    pub fn new_iterator(&mut self, obj: ObjectId, own_only: bool) -> Result<ObjectId, JsError> {
        if !self.contains(obj) {
            return Err(JsError::type_error("invalid object reference"));
        }
        let state = IteratorState::snapshot(self, obj, own_only);
        let mut iterator = JsObject::new(ObjectClass::Iterator, None);
        if let Some(slot) = iterator.as_iterator_mut() {
            *slot = state;
        }
        Ok(self.alloc(iterator))
    }

    /// Pull the next name from an iterator object, `None` at the end.
    ///
    /// Fails with a TypeError when `io` is not an iterator.
    pub fn next_iterator(&mut self, io: ObjectId) -> Result<Option<JsString>, JsError> {
        loop {
            let state = self
                .get_mut(io)
                .and_then(JsObject::as_iterator_mut)
                .ok_or_else(|| JsError::type_error("not an iterator"))?;
            let Some(target) = state.target else {
                return Ok(None);
            };
            let Some(name) = state.pending.pop_front() else {
                return Ok(None);
            };
            if self.get_property(target, name.as_str()).is_some() {
                return Ok(Some(name));
            }
        }
    }
}
