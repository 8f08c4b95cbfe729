//! Prototype chain lookup.
//!
//! Chains are assumed acyclic; the embedding runtime guarantees that when it
//! sets prototypes, so a walk always ends at an object without a prototype.

use crate::heap::Heap;
use crate::object::ObjectId;
use crate::property::PropertyRecord;

impl Heap {
    /// Own property only, no prototype traversal
    pub fn get_own_property(&self, obj: ObjectId, name: &str) -> Option<&PropertyRecord> {
        self.get(obj)?.properties.get(name)
    }

    /// Property lookup through the prototype chain.
    ///
    /// The nearest definition wins; an unknown object handle resolves nothing.
    pub fn get_property(&self, obj: ObjectId, name: &str) -> Option<&PropertyRecord> {
        self.resolve(obj, name).map(|(_, record)| record)
    }

    /// Like [`Heap::get_property`], also reporting which object holds the record
    pub fn resolve(&self, obj: ObjectId, name: &str) -> Option<(ObjectId, &PropertyRecord)> {
        let mut cursor = Some(obj);
        while let Some(id) = cursor {
            let object = self.get(id)?;
            if let Some(record) = object.properties.get(name) {
                return Some((id, record));
            }
            cursor = object.prototype;
        }
        None
    }

    /// `obj` followed by each of its prototypes, nearest first
    pub fn prototype_chain(&self, obj: ObjectId) -> PrototypeChain<'_> {
        PrototypeChain {
            heap: self,
            next: self.contains(obj).then_some(obj),
        }
    }
}

/// Iterator over an object and its prototypes
pub struct PrototypeChain<'a> {
    heap: &'a Heap,
    next: Option<ObjectId>,
}

impl Iterator for PrototypeChain<'_> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        let id = self.next?;
        self.next = self.heap.get(id).and_then(|o| o.prototype);
        Some(id)
    }
}
