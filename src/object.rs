//! Runtime objects: a class payload, a prototype link and own properties.

use crate::iterator::IteratorState;
use crate::prelude::*;
use crate::property::PropertyTable;

/// Handle to an object in a [`crate::Heap`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub(crate) fn from_index(index: usize) -> Self {
        ObjectId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.0)
    }
}

/// Type tag of an object, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectClass {
    Object,
    Array,
    Iterator,
}

/// Exotic object behavior and its class-specific payload
#[derive(Debug)]
pub enum ExoticObject {
    /// Ordinary object
    Ordinary,
    /// Array exotic object
    Array { length: u32 },
    /// A for-in enumeration in progress
    Iterator(IteratorState),
}

impl ExoticObject {
    /// Fresh payload for a class
    pub fn for_class(class: ObjectClass) -> Self {
        match class {
            ObjectClass::Object => ExoticObject::Ordinary,
            ObjectClass::Array => ExoticObject::Array { length: 0 },
            ObjectClass::Iterator => ExoticObject::Iterator(IteratorState::default()),
        }
    }

    pub fn class(&self) -> ObjectClass {
        match self {
            ExoticObject::Ordinary => ObjectClass::Object,
            ExoticObject::Array { .. } => ObjectClass::Array,
            ExoticObject::Iterator(_) => ObjectClass::Iterator,
        }
    }
}

/// A JavaScript object
#[derive(Debug)]
pub struct JsObject {
    /// Prototype link. Not owning; chains are acyclic by construction of the
    /// embedding runtime and are never checked for cycles here.
    pub prototype: Option<ObjectId>,
    /// Own properties
    pub properties: PropertyTable,
    /// Exotic object behavior
    pub exotic: ExoticObject,
    /// Next object on the heap's collectible list
    pub(crate) gc_next: Option<ObjectId>,
}

impl JsObject {
    pub fn new(class: ObjectClass, prototype: Option<ObjectId>) -> Self {
        Self {
            prototype,
            properties: PropertyTable::new(),
            exotic: ExoticObject::for_class(class),
            gc_next: None,
        }
    }

    pub fn class(&self) -> ObjectClass {
        self.exotic.class()
    }

    /// Array length, if this is an array
    pub fn array_length(&self) -> Option<u32> {
        match self.exotic {
            ExoticObject::Array { length } => Some(length),
            _ => None,
        }
    }

    pub fn as_iterator(&self) -> Option<&IteratorState> {
        match &self.exotic {
            ExoticObject::Iterator(state) => Some(state),
            _ => None,
        }
    }

    pub fn as_iterator_mut(&mut self) -> Option<&mut IteratorState> {
        match &mut self.exotic {
            ExoticObject::Iterator(state) => Some(state),
            _ => None,
        }
    }
}
