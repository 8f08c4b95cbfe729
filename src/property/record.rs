//! Property records: the nodes of a property table.

use crate::prelude::*;
use crate::value::{JsString, JsValue};

/// Stable handle to a record inside one [`super::PropertyTable`].
///
/// Handles stay valid until the record they name is deleted. A handle is
/// meaningless in any table other than the one that issued it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropId(u32);

impl PropId {
    /// The shared "no child" marker. Never stored in the arena; reads through
    /// it see level 0 and sentinel children, writes through it are ignored.
    pub const SENTINEL: PropId = PropId(u32::MAX);

    pub(crate) fn from_index(index: usize) -> Self {
        PropId(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_sentinel(self) -> bool {
        self == PropId::SENTINEL
    }
}

impl fmt::Debug for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "PropId(sentinel)")
        } else {
            write!(f, "PropId({})", self.0)
        }
    }
}

/// Property attribute bits
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Attributes(u8);

impl Attributes {
    pub const NONE: Attributes = Attributes(0);
    pub const READ_ONLY: Attributes = Attributes(1);
    /// Skipped by for-in enumeration
    pub const DONT_ENUM: Attributes = Attributes(2);
    pub const DONT_CONF: Attributes = Attributes(4);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Attributes) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Attributes) -> Attributes {
        Attributes(self.0 | other.0)
    }

    pub fn is_enumerable(self) -> bool {
        !self.contains(Attributes::DONT_ENUM)
    }
}

impl core::ops::BitOr for Attributes {
    type Output = Attributes;

    fn bitor(self, rhs: Attributes) -> Attributes {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for Attributes {
    fn bitor_assign(&mut self, rhs: Attributes) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(Attributes::READ_ONLY) {
            flags.push("READ_ONLY");
        }
        if self.contains(Attributes::DONT_ENUM) {
            flags.push("DONT_ENUM");
        }
        if self.contains(Attributes::DONT_CONF) {
            flags.push("DONT_CONF");
        }
        if flags.is_empty() {
            write!(f, "Attributes(NONE)")
        } else {
            write!(f, "Attributes({})", flags.join(" | "))
        }
    }
}

/// The slot that currently points at a record in the insertion-ordered list:
/// either the table's `head` or the `next` field of the preceding record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLink {
    Head,
    Next(PropId),
}

/// A single own property.
///
/// `name`, `value` and `attributes` belong to the caller; the tree and list
/// links are maintained by the table.
#[derive(Debug, Clone)]
pub struct PropertyRecord {
    pub(crate) name: JsString,
    pub value: JsValue,
    pub attributes: Attributes,
    pub(crate) level: u32,
    pub(crate) left: PropId,
    pub(crate) right: PropId,
    pub(crate) next: Option<PropId>,
    /// `None` until the record has been appended to the ordered list
    pub(crate) prev: Option<ListLink>,
}

impl PropertyRecord {
    pub(crate) fn new(name: JsString) -> Self {
        Self {
            name,
            value: JsValue::Undefined,
            attributes: Attributes::NONE,
            level: 1,
            left: PropId::SENTINEL,
            right: PropId::SENTINEL,
            next: None,
            prev: None,
        }
    }

    pub fn name(&self) -> &JsString {
        &self.name
    }

    pub fn is_enumerable(&self) -> bool {
        self.attributes.is_enumerable()
    }

    /// Balance level in the tree (leaves are level 1)
    pub fn level(&self) -> u32 {
        self.level
    }
}
