//! Per-object property store: one AA-tree plus an insertion-ordered list.

use super::record::{ListLink, PropId, PropertyRecord};
use crate::error::JsError;
use crate::prelude::*;
use crate::value::JsString;

/// Own properties of one object.
///
/// Records live in an arena and are addressed by [`PropId`]. The same records
/// are threaded twice: as an AA-tree ordered by name (for lookup) and as a
/// singly linked list in first-insertion order (for enumeration).
#[derive(Debug, Clone)]
pub struct PropertyTable {
    pub(super) nodes: Vec<Option<PropertyRecord>>,
    pub(super) free: Vec<PropId>,
    pub(super) root: PropId,
    head: Option<PropId>,
    tail: Option<PropId>,
    len: usize,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: PropId::SENTINEL,
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Root of the tree, `PropId::SENTINEL` when empty
    pub fn root(&self) -> PropId {
        self.root
    }

    pub fn head(&self) -> Option<PropId> {
        self.head
    }

    pub fn tail(&self) -> Option<PropId> {
        self.tail
    }

    /// Get a record by handle
    pub fn record(&self, id: PropId) -> Option<&PropertyRecord> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    /// Get a record by handle for writing its value or attributes
    pub fn record_mut(&mut self, id: PropId) -> Option<&mut PropertyRecord> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    // ───────────────────────────────────────────────────────────────────────
    // Own property operations
    // ───────────────────────────────────────────────────────────────────────

    /// Look up an own property; never consults a prototype
    pub fn get(&self, name: &str) -> Option<&PropertyRecord> {
        self.record(self.lookup(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PropertyRecord> {
        let id = self.lookup(name);
        self.record_mut(id)
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.lookup(name).is_sentinel()
    }

    /// Find or create the record for `name`.
    ///
    /// A freshly created record is appended to the ordered list; an existing
    /// one keeps its position. Either way the caller gets the record back to
    /// write value and attributes.
    pub fn set(&mut self, name: JsString) -> &mut PropertyRecord {
        let id = self.set_id(name);
        match self.nodes.get_mut(id.index()) {
            Some(Some(record)) => record,
            // insert always returns a live record
            _ => unreachable_record(),
        }
    }

    /// Like [`PropertyTable::set`], returning the record's handle
    pub fn set_id(&mut self, name: JsString) -> PropId {
        let inserted = self.insert(name);
        let unlinked = self.record(inserted.id).is_some_and(|r| r.prev.is_none());
        debug_assert_eq!(unlinked, inserted.created);
        if unlinked {
            self.append(inserted.id);
            self.len += 1;
        }
        inserted.id
    }

    /// Delete an own property. Deleting an absent name is a no-op.
    /// Returns whether a record was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.len;
        self.remove(name);
        self.len != before
    }

    /// Own records in insertion order, including non-enumerable ones
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            table: self,
            next: self.head,
        }
    }

    /// Own names in insertion order, including non-enumerable ones
    pub fn keys(&self) -> Vec<JsString> {
        self.iter().map(|r| r.name.clone()).collect()
    }

    // ───────────────────────────────────────────────────────────────────────
    // Arena and ordered list plumbing
    // ───────────────────────────────────────────────────────────────────────

    pub(super) fn alloc(&mut self, record: PropertyRecord) -> PropId {
        if let Some(id) = self.free.pop() {
            if let Some(slot) = self.nodes.get_mut(id.index()) {
                *slot = Some(record);
                return id;
            }
        }
        let id = PropId::from_index(self.nodes.len());
        self.nodes.push(Some(record));
        id
    }

    /// Append a freshly inserted record to the end of the ordered list
    fn append(&mut self, id: PropId) {
        let link = match self.tail {
            None => {
                self.head = Some(id);
                ListLink::Head
            }
            Some(tail) => {
                if let Some(t) = self.record_mut(tail) {
                    t.next = Some(id);
                }
                ListLink::Next(tail)
            }
        };
        if let Some(r) = self.record_mut(id) {
            r.prev = Some(link);
            r.next = None;
        }
        self.tail = Some(id);
    }

    /// Unlink a record from the ordered list and free its slot.
    ///
    /// The record must already be detached from the tree.
    pub(super) fn release(&mut self, id: PropId) {
        let Some(record) = self.nodes.get_mut(id.index()).and_then(Option::take) else {
            return;
        };
        let next = record.next;
        match record.prev {
            Some(ListLink::Head) => self.head = next,
            Some(ListLink::Next(p)) => {
                if let Some(prev) = self.record_mut(p) {
                    prev.next = next;
                }
            }
            None => {}
        }
        match next {
            Some(n) => {
                if let Some(succ) = self.record_mut(n) {
                    succ.prev = record.prev;
                }
            }
            None => {
                self.tail = match record.prev {
                    Some(ListLink::Next(p)) => Some(p),
                    _ => None,
                };
            }
        }
        if record.prev.is_some() {
            self.len -= 1;
        }
        self.free.push(id);
    }

    // ───────────────────────────────────────────────────────────────────────
    // Invariant checking
    // ───────────────────────────────────────────────────────────────────────

    /// Check every AA-tree invariant and the consistency of the ordered list.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), JsError> {
        let tree_count = self.validate_node(self.root, None, None)?;

        let mut list_count = 0usize;
        let mut expected = ListLink::Head;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let record = self
                .record(id)
                .ok_or_else(|| JsError::internal_error(format!("list names dead {:?}", id)))?;
            if record.prev != Some(expected) {
                return Err(JsError::internal_error(format!(
                    "record {:?} has back link {:?}, expected {:?}",
                    record.name, record.prev, expected
                )));
            }
            if self.lookup(record.name.as_str()) != id {
                return Err(JsError::internal_error(format!(
                    "listed record {:?} is not reachable through the tree",
                    record.name
                )));
            }
            list_count += 1;
            if list_count > tree_count {
                return Err(JsError::internal_error("ordered list is longer than the tree"));
            }
            expected = ListLink::Next(id);
            last = Some(id);
            cursor = record.next;
        }

        if self.tail != last {
            return Err(JsError::internal_error(format!(
                "tail is {:?}, list ends at {:?}",
                self.tail, last
            )));
        }
        if list_count != tree_count || tree_count != self.len {
            return Err(JsError::internal_error(format!(
                "tree holds {} records, list holds {}, len is {}",
                tree_count, list_count, self.len
            )));
        }
        Ok(())
    }

    fn validate_node(
        &self,
        id: PropId,
        lower: Option<&str>,
        upper: Option<&str>,
    ) -> Result<usize, JsError> {
        if id.is_sentinel() {
            return Ok(0);
        }
        let node = self
            .record(id)
            .ok_or_else(|| JsError::internal_error(format!("tree names dead {:?}", id)))?;
        let name = node.name.as_str();
        if lower.is_some_and(|lo| name <= lo) || upper.is_some_and(|hi| name >= hi) {
            return Err(JsError::internal_error(format!("{:?} is out of search order", name)));
        }

        let level = node.level;
        let left = self.level(node.left);
        let right = self.level(node.right);
        let right_right = self.level(self.right(node.right));

        if node.left.is_sentinel() && node.right.is_sentinel() && level != 1 {
            return Err(JsError::internal_error(format!(
                "leaf {:?} has level {}",
                name, level
            )));
        }
        if left + 1 != level {
            return Err(JsError::internal_error(format!(
                "left child of {:?} has level {}, parent {}",
                name, left, level
            )));
        }
        if right != level && right + 1 != level {
            return Err(JsError::internal_error(format!(
                "right child of {:?} has level {}, parent {}",
                name, right, level
            )));
        }
        if right_right >= level {
            return Err(JsError::internal_error(format!(
                "right grandchild of {:?} has level {}, grandparent {}",
                name, right_right, level
            )));
        }
        if level > 1 && (node.left.is_sentinel() || node.right.is_sentinel()) {
            return Err(JsError::internal_error(format!(
                "{:?} has level {} but is missing a child",
                name, level
            )));
        }

        let count_left = self.validate_node(node.left, lower, Some(name))?;
        let count_right = self.validate_node(node.right, Some(name), upper)?;
        Ok(count_left + count_right + 1)
    }
}

impl Default for PropertyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[allow(clippy::panic)]
fn unreachable_record() -> ! {
    panic!("property table internal error: inserted record is missing")
}

/// Iterator over own records in insertion order
pub struct Iter<'a> {
    table: &'a PropertyTable,
    next: Option<PropId>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PropertyRecord;

    fn next(&mut self) -> Option<&'a PropertyRecord> {
        let record = self.table.record(self.next?)?;
        self.next = record.next;
        Some(record)
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a PropertyRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
