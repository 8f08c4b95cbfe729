//! AA-tree engine behind [`PropertyTable`].
//!
//! Invariants maintained on every node:
//!
//! - every leaf has level one
//! - every left child has exactly one level less than its parent
//! - every right child has the same level as its parent or one less
//! - every right grandchild has a level strictly below its grandparent
//! - every node above level one has two children
//!
//! An edge between nodes of equal level is a horizontal link. Single right
//! horizontal links are allowed, consecutive ones are not, left horizontal
//! links never are. `skew` removes a left horizontal link and `split` removes
//! a pair of consecutive right horizontal links.

use super::record::{PropId, PropertyRecord};
use super::table::PropertyTable;
use crate::prelude::*;
use crate::value::{CheapClone, JsString};

/// Outcome of a tree insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Inserted {
    /// The matching record, new or existing
    pub id: PropId,
    /// Whether the record was allocated by this insert
    pub created: bool,
}

/// What to do with a record once it has been spliced out of the tree
#[derive(Clone, Copy, PartialEq, Eq)]
enum Splice {
    /// Unlink it from the ordered list and free its slot
    Release,
    /// Keep it alive; the caller reattaches it elsewhere in the tree
    Detach,
}

impl PropertyTable {
    // ───────────────────────────────────────────────────────────────────────
    // Node field access. The sentinel reads as a level 0 node whose children
    // are the sentinel; writes to it are dropped.
    // ───────────────────────────────────────────────────────────────────────

    pub(super) fn level(&self, id: PropId) -> u32 {
        self.record(id).map_or(0, |n| n.level)
    }

    pub(super) fn left(&self, id: PropId) -> PropId {
        self.record(id).map_or(PropId::SENTINEL, |n| n.left)
    }

    pub(super) fn right(&self, id: PropId) -> PropId {
        self.record(id).map_or(PropId::SENTINEL, |n| n.right)
    }

    fn set_level(&mut self, id: PropId, level: u32) {
        if let Some(n) = self.record_mut(id) {
            n.level = level;
        }
    }

    fn set_left(&mut self, id: PropId, left: PropId) {
        if let Some(n) = self.record_mut(id) {
            n.left = left;
        }
    }

    fn set_right(&mut self, id: PropId, right: PropId) {
        if let Some(n) = self.record_mut(id) {
            n.right = right;
        }
    }

    // ───────────────────────────────────────────────────────────────────────
    // Search
    // ───────────────────────────────────────────────────────────────────────

    /// Find the record named `name`, or `PropId::SENTINEL`
    pub fn lookup(&self, name: &str) -> PropId {
        let mut node = self.root;
        while let Some(record) = self.record(node) {
            node = match name.cmp(record.name.as_str()) {
                Ordering::Equal => return node,
                Ordering::Less => record.left,
                Ordering::Greater => record.right,
            };
        }
        PropId::SENTINEL
    }

    // ───────────────────────────────────────────────────────────────────────
    // Rotations
    // ───────────────────────────────────────────────────────────────────────

    /// Rotate right when the left child sits on the node's level
    fn skew(&mut self, node: PropId) -> PropId {
        let left = self.left(node);
        if !node.is_sentinel() && self.level(left) == self.level(node) {
            self.set_left(node, self.right(left));
            self.set_right(left, node);
            return left;
        }
        node
    }

    /// Rotate left and promote when two right horizontal links follow each other
    fn split(&mut self, node: PropId) -> PropId {
        let right = self.right(node);
        if !node.is_sentinel() && self.level(self.right(right)) == self.level(node) {
            self.set_right(node, self.left(right));
            self.set_left(right, node);
            self.set_level(right, self.level(right) + 1);
            return right;
        }
        node
    }

    // ───────────────────────────────────────────────────────────────────────
    // Insertion
    // ───────────────────────────────────────────────────────────────────────

    /// Insert `name` into the tree without touching the ordered list.
    ///
    /// An existing record is returned unchanged.
    pub(crate) fn insert(&mut self, name: JsString) -> Inserted {
        let (root, inserted) = self.insert_at(self.root, name);
        self.root = root;
        inserted
    }

    fn insert_at(&mut self, node: PropId, name: JsString) -> (PropId, Inserted) {
        let Some(record) = self.record(node) else {
            let id = self.alloc(PropertyRecord::new(name));
            return (id, Inserted { id, created: true });
        };

        let (left, right) = (record.left, record.right);

        let inserted = match name.as_str().cmp(record.name.as_str()) {
            Ordering::Equal => {
                return (
                    node,
                    Inserted {
                        id: node,
                        created: false,
                    },
                );
            }
            Ordering::Less => {
                let (left, inserted) = self.insert_at(left, name);
                self.set_left(node, left);
                inserted
            }
            Ordering::Greater => {
                let (right, inserted) = self.insert_at(right, name);
                self.set_right(node, right);
                inserted
            }
        };

        let node = self.skew(node);
        let node = self.split(node);
        (node, inserted)
    }

    // ───────────────────────────────────────────────────────────────────────
    // Deletion
    // ───────────────────────────────────────────────────────────────────────

    /// Remove `name` from the tree, releasing its record
    pub(crate) fn remove(&mut self, name: &str) {
        self.root = self.remove_at(self.root, name, Splice::Release);
    }

    fn remove_at(&mut self, node: PropId, name: &str, splice: Splice) -> PropId {
        let Some(record) = self.record(node) else {
            return node;
        };
        let (left, right) = (record.left, record.right);

        let node = match name.cmp(record.name.as_str()) {
            Ordering::Less => {
                let left = self.remove_at(left, name, splice);
                self.set_left(node, left);
                node
            }
            Ordering::Greater => {
                let right = self.remove_at(right, name, splice);
                self.set_right(node, right);
                node
            }
            Ordering::Equal if left.is_sentinel() || right.is_sentinel() => {
                if splice == Splice::Release {
                    self.release(node);
                }
                if left.is_sentinel() { right } else { left }
            }
            Ordering::Equal => {
                // Two children: the in-order successor takes this node's
                // place so it keeps its own list position and handle.
                let succ = self.leftmost(right);
                let succ_name = match self.record(succ) {
                    Some(s) => s.name.cheap_clone(),
                    None => return node,
                };
                let right = self.remove_at(right, succ_name.as_str(), Splice::Detach);
                let level = self.level(node);
                if let Some(s) = self.record_mut(succ) {
                    s.left = left;
                    s.right = right;
                    s.level = level;
                }
                if splice == Splice::Release {
                    self.release(node);
                }
                succ
            }
        };

        self.rebalance_after_remove(node)
    }

    fn leftmost(&self, mut node: PropId) -> PropId {
        loop {
            let left = self.left(node);
            if left.is_sentinel() {
                return node;
            }
            node = left;
        }
    }

    /// Restore the invariants at `node` after a removal below it
    fn rebalance_after_remove(&mut self, node: PropId) -> PropId {
        let level = self.level(node);
        if node.is_sentinel() {
            return node;
        }
        let floor = level - 1;
        if self.level(self.left(node)) >= floor && self.level(self.right(node)) >= floor {
            return node;
        }

        self.set_level(node, floor);
        let right = self.right(node);
        if self.level(right) > floor {
            self.set_level(right, floor);
        }

        let node = self.skew(node);
        let right = self.skew(self.right(node));
        self.set_right(node, right);
        let right_right = self.skew(self.right(right));
        self.set_right(right, right_right);
        let node = self.split(node);
        let right = self.split(self.right(node));
        self.set_right(node, right);
        node
    }

    /// Height of the tree counted in nodes (0 when empty)
    pub fn height(&self) -> usize {
        self.height_at(self.root)
    }

    fn height_at(&self, node: PropId) -> usize {
        if node.is_sentinel() {
            return 0;
        }
        1 + self
            .height_at(self.left(node))
            .max(self.height_at(self.right(node)))
    }
}
