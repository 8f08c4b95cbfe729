//! Object arena and the collectible list.
//!
//! Marking is done by the embedding collector. The heap only records every
//! allocation on an intrusive list, counts allocations since the last sweep
//! so the collector knows when to run, and frees whatever the collector
//! reports as dead.

use crate::object::{JsObject, ObjectId};
use crate::prelude::*;

/// Default threshold: collect after this many allocations
pub const DEFAULT_GC_THRESHOLD: usize = 100;

/// Arena of objects addressed by [`ObjectId`]
pub struct Heap {
    objects: Vec<Option<JsObject>>,
    /// Slots of swept objects, reused by later allocations
    free_list: Vec<ObjectId>,
    /// Most recently allocated live object; links continue through `gc_next`
    gc_head: Option<ObjectId>,
    /// Allocations since the last sweep
    gc_counter: usize,
    /// Threshold for `should_collect` (0 = never)
    gc_threshold: usize,
}

impl Heap {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_GC_THRESHOLD)
    }

    pub fn with_threshold(gc_threshold: usize) -> Self {
        Self {
            objects: Vec::new(),
            free_list: Vec::new(),
            gc_head: None,
            gc_counter: 0,
            gc_threshold,
        }
    }

    /// Store a new object and register it on the collectible list
    pub fn alloc(&mut self, mut object: JsObject) -> ObjectId {
        object.gc_next = self.gc_head;

        let id = match self.free_list.pop() {
            Some(id) => id,
            None => {
                self.objects.push(None);
                ObjectId::from_index(self.objects.len() - 1)
            }
        };
        if let Some(slot) = self.objects.get_mut(id.index()) {
            *slot = Some(object);
        }

        self.gc_head = Some(id);
        self.gc_counter += 1;

        #[cfg(feature = "gc_logging")]
        if self.gc_threshold > 0 && self.gc_counter == self.gc_threshold {
            tracing::debug!(
                target: "propstore::gc",
                allocations = self.gc_counter,
                threshold = self.gc_threshold,
                "collection threshold reached"
            );
        }

        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&JsObject> {
        self.objects.get(id.index()).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut JsObject> {
        self.objects.get_mut(id.index()).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Whether enough allocations happened since the last sweep to collect
    pub fn should_collect(&self) -> bool {
        self.gc_threshold > 0 && self.gc_counter >= self.gc_threshold
    }

    pub fn gc_counter(&self) -> usize {
        self.gc_counter
    }

    pub fn gc_threshold(&self) -> usize {
        self.gc_threshold
    }

    pub fn set_gc_threshold(&mut self, threshold: usize) {
        self.gc_threshold = threshold;
    }

    /// Live objects in collectible-list order (newest first)
    pub fn collectible(&self) -> Collectible<'_> {
        Collectible {
            heap: self,
            next: self.gc_head,
        }
    }

    /// Objects reachable from `roots`, indexed by [`ObjectId::index`].
    ///
    /// Edges are prototype links, object-valued properties and the target of
    /// an iterator.
    pub fn mark(&self, roots: &[ObjectId]) -> Vec<bool> {
        let mut marks = vec![false; self.objects.len()];
        let mut worklist: Vec<ObjectId> = roots.to_vec();

        while let Some(id) = worklist.pop() {
            let Some(object) = self.get(id) else {
                continue;
            };
            match marks.get_mut(id.index()) {
                Some(marked) if !*marked => *marked = true,
                _ => continue,
            }
            worklist.extend(object.prototype);
            worklist.extend(object.properties.iter().filter_map(|r| r.value.as_object()));
            if let Some(state) = object.as_iterator() {
                worklist.extend(state.target());
            }
        }
        marks
    }

    /// Free every object for which `is_live` returns false.
    ///
    /// Dropping an object releases its property records and, for iterators,
    /// any names not yet consumed. Resets the allocation counter and returns
    /// the number of objects freed.
    pub fn sweep(&mut self, mut is_live: impl FnMut(ObjectId) -> bool) -> usize {
        let mut freed = 0;
        let mut survivors = Vec::new();
        let mut cursor = self.gc_head;

        while let Some(id) = cursor {
            let Some(object) = self.get(id) else {
                break;
            };
            cursor = object.gc_next;
            if is_live(id) {
                survivors.push(id);
            } else {
                if let Some(slot) = self.objects.get_mut(id.index()) {
                    *slot = None;
                }
                self.free_list.push(id);
                freed += 1;
            }
        }

        // Relink survivors, keeping newest-first order
        self.gc_head = None;
        for id in survivors.iter().rev() {
            let head = self.gc_head;
            if let Some(object) = self.get_mut(*id) {
                object.gc_next = head;
            }
            self.gc_head = Some(*id);
        }
        self.gc_counter = 0;

        #[cfg(feature = "gc_logging")]
        tracing::info!(
            target: "propstore::gc",
            freed_objects = freed,
            live_objects = survivors.len(),
            "sweep complete"
        );

        freed
    }

    pub fn stats(&self) -> HeapStats {
        HeapStats {
            live_objects: self.objects.iter().filter(|o| o.is_some()).count(),
            free_slots: self.free_list.len(),
            allocations_since_sweep: self.gc_counter,
        }
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the collectible list
pub struct Collectible<'a> {
    heap: &'a Heap,
    next: Option<ObjectId>,
}

impl Iterator for Collectible<'_> {
    type Item = ObjectId;

    fn next(&mut self) -> Option<ObjectId> {
        let id = self.next?;
        self.next = self.heap.get(id).and_then(|o| o.gc_next);
        Some(id)
    }
}

/// Statistics about the heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapStats {
    /// Number of live objects
    pub live_objects: usize,
    /// Number of freed slots waiting for reuse
    pub free_slots: usize,
    /// Allocations since the last sweep
    pub allocations_since_sweep: usize,
}
