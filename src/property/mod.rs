//! Ordered, keyed property storage for objects.
//!
//! Each object owns a [`PropertyTable`]: an AA-tree keyed by interned name
//! for O(log n) lookup, with the same records threaded on a list in
//! first-insertion order for enumeration.

mod record;
mod table;
mod tree;

pub use record::{Attributes, ListLink, PropId, PropertyRecord};
pub use table::{Iter, PropertyTable};
