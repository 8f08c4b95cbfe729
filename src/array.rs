//! Array length truncation

use crate::conversion::canonical_index;
use crate::error::JsError;
use crate::heap::Heap;
use crate::iterator::IteratorState;
use crate::object::{ExoticObject, ObjectId};

impl Heap {
    /// Set the length of an array object.
    ///
    /// Shrinking deletes every own property whose name is the canonical
    /// decimal text of an index at or past `new_len`. Names that only look
    /// numeric ("01", "1.0", "4294967296") are left alone. Growing only
    /// updates the stored length.
    pub fn resize_array(&mut self, obj: ObjectId, new_len: u32) -> Result<(), JsError> {
        let old_len = self
            .get(obj)
            .and_then(|o| o.array_length())
            .ok_or_else(|| JsError::type_error("not an array"))?;

        if new_len < old_len {
            let mut names = IteratorState::snapshot(self, obj, true);
            #[cfg(feature = "gc_logging")]
            let mut deleted = 0usize;

            while let Some(name) = names.next_name(self) {
                if !canonical_index(name.as_str()).is_some_and(|index| index >= new_len) {
                    continue;
                }
                if let Some(object) = self.get_mut(obj) {
                    object.properties.delete(name.as_str());
                    #[cfg(feature = "gc_logging")]
                    {
                        deleted += 1;
                    }
                }
            }

            #[cfg(feature = "gc_logging")]
            tracing::debug!(
                target: "propstore::gc",
                old_length = old_len,
                new_length = new_len,
                deleted,
                "array truncated"
            );
        }

        if let Some(object) = self.get_mut(obj)
            && let ExoticObject::Array { length } = &mut object.exotic
        {
            *length = new_len;
        }
        Ok(())
    }
}
