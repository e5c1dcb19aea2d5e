use std::collections::HashMap;

use vmsim_error::Error;

use crate::typedef::{FrameId, PageId};
use crate::Result;

/// Residency mapping from virtual page number to physical frame, containing
/// exactly the pages currently resident in occupied frames.
///
/// Kept strictly in sync with the frame table by the manager; never mutated
/// independently.
#[derive(Debug, Default)]
pub(crate) struct PageTable {
    entries: HashMap<PageId, FrameId>,
}

impl PageTable {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the frame holding `page_id`, if the page is resident.
    pub(crate) fn lookup(&self, page_id: PageId) -> Option<FrameId> {
        self.entries.get(&page_id).copied()
    }

    /// Records that `page_id` is resident in `frame_id`. A page may only be
    /// mapped once; the duplicate check enforces the no-duplication invariant
    /// by construction.
    pub(crate) fn insert(&mut self, page_id: PageId, frame_id: FrameId) -> Result<()> {
        if let Some(existing) = self.entries.get(&page_id) {
            return Err(Error::DuplicateMapping(format!(
                "page {page_id} is already mapped to frame {existing}"
            )));
        }
        self.entries.insert(page_id, frame_id);
        Ok(())
    }

    /// Removes the mapping for `page_id`, returning the frame it occupied.
    pub(crate) fn remove(&mut self, page_id: PageId) -> Result<FrameId> {
        self.entries
            .remove(&page_id)
            .ok_or_else(|| Error::PageNotMapped(format!("page {page_id} is not resident")))
    }

    /// Returns the number of resident pages.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_table_insert_and_lookup() {
        let mut table = PageTable::new();
        assert_eq!(None, table.lookup(4));

        table.insert(4, 1).unwrap();
        assert_eq!(Some(1), table.lookup(4));
        assert_eq!(1, table.len());
    }

    #[test]
    fn test_page_table_rejects_duplicate_mapping() {
        let mut table = PageTable::new();
        table.insert(4, 1).unwrap();
        assert!(matches!(
            table.insert(4, 2),
            Err(Error::DuplicateMapping(_))
        ));
        // The original mapping survives the rejected insert.
        assert_eq!(Some(1), table.lookup(4));
    }

    #[test]
    fn test_page_table_remove_returns_frame() {
        let mut table = PageTable::new();
        table.insert(4, 1).unwrap();
        assert_eq!(1, table.remove(4).unwrap());
        assert_eq!(None, table.lookup(4));
        assert!(matches!(table.remove(4), Err(Error::PageNotMapped(_))));
        assert_eq!(0, table.len());
    }
}
