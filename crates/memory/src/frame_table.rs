use vmsim_error::{errconfig, Error};

use crate::typedef::{FrameId, PageId};
use crate::Result;

/// Tracks which physical frames are occupied and by which page.
///
/// The slot count is fixed at construction. Slots only ever transition between
/// empty and occupied through [`occupy`](FrameTable::occupy) and
/// [`vacate`](FrameTable::vacate); the [`MemoryManager`](crate::MemoryManager)
/// owns the table exclusively and keeps it in sync with the residency mapping.
#[derive(Debug)]
pub(crate) struct FrameTable {
    slots: Vec<Option<PageId>>,
}

impl FrameTable {
    /// Creates a frame table with `frame_count` empty slots.
    pub(crate) fn new(frame_count: usize) -> Result<Self> {
        if frame_count == 0 {
            return errconfig!("physical memory must contain at least one frame");
        }
        Ok(Self {
            slots: vec![None; frame_count],
        })
    }

    /// Returns the total number of frames.
    pub(crate) fn frame_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of empty frames.
    pub(crate) fn free_frame_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Returns the lowest-index empty frame, or `None` if all are occupied.
    pub(crate) fn find_free_frame(&self) -> Option<FrameId> {
        self.slots.iter().position(Option::is_none)
    }

    /// Returns the page resident in `frame_id`, or `None` if the slot is empty
    /// or the index is out of range.
    pub(crate) fn occupant(&self, frame_id: FrameId) -> Option<PageId> {
        self.slots.get(frame_id).copied().flatten()
    }

    /// Marks `frame_id` as holding `page_id`. The slot must be empty; the
    /// manager vacates first on the eviction path.
    pub(crate) fn occupy(&mut self, frame_id: FrameId, page_id: PageId) -> Result<()> {
        let frame_count = self.slots.len();
        let slot = self.slots.get_mut(frame_id).ok_or_else(|| {
            Error::InvalidFrameIndex(format!(
                "frame {frame_id} out of range for table of {frame_count} frames"
            ))
        })?;
        if let Some(resident) = slot {
            return Err(Error::FrameAlreadyOccupied(format!(
                "frame {frame_id} already holds page {resident}"
            )));
        }
        *slot = Some(page_id);
        Ok(())
    }

    /// Clears `frame_id` and returns the page that was resident there.
    pub(crate) fn vacate(&mut self, frame_id: FrameId) -> Result<PageId> {
        let frame_count = self.slots.len();
        let slot = self.slots.get_mut(frame_id).ok_or_else(|| {
            Error::InvalidFrameIndex(format!(
                "frame {frame_id} out of range for table of {frame_count} frames"
            ))
        })?;
        slot.take()
            .ok_or_else(|| Error::FrameNotOccupied(format!("frame {frame_id} is already empty")))
    }

    /// Iterates over all slots in frame order.
    pub(crate) fn slots(&self) -> impl Iterator<Item = Option<PageId>> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_table_rejects_zero_frames() {
        assert!(matches!(
            FrameTable::new(0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_frame_table_find_free_frame_is_lowest_index() {
        let mut table = FrameTable::new(4).unwrap();
        assert_eq!(Some(0), table.find_free_frame());

        table.occupy(0, 7).unwrap();
        table.occupy(2, 8).unwrap();
        assert_eq!(Some(1), table.find_free_frame());

        table.occupy(1, 9).unwrap();
        assert_eq!(Some(3), table.find_free_frame());

        table.occupy(3, 10).unwrap();
        assert_eq!(None, table.find_free_frame());
        assert_eq!(0, table.free_frame_count());
    }

    #[test]
    fn test_frame_table_occupy_rejects_out_of_range() {
        let mut table = FrameTable::new(2).unwrap();
        assert!(matches!(
            table.occupy(2, 0),
            Err(Error::InvalidFrameIndex(_))
        ));
    }

    #[test]
    fn test_frame_table_occupy_rejects_occupied_slot() {
        let mut table = FrameTable::new(2).unwrap();
        table.occupy(1, 5).unwrap();
        assert!(matches!(
            table.occupy(1, 6),
            Err(Error::FrameAlreadyOccupied(_))
        ));
        // The original occupant is untouched.
        assert_eq!(Some(5), table.occupant(1));
    }

    #[test]
    fn test_frame_table_vacate_returns_resident_page() {
        let mut table = FrameTable::new(2).unwrap();
        table.occupy(0, 3).unwrap();
        assert_eq!(3, table.vacate(0).unwrap());
        assert_eq!(None, table.occupant(0));
        assert!(matches!(table.vacate(0), Err(Error::FrameNotOccupied(_))));
    }

    #[test]
    fn test_frame_table_occupant_out_of_range_is_none() {
        let table = FrameTable::new(2).unwrap();
        assert_eq!(None, table.occupant(99));
    }
}
