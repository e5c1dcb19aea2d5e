use serde::Serialize;
use vmsim_error::{errinvariant, Error};

use crate::frame_table::FrameTable;
use crate::page_table::PageTable;
use crate::replacer::random_replacer::RandomReplacer;
use crate::replacer::replacer::Replacer;
use crate::typedef::{FrameId, PageId};
use crate::Result;

/// What happened on a call to [`MemoryManager::access`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AccessEvent {
    /// The page was already resident. No state changed.
    Hit,
    /// The page was loaded into a free frame.
    Loaded,
    /// A resident page was evicted to make room for this one.
    Evicted,
}

/// Structured outcome of an access, consumed by external presentation layers
/// in place of the status reporting the manager deliberately does not do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessResult {
    pub event: AccessEvent,
    pub page_id: PageId,
    pub frame_id: FrameId,
    /// The page pushed out on an [`AccessEvent::Evicted`] outcome.
    pub evicted: Option<PageId>,
}

/// Orchestrates the frame table, residency mapping, and replacement policy
/// behind a single `access` operation.
///
/// Each call is a single atomic transaction: it validates first, then either
/// fully completes with one of the three [`AccessEvent`] outcomes or fails
/// before any mutation. The manager owns both data structures exclusively and
/// is the only component that mutates them.
#[derive(Debug)]
pub struct MemoryManager {
    num_pages: usize,
    frames: FrameTable,
    page_table: PageTable,
    replacer: Box<dyn Replacer>,
}

impl MemoryManager {
    /// Creates a manager with the default uniform-random replacement policy.
    pub fn new(num_pages: usize, num_frames: usize) -> Result<Self> {
        Self::with_replacer(num_pages, num_frames, Box::new(RandomReplacer::new()))
    }

    /// Creates a manager with an injected replacement policy.
    pub fn with_replacer(
        num_pages: usize,
        num_frames: usize,
        replacer: Box<dyn Replacer>,
    ) -> Result<Self> {
        if num_pages == 0 {
            return Err(Error::InvalidConfiguration(
                "virtual address space must contain at least one page".to_string(),
            ));
        }
        Ok(Self {
            num_pages,
            frames: FrameTable::new(num_frames)?,
            page_table: PageTable::new(),
            replacer,
        })
    }

    /// Resolves a reference to `page_id`, loading it and evicting a resident
    /// page if necessary. Returns what happened and where the page now lives.
    pub fn access(&mut self, page_id: PageId) -> Result<AccessResult> {
        if page_id >= self.num_pages {
            return Err(Error::InvalidPageNumber(format!(
                "page {page_id} out of range for address space of {} pages",
                self.num_pages
            )));
        }

        if let Some(frame_id) = self.page_table.lookup(page_id) {
            self.replacer.on_access(page_id, frame_id);
            return Ok(AccessResult {
                event: AccessEvent::Hit,
                page_id,
                frame_id,
                evicted: None,
            });
        }

        if let Some(frame_id) = self.frames.find_free_frame() {
            self.frames.occupy(frame_id, page_id)?;
            self.page_table.insert(page_id, frame_id)?;
            self.replacer.on_load(page_id, frame_id);
            return Ok(AccessResult {
                event: AccessEvent::Loaded,
                page_id,
                frame_id,
                evicted: None,
            });
        }

        self.evict_and_load(page_id)
    }

    /// Handles the page fault when no frame is free: asks the policy for a
    /// victim, then swaps the mappings over.
    fn evict_and_load(&mut self, page_id: PageId) -> Result<AccessResult> {
        let victim = self.replacer.select_victim(self.frames.frame_count())?;

        // The fault path only runs when the table reported no free frame, so
        // every frame must be occupied. Check rather than assume: a policy
        // that hands back an empty or out-of-range frame has broken its
        // contract, and silently deleting by key would corrupt the mapping.
        if self.frames.occupant(victim).is_none() {
            return errinvariant!(
                "replacement policy selected frame {victim}, which is not occupied"
            );
        }

        let evicted_page = self.frames.vacate(victim)?;
        self.page_table.remove(evicted_page)?;
        self.frames.occupy(victim, page_id)?;
        self.page_table.insert(page_id, victim)?;
        self.replacer.on_load(page_id, victim);

        Ok(AccessResult {
            event: AccessEvent::Evicted,
            page_id,
            frame_id: victim,
            evicted: Some(evicted_page),
        })
    }

    /// Returns an ordered snapshot of the frame table for external rendering.
    /// Does not mutate manager state.
    pub fn dump_state(&self) -> Vec<(FrameId, Option<PageId>)> {
        self.frames.slots().enumerate().collect()
    }

    /// Returns the size of the virtual address space in pages.
    pub fn page_count(&self) -> usize {
        self.num_pages
    }

    /// Returns the total number of physical frames.
    pub fn frame_count(&self) -> usize {
        self.frames.frame_count()
    }

    /// Returns the number of empty frames.
    pub fn free_frame_count(&self) -> usize {
        self.frames.free_frame_count()
    }

    /// Returns the number of resident pages.
    pub fn resident_page_count(&self) -> usize {
        self.page_table.len()
    }

    /// Verifies that the frame table and residency mapping are mutual inverses
    /// restricted to occupied slots. A failure here indicates a bug in the
    /// manager, not a usage error.
    pub fn check_consistency(&self) -> Result<()> {
        let mut occupied = 0;
        for (frame_id, occupant) in self.frames.slots().enumerate() {
            let Some(page_id) = occupant else { continue };
            occupied += 1;
            match self.page_table.lookup(page_id) {
                Some(mapped) if mapped == frame_id => {}
                Some(mapped) => {
                    return errinvariant!(
                        "page {page_id} is resident in frame {frame_id} but mapped to frame {mapped}"
                    );
                }
                None => {
                    return errinvariant!(
                        "page {page_id} is resident in frame {frame_id} but missing from the page table"
                    );
                }
            }
        }
        if occupied != self.page_table.len() {
            return errinvariant!(
                "page table holds {} mappings but {occupied} frames are occupied",
                self.page_table.len()
            );
        }
        Ok(())
    }
}
