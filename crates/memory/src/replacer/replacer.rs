use std::fmt::Debug;

use crate::typedef::{FrameId, PageId};
use crate::Result;

/// A page-replacement policy: chooses a victim frame when the frame table is
/// full. Implementations may maintain auxiliary state (arrival order, recency
/// history) through the lifecycle hooks, which the manager invokes after every
/// successful residency event.
pub trait Replacer: Send + Sync + Debug {
    /// Notifies the policy that `page_id` was loaded into `frame_id`, either
    /// into a free frame or over an evicted one.
    fn on_load(&mut self, _page_id: PageId, _frame_id: FrameId) {}

    /// Notifies the policy that a resident `page_id` was accessed in `frame_id`.
    fn on_access(&mut self, _page_id: PageId, _frame_id: FrameId) {}

    /// Chooses a victim frame in `[0, frame_count)` to evict.
    ///
    /// The manager only calls this when every frame is occupied, so any frame
    /// index in range is a valid victim. If that precondition does not hold
    /// the policy fails with `InvariantViolation`.
    fn select_victim(&mut self, frame_count: usize) -> Result<FrameId>;
}
