use std::collections::VecDeque;

use vmsim_error::Error;

use super::replacer::Replacer;
use crate::typedef::{FrameId, PageId};
use crate::Result;

/// Evicts frames in the order their pages were loaded. The arrival queue is
/// fed by `on_load`, so a frame re-enters the back of the queue whenever a new
/// page lands in it after an eviction.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    arrivals: VecDeque<FrameId>,
}

impl FifoReplacer {
    pub fn new() -> Self {
        Self {
            arrivals: VecDeque::new(),
        }
    }
}

impl Replacer for FifoReplacer {
    fn on_load(&mut self, _page_id: PageId, frame_id: FrameId) {
        self.arrivals.push_back(frame_id);
    }

    fn select_victim(&mut self, _frame_count: usize) -> Result<FrameId> {
        self.arrivals.pop_front().ok_or_else(|| {
            Error::InvariantViolation(
                "victim selection requested but no load has been recorded".to_string(),
            )
        })
    }
}
