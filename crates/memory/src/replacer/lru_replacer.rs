use std::collections::HashMap;

use vmsim_error::errinvariant;

use super::replacer::Replacer;
use crate::typedef::{FrameId, PageId};
use crate::Result;

/// Evicts the least recently used frame, tracked with a logical clock that
/// advances on every load and every hit. Ties break toward the lowest frame
/// index so eviction order is fully deterministic.
#[derive(Debug, Default)]
pub struct LruReplacer {
    last_used: HashMap<FrameId, u64>,
    clock: u64,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self {
            last_used: HashMap::new(),
            clock: 0,
        }
    }

    fn tick(&mut self) -> u64 {
        let old_timestamp = self.clock;
        self.clock += 1;
        old_timestamp
    }
}

impl Replacer for LruReplacer {
    fn on_load(&mut self, _page_id: PageId, frame_id: FrameId) {
        let timestamp = self.tick();
        self.last_used.insert(frame_id, timestamp);
    }

    fn on_access(&mut self, _page_id: PageId, frame_id: FrameId) {
        let timestamp = self.tick();
        self.last_used.insert(frame_id, timestamp);
    }

    fn select_victim(&mut self, frame_count: usize) -> Result<FrameId> {
        let victim = self
            .last_used
            .iter()
            .filter(|(&frame_id, _)| frame_id < frame_count)
            .min_by_key(|(&frame_id, &timestamp)| (timestamp, frame_id))
            .map(|(&frame_id, _)| frame_id);

        match victim {
            Some(frame_id) => {
                // The entry is re-created by `on_load` once the new page lands.
                self.last_used.remove(&frame_id);
                Ok(frame_id)
            }
            None => errinvariant!("victim selection requested but no frame has recency history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use vmsim_error::Error;

    use super::*;

    #[test]
    fn test_lru_replacer_evicts_least_recent() {
        let mut replacer = LruReplacer::new();
        replacer.on_load(10, 0);
        replacer.on_load(11, 1);
        replacer.on_load(12, 2);

        // Touch frame 0, making frame 1 the oldest.
        replacer.on_access(10, 0);
        assert_eq!(1, replacer.select_victim(3).unwrap());
    }

    #[test]
    fn test_lru_replacer_hits_refresh_recency() {
        let mut replacer = LruReplacer::new();
        replacer.on_load(10, 0);
        replacer.on_load(11, 1);
        replacer.on_access(10, 0);
        replacer.on_access(11, 1);
        replacer.on_access(10, 0);

        assert_eq!(1, replacer.select_victim(2).unwrap());
        replacer.on_load(12, 1);
        assert_eq!(0, replacer.select_victim(2).unwrap());
    }

    #[test]
    fn test_lru_replacer_rejects_empty_history() {
        let mut replacer = LruReplacer::new();
        assert!(matches!(
            replacer.select_victim(4),
            Err(Error::InvariantViolation(_))
        ));
    }
}
