use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use vmsim_error::errinvariant;

use super::replacer::Replacer;
use crate::typedef::FrameId;
use crate::Result;

/// Picks a victim frame uniformly at random. Keeps no auxiliary state, so the
/// lifecycle hooks use their default no-op implementations.
#[derive(Debug)]
pub struct RandomReplacer {
    rng: StdRng,
}

impl RandomReplacer {
    /// Creates a replacer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a replacer with a fixed seed, so eviction choices are
    /// reproducible across runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer for RandomReplacer {
    fn select_victim(&mut self, frame_count: usize) -> Result<FrameId> {
        if frame_count == 0 {
            return errinvariant!("victim selection requested for an empty frame table");
        }
        Ok(self.rng.random_range(0..frame_count))
    }
}

#[cfg(test)]
mod tests {
    use vmsim_error::Error;

    use super::*;

    #[test]
    fn test_random_replacer_victim_in_range() {
        let mut replacer = RandomReplacer::new();
        for _ in 0..100 {
            let victim = replacer.select_victim(4).unwrap();
            assert!(victim < 4);
        }
    }

    #[test]
    fn test_random_replacer_seed_is_deterministic() {
        let mut first = RandomReplacer::with_seed(42);
        let mut second = RandomReplacer::with_seed(42);
        for _ in 0..50 {
            assert_eq!(
                first.select_victim(8).unwrap(),
                second.select_victim(8).unwrap()
            );
        }
    }

    #[test]
    fn test_random_replacer_rejects_empty_table() {
        let mut replacer = RandomReplacer::with_seed(0);
        assert!(matches!(
            replacer.select_victim(0),
            Err(Error::InvariantViolation(_))
        ));
    }
}
