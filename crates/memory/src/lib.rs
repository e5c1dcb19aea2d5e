//! Simulates the address-translation and page-replacement layer of a virtual
//! memory manager: a fixed pool of physical frames, a residency mapping from
//! virtual pages to frames, and a pluggable policy that picks a victim frame
//! when the pool is exhausted.
pub(crate) mod frame_table;
pub(crate) mod manager;
pub(crate) mod page_table;
pub(crate) mod replacer;
pub(crate) mod typedef;

pub use manager::{AccessEvent, AccessResult, MemoryManager};
pub use replacer::fifo_replacer::FifoReplacer;
pub use replacer::lru_replacer::LruReplacer;
pub use replacer::random_replacer::RandomReplacer;
pub use replacer::replacer::Replacer;
pub use typedef::{FrameId, PageId};

pub(crate) type Result<T> = std::result::Result<T, vmsim_error::Error>;
