/// Identifies a unit of virtual memory, valid in `[0, num_pages)`.
pub type PageId = usize;

/// Identifies a slot of physical memory, valid in `[0, num_frames)`.
pub type FrameId = usize;
