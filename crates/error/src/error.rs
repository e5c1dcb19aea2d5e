pub type Result<T> = std::result::Result<T, Error>;
impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// The manager was constructed with a zero-sized address space or frame table.
    InvalidConfiguration(String),
    /// An accessed page number falls outside the virtual address space.
    InvalidPageNumber(String),
    /// A frame index falls outside the physical frame table.
    InvalidFrameIndex(String),
    /// An attempt was made to load a page into a frame that already holds one.
    FrameAlreadyOccupied(String),
    /// An attempt was made to vacate a frame that holds no page.
    FrameNotOccupied(String),
    /// A page was inserted into the residency mapping while already mapped.
    DuplicateMapping(String),
    /// A page was removed from the residency mapping while not mapped.
    PageNotMapped(String),
    /// The frame table and residency mapping fell out of sync, or a replacement
    /// policy violated its contract. Indicates a bug, not a usage error.
    InvariantViolation(String),
}

impl std::error::Error for Error {}
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidPageNumber(msg) => write!(f, "Invalid page number: {}", msg),
            Error::InvalidFrameIndex(msg) => write!(f, "Invalid frame index: {}", msg),
            Error::FrameAlreadyOccupied(msg) => write!(f, "Frame already occupied: {}", msg),
            Error::FrameNotOccupied(msg) => write!(f, "Frame not occupied: {}", msg),
            Error::DuplicateMapping(msg) => write!(f, "Duplicate mapping: {}", msg),
            Error::PageNotMapped(msg) => write!(f, "Page not mapped: {}", msg),
            Error::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
        }
    }
}
