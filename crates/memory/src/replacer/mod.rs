pub(crate) mod fifo_replacer;
pub(crate) mod lru_replacer;
pub(crate) mod random_replacer;
pub(crate) mod replacer;
