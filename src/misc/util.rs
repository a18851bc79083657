//! All constants reside here.

/// Number of bytes requested by each underlying read call.
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Upper bound (exclusive) on descriptor numbers tracked by a descriptor table.
pub const DEFAULT_MAX_DESCRIPTORS: i32 = 1024;
