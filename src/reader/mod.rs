//! Line extraction from byte streams: the residual buffer, the single stream reader and,
//! on unix, the descriptor table.
pub mod compression;
pub mod line;
pub mod linereader;
pub mod stash;

#[cfg(unix)]
pub mod fd;
#[cfg(unix)]
pub mod fdtable;
