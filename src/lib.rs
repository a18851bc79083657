//! Read a byte stream one line per call.
//!
//! Bytes read past the end of a line are kept in a residual buffer and served by the next
//! call, so a stream is read once, in fixed-size chunks, and never loaded entirely.
//!
//! ```no_run
//! use nextline::LineReader;
//!
//! let file = std::fs::File::open("/var/log/syslog").unwrap();
//! let mut reader = LineReader::with_chunk_size(file, 4096);
//! while let Some(line) = reader.next_line().unwrap() {
//!     print!("{}", line);
//! }
//! ```
#[macro_use]
pub mod misc;
pub mod configuration;
pub mod reader;

pub use configuration::settings::Settings;
pub use misc::error::{AppCustomErrorKind, AppError, AppResult};
pub use reader::{
    line::Line,
    linereader::LineReader,
    stash::{Stash, StashState},
};

#[cfg(unix)]
pub use reader::{fd::Fd, fdtable::FdTable};
