//! The residual buffer: bytes already read from a stream but not yet returned as part of a line.
use std::io::Read;

use log::{error, trace};

use crate::misc::error::{AppCustomErrorKind, AppError, AppResult};
use crate::reader::line::Line;

/// What a residual buffer currently holds.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StashState {
    /// Nothing buffered.
    Empty,
    /// Some bytes, but no complete line yet.
    Partial,
    /// At least one complete line is buffered, the next call won't read.
    HasLine,
}

#[derive(Debug, Default)]
pub struct Stash {
    buf: Vec<u8>,
}

impl Stash {
    pub fn new() -> Self {
        Stash::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline(always)]
    fn has_line(&self) -> bool {
        self.buf.contains(&b'\n')
    }

    pub fn state(&self) -> StashState {
        if self.buf.is_empty() {
            StashState::Empty
        } else if self.has_line() {
            StashState::HasLine
        } else {
            StashState::Partial
        }
    }

    /// Drops buffered bytes and gives the memory back.
    pub fn release(&mut self) {
        self.buf = Vec::new();
    }

    /// Reads chunks of at most `chunk_size` bytes from `source` until a newline is buffered or the
    /// stream ends. Returns the number of read calls. Nothing is read when a line is already
    /// buffered.
    ///
    /// Any error leaves the stash empty: bytes accumulated so far are lost.
    pub fn fill<R: Read>(&mut self, source: &mut R, chunk_size: usize) -> AppResult<usize> {
        debug_assert!(chunk_size != 0);

        if self.has_line() {
            return Ok(0);
        }

        let mut chunk = Vec::new();
        if let Err(e) = chunk.try_reserve_exact(chunk_size) {
            self.release();
            error!("unable to allocate a chunk of {} bytes: {}", chunk_size, e);
            return Err(e.into());
        }
        chunk.resize(chunk_size, 0);

        let mut reads = 0;
        loop {
            let bytes_read = match source.read(&mut chunk) {
                Ok(n) => n,
                Err(e) => {
                    error!("read error after {} bytes buffered: {}", self.buf.len(), e);
                    self.release();
                    return Err(AppError::new(
                        AppCustomErrorKind::ReadFailed,
                        &format!("read() failed: {}", e),
                    ));
                }
            };
            reads += 1;
            trace!("read #{} returned {} bytes", reads, bytes_read);

            // EOF
            if bytes_read == 0 {
                break;
            }

            let data = &chunk[..bytes_read];
            if let Err(e) = self.buf.try_reserve(bytes_read) {
                error!("unable to grow stash of {} bytes: {}", self.buf.len(), e);
                self.release();
                return Err(e.into());
            }
            self.buf.extend_from_slice(data);

            // only the new bytes need to be looked at
            if data.contains(&b'\n') {
                break;
            }
        }

        Ok(reads)
    }

    /// Extracts the first line, newline included. Without newline, the whole buffer is the
    /// last line of the stream. `None` when nothing is buffered.
    pub fn take_line(&mut self) -> AppResult<Option<Line>> {
        if self.buf.is_empty() {
            self.release();
            return Ok(None);
        }

        let line = match self.buf.iter().position(|&b| b == b'\n') {
            Some(pos) => {
                let mut line = Vec::new();
                if let Err(e) = line.try_reserve_exact(pos + 1) {
                    error!("unable to allocate a line of {} bytes: {}", pos + 1, e);
                    self.release();
                    return Err(e.into());
                }
                line.extend(self.buf.drain(..=pos));
                line
            }
            None => std::mem::take(&mut self.buf),
        };

        Ok(Some(Line::from(line)))
    }
}
