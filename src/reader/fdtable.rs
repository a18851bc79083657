//! Residual buffers for several descriptors read at the same time.
//!
//! Descriptors are identified by their number: if the caller closes a descriptor and the
//! number is reused, `release()` must be called first, otherwise bytes left over from the
//! previous file would be returned.
use std::collections::HashMap;
use std::os::unix::io::RawFd;

use log::debug;

use crate::configuration::settings::Settings;
use crate::misc::error::{AppCustomErrorKind, AppError, AppResult};
use crate::reader::{fd::Fd, line::Line, stash::Stash};

/// One residual buffer per descriptor number. Only descriptors in `0..max_descriptors` are
/// accepted, others are rejected with `InvalidArgument`.
#[derive(Debug)]
pub struct FdTable {
    stashes: HashMap<RawFd, Stash>,
    chunk_size: usize,
    max_descriptors: RawFd,
}

impl FdTable {
    pub fn new(settings: &Settings) -> Self {
        FdTable {
            stashes: HashMap::new(),
            chunk_size: settings.chunk_size,
            max_descriptors: settings.max_descriptors,
        }
    }

    fn check(&self, fd: RawFd) -> AppResult<()> {
        if fd < 0 || fd >= self.max_descriptors {
            return Err(AppError::new(
                AppCustomErrorKind::InvalidArgument,
                &format!(
                    "descriptor {} out of range 0..{}",
                    fd, self.max_descriptors
                ),
            ));
        }
        if self.chunk_size == 0 {
            return Err(AppError::new(
                AppCustomErrorKind::InvalidArgument,
                "chunk size must be positive",
            ));
        }
        Ok(())
    }

    /// Returns the next line of `fd`, `Ok(None)` at end of stream.
    ///
    /// State of `fd` is dropped at end of stream and on any error. Other descriptors are
    /// never affected.
    pub fn next_line(&mut self, fd: RawFd) -> AppResult<Option<Line>> {
        self.check(fd)?;
        let mut source = Fd::new(fd)?;

        let stash = self.stashes.entry(fd).or_insert_with(Stash::new);
        let result = stash
            .fill(&mut source, self.chunk_size)
            .and_then(|_| stash.take_line());

        let keep = matches!(result, Ok(Some(_))) && !stash.is_empty();
        if !keep {
            self.stashes.remove(&fd);
        }

        if let Ok(None) = result {
            debug!("end of stream for fd={}", fd);
        }
        result
    }

    /// Forgets buffered bytes of `fd`.
    pub fn release(&mut self, fd: RawFd) {
        if let Some(stash) = self.stashes.remove(&fd) {
            debug!("releasing fd={}, {} bytes dropped", fd, stash.len());
        }
    }

    /// Number of bytes buffered for `fd`.
    pub fn pending(&self, fd: RawFd) -> usize {
        self.stashes.get(&fd).map_or(0, |s| s.len())
    }

    /// Number of descriptors having buffered bytes.
    pub fn tracked(&self) -> usize {
        self.stashes.len()
    }

    /// Changes the read granularity for the next calls. Buffered bytes are kept.
    pub fn set_chunk_size(&mut self, chunk_size: usize) {
        self.chunk_size = chunk_size;
    }

    pub fn max_descriptors(&self) -> RawFd {
        self.max_descriptors
    }
}

impl Default for FdTable {
    fn default() -> Self {
        FdTable::new(&Settings::default())
    }
}
