//! A reader object owning one byte stream and its residual buffer.
use std::io::Read;

use log::{debug, trace};

use crate::configuration::settings::Settings;
use crate::misc::{
    error::{AppCustomErrorKind, AppError, AppResult},
    util::DEFAULT_CHUNK_SIZE,
};
use crate::reader::{
    line::Line,
    stash::{Stash, StashState},
};

#[cfg(unix)]
use crate::reader::fd::Fd;
#[cfg(unix)]
use std::os::unix::io::RawFd;

/// Returns the lines of `source` one by one, reading it in chunks of `chunk_size` bytes.
///
/// Bytes read past a newline are kept for the next call, so the source is never read twice
/// and never loaded entirely.
pub struct LineReader<R> {
    source: R,
    stash: Stash,
    chunk_size: usize,
    exhausted: bool,
    reads: u64,
    lines: u64,
}

impl<R: Read> LineReader<R> {
    pub fn new(source: R) -> Self {
        LineReader::with_chunk_size(source, DEFAULT_CHUNK_SIZE)
    }

    /// A zero `chunk_size` is accepted here but every `next_line()` call will fail.
    pub fn with_chunk_size(source: R, chunk_size: usize) -> Self {
        LineReader {
            source,
            stash: Stash::new(),
            chunk_size,
            exhausted: false,
            reads: 0,
            lines: 0,
        }
    }

    pub fn from_settings(source: R, settings: &Settings) -> Self {
        LineReader::with_chunk_size(source, settings.chunk_size)
    }

    /// Returns the next line, `Ok(None)` at end of stream.
    ///
    /// On error, buffered bytes are dropped and the next call starts afresh from the current
    /// stream position.
    pub fn next_line(&mut self) -> AppResult<Option<Line>> {
        if self.chunk_size == 0 {
            return Err(AppError::new(
                AppCustomErrorKind::InvalidArgument,
                "chunk size must be positive",
            ));
        }

        if self.exhausted {
            return Ok(None);
        }

        self.reads += self.stash.fill(&mut self.source, self.chunk_size)? as u64;

        match self.stash.take_line()? {
            None => {
                debug!("end of stream after {} lines, {} reads", self.lines, self.reads);
                self.exhausted = true;
                Ok(None)
            }
            Some(line) => {
                self.lines += 1;
                trace!("line#={}, {} bytes", self.lines, line.len());
                Ok(Some(line))
            }
        }
    }

    /// Current content of the residual buffer.
    pub fn state(&self) -> StashState {
        self.stash.state()
    }

    /// Number of underlying read calls so far.
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Number of lines returned so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Gives the source back. Buffered bytes are lost.
    pub fn into_inner(self) -> R {
        self.source
    }
}

#[cfg(unix)]
impl LineReader<Fd> {
    /// Reads from an already open descriptor, which is not closed when the reader is dropped.
    pub fn from_fd(fd: RawFd) -> AppResult<Self> {
        Ok(LineReader::new(Fd::new(fd)?))
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = AppResult<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Error, ErrorKind};

    fn lines_of(data: &[u8], chunk_size: usize) -> Vec<Vec<u8>> {
        LineReader::with_chunk_size(Cursor::new(data.to_vec()), chunk_size)
            .map(|l| l.unwrap().into_bytes())
            .collect()
    }

    #[test]
    fn final_line_without_newline() {
        let mut reader = LineReader::new(Cursor::new(b"abc\ndef".to_vec()));
        assert_eq!(reader.next_line().unwrap().unwrap().as_bytes(), b"abc\n");

        let last = reader.next_line().unwrap().unwrap();
        assert_eq!(last.as_bytes(), b"def");
        assert!(!last.has_trailing_newline());

        assert!(reader.next_line().unwrap().is_none());
        assert_eq!(reader.lines(), 2);
    }

    #[test]
    fn trailing_newline() {
        let mut reader = LineReader::new(Cursor::new(b"abc\n".to_vec()));
        assert_eq!(reader.next_line().unwrap().unwrap().as_bytes(), b"abc\n");
        assert!(reader.next_line().unwrap().is_none());
    }

    #[test]
    fn empty_stream() {
        let mut reader = LineReader::new(Cursor::new(Vec::new()));
        assert!(reader.next_line().unwrap().is_none());
        assert_eq!(reader.reads(), 1);
        assert_eq!(reader.state(), StashState::Empty);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut reader = LineReader::new(Cursor::new(b"x\n".to_vec()));
        assert!(reader.next_line().unwrap().is_some());
        for _ in 0..5 {
            assert!(reader.next_line().unwrap().is_none());
        }
        // no more reads once exhausted
        assert_eq!(reader.reads(), 2);
    }

    #[test]
    fn chunk_size_invariance() {
        let data = b"a\nb\nc\n";
        let expected = vec![b"a\n".to_vec(), b"b\n".to_vec(), b"c\n".to_vec()];
        assert_eq!(lines_of(data, 1), expected);
        assert_eq!(lines_of(data, 1000), expected);
    }

    #[test]
    fn empty_lines() {
        assert_eq!(
            lines_of(b"\n\nx\n\n", 3),
            vec![b"\n".to_vec(), b"\n".to_vec(), b"x\n".to_vec(), b"\n".to_vec()]
        );
    }

    #[test]
    fn reads_granularity() {
        let mut reader = LineReader::with_chunk_size(Cursor::new(b"abcdefgh\n".to_vec()), 2);
        assert!(reader.next_line().unwrap().is_some());
        // 4 full chunks plus "\n"
        assert_eq!(reader.reads(), 5);
        assert_eq!(reader.chunk_size(), 2);
    }

    #[test]
    fn state() {
        let mut reader = LineReader::with_chunk_size(Cursor::new(b"ab\ncd\nef".to_vec()), 8);
        assert_eq!(reader.state(), StashState::Empty);
        reader.next_line().unwrap();
        assert_eq!(reader.state(), StashState::HasLine);
        reader.next_line().unwrap();
        assert_eq!(reader.state(), StashState::Partial);
        reader.next_line().unwrap();
        assert_eq!(reader.state(), StashState::Empty);
    }

    #[test]
    fn zero_chunk_size() {
        let mut reader = LineReader::with_chunk_size(Cursor::new(b"abc\n".to_vec()), 0);
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind(), Some(AppCustomErrorKind::InvalidArgument));
        assert_eq!(reader.reads(), 0);
        assert_eq!(reader.into_inner().position(), 0);
    }

    #[test]
    fn read_error() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(Error::new(ErrorKind::Other, "broken"))
            }
        }

        let mut reader = LineReader::new(Broken);
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind(), Some(AppCustomErrorKind::ReadFailed));
        assert_eq!(reader.state(), StashState::Empty);

        // errors are not sticky
        let mut iter = LineReader::new(Broken);
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().unwrap().is_err());
    }

    #[test]
    fn from_settings() {
        let settings = Settings {
            chunk_size: 3,
            ..Settings::default()
        };
        let reader = LineReader::from_settings(Cursor::new(Vec::new()), &settings);
        assert_eq!(reader.chunk_size(), 3);
    }

    #[test]
    #[cfg(unix)]
    fn from_fd_negative() {
        let err = LineReader::from_fd(-1).err().unwrap();
        assert_eq!(err.kind(), Some(AppCustomErrorKind::InvalidArgument));
    }
}
