//! Raw descriptor access. `Fd` doesn't own the descriptor: it is never closed here.
use std::io::{self, Read};
use std::os::unix::io::RawFd;

use crate::misc::error::{AppCustomErrorKind, AppError, AppResult};

/// A borrowed, readable descriptor number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fd(RawFd);

impl Fd {
    /// Negative values are rejected.
    pub fn new(fd: RawFd) -> AppResult<Self> {
        if fd < 0 {
            return Err(AppError::new(
                AppCustomErrorKind::InvalidArgument,
                &format!("invalid descriptor {}", fd),
            ));
        }
        Ok(Fd(fd))
    }

    #[inline(always)]
    pub fn raw(&self) -> RawFd {
        self.0
    }
}

impl Read for Fd {
    /// A single read(2) call, no retry on EINTR.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let ret = unsafe { libc::read(self.0, buf.as_mut_ptr() as *mut libc::c_void, buf.len()) };
        if ret < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(ret as usize)
        }
    }
}
