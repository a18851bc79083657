//! All structures involved in error management. It combines the Rust standard library
//! error types, used crates error types and a specific one to the application.
use std::collections::TryReserveError;
use std::io::ErrorKind;
use std::{fmt, io, num};

/// Error kind specific to an application error, different from standard errors.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppCustomErrorKind {
    /// Negative or out of bounds descriptor, or zero chunk size.
    InvalidArgument,
    /// Growing a buffer failed.
    AllocationFailure,
    /// The underlying read call reported an error.
    ReadFailed,
    /// A compressed file was given where a raw descriptor is needed.
    UnsupportedCompression,
}

/// A specific error type combining all possible error types in the app.
#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    Parse(num::ParseIntError),
    Yaml(serde_yaml::Error),
    App {
        err: AppCustomErrorKind,
        msg: String,
    },
}

/// Shortcut for all results returned by the crate.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// A simple and convenient creation of a new application error
    pub fn new(err: AppCustomErrorKind, msg: &str) -> Self {
        AppError::App {
            err,
            msg: msg.to_string(),
        }
    }

    /// Returns the custom error kind if any
    pub fn kind(&self) -> Option<AppCustomErrorKind> {
        match self {
            AppError::App { err, .. } => Some(*err),
            _ => None,
        }
    }

    /// Returns the IO error kind branch if any
    pub fn get_ioerror(&self) -> Option<ErrorKind> {
        match self {
            AppError::Io(io_error) => Some(io_error.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AppError::Io(ref err) => err.fmt(f),
            AppError::Parse(ref err) => err.fmt(f),
            AppError::Yaml(ref err) => err.fmt(f),
            AppError::App { ref err, ref msg } => write!(f, "{:?}: {}", err, msg),
        }
    }
}

impl std::error::Error for AppError {}

/// To simplify definition of all error conversions.
macro_rules! from_error {
    ($e:path, $f:path) => {
        impl From<$e> for AppError {
            fn from(err: $e) -> AppError {
                $f(err)
            }
        }
    };
}

from_error!(io::Error, AppError::Io);
from_error!(num::ParseIntError, AppError::Parse);
from_error!(serde_yaml::Error, AppError::Yaml);

impl From<TryReserveError> for AppError {
    fn from(err: TryReserveError) -> AppError {
        AppError::new(
            AppCustomErrorKind::AllocationFailure,
            &format!("unable to grow buffer: {}", err),
        )
    }
}
