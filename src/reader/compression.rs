//! Manage different types of compression for an input file
use std::fs::File;
use std::io::Read;
use std::path::Path;

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use log::debug;
use xz2::read::XzDecoder;

use crate::misc::error::AppResult;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CompressionScheme {
    Gzip,
    Bzip2,
    Xz,
    Uncompressed,
}

impl CompressionScheme {
    /// True if not compressed
    #[inline(always)]
    pub fn is_compressed(&self) -> bool {
        self != &CompressionScheme::Uncompressed
    }

    /// Guess the compression from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let extension = path
            .as_ref()
            .extension()
            .map(|x| x.to_string_lossy().to_string());
        CompressionScheme::from(extension.as_deref())
    }

    /// Opens `path` and returns a stream of decompressed bytes. No buffering is added: bytes
    /// are pulled as the caller reads them.
    pub fn reader<P: AsRef<Path>>(&self, path: P) -> AppResult<Box<dyn Read>> {
        // open target file
        let file = File::open(path.as_ref())?;
        debug!("opened {:?}, compression={:?}", path.as_ref(), self);

        // create a specific reader for each compression scheme
        match self {
            CompressionScheme::Gzip => Ok(Box::new(GzDecoder::new(file))),
            CompressionScheme::Bzip2 => Ok(Box::new(BzDecoder::new(file))),
            CompressionScheme::Xz => Ok(Box::new(XzDecoder::new(file))),
            CompressionScheme::Uncompressed => Ok(Box::new(file)),
        }
    }
}

/// Conversion from a file extension.
impl From<Option<&str>> for CompressionScheme {
    fn from(ext: Option<&str>) -> Self {
        match ext {
            Some("gz") => CompressionScheme::Gzip,
            Some("bz2") => CompressionScheme::Bzip2,
            Some("xz") => CompressionScheme::Xz,
            _ => CompressionScheme::Uncompressed,
        }
    }
}
