//! Tunables shared by all readers. None of them changes which lines are returned, only
//! how the underlying stream is read.
use std::fs::read_to_string;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::fromstr;
use crate::misc::{
    error::{AppCustomErrorKind, AppError, AppResult},
    util::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_DESCRIPTORS},
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Maximum number of bytes requested by each read call.
    pub chunk_size: usize,

    /// Descriptors numbered from this value onwards are rejected by a descriptor table.
    pub max_descriptors: i32,
}

impl Settings {
    /// Loads settings from a YAML file. Missing keys keep their default value.
    pub fn from_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let yaml = read_to_string(path.as_ref())?;
        let settings: Settings = yaml.parse()?;
        debug!("loaded settings {:?} from {:?}", settings, path.as_ref());

        Ok(settings)
    }

    /// Checks values are usable.
    pub fn validate(&self) -> AppResult<()> {
        if self.chunk_size == 0 {
            return Err(AppError::new(
                AppCustomErrorKind::InvalidArgument,
                "chunk_size must be positive",
            ));
        }
        if self.max_descriptors <= 0 {
            return Err(AppError::new(
                AppCustomErrorKind::InvalidArgument,
                &format!("max_descriptors must be positive, got {}", self.max_descriptors),
            ));
        }
        Ok(())
    }
}

// Auto-implement FromStr, values are validated
fromstr!(Settings);

impl Default for Settings {
    fn default() -> Self {
        Settings {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_descriptors: DEFAULT_MAX_DESCRIPTORS,
        }
    }
}
