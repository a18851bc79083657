//! Error management, constants and helper macros shared by the whole crate.
#[macro_use]
pub mod error;
pub mod macros;
pub mod util;
