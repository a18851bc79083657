//! Reader configuration, loaded from a YAML file or built from defaults.
pub mod settings;
