//! Configuration for the CLI harness

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileSettingsConfig, FileStoreConfig};
pub use loader::ConfigLoader;
