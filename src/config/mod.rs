//! Configuration management for catbot.
//!
//! This module handles loading and saving configuration from `~/.catbot/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, StorageConfig};
