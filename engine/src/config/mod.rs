mod config_manager;
mod config_source;
mod validate;

pub use config_manager::ConfigManager;
pub use config_source::{ConfigSource, FileConfigSource};
pub use validate::Validate;
