mod channel_config;
mod config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use channel_config::ChannelConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "FX_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_CONFIG_DIR: &str = ".fx";

const DEFAULT_CHANNEL_NAME: &str = "fluxChannel";
const DEFAULT_MAX_SUBSCRIBERS: usize = 1024;
const MIN_MAX_SUBSCRIBERS: usize = 1;
const MAX_MAX_SUBSCRIBERS: usize = 65536;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
