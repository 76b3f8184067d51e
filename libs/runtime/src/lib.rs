//! Process-wide plumbing shared by every module: layered configuration
//! and logging setup.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LoggingConfig, Section};
pub use logging::init_logging_from_config;
