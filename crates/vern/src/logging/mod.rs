//! Logging utilities.
//!
//! Two named channels sit on top of the `log` facade: `VERN` for engine
//! internals and `APP` for client code. Both are plain `log` targets, so any
//! backend can consume them; `Log::init` installs the `env_logger` backend
//! with the engine's line format.
//!
//! ```rust,ignore
//! vern::Log::init(vern::LoggingConfig::from_env())?;
//! vern::core_warn!("Log Initialized!");
//! vern::info!("Hello {}!", "World");
//! ```

mod channel;
mod config;
mod init;
mod macros;

pub use channel::{Channel, Log, Logger, CLIENT_TARGET, CORE_TARGET, FATAL_MARKER};
pub use config::{LoggingConfig, FILTER_ENV, STYLE_ENV};
pub use init::init_logging;
