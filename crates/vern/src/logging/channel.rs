use std::fmt;

use anyhow::Result;
use log::{Level, Metadata, Record};

use super::config::LoggingConfig;
use super::init;

/// `log` target of the engine channel.
pub const CORE_TARGET: &str = "VERN";
/// `log` target of the client channel.
pub const CLIENT_TARGET: &str = "APP";

/// Prefix carried by fatal records.
pub const FATAL_MARKER: &str = "FATAL: ";

/// Named logging channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    /// Engine-internal messages.
    Core,
    /// Messages emitted by the client application.
    Client,
}

impl Channel {
    /// Channel name; doubles as the `log` target.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Core => CORE_TARGET,
            Channel::Client => CLIENT_TARGET,
        }
    }

    /// Maps a record target back to its channel, if it belongs to one.
    pub fn from_target(target: &str) -> Option<Self> {
        match target {
            CORE_TARGET => Some(Channel::Core),
            CLIENT_TARGET => Some(Channel::Client),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle bound to one channel.
///
/// The `core_*!` and client macros are the usual way in; the handle exists
/// for code that wants to pass a channel around as a value.
#[derive(Debug, Clone)]
pub struct Logger {
    channel: Channel,
}

impl Logger {
    pub const fn new(channel: Channel) -> Self {
        Self { channel }
    }

    pub fn name(&self) -> &'static str {
        self.channel.name()
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Returns true if a record at `level` would be emitted on this channel.
    pub fn enabled(&self, level: Level) -> bool {
        level <= log::max_level() && self.enabled_in(log::logger(), level)
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if level <= log::max_level() {
            self.log_to(log::logger(), level, args);
        }
    }

    pub(crate) fn enabled_in(&self, sink: &dyn log::Log, level: Level) -> bool {
        sink.enabled(&Metadata::builder().target(self.name()).level(level).build())
    }

    pub(crate) fn log_to(&self, sink: &dyn log::Log, level: Level, args: fmt::Arguments<'_>) {
        sink.log(
            &Record::builder()
                .target(self.name())
                .level(level)
                .args(args)
                .build(),
        );
    }

    pub(crate) fn fatal_to(&self, sink: &dyn log::Log, args: fmt::Arguments<'_>) {
        self.log_to(sink, Level::Error, format_args!("{FATAL_MARKER}{args}"));
    }

    #[inline]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    #[inline]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[inline]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    #[inline]
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    #[inline]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    /// `log` has nothing above `Error`, so fatal records carry a marker.
    #[inline]
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        if Level::Error <= log::max_level() {
            self.fatal_to(log::logger(), args);
        }
    }
}

static CORE_LOGGER: Logger = Logger::new(Channel::Core);
static CLIENT_LOGGER: Logger = Logger::new(Channel::Client);

/// Process-wide holder for the two channel handles.
pub struct Log;

impl Log {
    /// Installs the global logger. Later calls are no-ops.
    pub fn init(config: LoggingConfig) -> Result<()> {
        init::init_logging(config)
    }

    /// True once `init` has installed the engine's backend.
    pub fn is_initialized() -> bool {
        init::is_initialized()
    }

    pub fn core() -> &'static Logger {
        &CORE_LOGGER
    }

    pub fn client() -> &'static Logger {
        &CLIENT_LOGGER
    }

    pub fn get(channel: Channel) -> &'static Logger {
        match channel {
            Channel::Core => Self::core(),
            Channel::Client => Self::client(),
        }
    }
}
