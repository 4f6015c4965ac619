use std::io::Write;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::Local;

use super::channel::Channel;
use super::config::LoggingConfig;

/// Set once; `true` when our backend became the global logger.
static INIT: OnceLock<bool> = OnceLock::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored and return
/// `Ok`. Intended usage is early in `main`. Fails only when a different
/// global logger was installed first, in which case the channel macros keep
/// writing to that logger.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let mut outcome: Result<(), log::SetLoggerError> = Ok(());

    INIT.get_or_init(|| match build(&config).try_init() {
        Ok(()) => {
            crate::core_trace!("logging initialized");
            true
        }
        Err(err) => {
            outcome = Err(err);
            false
        }
    });

    outcome.context("another global logger is already installed")
}

pub(crate) fn is_initialized() -> bool {
    INIT.get().copied().unwrap_or(false)
}

fn build(config: &LoggingConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(config.default_level);
    builder.filter(Some(Channel::Core.name()), config.core_level);
    builder.filter(Some(Channel::Client.name()), config.client_level);

    if let Some(filter) = &config.env_filter {
        builder.parse_filters(filter);
    }

    builder.write_style(config.write_style);
    builder.format(|buf, record| {
        let style = buf.default_level_style(record.level());
        writeln!(
            buf,
            "{style}[{}] {}: {}{style:#}",
            Local::now().format("%H:%M:%S"),
            label(record.target()),
            record.args()
        )
    });

    builder
}

/// Channel name for channel records, the raw target otherwise.
fn label(target: &str) -> &str {
    Channel::from_target(target)
        .map(Channel::name)
        .unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;
    use std::sync::{Arc, Mutex};

    use chrono::NaiveTime;
    use log::{Level, LevelFilter, Log as _, Metadata};

    use crate::logging::{Log, Logger};

    /// Shared in-memory sink for `Target::Pipe`.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(self.0.lock().unwrap().clone())
                .unwrap()
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    fn plain() -> LoggingConfig {
        LoggingConfig {
            write_style: env_logger::WriteStyle::Never,
            ..LoggingConfig::default()
        }
    }

    fn piped(config: &LoggingConfig) -> (env_logger::Logger, Capture) {
        let capture = Capture::default();
        let mut builder = build(config);
        builder.target(env_logger::Target::Pipe(Box::new(capture.clone())));
        (builder.build(), capture)
    }

    fn allows(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    /// Splits `[HH:MM:SS] rest` into the stamp and the rest.
    fn split_stamp(line: &str) -> (&str, &str) {
        let rest = line.strip_prefix('[').expect("line starts with a stamp");
        rest.split_once("] ").expect("stamp is closed")
    }

    // ── levels ────────────────────────────────────────────────────────────

    #[test]
    fn channels_default_to_trace_and_others_to_info() {
        let logger = build(&plain()).build();
        assert!(allows(&logger, "VERN", Level::Trace));
        assert!(allows(&logger, "APP", Level::Trace));
        assert!(allows(&logger, "wgpu_core::device", Level::Info));
        assert!(!allows(&logger, "wgpu_core::device", Level::Debug));
    }

    #[test]
    fn filter_directive_beats_channel_default() {
        let config = LoggingConfig {
            env_filter: Some("VERN=warn".to_string()),
            ..plain()
        };
        let logger = build(&config).build();
        assert!(!allows(&logger, "VERN", Level::Info));
        assert!(allows(&logger, "VERN", Level::Warn));
        assert!(allows(&logger, "APP", Level::Trace));
        assert!(!allows(&logger, "other", Level::Debug));
    }

    #[test]
    fn bare_filter_level_replaces_default() {
        let config = LoggingConfig {
            env_filter: Some("debug".to_string()),
            ..plain()
        };
        let logger = build(&config).build();
        assert!(allows(&logger, "other", Level::Debug));
        assert!(allows(&logger, "VERN", Level::Trace));
    }

    #[test]
    fn channel_levels_come_from_config() {
        let config = LoggingConfig {
            client_level: LevelFilter::Error,
            ..plain()
        };
        let logger = build(&config).build();
        assert!(!allows(&logger, "APP", Level::Warn));
        assert!(allows(&logger, "APP", Level::Error));
        assert!(allows(&logger, "VERN", Level::Trace));
    }

    #[test]
    fn handle_reports_enabled_levels() {
        let config = LoggingConfig {
            core_level: LevelFilter::Info,
            ..plain()
        };
        let logger = build(&config).build();
        assert!(Log::core().enabled_in(&logger, Level::Info));
        assert!(!Log::core().enabled_in(&logger, Level::Debug));
        assert!(Log::client().enabled_in(&logger, Level::Trace));
    }

    // ── line format ───────────────────────────────────────────────────────

    #[test]
    fn line_is_clock_name_message() {
        let (logger, capture) = piped(&plain());
        Log::core().log_to(&logger, Level::Warn, format_args!("Log Initialized!"));
        Log::client().log_to(&logger, Level::Info, format_args!("Hello {}!", "World"));

        let lines = capture.lines();
        assert_eq!(lines.len(), 2, "{lines:?}");

        let (stamp, rest) = split_stamp(&lines[0]);
        assert!(NaiveTime::parse_from_str(stamp, "%H:%M:%S").is_ok(), "{stamp}");
        assert_eq!(rest, "VERN: Log Initialized!");

        let (_, rest) = split_stamp(&lines[1]);
        assert_eq!(rest, "APP: Hello World!");
    }

    #[test]
    fn stamp_is_local_wall_clock() {
        let (logger, capture) = piped(&plain());
        let before = Local::now().time();
        Log::core().log_to(&logger, Level::Info, format_args!("tick"));
        let after = Local::now().time();

        let lines = capture.lines();
        let (stamp, _) = split_stamp(&lines[0]);
        let stamp = NaiveTime::parse_from_str(stamp, "%H:%M:%S").unwrap();
        let floor = |t: chrono::NaiveTime| t.format("%H:%M:%S").to_string();
        let stamp = floor(stamp);

        // Midnight rollover between the two reads leaves the window inverted.
        if before <= after {
            assert!(floor(before) <= stamp && stamp <= floor(after), "{stamp}");
        }
    }

    #[test]
    fn foreign_targets_keep_their_name() {
        let (logger, capture) = piped(&plain());
        logger.log(
            &log::Record::builder()
                .target("vern::entry")
                .level(Level::Info)
                .args(format_args!("hi"))
                .build(),
        );
        let lines = capture.lines();
        let (_, rest) = split_stamp(&lines[0]);
        assert_eq!(rest, "vern::entry: hi");
    }

    #[test]
    fn fatal_is_marked_error() {
        let (logger, capture) = piped(&plain());
        let handle = Logger::new(crate::logging::Channel::Client);
        handle.fatal_to(&logger, format_args!("out of {}", "memory"));

        let lines = capture.lines();
        let (_, rest) = split_stamp(&lines[0]);
        assert_eq!(rest, "APP: FATAL: out of memory");
    }

    #[test]
    fn fatal_passes_an_error_only_filter() {
        let config = LoggingConfig {
            env_filter: Some("VERN=error".to_string()),
            ..plain()
        };
        let (logger, capture) = piped(&config);
        Log::core().log_to(&logger, Level::Warn, format_args!("dropped"));
        Log::core().fatal_to(&logger, format_args!("kept"));

        let lines = capture.lines();
        assert_eq!(lines.len(), 1, "{lines:?}");
        assert!(lines[0].ends_with("VERN: FATAL: kept"), "{}", lines[0]);
    }

    #[test]
    fn label_names_channels() {
        assert_eq!(label("VERN"), "VERN");
        assert_eq!(label("APP"), "APP");
        assert_eq!(label("wgpu_core::device"), "wgpu_core::device");
    }

    // ── init ──────────────────────────────────────────────────────────────

    #[test]
    fn init_is_idempotent() {
        let first = init_logging(LoggingConfig::default());
        let second = init_logging(LoggingConfig::default());
        assert!(second.is_ok());
        assert_eq!(first.is_ok(), is_initialized());
        crate::core_info!("still alive after {} inits", 2);
    }
}
