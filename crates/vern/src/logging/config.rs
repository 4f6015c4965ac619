use log::LevelFilter;

/// Environment variable holding an `env_logger` filter for the engine.
pub const FILTER_ENV: &str = "VERN_LOG";
/// Environment variable selecting colour output: `auto`, `always` or `never`.
pub const STYLE_ENV: &str = "VERN_LOG_STYLE";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "VERN=debug,APP=trace"). Its directives are applied after the channel
/// levels, so a directive naming a channel wins.
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub core_level: LevelFilter,
    pub client_level: LevelFilter,
    /// Level for records outside the two channels (dependencies, module targets).
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            core_level: LevelFilter::Trace,
            client_level: LevelFilter::Trace,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Reads `VERN_LOG` (falling back to `RUST_LOG`) and `VERN_LOG_STYLE`.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let env_filter = var(FILTER_ENV)
            .or_else(|| var("RUST_LOG"))
            .filter(|f| !f.trim().is_empty());

        let write_style = var(STYLE_ENV)
            .map(|s| parse_write_style(&s))
            .unwrap_or(env_logger::WriteStyle::Auto);

        Self {
            env_filter,
            write_style,
            ..Self::default()
        }
    }
}

fn parse_write_style(value: &str) -> env_logger::WriteStyle {
    match value.trim().to_ascii_lowercase().as_str() {
        "always" => env_logger::WriteStyle::Always,
        "never" => env_logger::WriteStyle::Never,
        _ => env_logger::WriteStyle::Auto,
    }
}
