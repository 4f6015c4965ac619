//! Program entry point.
//!
//! The engine owns process startup and shutdown; the client only supplies a
//! factory for its [`Application`]:
//!
//! ```rust,ignore
//! struct Sandbox;
//! impl vern::Application for Sandbox {}
//!
//! fn create_application() -> Sandbox {
//!     Sandbox
//! }
//!
//! vern::entry_point!(create_application);
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::core::Application;
use crate::logging::{Log, LoggingConfig};

/// Runs the full bootstrap sequence and reports failures as a result.
///
/// Order: logging, greeting on both channels, construction, `run`, teardown.
/// The application is dropped before this returns, whether `run` succeeded
/// or not.
pub fn try_run<A, F>(create: F) -> Result<()>
where
    A: Application,
    F: FnOnce() -> A,
{
    if let Err(err) = Log::init(LoggingConfig::from_env()) {
        eprintln!("vern: {err:#}");
    }

    announce(log::logger());

    let mut app = create();
    let name = app.name().to_owned();
    crate::core_info!("running '{name}' on {}", crate::CURRENT_PLATFORM);

    let result = app
        .run()
        .with_context(|| format!("application '{name}' failed"));

    drop(app);
    crate::core_info!("'{name}' shut down");

    result
}

/// Greets on both channels once logging is up.
fn announce(sink: &dyn log::Log) {
    Log::core().log_to(sink, log::Level::Warn, format_args!("Log Initialized!"));
    Log::client().log_to(sink, log::Level::Info, format_args!("Hello World!"));
}

/// Process-level wrapper around [`try_run`] suitable as the body of `main`.
pub fn run<A, F>(create: F) -> ExitCode
where
    A: Application,
    F: FnOnce() -> A,
{
    match try_run(create) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            crate::core_fatal!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Generates `fn main` for a client crate from its application factory.
///
/// The factory is any path or expression callable as `FnOnce() -> A` where
/// `A: Application`.
#[macro_export]
macro_rules! entry_point {
    ($create:expr $(,)?) => {
        fn main() -> ::std::process::ExitCode {
            $crate::entry::run($create)
        }
    };
}
