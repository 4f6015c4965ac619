//! Vern engine crate.
//!
//! This crate owns the process bootstrap: platform detection, the two
//! logging channels, the `Application` contract and the entry point that
//! ties them together. Client programs implement [`Application`] and hand a
//! factory to [`entry_point!`].

pub mod platform;
pub mod logging;
pub mod core;
pub mod entry;

pub use crate::core::Application;
pub use entry::{run, try_run};
pub use logging::{Channel, Log, Logger, LoggingConfig};
pub use platform::{Platform, CURRENT_PLATFORM};

#[doc(hidden)]
pub mod __private {
    pub use log;
}
