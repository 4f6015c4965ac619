//! Platform detection.
//!
//! The supported set is fixed at compile time; building for anything else
//! is a hard error rather than a runtime surprise.

mod detect;

pub use detect::{Platform, CURRENT_PLATFORM};
