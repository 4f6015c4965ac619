//! Core engine-facing contracts.
//!
//! This module defines the interface between the entry point and client
//! code. A client constructs its application however it likes, the engine
//! only ever sees it through [`Application`].

mod app;

pub use app::Application;
