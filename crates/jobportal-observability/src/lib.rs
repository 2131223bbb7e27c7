//! JobPortal Observability
//!
//! Console logging for the JobPortal binaries. All crates log through the
//! `tracing` macros; this crate installs the subscriber that prints them.
//!
//! # Examples
//!
//! ```no_run
//! use jobportal_observability::init_basic_console_logging;
//!
//! init_basic_console_logging();
//! tracing::info!("ready");
//! ```

pub mod basic_logging;

pub use basic_logging::{LogFormat, init_basic_console_logging};
