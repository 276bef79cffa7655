//! Logging utilities.
//!
//! Centralizes logger initialization for the tutorial binaries. Everything else
//! logs through the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
