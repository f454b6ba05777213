//! Logging setup.
//!
//! Engine code logs through the `log` facade only; `init_logging` wires up
//! `env_logger` for binaries that want output.

mod init;

pub use init::{init_logging, LoggingConfig};
