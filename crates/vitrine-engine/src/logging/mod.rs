//! Logging initialization for the viewer binary.
//!
//! One `env_logger` setup with a render-loop-friendly default filter; the
//! rest of the workspace logs through the `log` facade only.

mod init;

pub use init::init_logging;
