// Rust guideline compliant 2026-10-16

//! Scanmerge command-line support.
//!
//! The binary is a thin shell: [`driver`] wires file I/O around the pure
//! merge in `scanmerge-core`, and [`logging`] sets up tracing output.

pub mod driver;
pub mod logging;

pub use driver::run_merge;
pub use logging::{init_logging, LogOptions, LoggingError};
