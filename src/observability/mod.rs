//! Structured logging setup.
//!
//! Library code only emits `tracing` spans and events; installing a subscriber
//! is left to the binary (or to an embedding application). The CLI calls
//! [`init_tracing`] once at startup, writing to stderr so stdout stays clean
//! for JSON output.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
