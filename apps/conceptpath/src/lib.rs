//! # conceptpath Library
//!
//! Exposes the CLI commands for testing and integration.
//!
//! The binary uses these through the `main.rs` entry point.

pub mod cli;

// Re-export conceptpath_core for convenience
pub use conceptpath_core;
