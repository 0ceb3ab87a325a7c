//! # Pageframe Library
//!
//! This library exposes the Pageframe CLI modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::CliError;

// Re-export pageframe_core for convenience
pub use pageframe_core;
