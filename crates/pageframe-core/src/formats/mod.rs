//! # Formats Module
//!
//! Serialization formats consumed by the Pageframe core.
//!
//! This module contains:
//! - The discovery manifest (JSON list of view modules + root layout)
//!
//! Note: File I/O operations remain in the app layer (apps/pageframe).
//! This module only handles format conversion (pure transformations).

mod manifest;

pub use manifest::*;
