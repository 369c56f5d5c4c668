//! Core utilities and types for the barista Java source generator.
//!
//! This crate provides the file-writing primitives and naming helpers
//! used across the barista workspace.

mod file;
mod source;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult, write_file};
// Compiled output
pub use source::SourceUnit;
// String utilities
pub use utils::{lower_first, package_to_path, to_pascal_case};
