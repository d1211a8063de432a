//! Utility modules for common functionality
//!
//! Provides the file system primitives the directive runner is built on.

pub mod fs;

pub use fs::{CopySummary, FileSystemUtils};
