//! Core functionality for template copying
//!
//! Contains the logic for decoding the payload, parsing copy directives,
//! and executing them.

pub mod directive;
pub mod payload;
pub mod runner;

pub use directive::{CopyDirective, parse_directives};
pub use payload::decode_payload;
pub use runner::DirectiveRunner;
