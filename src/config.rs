//! Run configuration
//!
//! There is no configuration file; everything comes from the single
//! command-line argument plus fixed copy behaviour.

use crate::{cli::Args, error::CopierError};

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Base64-encoded directive document
    pub payload: String,
    /// Recurse into subdirectories when copying
    pub copy_subdirs: bool,
    /// Create missing parent directories of a target
    pub create_parents: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payload: String::new(),
            copy_subdirs: true,
            create_parents: true,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, CopierError> {
        let payload = match args.payload.as_slice() {
            [payload] => payload.clone(),
            other => {
                return Err(CopierError::invocation(format!(
                    "expected exactly one argument (the base64-encoded directive document), got {}",
                    other.len()
                )));
            }
        };

        Ok(Self {
            payload,
            ..Self::default()
        })
    }
}
