//! # Template Copy
//!
//! Copies directory trees according to a list of `Copy` directives carried
//! in a base64-encoded XML document.
//!
//! ## Features
//!
//! - Base64 + UTF-8 payload decoding
//! - Document-wide `Copy` element discovery, in document order
//! - Optional deletion of the target before copying
//! - Recursive copy that never overwrites an existing file
//!
//! ## Example
//!
//! ```no_run
//! use template_copy::{config::Config, core::{DirectiveRunner, parse_directives}};
//!
//! let directives = parse_directives(
//!     r#"<Templates><Copy originPath="templates" targetPath="out" deleteTarget="true"/></Templates>"#,
//! )?;
//! let runner = DirectiveRunner::new(Config::default());
//! for directive in &directives {
//!     runner.execute(directive)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Exit status for any failure
pub const FAILURE_EXIT_CODE: u8 = 255;

/// Environment variable holding an `EnvFilter` directive for diagnostics
pub const LOG_ENV: &str = "TEMPLATE_COPY_LOG";

/// Initialize logging on stderr, quiet unless `TEMPLATE_COPY_LOG` says otherwise
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
