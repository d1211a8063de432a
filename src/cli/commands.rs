//! Command implementation for the CLI

use crate::{
    config::Config,
    core::{DirectiveRunner, decode_payload, parse_directives},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Decode the payload, parse the directives and execute them in order.
///
/// The first failing directive aborts the run; earlier directives are not
/// rolled back.
#[instrument(skip(config))]
pub fn execute(config: &Config) -> anyhow::Result<()> {
    let xml = decode_payload(&config.payload)?;
    let directives = parse_directives(&xml)?;

    info!("Executing {} copy directive(s)", directives.len());

    let runner = DirectiveRunner::new(config.clone());
    let total = directives.len();
    for (index, directive) in directives.iter().enumerate() {
        runner.execute(directive).with_context(|| {
            format!(
                "Directive {} of {} failed ({} -> {})",
                index + 1,
                total,
                directive.origin_path.display(),
                directive.target_path.display()
            )
        })?;
    }

    info!("All copy directives completed successfully");
    Ok(())
}
