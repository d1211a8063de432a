//! Command-line argument parsing

use clap::Parser;

/// Template Copy - copies directory trees described by a base64-encoded XML document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "template-copy")]
pub struct Args {
    /// Base64-encoded XML containing `Copy` elements
    #[arg(value_name = "PAYLOAD", num_args = 0.., allow_hyphen_values = true)]
    pub payload: Vec<String>,
}

/// Parse command line arguments
///
/// The argument count is checked later so that a wrong count is reported
/// like every other failure.
pub fn parse_args() -> Result<Args, clap::Error> {
    Args::try_parse()
}
