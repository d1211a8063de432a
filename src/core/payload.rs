//! Payload decoding
//!
//! The directive document arrives as a single base64 argument holding UTF-8
//! encoded XML.

use crate::error::{CopierError, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, instrument};

const UTF8_BOM: char = '\u{feff}';

/// Decode a base64 payload into the XML text it carries.
///
/// ASCII whitespace anywhere in the payload is ignored. A leading byte-order
/// mark is dropped from the decoded text.
#[instrument(skip(encoded), fields(len = encoded.len()))]
pub fn decode_payload(encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| CopierError::decoding("invalid base64 payload", e))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| CopierError::decoding("payload is not valid UTF-8", e))?;

    debug!("Decoded payload into {} bytes of text", text.len());

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}
