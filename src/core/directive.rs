//! Copy directive parsing
//!
//! Extracts every `Copy` element from the directive document, at any depth,
//! in document order.

use crate::error::{CopierError, Result};
use roxmltree::{Document, Node};
use std::path::PathBuf;
use tracing::{debug, instrument};

const COPY_ELEMENT: &str = "Copy";
const ORIGIN_ATTR: &str = "originPath";
const TARGET_ATTR: &str = "targetPath";
const DELETE_ATTR: &str = "deleteTarget";

/// A single copy instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyDirective {
    /// Directory to copy from
    pub origin_path: PathBuf,
    /// Directory to copy into
    pub target_path: PathBuf,
    /// Whether the target directory is removed before copying
    pub delete_target: bool,
}

impl CopyDirective {
    fn from_node(doc: &Document<'_>, node: Node<'_, '_>) -> Result<Self> {
        let origin_path = required_attribute(doc, node, ORIGIN_ATTR)?;
        let target_path = required_attribute(doc, node, TARGET_ATTR)?;
        let delete_target = parse_delete_flag(required_attribute(doc, node, DELETE_ATTR)?);

        Ok(Self {
            origin_path: PathBuf::from(origin_path),
            target_path: PathBuf::from(target_path),
            delete_target,
        })
    }
}

fn required_attribute<'a>(doc: &Document<'_>, node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).ok_or_else(|| {
        let pos = doc.text_pos_at(node.range().start);
        CopierError::parse(format!(
            "{} element at {} is missing required attribute '{}'",
            COPY_ELEMENT, pos, name
        ))
    })
}

/// `Copy` elements outside any namespace; prefixed or default-namespaced
/// elements of the same local name are not directives.
fn is_copy_element(node: &Node<'_, '_>) -> bool {
    let name = node.tag_name();
    node.is_element() && name.namespace().is_none() && name.name() == COPY_ELEMENT
}

/// Only a case-insensitive "true" enables deletion; anything else is false.
fn parse_delete_flag(value: &str) -> bool {
    value.to_lowercase() == "true"
}

/// Parse the directive document into directives, in document order
#[instrument(skip(xml))]
pub fn parse_directives(xml: &str) -> Result<Vec<CopyDirective>> {
    let doc = Document::parse(xml)
        .map_err(|e| CopierError::parse_with("malformed XML", e))?;

    let directives = doc
        .descendants()
        .filter(is_copy_element)
        .map(|node| CopyDirective::from_node(&doc, node))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} copy directive(s)", directives.len());
    Ok(directives)
}
