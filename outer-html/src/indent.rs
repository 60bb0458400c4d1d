//! Tab indentation by depth.
//!
//! Every element below the root, then the root itself, gets a `\r\n` plus
//! one tab per ancestor element inserted before it. Elements with child
//! elements also get the same string appended as their last child, which
//! puts their end tag on its own line. All inserted nodes are text nodes, so
//! child element counts do not change while the pass runs.
//!
//! The whitespace stays in the tree afterwards.

use indextree::NodeId;

use crate::dom::Document;
use crate::error::OuterHtmlError;
use crate::serialize::serialize_element;
use crate::tree_dump::TreeDump;

/// Tag name of the transient container wrapped around each element.
pub(crate) const INDENT_MARKER_TAG: &str = "indent";

const NEWLINE: &str = "\r\n";

/// Whitespace placed around one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentValues {
    /// Inserted as a text node right before the element.
    pub before: String,
    /// Appended inside the element; empty for elements without child elements.
    pub after: String,
}

impl IndentValues {
    /// Whitespace for an element `depth` elements deep.
    pub fn new(depth: usize, has_children: bool) -> Self {
        let before = format!("{NEWLINE}{}", "\t".repeat(depth));
        let after = if has_children {
            before.clone()
        } else {
            String::new()
        };
        IndentValues { before, after }
    }
}

/// Indent `root` and all of its descendants, then serialize it.
///
/// The returned markup starts with the root's own leading whitespace.
pub fn indent_and_serialize(doc: &mut Document, root: NodeId) -> Result<String, OuterHtmlError> {
    doc.element(root)?;

    let descendants = doc.descendant_elements(root);
    debug!(
        "indenting {} descendants of {:?}\n{}",
        descendants.len(),
        root,
        TreeDump::new(doc, root)
    );

    for child in descendants {
        indent_element(doc, child)?;
    }
    let values = indent_element(doc, root)?;

    trace!("after indent:\n{}", TreeDump::new(doc, root));

    let code = serialize_element(doc, root)?;
    Ok(values.before + &code)
}

/// Insert the indentation whitespace around a single element.
///
/// A parentless element has nowhere to put its `before` text, so only the
/// `after` text is inserted; the values are returned either way.
pub fn indent_element(doc: &mut Document, id: NodeId) -> Result<IndentValues, OuterHtmlError> {
    doc.element(id)?;

    let depth = doc.ancestor_count(id);
    let attached = doc.parent(id).is_some();

    doc.with_wrapper(id, INDENT_MARKER_TAG, |doc, _marker| {
        let values = IndentValues::new(depth, doc.child_element_count(id) > 0);
        if attached {
            doc.insert_text_before(id, &values.before);
        }
        if !values.after.is_empty() {
            doc.append_text(id, &values.after);
        }
        Ok(values)
    })
}
