//! Outer markup of a single element.
//!
//! The element is moved into a throwaway `<fake>` container, the container's
//! inner markup is taken from [`Document::inner_markup`], and the end tags
//! that primitive emits for void elements are stripped from the text. The
//! element is then put back exactly where it was.

use indextree::NodeId;

use crate::dom::{Document, Placement};
use crate::error::OuterHtmlError;

/// Tag name of the temporary container used for serialization.
pub(crate) const PLACEHOLDER_TAG: &str = "fake";

/// Elements that never have content or an end tag.
pub const VOID_TAGS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Check if a tag is a void element. Case-sensitive, like the stripping pass.
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Remove every literal `</tag>` for each void tag, in [`VOID_TAGS`] order.
///
/// Purely textual: a `</img>` inside raw text content goes too.
pub fn strip_void_end_tags(code: &str) -> String {
    let mut code = code.to_string();
    for tag in VOID_TAGS {
        let pattern = format!("</{tag}>");
        if code.contains(&pattern) {
            code = code.replace(&pattern, "");
        }
    }
    code
}

/// Serialize `id` and its subtree without indentation.
///
/// The tree is left as it was found.
pub fn serialize_element(doc: &mut Document, id: NodeId) -> Result<String, OuterHtmlError> {
    doc.element(id)?;

    let placement = Placement::of(doc, id);
    let fake = doc.create_element(PLACEHOLDER_TAG);
    doc.append(fake, id);

    let code = doc.inner_markup(fake);

    placement.restore(doc, id);
    fake.remove(&mut doc.arena);

    let code = strip_void_end_tags(&code);
    debug!("serialized {:?} to {} bytes", id, code.len());
    Ok(code)
}
