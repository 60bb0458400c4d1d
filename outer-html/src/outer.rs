//! Entry points: outer markup of an element, flat or indented.

use indextree::NodeId;

use crate::dom::Document;
use crate::error::OuterHtmlError;
use crate::indent::indent_and_serialize;
use crate::options::OuterHtmlOptions;
use crate::serialize::serialize_element;

/// Outer markup of `id`: its own tags, attributes, and everything inside.
///
/// `None` options are the defaults. With `indent` set, the indentation
/// whitespace is inserted into `doc` as text nodes and is NOT removed
/// afterwards; use [`outer_html_preserving`] to leave the tree untouched.
///
/// # Errors
///
/// Fails with an invalid-argument error when `id` is not a live element of
/// `doc`.
pub fn outer_html(
    doc: &mut Document,
    id: NodeId,
    options: Option<&OuterHtmlOptions>,
) -> Result<String, OuterHtmlError> {
    let settings = options.cloned().unwrap_or_default();
    if settings.indent {
        indent_and_serialize(doc, id)
    } else {
        serialize_element(doc, id)
    }
}

/// Like [`outer_html`], but runs on a copy so `doc` is never modified.
pub fn outer_html_preserving(
    doc: &Document,
    id: NodeId,
    options: &OuterHtmlOptions,
) -> Result<String, OuterHtmlError> {
    doc.element(id)?;
    let mut scratch = doc.clone();
    outer_html(&mut scratch, id, Some(options))
}

impl Document {
    /// Outer markup of `id`; see [`outer_html`].
    pub fn outer_html(
        &mut self,
        id: NodeId,
        options: &OuterHtmlOptions,
    ) -> Result<String, OuterHtmlError> {
        outer_html(self, id, Some(options))
    }

    /// Flat outer markup of `id` with default options.
    pub fn to_html(&mut self, id: NodeId) -> Result<String, OuterHtmlError> {
        outer_html(self, id, None)
    }

    /// Indented outer markup of `id`. Leaves the whitespace in the tree.
    pub fn to_html_indented(&mut self, id: NodeId) -> Result<String, OuterHtmlError> {
        outer_html(self, id, Some(&OuterHtmlOptions::new().indent()))
    }
}
