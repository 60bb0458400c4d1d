//! Options for the outer-markup entry points.

use facet::Facet;

use crate::error::OuterHtmlError;

/// Options for [`outer_html`](crate::outer_html).
#[derive(Facet, Clone, Debug, Default, PartialEq, Eq)]
#[facet(default)]
pub struct OuterHtmlOptions {
    /// Indent the hierarchy with `\r\n` and one tab per level (default: false).
    ///
    /// This inserts whitespace text nodes into the tree, and they stay there.
    #[facet(default)]
    pub indent: bool,
}

impl OuterHtmlOptions {
    /// Create new default options (flat output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable indentation.
    pub fn indent(mut self) -> Self {
        self.indent = true;
        self
    }

    /// Parse options from a JSON object, merged over the defaults.
    ///
    /// Missing keys keep their default; unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, OuterHtmlError> {
        facet_json::from_str(json).map_err(|e| OuterHtmlError::InvalidOptions {
            message: e.to_string(),
        })
    }
}
