//! Errors returned by the outer-markup entry points.

use facet::Facet;

/// Errors that can occur while serializing or indenting an element.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum OuterHtmlError {
    /// node {node} does not belong to this document
    UnknownNode { node: String },

    /// node {node} was removed from the document
    RemovedNode { node: String },

    /// node {node} is a {kind} node, not an element
    NotAnElement { node: String, kind: String },

    /// invalid options: {message}
    InvalidOptions { message: String },
}

impl OuterHtmlError {
    /// Whether this error was caused by a bad element handle.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            OuterHtmlError::UnknownNode { .. }
                | OuterHtmlError::RemovedNode { .. }
                | OuterHtmlError::NotAnElement { .. }
        )
    }
}
