//! Outer markup of an element in an arena DOM, with optional indentation.
//!
//! outer-html provides:
//! - **Arena DOM**: an indextree-backed tree, built by hand or parsed with html5ever
//! - **Serialization**: an element's outer markup, void elements without end tags
//! - **Indentation**: `\r\n` plus one tab per ancestor element around every element
//!
//! # Example
//!
//! ```rust
//! use outer_html::{OuterHtmlOptions, outer_html, parse_fragment};
//!
//! let mut doc = parse_fragment("<div><span>hi</span><br></div>");
//! let div = doc.top_level_elements()[0];
//!
//! let flat = outer_html(&mut doc, div, None).unwrap();
//! assert_eq!(flat, "<div><span>hi</span><br></div>");
//!
//! let opts = OuterHtmlOptions::new().indent();
//! let pretty = outer_html(&mut doc, div, Some(&opts)).unwrap();
//! assert_eq!(pretty, "\r\n<div>\r\n\t<span>hi</span>\r\n\t<br>\r\n</div>");
//! ```

#[macro_use]
mod tracing_macros;

pub mod dom;
mod error;
pub mod indent;
mod markup;
mod options;
mod outer;
mod parser;
pub mod serialize;
mod tree_dump;

pub use dom::{Document, ElementData, Namespace, NodeData, NodeKind};
pub use error::OuterHtmlError;
pub use indextree::NodeId;
pub use options::OuterHtmlOptions;
pub use outer::{outer_html, outer_html_preserving};
pub use parser::{parse, parse_fragment};
pub use serialize::{VOID_TAGS, is_void_tag, strip_void_end_tags};
pub use tree_dump::TreeDump;
