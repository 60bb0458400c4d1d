//! Flattening a subtree to markup.
//!
//! This is the host primitive the serializer builds on. It is deliberately
//! tag-agnostic: every element gets an end tag, void elements included, so
//! `<br>` comes out as `<br></br>`. Cleaning that up is the caller's job.
//!
//! - Text content is escaped (`&`, `<`, `>`)
//! - Attribute values are escaped and double-quoted
//! - Raw text elements (script, style) are written verbatim

use indextree::NodeId;

use crate::dom::{Document, ElementData, NodeKind};

/// Raw text elements - content is not escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

impl Document {
    /// Markup of all children of `id`, concatenated, excluding `id`'s own tags.
    pub fn inner_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        let raw = match &self.get(id).kind {
            NodeKind::Element(elem) => is_raw_text_element(&elem.tag),
            _ => false,
        };
        for child_id in id.children(&self.arena) {
            self.write_node(&mut out, child_id, raw);
        }
        out
    }

    fn write_node(&self, out: &mut String, node_id: NodeId, raw_text: bool) {
        match &self.get(node_id).kind {
            NodeKind::Document => {
                for child_id in node_id.children(&self.arena) {
                    self.write_node(out, child_id, false);
                }
            }
            NodeKind::Element(elem) => {
                self.write_element(out, node_id, elem);
            }
            NodeKind::Text(text) if raw_text => out.push_str(text),
            NodeKind::Text(text) => write_text_escaped(out, text),
            NodeKind::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
        }
    }

    fn write_element(&self, out: &mut String, node_id: NodeId, elem: &ElementData) {
        let tag = elem.tag.as_ref();

        out.push('<');
        out.push_str(tag);
        for (name, value) in &elem.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            write_attr_value_escaped(out, value);
            out.push('"');
        }
        out.push('>');

        let raw = is_raw_text_element(tag);
        for child_id in node_id.children(&self.arena) {
            self.write_node(out, child_id, raw);
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
}

fn write_text_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn write_attr_value_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
