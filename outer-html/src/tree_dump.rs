//! Tree pretty-printing for debugging.

use indextree::NodeId;

use crate::dom::{Document, NodeKind};

/// Extract short node label like "n1" from NodeId debug output.
fn node_id_short(node_id: NodeId) -> String {
    let debug = format!("{:?}", node_id);
    let Some(start) = debug.find("index1: ") else {
        return debug;
    };
    let digits = &debug[start + "index1: ".len()..];
    let value: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if value.is_empty() {
        debug
    } else {
        format!("n{}", value)
    }
}

/// Displays the subtree under a node, one node per line.
///
/// Whitespace in text nodes is shown escaped, so inserted indentation is
/// visible.
pub struct TreeDump<'a> {
    doc: &'a Document,
    root: NodeId,
}

impl<'a> TreeDump<'a> {
    pub fn new(doc: &'a Document, root: NodeId) -> Self {
        TreeDump { doc, root }
    }

    fn fmt_node(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        node: NodeId,
        depth: usize,
    ) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        let prefix = format!("{indent}[{}] ", node_id_short(node));

        match &self.doc.get(node).kind {
            NodeKind::Document => {
                writeln!(f, "{prefix}#document")?;
            }
            NodeKind::Element(elem) => {
                write!(f, "{prefix}<{}", elem.tag.as_ref())?;
                for (name, value) in &elem.attrs {
                    write!(f, " {}={:?}", name, value.as_ref())?;
                }
                writeln!(f, ">")?;
            }
            NodeKind::Text(text) => {
                writeln!(f, "{prefix}TEXT: {:?}", text.as_ref())?;
            }
            NodeKind::Comment(text) => {
                writeln!(f, "{prefix}COMMENT: {:?}", text.as_ref())?;
            }
        }
        for child in node.children(&self.doc.arena) {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_node(f, self.root, 0)
    }
}

impl Document {
    /// Debug view of the subtree under `id`.
    pub fn dump(&self, id: NodeId) -> TreeDump<'_> {
        TreeDump::new(self, id)
    }
}
