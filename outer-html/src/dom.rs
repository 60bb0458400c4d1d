//! Arena-based DOM that the serializer and indenter operate on.
//!
//! This is the host tree: element handles are [`NodeId`]s into an
//! [`indextree::Arena`], and every structural query or edit the core needs
//! (ancestor counts, child elements, wrap/unwrap, text insertion) lives here.

use indexmap::IndexMap;
use indextree::{Arena, NodeId};
use tendril::StrTendril;

use crate::error::OuterHtmlError;

/// Document = Arena + the invisible document node at the top.
#[derive(Debug, Clone)]
pub struct Document {
    /// THE tree - all nodes live here
    pub arena: Arena<NodeData>,

    /// Document node. Never an element, so it does not count towards depth.
    pub document: NodeId,

    /// DOCTYPE if present (usually "html")
    pub doctype: Option<StrTendril>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only the document node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let document = arena.new_node(NodeData {
            kind: NodeKind::Document,
            ns: Namespace::Html,
        });
        Document {
            arena,
            document,
            doctype: None,
        }
    }

    /// Get immutable reference to node data
    pub fn get(&self, id: NodeId) -> &NodeData {
        self.arena[id].get()
    }

    /// Get mutable reference to node data
    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.arena[id].get_mut()
    }

    /// Resolve a handle to its element data, rejecting handles that do not
    /// name a live element of this document.
    pub fn element(&self, id: NodeId) -> Result<&ElementData, OuterHtmlError> {
        let node = self.arena.get(id).ok_or_else(|| OuterHtmlError::UnknownNode {
            node: format!("{id:?}"),
        })?;
        // A freed slot may already hold a newer node; the stamp tells them apart
        if node.is_removed() || id.is_removed(&self.arena) {
            return Err(OuterHtmlError::RemovedNode {
                node: format!("{id:?}"),
            });
        }
        match &node.get().kind {
            NodeKind::Element(elem) => Ok(elem),
            other => Err(OuterHtmlError::NotAnElement {
                node: format!("{id:?}"),
                kind: other.name().to_string(),
            }),
        }
    }

    // -------------------------------------------------------------------------
    // Building
    // -------------------------------------------------------------------------

    /// Create a parentless HTML element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.new_node(NodeData {
            kind: NodeKind::Element(ElementData {
                tag: StrTendril::from(tag),
                attrs: IndexMap::new(),
            }),
            ns: Namespace::Html,
        })
    }

    /// Create a parentless text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.arena.new_node(NodeData {
            kind: NodeKind::Text(StrTendril::from(text)),
            ns: Namespace::Html,
        })
    }

    /// Set an attribute on an element, keeping its original position if it
    /// already exists.
    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: &str,
        value: &str,
    ) -> Result<(), OuterHtmlError> {
        self.element(id)?;
        if let NodeKind::Element(elem) = &mut self.get_mut(id).kind {
            elem.attrs.insert(name.to_string(), StrTendril::from(value));
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        child.detach(&mut self.arena);
        parent.append(child, &mut self.arena);
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let elem = self.create_element(tag);
        parent.append(elem, &mut self.arena);
        elem
    }

    /// Append a new text node as the last child of `parent`.
    ///
    /// Never merges with a preceding text node: every call adds one node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let text_node = self.create_text(text);
        parent.append(text_node, &mut self.arena);
        text_node
    }

    /// Insert a new text node immediately before `sibling`.
    pub fn insert_text_before(&mut self, sibling: NodeId, text: &str) -> NodeId {
        let text_node = self.create_text(text);
        sibling.insert_before(text_node, &mut self.arena);
        text_node
    }

    /// Detach a node (and its subtree) from its parent.
    pub fn detach(&mut self, id: NodeId) {
        id.detach(&mut self.arena);
    }

    // -------------------------------------------------------------------------
    // Queries
    //
    // These take handles already known to belong to this document. Handles
    // from outside go through `element` first.
    // -------------------------------------------------------------------------

    /// Parent of a node, if any.
    ///
    /// # Panics
    ///
    /// Panics if `id` lies outside this document's arena.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// Iterate children of a node
    ///
    /// # Panics
    ///
    /// Panics if `id` lies outside this document's arena.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Number of element ancestors. The document node is not an element, so
    /// a top-level element has an ancestor count of 0.
    ///
    /// # Panics
    ///
    /// Panics if `id` lies outside this document's arena.
    pub fn ancestor_count(&self, id: NodeId) -> usize {
        id.ancestors(&self.arena)
            .skip(1)
            .filter(|&ancestor| self.get(ancestor).kind.is_element())
            .count()
    }

    /// Snapshot of all descendant elements in document order, excluding `id`.
    pub fn descendant_elements(&self, id: NodeId) -> Vec<NodeId> {
        id.descendants(&self.arena)
            .skip(1)
            .filter(|&desc| self.get(desc).kind.is_element())
            .collect()
    }

    /// Direct child elements (text and comment children are skipped).
    ///
    /// # Panics
    ///
    /// Panics if `id` lies outside this document's arena.
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .filter(|&child| self.get(child).kind.is_element())
            .collect()
    }

    /// Number of direct child elements.
    ///
    /// # Panics
    ///
    /// Panics if `id` lies outside this document's arena.
    pub fn child_element_count(&self, id: NodeId) -> usize {
        self.children(id)
            .filter(|&child| self.get(child).kind.is_element())
            .count()
    }

    /// Elements directly under the document node.
    pub fn top_level_elements(&self) -> Vec<NodeId> {
        self.child_elements(self.document)
    }

    /// First element (document order) with the given tag name.
    pub fn first_element_by_tag(&self, tag: &str) -> Option<NodeId> {
        self.document.descendants(&self.arena).find(|&id| {
            if let NodeKind::Element(elem) = &self.get(id).kind {
                elem.tag.as_ref() == tag
            } else {
                false
            }
        })
    }

    /// Concatenated text of all text descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for desc in id.descendants(&self.arena) {
            if let NodeKind::Text(text) = &self.get(desc).kind {
                out.push_str(text.as_ref());
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // Scoped structural edits
    // -------------------------------------------------------------------------

    /// Wrap `id` in a new `<tag>` element that takes its place among its
    /// siblings. Returns the wrapper.
    pub fn wrap(&mut self, id: NodeId, tag: &str) -> NodeId {
        let wrapper = self.create_element(tag);
        if self.parent(id).is_some() {
            id.insert_before(wrapper, &mut self.arena);
        }
        id.detach(&mut self.arena);
        wrapper.append(id, &mut self.arena);
        wrapper
    }

    /// Replace `wrapper` with its children and remove it from the arena.
    ///
    /// A parentless wrapper leaves its children parentless.
    pub fn unwrap(&mut self, wrapper: NodeId) {
        let children: Vec<NodeId> = wrapper.children(&self.arena).collect();
        let has_parent = self.parent(wrapper).is_some();
        for child in children {
            child.detach(&mut self.arena);
            if has_parent {
                wrapper.insert_before(child, &mut self.arena);
            }
        }
        wrapper.remove(&mut self.arena);
    }

    /// Wrap `id` in a transient `<tag>` element, run `f`, then unwrap.
    ///
    /// The unwrap happens whether `f` succeeds or fails.
    pub fn with_wrapper<T, E>(
        &mut self,
        id: NodeId,
        tag: &str,
        f: impl FnOnce(&mut Self, NodeId) -> Result<T, E>,
    ) -> Result<T, E> {
        let wrapper = self.wrap(id, tag);
        trace!("wrapped {:?} in <{}> {:?}", id, tag, wrapper);
        let result = f(self, wrapper);
        self.unwrap(wrapper);
        result
    }
}

/// Where a node sits in the tree, so it can be put back after a move.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement {
    parent: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Placement {
    pub(crate) fn of(doc: &Document, id: NodeId) -> Self {
        let node = &doc.arena[id];
        Placement {
            parent: node.parent(),
            next_sibling: node.next_sibling(),
        }
    }

    /// Move `id` back to the recorded position.
    pub(crate) fn restore(self, doc: &mut Document, id: NodeId) {
        id.detach(&mut doc.arena);
        match (self.next_sibling, self.parent) {
            (Some(next), _) => next.insert_before(id, &mut doc.arena),
            (None, Some(parent)) => parent.append(id, &mut doc.arena),
            (None, None) => {}
        }
    }
}

/// What goes in each arena slot
#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: NodeKind,
    pub ns: Namespace,
}

/// Node types
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Document root (invisible, parent of top-level nodes)
    Document,
    /// Element with tag and attributes
    Element(ElementData),
    /// Text content (StrTendril is refcounted - cheap to clone)
    Text(StrTendril),
    /// HTML comment
    Comment(StrTendril),
}

impl NodeKind {
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element(_))
    }

    /// Short lowercase name of the node type.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Element(_) => "element",
            NodeKind::Text(_) => "text",
            NodeKind::Comment(_) => "comment",
        }
    }
}

/// Element data (tag + attributes)
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name
    pub tag: StrTendril,

    /// Attributes in source order
    pub attrs: IndexMap<String, StrTendril>,
}

/// XML namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Html,
    Svg,
    MathMl,
}

impl Namespace {
    pub fn from_url(url: &str) -> Self {
        match url {
            "http://www.w3.org/2000/svg" => Namespace::Svg,
            "http://www.w3.org/1998/Math/MathML" => Namespace::MathMl,
            _ => Namespace::Html,
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::Svg => "http://www.w3.org/2000/svg",
            Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
        }
    }
}
