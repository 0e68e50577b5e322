//! Arena-backed XML element tree.
//!
//! Every node of a parsed or constructed document lives in a single
//! [`XmlTree`] and is addressed by a [`NodeId`]. A node exclusively owns its
//! ordered child list; the parent link is a plain back-reference used for
//! positional queries such as a row's index within its table.
//!
//! Detaching a node ([`XmlTree::remove`]) unlinks it from its parent but
//! keeps its storage, so a detached subtree can be re-inserted elsewhere.
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::oxml::ns;
use smallvec::SmallVec;

/// Handle to a node inside an [`XmlTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// An element with a Clark-notation name and attributes in document order
    Element {
        name: String,
        attributes: SmallVec<[(String, String); 4]>,
    },
    /// Character data
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    data: NodeData,
}

/// An XML document (or a forest of detached fragments) stored as an arena.
#[derive(Debug, Clone, Default)]
pub struct XmlTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    /// Prefixes seen while parsing namespaces that have no well-known prefix
    prefix_hints: Vec<(String, String)>,
}

impl XmlTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document element, if one has been parsed or set.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Make `id` the document element.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Total number of nodes ever allocated, including detached ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            children: SmallVec::new(),
            data,
        });
        id
    }

    /// Create a detached element from a prefixed tag such as `w:tc`.
    ///
    /// # Panics
    ///
    /// Panics if [`ns::namespace`] does not know the prefix. Resolve
    /// untrusted names with [`ns::try_qn`] and pass them to
    /// [`XmlTree::create_element_clark`] instead.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.create_element_clark(ns::qn(tag))
    }

    /// Create a detached element from a Clark-notation name.
    pub fn create_element_clark(&mut self, name: String) -> NodeId {
        self.push(NodeData::Element {
            name,
            attributes: SmallVec::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::Text(text.into()))
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Payload of a node.
    #[inline]
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.node(id).data
    }

    #[inline]
    pub fn is_element(&self, id: NodeId) -> bool {
        matches!(self.node(id).data, NodeData::Element { .. })
    }

    /// Clark-notation name of an element, `None` for text nodes.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).data {
            NodeData::Element { name, .. } => Some(name),
            NodeData::Text(_) => None,
        }
    }

    /// Local part of an element's name.
    pub fn local_name(&self, id: NodeId) -> Option<&str> {
        self.name(id).map(|name| ns::split_clark(name).1)
    }

    /// Whether `id` is an element with the given prefixed tag.
    #[inline]
    pub fn is(&self, id: NodeId, tag: &str) -> bool {
        self.name(id).is_some_and(|name| ns::matches(name, tag))
    }

    /// Attributes of an element in document order, keyed by Clark name.
    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        match &self.node(id).data {
            NodeData::Element { attributes, .. } => attributes,
            NodeData::Text(_) => &[],
        }
    }

    /// Value of the attribute with the given prefixed name.
    pub fn attribute(&self, id: NodeId, tag: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|(key, _)| ns::matches(key, tag))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value in place.
    ///
    /// # Panics
    ///
    /// Panics if the attribute is new and [`ns::namespace`] does not know its
    /// prefix. Resolve untrusted names with [`ns::try_qn`] and use
    /// [`XmlTree::set_attribute_clark`] instead.
    pub fn set_attribute(&mut self, id: NodeId, tag: &str, value: impl Into<String>) {
        let value = value.into();
        if let NodeData::Element { attributes, .. } = &mut self.node_mut(id).data {
            match attributes.iter_mut().find(|(key, _)| ns::matches(key, tag)) {
                Some(slot) => slot.1 = value,
                None => attributes.push((ns::qn(tag), value)),
            }
        }
    }

    /// Set an attribute from a Clark-notation name, replacing any existing
    /// value in place.
    pub fn set_attribute_clark(&mut self, id: NodeId, name: String, value: impl Into<String>) {
        let value = value.into();
        if let NodeData::Element { attributes, .. } = &mut self.node_mut(id).data {
            match attributes.iter_mut().find(|(key, _)| *key == name) {
                Some(slot) => slot.1 = value,
                None => attributes.push((name, value)),
            }
        }
    }

    /// Set an attribute from an already-resolved Clark name.
    pub(crate) fn push_attribute_clark(&mut self, id: NodeId, name: String, value: String) {
        if let NodeData::Element { attributes, .. } = &mut self.node_mut(id).data {
            attributes.push((name, value));
        }
    }

    /// Remove an attribute, returning its former value.
    pub fn remove_attribute(&mut self, id: NodeId, tag: &str) -> Option<String> {
        if let NodeData::Element { attributes, .. } = &mut self.node_mut(id).data {
            let pos = attributes.iter().position(|(key, _)| ns::matches(key, tag))?;
            return Some(attributes.remove(pos).1);
        }
        None
    }

    /// Parent of a node; `None` for roots and detached nodes.
    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// All children of a node in document order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Element children of a node in document order.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.is_element(child))
    }

    /// Children of `id` with the given prefixed tag.
    pub fn children_tagged<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.is(child, tag))
    }

    /// First child of `id` with the given prefixed tag.
    pub fn first_child_tagged(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children_tagged(id, tag).next()
    }

    /// Rank of `id` among its parent's children sharing its tag.
    ///
    /// Recomputed on every call by scanning the parent's child list.
    pub fn index_among_tagged(&self, id: NodeId, tag: &str) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children_tagged(parent, tag).position(|sibling| sibling == id)
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.is_ancestor_or_self(child, parent) {
            return Err(OoxmlError::CyclicInsert);
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_insert(parent, child)?;
        self.attach(parent, None, child);
        Ok(())
    }

    /// Insert `child` at `index` among `parent`'s children, clamped to the end.
    pub fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        self.check_insert(parent, child)?;
        self.attach(parent, Some(index), child);
        Ok(())
    }

    /// Insert `child` immediately before the first existing child of `parent`
    /// whose tag is listed in `successors`, or append it when none is present.
    ///
    /// This is the placement rule that keeps optional children in schema
    /// order regardless of the order in which they are added.
    pub fn insert_element_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        successors: &[&str],
    ) -> Result<()> {
        self.check_insert(parent, child)?;
        self.attach_before(parent, child, successors);
        Ok(())
    }

    /// Unchecked form of [`XmlTree::insert_element_before`] for freshly
    /// created or detached nodes.
    pub(crate) fn attach_before(&mut self, parent: NodeId, child: NodeId, successors: &[&str]) {
        self.remove(child);
        let index = self.successor_index(parent, successors);
        self.attach(parent, index, child);
    }

    fn successor_index(&self, parent: NodeId, successors: &[&str]) -> Option<usize> {
        if successors.is_empty() {
            return None;
        }
        self.children(parent).iter().position(|&sibling| {
            self.name(sibling)
                .is_some_and(|name| successors.iter().any(|tag| ns::matches(name, tag)))
        })
    }

    /// Link a node that is known not to be an ancestor of `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, index: Option<usize>, child: NodeId) {
        self.remove(child);
        let children = &mut self.node_mut(parent).children;
        match index {
            Some(index) if index < children.len() => children.insert(index, child),
            _ => children.push(child),
        }
        self.node_mut(child).parent = Some(parent);
        tracing::trace!(parent = ?parent, child = ?child, index = ?index, "attached node");
    }

    /// Detach `id` from its parent. The subtree stays valid and can be
    /// re-inserted. Detaching a root or an already-detached node is a no-op.
    pub fn remove(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|child| *child != id);
            tracing::trace!(parent = ?parent, child = ?id, "detached node");
        }
    }

    /// Detach all children of `id`, returning them in their former order.
    pub fn take_children(&mut self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let children = std::mem::take(&mut self.node_mut(id).children);
        for &child in &children {
            self.node_mut(child).parent = None;
        }
        children
    }

    /// Concatenated character data of `id` and its descendants.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).data {
            NodeData::Text(text) => out.push_str(text),
            NodeData::Element { .. } => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            },
        }
    }

    /// `id` followed by all of its descendants in document order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![id],
        }
    }

    /// Prefix to use for `uri` when no well-known prefix exists.
    pub(crate) fn prefix_hint(&self, uri: &str) -> Option<&str> {
        self.prefix_hints
            .iter()
            .find(|(ns, _)| ns == uri)
            .map(|(_, prefix)| prefix.as_str())
    }

    pub(crate) fn remember_prefix(&mut self, uri: &str, prefix: &str) {
        if ns::prefix_for(uri).is_none() && self.prefix_hint(uri).is_none() {
            self.prefix_hints.push((uri.to_string(), prefix.to_string()));
        }
    }
}

/// Pre-order iterator returned by [`XmlTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a XmlTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(tree: &XmlTree, parent: NodeId) -> Vec<String> {
        tree.element_children(parent)
            .filter_map(|id| tree.local_name(id).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_insert_element_before_successor() {
        let mut tree = XmlTree::new();
        let parent = tree.create_element("w:tcPr");
        let v_merge = tree.create_element("w:vMerge");
        tree.append_child(parent, v_merge).unwrap();

        let span = tree.create_element("w:gridSpan");
        tree.insert_element_before(parent, span, &["w:hMerge", "w:vMerge"])
            .unwrap();
        assert_eq!(tags(&tree, parent), ["gridSpan", "vMerge"]);

        let shd = tree.create_element("w:shd");
        tree.insert_element_before(parent, shd, &["w:noWrap"]).unwrap();
        assert_eq!(tags(&tree, parent), ["gridSpan", "vMerge", "shd"]);
    }

    #[test]
    fn test_attributes() {
        let mut tree = XmlTree::new();
        let el = tree.create_element("w:tblW");
        tree.set_attribute(el, "w:w", "0");
        tree.set_attribute(el, "w:type", "auto");
        tree.set_attribute(el, "w:w", "1440");
        assert_eq!(tree.attribute(el, "w:w"), Some("1440"));
        assert_eq!(tree.attributes(el).len(), 2);
        assert_eq!(tree.remove_attribute(el, "w:type").as_deref(), Some("auto"));
        assert_eq!(tree.attribute(el, "w:type"), None);
    }

    #[test]
    fn test_unregistered_prefix_attribute() {
        let mut tree = XmlTree::new();
        let el = tree.create_element("w:tc");
        assert_eq!(
            ns::try_qn("v:id"),
            Err(OoxmlError::UnknownPrefix("v".to_string()))
        );

        let name = ns::clark("urn:schemas-microsoft-com:vml", "id");
        tree.set_attribute_clark(el, name.clone(), "1");
        tree.set_attribute_clark(el, name.clone(), "2");
        assert_eq!(tree.attributes(el), &[(name, "2".to_string())]);
    }

    #[test]
    fn test_index_among_tagged_tracks_removal() {
        let mut tree = XmlTree::new();
        let tbl = tree.create_element("w:tbl");
        let grid = tree.create_element("w:tblGrid");
        tree.append_child(tbl, grid).unwrap();
        let rows: Vec<_> = (0..3).map(|_| tree.create_element("w:tr")).collect();
        for &row in &rows {
            tree.append_child(tbl, row).unwrap();
        }
        assert_eq!(tree.index_among_tagged(rows[2], "w:tr"), Some(2));
        tree.remove(rows[0]);
        assert_eq!(tree.index_among_tagged(rows[2], "w:tr"), Some(1));
        assert_eq!(tree.index_among_tagged(rows[0], "w:tr"), None);
    }

    #[test]
    fn test_cyclic_insert_rejected() {
        let mut tree = XmlTree::new();
        let outer = tree.create_element("w:tbl");
        let inner = tree.create_element("w:tr");
        tree.append_child(outer, inner).unwrap();
        assert_eq!(tree.append_child(inner, outer), Err(OoxmlError::CyclicInsert));
        assert_eq!(tree.append_child(outer, outer), Err(OoxmlError::CyclicInsert));
    }

    #[test]
    fn test_reattach_moves_node() {
        let mut tree = XmlTree::new();
        let a = tree.create_element("w:tr");
        let b = tree.create_element("w:tr");
        let cell = tree.create_element("w:tc");
        tree.append_child(a, cell).unwrap();
        tree.append_child(b, cell).unwrap();
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), [cell]);
        assert_eq!(tree.parent(cell), Some(b));
    }

    #[test]
    fn test_text_and_descendants() {
        let mut tree = XmlTree::new();
        let p = tree.create_element("w:p");
        let r = tree.create_element("w:r");
        let t = tree.create_element("w:t");
        let text = tree.create_text("hello");
        tree.append_child(p, r).unwrap();
        tree.append_child(r, t).unwrap();
        tree.append_child(t, text).unwrap();
        assert_eq!(tree.text(p), "hello");
        assert_eq!(tree.descendants(p).collect::<Vec<_>>(), [p, r, t, text]);
    }
}
