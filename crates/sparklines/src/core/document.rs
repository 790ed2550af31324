//! In-memory element tree that serializes to SVG markup
//!
//! Implements [`Host`] without a browser. Nodes live in an arena and are
//! addressed by [`NodeId`]. Clearing an element frees its former subtree, and
//! freed slots are reused by later elements, so a long-lived document that is
//! redrawn many times stays the size of its current tree. A [`NodeId`] that
//! pointed into a cleared subtree must not be used again.

use std::fmt::Write as _;

use anyhow::Result;

use super::host::{SPARKLINE_FLAG, SVG_NAMESPACE};
use super::{Host, ShapeKind, SparklineError};

/// Handle to a node in an [`SvgDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeId>,
    text: Option<String>,
    parent: Option<NodeId>,
}

impl NodeData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
            parent: None,
        }
    }
}

/// Arena-backed document with a single `body` root
#[derive(Debug, Clone)]
pub struct SvgDocument {
    nodes: Vec<Option<NodeData>>,
    free: Vec<usize>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(NodeData::new("body"))],
            free: Vec::new(),
        }
    }

    /// The root element
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Create a detached element, reusing a freed slot when one exists
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let data = Some(NodeData::new(tag));
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = data;
                NodeId(index)
            }
            None => {
                self.nodes.push(data);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Number of nodes currently allocated, attached or not
    pub fn live_nodes(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Free `id` and its whole subtree, detaching it from its parent first
    ///
    /// The root cannot be freed.
    pub fn free(&mut self, id: NodeId) -> Result<()> {
        self.check(id)?;
        if id == self.root() {
            return Err(SparklineError::host_error("cannot free the document root").into());
        }
        if let Some(parent) = self.parent(id) {
            if let Some(node) = self.slot_mut(parent) {
                node.children.retain(|&c| c != id);
            }
        }
        self.free_subtree(id);
        Ok(())
    }

    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(next.0).and_then(Option::take) {
                stack.extend(node.children);
                self.free.push(next.0);
            }
        }
    }

    fn slot(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Create an element flagged as a sparkline container, appended to the root
    pub fn add_sparkline<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> NodeId
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let element = self.create_element("div");
        let root = self.root();
        self.put_attribute(element, SPARKLINE_FLAG, "true");
        for (name, value) in attributes {
            self.put_attribute(element, name.as_ref(), value.as_ref());
        }
        self.append(root, element);
        element
    }

    fn node(&self, id: NodeId) -> Result<&NodeData> {
        self.slot(id)
            .ok_or_else(|| SparklineError::host_error(format!("node {} does not exist", id.0)).into())
    }

    fn check(&self, id: NodeId) -> Result<()> {
        self.node(id).map(|_| ())
    }

    fn put_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(node) = self.slot_mut(id) else {
            return;
        };
        let attributes = &mut node.attributes;
        match attributes.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn append(&mut self, parent: NodeId, child: NodeId) {
        let previous = self.slot_mut(child).and_then(|node| node.parent.replace(parent));
        if let Some(node) = previous.and_then(|previous| self.slot_mut(previous)) {
            node.children.retain(|&c| c != child);
        }
        if let Some(node) = self.slot_mut(parent) {
            node.children.push(child);
        }
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        let attributes = &mut self.slot_mut(id)?.attributes;
        let index = attributes.iter().position(|(existing, _)| existing == name)?;
        Some(attributes.remove(index).1)
    }

    /// Tag name of a node
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.slot(id).map(|n| n.tag.as_str())
    }

    /// Text content set directly on a node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.slot(id).and_then(|n| n.text.as_deref())
    }

    /// Attributes of a node, in insertion order
    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        self.slot(id)
            .map(|n| n.attributes.as_slice())
            .unwrap_or(&[])
    }

    /// Direct children of a node
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slot(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|n| n.parent)
    }

    /// All descendants of `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Serialize a node and its subtree
    pub fn to_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id);
        out
    }

    /// Serialize only the children of a node
    pub fn inner_markup(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(&mut out, child);
        }
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        let Some(node) = self.slot(id) else {
            return;
        };

        out.push('<');
        out.push_str(&node.tag);
        for (name, value) in &node.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }

        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape(text, false));
        }
        for &child in &node.children {
            self.write_node(out, child);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

impl Default for SvgDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

impl Host for SvgDocument {
    type Node = NodeId;

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.slot(*element)?
            .attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.clone())
    }

    fn create_surface(&mut self) -> Result<NodeId> {
        let surface = self.create_element("svg");
        self.put_attribute(surface, "xmlns", SVG_NAMESPACE);
        Ok(surface)
    }

    fn create_shape(&mut self, kind: ShapeKind) -> Result<NodeId> {
        Ok(self.create_element(kind.tag()))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) -> Result<()> {
        self.check(*node)?;
        self.put_attribute(*node, name, value);
        Ok(())
    }

    fn set_label(&mut self, shape: &NodeId, text: &str) -> Result<()> {
        self.check(*shape)?;
        let title = self.create_element("title");
        if let Some(node) = self.slot_mut(title) {
            node.text = Some(text.to_string());
        }
        self.append(*shape, title);
        Ok(())
    }

    fn attach(&mut self, parent: &NodeId, child: &NodeId) -> Result<()> {
        self.check(*parent)?;
        self.check(*child)?;
        if parent == child || self.descendants(*child).contains(parent) {
            return Err(SparklineError::host_error(format!(
                "cannot attach node {} inside itself",
                child.0
            ))
            .into());
        }
        self.append(*parent, *child);
        Ok(())
    }

    fn clear(&mut self, element: &NodeId) -> Result<()> {
        let node = self
            .slot_mut(*element)
            .ok_or_else(|| SparklineError::host_error(format!("node {} does not exist", element.0)))?;
        let children = std::mem::take(&mut node.children);
        node.text = None;
        for child in children {
            self.free_subtree(child);
        }
        Ok(())
    }

    fn release(&mut self, node: &NodeId) -> Result<()> {
        self.free(*node)
    }

    fn discover(&self) -> Result<Vec<NodeId>> {
        Ok(self
            .descendants(self.root())
            .into_iter()
            .filter(|id| self.attribute(id, SPARKLINE_FLAG).as_deref() == Some("true"))
            .collect())
    }
}
