// SPDX-License-Identifier: MPL-2.0
//! Retained document the notifications are rendered into.
//!
//! A small arena of elements with the handful of properties the toast stack
//! needs: an id attribute, a class list, text, inline collapse margins and a
//! rendered height. The document also carries the environment the host
//! reports: load state, viewport width and touch capability.

use std::fmt;

/// Index of an element in its [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Loading state of the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Whether elements can be attached to the body.
    #[must_use]
    pub fn is_ready(self) -> bool {
        !matches!(self, ReadyState::Loading)
    }
}

/// Inline style set while a notification collapses out of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InlineStyle {
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
}

impl InlineStyle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.margin_top.is_none() && self.margin_bottom.is_none()
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<String>,
    text: String,
    style: InlineStyle,
    height: f32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            text: String::new(),
            style: InlineStyle::default(),
            height: 0.0,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// An element tree rooted at a body element.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    body: NodeId,
    ready_state: ReadyState,
    viewport_width: f32,
    touch: bool,
}

impl Document {
    /// Creates an empty, fully loaded document.
    #[must_use]
    pub fn new(viewport_width: f32) -> Self {
        Self {
            elements: vec![Element::new("body")],
            body: NodeId(0),
            ready_state: ReadyState::Complete,
            viewport_width,
            touch: false,
        }
    }

    /// Creates a document that is still loading.
    #[must_use]
    pub fn loading(viewport_width: f32) -> Self {
        Self {
            ready_state: ReadyState::Loading,
            ..Self::new(viewport_width)
        }
    }

    #[must_use]
    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    #[must_use]
    pub fn body(&self) -> NodeId {
        self.body
    }

    #[must_use]
    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    #[must_use]
    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Whether the device accepts touch input.
    #[must_use]
    pub fn is_touch_device(&self) -> bool {
        self.touch
    }

    pub fn set_touch_device(&mut self, touch: bool) {
        self.touch = touch;
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &'static str) -> NodeId {
        self.elements.push(Element::new(tag));
        NodeId(self.elements.len() - 1)
    }

    fn element(&self, node: NodeId) -> &Element {
        &self.elements[node.0]
    }

    fn element_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.elements[node.0]
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &'static str {
        self.element(node).tag
    }

    #[must_use]
    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.element(node).id.as_deref()
    }

    pub fn set_id(&mut self, node: NodeId, id: impl Into<String>) {
        self.element_mut(node).id = Some(id.into());
    }

    #[must_use]
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.element_mut(node).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.element_mut(node).classes.retain(|c| c != class);
    }

    /// Adds or removes `class` depending on `on`.
    pub fn toggle_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    #[must_use]
    pub fn classes(&self, node: NodeId) -> &[String] {
        &self.element(node).classes
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> &str {
        &self.element(node).text
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.element_mut(node).text = text.into();
    }

    #[must_use]
    pub fn style(&self, node: NodeId) -> InlineStyle {
        self.element(node).style
    }

    pub fn set_style(&mut self, node: NodeId, style: InlineStyle) {
        self.element_mut(node).style = style;
    }

    pub fn clear_style(&mut self, node: NodeId) {
        self.element_mut(node).style = InlineStyle::default();
    }

    /// Height the element occupies when laid out.
    #[must_use]
    pub fn rendered_height(&self, node: NodeId) -> f32 {
        self.element(node).height
    }

    pub fn set_rendered_height(&mut self, node: NodeId, height: f32) {
        self.element_mut(node).height = height;
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).parent
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.element(node).children
    }

    /// Appends `child` as the last child of `parent`, moving it if needed.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.element_mut(parent).children.push(child);
        self.element_mut(child).parent = Some(parent);
    }

    /// Inserts `child` as the first child of `parent`, moving it if needed.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.element_mut(parent).children.insert(0, child);
        self.element_mut(child).parent = Some(parent);
    }

    /// Removes `child` from `parent`. Returns false if it was not a child.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.element_mut(node).parent.take() {
            self.element_mut(parent).children.retain(|c| *c != node);
        }
    }

    /// Whether `node` was created by this document.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.elements.get(node.0).is_some()
    }

    /// Whether `node` is reachable from the body. False for nodes of
    /// another document.
    #[must_use]
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(node) && self.ancestors(node).any(|ancestor| ancestor == self.body)
    }

    /// `node` followed by its ancestors, innermost first.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(node), move |current| self.parent(*current))
    }

    /// Finds a connected element by id attribute.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.body];
        while let Some(node) = stack.pop() {
            if self.id(node) == Some(id) {
                return Some(node);
            }
            stack.extend(self.children(node).iter().rev());
        }
        None
    }
}
