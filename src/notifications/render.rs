// SPDX-License-Identifier: MPL-2.0
//! Rendering adapter between the lifecycle and the document.
//!
//! The [`Renderer`] builds one element per notification and applies each
//! lifecycle [`Change`] as class, text, style and placement mutations. It
//! also resolves which notification a click landed on.

use super::dom::{Document, InlineStyle, NodeId};
use super::id::NotificationId;
use super::lifecycle::Change;
use crate::config::WRAPPER_ID;
use std::collections::HashMap;

pub const NOTIFICATION_CLASS: &str = "notification";
pub const TITLE_CLASS: &str = "title";
pub const TEXT_CLASS: &str = "text";
pub const CLOSE_CLASS: &str = "close";
pub const CLOSE_ICON_CLASS: &str = "close-icon";
/// Present while the notification is fully shown.
pub const INBOUND_CLASS: &str = "inbound";
pub const NOT_DISMISSABLE_CLASS: &str = "not-dismissable";
/// Keeps the close control visible on devices without hover.
pub const NO_HOVER_CLASS: &str = "no-hover";

// Layout estimate used for the collapse margin.
const PADDING: f32 = 12.0;
const TITLE_LINE_HEIGHT: f32 = 26.0;
const TEXT_LINE_HEIGHT: f32 = 20.0;
const CHARS_PER_LINE: usize = 40;

/// Elements making up one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts {
    pub root: NodeId,
    pub title: NodeId,
    pub text: NodeId,
    pub close: NodeId,
    pub close_icon: NodeId,
}

/// Notification a click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    pub id: NotificationId,
    /// The click landed on (or inside) the close control.
    pub on_close: bool,
}

#[derive(Debug)]
pub struct Renderer {
    wrapper: Option<NodeId>,
    parts: HashMap<NotificationId, Parts>,
    /// Attachments requested before the wrapper existed, in request order.
    pending: Vec<NotificationId>,
    mobile_breakpoint: f32,
}

impl Renderer {
    #[must_use]
    pub fn new(mobile_breakpoint: f32) -> Self {
        Self {
            wrapper: None,
            parts: HashMap::new(),
            pending: Vec::new(),
            mobile_breakpoint,
        }
    }

    /// Creates the wrapper and attaches notifications that were waiting for it.
    pub fn mount(&mut self, doc: &mut Document) -> NodeId {
        if let Some(wrapper) = self.wrapper {
            return wrapper;
        }
        let wrapper = doc.create_element("div");
        doc.set_id(wrapper, WRAPPER_ID);
        doc.append_child(doc.body(), wrapper);
        self.wrapper = Some(wrapper);
        log::debug!("mounted notification wrapper {wrapper}");

        for id in std::mem::take(&mut self.pending) {
            if let Some(parts) = self.parts.get(&id) {
                self.place(doc, parts.root);
            }
        }
        wrapper
    }

    #[must_use]
    pub fn wrapper(&self) -> Option<NodeId> {
        self.wrapper
    }

    #[must_use]
    pub fn parts(&self, id: &NotificationId) -> Option<Parts> {
        self.parts.get(id).copied()
    }

    #[must_use]
    pub fn mobile_breakpoint(&self) -> f32 {
        self.mobile_breakpoint
    }

    /// Changes the breakpoint used for placements made from now on.
    pub fn set_mobile_breakpoint(&mut self, breakpoint: f32) {
        self.mobile_breakpoint = breakpoint;
    }

    /// Whether the document is in the desktop layout (stack grows downward).
    #[must_use]
    pub fn is_wide(&self, doc: &Document) -> bool {
        doc.viewport_width() > self.mobile_breakpoint
    }

    pub fn apply(&mut self, doc: &mut Document, change: &Change) {
        match change {
            Change::Created(id) => {
                let parts = build(doc, id);
                self.parts.insert(id.clone(), parts);
            }
            Change::Attached(id) => {
                let Some(parts) = self.parts.get(id).copied() else {
                    return;
                };
                if self.wrapper.is_some() {
                    self.place(doc, parts.root);
                } else if !self.pending.contains(id) {
                    self.pending.push(id.clone());
                }
            }
            Change::ContentChanged { id, title, text } => {
                if let Some(parts) = self.parts.get(id) {
                    doc.set_text(parts.title, title.as_str());
                    doc.set_text(parts.text, text.as_str());
                    doc.set_rendered_height(parts.root, estimate_height(title, text));
                }
            }
            Change::DismissableChanged { id, dismissable } => {
                if let Some(parts) = self.parts.get(id) {
                    doc.toggle_class(parts.root, NOT_DISMISSABLE_CLASS, !dismissable);
                }
            }
            Change::Opened(id) => {
                if let Some(parts) = self.parts.get(id) {
                    if doc.is_touch_device() {
                        doc.add_class(parts.root, NO_HOVER_CLASS);
                    }
                }
            }
            Change::Entered(id) => {
                if let Some(parts) = self.parts.get(id) {
                    doc.add_class(parts.root, INBOUND_CLASS);
                    doc.clear_style(parts.root);
                }
            }
            Change::ExitStarted(id) => {
                if let Some(parts) = self.parts.get(id) {
                    doc.remove_class(parts.root, INBOUND_CLASS);
                    let collapse = -doc.rendered_height(parts.root);
                    let style = if self.is_wide(doc) {
                        InlineStyle {
                            margin_bottom: Some(collapse),
                            ..InlineStyle::default()
                        }
                    } else {
                        InlineStyle {
                            margin_top: Some(collapse),
                            ..InlineStyle::default()
                        }
                    };
                    doc.set_style(parts.root, style);
                }
            }
            Change::Detached(id) => {
                self.pending.retain(|pending| pending != id);
                if let Some(parts) = self.parts.get(id) {
                    if let Some(parent) = doc.parent(parts.root) {
                        doc.remove_child(parent, parts.root);
                    }
                }
            }
        }
    }

    /// Whether the notification's element currently has a parent.
    #[must_use]
    pub fn is_attached(&self, doc: &Document, id: &NotificationId) -> bool {
        self.parts
            .get(id)
            .is_some_and(|parts| doc.parent(parts.root).is_some())
    }

    /// Finds the notification enclosing `target`.
    ///
    /// Returns `None` for clicks on the wrapper itself or outside any
    /// notification element.
    #[must_use]
    pub fn resolve_click(&self, doc: &Document, target: NodeId) -> Option<ClickTarget> {
        let mut on_close = false;
        for node in doc.ancestors(target) {
            if Some(node) == self.wrapper {
                return None;
            }
            if doc.has_class(node, CLOSE_CLASS) {
                on_close = true;
            }
            if doc.has_class(node, NOTIFICATION_CLASS) {
                let id = doc.id(node).and_then(NotificationId::from_element_id)?;
                return Some(ClickTarget { id, on_close });
            }
        }
        None
    }

    fn place(&self, doc: &mut Document, root: NodeId) {
        let Some(wrapper) = self.wrapper else {
            return;
        };
        if self.is_wide(doc) {
            doc.append_child(wrapper, root);
        } else {
            doc.prepend_child(wrapper, root);
        }
    }
}

fn build(doc: &mut Document, id: &NotificationId) -> Parts {
    let root = doc.create_element("div");
    doc.set_id(root, id.element_id());
    doc.add_class(root, NOTIFICATION_CLASS);

    let title = doc.create_element("h3");
    doc.add_class(title, TITLE_CLASS);
    let text = doc.create_element("p");
    doc.add_class(text, TEXT_CLASS);
    let close = doc.create_element("div");
    doc.add_class(close, CLOSE_CLASS);
    let close_icon = doc.create_element("svg");
    doc.add_class(close_icon, CLOSE_ICON_CLASS);

    doc.append_child(close, close_icon);
    doc.append_child(root, title);
    doc.append_child(root, text);
    doc.append_child(root, close);

    Parts {
        root,
        title,
        text,
        close,
        close_icon,
    }
}

fn line_count(content: &str) -> usize {
    if content.is_empty() {
        return 0;
    }
    content
        .lines()
        .map(|line| line.chars().count().div_ceil(CHARS_PER_LINE).max(1))
        .sum()
}

/// Approximate laid-out height of a notification with this content.
fn estimate_height(title: &str, text: &str) -> f32 {
    let title_lines = line_count(title) as f32;
    let text_lines = line_count(text) as f32;
    PADDING * 2.0 + title_lines * TITLE_LINE_HEIGHT + text_lines * TEXT_LINE_HEIGHT
}
