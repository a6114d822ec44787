// SPDX-License-Identifier: MPL-2.0
//! Notification options and click actions.
//!
//! [`Options`] is the complete, effective set of options of a notification.
//! [`OptionsPatch`] carries only the fields a caller wants to change; merging
//! a patch is shallow, unset fields keep their previous value.

use super::id::NotificationId;
use crate::config::{DEFAULT_DISMISSABLE, DEFAULT_TIMEOUT_MS};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Callback invoked with the id of the clicked notification.
pub type Callback = Rc<dyn Fn(&NotificationId)>;

/// What happens when the body of a notification is clicked.
#[derive(Clone, Default)]
pub enum Action {
    /// Clicking does nothing.
    #[default]
    None,
    /// Clicking opens the URL.
    Navigate(String),
    /// Clicking calls the callback with the notification id.
    Invoke(Callback),
}

impl Action {
    /// Wraps a closure as an [`Action::Invoke`].
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&NotificationId) + 'static,
    {
        Self::Invoke(Rc::new(f))
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Navigate(url) => f.debug_tuple("Navigate").field(url).finish(),
            Self::Invoke(_) => f.write_str("Invoke(<callback>)"),
        }
    }
}

impl From<&str> for Action {
    fn from(url: &str) -> Self {
        Self::Navigate(url.to_string())
    }
}

impl From<String> for Action {
    fn from(url: String) -> Self {
        Self::Navigate(url)
    }
}

/// Effective options of a notification.
#[derive(Debug, Clone)]
pub struct Options {
    pub title: String,
    pub text: String,
    /// Auto-dismiss delay; `None` keeps the notification until removed.
    pub timeout: Option<Duration>,
    pub action: Action,
    pub dismissable: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            title: String::new(),
            text: String::new(),
            timeout: Some(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            action: Action::None,
            dismissable: DEFAULT_DISMISSABLE,
        }
    }
}

impl Options {
    /// Returns a copy of `self` with every field set in `patch` replaced.
    #[must_use]
    pub fn merged(&self, patch: &OptionsPatch) -> Self {
        Self {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            timeout: patch.timeout.unwrap_or(self.timeout),
            action: patch.action.clone().unwrap_or_else(|| self.action.clone()),
            dismissable: patch.dismissable.unwrap_or(self.dismissable),
        }
    }
}

/// A partial set of options.
///
/// ```
/// use iced_toasts::notifications::OptionsPatch;
/// use std::time::Duration;
///
/// let patch = OptionsPatch::new()
///     .title("Saved")
///     .timeout(Duration::from_secs(5))
///     .dismissable(false);
/// assert_eq!(patch.title.as_deref(), Some("Saved"));
/// assert!(patch.text.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OptionsPatch {
    pub title: Option<String>,
    pub text: Option<String>,
    /// `Some(None)` explicitly disables auto-dismiss.
    pub timeout: Option<Option<Duration>>,
    pub action: Option<Action>,
    pub dismissable: Option<bool>,
}

impl OptionsPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(Some(timeout));
        self
    }

    /// Keeps the notification open until it is removed.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.timeout = Some(None);
        self
    }

    #[must_use]
    pub fn action(mut self, action: impl Into<Action>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[must_use]
    pub fn on_click<F>(self, f: F) -> Self
    where
        F: Fn(&NotificationId) + 'static,
    {
        self.action(Action::callback(f))
    }

    #[must_use]
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = Some(dismissable);
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.text.is_none()
            && self.timeout.is_none()
            && self.action.is_none()
            && self.dismissable.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn default_options_match_documented_defaults() {
        let options = Options::default();
        assert_eq!(options.title, "");
        assert_eq!(options.text, "");
        assert_eq!(options.timeout, Some(Duration::from_millis(3000)));
        assert!(options.action.is_none());
        assert!(options.dismissable);
    }

    #[test]
    fn merge_overrides_only_set_fields() {
        let base = Options {
            title: "A".into(),
            text: "body".into(),
            action: Action::from("https://example.org"),
            ..Options::default()
        };
        let merged = base.merged(&OptionsPatch::new().title("B"));

        assert_eq!(merged.title, "B");
        assert_eq!(merged.text, "body");
        assert!(matches!(merged.action, Action::Navigate(ref url) if url == "https://example.org"));
        assert_eq!(merged.timeout, base.timeout);
    }

    #[test]
    fn sticky_patch_clears_timeout() {
        let merged = Options::default().merged(&OptionsPatch::new().sticky());
        assert_eq!(merged.timeout, None);
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = OptionsPatch::new();
        assert!(patch.is_empty());

        let base = Options {
            title: "keep".into(),
            dismissable: false,
            ..Options::default()
        };
        let merged = base.merged(&patch);
        assert_eq!(merged.title, "keep");
        assert!(!merged.dismissable);
    }

    #[test]
    fn callback_action_is_shared_on_merge() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let base = Options::default().merged(&OptionsPatch::new().on_click(move |_| {
            counter.set(counter.get() + 1);
        }));
        let merged = base.merged(&OptionsPatch::new().text("changed"));

        let id = NotificationId::parse("abcde").unwrap();
        match merged.action {
            Action::Invoke(callback) => callback(&id),
            other => panic!("expected callback, got {other:?}"),
        }
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn debug_hides_callback_internals() {
        let action = Action::callback(|_| {});
        assert_eq!(format!("{action:?}"), "Invoke(<callback>)");
    }
}
