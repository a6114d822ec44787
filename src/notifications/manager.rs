// SPDX-License-Identifier: MPL-2.0
//! Notification manager.
//!
//! The `Manager` owns the document, the lifecycle records and their timers.
//! Every operation reads the clock once, asks the lifecycle what changed and
//! lets the renderer reflect those changes in the document. Timers only fire
//! from [`Manager::tick`], which the host calls periodically.

use super::dom::{Document, NodeId, ReadyState};
use super::id::NotificationId;
use super::lifecycle::{Change, Lifecycle, Phase};
use super::options::{Action, Options, OptionsPatch};
use super::render::{ClickTarget, Parts, Renderer};
use super::timer::{Clock, SystemClock};
use crate::config::{Config, DEFAULT_MOBILE_BREAKPOINT_PX};
use crate::error::{Error, Result};
use std::fmt;
use std::time::{Duration, Instant};
use url::Url;

/// Opens the URL of a `Navigate` action.
pub trait Navigator {
    /// # Errors
    ///
    /// Returns [`Error::Navigation`] if the URL could not be opened.
    fn navigate(&mut self, url: &Url) -> Result<()>;
}

/// Opens URLs in the system's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Navigator for SystemBrowser {
    fn navigate(&mut self, url: &Url) -> Result<()> {
        webbrowser::open(url.as_str())
            .map_err(|err| Error::Navigation(format!("failed to open {url}: {err}")))
    }
}

/// What a click on the document did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was outside any notification, or hit a notification that
    /// can no longer react.
    Ignored,
    /// The close control was clicked and the notification started exiting.
    Dismissed(NotificationId),
    /// The action URL was handed to the navigator.
    Navigated(NotificationId),
    /// The action callback was called.
    Invoked(NotificationId),
    /// The notification has no action.
    NoAction(NotificationId),
    /// The action could not be carried out; the failure was logged.
    Invalid(NotificationId),
}

/// Messages the `iced` host forwards to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An element of the document was clicked.
    Clicked(NodeId),
    /// Periodic tick firing due timers.
    Tick,
}

/// Tracks notifications by id and renders them into its document.
pub struct Manager {
    lifecycle: Lifecycle,
    renderer: Renderer,
    document: Document,
    clock: Box<dyn Clock>,
    navigator: Box<dyn Navigator>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("lifecycle", &self.lifecycle)
            .field("renderer", &self.renderer)
            .field("document", &self.document)
            .finish_non_exhaustive()
    }
}

impl Manager {
    /// Creates a manager rendering into `document`.
    ///
    /// The wrapper is mounted right away unless the document is still
    /// loading, in which case mounting waits for [`Manager::set_ready_state`].
    #[must_use]
    pub fn new(document: Document) -> Self {
        let mut manager = Self {
            lifecycle: Lifecycle::new(),
            renderer: Renderer::new(DEFAULT_MOBILE_BREAKPOINT_PX),
            document,
            clock: Box::new(SystemClock),
            navigator: Box::new(SystemBrowser),
        };
        manager.mount_if_ready();
        manager
    }

    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    #[must_use]
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Box::new(navigator);
        self
    }

    /// Makes generated ids reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.lifecycle.reseed(seed);
        self
    }

    /// Applies configured default options and layout.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.lifecycle
            .set_default_options(&config.defaults.to_patch());
        self.renderer
            .set_mobile_breakpoint(config.layout.mobile_breakpoint());
        self
    }

    fn now(&self) -> Instant {
        self.clock.now()
    }

    fn apply(&mut self, changes: Vec<Change>) {
        for change in &changes {
            self.renderer.apply(&mut self.document, change);
        }
    }

    fn mount_if_ready(&mut self) {
        if self.document.ready_state().is_ready() && self.renderer.wrapper().is_none() {
            self.renderer.mount(&mut self.document);
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Merges `patch` into the options new notifications start from.
    pub fn set_default_options(&mut self, patch: OptionsPatch) {
        self.lifecycle.set_default_options(&patch);
    }

    /// Opens a new notification and returns its generated id.
    pub fn add_notification(&mut self, patch: OptionsPatch) -> NotificationId {
        let now = self.now();
        let (id, changes) = self.lifecycle.add(now, &patch);
        self.apply(changes);
        id
    }

    /// Creates or updates the notification `id` and opens it.
    ///
    /// An exiting notification is kept; a detached one is attached again.
    /// Fields not set in `patch` keep their stored value, or the current
    /// defaults for a notification seen for the first time.
    pub fn edit_notification(&mut self, id: &NotificationId, patch: OptionsPatch) {
        let now = self.now();
        let changes = self.lifecycle.edit(now, id, &patch);
        self.apply(changes);
    }

    /// Opens the notification again with its stored options.
    pub fn reopen_notification(&mut self, id: &NotificationId) {
        self.edit_notification(id, OptionsPatch::new());
    }

    /// Starts the exit animation of a shown notification.
    ///
    /// Returns false if the notification is unknown, detached or already
    /// exiting.
    pub fn remove_notification(&mut self, id: &NotificationId) -> bool {
        let now = self.now();
        match self.lifecycle.remove(now, id) {
            Some(changes) => {
                self.apply(changes);
                true
            }
            None => false,
        }
    }

    pub fn set_title(&mut self, id: &NotificationId, title: impl Into<String>) {
        self.edit_notification(id, OptionsPatch::new().title(title));
    }

    pub fn set_text(&mut self, id: &NotificationId, text: impl Into<String>) {
        self.edit_notification(id, OptionsPatch::new().text(text));
    }

    /// Sets the auto-dismiss delay; `None` keeps the notification open.
    pub fn set_timeout(&mut self, id: &NotificationId, timeout: Option<Duration>) {
        let patch = OptionsPatch {
            timeout: Some(timeout),
            ..OptionsPatch::new()
        };
        self.edit_notification(id, patch);
    }

    /// Fires every timer that is due. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let now = self.now();
        let changes = self.lifecycle.advance(now);
        let changed = !changes.is_empty();
        self.apply(changes);
        changed
    }

    /// Dispatches a click on `target`.
    ///
    /// A click on the close control of a dismissable notification removes
    /// it; any other click inside a notification runs its action.
    pub fn handle_click(&mut self, target: NodeId) -> ClickOutcome {
        if !self.document.contains(target) {
            log::warn!("ignoring click on unknown element {target}");
            return ClickOutcome::Ignored;
        }
        if !self.document.is_connected(target) {
            log::warn!("ignoring click on detached element {target}");
            return ClickOutcome::Ignored;
        }
        let Some(ClickTarget { id, on_close }) =
            self.renderer.resolve_click(&self.document, target)
        else {
            return ClickOutcome::Ignored;
        };

        let dismissable = self
            .lifecycle
            .options(&id)
            .is_some_and(|options| options.dismissable);
        if on_close && dismissable {
            if self.remove_notification(&id) {
                return ClickOutcome::Dismissed(id);
            }
            log::warn!("close clicked on notification {id} which is already exiting");
            return ClickOutcome::Ignored;
        }

        match self.lifecycle.action(&id) {
            Action::None => ClickOutcome::NoAction(id),
            Action::Navigate(raw) => {
                let navigated = Url::parse(&raw)
                    .map_err(Error::from)
                    .and_then(|url| self.navigator.navigate(&url));
                match navigated {
                    Ok(()) => {
                        log::debug!("notification {id} navigated to {raw}");
                        ClickOutcome::Navigated(id)
                    }
                    Err(err) => {
                        log::error!("invalid action on notification {id} ({raw:?}): {err}");
                        ClickOutcome::Invalid(id)
                    }
                }
            }
            Action::Invoke(callback) => {
                callback(&id);
                ClickOutcome::Invoked(id)
            }
        }
    }

    /// Handles a message from the `iced` host.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Clicked(target) => {
                self.handle_click(*target);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Reports a new document ready state, mounting the wrapper once ready.
    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.document.set_ready_state(state);
        self.mount_if_ready();
    }

    /// Reports a new viewport width. Affects placements made from now on.
    pub fn resize(&mut self, width: f32) {
        self.document.set_viewport_width(width);
    }

    pub fn set_touch_device(&mut self, touch: bool) {
        self.document.set_touch_device(touch);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// True if the id is unknown or its element has no parent.
    ///
    /// Notifications created while the document is loading count as
    /// dismissed until the wrapper is mounted.
    #[must_use]
    pub fn is_dismissed(&self, id: &NotificationId) -> bool {
        !self.renderer.is_attached(&self.document, id)
    }

    /// True if a notification with this id was ever created.
    #[must_use]
    pub fn exists(&self, id: &NotificationId) -> bool {
        self.lifecycle.exists(id)
    }

    #[must_use]
    pub fn phase(&self, id: &NotificationId) -> Option<Phase> {
        self.lifecycle.phase(id)
    }

    #[must_use]
    pub fn options(&self, id: &NotificationId) -> Option<&Options> {
        self.lifecycle.options(id)
    }

    #[must_use]
    pub fn default_options(&self) -> &Options {
        self.lifecycle.defaults()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Root element of the notification.
    #[must_use]
    pub fn element(&self, id: &NotificationId) -> Option<NodeId> {
        self.renderer.parts(id).map(|parts| parts.root)
    }

    /// All elements of the notification.
    #[must_use]
    pub fn parts(&self, id: &NotificationId) -> Option<Parts> {
        self.renderer.parts(id)
    }

    #[must_use]
    pub fn wrapper(&self) -> Option<NodeId> {
        self.renderer.wrapper()
    }

    /// Whether the viewport is wider than the mobile breakpoint.
    #[must_use]
    pub fn is_wide(&self) -> bool {
        self.renderer.is_wide(&self.document)
    }

    /// Attached notifications in document order.
    pub fn stacked(&self) -> impl Iterator<Item = (NotificationId, Parts)> + '_ {
        let children: &[NodeId] = match self.renderer.wrapper() {
            Some(wrapper) => self.document.children(wrapper),
            None => &[],
        };
        children.iter().filter_map(|node| {
            let id = self
                .document
                .id(*node)
                .and_then(NotificationId::from_element_id)?;
            let parts = self.renderer.parts(&id)?;
            Some((id, parts))
        })
    }

    /// When the earliest pending timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.lifecycle.next_deadline()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.lifecycle.has_pending_timers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::render::{INBOUND_CLASS, NOT_DISMISSABLE_CLASS, NO_HOVER_CLASS};
    use crate::notifications::timer::ManualClock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingNavigator {
        visited: Rc<RefCell<Vec<String>>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, url: &Url) -> Result<()> {
            self.visited.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct FailingNavigator;

    impl Navigator for FailingNavigator {
        fn navigate(&mut self, url: &Url) -> Result<()> {
            Err(Error::Navigation(format!("no browser for {url}")))
        }
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup(width: f32) -> (Manager, ManualClock, RecordingNavigator) {
        let clock = ManualClock::new();
        let navigator = RecordingNavigator::default();
        let manager = Manager::new(Document::new(width))
            .with_clock(clock.clone())
            .with_navigator(navigator.clone())
            .with_seed(1);
        (manager, clock, navigator)
    }

    fn id(raw: &str) -> NotificationId {
        NotificationId::parse(raw).unwrap()
    }

    #[test]
    fn new_manager_mounts_wrapper_on_ready_document() {
        let (manager, _, _) = setup(1024.0);
        let wrapper = manager.wrapper().unwrap();
        assert_eq!(
            manager.document().get_element_by_id("toast-wrapper"),
            Some(wrapper)
        );
    }

    #[test]
    fn added_notification_is_rendered_and_enters_on_tick() {
        let (mut manager, _, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().title("Hi").text("there"));
        let parts = manager.parts(&id).unwrap();
        let doc = manager.document();

        assert!(manager.exists(&id));
        assert!(!manager.is_dismissed(&id));
        assert_eq!(
            doc.get_element_by_id(&id.element_id()),
            Some(parts.root)
        );
        assert_eq!(doc.text(parts.title), "Hi");
        assert_eq!(doc.text(parts.text), "there");
        assert!(!doc.has_class(parts.root, INBOUND_CLASS));

        assert!(manager.tick());
        assert!(manager.document().has_class(parts.root, INBOUND_CLASS));
    }

    #[test]
    fn removal_detaches_after_exit_animation() {
        let (mut manager, clock, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().sticky());
        manager.tick();
        let root = manager.element(&id).unwrap();

        assert!(manager.remove_notification(&id));
        assert!(!manager.remove_notification(&id));
        assert!(!manager.document().has_class(root, INBOUND_CLASS));
        assert_eq!(manager.phase(&id), Some(Phase::Exiting));

        clock.advance(ms(499));
        manager.tick();
        assert!(!manager.is_dismissed(&id));

        clock.advance(ms(1));
        manager.tick();
        assert!(manager.is_dismissed(&id));
        assert!(manager.exists(&id));
        assert_eq!(manager.document().parent(root), None);
    }

    #[test]
    fn remove_unknown_returns_false() {
        let (mut manager, _, _) = setup(1024.0);
        assert!(!manager.remove_notification(&id("ghost")));
        assert!(manager.is_dismissed(&id("ghost")));
    }

    #[test]
    fn reopen_during_exit_keeps_notification() {
        let (mut manager, clock, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().sticky());
        manager.tick();
        manager.remove_notification(&id);

        clock.advance(ms(200));
        manager.reopen_notification(&id);
        clock.advance(ms(1000));
        manager.tick();

        let root = manager.element(&id).unwrap();
        assert!(!manager.is_dismissed(&id));
        assert!(manager.document().has_class(root, INBOUND_CLASS));
        assert!(manager.document().style(root).is_empty());
    }

    #[test]
    fn reopen_after_detach_attaches_again() {
        let (mut manager, clock, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().sticky());
        manager.remove_notification(&id);
        clock.advance(ms(500));
        manager.tick();

        manager.reopen_notification(&id);

        assert!(!manager.is_dismissed(&id));
        let root = manager.element(&id).unwrap();
        assert_eq!(manager.document().parent(root), manager.wrapper());
    }

    #[test]
    fn timeout_triggers_removal() {
        let (mut manager, clock, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().timeout(ms(100)));

        clock.advance(ms(99));
        manager.tick();
        assert_eq!(manager.phase(&id), Some(Phase::Active));

        clock.advance(ms(1));
        manager.tick();
        assert_eq!(manager.phase(&id), Some(Phase::Exiting));
    }

    #[test]
    fn single_field_setters_keep_other_fields() {
        let (mut manager, _, _) = setup(1024.0);
        let id = manager.add_notification(
            OptionsPatch::new()
                .title("A")
                .text("body")
                .action("https://example.org/"),
        );

        manager.set_title(&id, "B");
        manager.set_timeout(&id, None);

        let options = manager.options(&id).unwrap();
        assert_eq!(options.title, "B");
        assert_eq!(options.text, "body");
        assert_eq!(options.timeout, None);
        assert!(matches!(options.action, Action::Navigate(ref url) if url == "https://example.org/"));

        manager.set_text(&id, "new body");
        assert_eq!(manager.options(&id).unwrap().text, "new body");
    }

    #[test]
    fn defaults_are_inherited_on_first_edit() {
        let (mut manager, _, _) = setup(1024.0);
        manager.set_default_options(OptionsPatch::new().timeout(ms(5000)));

        let id = manager.add_notification(OptionsPatch::new().title("A"));

        let options = manager.options(&id).unwrap();
        assert_eq!(options.timeout, Some(ms(5000)));
        assert_eq!(options.title, "A");
        assert_eq!(manager.default_options().timeout, Some(ms(5000)));
    }

    #[test]
    fn edit_with_caller_id_upserts() {
        let (mut manager, _, _) = setup(1024.0);
        let mine = id("upload");

        manager.edit_notification(&mine, OptionsPatch::new().title("Uploading"));

        assert!(manager.exists(&mine));
        let parts = manager.parts(&mine).unwrap();
        assert_eq!(manager.document().text(parts.title), "Uploading");
    }

    #[test]
    fn clicking_close_dismisses_dismissable_notification() {
        let (mut manager, _, navigator) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().action("https://example.org/"));
        let parts = manager.parts(&id).unwrap();

        assert_eq!(
            manager.handle_click(parts.close_icon),
            ClickOutcome::Dismissed(id.clone())
        );
        assert_eq!(manager.phase(&id), Some(Phase::Exiting));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn clicking_close_of_non_dismissable_runs_action() {
        let (mut manager, _, navigator) = setup(1024.0);
        let id = manager.add_notification(
            OptionsPatch::new()
                .dismissable(false)
                .action("https://example.org/docs"),
        );
        let parts = manager.parts(&id).unwrap();
        assert!(manager
            .document()
            .has_class(parts.root, NOT_DISMISSABLE_CLASS));

        assert_eq!(
            manager.handle_click(parts.close),
            ClickOutcome::Navigated(id.clone())
        );
        assert_eq!(manager.phase(&id), Some(Phase::Active));
        assert_eq!(
            navigator.visited.borrow().as_slice(),
            ["https://example.org/docs"]
        );
    }

    #[test]
    fn clicking_body_invokes_callback_with_id() {
        let (mut manager, _, _) = setup(1024.0);
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let id = manager.add_notification(
            OptionsPatch::new().on_click(move |id| *sink.borrow_mut() = Some(id.clone())),
        );
        let parts = manager.parts(&id).unwrap();

        assert_eq!(
            manager.handle_click(parts.text),
            ClickOutcome::Invoked(id.clone())
        );
        assert_eq!(seen.borrow().as_ref(), Some(&id));
    }

    #[test]
    fn clicking_without_action_does_nothing() {
        let (mut manager, _, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new());
        let root = manager.element(&id).unwrap();

        assert_eq!(manager.handle_click(root), ClickOutcome::NoAction(id.clone()));
        assert_eq!(manager.phase(&id), Some(Phase::Active));
    }

    #[test]
    fn invalid_url_is_reported_not_propagated() {
        let (mut manager, _, navigator) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new().action("not a url"));
        let root = manager.element(&id).unwrap();

        assert_eq!(manager.handle_click(root), ClickOutcome::Invalid(id));
        assert!(navigator.visited.borrow().is_empty());
    }

    #[test]
    fn navigator_failure_is_reported() {
        let mut manager = Manager::new(Document::new(1024.0)).with_navigator(FailingNavigator);
        let id = manager.add_notification(OptionsPatch::new().action("https://example.org/"));
        let root = manager.element(&id).unwrap();

        assert_eq!(manager.handle_click(root), ClickOutcome::Invalid(id));
    }

    #[test]
    fn clicks_outside_notifications_are_ignored() {
        let (mut manager, _, _) = setup(1024.0);
        let wrapper = manager.wrapper().unwrap();
        let body = manager.document().body();

        assert_eq!(manager.handle_click(wrapper), ClickOutcome::Ignored);
        assert_eq!(manager.handle_click(body), ClickOutcome::Ignored);
    }

    #[test]
    fn clicks_on_detached_notifications_are_ignored() {
        let (mut manager, clock, _) = setup(1024.0);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let id = manager.add_notification(
            OptionsPatch::new()
                .sticky()
                .on_click(move |_| counter.set(counter.get() + 1)),
        );
        let root = manager.element(&id).unwrap();
        manager.remove_notification(&id);
        clock.advance(ms(500));
        manager.tick();

        assert_eq!(manager.handle_click(root), ClickOutcome::Ignored);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn clicks_on_nodes_of_another_document_are_ignored() {
        let (mut manager, _, _) = setup(1024.0);
        manager.add_notification(OptionsPatch::new());
        let mut other = Document::new(1024.0);
        let foreign = (0..64)
            .map(|_| other.create_element("div"))
            .last()
            .unwrap();

        assert_eq!(manager.handle_click(foreign), ClickOutcome::Ignored);
        manager.handle_message(&Message::Clicked(foreign));
    }

    #[test]
    fn close_click_while_exiting_is_ignored() {
        let (mut manager, _, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new());
        let close = manager.parts(&id).unwrap().close;
        manager.remove_notification(&id);

        assert_eq!(manager.handle_click(close), ClickOutcome::Ignored);
    }

    #[test]
    fn placement_follows_breakpoint() {
        let (mut manager, _, _) = setup(1024.0);
        let first = manager.add_notification(OptionsPatch::new());
        let second = manager.add_notification(OptionsPatch::new());
        let order: Vec<NotificationId> = manager.stacked().map(|(id, _)| id).collect();
        assert_eq!(order, vec![first.clone(), second.clone()]);

        manager.resize(400.0);
        let third = manager.add_notification(OptionsPatch::new());
        let order: Vec<NotificationId> = manager.stacked().map(|(id, _)| id).collect();
        assert_eq!(order, vec![third, first, second]);
    }

    #[test]
    fn exit_margin_depends_on_viewport() {
        let (mut manager, _, _) = setup(400.0);
        let id = manager.add_notification(OptionsPatch::new().title("Narrow"));
        let root = manager.element(&id).unwrap();
        let height = manager.document().rendered_height(root);

        manager.remove_notification(&id);

        let style = manager.document().style(root);
        assert_eq!(style.margin_top, Some(-height));
        assert_eq!(style.margin_bottom, None);
    }

    #[test]
    fn touch_devices_get_no_hover_class() {
        let (mut manager, _, _) = setup(1024.0);
        manager.set_touch_device(true);
        let id = manager.add_notification(OptionsPatch::new());
        let root = manager.element(&id).unwrap();

        assert!(manager.document().has_class(root, NO_HOVER_CLASS));
    }

    #[test]
    fn loading_document_defers_mount() {
        let clock = ManualClock::new();
        let mut manager = Manager::new(Document::loading(1024.0)).with_clock(clock);
        let first = manager.add_notification(OptionsPatch::new());
        let second = manager.add_notification(OptionsPatch::new());
        assert_eq!(manager.wrapper(), None);
        assert!(!manager
            .document()
            .is_connected(manager.element(&first).unwrap()));
        assert_eq!(manager.document().parent(manager.element(&first).unwrap()), None);
        assert!(manager.is_dismissed(&first));
        assert_eq!(manager.phase(&first), Some(Phase::Active));

        manager.set_ready_state(ReadyState::Interactive);
        assert!(!manager.is_dismissed(&first));
        assert!(!manager.is_dismissed(&second));

        let order: Vec<NotificationId> = manager.stacked().map(|(id, _)| id).collect();
        assert_eq!(order, vec![first, second]);
    }

    #[test]
    fn with_config_applies_defaults_and_breakpoint() {
        let mut config = Config::default();
        config.defaults.timeout_ms = Some(0);
        config.defaults.title = Some("Notice".into());
        config.layout.mobile_breakpoint_px = Some(2000.0);

        let mut manager = Manager::new(Document::new(1024.0))
            .with_clock(ManualClock::new())
            .with_config(&config);
        let first = manager.add_notification(OptionsPatch::new());
        let second = manager.add_notification(OptionsPatch::new());

        assert_eq!(manager.options(&first).unwrap().timeout, None);
        assert_eq!(manager.options(&first).unwrap().title, "Notice");
        // 1024 px is below the configured breakpoint: newest first.
        let order: Vec<NotificationId> = manager.stacked().map(|(id, _)| id).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn handle_message_routes_clicks_and_ticks() {
        let (mut manager, _, _) = setup(1024.0);
        let id = manager.add_notification(OptionsPatch::new());
        let parts = manager.parts(&id).unwrap();

        manager.handle_message(&Message::Tick);
        assert!(manager.document().has_class(parts.root, INBOUND_CLASS));

        manager.handle_message(&Message::Clicked(parts.close));
        assert_eq!(manager.phase(&id), Some(Phase::Exiting));
    }

    #[test]
    fn next_deadline_reports_earliest_timer() {
        let (mut manager, clock, _) = setup(1024.0);
        assert!(!manager.has_pending_timers());

        manager.add_notification(OptionsPatch::new().timeout(ms(300)));
        manager.tick();

        assert_eq!(manager.next_deadline(), Some(clock.now() + ms(300)));
    }
}
