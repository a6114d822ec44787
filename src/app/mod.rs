// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast stack.
//!
//! The `App` owns a notification [`Manager`] over a document sized to the
//! window. Buttons add and edit notifications; the toast overlay forwards
//! clicks back to the manager, and a tick subscription drives its timers
//! while any are pending.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config;
use crate::notifications::{Document, Manager, NotificationId, OptionsPatch};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast::Toast;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// URL opened by the "Link" demo notification.
pub const DEMO_URL: &str = "https://github.com/iced-rs/iced";

/// Root Iced application state.
pub struct App {
    notifications: Manager,
    /// Most recently added notification, target of the edit buttons.
    last: Option<NotificationId>,
    added: u32,
    /// Ids reported by callback notifications, oldest first.
    clicked: Rc<RefCell<Vec<NotificationId>>>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("last", &self.last)
            .field("added", &self.added)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from the configuration file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(warning) = &config_warning {
            log::warn!("using default configuration: {warning}");
        }

        let document = Document::new(WINDOW_DEFAULT_WIDTH as f32).with_touch(flags.touch);
        let notifications = Manager::new(document).with_config(&config);

        let mut app = Self::with_manager(notifications);
        app.config_warning = config_warning;
        (app, Task::none())
    }

    /// Creates the application around an existing manager.
    pub fn with_manager(notifications: Manager) -> Self {
        Self {
            notifications,
            last: None,
            added: 0,
            clicked: Rc::new(RefCell::new(Vec::new())),
            config_warning: None,
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn last(&self) -> Option<&NotificationId> {
        self.last.as_ref()
    }

    /// Ids reported by callback notifications so far.
    #[must_use]
    pub fn clicked(&self) -> Vec<NotificationId> {
        self.clicked.borrow().clone()
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_pending_timers()),
        ])
    }

    fn add(&mut self, patch: OptionsPatch) {
        self.added += 1;
        let patch = patch.title(format!("Notification #{}", self.added));
        let id = self.notifications.add_notification(patch);
        log::info!("added notification {id}");
        self.last = Some(id);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::AddPlain => {
                self.add(OptionsPatch::new().text("Closes after the configured timeout."));
            }
            Message::AddSticky => {
                self.add(
                    OptionsPatch::new()
                        .text("Stays until you close it.")
                        .sticky(),
                );
            }
            Message::AddLink => {
                self.add(
                    OptionsPatch::new()
                        .text("Click to open the iced repository.")
                        .action(DEMO_URL),
                );
            }
            Message::AddCallback => {
                let clicked = Rc::clone(&self.clicked);
                self.add(
                    OptionsPatch::new()
                        .text("Click to report back to the app.")
                        .sticky()
                        .on_click(move |id| {
                            log::info!("callback notification {id} clicked");
                            clicked.borrow_mut().push(id.clone());
                        }),
                );
            }
            Message::AddLocked => {
                self.add(
                    OptionsPatch::new()
                        .text("Cannot be closed; it expires on its own.")
                        .dismissable(false),
                );
            }
            Message::UpdateLast => {
                if let Some(id) = &self.last {
                    self.notifications
                        .set_text(id, format!("Edited after {} notifications.", self.added));
                }
            }
            Message::RemoveLast => {
                if let Some(id) = &self.last {
                    if !self.notifications.remove_notification(id) {
                        log::debug!("notification {id} is already closing");
                    }
                }
            }
            Message::ReopenLast => {
                if let Some(id) = &self.last {
                    self.notifications.reopen_notification(id);
                }
            }
            Message::WindowResized(size) => {
                self.notifications.resize(size.width);
            }
            Message::Tick(_) => {
                self.notifications.tick();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let add_controls = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Plain")).on_press(Message::AddPlain))
            .push(button(Text::new("Sticky")).on_press(Message::AddSticky))
            .push(button(Text::new("Link")).on_press(Message::AddLink))
            .push(button(Text::new("Callback")).on_press(Message::AddCallback))
            .push(button(Text::new("Locked")).on_press(Message::AddLocked));

        let has_last = self.last.is_some();
        let edit_controls = Row::new()
            .spacing(spacing::XS)
            .push(button(Text::new("Edit last")).on_press_maybe(has_last.then_some(Message::UpdateLast)))
            .push(button(Text::new("Remove last")).on_press_maybe(has_last.then_some(Message::RemoveLast)))
            .push(button(Text::new("Reopen last")).on_press_maybe(has_last.then_some(Message::ReopenLast)));

        let status = match self.clicked.borrow().last() {
            Some(id) => format!("Last callback from notification {id}"),
            None => String::from("No callback notification clicked yet"),
        };

        let mut content = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .push(Text::new("Iced Toasts").size(typography::TITLE_MD))
            .push(add_controls)
            .push(edit_controls)
            .push(Text::new(status).size(typography::BODY));

        if let Some(warning) = &self.config_warning {
            content = content.push(Text::new(warning.as_str()).size(typography::CAPTION));
        }

        Stack::new()
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(Toast::view_overlay(&self.notifications).map(Message::Notification))
            .into()
    }
}
