// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the notification manager.
    Notification(notifications::Message),
    /// Add a notification that closes itself after the default timeout.
    AddPlain,
    /// Add a notification that stays until closed.
    AddSticky,
    /// Add a notification opening a URL when clicked.
    AddLink,
    /// Add a notification whose click is reported back to the app.
    AddCallback,
    /// Add a notification without a close control.
    AddLocked,
    /// Change the text of the most recent notification.
    UpdateLast,
    /// Remove the most recent notification.
    RemoveLast,
    /// Show the most recent notification again.
    ReopenLast,
    WindowResized(Size),
    Tick(Instant), // Periodic tick for notification timers
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Treat the device as touch-capable (close controls always shown large).
    pub touch: bool,
}
