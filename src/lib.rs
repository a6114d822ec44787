// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` provides dismissible, auto-expiring toast notifications.
//!
//! Notifications are tracked by id, rendered into a small retained document
//! and drawn with Iced. The [`notifications`] module holds the manager and
//! can be used without any window; [`ui`] and [`app`] draw it.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod notifications;
pub mod ui;
