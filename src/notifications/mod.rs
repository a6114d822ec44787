// SPDX-License-Identifier: MPL-2.0
//! Toast notifications tracked by id.
//!
//! Notifications are banners rendered into a [`Document`]. Each one can be
//! edited while visible, closes itself after a timeout, can be closed by the
//! user when dismissable, and runs an [`Action`] when clicked.
//!
//! # Components
//!
//! - [`id`] - `NotificationId` generation and parsing
//! - [`options`] - `Options`, `OptionsPatch` and click `Action`s
//! - [`timer`] - Deterministic timer queue and clocks
//! - [`lifecycle`] - Records, phases and the changes each operation causes
//! - [`dom`] - The retained document notifications live in
//! - [`render`] - Applies lifecycle changes to the document
//! - [`manager`] - `Manager`, the public entry point
//!
//! # Usage
//!
//! ```
//! use iced_toasts::notifications::{Document, Manager, OptionsPatch};
//!
//! let mut manager = Manager::new(Document::new(1024.0));
//! let id = manager.add_notification(OptionsPatch::new().title("Saved").sticky());
//! assert!(!manager.is_dismissed(&id));
//!
//! manager.remove_notification(&id);
//! ```
//!
//! # Lifecycle
//!
//! - Removal starts a 500 ms exit animation, after which the element is
//!   detached. The record stays, so the notification can be reopened.
//! - Editing an exiting or detached notification shows it again.
//! - Timers fire from `Manager::tick`; call it periodically while
//!   `Manager::has_pending_timers` is true.

pub mod dom;
pub mod id;
pub mod lifecycle;
pub mod manager;
pub mod options;
pub mod render;
pub mod timer;

pub use dom::{Document, InlineStyle, NodeId, ReadyState};
pub use id::NotificationId;
pub use lifecycle::{Change, Phase};
pub use manager::{ClickOutcome, Manager, Message, Navigator, SystemBrowser};
pub use options::{Action, Callback, Options, OptionsPatch};
pub use render::Parts;
pub use timer::{Clock, ManualClock, SystemClock};
