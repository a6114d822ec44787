// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between timer ticks while notifications have pending timers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes window resizes so the manager knows the viewport width.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates the periodic tick subscription driving notification timers.
///
/// Nothing is polled while no timer is pending.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
