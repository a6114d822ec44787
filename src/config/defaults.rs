// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Options**: Default notification options
//! - **Animation**: Entrance and exit timing
//! - **Layout**: Placement breakpoint
//! - **Identifiers**: Notification id shape and element id prefixes

use std::time::Duration;

// ==========================================================================
// Option Defaults
// ==========================================================================

/// Default auto-dismiss timeout for new notifications (in milliseconds).
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Whether new notifications can be closed by the user unless overridden.
pub const DEFAULT_DISMISSABLE: bool = true;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the exit animation. Detachment happens once it elapses.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(500);

/// Delay before the entrance class is applied.
///
/// Zero means "next tick": the host renders the element once without the
/// class so the transition has a starting state.
pub const ENTRANCE_DELAY: Duration = Duration::ZERO;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Viewport width (in pixels) above which the stack grows downward.
/// At or below it, new notifications are inserted at the top.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f32 = 480.0;

/// Minimum accepted breakpoint.
pub const MIN_MOBILE_BREAKPOINT_PX: f32 = 0.0;

/// Maximum accepted breakpoint.
pub const MAX_MOBILE_BREAKPOINT_PX: f32 = 4096.0;

// ==========================================================================
// Identifier Defaults
// ==========================================================================

/// Length of generated notification ids.
pub const ID_LENGTH: usize = 5;

/// Characters generated ids are drawn from.
pub const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Element id of the container holding every notification.
pub const WRAPPER_ID: &str = "toast-wrapper";

/// Prefix of each notification element's id attribute.
pub const ELEMENT_ID_PREFIX: &str = "toast-notification-";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MOBILE_BREAKPOINT_PX >= MIN_MOBILE_BREAKPOINT_PX);
    assert!(DEFAULT_MOBILE_BREAKPOINT_PX <= MAX_MOBILE_BREAKPOINT_PX);
    assert!(ID_LENGTH > 0);
    assert!(ID_CHARSET.len() == 36);
};
