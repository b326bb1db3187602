// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Lifecycle delays driving the stage state machine
//! - **Layout**: Viewport breakpoints and initial measurements

use std::time::Duration;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay between a removal request and the start of the exit animation.
pub const REMOVAL_DELAY: Duration = Duration::from_millis(100);

/// Duration of the exit animation window before an entry is spliced.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(200);

/// Delay before the host click callback fires, letting click feedback render.
pub const CLICK_NOTIFY_DELAY: Duration = Duration::from_millis(100);

/// Interval of the periodic lifecycle tick subscription.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Widest viewport (in px) still considered mobile when responsive
/// switching is enabled.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Initial viewport width assumed before the first resize event arrives.
pub const DEFAULT_WIDTH: f32 = 1024.0;
