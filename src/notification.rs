// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, its lifecycle `Stage`
//! state machine, and the per-notification dismissal configuration.

use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Stage of a notification's display lifecycle.
///
/// Transitions are monotonic: once an entry leaves `Active` it never
/// returns. Removal from the list is not a stage; a spliced entry simply
/// ceases to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Displayed normally, timers may be pending.
    #[default]
    Active,
    /// Removal was requested; the exit animation has not started yet.
    Removal,
    /// Exit animation is playing; the entry is spliced when it ends.
    SlidingExit,
    /// Touch-driven exit visual. Does not lead to removal by itself.
    TouchSlidingExit,
}

impl Stage {
    /// Returns whether the entry has left the `Active` stage.
    #[must_use]
    pub fn is_exiting(self) -> bool {
        !matches!(self, Stage::Active)
    }
}

/// Screen corner a notification is anchored to.
///
/// Under the mobile layout the four corners collapse into a top and a
/// bottom container (see [`crate::layout::Slot`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Auto-dismiss configuration.
///
/// A zero duration disables the timer, same as leaving the configuration
/// out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismiss {
    pub duration: Duration,
}

/// Which user interactions are permitted to dismiss a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dismissable {
    pub click: bool,
    pub touch: bool,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier, assigned at construction.
    id: NotificationId,
    /// Current lifecycle stage; mutated only by the manager.
    stage: Stage,
    /// Kind name, resolved against the kind registry at render time.
    kind: String,
    /// Display text. Opaque to the lifecycle logic.
    content: String,
    /// Anchor corner.
    position: Position,
    /// Auto-dismiss configuration, if any.
    dismiss: Option<Dismiss>,
    /// Interaction dismissal flags.
    dismissable: Dismissable,
    /// Set during a reflow pass. Informational only.
    resized: bool,
}

impl Notification {
    /// Creates a new notification of the given kind.
    pub fn new(kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            stage: Stage::default(),
            kind: kind.into(),
            content: content.into(),
            position: Position::default(),
            dismiss: None,
            dismissable: Dismissable::default(),
            resized: false,
        }
    }

    /// Creates a success notification.
    pub fn success(content: impl Into<String>) -> Self {
        Self::new("success", content)
    }

    /// Creates an info notification.
    pub fn info(content: impl Into<String>) -> Self {
        Self::new("info", content)
    }

    /// Creates a warning notification.
    pub fn warning(content: impl Into<String>) -> Self {
        Self::new("warning", content)
    }

    /// Creates a danger notification.
    pub fn danger(content: impl Into<String>) -> Self {
        Self::new("danger", content)
    }

    /// Anchors the notification to the given corner.
    #[must_use]
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Enables auto-dismissal after `duration`.
    ///
    /// A zero duration leaves the notification without a timer.
    #[must_use]
    pub fn dismiss_after(mut self, duration: Duration) -> Self {
        self.dismiss = Some(Dismiss { duration });
        self
    }

    /// Allows the user to dismiss this notification by clicking it.
    #[must_use]
    pub fn dismissable_on_click(mut self) -> Self {
        self.dismissable.click = true;
        self
    }

    /// Marks touch interaction as a permitted dismissal gesture.
    #[must_use]
    pub fn dismissable_on_touch(mut self) -> Self {
        self.dismissable.touch = true;
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the current lifecycle stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the kind name.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the display text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the anchor corner.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the auto-dismiss configuration, if any.
    #[must_use]
    pub fn dismiss(&self) -> Option<Dismiss> {
        self.dismiss
    }

    /// Returns the interaction dismissal flags.
    #[must_use]
    pub fn dismissable(&self) -> Dismissable {
        self.dismissable
    }

    /// Returns whether the last reflow pass touched this notification.
    #[must_use]
    pub fn resized(&self) -> bool {
        self.resized
    }

    /// Advances the lifecycle stage. Never moves back to `Active`.
    pub(crate) fn set_stage(&mut self, stage: Stage) {
        debug_assert!(stage.is_exiting() || !self.stage.is_exiting());
        self.stage = stage;
    }

    /// Marks this notification as touched by a reflow pass.
    pub(crate) fn mark_resized(&mut self) {
        self.resized = true;
    }
}
