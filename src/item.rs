// SPDX-License-Identifier: MPL-2.0
//! Per-notification lifecycle state.
//!
//! An `Item` wraps one notification together with its pending deadlines:
//! the one-shot auto-dismiss timer armed at construction, and the deferred
//! host click callback. Deadlines are plain `Instant`s polled by the
//! manager's tick, so dropping the item cancels everything it armed.

use crate::notification::{Notification, NotificationId, Stage};
use std::time::Instant;

#[derive(Debug, Clone)]
pub(crate) struct Item {
    notification: Notification,
    /// Auto-dismiss deadline; armed once, cleared when it fires.
    auto_dismiss_at: Option<Instant>,
    /// Deferred host click callback deadline.
    click_notify_at: Option<Instant>,
}

impl Item {
    /// Wraps a notification, arming the auto-dismiss timer when its
    /// configuration carries a positive duration.
    pub(crate) fn new(notification: Notification, now: Instant) -> Self {
        let auto_dismiss_at = notification
            .dismiss()
            .filter(|dismiss| !dismiss.duration.is_zero())
            .map(|dismiss| now + dismiss.duration);

        Self {
            notification,
            auto_dismiss_at,
            click_notify_at: None,
        }
    }

    pub(crate) fn notification(&self) -> &Notification {
        &self.notification
    }

    pub(crate) fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }

    pub(crate) fn auto_dismiss_at(&self) -> Option<Instant> {
        self.auto_dismiss_at
    }

    /// Consumes a due auto-dismiss deadline.
    ///
    /// Returns the notification id when the timeout should take effect.
    /// A deadline firing after the entry already left `Active` is
    /// suppressed (the stale-timer guard); it is still cleared so it can
    /// never fire twice.
    pub(crate) fn take_due_auto_dismiss(&mut self, now: Instant) -> Option<NotificationId> {
        match self.auto_dismiss_at {
            Some(due) if due <= now => {
                self.auto_dismiss_at = None;
                (self.notification.stage() == Stage::Active).then(|| self.notification.id())
            }
            _ => None,
        }
    }

    /// Arms the deferred host click callback.
    pub(crate) fn arm_click_notify(&mut self, due: Instant) {
        self.click_notify_at = Some(due);
    }

    /// Consumes a due click callback deadline. Unlike the auto-dismiss
    /// timer this fires regardless of stage.
    pub(crate) fn take_due_click_notify(&mut self, now: Instant) -> bool {
        match self.click_notify_at {
            Some(due) if due <= now => {
                self.click_notify_at = None;
                true
            }
            _ => false,
        }
    }
}
