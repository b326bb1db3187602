// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Toaster` owns the ordered notification list, assigns layout state,
//! and drives every stage transition. Delayed transitions (the two-phase
//! manual removal and the post-exit splice) are modelled as explicit
//! pending entries keyed by notification id, applied by [`Toaster::tick`]
//! under stage guards so a stale deadline can never move an entry that
//! already transitioned or disappeared.

use crate::config::{defaults, Config};
use crate::item::Item;
use crate::kinds::{KindRegistry, KindStyle};
use crate::layout;
use crate::notification::{Notification, NotificationId, Stage};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// A toast was clicked.
    Clicked(NotificationId),
    /// A touch interaction ended on a toast.
    ///
    /// Iced delivers touch through its global event stream without
    /// per-widget hit testing, so no built-in widget emits this; hosts
    /// that track which toast a finger lifted from send it themselves.
    TouchEnded(NotificationId),
    /// Manual removal request (the dismiss button path).
    Dismiss(NotificationId),
    /// Viewport width changed.
    Resized(f32),
    /// Periodic lifecycle tick.
    Tick(Instant),
}

/// Host-facing callbacks, returned from [`Toaster::update`] and
/// [`Toaster::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The deferred click callback for a toast came due.
    Clicked(NotificationId),
    /// A toast's auto-dismiss timer fired.
    TimedOut(NotificationId),
    /// A toast finished its exit window and left the list.
    Dismissed(NotificationId),
}

/// A delayed stage transition, cancelled implicitly when its entry is
/// spliced.
#[derive(Debug, Clone, Copy)]
struct Pending {
    id: NotificationId,
    due: Instant,
    change: Change,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    /// `Removal` -> `SlidingExit`, guarded on the stage still being
    /// `Removal`.
    BeginExit,
    /// Delete the entry from the list.
    Splice,
}

/// Manages the notification list, layout state, and stage transitions.
#[derive(Debug, Clone)]
pub struct Toaster {
    /// Insertion order is display order within a position group.
    items: Vec<Item>,
    /// Pending delayed transitions, unordered; sorted by deadline on apply.
    pending: Vec<Pending>,
    width: f32,
    responsive: bool,
    mobile_breakpoint: f32,
    kinds: KindRegistry,
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending: Vec::new(),
            width: defaults::DEFAULT_WIDTH,
            responsive: false,
            mobile_breakpoint: defaults::MOBILE_BREAKPOINT,
            kinds: KindRegistry::new(),
        }
    }
}

impl Toaster {
    /// Creates an empty toaster with the default desktop layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a toaster from a resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.width.unwrap_or(defaults::DEFAULT_WIDTH),
            responsive: config.responsive.unwrap_or(false),
            mobile_breakpoint: config
                .mobile_breakpoint
                .unwrap_or(defaults::MOBILE_BREAKPOINT),
            ..Self::default()
        }
    }

    /// Sets the initial viewport width.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Enables responsive mobile/desktop layout switching.
    #[must_use]
    pub fn responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    /// Registers a user-defined notification kind.
    #[must_use]
    pub fn with_kind(mut self, name: impl Into<String>, style: KindStyle) -> Self {
        self.kinds.register(name, style);
        self
    }

    /// Adds a notification, returning its id.
    ///
    /// Uses the wall clock to arm the auto-dismiss timer; tests drive
    /// virtual time through [`Toaster::add_at`].
    pub fn add(&mut self, notification: Notification) -> NotificationId {
        self.add_at(notification, Instant::now())
    }

    /// Adds a notification with an explicit clock reading.
    ///
    /// An id already present in the list is not inserted twice; the add is
    /// a silent no-op.
    pub fn add_at(&mut self, notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        if self.get(id).is_none() {
            self.items.push(Item::new(notification, now));
        }
        id
    }

    /// Requests removal of a notification.
    ///
    /// The entry moves to `Removal` immediately, to `SlidingExit` after
    /// [`defaults::REMOVAL_DELAY`], and out of the list once the exit
    /// window elapses. Touched entries (`TouchSlidingExit`) are removable
    /// too; unknown ids and entries already past `Removal` are no-ops.
    pub fn remove(&mut self, id: NotificationId, now: Instant) {
        let Some(notification) = self.get_mut(id) else {
            return;
        };
        match notification.stage() {
            Stage::Active | Stage::TouchSlidingExit => {}
            Stage::Removal | Stage::SlidingExit => return,
        }

        notification.set_stage(Stage::Removal);
        self.pending.push(Pending {
            id,
            due: now + defaults::REMOVAL_DELAY,
            change: Change::BeginExit,
        });
        self.pending.push(Pending {
            id,
            due: now + defaults::REMOVAL_DELAY + defaults::EXIT_ANIMATION,
            change: Change::Splice,
        });
    }

    /// Applies an expired auto-dismiss timer: the entry skips `Removal`
    /// and goes straight into its exit animation.
    pub fn timeout_removal(&mut self, id: NotificationId, now: Instant) {
        self.begin_exit(id, now);
    }

    /// Click-triggered removal. Only entries whose `dismissable.click`
    /// flag is set are affected.
    pub fn removal(&mut self, id: NotificationId, now: Instant) {
        let allowed = self
            .get(id)
            .is_some_and(|notification| notification.dismissable().click);
        if allowed {
            self.begin_exit(id, now);
        }
    }

    /// Entry point for a toast click.
    ///
    /// Forwards to [`Toaster::removal`] when the entry is click-dismissable
    /// and always arms the deferred host click callback, delivered as
    /// [`Event::Clicked`] once [`defaults::CLICK_NOTIFY_DELAY`] elapses.
    pub fn click(&mut self, id: NotificationId, now: Instant) {
        let Some(item) = self.items.iter_mut().find(|item| item.notification().id() == id)
        else {
            return;
        };
        item.arm_click_notify(now + defaults::CLICK_NOTIFY_DELAY);
        self.removal(id, now);
    }

    /// Marks the end of a touch interaction on a toast.
    ///
    /// The entry shows the touch exit visual but is not removed; touch
    /// exit is a transition notice, not a removal request.
    pub fn touch_end(&mut self, id: NotificationId) {
        if let Some(notification) = self.get_mut(id) {
            if notification.stage() == Stage::Active {
                notification.set_stage(Stage::TouchSlidingExit);
            }
        }
    }

    /// Reflow pass: records the new viewport width and marks every
    /// notification as resized.
    pub fn handle_resize(&mut self, width: f32) {
        self.width = width;
        for item in &mut self.items {
            item.notification_mut().mark_resized();
        }
    }

    /// Applies every due deadline and delayed transition.
    ///
    /// Should be called periodically; the [`crate::subscription`] module
    /// provides a ready-made tick source. Returns the host callbacks that
    /// came due.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();

        // Expired auto-dismiss timers. Stale deadlines (entry no longer
        // active) are consumed silently inside the item.
        let timed_out: Vec<NotificationId> = self
            .items
            .iter_mut()
            .filter_map(|item| item.take_due_auto_dismiss(now))
            .collect();
        for id in timed_out {
            self.timeout_removal(id, now);
            events.push(Event::TimedOut(id));
        }

        // Deferred click callbacks.
        for item in &mut self.items {
            if item.take_due_click_notify(now) {
                events.push(Event::Clicked(item.notification().id()));
            }
        }

        // Delayed stage transitions, applied in deadline order so a
        // removal's BeginExit lands before its Splice even on a late tick.
        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|pending| {
            if pending.due <= now {
                due.push(*pending);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|pending| pending.due);

        for pending in due {
            match pending.change {
                Change::BeginExit => {
                    if let Some(notification) = self.get_mut(pending.id) {
                        if notification.stage() == Stage::Removal {
                            notification.set_stage(Stage::SlidingExit);
                        }
                    }
                }
                Change::Splice => {
                    if self.get(pending.id).is_some() {
                        self.splice(pending.id);
                        events.push(Event::Dismissed(pending.id));
                    }
                }
            }
        }

        events
    }

    /// Handles a notification message.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::Clicked(id) => {
                self.click(id, Instant::now());
                Vec::new()
            }
            Message::TouchEnded(id) => {
                self.touch_end(id);
                Vec::new()
            }
            Message::Dismiss(id) => {
                self.remove(id, Instant::now());
                Vec::new()
            }
            Message::Resized(width) => {
                self.handle_resize(width);
                Vec::new()
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Removes everything, cancelling all pending transitions.
    pub fn clear(&mut self) {
        self.items.clear();
        self.pending.clear();
    }

    /// Returns the notifications in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().map(Item::notification)
    }

    /// Looks up a notification by id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|notification| notification.id() == id)
    }

    /// Returns the pending auto-dismiss deadline for an entry, if any.
    #[must_use]
    pub fn auto_dismiss_at(&self, id: NotificationId) -> Option<Instant> {
        self.items
            .iter()
            .find(|item| item.notification().id() == id)
            .and_then(Item::auto_dismiss_at)
    }

    /// Returns the number of notifications in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the tracked viewport width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns whether the mobile layout is active.
    #[must_use]
    pub fn is_mobile_layout(&self) -> bool {
        layout::is_mobile(self.responsive, self.width, self.mobile_breakpoint)
    }

    /// Returns the kind registry.
    #[must_use]
    pub fn kinds(&self) -> &KindRegistry {
        &self.kinds
    }

    /// `Active` -> `SlidingExit` with the splice scheduled after the exit
    /// window. Shared by the timeout and click removal paths.
    fn begin_exit(&mut self, id: NotificationId, now: Instant) {
        let Some(notification) = self.get_mut(id) else {
            return;
        };
        if notification.stage() != Stage::Active {
            return;
        }

        notification.set_stage(Stage::SlidingExit);
        self.pending.push(Pending {
            id,
            due: now + defaults::EXIT_ANIMATION,
            change: Change::Splice,
        });
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.items
            .iter_mut()
            .map(Item::notification_mut)
            .find(|notification| notification.id() == id)
    }

    /// Deletes an entry and everything scheduled against it.
    fn splice(&mut self, id: NotificationId) {
        self.items.retain(|item| item.notification().id() != id);
        self.pending.retain(|pending| pending.id != id);
    }
}
