// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the notification lifecycle.
//!
//! The toaster needs two event sources from the host runtime: a periodic
//! tick driving timers and delayed stage transitions, and window resize
//! events driving the reflow pass. The subscription lives exactly as long
//! as the host keeps returning it from its own `subscription` function.

use crate::config::defaults;
use crate::toaster::Message;
use iced::{event, time, window, Subscription};

/// Creates the combined tick + resize subscription.
pub fn subscription() -> Subscription<Message> {
    Subscription::batch([tick(), resize()])
}

/// Periodic lifecycle tick.
///
/// Hosts that know the toaster is empty can skip subscribing to avoid
/// needless wakeups.
pub fn tick() -> Subscription<Message> {
    time::every(defaults::TICK_INTERVAL).map(Message::Tick)
}

/// Window resize events, routed to the reflow pass.
pub fn resize() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size.width)),
        _ => None,
    })
}
