// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` provides transient toast notifications for the Iced GUI
//! toolkit: positional containers, timed auto-dismissal, click/touch
//! dismissal, and responsive mobile/desktop layout switching.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` record and its lifecycle `Stage`
//! - [`toaster`] - `Toaster` manager for list and lifecycle management
//! - [`toast`] - Toast widgets for rendering notifications
//! - [`layout`] - Responsive positional container selection
//! - [`subscription`] - Tick and resize subscriptions for the host runtime
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::{Notification, Toaster};
//!
//! // Create a toaster
//! let mut toaster = Toaster::new().responsive(true);
//!
//! // Push a notification
//! toaster.add(Notification::success("Image saved successfully"));
//!
//! // In your view function, render the overlay
//! let overlay = toaster.view().map(Message::Toaster);
//!
//! // In your subscription function, keep the lifecycle running
//! let ticks = iced_toaster::subscription::subscription().map(Message::Toaster);
//! ```
//!
//! # Design Considerations
//!
//! - Stage transitions are monotonic and applied under guards, so stale
//!   timers never move an entry that already transitioned or disappeared
//! - All lifecycle entry points take an explicit `Instant`, keeping tests
//!   on virtual time
//! - Layouts are exclusive: two mobile containers or four desktop
//!   quadrants, never both

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod kinds;
pub mod layout;
pub mod notification;
pub mod subscription;
pub mod toast;
pub mod toaster;

mod item;

pub use kinds::{KindRegistry, KindStyle};
pub use notification::{Dismiss, Dismissable, Notification, NotificationId, Position, Stage};
pub use toast::Toast;
pub use toaster::{Event, Message, Toaster};
