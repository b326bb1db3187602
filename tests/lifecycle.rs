// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the notification lifecycle.
//!
//! Time is virtual throughout: a base `Instant` is taken once and every
//! deadline is exercised by ticking with offsets from it, so nothing here
//! sleeps.

use approx::assert_abs_diff_eq;
use iced_toaster::config::defaults;
use iced_toaster::{Event, Notification, Position, Stage, Toaster};
use std::time::{Duration, Instant};

fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

#[test]
fn no_timer_for_absent_or_zero_duration() {
    let mut toaster = Toaster::new();
    let now = Instant::now();

    let plain = toaster.add_at(Notification::info("plain"), now);
    let zero = toaster.add_at(
        Notification::info("zero").dismiss_after(Duration::ZERO),
        now,
    );

    assert!(toaster.auto_dismiss_at(plain).is_none());
    assert!(toaster.auto_dismiss_at(zero).is_none());
}

#[test]
fn exactly_one_timer_for_positive_duration() {
    let mut toaster = Toaster::new();
    let now = Instant::now();

    let id = toaster.add_at(
        Notification::info("timed").dismiss_after(Duration::from_millis(100)),
        now,
    );

    assert_eq!(toaster.auto_dismiss_at(id), Some(at(now, 100)));
}

#[test]
fn auto_dismiss_scenario_runs_to_removal() {
    // One notification with a 100ms duration, ticked every 50ms up to
    // 400ms of virtual time: the timeout fires exactly once and the entry
    // ends up removed, never dangling in Removal.
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(
        Notification::info("timed").dismiss_after(Duration::from_millis(100)),
        now,
    );

    let mut timeouts = 0;
    let mut dismissed = 0;
    for ms in (50..=400).step_by(50) {
        for event in toaster.tick(at(now, ms)) {
            match event {
                Event::TimedOut(event_id) => {
                    assert_eq!(event_id, id);
                    timeouts += 1;
                }
                Event::Dismissed(event_id) => {
                    assert_eq!(event_id, id);
                    dismissed += 1;
                }
                Event::Clicked(_) => panic!("no click was issued"),
            }
        }
    }

    assert_eq!(timeouts, 1);
    assert_eq!(dismissed, 1);
    assert!(toaster.is_empty());
}

#[test]
fn single_late_tick_applies_timeout_but_not_the_splice() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(
        Notification::info("timed").dismiss_after(Duration::from_millis(100)),
        now,
    );

    let events = toaster.tick(at(now, 400));
    assert_eq!(events, vec![Event::TimedOut(id)]);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::SlidingExit);

    // The exit window starts at the tick that applied the timeout.
    let events = toaster.tick(at(now, 400) + defaults::EXIT_ANIMATION);
    assert_eq!(events, vec![Event::Dismissed(id)]);
}

#[test]
fn stale_timeout_is_suppressed_in_exit_stage() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(
        Notification::info("touched").dismiss_after(Duration::from_millis(200)),
        now,
    );

    toaster.touch_end(id);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::TouchSlidingExit);

    let events = toaster.tick(at(now, 400));
    assert!(events.is_empty());
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::TouchSlidingExit);
    assert_eq!(toaster.len(), 1);
}

#[test]
fn manual_removal_is_two_phase_and_deterministic() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(Notification::warning("going"), now);

    toaster.remove(id, now);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::Removal);

    toaster.tick(now + defaults::REMOVAL_DELAY);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::SlidingExit);

    let events = toaster.tick(now + defaults::REMOVAL_DELAY + defaults::EXIT_ANIMATION);
    assert_eq!(events, vec![Event::Dismissed(id)]);
    assert!(toaster.is_empty());
}

#[test]
fn removing_unknown_id_is_not_fatal() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let stray = Notification::info("never added").id();

    toaster.remove(stray, now);
    assert!(toaster.tick(at(now, 1000)).is_empty());
}

#[test]
fn click_with_dismissable_flag_exits_within_the_delay() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(
        Notification::success("tap me").dismissable_on_click(),
        now,
    );

    toaster.click(id, now);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::SlidingExit);

    let events = toaster.tick(now + defaults::CLICK_NOTIFY_DELAY);
    assert_eq!(events, vec![Event::Clicked(id)]);
}

#[test]
fn click_without_dismissable_flag_leaves_stage_unchanged() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(Notification::success("sticky"), now);

    toaster.click(id, now);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::Active);

    // The external click callback fires regardless.
    let events = toaster.tick(now + defaults::CLICK_NOTIFY_DELAY);
    assert_eq!(events, vec![Event::Clicked(id)]);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::Active);
}

#[test]
fn touch_end_ignores_dismissable_flags() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(Notification::info("swipe"), now);

    toaster.touch_end(id);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::TouchSlidingExit);

    // Touch exit is a transition notice, not a removal.
    assert!(toaster.tick(at(now, 5000)).is_empty());
    assert_eq!(toaster.len(), 1);
}

#[test]
fn touched_notification_can_still_be_removed_manually() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let id = toaster.add_at(Notification::info("swipe"), now);

    toaster.touch_end(id);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::TouchSlidingExit);

    toaster.remove(id, now);
    assert_eq!(toaster.get(id).unwrap().stage(), Stage::Removal);

    let events = toaster.tick(at(now, 1000));
    assert_eq!(events, vec![Event::Dismissed(id)]);
    assert!(toaster.is_empty());
}

#[test]
fn resize_reflows_every_notification() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    for _ in 0..3 {
        toaster.add_at(Notification::info("n"), now);
    }

    toaster.handle_resize(100.0);

    assert_abs_diff_eq!(toaster.width(), 100.0);
    assert_eq!(toaster.iter().filter(|n| n.resized()).count(), 3);
}

#[test]
fn layout_modes_are_mutually_exclusive() {
    use iced_toaster::layout::Slot;

    let mobile = Toaster::new().responsive(true).with_width(512.0);
    assert!(mobile.is_mobile_layout());
    assert_eq!(Slot::active(true), &[Slot::MobileTop, Slot::MobileBottom]);

    let desktop = Toaster::new().responsive(true).with_width(1024.0);
    assert!(!desktop.is_mobile_layout());
    assert_eq!(Slot::active(false).len(), 4);
    for slot in Slot::active(false) {
        assert!(!Slot::active(true).contains(slot));
    }

    // Without the responsive flag a narrow width still renders desktop.
    let fixed = Toaster::new().with_width(512.0);
    assert!(!fixed.is_mobile_layout());
}

#[test]
fn duplicate_add_is_a_silent_no_op() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let notification = Notification::info("once");

    let id = toaster.add_at(notification.clone(), now);
    let again = toaster.add_at(notification, now);

    assert_eq!(id, again);
    assert_eq!(toaster.len(), 1);
}

#[test]
fn clear_cancels_everything() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let removed = toaster.add_at(Notification::info("a"), now);
    toaster.add_at(
        Notification::info("b").dismiss_after(Duration::from_millis(100)),
        now,
    );
    toaster.remove(removed, now);

    toaster.clear();

    assert!(toaster.is_empty());
    assert!(toaster.tick(at(now, 1000)).is_empty());
}

#[test]
fn positions_keep_their_groups() {
    let mut toaster = Toaster::new();
    let now = Instant::now();
    let top = toaster.add_at(Notification::info("t").at(Position::TopLeft), now);
    let bottom = toaster.add_at(Notification::info("b").at(Position::BottomRight), now);

    assert_eq!(toaster.get(top).unwrap().position(), Position::TopLeft);
    assert_eq!(toaster.get(bottom).unwrap().position(), Position::BottomRight);
}
