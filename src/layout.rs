// SPDX-License-Identifier: MPL-2.0
//! Responsive container selection.
//!
//! Toasts render into positional containers ("slots"). The desktop layout
//! exposes the four screen quadrants; the mobile layout collapses them into
//! a top and a bottom container. Exactly one of the two layouts is active
//! at a time.

use crate::notification::Position;

/// A positional toast container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    MobileTop,
    MobileBottom,
}

/// Containers rendered under the desktop layout.
pub const DESKTOP_SLOTS: [Slot; 4] = [
    Slot::TopLeft,
    Slot::TopRight,
    Slot::BottomLeft,
    Slot::BottomRight,
];

/// Containers rendered under the mobile layout.
pub const MOBILE_SLOTS: [Slot; 2] = [Slot::MobileTop, Slot::MobileBottom];

impl Slot {
    /// Returns the containers active for the given layout mode.
    #[must_use]
    pub fn active(mobile: bool) -> &'static [Slot] {
        if mobile {
            &MOBILE_SLOTS
        } else {
            &DESKTOP_SLOTS
        }
    }

    /// Maps a notification's anchor corner to its container.
    #[must_use]
    pub fn for_position(position: Position, mobile: bool) -> Slot {
        if mobile {
            match position {
                Position::TopLeft | Position::TopRight => Slot::MobileTop,
                Position::BottomLeft | Position::BottomRight => Slot::MobileBottom,
            }
        } else {
            match position {
                Position::TopLeft => Slot::TopLeft,
                Position::TopRight => Slot::TopRight,
                Position::BottomLeft => Slot::BottomLeft,
                Position::BottomRight => Slot::BottomRight,
            }
        }
    }

    /// Returns whether this container anchors to the top edge.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Slot::TopLeft | Slot::TopRight | Slot::MobileTop)
    }

    /// Returns whether this container anchors to the left edge.
    ///
    /// Mobile containers span the full width and are not left-anchored.
    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Slot::TopLeft | Slot::BottomLeft)
    }
}

/// Layout selection rule.
///
/// The responsive flag enables switching; the breakpoint decides. Without
/// the flag the desktop layout is used at any width.
#[must_use]
pub fn is_mobile(responsive: bool, width: f32, breakpoint: f32) -> bool {
    responsive && width <= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn desktop_and_mobile_slots_are_disjoint() {
        for slot in DESKTOP_SLOTS {
            assert!(!MOBILE_SLOTS.contains(&slot));
        }
    }

    #[test]
    fn active_slots_match_layout_mode() {
        assert_eq!(Slot::active(false).len(), 4);
        assert_eq!(Slot::active(true).len(), 2);
        assert_eq!(Slot::active(true), &MOBILE_SLOTS);
        assert_eq!(Slot::active(false), &DESKTOP_SLOTS);
    }

    #[test]
    fn desktop_mapping_is_one_to_one() {
        assert_eq!(Slot::for_position(Position::TopLeft, false), Slot::TopLeft);
        assert_eq!(Slot::for_position(Position::TopRight, false), Slot::TopRight);
        assert_eq!(
            Slot::for_position(Position::BottomLeft, false),
            Slot::BottomLeft
        );
        assert_eq!(
            Slot::for_position(Position::BottomRight, false),
            Slot::BottomRight
        );
    }

    #[test]
    fn mobile_mapping_collapses_corners() {
        assert_eq!(Slot::for_position(Position::TopLeft, true), Slot::MobileTop);
        assert_eq!(Slot::for_position(Position::TopRight, true), Slot::MobileTop);
        assert_eq!(
            Slot::for_position(Position::BottomLeft, true),
            Slot::MobileBottom
        );
        assert_eq!(
            Slot::for_position(Position::BottomRight, true),
            Slot::MobileBottom
        );
    }

    #[test]
    fn narrow_width_without_responsive_flag_stays_desktop() {
        assert!(!is_mobile(false, 512.0, defaults::MOBILE_BREAKPOINT));
        assert!(is_mobile(true, 512.0, defaults::MOBILE_BREAKPOINT));
    }

    #[test]
    fn wide_width_is_desktop_even_when_responsive() {
        assert!(!is_mobile(true, 1024.0, defaults::MOBILE_BREAKPOINT));
        assert!(is_mobile(
            true,
            defaults::MOBILE_BREAKPOINT,
            defaults::MOBILE_BREAKPOINT
        ));
    }

    #[test]
    fn custom_breakpoint_is_honored() {
        assert!(is_mobile(true, 900.0, 1000.0));
        assert!(!is_mobile(true, 900.0, 600.0));
    }
}
