// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering notifications.
//!
//! Toasts are the visual representation of notifications: small cards with
//! kind-colored accents and a dismiss button, grouped into positional
//! containers. Rendering is a pure function of the toaster state; every
//! interaction surfaces as a [`Message`].

use crate::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::kinds::KindStyle;
use crate::layout::Slot;
use crate::notification::{Notification, Stage};
use crate::toaster::{Message, Toaster};
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    ///
    /// `is_first` marks the first entry of its container group, which
    /// carries no stacking gap. `mobile` stretches the card to the full
    /// container width.
    pub fn view(
        notification: &Notification,
        style: KindStyle,
        is_first: bool,
        mobile: bool,
    ) -> Element<'_, Message> {
        let accent = style.accent;
        let stage = notification.stage();
        let id = notification.id();

        let message_widget = Text::new(notification.content())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(text("\u{00D7}").size(typography::BODY_SM))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let width = if mobile {
            Length::Fill
        } else {
            Length::Fixed(sizing::TOAST_WIDTH)
        };

        let card = Container::new(content)
            .width(width)
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, stage));

        let gap = if is_first { 0.0 } else { spacing::XS };
        let stacked = Container::new(card).padding(iced::Padding {
            top: gap,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        });

        mouse_area(stacked).on_press(Message::Clicked(id)).into()
    }

    /// Renders the full toast overlay.
    ///
    /// The mobile layout shows the two full-width containers; the desktop
    /// layout shows the four quadrant containers. The two sets are never
    /// mixed.
    pub fn view_overlay(toaster: &Toaster) -> Element<'_, Message> {
        if toaster.is_empty() {
            // An empty container that takes no space.
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let mobile = toaster.is_mobile_layout();
        let body = if mobile {
            Column::new()
                .push(Self::slot_container(toaster, Slot::MobileTop))
                .push(Space::new().height(Length::Fill))
                .push(Self::slot_container(toaster, Slot::MobileBottom))
        } else {
            let top = Row::new()
                .spacing(spacing::MD)
                .push(Self::slot_container(toaster, Slot::TopLeft))
                .push(Self::slot_container(toaster, Slot::TopRight));
            let bottom = Row::new()
                .spacing(spacing::MD)
                .push(Self::slot_container(toaster, Slot::BottomLeft))
                .push(Self::slot_container(toaster, Slot::BottomRight));

            Column::new()
                .push(top)
                .push(Space::new().height(Length::Fill))
                .push(bottom)
        };

        Container::new(body.width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD)
            .into()
    }

    /// Renders one positional container.
    fn slot_container(toaster: &Toaster, slot: Slot) -> Element<'_, Message> {
        let mobile = toaster.is_mobile_layout();
        let toasts: Vec<Element<'_, Message>> = toaster
            .iter()
            .filter(|notification| Slot::for_position(notification.position(), mobile) == slot)
            .enumerate()
            .map(|(index, notification)| {
                let style = toaster.kinds().resolve(notification.kind());
                Self::view(notification, style, index == 0, mobile)
            })
            .collect();

        let align = if mobile {
            alignment::Horizontal::Center
        } else if slot.is_left() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Right
        };

        Container::new(Column::with_children(toasts).align_x(align))
            .width(Length::Fill)
            .align_x(align)
            .into()
    }
}

impl Toaster {
    /// Renders the toast overlay for this toaster.
    pub fn view(&self) -> Element<'_, Message> {
        Toast::view_overlay(self)
    }
}

/// Style function for the toast card.
///
/// Entries past `Active` render dimmed, standing in for the exit
/// animation.
fn toast_container_style(theme: &Theme, accent: Color, stage: Stage) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;
    let alpha = if stage.is_exiting() {
        opacity::OVERLAY_MEDIUM
    } else {
        opacity::OPAQUE
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: bg_color.a * alpha,
            ..bg_color
        })),
        border: iced::Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if stage.is_exiting() {
            shadow::NONE
        } else {
            shadow::MD
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..crate::design_tokens::palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
