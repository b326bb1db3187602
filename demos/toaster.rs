// SPDX-License-Identifier: MPL-2.0
//! Demo application for `iced_toaster`.
//!
//! Spawns toasts of each built-in kind into different corners. Run with
//! `--responsive` to enable mobile layout switching and resize the window
//! below the breakpoint to see the containers collapse.

use iced::widget::{button, container, row, text, Column, Stack};
use iced::{Element, Length, Subscription, Task};
use iced_toaster::{config, subscription, Notification, Position, Toaster};
use std::time::Duration;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();
    let responsive = args.contains("--responsive");

    iced::application(
        move || (Demo::new(responsive), Task::none()),
        Demo::update,
        Demo::view,
    )
    .title("iced_toaster demo")
    .subscription(Demo::subscription)
    .run()
}

struct Demo {
    toaster: Toaster,
}

#[derive(Debug, Clone)]
enum Message {
    Spawn(&'static str, Position),
    Toaster(iced_toaster::Message),
}

impl Demo {
    fn new(responsive: bool) -> Self {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load toaster config: {err}");
            config::Config::default()
        });

        let mut toaster = Toaster::from_config(&config);
        if responsive {
            toaster = toaster.responsive(true);
        }

        Self { toaster }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Spawn(kind, position) => {
                self.toaster.add(
                    Notification::new(kind, format!("A {kind} toast"))
                        .at(position)
                        .dismiss_after(Duration::from_secs(3))
                        .dismissable_on_click(),
                );
                Task::none()
            }
            Message::Toaster(inner) => {
                for event in self.toaster.update(inner) {
                    eprintln!("Toaster event: {event:?}");
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let spawners = row![
            spawn_button("success", Position::TopRight),
            spawn_button("info", Position::TopLeft),
            spawn_button("warning", Position::BottomLeft),
            spawn_button("danger", Position::BottomRight),
        ]
        .spacing(8);

        let content = container(
            Column::new()
                .push(text("Click a button to spawn a toast").size(16))
                .push(spawners)
                .spacing(16),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill);

        Stack::new()
            .push(content)
            .push(self.toaster.view().map(Message::Toaster))
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Tick only while toasts are alive; resize tracking stays on.
        let inner = if self.toaster.is_empty() {
            subscription::resize()
        } else {
            subscription::subscription()
        };
        inner.map(Message::Toaster)
    }
}

fn spawn_button(kind: &'static str, position: Position) -> Element<'static, Message> {
    button(text(kind))
        .on_press(Message::Spawn(kind, position))
        .into()
}
