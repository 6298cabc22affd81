//! Display regions for the loading, error and success states

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Padding};

use super::state::{SourceLine, NO_SOURCES_TEXT};
use super::theme::DarkTheme;

/// Spinner frames, advanced on each loading tick
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Spinner line for the given tick count
pub fn spinner_text(frame: usize) -> String {
    format!(
        "{} Searching the web{}",
        SPINNER_FRAMES[frame % SPINNER_FRAMES.len()],
        ".".repeat(frame % 4)
    )
}

pub fn loading<'a, Message: 'a>(frame: usize) -> Element<'a, Message> {
    container(
        text(spinner_text(frame))
            .size(15)
            .color(DarkTheme::TEXT_MUTED),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(24)
    .into()
}

pub fn error<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    container(text(message).size(15).color(DarkTheme::ERROR_TEXT))
        .padding(16)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::ERROR_BACKGROUND)),
            border: Border {
                color: DarkTheme::ERROR_BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Answer paragraph followed by the numbered source list
pub fn success<'a, Message: Clone + 'a>(
    answer: &'a str,
    lines: Vec<SourceLine>,
    on_open: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let items: Vec<Element<'a, Message>> = lines
        .into_iter()
        .map(|line| match line {
            SourceLine::Cited { number, title, uri } => {
                let badge = container(text(number.to_string()).size(11).color(DarkTheme::TEXT))
                    .width(20)
                    .center_x(20)
                    .style(|_theme| container::Style {
                        background: Some(Background::Color(DarkTheme::BADGE)),
                        border: Border::default().rounded(10),
                        ..Default::default()
                    });

                let link = button(text(title).size(14).color(DarkTheme::LINK))
                    .padding(0)
                    .style(button::text)
                    .on_press(on_open(uri));

                row![badge, link]
                    .spacing(8)
                    .align_y(iced::Alignment::Center)
                    .into()
            }
            SourceLine::Placeholder => text(NO_SOURCES_TEXT)
                .size(14)
                .color(DarkTheme::TEXT_MUTED)
                .into(),
        })
        .collect();

    let body = column![
        text(answer).size(15).color(DarkTheme::TEXT),
        Space::with_height(16),
        text("Sources").size(13).color(DarkTheme::TEXT_MUTED),
        Space::with_height(6),
        column(items).spacing(6),
    ];

    container(scrollable(container(body).padding(16)).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::ZERO)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::SUCCESS_BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        })
        .into()
}
