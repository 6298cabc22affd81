//! Search bar: query input plus submit button

use iced::widget::{button, container, row, text, text_input};
use iced::{Background, Border, Color, Element, Length, Padding};

use super::theme::DarkTheme;

/// Search bar component.
///
/// With `enabled` false neither the input nor the button accept interaction.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    enabled: bool,
    label: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
) -> Element<'a, Message> {
    let input = text_input("Ask a question...", value)
        .padding(Padding::new(14.0))
        .size(18)
        .width(Length::Fill)
        .style(|_theme, _status| text_input::Style {
            background: Background::Color(Color::TRANSPARENT),
            border: Border::default(),
            icon: DarkTheme::TEXT_MUTED,
            placeholder: DarkTheme::TEXT_PLACEHOLDER,
            value: DarkTheme::TEXT,
            selection: DarkTheme::PRIMARY,
        });

    let input = if enabled {
        input.on_input(on_input).on_submit(on_submit.clone())
    } else {
        input
    };

    let submit = button(text(label).size(16))
        .padding(Padding::from([10.0, 18.0]))
        .on_press_maybe(enabled.then_some(on_submit));

    container(row![input, submit].spacing(8).align_y(iced::Alignment::Center))
        .padding(Padding::from([6.0, 10.0]))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(DarkTheme::SURFACE)),
            border: Border {
                color: DarkTheme::BORDER,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        })
        .into()
}
