//! Labeled form input with inline validation feedback

use iced::widget::{Space, column, text, text_input};
use iced::{Element, Fill};

use crate::ui::theme;

/// Build a labeled text input with its field error underneath.
/// Validation feedback appears and clears as the controller
/// revalidates on every edit.
pub fn labeled_input<'a, Message: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    error: Option<&'a str>,
    on_input: impl Fn(String) -> Message + 'a,
    secure: bool,
) -> Element<'a, Message> {
    let caption = text(label).size(13).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let input = text_input(label, value)
        .on_input(on_input)
        .secure(secure)
        .padding(10)
        .size(14)
        .style(theme::form_text_input);

    let mut field = column![caption, Space::new().height(6), input].width(Fill);

    if let Some(message) = error {
        field = field.push(Space::new().height(4));
        field = field.push(text(message).size(12).style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        }));
    }

    field.into()
}

/// Helper error line for selects and other non-text fields
pub fn field_error<'a, Message: 'a>(error: Option<&'a str>) -> Element<'a, Message> {
    match error {
        Some(message) => column![
            Space::new().height(4),
            text(message).size(12).style(|theme| text::Style {
                color: Some(theme::danger(theme)),
            }),
        ]
        .into(),
        None => Space::new().height(0).into(),
    }
}
