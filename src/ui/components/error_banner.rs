//! Inline error banner
//!
//! Dismissable strip surfacing the entity store's last error for a
//! page. Dismissing clears the slice; the next dispatch for the same
//! entity clears it anyway.

use iced::widget::{Space, button, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::BOLD_WEIGHT;
use crate::ui::{icons, theme};

/// Build the error banner
pub fn view<'a>(message: &'a str, on_dismiss: Message, locale: Locale) -> Element<'a, Message> {
    let title = text(locale.get(Key::ErrorTitle))
        .size(13)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::danger(theme)),
        });

    let body = text(message).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let dismiss = button(
        svg(svg::Handle::from_memory(icons::CLOSE.as_bytes()))
            .width(14)
            .height(14)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(4)
    .style(theme::icon_button)
    .on_press(on_dismiss);

    container(
        row![
            title,
            Space::new().width(10),
            body,
            Space::new().width(Fill),
            dismiss,
        ]
        .align_y(Alignment::Center)
        .padding(Padding::new(10.0).left(14.0).right(8.0)),
    )
    .width(Fill)
    .style(|theme| container::Style {
        background: Some(iced::Background::Color({
            let danger = theme::danger(theme);
            iced::Color { a: 0.12, ..danger }
        })),
        border: iced::Border {
            radius: 8.0.into(),
            width: 1.0,
            color: theme::danger(theme),
        },
        ..Default::default()
    })
    .into()
}
