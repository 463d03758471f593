//! Destructive action confirmation dialog

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::theme::BOLD_WEIGHT;

const DIALOG_WIDTH: f32 = 380.0;

/// Build the confirmation dialog
pub fn view<'a>(
    title: &'a str,
    body: &'a str,
    confirm_label: &'a str,
    on_confirm: Message,
    on_cancel: Message,
    locale: Locale,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        container(Space::new())
            .width(Fill)
            .height(Fill)
            .style(|theme| container::Style {
                background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 0.7))),
                ..Default::default()
            }),
    )
    .on_press(on_cancel.clone());

    let heading = text(title)
        .size(18)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let message = text(body).size(14).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let cancel_btn = button(
        text(locale.get(Key::Cancel))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    )
    .padding(Padding::new(8.0).left(20.0).right(20.0))
    .style(theme::secondary_button)
    .on_press(on_cancel);

    let confirm_btn = button(text(confirm_label).size(14))
        .padding(Padding::new(8.0).left(20.0).right(20.0))
        .style(theme::danger_button)
        .on_press(on_confirm);

    let buttons = row![cancel_btn, Space::new().width(12), confirm_btn].align_y(Alignment::Center);

    let dialog_content = column![
        heading,
        Space::new().height(12),
        message,
        Space::new().height(24),
        container(buttons).width(Fill).align_x(Alignment::End),
    ]
    .width(DIALOG_WIDTH)
    .padding(24);

    let dialog_centered = container(container(dialog_content).style(theme::dialog))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill);

    let dialog_stack = stack![backdrop, dialog_centered].width(Fill).height(Fill);

    let event_blocker = mouse_area(dialog_stack)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    opaque(event_blocker).into()
}
