//! Modal form shell
//!
//! Generic dialog chrome hosting a single-entity create/edit form.
//! The shell owns no entity data: the caller supplies title, submit
//! label, the form body, and the submit/close messages. Create and
//! update call sites differ only in those parameters.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, scrollable, stack, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::theme::BOLD_WEIGHT;

const DIALOG_WIDTH: f32 = 480.0;
const BODY_MAX_HEIGHT: f32 = 460.0;

/// Build the modal form dialog
pub fn view<'a>(
    title: &'a str,
    submit_label: &'a str,
    body: Element<'a, Message>,
    on_submit: Message,
    on_close: Message,
    locale: Locale,
) -> Element<'a, Message> {
    // Click-blocking backdrop; clicking outside the dialog closes it
    let backdrop = mouse_area(
        container(Space::new())
            .width(Fill)
            .height(Fill)
            .style(|theme| container::Style {
                background: Some(iced::Background::Color(theme::overlay_backdrop(theme, 0.7))),
                ..Default::default()
            }),
    )
    .on_press(on_close.clone());

    let heading = text(title)
        .size(22)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    // Long forms scroll inside the dialog rather than growing past it
    let body = container(
        scrollable(container(body).padding(Padding::new(0.0).right(12.0)))
            .style(theme::content_scrollable),
    )
    .max_height(BODY_MAX_HEIGHT);

    let cancel_btn = button(
        text(locale.get(Key::Cancel))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    )
    .padding(Padding::new(10.0).left(24.0).right(24.0))
    .style(theme::secondary_button)
    .on_press(on_close);

    let submit_btn = button(text(submit_label).size(14))
        .padding(Padding::new(10.0).left(24.0).right(24.0))
        .style(theme::primary_button)
        .on_press(on_submit);

    let buttons = row![cancel_btn, Space::new().width(12), submit_btn].align_y(Alignment::Center);

    let dialog_content = column![
        heading,
        Space::new().height(20),
        body,
        Space::new().height(24),
        container(buttons).width(Fill).align_x(Alignment::End),
    ]
    .width(DIALOG_WIDTH)
    .padding(28);

    let dialog_box = container(dialog_content).style(theme::dialog);

    let dialog_centered = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill);

    let dialog_stack = stack![backdrop, dialog_centered].width(Fill).height(Fill);

    // Block stray clicks and cursor states from the page underneath
    let event_blocker = mouse_area(dialog_stack)
        .interaction(Interaction::Idle)
        .on_press(Message::Noop);

    opaque(event_blocker).into()
}
