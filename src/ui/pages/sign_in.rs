//! Sign-in page
//!
//! Centered credential card. Submission runs the two-step gate:
//! authenticate, then list users; a rejected listing surfaces the
//! distinct "Forbidden" message without navigating.

use iced::widget::{Space, button, column, container, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::app::state::SignInState;
use crate::i18n::{Key, Locale};
use crate::store::EntityKind;
use crate::ui::components::error_banner;
use crate::ui::theme::BOLD_WEIGHT;
use crate::ui::widgets::labeled_input;
use crate::ui::{icons, theme};

const CARD_WIDTH: f32 = 380.0;

/// Build the sign-in page view
pub fn view<'a>(
    state: &'a SignInState,
    auth_error: Option<&'a str>,
    locale: Locale,
) -> Element<'a, Message> {
    let badge = container(
        svg(svg::Handle::from_memory(icons::LOGIN.as_bytes()))
            .width(22)
            .height(22)
            .style(|_theme, _status| svg::Style {
                color: Some(iced::Color::WHITE),
            }),
    )
    .width(44)
    .height(44)
    .center_x(44)
    .center_y(44)
    .style(|theme| container::Style {
        background: Some(iced::Background::Color(theme::accent(theme))),
        border: iced::Border {
            radius: 22.0.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let title = text(locale.get(Key::SignInTitle))
        .size(24)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let email = labeled_input(
        locale.get(Key::EmailLabel),
        state.form.value("email"),
        state.form.error("email"),
        |value| Message::SignInEmailChanged(value),
        false,
    );

    let password = labeled_input(
        locale.get(Key::PasswordLabel),
        state.form.value("password"),
        state.form.error("password"),
        |value| Message::SignInPasswordChanged(value),
        true,
    );

    let submit = button(
        container(text(locale.get(Key::SignInButton)).size(15))
            .width(Fill)
            .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(12)
    .style(theme::primary_button)
    .on_press(Message::SignInSubmitted);

    // Credential rejection and the post-auth "Forbidden" listing
    // rejection are separate conditions; whichever is present shows
    let banner: Element<'a, Message> = if let Some(message) = auth_error {
        column![
            Space::new().height(16),
            error_banner::view(message, Message::DismissError(EntityKind::Session), locale),
        ]
        .into()
    } else if let Some(message) = state.forbidden.as_deref() {
        column![
            Space::new().height(16),
            error_banner::view(message, Message::DismissForbidden, locale),
        ]
        .into()
    } else {
        Space::new().height(0).into()
    };

    let card = column![
        container(badge).width(Fill).align_x(Alignment::Center),
        Space::new().height(12),
        container(title).width(Fill).align_x(Alignment::Center),
        Space::new().height(20),
        email,
        Space::new().height(14),
        password,
        Space::new().height(24),
        submit,
        banner,
    ]
    .width(CARD_WIDTH)
    .padding(32);

    container(container(card).style(theme::card))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .padding(Padding::new(40.0))
        .style(theme::main_content)
        .into()
}
