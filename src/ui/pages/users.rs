//! User admin page
//!
//! Back-office account table plus the create/update form. Rows with
//! the protected role render no affordances at all; blocking is the
//! user table's flavor of delete.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::model::ROLE_OPTIONS;
use crate::app::Message;
use crate::app::state::UserAdminState;
use crate::forms::FormState;
use crate::i18n::{Key, Locale};
use crate::store::{EntityKind, EntityStore};
use crate::ui::components::data_table::{self, CellValue, Column, TableKind, TableRow};
use crate::ui::components::error_banner;
use crate::ui::theme::BOLD_WEIGHT;
use crate::ui::widgets::{field_error, labeled_input};
use crate::ui::{icons, theme};

fn columns(locale: Locale) -> Vec<Column> {
    vec![
        Column::new("email", locale.get(Key::ColEmail)).min_width(220.0),
        Column::new("role", locale.get(Key::ColRole)),
    ]
}

fn rows(store: &EntityStore) -> Vec<TableRow> {
    store
        .users
        .iter()
        .map(|user| {
            TableRow::new(user.id.clone())
                .role(user.role_type.clone())
                .cell("email", CellValue::Text(user.email.clone()))
                .cell("role", CellValue::Text(user.role_type.clone()))
        })
        .collect()
}

/// Build the user admin screen
pub fn view<'a>(
    store: &'a EntityStore,
    state: &'a UserAdminState,
    locale: Locale,
) -> Element<'a, Message> {
    let title = text(locale.get(Key::UsersTitle))
        .size(26)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let add_button = button(
        row![
            svg(svg::Handle::from_memory(icons::PLUS.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::accent(theme)),
                }),
            Space::new().width(8),
            text(locale.get(Key::AddUser)).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(8.0).left(14.0).right(16.0))
    .style(theme::secondary_button)
    .on_press(Message::OpenUserForm(None));

    let header = row![title, Space::new().width(Fill), add_button].align_y(Alignment::Center);

    let banner: Element<'a, Message> = match store.error(EntityKind::Users) {
        Some(message) => column![
            error_banner::view(message, Message::DismissError(EntityKind::Users), locale),
            Space::new().height(16),
        ]
        .into(),
        None => Space::new().height(0).into(),
    };

    let table = data_table::view(
        columns(locale),
        rows(store),
        state.table,
        TableKind::Users,
        None,
        |id| Message::OpenUserForm(Some(id)),
        Message::RequestBlockUser,
        Message::UsersPageChanged,
        Message::UsersRowsPerPageChanged,
        locale,
    );

    let content = column![header, Space::new().height(20), banner, table]
        .padding(Padding::new(28.0))
        .width(Fill);

    container(scrollable(content).style(theme::content_scrollable))
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

/// Build the create/update form body hosted by the modal shell
pub fn form_view<'a>(
    form: &'a FormState,
    users_error: Option<&'a str>,
    locale: Locale,
) -> Element<'a, Message> {
    let selected_role = ROLE_OPTIONS
        .iter()
        .copied()
        .find(|role| *role == form.value("role"));
    let role_select = column![
        text(locale.get(Key::UserRole))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().height(6),
        pick_list(ROLE_OPTIONS, selected_role, |role: &'static str| {
            Message::UserFieldChanged("role", role.to_string())
        })
        .width(Fill)
        .padding(10)
        .text_size(14)
        .style(theme::form_pick_list)
        .menu_style(theme::pick_list_menu),
        field_error(form.error("role")),
    ];

    let store_banner: Element<'a, Message> = match users_error {
        Some(message) => column![
            Space::new().height(12),
            error_banner::view(message, Message::DismissError(EntityKind::Users), locale),
        ]
        .into(),
        None => Space::new().height(0).into(),
    };

    column![
        labeled_input(
            locale.get(Key::UserEmail),
            form.value("email"),
            form.error("email"),
            |value| Message::UserFieldChanged("email", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::UserPassword),
            form.value("password"),
            form.error("password"),
            |value| Message::UserFieldChanged("password", value),
            true,
        ),
        Space::new().height(12),
        role_select,
        store_banner,
    ]
    .width(Fill)
    .into()
}
