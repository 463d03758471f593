//! Navigation sidebar
//!
//! Screen switcher for the admin pages plus the session footer.

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::BOLD_WEIGHT;
use crate::ui::{icons, theme};

pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Admin screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavItem {
    #[default]
    Products,
    Users,
}

impl NavItem {
    fn label(&self) -> Key {
        match self {
            NavItem::Products => Key::NavProducts,
            NavItem::Users => Key::NavUsers,
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NavItem::Products => icons::BOX,
            NavItem::Users => icons::USERS,
        }
    }
}

/// Build the sidebar view
pub fn view<'a>(
    active: NavItem,
    signed_in_email: Option<&'a str>,
    locale: Locale,
) -> Element<'a, Message> {
    let brand = text(locale.get(Key::AppName))
        .size(20)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::accent(theme)),
        });

    let nav_items: Vec<Element<'a, Message>> = [NavItem::Products, NavItem::Users]
        .into_iter()
        .map(|item| nav_button(item, active, locale))
        .collect();

    let account = match signed_in_email {
        Some(email) => text(email).size(12).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
        None => text(""),
    };

    let sign_out = button(
        row![
            svg(svg::Handle::from_memory(icons::LOGOUT.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().width(10),
            text(locale.get(Key::SignOut)).size(13),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::new(8.0).left(12.0))
    .style(theme::text_button)
    .on_press(Message::SignOut);

    let content = column![
        container(brand).padding(Padding::new(16.0).bottom(24.0)),
        column(nav_items).spacing(4),
        Space::new().height(Fill),
        container(account).padding(Padding::new(4.0).left(16.0)),
        sign_out,
        Space::new().height(12),
    ]
    .padding(8)
    .width(SIDEBAR_WIDTH)
    .height(Fill);

    container(content)
        .width(SIDEBAR_WIDTH)
        .height(Fill)
        .style(theme::sidebar)
        .into()
}

fn nav_button<'a>(item: NavItem, active: NavItem, locale: Locale) -> Element<'a, Message> {
    let is_active = item == active;

    button(
        row![
            svg(svg::Handle::from_memory(item.icon().as_bytes()))
                .width(18)
                .height(18)
                .style(move |theme, _status| svg::Style {
                    color: Some(if is_active {
                        theme::accent(theme)
                    } else {
                        theme::text_secondary(theme)
                    }),
                }),
            Space::new().width(12),
            text(locale.get(item.label())).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(Padding::new(10.0).left(12.0))
    .style(theme::nav_item(is_active))
    .on_press(Message::Navigate(item))
    .into()
}
