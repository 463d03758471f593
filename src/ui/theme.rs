//! Theme system for the admin console
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Font weights
// ============================================================================

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;
pub const MEDIUM_WEIGHT: iced::font::Weight = iced::font::Weight::Medium;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x101311);
    pub const SIDEBAR: Color = color!(0x161a17);
    pub const SURFACE: Color = color!(0x1d221e);
    pub const BORDER: Color = color!(0x2c332d);
    pub const SURFACE_LIGHT: Color = color!(0x343d36);
    pub const TEXT_MUTED: Color = color!(0x879088);
    pub const TEXT_SECONDARY: Color = color!(0xb2bcb3);
    pub const TEXT_PRIMARY: Color = color!(0xf4f7f4);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SIDEBAR: Color = color!(0xf4f6f4);
    pub const SURFACE: Color = color!(0xedf0ed);
    pub const BORDER: Color = color!(0xd9ded9);
    pub const SURFACE_LIGHT: Color = color!(0xe2e6e2);
    pub const TEXT_MUTED: Color = color!(0x737b74);
    pub const TEXT_SECONDARY: Color = color!(0x4f564f);
    pub const TEXT_PRIMARY: Color = color!(0x191d1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get sidebar color based on theme
pub fn sidebar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SIDEBAR
    } else {
        light::SIDEBAR
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// Fixed shortcuts used where components want the dark palette regardless
pub const TEXT_MUTED: Color = dark::TEXT_MUTED;
pub const TEXT_SECONDARY: Color = dark::TEXT_SECONDARY;
pub const TEXT_PRIMARY: Color = dark::TEXT_PRIMARY;

/// Brand green, the console's accent
pub fn accent(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x0e8e53)
    } else {
        color!(0x0a5f38)
    }
}

pub fn accent_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x16ab67)
    } else {
        color!(0x0e8e53)
    }
}

/// Get hover background color
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Slightly elevated surface (cards, toasts)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_LIGHT
    } else {
        light::BACKGROUND
    }
}

/// Container surface for inputs
pub fn surface_container(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xe5534b)
    } else {
        color!(0xc62828)
    }
}

pub fn danger_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xf0655d)
    } else {
        color!(0xd32f2f)
    }
}

pub fn success(_theme: &Theme) -> Color {
    color!(0x2e9e5b)
}

pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Semi-transparent backdrop behind dialogs
pub fn overlay_backdrop(theme: &Theme, opacity: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, opacity)
    } else {
        Color::from_rgba(0.1, 0.1, 0.1, opacity * 0.8)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Sidebar container
pub fn sidebar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(sidebar_bg(theme))),
        ..Default::default()
    }
}

/// Card surface (table paper, dialogs)
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Table header row
pub fn table_header(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        ..Default::default()
    }
}

/// Dialog box floating above the backdrop
pub fn dialog(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            dark::SIDEBAR
        } else {
            light::BACKGROUND
        })),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: iced::Vector::new(0.0, 6.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button - filled with the accent green
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(accent(theme))),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(accent_hover(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(surface_container(theme))),
            text_color: text_muted(theme),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 20.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            border: Border {
                color: text_muted(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Text button (no background, just text color change on hover)
pub fn text_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border::default(),
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Icon button (transparent, subtle hover circle)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Danger button (red for destructive actions)
pub fn danger_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(danger(theme))),
        text_color: Color::WHITE,
        border: Border {
            radius: 20.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(danger_hover(theme))),
            ..base
        },
        _ => base,
    }
}

/// Sidebar navigation item
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let background = if active {
            hover_bg(theme)
        } else {
            match status {
                button::Status::Hovered => hover_bg(theme),
                _ => Color::TRANSPARENT,
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active {
                text_primary(theme)
            } else {
                text_secondary(theme)
            },
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Form text input style
pub fn form_text_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => accent(theme),
        text_input::Status::Hovered => text_muted(theme),
        _ => divider(theme),
    };
    text_input::Style {
        background: Background::Color(surface_container(theme)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: accent(theme),
    }
}

/// Form select style
pub fn form_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = match status {
        pick_list::Status::Hovered | pick_list::Status::Opened { .. } => hover_bg(theme),
        _ => surface_container(theme),
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: divider(theme),
        },
    }
}

/// Dropdown menu style matching the selects
pub fn pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(surface_elevated(theme)),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: divider(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(hover_bg(theme)),
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for main content
pub fn content_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
