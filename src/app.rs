//! Main application module

mod helpers;
mod message;
pub mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
use crate::i18n::{Key, Language, Locale};
use crate::store::EntityStore;
use crate::ui::components::NavItem;
pub use message::Message;
pub use state::{App, CoreState, Screen, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale);
        let store = EntityStore::new();
        let ui = UiState::new();

        let app = Self { core, store, ui };

        // 3. Replay a saved session, if one is on disk
        let boot_task = if boot_logic::should_try_auto_sign_in(app.core.client.has_token()) {
            Task::done(Message::TryAutoSignIn)
        } else {
            Task::none()
        };

        (app, boot_task)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title based on the active screen
    pub fn title(&self) -> String {
        let locale = self.core.locale;
        let screen = match self.ui.screen {
            Screen::SignIn => locale.get(Key::SignInTitle),
            Screen::Admin(NavItem::Products) => locale.get(Key::NavProducts),
            Screen::Admin(NavItem::Users) => locale.get(Key::NavUsers),
        };
        format!("{} - {}", locale.get(Key::AppName), screen)
    }

    /// Keyboard subscription (Escape closes open dialogs)
    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::event::listen_with(|event, status, _window| match (event, status) {
            (
                iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }),
                iced::event::Status::Ignored,
            ) => Some(Message::KeyPressed(key, modifiers)),
            _ => None,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Boot decision logic for testability
pub mod boot_logic {
    /// A saved token is only worth replaying when one exists
    pub fn should_try_auto_sign_in(has_token: bool) -> bool {
        has_token
    }
}

#[cfg(test)]
mod tests {
    use super::boot_logic::*;

    #[test]
    fn boot_replays_only_a_saved_token() {
        assert!(should_try_auto_sign_in(true));
        assert!(!should_try_auto_sign_in(false));
    }
}
