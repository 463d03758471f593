//! Navigation, keyboard, and overlay chrome message handlers

use iced::Task;
use iced::keyboard::{Key, key};

use crate::app::state::{ModalState, Screen};
use crate::app::{App, Message};
use crate::ui::components::NavItem;
use crate::ui::widgets::Toast;

impl App {
    /// Handle navigation and chrome messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(item) => {
                if !self.core.is_signed_in {
                    return Some(Task::none());
                }
                self.ui.screen = Screen::Admin(*item);
                // Mount fetch for the selected screen
                let task = match item {
                    NavItem::Products => {
                        Task::batch([self.load_products(), self.load_categories()])
                    }
                    NavItem::Users => self.load_users(),
                };
                Some(task)
            }

            Message::KeyPressed(key, _modifiers) => {
                if matches!(key, Key::Named(key::Named::Escape)) {
                    self.close_open_overlays();
                }
                Some(Task::none())
            }

            Message::DismissError(kind) => {
                self.store.dismiss_error(*kind);
                Some(Task::none())
            }

            Message::ShowToast(text) => Some(self.show_toast(Toast::success(text.clone()))),

            Message::ShowErrorToast(text) => Some(self.show_toast(Toast::error(text.clone()))),

            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Escape closes whichever dialog is on top
    fn close_open_overlays(&mut self) {
        if self.ui.products.pending_delete.is_some() {
            self.ui.products.pending_delete = None;
        } else if self.ui.users.pending_block.is_some() {
            self.ui.users.pending_block = None;
        } else if self.ui.products.modal.is_open() {
            self.ui.products.modal = ModalState::Idle;
        } else if self.ui.users.modal.is_open() {
            self.ui.users.modal = ModalState::Idle;
        }
    }
}
