//! Message update handlers - thin dispatcher delegating to submodules

mod categories;
mod navigation;
mod products;
mod session;
mod users;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_session(&message) {
            return task;
        }
        if let Some(task) = self.handle_products(&message) {
            return task;
        }
        if let Some(task) = self.handle_categories(&message) {
            return task;
        }
        if let Some(task) = self.handle_users(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
