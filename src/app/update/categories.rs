//! Category message handlers
//!
//! Categories are read-only here: they exist to feed the product
//! form's select and the category column lookup.

use iced::Task;

use crate::app::{App, Message};
use crate::store::Mutation;

impl App {
    /// Handle category-related messages
    pub fn handle_categories(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CategoriesLoaded(result) => {
                self.store
                    .apply(Mutation::CategoriesFetched(result.clone()));
                Some(Task::none())
            }
            _ => None,
        }
    }
}
