//! User admin message handlers: listing, modal lifecycle, form
//! editing, create/update/block dispatches

use std::collections::BTreeMap;

use iced::Task;
use tracing::warn;

use crate::api::{User, UserDraft};
use crate::app::state::ModalState;
use crate::app::{App, Message};
use crate::forms::{FormState, schemas};
use crate::i18n::Key;
use crate::store::{EntityKind, Mutation};
use crate::ui::components::data_table;
use crate::ui::widgets::Toast;

/// Edit template: email and role from the listed user, password
/// blank (it is write-only and never round-trips)
fn user_seed(user: &User) -> Vec<(&'static str, String)> {
    vec![
        ("email", user.email.clone()),
        ("role", user.role_type.clone()),
    ]
}

fn draft_from_values(values: &BTreeMap<&'static str, String>) -> UserDraft {
    let field = |name: &str| values.get(name).cloned().unwrap_or_default();
    UserDraft {
        email: field("email"),
        password: field("password"),
        role_type: field("role"),
    }
}

impl App {
    /// Handle user-related messages
    pub fn handle_users(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UsersLoaded(result) => {
                self.store.apply(Mutation::UsersFetched(result.clone()));
                Some(Task::none())
            }

            Message::OpenUserForm(None) => {
                self.ui.users.modal = ModalState::Editing {
                    id: None,
                    form: FormState::new(schemas::USER),
                };
                Some(Task::none())
            }

            Message::OpenUserForm(Some(id)) => {
                // Users have no read-by-id endpoint; edit seeds from
                // the listing already in the store
                let Some(user) = self.store.user_by_id(id) else {
                    warn!("Edit requested for unknown user {}", id);
                    return Some(Task::none());
                };
                if data_table::is_protected(Some(&user.role_type)) {
                    return Some(Task::none());
                }
                self.ui.users.modal = ModalState::Editing {
                    id: Some(id.clone()),
                    form: FormState::with_defaults(schemas::USER, user_seed(user)),
                };
                Some(Task::none())
            }

            Message::CloseUserForm => {
                self.ui.users.modal = ModalState::Idle;
                Some(Task::none())
            }

            Message::UserFieldChanged(name, value) => {
                if let Some(form) = self.ui.users.modal.form_mut() {
                    form.set_value(name, value.clone());
                }
                Some(Task::none())
            }

            Message::UserFormSubmitted => {
                let ModalState::Editing { id, form } = &mut self.ui.users.modal else {
                    return Some(Task::none());
                };
                let Some(values) = form.submit() else {
                    return Some(Task::none());
                };

                let draft = draft_from_values(&values);
                let id = id.clone();
                let created = id.is_none();
                self.store.begin(EntityKind::Users);

                let client = self.core.client.clone();
                Some(Task::perform(
                    async move {
                        match &id {
                            Some(id) => client.update_user(id, &draft).await,
                            None => client.create_user(&draft).await,
                        }
                        .map_err(|e| e.to_string())
                    },
                    move |result| Message::UserSaveResult { created, result },
                ))
            }

            Message::UserSaveResult { created, result } => {
                self.store.apply(Mutation::UserSaved(result.clone()));
                match result {
                    Ok(_) => {
                        if let Some(form) = self.ui.users.modal.form_mut() {
                            form.reset();
                        }
                        self.ui.users.modal = ModalState::Idle;
                        let toast_text = if *created {
                            self.core.locale.get(Key::UserCreated)
                        } else {
                            self.core.locale.get(Key::UserUpdated)
                        };
                        Some(self.show_toast(Toast::success(toast_text)))
                    }
                    Err(e) => {
                        warn!("User save rejected: {}", e);
                        Some(Task::none())
                    }
                }
            }

            Message::RequestBlockUser(id) => {
                // Protected rows never reach here through the table,
                // but the rule holds regardless of the caller
                let protected = self
                    .store
                    .user_by_id(id)
                    .is_some_and(|user| data_table::is_protected(Some(&user.role_type)));
                if !protected {
                    self.ui.users.pending_block = Some(id.clone());
                }
                Some(Task::none())
            }

            Message::CancelBlockUser => {
                self.ui.users.pending_block = None;
                Some(Task::none())
            }

            Message::ConfirmBlockUser => {
                let Some(id) = self.ui.users.pending_block.take() else {
                    return Some(Task::none());
                };
                self.store.begin(EntityKind::Users);
                let client = self.core.client.clone();
                Some(Task::perform(
                    async move {
                        client
                            .block_user(&id)
                            .await
                            .map(|_| id)
                            .map_err(|e| e.to_string())
                    },
                    Message::UserBlockResult,
                ))
            }

            Message::UserBlockResult(result) => {
                self.store.apply(Mutation::UserBlocked(result.clone()));
                match result {
                    Ok(_) => {
                        let toast_text = self.core.locale.get(Key::UserBlocked);
                        Some(self.show_toast(Toast::success(toast_text)))
                    }
                    Err(e) => {
                        warn!("User block rejected: {}", e);
                        Some(Task::none())
                    }
                }
            }

            Message::UsersPageChanged(page) => {
                self.ui.users.table.set_page(*page);
                Some(Task::none())
            }

            Message::UsersRowsPerPageChanged(rows) => {
                self.ui.users.table.set_rows_per_page(*rows);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ShopClient;
    use crate::app::state::{CoreState, UiState};
    use crate::features::Settings;
    use crate::i18n::Locale;
    use crate::store::EntityStore;

    fn test_app() -> App {
        let settings = Settings::default();
        App {
            core: CoreState {
                client: ShopClient::new(&settings.api.base_url),
                settings,
                locale: Locale::default(),
                is_signed_in: true,
                account_email: None,
                pending_email: None,
            },
            store: EntityStore::new(),
            ui: UiState::new(),
        }
    }

    fn user(id: &str, role: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            role_type: role.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn edit_seeds_from_the_listing_with_a_blank_password() {
        let mut app = test_app();
        app.store
            .apply(Mutation::UsersFetched(Ok(vec![user("u1", "manager")])));

        let _ = app.update(Message::OpenUserForm(Some("u1".to_string())));
        let form = app.ui.users.modal.form().expect("modal should be editing");
        assert_eq!(form.value("email"), "u1@example.com");
        assert_eq!(form.value("role"), "manager");
        assert_eq!(form.value("password"), "");
    }

    #[test]
    fn protected_users_cannot_be_opened_for_edit() {
        let mut app = test_app();
        app.store
            .apply(Mutation::UsersFetched(Ok(vec![user("root", "super-admin")])));

        let _ = app.update(Message::OpenUserForm(Some("root".to_string())));
        assert!(!app.ui.users.modal.is_open());
    }

    #[test]
    fn protected_users_cannot_be_queued_for_blocking() {
        let mut app = test_app();
        app.store
            .apply(Mutation::UsersFetched(Ok(vec![user("root", "super-admin")])));

        let _ = app.update(Message::RequestBlockUser("root".to_string()));
        assert!(app.ui.users.pending_block.is_none());
    }

    #[test]
    fn failed_save_keeps_the_modal_open_with_the_error() {
        let mut app = test_app();
        let _ = app.update(Message::OpenUserForm(None));
        assert!(app.ui.users.modal.is_open());

        let _ = app.update(Message::UserSaveResult {
            created: true,
            result: Err("email must be unique".to_string()),
        });
        assert!(app.ui.users.modal.is_open());
        assert_eq!(
            app.store.error(EntityKind::Users),
            Some("email must be unique")
        );
    }

    #[test]
    fn successful_save_closes_the_modal() {
        let mut app = test_app();
        let _ = app.update(Message::OpenUserForm(None));
        let _ = app.update(Message::UserSaveResult {
            created: true,
            result: Ok(user("u2", "admin")),
        });
        assert!(!app.ui.users.modal.is_open());
        assert_eq!(app.store.users.len(), 1);
    }

    #[test]
    fn block_confirmation_flow_removes_the_row() {
        let mut app = test_app();
        app.store
            .apply(Mutation::UsersFetched(Ok(vec![user("u1", "manager")])));

        let _ = app.update(Message::RequestBlockUser("u1".to_string()));
        assert_eq!(app.ui.users.pending_block.as_deref(), Some("u1"));

        let _ = app.update(Message::ConfirmBlockUser);
        assert!(app.ui.users.pending_block.is_none());

        let _ = app.update(Message::UserBlockResult(Ok("u1".to_string())));
        assert!(app.store.users.is_empty());
    }
}
