//! Session message handlers: sign-in, the gated listing call,
//! auto sign-in from a saved token, and sign-out

use iced::Task;
use tracing::{debug, info, warn};

use crate::api::{Credentials, ShopClient};
use crate::app::state::Screen;
use crate::app::{App, Message};
use crate::i18n::Key;
use crate::store::{EntityKind, Mutation};
use crate::ui::components::NavItem;
use crate::ui::widgets::Toast;

/// Decision logic for the two-step sign-in gate, kept pure for tests.
/// Authentication and the follow-up listing are independently
/// observable failures: rejected credentials never issue the listing
/// call, and a rejected listing is "Forbidden", not an auth error.
pub mod gate {
    /// What to do after the listing call resolves
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ListingOutcome {
        Proceed,
        Forbidden,
    }

    /// The dependent listing call starts only on fulfilled sign-in
    pub fn should_fetch_listing(sign_in_ok: bool) -> bool {
        sign_in_ok
    }

    pub fn after_listing(listing_ok: bool) -> ListingOutcome {
        if listing_ok {
            ListingOutcome::Proceed
        } else {
            ListingOutcome::Forbidden
        }
    }
}

impl App {
    /// Handle session-related messages
    pub fn handle_session(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SignInEmailChanged(value) => {
                self.ui.sign_in.form.set_value("email", value.clone());
                Some(Task::none())
            }

            Message::SignInPasswordChanged(value) => {
                self.ui.sign_in.form.set_value("password", value.clone());
                Some(Task::none())
            }

            Message::SignInSubmitted => {
                // Each attempt starts with a clean slate for both
                // failure conditions
                self.ui.sign_in.forbidden = None;
                self.store.begin(EntityKind::Session);

                let Some(values) = self.ui.sign_in.form.submit() else {
                    return Some(Task::none());
                };

                let credentials = Credentials {
                    email: values.get("email").cloned().unwrap_or_default(),
                    password: values.get("password").cloned().unwrap_or_default(),
                };
                self.core.pending_email = Some(credentials.email.clone());

                let client = self.core.client.clone();
                Some(Task::perform(
                    async move {
                        client
                            .sign_in(&credentials)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::SignInResult,
                ))
            }

            Message::SignInResult(result) => {
                self.store.apply(Mutation::SignedIn(result.clone()));

                if !gate::should_fetch_listing(result.is_ok()) {
                    debug!("Sign-in rejected, skipping users listing");
                    return Some(Task::none());
                }

                self.core.client.save_token_to_file();

                self.store.begin(EntityKind::Users);
                let client = self.core.client.clone();
                Some(Task::perform(
                    async move { client.users().await.map_err(|e| e.to_string()) },
                    Message::SessionUsersResult,
                ))
            }

            Message::SessionUsersResult(result) => match gate::after_listing(result.is_ok()) {
                gate::ListingOutcome::Proceed => {
                    self.store
                        .apply(Mutation::UsersFetched(result.clone()));
                    self.core.is_signed_in = true;
                    self.core.account_email = self.core.pending_email.take();
                    self.ui.sign_in.form.reset();
                    self.ui.screen = Screen::Admin(NavItem::Products);
                    info!("Session established, landing on the product screen");
                    Some(Task::batch([self.load_products(), self.load_categories()]))
                }
                gate::ListingOutcome::Forbidden => {
                    // Credentials were accepted but the listing was
                    // rejected. Distinct transient condition, no
                    // navigation.
                    warn!("Users listing rejected after successful sign-in");
                    self.ui.sign_in.forbidden =
                        Some(self.core.locale.get(Key::Forbidden).to_string());
                    self.core.pending_email = None;
                    Some(Task::none())
                }
            },

            Message::TryAutoSignIn => {
                if !self.core.client.has_token() {
                    return Some(Task::none());
                }
                debug!("Replaying saved session token");
                self.store.begin(EntityKind::Users);
                let client = self.core.client.clone();
                Some(Task::perform(
                    async move { client.users().await.map_err(|e| e.to_string()) },
                    Message::AutoSignInResult,
                ))
            }

            Message::AutoSignInResult(result) => match result {
                Ok(users) => {
                    self.store
                        .apply(Mutation::UsersFetched(Ok(users.clone())));
                    self.core.is_signed_in = true;
                    self.ui.screen = Screen::Admin(NavItem::Products);
                    Some(Task::batch([self.load_products(), self.load_categories()]))
                }
                Err(e) => {
                    // Silent boot path: drop the stale token and show
                    // the sign-in screen without an error banner
                    info!("Saved session rejected: {}", e);
                    self.core.client.clear_token();
                    ShopClient::clean_token_file();
                    Some(Task::none())
                }
            },

            Message::DismissForbidden => {
                self.ui.sign_in.forbidden = None;
                Some(Task::none())
            }

            Message::SignOut => {
                self.core.client.clear_token();
                ShopClient::clean_token_file();
                self.core.is_signed_in = false;
                self.core.account_email = None;
                self.store.clear_session();
                self.ui.sign_in = Default::default();
                self.ui.products = Default::default();
                self.ui.users = Default::default();
                self.ui.screen = Screen::SignIn;
                let message = self.core.locale.get(Key::SignedOut).to_string();
                Some(self.show_toast(Toast::success(message)))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gate::*;
    use super::*;
    use crate::api::{SessionInfo, User};
    use crate::features::Settings;
    use crate::i18n::Locale;
    use crate::store::EntityStore;

    fn test_app() -> App {
        let settings = Settings::default();
        let locale = Locale::default();
        App {
            core: crate::app::state::CoreState {
                client: ShopClient::new(&settings.api.base_url),
                settings,
                locale,
                is_signed_in: false,
                account_email: None,
                pending_email: None,
            },
            store: EntityStore::new(),
            ui: crate::app::state::UiState::new(),
        }
    }

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            role_type: "manager".to_string(),
            created_at: None,
        }
    }

    mod property_two_step_gate {
        use super::*;

        #[test]
        fn rejected_credentials_never_issue_the_listing_call() {
            assert!(!should_fetch_listing(false));
        }

        #[test]
        fn accepted_credentials_issue_the_listing_call() {
            assert!(should_fetch_listing(true));
        }

        #[test]
        fn rejected_listing_is_forbidden_not_an_auth_error() {
            assert_eq!(after_listing(false), ListingOutcome::Forbidden);
        }

        #[test]
        fn fulfilled_listing_proceeds() {
            assert_eq!(after_listing(true), ListingOutcome::Proceed);
        }
    }

    #[test]
    fn rejected_credentials_surface_in_the_session_slice() {
        let mut app = test_app();
        let _ = app.update(Message::SignInResult(Err("Invalid credentials".into())));

        assert_eq!(
            app.store.error(EntityKind::Session),
            Some("Invalid credentials")
        );
        assert_eq!(app.ui.screen, Screen::SignIn);
        assert!(!app.core.is_signed_in);
        assert!(app.ui.sign_in.forbidden.is_none());
    }

    #[test]
    fn forbidden_listing_shows_its_own_message_and_does_not_navigate() {
        let mut app = test_app();
        let _ = app.update(Message::SignInResult(Ok(SessionInfo {
            token: "t-1".into(),
        })));
        let _ = app.update(Message::SessionUsersResult(Err("Forbidden".into())));

        assert_eq!(app.ui.sign_in.forbidden.as_deref(), Some("Forbidden"));
        assert_eq!(app.ui.screen, Screen::SignIn);
        assert!(!app.core.is_signed_in);
        // The auth slice stays clean: credentials were accepted
        assert!(app.store.error(EntityKind::Session).is_none());
    }

    #[test]
    fn fulfilled_listing_navigates_to_the_product_screen() {
        let mut app = test_app();
        let _ = app.update(Message::SignInResult(Ok(SessionInfo {
            token: "t-1".into(),
        })));
        let _ = app.update(Message::SessionUsersResult(Ok(vec![user("u1")])));

        assert_eq!(app.ui.screen, Screen::Admin(NavItem::Products));
        assert!(app.core.is_signed_in);
        assert_eq!(app.store.users.len(), 1);
    }

    #[test]
    fn each_attempt_clears_the_previous_forbidden_banner() {
        let mut app = test_app();
        app.ui.sign_in.forbidden = Some("Forbidden".into());
        let _ = app.update(Message::SignInSubmitted);
        assert!(app.ui.sign_in.forbidden.is_none());
    }

    #[test]
    fn empty_credentials_block_the_submit() {
        let mut app = test_app();
        let _ = app.update(Message::SignInSubmitted);
        assert!(app.ui.sign_in.form.has_errors());
        assert_eq!(app.ui.screen, Screen::SignIn);
    }

    #[test]
    fn sign_out_resets_to_the_sign_in_screen() {
        let mut app = test_app();
        let _ = app.update(Message::SignInResult(Ok(SessionInfo {
            token: "t-1".into(),
        })));
        let _ = app.update(Message::SessionUsersResult(Ok(vec![user("u1")])));

        let _ = app.update(Message::SignOut);
        assert_eq!(app.ui.screen, Screen::SignIn);
        assert!(!app.core.is_signed_in);
        assert!(app.store.users.is_empty());
    }
}
