//! Application state definitions

use std::collections::HashMap;

use crate::api::ShopClient;
use crate::features::Settings;
use crate::forms::{FormState, schemas};
use crate::i18n::Locale;
use crate::store::EntityStore;
use crate::ui::components::{NavItem, TableState};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (client, settings, session)
    pub core: CoreState,
    /// Shared read model fed by dispatch outcomes
    pub store: EntityStore,
    /// UI state (active screen, page states, overlays)
    pub ui: UiState,
}

/// Core infrastructure & session
pub struct CoreState {
    pub client: ShopClient,
    pub settings: Settings,
    pub locale: Locale,
    pub is_signed_in: bool,
    /// Email typed into the sign-in form, shown in the sidebar once
    /// the session is established
    pub account_email: Option<String>,
    /// Holds the email between submit and the gated listing outcome
    pub pending_email: Option<String>,
}

impl CoreState {
    /// Initialize core services with loaded settings. Picks up a
    /// token left behind by a previous session, if any.
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let client = match ShopClient::load_token_from_file() {
            Some(token) => ShopClient::with_token(&settings.api.base_url, token),
            None => ShopClient::new(&settings.api.base_url),
        };

        Self {
            client,
            settings,
            locale,
            is_signed_in: false,
            account_email: None,
            pending_email: None,
        }
    }
}

/// Top-level screen selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignIn,
    Admin(NavItem),
}

/// Sign-in page state
pub struct SignInState {
    pub form: FormState,
    /// The post-auth listing rejection message. Deliberately not in
    /// the store's error slices: it is a distinct transient condition
    /// cleared at the start of each attempt.
    pub forbidden: Option<String>,
}

impl Default for SignInState {
    fn default() -> Self {
        Self {
            form: FormState::new(schemas::SIGN_IN),
            forbidden: None,
        }
    }
}

/// Modal session for one entity-admin page
///
/// `Idle -> Editing(blank)` on create, `Idle -> Fetching -> Editing`
/// on edit; a failed submit stays in `Editing` with the store error
/// surfaced inline.
pub enum ModalState {
    Idle,
    Fetching { id: String },
    Editing { id: Option<String>, form: FormState },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Idle)
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            ModalState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self {
            ModalState::Editing { form, .. } => Some(form),
            _ => None,
        }
    }

    /// The id being edited, None for a create session
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            ModalState::Editing { id, .. } => id.as_deref(),
            ModalState::Fetching { id } => Some(id),
            ModalState::Idle => None,
        }
    }
}

/// Product admin page state
pub struct ProductAdminState {
    pub modal: ModalState,
    pub table: TableState,
    /// Cached image handles keyed by product id
    pub images: HashMap<String, iced::widget::image::Handle>,
    /// Row awaiting delete confirmation
    pub pending_delete: Option<String>,
}

impl Default for ProductAdminState {
    fn default() -> Self {
        Self {
            modal: ModalState::Idle,
            table: TableState::default(),
            images: HashMap::new(),
            pending_delete: None,
        }
    }
}

/// User admin page state
pub struct UserAdminState {
    pub modal: ModalState,
    pub table: TableState,
    /// Row awaiting block confirmation
    pub pending_block: Option<String>,
}

impl Default for UserAdminState {
    fn default() -> Self {
        Self {
            modal: ModalState::Idle,
            table: TableState::default(),
            pending_block: None,
        }
    }
}

/// UI view state
pub struct UiState {
    pub screen: Screen,
    pub sign_in: SignInState,
    pub products: ProductAdminState,
    pub users: UserAdminState,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::SignIn,
            sign_in: SignInState::default(),
            products: ProductAdminState::default(),
            users: UserAdminState::default(),
            toast: None,
            toast_visible: false,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
