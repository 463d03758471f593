//! Application messages

use std::path::PathBuf;

use iced::keyboard::{Key, Modifiers};

use crate::api::{Category, Product, SessionInfo, User};
use crate::store::EntityKind;
use crate::ui::components::NavItem;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    /// Admin screen selected in the sidebar
    Navigate(NavItem),
    /// End the session and return to the sign-in screen
    SignOut,
    /// Keyboard event (Escape closes open dialogs)
    KeyPressed(Key, Modifiers),

    // ============ Session ============
    /// Sign-in form: email edited
    SignInEmailChanged(String),
    /// Sign-in form: password edited
    SignInPasswordChanged(String),
    /// Sign-in form submitted
    SignInSubmitted,
    /// Authentication outcome
    SignInResult(Result<SessionInfo, String>),
    /// Outcome of the users listing gated behind authentication
    SessionUsersResult(Result<Vec<User>, String>),
    /// Replay a saved token on boot
    TryAutoSignIn,
    /// Outcome of the boot-time listing probe
    AutoSignInResult(Result<Vec<User>, String>),
    /// Clear the transient "Forbidden" banner
    DismissForbidden,

    // ============ Entity store ============
    /// Dismiss the inline error banner for an entity family
    DismissError(EntityKind),

    // ============ Products ============
    /// Product listing outcome
    ProductsLoaded(Result<Vec<Product>, String>),
    /// Open the product modal: None creates, Some(id) edits
    OpenProductForm(Option<String>),
    /// Close the product modal without submitting
    CloseProductForm,
    /// Edit pre-fill fetch outcome
    ProductPrefillLoaded(Result<Product, String>),
    /// Product form field edited
    ProductFieldChanged(&'static str, String),
    /// Product form submitted
    ProductFormSubmitted,
    /// Create/update outcome
    ProductSaveResult {
        created: bool,
        result: Result<Product, String>,
    },
    /// Row delete intent from the table
    RequestDeleteProduct(String),
    ConfirmDeleteProduct,
    CancelDeleteProduct,
    /// Delete outcome, carrying the product id
    ProductDeleteResult(Result<String, String>),
    /// Product image cached on disk
    ProductImageLoaded(String, PathBuf),
    ProductsPageChanged(usize),
    ProductsRowsPerPageChanged(usize),

    // ============ Categories ============
    /// Category listing outcome (feeds the product form select)
    CategoriesLoaded(Result<Vec<Category>, String>),

    // ============ Users ============
    /// User listing outcome
    UsersLoaded(Result<Vec<User>, String>),
    /// Open the user modal: None creates, Some(id) edits
    OpenUserForm(Option<String>),
    CloseUserForm,
    /// User form field edited
    UserFieldChanged(&'static str, String),
    UserFormSubmitted,
    /// Create/update outcome
    UserSaveResult {
        created: bool,
        result: Result<User, String>,
    },
    /// Row block intent from the table
    RequestBlockUser(String),
    ConfirmBlockUser,
    CancelBlockUser,
    /// Block outcome, carrying the user id
    UserBlockResult(Result<String, String>),
    UsersPageChanged(usize),
    UsersRowsPerPageChanged(usize),

    // ============ Toast ============
    /// Show toast notification
    ShowToast(String),
    /// Show error toast notification
    ShowErrorToast(String),
    /// Hide toast notification
    HideToast,
}
