//! Internationalization (i18n) support for Stockroom
//! Supports multiple languages with easy extensibility
//!
//! Structure:
//! - mod.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code == "zh" {
            Language::Chinese
        } else {
            Language::English
        }
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavProducts,
    NavUsers,
    SignOut,

    // Sign-in page
    SignInTitle,
    SignInButton,
    EmailLabel,
    PasswordLabel,
    Forbidden,

    // Common
    ErrorTitle,
    Cancel,
    Loading,

    // Products page
    ProductsTitle,
    AddProduct,
    CreateProductTitle,
    UpdateProductTitle,
    CreateButton,
    UpdateButton,
    ProductName,
    ProductImage,
    ProductPrice,
    ProductVendorCode,
    ProductColor,
    ProductSize,
    ProductComposition,
    ProductQuantity,
    ProductBrand,
    ProductDescription,
    ProductCategory,

    // Users page
    UsersTitle,
    AddUser,
    CreateUserTitle,
    UpdateUserTitle,
    UserEmail,
    UserPassword,
    UserRole,

    // Table
    RowsPerPage,
    PaginationOf,
    TableEmpty,
    ColImage,
    ColName,
    ColPrice,
    ColVendorCode,
    ColColor,
    ColSize,
    ColQuantity,
    ColBrand,
    ColCategory,
    ColEmail,
    ColRole,

    // Confirm dialogs
    DeleteProductTitle,
    DeleteProductConfirm,
    DeleteButton,
    BlockUserTitle,
    BlockUserConfirm,
    BlockButton,

    // Toasts
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    UserCreated,
    UserUpdated,
    UserBlocked,
    SignedOut,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_both_translations() {
        let keys = [
            Key::AppName,
            Key::NavProducts,
            Key::NavUsers,
            Key::SignInTitle,
            Key::Forbidden,
            Key::ProductsTitle,
            Key::UsersTitle,
            Key::RowsPerPage,
            Key::DeleteProductTitle,
            Key::BlockUserTitle,
        ];
        for key in keys {
            assert_ne!(t(Language::English, key), "???", "missing en: {:?}", key);
            assert_ne!(t(Language::Chinese, key), "???", "missing zh: {:?}", key);
        }
    }
}
