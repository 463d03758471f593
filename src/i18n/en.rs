//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Stockroom");

    // Navigation
    m.insert(Key::NavProducts, "Products");
    m.insert(Key::NavUsers, "Users");
    m.insert(Key::SignOut, "Sign out");

    // Sign-in page
    m.insert(Key::SignInTitle, "Sign in");
    m.insert(Key::SignInButton, "Sign in");
    m.insert(Key::EmailLabel, "Email");
    m.insert(Key::PasswordLabel, "Password");
    m.insert(Key::Forbidden, "Forbidden");

    // Common
    m.insert(Key::ErrorTitle, "Error");
    m.insert(Key::Cancel, "Cancel");
    m.insert(Key::Loading, "Loading...");

    // Products page
    m.insert(Key::ProductsTitle, "Products");
    m.insert(Key::AddProduct, "Add product");
    m.insert(Key::CreateProductTitle, "Create product");
    m.insert(Key::UpdateProductTitle, "Update product");
    m.insert(Key::CreateButton, "Create");
    m.insert(Key::UpdateButton, "Update");
    m.insert(Key::ProductName, "Product name");
    m.insert(Key::ProductImage, "Url to product image");
    m.insert(Key::ProductPrice, "Price");
    m.insert(Key::ProductVendorCode, "Vendor code");
    m.insert(Key::ProductColor, "Color");
    m.insert(Key::ProductSize, "Size");
    m.insert(Key::ProductComposition, "Composition");
    m.insert(Key::ProductQuantity, "Quantity");
    m.insert(Key::ProductBrand, "Brand");
    m.insert(Key::ProductDescription, "Description");
    m.insert(Key::ProductCategory, "Category");

    // Users page
    m.insert(Key::UsersTitle, "Users");
    m.insert(Key::AddUser, "Add user");
    m.insert(Key::CreateUserTitle, "Create user");
    m.insert(Key::UpdateUserTitle, "Update user");
    m.insert(Key::UserEmail, "Email");
    m.insert(Key::UserPassword, "Password");
    m.insert(Key::UserRole, "Role");

    // Table
    m.insert(Key::RowsPerPage, "Rows per page");
    m.insert(Key::PaginationOf, "of");
    m.insert(Key::TableEmpty, "Nothing to show");
    m.insert(Key::ColImage, "Image");
    m.insert(Key::ColName, "Name");
    m.insert(Key::ColPrice, "Price");
    m.insert(Key::ColVendorCode, "Vendor code");
    m.insert(Key::ColColor, "Color");
    m.insert(Key::ColSize, "Size");
    m.insert(Key::ColQuantity, "Quantity");
    m.insert(Key::ColBrand, "Brand");
    m.insert(Key::ColCategory, "Category");
    m.insert(Key::ColEmail, "Email");
    m.insert(Key::ColRole, "Role");

    // Confirm dialogs
    m.insert(Key::DeleteProductTitle, "Delete product");
    m.insert(
        Key::DeleteProductConfirm,
        "This removes the product from the catalogue. Continue?",
    );
    m.insert(Key::DeleteButton, "Delete");
    m.insert(Key::BlockUserTitle, "Block user");
    m.insert(
        Key::BlockUserConfirm,
        "This disables the account and removes it from the listing. Continue?",
    );
    m.insert(Key::BlockButton, "Block");

    // Toasts
    m.insert(Key::ProductCreated, "Product created");
    m.insert(Key::ProductUpdated, "Product updated");
    m.insert(Key::ProductDeleted, "Product deleted");
    m.insert(Key::UserCreated, "User created");
    m.insert(Key::UserUpdated, "User updated");
    m.insert(Key::UserBlocked, "User blocked");
    m.insert(Key::SignedOut, "Signed out");

    m
});

pub(super) fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
