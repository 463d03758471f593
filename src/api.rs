//! Shop backend API module
//!
//! Provides the REST client with bearer-token persistence and the
//! request/response model types exchanged with the back office.

pub mod model;
mod shop;

pub use model::{
    Category, Credentials, Product, ProductDraft, ProductSize, SessionInfo, User, UserDraft,
};
pub use shop::ShopClient;
