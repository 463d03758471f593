//! Pages module
//! Full-screen views for the admin console

pub mod products;
pub mod sign_in;
pub mod users;
