//! Form framework - declarative validation and form state
//!
//! Split in three layers:
//!
//! - **Rules** (`rules`): pure field-level checks, no UI dependency
//! - **Schemas** (`schemas`): the per-form field lists
//! - **Controller** (`controller`): the value bag + error bag driven
//!   by the pages, revalidating on every edit

pub mod controller;
pub mod rules;
pub mod schemas;

pub use controller::FormState;
pub use rules::{FieldSchema, Rule};
