//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic. They are the
//! only UI layer that imports from `crate::app`.

pub mod confirm_dialog;
pub mod data_table;
pub mod error_banner;
pub mod modal_form;
pub mod sidebar;

pub use data_table::{CellValue, Column, TableKind, TableRow, TableState};
pub use sidebar::NavItem;
