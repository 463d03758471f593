//! Per-form field schemas
//!
//! Field names are the value-bag keys the pages and update handlers
//! use to read and seed forms; keep them in sync with the DTO
//! builders in `app::update`.

use crate::api::ProductSize;
use crate::api::model::ROLE_OPTIONS;

use super::rules::{FieldSchema, Rule};

pub const SIGN_IN: &[FieldSchema] = &[
    FieldSchema {
        name: "email",
        label: "Email",
        rules: &[Rule::Required, Rule::Email],
    },
    FieldSchema {
        name: "password",
        label: "Password",
        rules: &[Rule::Required],
    },
];

pub const PRODUCT: &[FieldSchema] = &[
    FieldSchema {
        name: "name",
        label: "Product name",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "image",
        label: "Image URL",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "price",
        label: "Price",
        rules: &[Rule::Required, Rule::Number, Rule::Min(0.0)],
    },
    FieldSchema {
        name: "vendor_code",
        label: "Vendor code",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(0.0)],
    },
    FieldSchema {
        name: "color",
        label: "Color",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "size",
        label: "Size",
        rules: &[Rule::Required, Rule::OneOf(&ProductSize::LABELS)],
    },
    FieldSchema {
        name: "composition",
        label: "Composition",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "quantity",
        label: "Quantity",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(0.0)],
    },
    FieldSchema {
        name: "brand",
        label: "Brand",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "description",
        label: "Description",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "category",
        label: "Category",
        rules: &[Rule::Required],
    },
];

pub const USER: &[FieldSchema] = &[
    FieldSchema {
        name: "email",
        label: "Email",
        rules: &[Rule::Required, Rule::Email],
    },
    FieldSchema {
        name: "password",
        label: "Password",
        rules: &[Rule::Required],
    },
    FieldSchema {
        name: "role",
        label: "Role",
        rules: &[Rule::Required, Rule::OneOf(&ROLE_OPTIONS)],
    },
];
