//! Shop API model types
//!
//! Data structures for the back-office REST endpoints. The backend
//! speaks camelCase JSON; everything here round-trips through serde.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sign-in request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-in response: the bearer token for subsequent calls
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionInfo {
    pub token: String,
}

/// Garment sizes, in catalogue order. The first value is the
/// create-form default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductSize {
    #[serde(rename = "XXS")]
    Xxs,
    #[serde(rename = "XS")]
    Xs,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    Xl,
    #[serde(rename = "XXL")]
    Xxl,
}

impl ProductSize {
    pub const ALL: [ProductSize; 7] = [
        ProductSize::Xxs,
        ProductSize::Xs,
        ProductSize::S,
        ProductSize::M,
        ProductSize::L,
        ProductSize::Xl,
        ProductSize::Xxl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductSize::Xxs => "XXS",
            ProductSize::Xs => "XS",
            ProductSize::S => "S",
            ProductSize::M => "M",
            ProductSize::L => "L",
            ProductSize::Xl => "XL",
            ProductSize::Xxl => "XXL",
        }
    }

    /// Size labels accepted by the product form select
    pub const LABELS: [&'static str; 7] = ["XXS", "XS", "S", "M", "L", "XL", "XXL"];

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

impl Default for ProductSize {
    fn default() -> Self {
        ProductSize::Xxs
    }
}

impl std::fmt::Display for ProductSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalogue product as returned by the backend
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// URL of the product image
    pub image: String,
    pub price: f64,
    pub vendor_code: i64,
    pub color: String,
    pub size: ProductSize,
    pub composition: String,
    pub quantity: u32,
    pub brand: String,
    pub category_id: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for product create/update calls
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub vendor_code: i64,
    pub color: String,
    pub size: ProductSize,
    pub composition: String,
    pub quantity: u32,
    pub brand: String,
    pub category_id: i64,
}

/// Product category, fetched independently for the form select
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Role tags offered by the user form. "super-admin" is deliberately
/// absent: protected accounts are never created or edited from here.
pub const ROLE_OPTIONS: [&str; 2] = ["admin", "manager"];

/// Back-office user. The password is write-only: it goes out in
/// drafts and never comes back in responses.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// Role tag, compared verbatim ("super-admin" rows are protected)
    pub role_type: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for user create/update calls
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub email: String,
    pub password: String,
    pub role_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_parses_camel_case_payload() {
        let json = r#"{
            "id": "c0ffee-1",
            "name": "Wool scarf",
            "description": "Warm",
            "image": "https://cdn.example.com/scarf.jpg",
            "price": 24.5,
            "vendorCode": 4711,
            "color": "red",
            "size": "M",
            "composition": "wool",
            "quantity": 3,
            "brand": "Northwind",
            "categoryId": 2,
            "createdAt": "2024-03-01T10:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "c0ffee-1");
        assert_eq!(product.vendor_code, 4711);
        assert_eq!(product.size, ProductSize::M);
        assert_eq!(product.category_id, 2);
        assert!(product.created_at.is_some());
        assert!(product.updated_at.is_none());
    }

    #[test]
    fn user_payload_never_carries_a_password() {
        let json = r#"{"id": "u-1", "email": "ops@example.com", "roleType": "manager"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role_type, "manager");

        let round_trip = serde_json::to_string(&user).unwrap();
        assert!(!round_trip.contains("password"));
    }

    #[test]
    fn draft_serializes_size_as_catalogue_label() {
        let draft = ProductDraft {
            name: "Tee".into(),
            description: "Plain".into(),
            image: String::new(),
            price: 9.0,
            vendor_code: 1,
            color: "white".into(),
            size: ProductSize::Xxs,
            composition: "cotton".into(),
            quantity: 10,
            brand: "Basics".into(),
            category_id: 1,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains(r#""size":"XXS""#));
        assert!(json.contains(r#""vendorCode":1"#));
    }

    #[test]
    fn size_round_trips_through_labels() {
        for size in ProductSize::ALL {
            assert_eq!(ProductSize::from_str(size.as_str()), Some(size));
        }
        assert_eq!(ProductSize::from_str("XGIANT"), None);
        assert_eq!(ProductSize::default(), ProductSize::Xxs);
    }
}
