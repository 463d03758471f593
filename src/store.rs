//! Entity store
//!
//! Shared read model for everything fetched from the backend. The
//! store is passive: views read it, and the only writes are
//! [`EntityStore::begin`] at dispatch start and [`EntityStore::apply`]
//! with the mutation for a completed dispatch. One mutation variant
//! exists per dispatch outcome, so tests can drive the store without
//! any network or UI in the loop.

use crate::api::{Category, Product, SessionInfo, User};

/// Entity families tracked by the store, one error slice each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Session,
    Products,
    Categories,
    Users,
}

/// One completed dispatch, fulfilled or rejected
#[derive(Debug, Clone)]
pub enum Mutation {
    SignedIn(Result<SessionInfo, String>),
    ProductsFetched(Result<Vec<Product>, String>),
    ProductFetched(Result<Product, String>),
    ProductSaved(Result<Product, String>),
    /// Carries the deleted product id on success
    ProductDeleted(Result<String, String>),
    CategoriesFetched(Result<Vec<Category>, String>),
    UsersFetched(Result<Vec<User>, String>),
    UserSaved(Result<User, String>),
    /// Carries the blocked user id on success
    UserBlocked(Result<String, String>),
}

impl Mutation {
    fn kind(&self) -> EntityKind {
        match self {
            Mutation::SignedIn(_) => EntityKind::Session,
            Mutation::ProductsFetched(_)
            | Mutation::ProductFetched(_)
            | Mutation::ProductSaved(_)
            | Mutation::ProductDeleted(_) => EntityKind::Products,
            Mutation::CategoriesFetched(_) => EntityKind::Categories,
            Mutation::UsersFetched(_) | Mutation::UserSaved(_) | Mutation::UserBlocked(_) => {
                EntityKind::Users
            }
        }
    }
}

/// Last error message per entity family
#[derive(Debug, Clone, Default)]
struct ErrorSlices {
    session: Option<String>,
    products: Option<String>,
    categories: Option<String>,
    users: Option<String>,
}

impl ErrorSlices {
    fn slot(&mut self, kind: EntityKind) -> &mut Option<String> {
        match kind {
            EntityKind::Session => &mut self.session,
            EntityKind::Products => &mut self.products,
            EntityKind::Categories => &mut self.categories,
            EntityKind::Users => &mut self.users,
        }
    }

    fn get(&self, kind: EntityKind) -> Option<&str> {
        match kind {
            EntityKind::Session => self.session.as_deref(),
            EntityKind::Products => self.products.as_deref(),
            EntityKind::Categories => self.categories.as_deref(),
            EntityKind::Users => self.users.as_deref(),
        }
    }
}

/// The shared read model
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub products: Vec<Product>,
    /// Last single product fetched for edit pre-fill
    pub product: Option<Product>,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
    pub session: Option<SessionInfo>,
    errors: ErrorSlices,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a dispatch for an entity family. Clears the
    /// family's error slice so a stale failure never outlives the
    /// retry that follows it.
    pub fn begin(&mut self, kind: EntityKind) {
        *self.errors.slot(kind) = None;
    }

    /// Apply the outcome of one completed dispatch
    pub fn apply(&mut self, mutation: Mutation) {
        let kind = mutation.kind();
        match mutation {
            Mutation::SignedIn(Ok(session)) => {
                self.session = Some(session);
            }
            Mutation::ProductsFetched(Ok(products)) => {
                self.products = products;
            }
            Mutation::ProductFetched(Ok(product)) => {
                self.product = Some(product);
            }
            Mutation::ProductSaved(Ok(product)) => {
                upsert(&mut self.products, product, |p, q| p.id == q.id);
            }
            Mutation::ProductDeleted(Ok(id)) => {
                self.products.retain(|p| p.id != id);
            }
            Mutation::CategoriesFetched(Ok(categories)) => {
                self.categories = categories;
            }
            Mutation::UsersFetched(Ok(users)) => {
                self.users = users;
            }
            Mutation::UserSaved(Ok(user)) => {
                upsert(&mut self.users, user, |a, b| a.id == b.id);
            }
            Mutation::UserBlocked(Ok(id)) => {
                self.users.retain(|u| u.id != id);
            }
            Mutation::SignedIn(Err(message))
            | Mutation::ProductsFetched(Err(message))
            | Mutation::ProductFetched(Err(message))
            | Mutation::ProductSaved(Err(message))
            | Mutation::ProductDeleted(Err(message))
            | Mutation::CategoriesFetched(Err(message))
            | Mutation::UsersFetched(Err(message))
            | Mutation::UserSaved(Err(message))
            | Mutation::UserBlocked(Err(message)) => {
                *self.errors.slot(kind) = Some(message);
            }
        }
    }

    pub fn error(&self, kind: EntityKind) -> Option<&str> {
        self.errors.get(kind)
    }

    /// Dismiss the inline error banner for an entity family
    pub fn dismiss_error(&mut self, kind: EntityKind) {
        *self.errors.slot(kind) = None;
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn category_by_id(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Drop everything tied to the signed-in session
    pub fn clear_session(&mut self) {
        *self = Self::default();
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    if let Some(existing) = items.iter_mut().find(|existing| same(existing, &item)) {
        *existing = item;
    } else {
        items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ProductSize;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            image: String::new(),
            price: 10.0,
            vendor_code: 1,
            color: "black".to_string(),
            size: ProductSize::M,
            composition: "cotton".to_string(),
            quantity: 1,
            brand: "Basics".to_string(),
            category_id: 1,
            created_at: None,
            updated_at: None,
        }
    }

    fn user(id: &str, role: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            role_type: role.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn fresh_store_reads_as_empty_not_missing() {
        let store = EntityStore::new();
        assert!(store.products.is_empty());
        assert!(store.users.is_empty());
        assert!(store.product.is_none());
        assert!(store.error(EntityKind::Products).is_none());
    }

    #[test]
    fn failed_dispatch_sets_only_its_own_error_slice() {
        let mut store = EntityStore::new();
        store.apply(Mutation::ProductsFetched(Err("boom".to_string())));
        assert_eq!(store.error(EntityKind::Products), Some("boom"));
        assert!(store.error(EntityKind::Users).is_none());
        assert!(store.error(EntityKind::Session).is_none());
    }

    #[test]
    fn begin_clears_the_error_slice_before_the_retry() {
        let mut store = EntityStore::new();
        store.apply(Mutation::UsersFetched(Err("offline".to_string())));
        store.begin(EntityKind::Users);
        assert!(store.error(EntityKind::Users).is_none());
    }

    #[test]
    fn saved_product_replaces_or_appends() {
        let mut store = EntityStore::new();
        store.apply(Mutation::ProductsFetched(Ok(vec![
            product("p1", "Scarf"),
            product("p2", "Hat"),
        ])));

        let mut renamed = product("p1", "Wool scarf");
        renamed.price = 30.0;
        store.apply(Mutation::ProductSaved(Ok(renamed)));
        assert_eq!(store.products.len(), 2);
        assert_eq!(store.product_by_id("p1").unwrap().name, "Wool scarf");

        store.apply(Mutation::ProductSaved(Ok(product("p3", "Gloves"))));
        assert_eq!(store.products.len(), 3);
    }

    #[test]
    fn deleted_product_leaves_the_collection() {
        let mut store = EntityStore::new();
        store.apply(Mutation::ProductsFetched(Ok(vec![
            product("p1", "Scarf"),
            product("p2", "Hat"),
        ])));
        store.apply(Mutation::ProductDeleted(Ok("p1".to_string())));
        assert!(store.product_by_id("p1").is_none());
        assert_eq!(store.products.len(), 1);
    }

    #[test]
    fn blocked_user_leaves_the_listing() {
        let mut store = EntityStore::new();
        store.apply(Mutation::UsersFetched(Ok(vec![
            user("u1", "manager"),
            user("u2", "super-admin"),
        ])));
        store.apply(Mutation::UserBlocked(Ok("u1".to_string())));
        assert!(store.user_by_id("u1").is_none());
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn sign_in_failure_lands_in_the_session_slice() {
        let mut store = EntityStore::new();
        store.apply(Mutation::SignedIn(Err("Invalid credentials".to_string())));
        assert_eq!(store.error(EntityKind::Session), Some("Invalid credentials"));
        assert!(store.session.is_none());
    }

    #[test]
    fn clear_session_resets_everything() {
        let mut store = EntityStore::new();
        store.apply(Mutation::SignedIn(Ok(SessionInfo {
            token: "t".to_string(),
        })));
        store.apply(Mutation::UsersFetched(Ok(vec![user("u1", "admin")])));
        store.clear_session();
        assert!(store.session.is_none());
        assert!(store.users.is_empty());
    }
}
