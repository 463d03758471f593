//! Shared task builders used across update handlers

use std::time::Duration;

use iced::Task;

use crate::api::Product;
use crate::app::{App, Message};
use crate::store::EntityKind;
use crate::ui::widgets::Toast;

const TOAST_SECS: u64 = 3;

impl App {
    /// Fetch the product collection
    pub(crate) fn load_products(&mut self) -> Task<Message> {
        self.store.begin(EntityKind::Products);
        let client = self.core.client.clone();
        Task::perform(
            async move { client.products().await.map_err(|e| e.to_string()) },
            Message::ProductsLoaded,
        )
    }

    /// Fetch the category collection for the product form select
    pub(crate) fn load_categories(&mut self) -> Task<Message> {
        self.store.begin(EntityKind::Categories);
        let client = self.core.client.clone();
        Task::perform(
            async move { client.categories().await.map_err(|e| e.to_string()) },
            Message::CategoriesLoaded,
        )
    }

    /// Fetch the user collection
    pub(crate) fn load_users(&mut self) -> Task<Message> {
        self.store.begin(EntityKind::Users);
        let client = self.core.client.clone();
        Task::perform(
            async move { client.users().await.map_err(|e| e.to_string()) },
            Message::UsersLoaded,
        )
    }

    /// Fetch one product for edit pre-fill
    pub(crate) fn fetch_product(&mut self, id: String) -> Task<Message> {
        self.store.begin(EntityKind::Products);
        let client = self.core.client.clone();
        Task::perform(
            async move { client.product_by_id(&id).await.map_err(|e| e.to_string()) },
            Message::ProductPrefillLoaded,
        )
    }

    /// Download images for products that have none cached yet
    pub(crate) fn fetch_product_images(&self, products: &[Product]) -> Task<Message> {
        let mut tasks = Vec::new();
        for product in products {
            if self.ui.products.images.contains_key(&product.id) {
                continue;
            }
            let client = self.core.client.clone();
            let id = product.id.clone();
            let url = product.image.clone();
            tasks.push(Task::perform(
                async move {
                    crate::utils::download_product_image(&client, &id, &url)
                        .await
                        .map(|path| (id, path))
                },
                |result| match result {
                    Some((id, path)) => Message::ProductImageLoaded(id, path),
                    None => Message::Noop,
                },
            ));
        }
        Task::batch(tasks)
    }

    /// Show a toast and schedule its dismissal
    pub(crate) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_visible = true;
        Task::perform(
            async move {
                tokio::time::sleep(Duration::from_secs(TOAST_SECS)).await;
            },
            |_| Message::HideToast,
        )
    }
}
