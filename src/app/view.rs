//! Application view rendering

use iced::widget::{Space, column, container, row, stack, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use super::state::{ModalState, Screen};
use crate::i18n::Key;
use crate::store::EntityKind;
use crate::ui::components::{NavItem, confirm_dialog, modal_form, sidebar};
use crate::ui::{pages, widgets};

impl App {
    /// Build the application view
    pub fn view(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        // Active screen
        let screen: Element<'_, Message> = match self.ui.screen {
            Screen::SignIn => pages::sign_in::view(
                &self.ui.sign_in,
                self.store.error(EntityKind::Session),
                locale,
            ),
            Screen::Admin(item) => {
                let content = match item {
                    NavItem::Products => {
                        pages::products::view(&self.store, &self.ui.products, locale)
                    }
                    NavItem::Users => pages::users::view(&self.store, &self.ui.users, locale),
                };
                row![
                    sidebar::view(item, self.core.account_email.as_deref(), locale),
                    content,
                ]
                .width(Fill)
                .height(Fill)
                .into()
            }
        };

        // Product modal overlay
        let product_modal: Element<'_, Message> = match &self.ui.products.modal {
            ModalState::Idle => Space::new().width(0).height(0).into(),
            ModalState::Fetching { .. } => modal_form::view(
                locale.get(Key::UpdateProductTitle),
                locale.get(Key::UpdateButton),
                loading_body(locale),
                Message::Noop,
                Message::CloseProductForm,
                locale,
            ),
            ModalState::Editing { id, form } => {
                // Create and update differ only in title, label, and
                // which dispatch the submit runs
                let (title, label) = if id.is_some() {
                    (Key::UpdateProductTitle, Key::UpdateButton)
                } else {
                    (Key::CreateProductTitle, Key::CreateButton)
                };
                modal_form::view(
                    locale.get(title),
                    locale.get(label),
                    pages::products::form_view(
                        form,
                        &self.store.categories,
                        self.store.error(EntityKind::Products),
                        self.store.error(EntityKind::Categories),
                        locale,
                    ),
                    Message::ProductFormSubmitted,
                    Message::CloseProductForm,
                    locale,
                )
            }
        };

        // User modal overlay
        let user_modal: Element<'_, Message> = match &self.ui.users.modal {
            ModalState::Idle | ModalState::Fetching { .. } => {
                Space::new().width(0).height(0).into()
            }
            ModalState::Editing { id, form } => {
                let (title, label) = if id.is_some() {
                    (Key::UpdateUserTitle, Key::UpdateButton)
                } else {
                    (Key::CreateUserTitle, Key::CreateButton)
                };
                modal_form::view(
                    locale.get(title),
                    locale.get(label),
                    pages::users::form_view(
                        form,
                        self.store.error(EntityKind::Users),
                        locale,
                    ),
                    Message::UserFormSubmitted,
                    Message::CloseUserForm,
                    locale,
                )
            }
        };

        // Delete/block confirmation overlays
        let delete_confirm: Element<'_, Message> = if self.ui.products.pending_delete.is_some() {
            confirm_dialog::view(
                locale.get(Key::DeleteProductTitle),
                locale.get(Key::DeleteProductConfirm),
                locale.get(Key::DeleteButton),
                Message::ConfirmDeleteProduct,
                Message::CancelDeleteProduct,
                locale,
            )
        } else {
            Space::new().width(0).height(0).into()
        };

        let block_confirm: Element<'_, Message> = if self.ui.users.pending_block.is_some() {
            confirm_dialog::view(
                locale.get(Key::BlockUserTitle),
                locale.get(Key::BlockUserConfirm),
                locale.get(Key::BlockButton),
                Message::ConfirmBlockUser,
                Message::CancelBlockUser,
                locale,
            )
        } else {
            Space::new().width(0).height(0).into()
        };

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if self.ui.toast_visible {
            if let Some(toast) = &self.ui.toast {
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .padding(20)
                    .align_x(Alignment::Center)
                    .into()
            } else {
                Space::new().width(0).height(0).into()
            }
        } else {
            Space::new().width(0).height(0).into()
        };

        // Consistent stack structure keeps scroll state stable
        stack![
            screen,
            product_modal,
            user_modal,
            delete_confirm,
            block_confirm,
            toast_overlay,
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}

fn loading_body<'a>(locale: crate::i18n::Locale) -> Element<'a, Message> {
    container(
        column![
            text(locale.get(Key::Loading))
                .size(14)
                .style(|theme| text::Style {
                    color: Some(crate::ui::theme::text_secondary(theme)),
                }),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(24)
    .align_x(Alignment::Center)
    .into()
}
