//! Product admin page
//!
//! Catalogue table plus the create/update form hosted by the modal
//! shell. On mount the products are fetched; the form select for
//! categories is fed from the category slice fetched when the modal
//! opens.

use iced::widget::{Space, button, column, container, pick_list, row, scrollable, svg, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::{Category, ProductSize};
use crate::app::Message;
use crate::app::state::ProductAdminState;
use crate::forms::FormState;
use crate::i18n::{Key, Locale};
use crate::store::{EntityKind, EntityStore};
use crate::ui::components::data_table::{self, CellValue, Column, TableKind, TableRow};
use crate::ui::components::error_banner;
use crate::ui::theme::BOLD_WEIGHT;
use crate::ui::widgets::{field_error, labeled_input};
use crate::ui::{icons, theme};

fn columns(locale: Locale) -> Vec<Column> {
    vec![
        Column::new("image", locale.get(Key::ColImage)).min_width(110.0),
        Column::new("name", locale.get(Key::ColName)).min_width(140.0),
        Column::new("price", locale.get(Key::ColPrice)).format(|price| format!("${:.2}", price)),
        Column::new("vendor_code", locale.get(Key::ColVendorCode)),
        Column::new("color", locale.get(Key::ColColor)),
        Column::new("size", locale.get(Key::ColSize)),
        Column::new("quantity", locale.get(Key::ColQuantity)),
        Column::new("brand", locale.get(Key::ColBrand)),
        Column::new("category", locale.get(Key::ColCategory)),
    ]
}

fn rows(store: &EntityStore) -> Vec<TableRow> {
    store
        .products
        .iter()
        .map(|product| {
            let category = match store.category_by_id(product.category_id) {
                Some(category) => CellValue::Text(category.name.clone()),
                None => CellValue::Integer(product.category_id),
            };
            TableRow::new(product.id.clone())
                .cell("image", CellValue::Text(product.image.clone()))
                .cell("name", CellValue::Text(product.name.clone()))
                .cell("price", CellValue::Number(product.price))
                .cell("vendor_code", CellValue::Integer(product.vendor_code))
                .cell("color", CellValue::Text(product.color.clone()))
                .cell("size", CellValue::Text(product.size.as_str().to_string()))
                .cell("quantity", CellValue::Integer(i64::from(product.quantity)))
                .cell("brand", CellValue::Text(product.brand.clone()))
                .cell("category", category)
        })
        .collect()
}

/// Build the product admin screen
pub fn view<'a>(
    store: &'a EntityStore,
    state: &'a ProductAdminState,
    locale: Locale,
) -> Element<'a, Message> {
    let title = text(locale.get(Key::ProductsTitle))
        .size(26)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let add_button = button(
        row![
            svg(svg::Handle::from_memory(icons::PLUS.as_bytes()))
                .width(16)
                .height(16)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::accent(theme)),
                }),
            Space::new().width(8),
            text(locale.get(Key::AddProduct)).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(8.0).left(14.0).right(16.0))
    .style(theme::secondary_button)
    .on_press(Message::OpenProductForm(None));

    let header = row![title, Space::new().width(Fill), add_button].align_y(Alignment::Center);

    let banner: Element<'a, Message> = match store.error(EntityKind::Products) {
        Some(message) => column![
            error_banner::view(message, Message::DismissError(EntityKind::Products), locale),
            Space::new().height(16),
        ]
        .into(),
        None => Space::new().height(0).into(),
    };

    let table = data_table::view(
        columns(locale),
        rows(store),
        state.table,
        TableKind::Products,
        Some(&state.images),
        |id| Message::OpenProductForm(Some(id)),
        Message::RequestDeleteProduct,
        Message::ProductsPageChanged,
        Message::ProductsRowsPerPageChanged,
        locale,
    );

    let content = column![header, Space::new().height(20), banner, table]
        .padding(Padding::new(28.0))
        .width(Fill);

    container(scrollable(content).style(theme::content_scrollable))
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
}

/// Build the create/update form body hosted by the modal shell
pub fn form_view<'a>(
    form: &'a FormState,
    categories: &'a [Category],
    products_error: Option<&'a str>,
    categories_error: Option<&'a str>,
    locale: Locale,
) -> Element<'a, Message> {
    let selected_size = ProductSize::from_str(form.value("size"));
    let size_select = column![
        text(locale.get(Key::ProductSize))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().height(6),
        pick_list(ProductSize::ALL, selected_size, |size: ProductSize| {
            Message::ProductFieldChanged("size", size.to_string())
        })
        .width(Fill)
        .padding(10)
        .text_size(14)
        .style(theme::form_pick_list)
        .menu_style(theme::pick_list_menu),
        field_error(form.error("size")),
    ];

    let selected_category = categories
        .iter()
        .find(|category| category.id.to_string() == form.value("category"))
        .cloned();
    let category_select = column![
        text(locale.get(Key::ProductCategory))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().height(6),
        pick_list(categories, selected_category, |category: Category| {
            Message::ProductFieldChanged("category", category.id.to_string())
        })
        .width(Fill)
        .padding(10)
        .text_size(14)
        .style(theme::form_pick_list)
        .menu_style(theme::pick_list_menu),
        field_error(form.error("category")),
    ];

    let store_banner: Element<'a, Message> = if let Some(message) = products_error {
        column![
            Space::new().height(12),
            error_banner::view(message, Message::DismissError(EntityKind::Products), locale),
        ]
        .into()
    } else if let Some(message) = categories_error {
        column![
            Space::new().height(12),
            error_banner::view(
                message,
                Message::DismissError(EntityKind::Categories),
                locale,
            ),
        ]
        .into()
    } else {
        Space::new().height(0).into()
    };

    column![
        labeled_input(
            locale.get(Key::ProductName),
            form.value("name"),
            form.error("name"),
            |value| Message::ProductFieldChanged("name", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductImage),
            form.value("image"),
            form.error("image"),
            |value| Message::ProductFieldChanged("image", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductPrice),
            form.value("price"),
            form.error("price"),
            |value| Message::ProductFieldChanged("price", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductVendorCode),
            form.value("vendor_code"),
            form.error("vendor_code"),
            |value| Message::ProductFieldChanged("vendor_code", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductColor),
            form.value("color"),
            form.error("color"),
            |value| Message::ProductFieldChanged("color", value),
            false,
        ),
        Space::new().height(12),
        size_select,
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductComposition),
            form.value("composition"),
            form.error("composition"),
            |value| Message::ProductFieldChanged("composition", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductQuantity),
            form.value("quantity"),
            form.error("quantity"),
            |value| Message::ProductFieldChanged("quantity", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductBrand),
            form.value("brand"),
            form.error("brand"),
            |value| Message::ProductFieldChanged("brand", value),
            false,
        ),
        Space::new().height(12),
        labeled_input(
            locale.get(Key::ProductDescription),
            form.value("description"),
            form.error("description"),
            |value| Message::ProductFieldChanged("description", value),
            false,
        ),
        Space::new().height(12),
        category_select,
        store_banner,
    ]
    .width(Fill)
    .into()
}
