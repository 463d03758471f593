//! Generic data table component
//!
//! Renders an ordered collection of rows against a column
//! specification with client-side pagination and per-row edit and
//! delete/block affordances. The "image" column id is special-cased
//! into a bounded image cell; every other cell is coerced to text,
//! with "-" standing in for empty values and arrays joined with
//! commas.

use std::collections::HashMap;
use std::ops::Range;

use iced::widget::{Space, button, column, container, image, pick_list, row, svg, text};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::{icons, theme};

/// Role value whose rows never render edit or delete affordances.
/// Compared verbatim; "Super-Admin" or "superadmin" do not match.
pub const PROTECTED_ROLE: &str = "super-admin";

/// Selectable page sizes
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [3, 5, 10];

const DEFAULT_ROWS_PER_PAGE: usize = 5;

const IMAGE_CELL_WIDTH: f32 = 96.0;
const IMAGE_CELL_HEIGHT: f32 = 64.0;
const ACTIONS_WIDTH: f32 = 88.0;

/// Table column specification
#[derive(Debug, Clone, Copy)]
pub struct Column {
    /// Row cell key; `"image"` renders as a bounded image
    pub id: &'static str,
    pub label: &'static str,
    pub min_width: Option<f32>,
    /// Display formatter, applied to numeric cells only
    pub format: Option<fn(f64) -> String>,
}

impl Column {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            min_width: None,
            format: None,
        }
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn format(mut self, format: fn(f64) -> String) -> Self {
        self.format = Some(format);
        self
    }
}

/// One table cell value. Nested objects are unrepresentable by
/// construction, which closes the coercion question: everything here
/// has an obvious text rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Integer(i64),
    List(Vec<String>),
}

/// One table row: identifier, optional role tag, cells keyed by
/// column id. Missing keys render as the placeholder dash.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub id: String,
    pub role: Option<String>,
    pub cells: HashMap<&'static str, CellValue>,
}

impl TableRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: None,
            cells: HashMap::new(),
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn cell(mut self, id: &'static str, value: CellValue) -> Self {
        self.cells.insert(id, value);
        self
    }
}

/// Which delete affordance a table renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Delete (trash) per row
    Products,
    /// Block (disable) per row
    Users,
}

/// Client-side pagination state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl TableState {
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Changing the page size always jumps back to the first page
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.rows_per_page = rows_per_page;
        self.page = 0;
    }
}

/// Index range of the rows visible on the given page
pub fn page_slice(total: usize, page: usize, rows_per_page: usize) -> Range<usize> {
    let start = (page * rows_per_page).min(total);
    let end = (start + rows_per_page).min(total);
    start..end
}

/// Whether a row's role exempts it from edit/delete affordances
pub fn is_protected(role: Option<&str>) -> bool {
    role == Some(PROTECTED_ROLE)
}

/// Coerce a cell to its display text
pub fn display_text(cell: Option<&CellValue>) -> String {
    match cell {
        None => "-".to_string(),
        Some(CellValue::Text(s)) => {
            if s.is_empty() {
                "-".to_string()
            } else {
                s.clone()
            }
        }
        Some(CellValue::Number(n)) => format_number(*n),
        Some(CellValue::Integer(i)) => i.to_string(),
        Some(CellValue::List(items)) => {
            if items.is_empty() {
                "-".to_string()
            } else {
                items.join(", ")
            }
        }
    }
}

/// Cell text with the column's formatter applied to numeric values
pub fn formatted(column: &Column, cell: Option<&CellValue>) -> String {
    match (column.format, cell) {
        (Some(format), Some(CellValue::Number(n))) => format(*n),
        (Some(format), Some(CellValue::Integer(i))) => format(*i as f64),
        _ => display_text(cell),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Build the table view. Columns and rows are built per call by the
/// hosting page, so the table takes them by value.
pub fn view<'a>(
    columns: Vec<Column>,
    rows: Vec<TableRow>,
    state: TableState,
    kind: TableKind,
    images: Option<&HashMap<String, image::Handle>>,
    on_edit: fn(String) -> Message,
    on_delete: fn(String) -> Message,
    on_page: fn(usize) -> Message,
    on_rows_per_page: fn(usize) -> Message,
    locale: Locale,
) -> Element<'a, Message> {
    let header = view_header(&columns);
    let total = rows.len();

    let body: Element<'a, Message> = if rows.is_empty() {
        container(
            text(locale.get(Key::TableEmpty))
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .width(Fill)
        .padding(32)
        .align_x(Alignment::Center)
        .into()
    } else {
        let visible = page_slice(total, state.page, state.rows_per_page);
        let items: Vec<Element<'a, Message>> = rows[visible]
            .iter()
            .map(|table_row| view_row(&columns, table_row, kind, images, on_edit, on_delete))
            .collect();
        column(items).into()
    };

    let pagination = view_pagination(total, state, on_page, on_rows_per_page, locale);

    container(column![header, body, pagination])
        .width(Fill)
        .style(theme::card)
        .into()
}

fn view_header<'a>(columns: &[Column]) -> Element<'a, Message> {
    let mut cells: Vec<Element<'a, Message>> = columns
        .iter()
        .map(|column| {
            header_cell(
                text(column.label)
                    .size(13)
                    .font(iced::Font {
                        weight: theme::MEDIUM_WEIGHT,
                        ..Default::default()
                    })
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme)),
                    })
                    .into(),
                column.min_width,
            )
        })
        .collect();
    // Trailing actions column
    cells.push(Space::new().width(ACTIONS_WIDTH).into());

    container(
        row(cells)
            .align_y(Alignment::Center)
            .padding(Padding::new(10.0).left(16.0).right(16.0)),
    )
    .width(Fill)
    .style(theme::table_header)
    .into()
}

fn header_cell<'a>(content: Element<'a, Message>, min_width: Option<f32>) -> Element<'a, Message> {
    let cell = container(content).align_x(Alignment::Center);
    match min_width {
        Some(width) => cell.width(Length::Fixed(width)).into(),
        None => cell.width(Fill).into(),
    }
}

fn view_row<'a>(
    columns: &[Column],
    table_row: &TableRow,
    kind: TableKind,
    images: Option<&HashMap<String, image::Handle>>,
    on_edit: fn(String) -> Message,
    on_delete: fn(String) -> Message,
) -> Element<'a, Message> {
    let mut cells: Vec<Element<'a, Message>> = columns
        .iter()
        .map(|column| {
            let cell = table_row.cells.get(column.id);
            let content: Element<'a, Message> = if column.id == "image" {
                view_image_cell(images.and_then(|map| map.get(&table_row.id)).cloned())
            } else {
                text(formatted(column, cell))
                    .size(13)
                    .style(|theme| text::Style {
                        color: Some(theme::text_primary(theme)),
                    })
                    .into()
            };
            header_cell(content, column.min_width)
        })
        .collect();

    cells.push(view_actions(table_row, kind, on_edit, on_delete));

    container(
        row(cells)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0).left(16.0).right(16.0)),
    )
    .width(Fill)
    .style(|theme| container::Style {
        border: iced::Border {
            color: theme::divider(theme),
            width: 0.5,
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

fn view_image_cell<'a>(handle: Option<image::Handle>) -> Element<'a, Message> {
    match handle {
        Some(handle) => container(
            image(handle)
                .width(IMAGE_CELL_WIDTH)
                .height(IMAGE_CELL_HEIGHT)
                .content_fit(iced::ContentFit::Cover),
        )
        .clip(true)
        .style(|_theme| container::Style {
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into(),
        // Placeholder while the download is in flight (or failed)
        None => container(
            svg(svg::Handle::from_memory(icons::IMAGE.as_bytes()))
                .width(20)
                .height(20)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .width(IMAGE_CELL_WIDTH)
        .height(IMAGE_CELL_HEIGHT)
        .center_x(IMAGE_CELL_WIDTH)
        .center_y(IMAGE_CELL_HEIGHT)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface_container(theme))),
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into(),
    }
}

fn view_actions<'a>(
    table_row: &TableRow,
    kind: TableKind,
    on_edit: fn(String) -> Message,
    on_delete: fn(String) -> Message,
) -> Element<'a, Message> {
    let protected = is_protected(table_row.role.as_deref());

    let mut actions: Vec<Element<'a, Message>> = Vec::new();

    if !protected {
        actions.push(
            button(
                svg(svg::Handle::from_memory(icons::EDIT.as_bytes()))
                    .width(16)
                    .height(16)
                    .style(|theme, _status| svg::Style {
                        color: Some(theme::text_secondary(theme)),
                    }),
            )
            .padding(6)
            .style(theme::icon_button)
            .on_press(on_edit(table_row.id.clone()))
            .into(),
        );
    }

    let delete_affordance = match kind {
        // User rows lose the block affordance when protected
        TableKind::Users => !protected,
        TableKind::Products => true,
    };
    if delete_affordance {
        let glyph = match kind {
            TableKind::Products => icons::TRASH,
            TableKind::Users => icons::BLOCK,
        };
        actions.push(
            button(
                svg(svg::Handle::from_memory(glyph.as_bytes()))
                    .width(16)
                    .height(16)
                    .style(|theme, _status| svg::Style {
                        color: Some(theme::danger(theme)),
                    }),
            )
            .padding(6)
            .style(theme::icon_button)
            .on_press(on_delete(table_row.id.clone()))
            .into(),
        );
    }

    container(row(actions).spacing(4).align_y(Alignment::Center))
        .width(ACTIONS_WIDTH)
        .align_x(Alignment::End)
        .into()
}

fn view_pagination<'a>(
    total: usize,
    state: TableState,
    on_page: fn(usize) -> Message,
    on_rows_per_page: fn(usize) -> Message,
    locale: Locale,
) -> Element<'a, Message> {
    let visible = page_slice(total, state.page, state.rows_per_page);

    let range_label = if total == 0 {
        format!("0 {} 0", locale.get(Key::PaginationOf))
    } else {
        format!(
            "{}-{} {} {}",
            visible.start + 1,
            visible.end,
            locale.get(Key::PaginationOf),
            total
        )
    };

    let size_select = pick_list(
        ROWS_PER_PAGE_OPTIONS,
        Some(state.rows_per_page),
        on_rows_per_page,
    )
    .text_size(13)
    .padding(Padding::new(4.0).left(10.0).right(10.0))
    .style(theme::form_pick_list)
    .menu_style(theme::pick_list_menu);

    let prev = button(
        svg(svg::Handle::from_memory(icons::CHEVRON_LEFT.as_bytes()))
            .width(16)
            .height(16)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(6)
    .style(theme::icon_button)
    .on_press_maybe((state.page > 0).then(|| on_page(state.page - 1)));

    let next = button(
        svg(svg::Handle::from_memory(icons::CHEVRON_RIGHT.as_bytes()))
            .width(16)
            .height(16)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(6)
    .style(theme::icon_button)
    .on_press_maybe((visible.end < total).then(|| on_page(state.page + 1)));

    row![
        Space::new().width(Fill),
        text(locale.get(Key::RowsPerPage))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().width(8),
        size_select,
        Space::new().width(20),
        text(range_label).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
        Space::new().width(12),
        prev,
        next,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(10.0).left(16.0).right(12.0))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_rows_paginate_as_expected() {
        // 12 rows, page size 5: pages are 0-4, 5-9, 10-11
        assert_eq!(page_slice(12, 0, 5), 0..5);
        assert_eq!(page_slice(12, 1, 5), 5..10);
        assert_eq!(page_slice(12, 2, 5), 10..12);
    }

    #[test]
    fn out_of_range_pages_collapse_to_empty() {
        assert_eq!(page_slice(12, 3, 5), 12..12);
        assert_eq!(page_slice(0, 0, 5), 0..0);
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut state = TableState::default();
        state.set_page(2);
        state.set_rows_per_page(10);
        assert_eq!(state.page, 0);
        assert_eq!(state.rows_per_page, 10);
        // 12 rows at size 10 now show 0-9
        assert_eq!(page_slice(12, state.page, state.rows_per_page), 0..10);
    }

    #[test]
    fn empty_cells_render_the_placeholder_dash() {
        assert_eq!(display_text(None), "-");
        assert_eq!(display_text(Some(&CellValue::Text(String::new()))), "-");
        assert_eq!(display_text(Some(&CellValue::List(Vec::new()))), "-");
    }

    #[test]
    fn list_cells_join_with_commas() {
        let cell = CellValue::List(vec!["cotton".to_string(), "wool".to_string()]);
        assert_eq!(display_text(Some(&cell)), "cotton, wool");
    }

    #[test]
    fn numeric_cells_render_plainly() {
        assert_eq!(display_text(Some(&CellValue::Number(24.0))), "24");
        assert_eq!(display_text(Some(&CellValue::Number(24.5))), "24.5");
        assert_eq!(display_text(Some(&CellValue::Integer(4711))), "4711");
    }

    #[test]
    fn formatter_applies_to_numeric_cells_only() {
        let price = Column::new("price", "Price").format(|n| format!("${:.2}", n));
        assert_eq!(formatted(&price, Some(&CellValue::Number(24.5))), "$24.50");
        assert_eq!(formatted(&price, Some(&CellValue::Integer(3))), "$3.00");
        assert_eq!(
            formatted(&price, Some(&CellValue::Text("n/a".to_string()))),
            "n/a"
        );
        assert_eq!(formatted(&price, None), "-");
    }

    #[test]
    fn protection_is_an_exact_string_match() {
        assert!(is_protected(Some("super-admin")));
        assert!(!is_protected(Some("Super-Admin")));
        assert!(!is_protected(Some("superadmin")));
        assert!(!is_protected(Some("admin")));
        assert!(!is_protected(None));
    }

    #[test]
    fn rows_carry_cells_by_column_id() {
        let row = TableRow::new("p1")
            .cell("name", CellValue::Text("Scarf".to_string()))
            .cell("price", CellValue::Number(24.5));
        assert_eq!(
            display_text(row.cells.get("name")),
            "Scarf".to_string()
        );
        // Unknown column ids fall back to the dash
        assert_eq!(display_text(row.cells.get("missing")), "-");
    }
}
