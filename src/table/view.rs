//! Renders a row set as the expense table and the shared tooltip container.

use maud::{Markup, html};

use crate::{endpoints, row::Row};

use super::{
    classify::{RowCategory, classify},
    columns::{Alignment, ColumnDescriptor, ColumnRole, describe_columns},
    format::format_cell,
    tooltip::{TOOLTIP_WIDTH, TooltipState},
};

/// The id of the element that holds the single tooltip of a page.
pub const TOOLTIP_CONTAINER_ID: &str = "tooltip";

/// The id of the scrollable table body.
const TABLE_BODY_ID: &str = "expense-table-body";

/// Collects the measurements of a long-text cell when the pointer enters it.
///
/// htmx evaluates this with `this` bound to the cell.
const MEASURE_CELL_VALS: &str = "js:{\
    scroll_width: this.scrollWidth, \
    client_width: this.clientWidth, \
    left: this.getBoundingClientRect().left, \
    top: this.getBoundingClientRect().top, \
    width: this.getBoundingClientRect().width, \
    height: this.getBoundingClientRect().height, \
    viewport_width: window.innerWidth, \
    text: this.dataset.fullText\
    }";

/// A formatted cell ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCell {
    pub text: String,
    pub alignment: Alignment,
    pub width: f64,
    /// The unformatted text of a long-text cell, shown in its tooltip.
    pub full_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormattedRow {
    pub category: RowCategory,
    pub cells: Vec<FormattedCell>,
}

/// Everything needed to render one row set.
///
/// The columns are derived from the first row, every other row is rendered
/// with the same columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<FormattedRow>,
    /// The sum of the amount column. Amounts that are not numbers count as zero.
    pub total_amount: f64,
}

impl TableViewModel {
    pub fn new(rows: &[Row], locale: &str) -> Self {
        let columns = rows
            .first()
            .map(|row| describe_columns(row, locale))
            .unwrap_or_default();

        let formatted_rows = rows
            .iter()
            .map(|row| FormattedRow {
                category: classify(row),
                cells: columns
                    .iter()
                    .map(|column| format_column(row, column))
                    .collect(),
            })
            .collect();

        Self {
            columns,
            rows: formatted_rows,
            total_amount: total_amount(rows),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn format_column(row: &Row, column: &ColumnDescriptor) -> FormattedCell {
    let value = row.get(&column.name);

    let full_text = (column.role == ColumnRole::LongText).then(|| {
        value
            .filter(|value| !value.is_null())
            .map(ToString::to_string)
            .unwrap_or_default()
    });

    FormattedCell {
        text: format_cell(&column.name, value),
        alignment: column.alignment,
        width: column.width,
        full_text,
    }
}

fn total_amount(rows: &[Row]) -> f64 {
    rows.iter()
        .filter_map(|row| row.get("amount"))
        .filter_map(|value| value.as_f64())
        .sum()
}

/// Renders the table: a fixed header and a scrollable body.
pub fn table_view(model: &TableViewModel) -> Markup {
    html! {
        div class="expense-table" role="table"
        {
            div class="expense-table-header" role="row"
            {
                @for column in &model.columns {
                    div
                        class={"expense-table-header-cell " (column.alignment.header_class())}
                        style={"flex: " (column.width) "; min-width: 0;"}
                        role="columnheader"
                    {
                        (column.label)
                    }
                }
            }

            div id=(TABLE_BODY_ID) class="expense-table-body"
            {
                @for row in &model.rows {
                    div class={"expense-table-row " (row.category.css_class())} role="row"
                    {
                        @for cell in &row.cells {
                            (cell_view(cell))
                        }
                    }
                }
            }
        }
    }
}

fn cell_view(cell: &FormattedCell) -> Markup {
    let style = format!("flex: {}; min-width: 0;", cell.width);
    let class = format!("expense-table-cell {}", cell.alignment.cell_class());
    let tooltip_target = format!("#{TOOLTIP_CONTAINER_ID}");
    let tooltip_sync = format!("#{TABLE_BODY_ID}:replace");

    match &cell.full_text {
        Some(full_text) => html! {
            // The outer element hides the tooltip, the inner one measures the clipped text.
            div
                class=(class)
                style=(style)
                role="cell"
                hx-delete=(endpoints::TOOLTIP)
                hx-trigger="mouseleave"
                hx-target=(tooltip_target)
                hx-swap="outerHTML"
                hx-sync=(tooltip_sync)
            {
                div
                    class="expense-table-cell-truncate"
                    data-full-text=(full_text)
                    hx-post=(endpoints::TOOLTIP)
                    hx-trigger="mouseenter"
                    hx-target=(tooltip_target)
                    hx-swap="outerHTML"
                    hx-sync=(tooltip_sync)
                    hx-vals=(MEASURE_CELL_VALS)
                {
                    (cell.text)
                }
            }
        },
        None => html! {
            div class=(class) style=(style) role="cell" { (cell.text) }
        },
    }
}

/// Renders the container for the page's single tooltip.
///
/// The container is always present so that htmx can swap it. It is empty
/// when `state` is idle.
pub fn tooltip_container(state: &TooltipState, viewport_width: f64) -> Markup {
    let Some(tooltip) = state.tooltip() else {
        return html! { div id=(TOOLTIP_CONTAINER_ID) class="tooltip-container" {} };
    };

    let placement = tooltip.placement(viewport_width);
    let transform = if placement.below {
        ""
    } else {
        " transform: translateY(-100%);"
    };
    let style = format!(
        "left: {}px; top: {}px; max-width: {TOOLTIP_WIDTH}px;{transform} --tooltip-offset-x: {}px;",
        placement.left, placement.top, tooltip.offset_x
    );

    html! {
        div id=(TOOLTIP_CONTAINER_ID) class="tooltip" role="tooltip" style=(style)
        {
            (tooltip.text)
            div class="tooltip-arrow" {}
        }
    }
}


#[cfg(test)]
mod table_view_tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        row::{CellValue, Row},
        table::{CellBounds, CellMeasurement, TooltipState},
        test_utils::assert_valid_html,
    };

    use super::{TableViewModel, table_view, tooltip_container};

    fn rows() -> Vec<Row> {
        vec![
            Row::from_iter([
                ("AMOUNT", CellValue::Number(1200.0)),
                ("COMMENT", CellValue::from("Dinner with the neighbours")),
                ("SOURCE", CellValue::from("cash")),
            ]),
            Row::from_iter([
                ("AMOUNT", CellValue::Number(300.0)),
                ("COMMENT", CellValue::Null),
                ("SOURCE", CellValue::from("other")),
            ]),
        ]
    }

    #[test]
    fn renders_header_and_rows() {
        let model = TableViewModel::new(&rows(), "ja-JP");

        let html = Html::parse_fragment(&table_view(&model).into_string());

        assert_valid_html(&html);
        let header_selector = Selector::parse(".expense-table-header-cell").unwrap();
        let headers: Vec<String> = html
            .select(&header_selector)
            .map(|header| header.text().collect())
            .collect();
        assert_eq!(headers, ["金額", "備考"]);

        let header = html.select(&header_selector).next().unwrap();
        assert!(header.value().classes().any(|class| class == "text-right"));

        let row_selector = Selector::parse(".expense-table-row").unwrap();
        let row_classes: Vec<Vec<&str>> = html
            .select(&row_selector)
            .map(|row| row.value().classes().collect())
            .collect();
        assert_eq!(row_classes.len(), 2);
        assert!(row_classes[0].contains(&"expense-table-row-cash"));
        assert!(row_classes[1].contains(&"expense-table-row-default"));
    }

    #[test]
    fn long_text_cells_request_the_tooltip() {
        let model = TableViewModel::new(&rows(), "en-US");

        let html = Html::parse_fragment(&table_view(&model).into_string());

        let selector = Selector::parse(".expense-table-cell-truncate").unwrap();
        let cells: Vec<_> = html.select(&selector).collect();
        assert_eq!(cells.len(), 2);

        let cell = cells[0].value();
        assert_eq!(cell.attr("hx-post"), Some(endpoints::TOOLTIP));
        assert_eq!(cell.attr("hx-trigger"), Some("mouseenter"));
        assert_eq!(cell.attr("hx-target"), Some("#tooltip"));
        assert_eq!(cell.attr("data-full-text"), Some("Dinner with the neighbours"));
        assert!(cell.attr("hx-vals").unwrap().starts_with("js:"));

        let null_comment: String = cells[1].text().collect();
        assert_eq!(null_comment, "-");
        assert_eq!(cells[1].value().attr("data-full-text"), Some(""));
    }

    #[test]
    fn idle_tooltip_container_is_empty() {
        let html = Html::parse_fragment(&tooltip_container(&TooltipState::Idle, 1280.0).into_string());

        let selector = Selector::parse("#tooltip").unwrap();
        let container = html.select(&selector).next().expect("missing tooltip container");
        assert_eq!(container.text().collect::<String>(), "");
    }

    #[test]
    fn showing_tooltip_is_positioned() {
        let state = TooltipState::Idle.pointer_enter(CellMeasurement {
            scroll_width: 500.0,
            client_width: 200.0,
            bounds: CellBounds {
                left: 100.0,
                top: 300.0,
                width: 200.0,
                height: 20.0,
            },
            text: "Dinner with the neighbours".to_owned(),
        });

        let html = Html::parse_fragment(&tooltip_container(&state, 1280.0).into_string());

        let selector = Selector::parse("#tooltip").unwrap();
        let tooltip = html.select(&selector).next().expect("missing tooltip");
        assert_eq!(
            tooltip.text().collect::<String>(),
            "Dinner with the neighbours"
        );
        let style = tooltip.value().attr("style").unwrap();
        assert!(style.contains("left: 200px;"), "unexpected style {style}");
        assert!(style.contains("top: 295px;"), "unexpected style {style}");
        assert!(style.contains("translateY(-100%)"), "unexpected style {style}");
    }
}
