//! Derives which columns of a row set are shown, in what order, and how.

use std::cmp::Ordering;

use crate::{i18n::translate_column, row::Row};

/// The field that marks the payment source of a row.
///
/// It drives row styling and is never shown as a column.
pub const HIDDEN_FIELD: &str = "source";

/// Columns that are shown first, in this order.
pub const PRIORITY_COLUMNS: [&str; 4] =
    ["payment_classification", "amount", "payment_date", "comment"];

/// The semantic category of a column, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Classification,
    Amount,
    Date,
    /// Free text that may be clipped and gets a tooltip.
    LongText,
    Other,
}

impl ColumnRole {
    /// The role of the column called `name`, ignoring ASCII case.
    pub fn of(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "payment_classification" => Self::Classification,
            "amount" => Self::Amount,
            "payment_date" => Self::Date,
            "comment" => Self::LongText,
            _ => Self::Other,
        }
    }

    pub fn alignment(self) -> Alignment {
        match self {
            Self::Amount => Alignment::Right,
            Self::Date => Alignment::Center,
            Self::Classification | Self::LongText | Self::Other => Alignment::Left,
        }
    }

    /// The relative width of the column, used as a flex weight.
    pub fn width(self) -> f64 {
        match self {
            Self::Classification => 1.2,
            Self::Amount => 0.5,
            Self::Date => 0.7,
            Self::LongText => 3.0,
            Self::Other => 1.0,
        }
    }
}

/// Horizontal text alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    /// The class used for header cells.
    pub fn header_class(self) -> &'static str {
        match self {
            Self::Left => "text-left",
            Self::Right => "text-right",
            Self::Center => "text-center",
        }
    }

    /// The class used for body cells.
    pub fn cell_class(self) -> &'static str {
        match self {
            Self::Left => "expense-table-cell-left",
            Self::Right => "expense-table-cell-right",
            Self::Center => "expense-table-cell-center",
        }
    }
}

/// Everything needed to render one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// The field name as it appears in the row.
    pub name: String,
    pub role: ColumnRole,
    pub alignment: Alignment,
    pub width: f64,
    /// The translated header text.
    pub label: String,
}

/// The names of the columns to show for a row set whose first row is `row`.
///
/// The hidden field is dropped, the priority columns come first in priority
/// order, and every other column follows sorted by name.
pub fn visible_columns(row: &Row) -> Vec<String> {
    let mut columns: Vec<&str> = row
        .keys()
        .filter(|key| !key.eq_ignore_ascii_case(HIDDEN_FIELD))
        .collect();

    columns.sort_by(|a, b| compare_columns(a, b));

    columns.into_iter().map(str::to_owned).collect()
}

/// The descriptors of the visible columns of `row`, labelled in `locale`.
pub fn describe_columns(row: &Row, locale: &str) -> Vec<ColumnDescriptor> {
    visible_columns(row)
        .into_iter()
        .map(|name| {
            let role = ColumnRole::of(&name);
            let label = translate_column(&name, locale).to_owned();

            ColumnDescriptor {
                role,
                alignment: role.alignment(),
                width: role.width(),
                label,
                name,
            }
        })
        .collect()
}

fn priority(column: &str) -> Option<usize> {
    PRIORITY_COLUMNS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(column))
}

fn compare_columns(a: &str, b: &str) -> Ordering {
    match (priority(a), priority(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
