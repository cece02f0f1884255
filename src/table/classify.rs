//! Classifies rows by payment source for styling.

use crate::row::Row;

use super::columns::HIDDEN_FIELD;

/// How an expense was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowCategory {
    Cash,
    Digital,
    /// The source is missing or not recognised.
    Default,
}

impl RowCategory {
    /// The CSS class for table rows of this category.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Cash => "expense-table-row-cash",
            Self::Digital => "expense-table-row-digital",
            Self::Default => "expense-table-row-default",
        }
    }
}

/// Classify `row` by its source field.
pub fn classify(row: &Row) -> RowCategory {
    let source = row
        .get(HIDDEN_FIELD)
        .and_then(|value| value.as_text())
        .map(str::to_lowercase);

    match source.as_deref() {
        Some("cash") => RowCategory::Cash,
        Some("digital") => RowCategory::Digital,
        _ => RowCategory::Default,
    }
}

#[cfg(test)]
mod tests {
    use crate::row::{CellValue, Row};

    use super::{RowCategory, classify};

    fn row_with_source(source: impl Into<CellValue>) -> Row {
        let source: CellValue = source.into();

        [("SOURCE", source)].into_iter().collect()
    }

    #[test]
    fn recognises_sources_ignoring_case() {
        assert_eq!(classify(&row_with_source("CASH")), RowCategory::Cash);
        assert_eq!(classify(&row_with_source("cash")), RowCategory::Cash);
        assert_eq!(classify(&row_with_source("Digital")), RowCategory::Digital);
    }

    #[test]
    fn unknown_sources_are_default() {
        assert_eq!(classify(&row_with_source("unknown")), RowCategory::Default);
        assert_eq!(classify(&row_with_source(1.0)), RowCategory::Default);
        assert_eq!(
            classify(&row_with_source(CellValue::Null)),
            RowCategory::Default
        );
        assert_eq!(classify(&Row::new()), RowCategory::Default);
    }

    #[test]
    fn categories_map_to_row_classes() {
        assert_eq!(RowCategory::Cash.css_class(), "expense-table-row-cash");
        assert_eq!(RowCategory::Digital.css_class(), "expense-table-row-digital");
        assert_eq!(RowCategory::Default.css_class(), "expense-table-row-default");
    }
}
