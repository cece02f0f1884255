//! The tabular presentation pipeline: deriving columns from a row set,
//! formatting and classifying cells, and rendering the result as HTML.

mod classify;
mod columns;
mod format;
mod tooltip;
mod view;

pub use format::format_amount;
pub use tooltip::{CellBounds, CellMeasurement, TooltipState};
pub use view::{TableViewModel, table_view, tooltip_container};
