//! The overflow tooltip shown for clipped long-text cells.
//!
//! The browser reports the measurements of the hovered cell and the server
//! decides whether a tooltip is shown and where. Only one tooltip exists at a
//! time: entering a cell replaces the previous state and leaving any cell
//! clears it.

use unicode_segmentation::UnicodeSegmentation;

/// The maximum width of the tooltip in pixels.
pub const TOOLTIP_WIDTH: f64 = 400.0;
/// The minimum distance between the tooltip and the viewport's edges.
pub const TOOLTIP_VIEWPORT_MARGIN: f64 = 16.0;
/// Tooltips anchored above this height are shown below the cell instead.
pub const TOOLTIP_MIN_TOP: f64 = 50.0;
/// How far below the anchor a flipped tooltip is placed.
pub const TOOLTIP_BELOW_OFFSET: f64 = 30.0;

/// The gap between the top of the cell and the anchor.
const ANCHOR_GAP: f64 = 5.0;

/// The max number of graphemes of the text to include in log messages.
const PREVIEW_GRAPHEMES: usize = 50;

/// The bounding box of a cell in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// What the browser reports about a hovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMeasurement {
    /// The width of the cell's content, including the clipped part.
    pub scroll_width: f64,
    /// The visible width of the cell.
    pub client_width: f64,
    pub bounds: CellBounds,
    /// The full, unformatted text of the cell.
    pub text: String,
}

impl CellMeasurement {
    /// Whether the content is wider than the cell.
    pub fn is_clipped(&self) -> bool {
        self.scroll_width > self.client_width
    }
}

/// A visible tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    /// The horizontal centre of the hovered cell.
    pub x: f64,
    /// Just above the hovered cell.
    pub y: f64,
    /// A quarter of the cell's width, the horizontal nudge of the arrow.
    pub offset_x: f64,
}

/// Where to draw a tooltip, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    /// Whether the tooltip hangs below the cell rather than sitting above it.
    pub below: bool,
}

impl Tooltip {
    fn for_cell(cell: CellMeasurement) -> Self {
        let CellBounds {
            left, top, width, ..
        } = cell.bounds;

        Self {
            text: cell.text,
            x: left + width / 2.0,
            y: top - ANCHOR_GAP,
            offset_x: width / 4.0,
        }
    }

    /// The start of the text, shortened for log messages.
    pub fn preview(&self) -> String {
        if self.text.graphemes(true).count() <= PREVIEW_GRAPHEMES {
            return self.text.clone();
        }

        let truncated: String = self.text.graphemes(true).take(PREVIEW_GRAPHEMES).collect();
        truncated + "..."
    }

    /// Keep the tooltip inside a viewport that is `viewport_width` pixels wide.
    pub fn placement(&self, viewport_width: f64) -> Placement {
        let mut left = self.x;

        if left + TOOLTIP_WIDTH > viewport_width - TOOLTIP_VIEWPORT_MARGIN {
            left = viewport_width - TOOLTIP_WIDTH - TOOLTIP_VIEWPORT_MARGIN;
        }

        if left < TOOLTIP_VIEWPORT_MARGIN {
            left = TOOLTIP_VIEWPORT_MARGIN;
        }

        let below = self.y < TOOLTIP_MIN_TOP;
        let top = if below {
            self.y + TOOLTIP_BELOW_OFFSET
        } else {
            self.y
        };

        Placement { left, top, below }
    }
}

/// The single tooltip of a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TooltipState {
    #[default]
    Idle,
    Showing(Tooltip),
}

impl TooltipState {
    /// The pointer entered a long-text cell.
    ///
    /// A clipped cell shows its full text, any other cell hides the tooltip.
    pub fn pointer_enter(self, cell: CellMeasurement) -> Self {
        if cell.is_clipped() {
            Self::Showing(Tooltip::for_cell(cell))
        } else {
            Self::Idle
        }
    }

    /// The pointer left a long-text cell.
    pub fn pointer_leave(self) -> Self {
        Self::Idle
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            Self::Idle => None,
            Self::Showing(tooltip) => Some(tooltip),
        }
    }
}
