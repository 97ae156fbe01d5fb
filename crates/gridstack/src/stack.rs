//! The grid orchestrator.
//!
//! [`GridStack`] owns the grid's configuration and the host's content
//! callback. It resolves the width to lay out against, runs the column
//! calculation once, chunks the items, and hands `(index, column_width)`
//! pairs to the callback. It never renders anything itself.

use std::fmt;
use std::ops::Range;

use gridstack_core::{HorizontalAlignment, Size};
use gridstack_layout::{
    content_size, layout, place_cells, visible_rows, CellPlacement, GridCalculator, GridLayout,
    LayoutError,
};
use serde::{Deserialize, Serialize};

/// How the grid learns its available width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewWidth {
    /// A width known up front
    Fixed(f32),
    /// Measured from the container by the host
    Automatic,
}

impl ViewWidth {
    /// True when the host has to supply a measurement.
    #[must_use]
    pub const fn is_automatic(&self) -> bool {
        matches!(self, Self::Automatic)
    }

    /// The fixed width, if any.
    #[must_use]
    pub const fn fixed_width(&self) -> Option<f32> {
        match self {
            Self::Fixed(width) => Some(*width),
            Self::Automatic => None,
        }
    }

    /// Width to lay out against given a fresh container measurement.
    ///
    /// A fixed width ignores the measurement.
    #[must_use]
    pub const fn resolve(&self, measured: f32) -> f32 {
        match self {
            Self::Fixed(width) => *width,
            Self::Automatic => measured,
        }
    }
}

/// A responsive grid of `num_items` cells.
///
/// `F` produces the host's content for a cell from its index and the
/// computed column width.
pub struct GridStack<F> {
    width: ViewWidth,
    scrollable: bool,
    min_cell_width: f32,
    spacing: f32,
    num_items: usize,
    alignment: HorizontalAlignment,
    content: F,
    calculator: GridCalculator,
}

impl<F> GridStack<F> {
    /// Create a non-scrolling, leading-aligned grid.
    pub fn new(
        width: ViewWidth,
        min_cell_width: f32,
        spacing: f32,
        num_items: usize,
        content: F,
    ) -> Self {
        Self {
            width,
            scrollable: false,
            min_cell_width,
            spacing,
            num_items,
            alignment: HorizontalAlignment::default(),
            content,
            calculator: GridCalculator::new(),
        }
    }

    /// Mark the grid as hosted in a vertical scroll container.
    #[must_use]
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Set row alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Width mode.
    pub const fn width(&self) -> ViewWidth {
        self.width
    }

    /// Whether the host wraps the grid in a scroll container.
    pub const fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// Narrowest acceptable cell.
    pub const fn min_cell_width(&self) -> f32 {
        self.min_cell_width
    }

    /// Gap between cells and rows.
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Number of items.
    pub const fn num_items(&self) -> usize {
        self.num_items
    }

    /// Row alignment.
    pub const fn row_alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Change the number of items.
    pub fn set_num_items(&mut self, num_items: usize) {
        self.num_items = num_items;
    }

    /// Width to lay out against.
    ///
    /// Automatic grids need a measurement from the host.
    pub fn resolve_width(&self, measured: Option<f32>) -> Result<f32, LayoutError> {
        match (self.width, measured) {
            (ViewWidth::Fixed(width), _) => Ok(width),
            (ViewWidth::Automatic, Some(width)) => Ok(width),
            (ViewWidth::Automatic, None) => Err(LayoutError::MissingMeasurement),
        }
    }

    /// Compute columns and rows for `width`.
    pub fn layout_for_width(&self, width: f32) -> GridLayout {
        let definition = self
            .calculator
            .calculate(width, self.min_cell_width, self.spacing);
        layout(self.num_items, &definition, width)
    }

    /// Resolve the width, then compute columns and rows.
    pub fn layout(&self, measured: Option<f32>) -> Result<GridLayout, LayoutError> {
        let width = self.resolve_width(measured)?;
        Ok(self.layout_for_width(width))
    }

    /// Cell frames using this grid's spacing and alignment.
    pub fn place(&self, layout: &GridLayout, row_height: f32) -> Vec<CellPlacement> {
        place_cells(layout, self.spacing, row_height, self.alignment)
    }

    /// Total content size for rows of `row_height`.
    pub fn content_size(&self, layout: &GridLayout, row_height: f32) -> Size {
        content_size(layout, self.spacing, row_height)
    }

    /// Rows inside a scroll viewport.
    ///
    /// A non-scrolling grid shows every row.
    pub fn visible_rows(
        &self,
        layout: &GridLayout,
        row_height: f32,
        scroll_offset: f32,
        viewport_height: f32,
    ) -> Range<usize> {
        if !self.scrollable {
            return 0..layout.row_count();
        }
        visible_rows(layout, self.spacing, row_height, scroll_offset, viewport_height)
    }
}

impl<F, R> GridStack<F>
where
    F: Fn(usize, f32) -> R,
{
    /// Content for a single cell.
    pub fn cell(&self, index: usize, column_width: f32) -> R {
        (self.content)(index, column_width)
    }

    /// Content for every item, in display order.
    pub fn render(&self, layout: &GridLayout) -> Vec<R> {
        layout
            .cells()
            .map(|(index, width)| self.cell(index, width))
            .collect()
    }

    /// Content grouped by row.
    pub fn render_rows(&self, layout: &GridLayout) -> Vec<Vec<R>> {
        let width = layout.column_width();
        layout
            .rows
            .iter()
            .map(|row| row.iter().map(|&index| self.cell(index, width)).collect())
            .collect()
    }
}

impl<F> fmt::Debug for GridStack<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridStack")
            .field("width", &self.width)
            .field("scrollable", &self.scrollable)
            .field("min_cell_width", &self.min_cell_width)
            .field("spacing", &self.spacing)
            .field("num_items", &self.num_items)
            .field("alignment", &self.alignment)
            .finish_non_exhaustive()
    }
}
