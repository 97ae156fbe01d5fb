//! Row chunking.
//!
//! Items are plain indices `0..num_items` into a sequence the host owns.
//! Rows are consecutive slices of that sequence, `column_count` long except
//! possibly the last.

use serde::{Deserialize, Serialize};

use crate::calculator::{self, GridDefinition};

/// An ordered group of item indices rendered side by side.
pub type Row = Vec<usize>;

/// Partition `0..num_items` into rows of `column_count` items.
///
/// The final row holds the remainder and is never padded. A `column_count`
/// of zero is treated as one.
#[must_use]
pub fn chunk_items(num_items: usize, column_count: usize) -> Vec<Row> {
    let items: Vec<usize> = (0..num_items).collect();
    items
        .chunks(column_count.max(1))
        .map(<[usize]>::to_vec)
        .collect()
}

/// Number of rows [`chunk_items`] would produce.
#[must_use]
pub fn row_count(num_items: usize, column_count: usize) -> usize {
    num_items.div_ceil(column_count.max(1))
}

/// A computed grid: the column definition plus the rows it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Column count and width
    pub definition: GridDefinition,
    /// Width the definition was computed for
    pub available_width: f32,
    /// Rows in display order
    pub rows: Vec<Row>,
}

impl GridLayout {
    /// Number of columns.
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.definition.column_count
    }

    /// Width assigned to every cell.
    #[must_use]
    pub const fn column_width(&self) -> f32 {
        self.definition.column_width
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of items across all rows.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// True when there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(index, column_width)` for every item, in display order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        let width = self.column_width();
        self.rows.iter().flatten().map(move |&index| (index, width))
    }

    /// Location of an item as `(row, column)`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.item_count() {
            return None;
        }
        let columns = self.column_count();
        Some((index / columns, index % columns))
    }
}

/// Chunk `num_items` items using an already computed definition.
#[must_use]
pub fn layout(num_items: usize, definition: &GridDefinition, available_width: f32) -> GridLayout {
    GridLayout {
        definition: *definition,
        available_width,
        rows: chunk_items(num_items, definition.column_count),
    }
}

/// Run the column calculation and chunk items in one step.
#[must_use]
pub fn compute_grid_layout(
    num_items: usize,
    available_width: f32,
    minimum_cell_width: f32,
    cell_spacing: f32,
) -> GridLayout {
    let definition = calculator::calculate(available_width, minimum_cell_width, cell_spacing);
    layout(num_items, &definition, available_width)
}
