//! Cell frames for a computed grid.
//!
//! Geometry follows the grid's composition: a top inset of `spacing`, rows
//! stacked with `spacing` between them, cells inside a row separated by
//! `spacing`, and each row positioned horizontally by the alignment. Rows
//! have a uniform height supplied by the host.
//!
//! Rows are aligned inside a block as wide as the widest row, and that block
//! is centered in the available width. With at least one full row the block
//! spans the available width; a grid holding a single short row is centered
//! whatever the alignment.

use std::ops::Range;

use gridstack_core::{HorizontalAlignment, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::rows::GridLayout;

/// Where a single item sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellPlacement {
    /// Item index
    pub index: usize,
    /// Row the item is in
    pub row: usize,
    /// Column within the row
    pub column: usize,
    /// Frame relative to the grid's top-left corner
    pub frame: Rect,
}

/// Top edge of `row`.
fn row_top(row: usize, spacing: f32, row_height: f32) -> f32 {
    spacing + row as f32 * (row_height + spacing)
}

/// Frames for every item of `layout`, in display order.
#[must_use]
pub fn place_cells(
    layout: &GridLayout,
    spacing: f32,
    row_height: f32,
    alignment: HorizontalAlignment,
) -> Vec<CellPlacement> {
    let column_width = layout.column_width();
    let mut placements = Vec::with_capacity(layout.item_count());

    // The first row is always the widest.
    let block_width = layout
        .rows
        .first()
        .map_or(0.0, |items| layout.definition.row_width(items.len(), spacing));
    let block_x = HorizontalAlignment::Center.offset(layout.available_width, block_width);

    for (row, items) in layout.rows.iter().enumerate() {
        let row_width = layout.definition.row_width(items.len(), spacing);
        let x0 = block_x + alignment.offset(block_width, row_width);
        let y = row_top(row, spacing, row_height);

        for (column, &index) in items.iter().enumerate() {
            let x = x0 + column as f32 * (column_width + spacing);
            placements.push(CellPlacement {
                index,
                row,
                column,
                frame: Rect::new(x, y, column_width, row_height),
            });
        }
    }

    placements
}

/// Total size of the grid's content.
///
/// The width is always the available width; a grid with no rows has zero
/// height.
#[must_use]
pub fn content_size(layout: &GridLayout, spacing: f32, row_height: f32) -> Size {
    let rows = layout.row_count();
    let height = if rows == 0 {
        0.0
    } else {
        row_top(rows - 1, spacing, row_height) + row_height
    };
    Size::new(layout.available_width, height)
}

/// Rows that intersect a vertical viewport of a scrolling grid.
///
/// `scroll_offset` is the distance scrolled from the top of the content.
#[must_use]
pub fn visible_rows(
    layout: &GridLayout,
    spacing: f32,
    row_height: f32,
    scroll_offset: f32,
    viewport_height: f32,
) -> Range<usize> {
    let rows = layout.row_count();
    if rows == 0 || viewport_height <= 0.0 {
        return 0..0;
    }

    let stride = row_height + spacing;
    if stride <= 0.0 {
        return 0..rows;
    }

    let top = scroll_offset.max(0.0);
    let bottom = top + viewport_height;

    // First row whose bottom edge lies below the viewport top.
    let first = ((top - spacing - row_height) / stride).floor() + 1.0;
    let first = (first.max(0.0) as usize).min(rows);
    // Rows starting before the viewport bottom.
    let end = ((bottom - spacing) / stride).ceil();
    let end = (end.max(0.0) as usize).min(rows);

    first..end.max(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::compute_grid_layout;

    fn frames(placements: &[CellPlacement]) -> Vec<Rect> {
        placements.iter().map(|p| p.frame).collect()
    }

    // =========================================================================
    // place_cells Tests
    // =========================================================================

    #[test]
    fn test_place_leading() {
        let grid = compute_grid_layout(4, 320.0, 100.0, 10.0);
        let placed = place_cells(&grid, 10.0, 50.0, HorizontalAlignment::Leading);
        assert_eq!(
            frames(&placed),
            vec![
                Rect::new(0.0, 10.0, 100.0, 50.0),
                Rect::new(110.0, 10.0, 100.0, 50.0),
                Rect::new(220.0, 10.0, 100.0, 50.0),
                Rect::new(0.0, 70.0, 100.0, 50.0),
            ]
        );
        assert_eq!(placed[3].row, 1);
        assert_eq!(placed[3].column, 0);
        assert_eq!(placed[3].index, 3);
    }

    #[test]
    fn test_place_center_moves_only_remainder_row() {
        let grid = compute_grid_layout(4, 320.0, 100.0, 10.0);
        let placed = place_cells(&grid, 10.0, 50.0, HorizontalAlignment::Center);
        assert_eq!(placed[0].frame.x, 0.0);
        assert_eq!(placed[3].frame.x, 110.0);
    }

    #[test]
    fn test_place_trailing() {
        let grid = compute_grid_layout(5, 320.0, 100.0, 10.0);
        let placed = place_cells(&grid, 10.0, 50.0, HorizontalAlignment::Trailing);
        // Remainder row of two: 210 wide, pushed to the trailing edge
        assert_eq!(placed[3].frame.x, 110.0);
        assert_eq!(placed[4].frame.right(), 320.0);
    }

    #[test]
    fn test_single_short_row_is_centered_for_every_alignment() {
        // One row of two: 210 wide inside 320
        let grid = compute_grid_layout(2, 320.0, 100.0, 10.0);
        for alignment in [
            HorizontalAlignment::Leading,
            HorizontalAlignment::Center,
            HorizontalAlignment::Trailing,
        ] {
            let placed = place_cells(&grid, 10.0, 50.0, alignment);
            assert_eq!(placed[0].frame.x, 55.0);
            assert_eq!(placed[1].frame.right(), 265.0);
        }
    }

    #[test]
    fn test_place_overflowing_single_column() {
        let grid = compute_grid_layout(1, 50.0, 100.0, 10.0);
        let placed = place_cells(&grid, 10.0, 20.0, HorizontalAlignment::Leading);
        assert_eq!(placed[0].frame, Rect::new(0.0, 10.0, 50.0, 20.0));
    }

    #[test]
    fn test_place_empty() {
        let grid = compute_grid_layout(0, 320.0, 100.0, 10.0);
        assert!(place_cells(&grid, 10.0, 50.0, HorizontalAlignment::Leading).is_empty());
    }

    #[test]
    fn test_full_rows_span_available_width() {
        let grid = compute_grid_layout(9, 250.0, 100.0, 10.0);
        let placed = place_cells(&grid, 10.0, 30.0, HorizontalAlignment::Center);
        for p in placed.iter().filter(|p| p.column == 1) {
            assert!((p.frame.right() - 250.0).abs() < 1e-3);
        }
    }

    // =========================================================================
    // content_size Tests
    // =========================================================================

    #[test]
    fn test_content_size() {
        let grid = compute_grid_layout(7, 320.0, 100.0, 10.0);
        // 10 + 3 * 50 + 2 * 10
        assert_eq!(content_size(&grid, 10.0, 50.0), Size::new(320.0, 180.0));
    }

    #[test]
    fn test_content_size_empty() {
        let grid = compute_grid_layout(0, 320.0, 100.0, 10.0);
        assert_eq!(content_size(&grid, 10.0, 50.0), Size::new(320.0, 0.0));
    }

    // =========================================================================
    // visible_rows Tests
    // =========================================================================

    #[test]
    fn test_visible_rows_top() {
        // Rows at y = 10, 70, 130, ... (height 50, stride 60)
        let grid = compute_grid_layout(30, 320.0, 100.0, 10.0);
        assert_eq!(visible_rows(&grid, 10.0, 50.0, 0.0, 100.0), 0..2);
    }

    #[test]
    fn test_visible_rows_scrolled() {
        let grid = compute_grid_layout(30, 320.0, 100.0, 10.0);
        // Viewport 125..185 starts below row 1 (70..120) and covers row 2 (130..180)
        assert_eq!(visible_rows(&grid, 10.0, 50.0, 125.0, 60.0), 2..3);
    }

    #[test]
    fn test_visible_rows_clamped_to_row_count() {
        let grid = compute_grid_layout(6, 320.0, 100.0, 10.0);
        assert_eq!(visible_rows(&grid, 10.0, 50.0, 0.0, 10_000.0), 0..2);
        assert_eq!(visible_rows(&grid, 10.0, 50.0, 10_000.0, 100.0), 2..2);
    }

    #[test]
    fn test_visible_rows_empty_viewport() {
        let grid = compute_grid_layout(6, 320.0, 100.0, 10.0);
        assert_eq!(visible_rows(&grid, 10.0, 50.0, 0.0, 0.0), 0..0);
    }
}
