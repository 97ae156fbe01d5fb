#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Layout engine for GridStack responsive grids.
//!
//! A grid is fully described by three numbers: the width it may occupy, the
//! narrowest acceptable cell, and the gap between cells. From those the
//! engine derives:
//!
//! - **Columns**: how many equal columns fit and how wide each is
//!   ([`calculate`], [`GridDefinition`])
//! - **Rows**: items `0..n` chunked into rows of that many columns
//!   ([`chunk_items`], [`GridLayout`])
//! - **Frames**: per-cell rectangles for hosts that position cells
//!   themselves ([`place_cells`])
//!
//! Everything here is a pure function of its inputs; hosts recompute on
//! every width change.

mod calculator;
mod error;
mod placement;
mod rows;

pub use calculator::{calculate, try_calculate, GridCalculator, GridDefinition, LayoutConfig};
pub use error::LayoutError;
pub use placement::{content_size, place_cells, visible_rows, CellPlacement};
pub use rows::{chunk_items, compute_grid_layout, layout, row_count, GridLayout, Row};
