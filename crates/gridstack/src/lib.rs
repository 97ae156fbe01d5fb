//! GridStack: responsive equal-width grids.
//!
//! Give the grid a width (fixed, or measured by the host), the narrowest
//! acceptable cell, the spacing between cells and an item count. GridStack
//! works out how many equal columns fit, chunks the items into rows, and
//! calls back into the host with each item's index and column width.
//!
//! ```
//! use gridstack::{GridStack, ViewWidth};
//!
//! let stack = GridStack::new(ViewWidth::Fixed(320.0), 100.0, 10.0, 7, |index: usize, width: f32| {
//!     format!("cell {index} ({width}px)")
//! });
//! let grid = stack.layout(None).unwrap();
//! assert_eq!(grid.rows, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6]]);
//! assert_eq!(stack.render(&grid)[6], "cell 6 (100px)");
//! ```
//!
//! Hosts that measure their container forward each new width to a
//! [`ResponsiveGrid`], which recomputes synchronously on every change.

mod config;
mod error;
mod responsive;
mod stack;

pub use config::GridStackConfig;
pub use error::ConfigError;
pub use responsive::ResponsiveGrid;
pub use stack::{GridStack, ViewWidth};

pub use gridstack_core::{HorizontalAlignment, Rect, Size};
pub use gridstack_layout as layout;
pub use gridstack_layout::{CellPlacement, GridDefinition, GridLayout, LayoutError};
