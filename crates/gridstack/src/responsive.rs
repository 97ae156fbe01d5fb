//! Host adapter for measured widths.
//!
//! The host forwards every container measurement to
//! [`ResponsiveGrid::on_width_changed`]. Each measurement triggers a full,
//! synchronous recomputation; nothing is memoized across widths, so the
//! layout handed out always belongs to the latest measurement.

use std::fmt;

use gridstack_layout::GridLayout;

use crate::stack::GridStack;

/// A [`GridStack`] plus the layout for the most recent width.
pub struct ResponsiveGrid<F> {
    stack: GridStack<F>,
    measured_width: Option<f32>,
    current: Option<GridLayout>,
    recomputations: u64,
}

impl<F> ResponsiveGrid<F> {
    /// Wrap a grid.
    ///
    /// Fixed-width grids are laid out immediately; automatic ones wait for
    /// the first measurement.
    pub fn new(stack: GridStack<F>) -> Self {
        let current = stack.layout(None).ok();
        let recomputations = u64::from(current.is_some());
        Self {
            stack,
            measured_width: None,
            current,
            recomputations,
        }
    }

    /// Record a new container width and recompute.
    pub fn on_width_changed(&mut self, measured: f32) -> &GridLayout {
        self.measured_width = Some(measured);
        let width = self.stack.width().resolve(measured);
        self.recompute(width)
    }

    /// Change the item count and recompute against the last known width.
    ///
    /// Returns `None` while an automatic grid is still unmeasured.
    pub fn set_num_items(&mut self, num_items: usize) -> Option<&GridLayout> {
        self.stack.set_num_items(num_items);
        let width = self.stack.resolve_width(self.measured_width).ok()?;
        Some(self.recompute(width))
    }

    fn recompute(&mut self, width: f32) -> &GridLayout {
        let grid = self.stack.layout_for_width(width);
        self.recomputations += 1;
        tracing::debug!(
            width,
            column_count = grid.column_count(),
            rows = grid.row_count(),
            "grid recomputed"
        );
        self.current.insert(grid)
    }

    /// Layout for the latest width, if one is known.
    pub const fn current(&self) -> Option<&GridLayout> {
        self.current.as_ref()
    }

    /// Last width reported by the host.
    pub const fn measured_width(&self) -> Option<f32> {
        self.measured_width
    }

    /// How many times the layout has been computed.
    pub const fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// The wrapped grid.
    pub const fn stack(&self) -> &GridStack<F> {
        &self.stack
    }

    /// Unwrap into the grid.
    pub fn into_inner(self) -> GridStack<F> {
        self.stack
    }
}

impl<F, R> ResponsiveGrid<F>
where
    F: Fn(usize, f32) -> R,
{
    /// Content for the current layout; empty until a width is known.
    pub fn render(&self) -> Vec<R> {
        self.current
            .as_ref()
            .map(|grid| self.stack.render(grid))
            .unwrap_or_default()
    }
}

impl<F> fmt::Debug for ResponsiveGrid<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponsiveGrid")
            .field("stack", &self.stack)
            .field("measured_width", &self.measured_width)
            .field("current", &self.current)
            .field("recomputations", &self.recomputations)
            .finish()
    }
}
