//! Responsive column calculation.
//!
//! Given the width a grid may occupy, the narrowest acceptable cell and the
//! gap between cells, decide how many equal columns fit and how wide each one
//! is. Slack is spread evenly over the columns so the grid always spans the
//! available width edge to edge.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Input parameters for the column calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal space the grid may occupy
    pub available_width: f32,
    /// Narrowest acceptable cell; must be > 0
    pub minimum_cell_width: f32,
    /// Gap between adjacent columns
    #[serde(default)]
    pub cell_spacing: f32,
}

impl LayoutConfig {
    /// Create a new layout configuration.
    #[must_use]
    pub const fn new(available_width: f32, minimum_cell_width: f32, cell_spacing: f32) -> Self {
        Self {
            available_width,
            minimum_cell_width,
            cell_spacing,
        }
    }

    /// Check the caller-side preconditions.
    ///
    /// The available width is never validated: zero and negative widths
    /// degrade to a single column.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.minimum_cell_width.is_finite() && self.minimum_cell_width > 0.0) {
            return Err(LayoutError::InvalidMinimumCellWidth(self.minimum_cell_width));
        }
        if !(self.cell_spacing.is_finite() && self.cell_spacing >= 0.0) {
            return Err(LayoutError::InvalidSpacing(self.cell_spacing));
        }
        Ok(())
    }

    /// Compute the grid definition without validating.
    #[must_use]
    pub fn calculate(&self) -> GridDefinition {
        calculate(
            self.available_width,
            self.minimum_cell_width,
            self.cell_spacing,
        )
    }

    /// Validate, then compute the grid definition.
    pub fn try_calculate(&self) -> Result<GridDefinition, LayoutError> {
        self.validate()?;
        Ok(self.calculate())
    }
}

/// Result of the column calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDefinition {
    /// Number of side-by-side cells per row, always >= 1
    pub column_count: usize,
    /// Width of each cell
    pub column_width: f32,
}

impl GridDefinition {
    /// Horizontal span of a row holding `cells` cells separated by `spacing`.
    #[must_use]
    pub fn row_width(&self, cells: usize, spacing: f32) -> f32 {
        if cells == 0 {
            return 0.0;
        }
        cells as f32 * self.column_width + (cells - 1) as f32 * spacing
    }

    /// Horizontal span of a full row.
    #[must_use]
    pub fn total_width(&self, spacing: f32) -> f32 {
        self.row_width(self.column_count, spacing)
    }
}

/// Stateless column calculator.
///
/// Exists so hosts can hold a calculator value next to their other layout
/// collaborators; it simply forwards to [`calculate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCalculator;

impl GridCalculator {
    /// Create a new calculator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// See [`calculate`].
    #[must_use]
    pub fn calculate(
        &self,
        available_width: f32,
        minimum_cell_width: f32,
        cell_spacing: f32,
    ) -> GridDefinition {
        calculate(available_width, minimum_cell_width, cell_spacing)
    }
}

/// Compute how many columns fit and how wide each one is.
///
/// `minimum_cell_width` must be > 0; other values produce a meaningless (but
/// non-panicking) result. Use [`try_calculate`] to reject them instead.
///
/// At least one column is always returned. When even a single cell of
/// `minimum_cell_width` does not fit, that column is narrower than the
/// minimum and fills whatever width is available.
#[must_use]
pub fn calculate(available_width: f32, minimum_cell_width: f32, cell_spacing: f32) -> GridDefinition {
    let fit = ((available_width + cell_spacing) / (minimum_cell_width + cell_spacing)).floor();
    // Saturating cast: NaN and negatives become 0, overflow becomes usize::MAX.
    let column_count = (fit as usize).max(1);

    let column_width =
        (available_width - (column_count - 1) as f32 * cell_spacing) / column_count as f32;

    if column_count == 1 && available_width < minimum_cell_width {
        tracing::warn!(
            available_width,
            minimum_cell_width,
            "grid narrower than one cell, forcing a single column"
        );
    }
    tracing::trace!(
        available_width,
        minimum_cell_width,
        cell_spacing,
        column_count,
        column_width,
        "calculated grid definition"
    );

    GridDefinition {
        column_count,
        column_width,
    }
}

/// Validate the inputs, then [`calculate`].
pub fn try_calculate(
    available_width: f32,
    minimum_cell_width: f32,
    cell_spacing: f32,
) -> Result<GridDefinition, LayoutError> {
    LayoutConfig::new(available_width, minimum_cell_width, cell_spacing).try_calculate()
}
