//! Error types for gridstack-layout.

use thiserror::Error;

/// Errors reported by the opt-in validating entry points.
///
/// The plain calculator never fails; it clamps instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// Minimum cell width must be strictly positive and finite.
    #[error("Invalid minimum cell width: {0} (must be > 0)")]
    InvalidMinimumCellWidth(f32),

    /// Cell spacing must be non-negative and finite.
    #[error("Invalid cell spacing: {0} (must be >= 0)")]
    InvalidSpacing(f32),

    /// Automatic width was requested but the host supplied no measurement.
    #[error("Automatic width requires a measured container width")]
    MissingMeasurement,
}
