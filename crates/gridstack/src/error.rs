//! Error types for gridstack.

use gridstack_layout::LayoutError;
use thiserror::Error;

/// Errors raised while loading or validating a grid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The layout parameters violate a precondition.
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),

    /// A fixed width that is not a finite number.
    #[error("Invalid width: {0}")]
    InvalidWidth(f32),
}
