//! Horizontal alignment of rows inside a grid.

use serde::{Deserialize, Serialize};

/// Where a row narrower than the grid sits horizontally.
///
/// Only the remainder row (or an overflowing single column) is ever
/// narrower or wider than the container, so alignment never changes the
/// column math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    /// Align to the leading edge
    #[default]
    Leading,
    /// Center within the container
    Center,
    /// Align to the trailing edge
    Trailing,
}

impl HorizontalAlignment {
    /// Offset of a row of `content` width inside a container of `container` width.
    ///
    /// Negative when the content overflows and is not leading-aligned.
    #[must_use]
    pub fn offset(self, container: f32, content: f32) -> f32 {
        match self {
            Self::Leading => 0.0,
            Self::Center => (container - content) / 2.0,
            Self::Trailing => container - content,
        }
    }
}
