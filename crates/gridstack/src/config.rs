//! Declarative grid configuration.
//!
//! A grid can be described in YAML and turned into a [`GridStack`] once the
//! host supplies the content callback:
//!
//! ```yaml
//! width: 320          # omit for a measured (automatic) width
//! scrollable: true
//! min_cell_width: 100
//! spacing: 10
//! num_items: 7
//! alignment: center   # leading | center | trailing
//! ```

use gridstack_core::HorizontalAlignment;
use gridstack_layout::LayoutConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::stack::{GridStack, ViewWidth};

/// Serializable description of a [`GridStack`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStackConfig {
    /// Fixed width; `None` means the host measures the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Whether the grid sits in a vertical scroll container
    #[serde(default)]
    pub scrollable: bool,
    /// Narrowest acceptable cell
    pub min_cell_width: f32,
    /// Gap between cells and rows
    #[serde(default)]
    pub spacing: f32,
    /// Number of items
    #[serde(default)]
    pub num_items: usize,
    /// Row alignment
    #[serde(default)]
    pub alignment: HorizontalAlignment,
}

impl GridStackConfig {
    /// Parse a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a field has the wrong
    /// type. Values are not validated; see [`Self::validate`].
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize configuration to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Width mode described by this configuration.
    #[must_use]
    pub fn view_width(&self) -> ViewWidth {
        self.width.map_or(ViewWidth::Automatic, ViewWidth::Fixed)
    }

    /// Check the layout preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(width) = self.width {
            if !width.is_finite() {
                return Err(ConfigError::InvalidWidth(width));
            }
        }
        let layout = LayoutConfig::new(
            self.width.unwrap_or_default(),
            self.min_cell_width,
            self.spacing,
        );
        layout.validate()?;
        Ok(())
    }

    /// Build a grid with `content` as the cell callback.
    pub fn into_stack<F>(self, content: F) -> GridStack<F> {
        GridStack::new(
            self.view_width(),
            self.min_cell_width,
            self.spacing,
            self.num_items,
            content,
        )
        .scrollable(self.scrollable)
        .alignment(self.alignment)
    }

    /// Validate, then build a grid.
    pub fn try_into_stack<F>(self, content: F) -> Result<GridStack<F>, ConfigError> {
        self.validate()?;
        Ok(self.into_stack(content))
    }
}
