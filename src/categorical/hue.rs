//! Hue grouping: a secondary categorical partition with one color per level.

use crate::categorical::order::{resolve_order, CategoryAxis};
use crate::color::{Palette, Rgba};
use crate::data::DataFrame;
use crate::error::Result;

/// Secondary partition of rows, with its own label order and colors.
#[derive(Debug, Clone, PartialEq)]
pub struct HueGrouping {
    variable: String,
    axis: CategoryAxis,
    colors: Vec<Rgba>,
}

impl HueGrouping {
    /// Resolve the hue levels of `variable` and assign palette colors.
    ///
    /// # Errors
    ///
    /// Fails if the column is missing or `order` names absent labels.
    pub fn resolve(
        data: &DataFrame,
        variable: &str,
        order: Option<&[String]>,
        palette: &Palette,
    ) -> Result<Self> {
        let axis = resolve_order(data.require(variable)?, order)?;
        let colors = palette.colors(axis.len());
        Ok(Self {
            variable: variable.to_string(),
            axis,
            colors,
        })
    }

    /// Name of the grouping variable.
    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Ordered hue levels.
    #[must_use]
    pub fn axis(&self) -> &CategoryAxis {
        &self.axis
    }

    /// Number of hue levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axis.len()
    }

    /// Whether there are no hue levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axis.is_empty()
    }

    /// Color for hue level `index`.
    #[must_use]
    pub fn color(&self, index: usize) -> Rgba {
        self.colors.get(index).copied().unwrap_or(Rgba::GRAY)
    }

    /// Legend entries: (label, color) per level.
    #[must_use]
    pub fn legend(&self) -> Vec<(String, Rgba)> {
        self.axis
            .labels()
            .iter()
            .cloned()
            .zip(self.colors.iter().copied())
            .collect()
    }
}
