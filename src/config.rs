//! YAML plot configuration.
//!
//! A configuration file fixes everything about a plot except the data and the
//! variable roles:
//!
//! ```yaml
//! kind: violin
//! theme: white
//! palette: muted
//! height: 4
//! seed: 7
//! options:
//!   inner: quartiles
//!   cut: 0
//! ```

use crate::categorical::{CatPlot, PlotKind};
use crate::color::Palette;
use crate::error::{Error, Result};
use crate::plots::PlotOptions;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Plot configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatPlotConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Plot kind.
    #[serde(default)]
    pub kind: PlotKind,

    /// Theme preset name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Palette name or comma-separated hex colors; the preset's palette when unset.
    #[serde(default)]
    pub palette: Option<String>,

    /// Panel height in inches.
    #[serde(default = "default_height")]
    pub height: f32,

    /// Panel width as a multiple of its height.
    #[serde(default = "default_aspect")]
    pub aspect: f32,

    /// Seed for jitter and bootstrap resampling.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Include hue legend entries.
    #[serde(default = "default_legend")]
    pub legend: bool,

    /// Per-kind options.
    #[serde(default)]
    pub options: PlotOptions,
}

fn default_version() -> u32 {
    1
}
fn default_theme() -> String {
    "deep".to_string()
}
fn default_height() -> f32 {
    5.0
}
fn default_aspect() -> f32 {
    1.0
}
fn default_legend() -> bool {
    true
}

impl Default for CatPlotConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            kind: PlotKind::default(),
            theme: default_theme(),
            palette: None,
            height: default_height(),
            aspect: default_aspect(),
            seed: None,
            legend: default_legend(),
            options: PlotOptions::default(),
        }
    }
}

impl CatPlotConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed or has wrongly typed fields.
    pub fn parse(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Resolve the theme preset and palette override.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an unknown preset or palette.
    pub fn theme(&self) -> Result<Theme> {
        let theme = Theme::preset(&self.theme)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown theme {:?}", self.theme)))?;
        match &self.palette {
            Some(name) => Ok(theme.palette(name.parse::<Palette>()?)),
            None => Ok(theme),
        }
    }

    /// Apply the configuration to a plot builder.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot be resolved.
    pub fn apply(&self, plot: CatPlot) -> Result<CatPlot> {
        let plot = plot
            .kind(self.kind)
            .theme(self.theme()?)
            .height(self.height)
            .aspect(self.aspect)
            .legend(self.legend)
            .options(self.options.clone());
        Ok(match self.seed {
            Some(seed) => plot.seed(seed),
            None => plot,
        })
    }
}
