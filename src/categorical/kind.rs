//! Plot kinds.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The closed set of categorical plot kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum PlotKind {
    /// Jittered scatter of every observation.
    #[default]
    Strip,
    /// Non-overlapping scatter of every observation.
    Swarm,
    /// Quartile box with whiskers and outliers.
    Box,
    /// Kernel density outline with inner summary marks.
    Violin,
    /// Nested letter-value boxes.
    Boxen,
    /// Point estimate with error bar, joined across categories.
    Point,
    /// Bar to the point estimate with error bar.
    Bar,
    /// Bar of the row count per category.
    Count,
}

impl PlotKind {
    /// Every kind, in declaration order.
    pub const ALL: [PlotKind; 8] = [
        PlotKind::Strip,
        PlotKind::Swarm,
        PlotKind::Box,
        PlotKind::Violin,
        PlotKind::Boxen,
        PlotKind::Point,
        PlotKind::Bar,
        PlotKind::Count,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlotKind::Strip => "strip",
            PlotKind::Swarm => "swarm",
            PlotKind::Box => "box",
            PlotKind::Violin => "violin",
            PlotKind::Boxen => "boxen",
            PlotKind::Point => "point",
            PlotKind::Bar => "bar",
            PlotKind::Count => "count",
        }
    }

    /// Whether the kind needs a numeric value variable.
    #[must_use]
    pub const fn needs_values(self) -> bool {
        !matches!(self, PlotKind::Count)
    }

    /// Whether the kind draws one mark per observation.
    #[must_use]
    pub const fn is_scatter(self) -> bool {
        matches!(self, PlotKind::Strip | PlotKind::Swarm)
    }
}

impl fmt::Display for PlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlotKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        PlotKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}
