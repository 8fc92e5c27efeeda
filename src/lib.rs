//! # Trueno-Catplot
//!
//! Categorical plots over tabular data: one categorical axis, one value axis,
//! and an optional hue variable, drawn as any of eight plot kinds and laid out
//! in a facet grid.
//!
//! Built on the [trueno](https://crates.io/crates/trueno) core library for the
//! numeric reductions behind estimators and axis ranges.
//!
//! ## Plot Kinds
//!
//! - **Scatter**: `strip` (jittered) and `swarm` (non-overlapping)
//! - **Distribution**: `box`, `violin` and `boxen` (letter values)
//! - **Estimate**: `point`, `bar` and `count`
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_catplot::prelude::*;
//!
//! let data = DataFrame::new()
//!     .with_str("day", &["Thu", "Fri", "Sat", "Thu", "Fri", "Sat"])
//!     .with_f32("total_bill", &[10.3, 21.0, 23.7, 15.2, 18.4, 25.3]);
//!
//! let figure = CatPlot::new(data)
//!     .x("day")
//!     .y("total_bill")
//!     .kind(PlotKind::Box)
//!     .build()?;
//!
//! let svg = SvgEncoder::from_figure(&figure)?.render();
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), trueno_catplot::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable parallel trueno reductions
//! - `config`: YAML plot configuration
//!
//! ## References
//!
//! - Hofmann, H., Wickham, H., & Kafadar, K. (2017). "Letter-Value Plots:
//!   Boxplots for Large Data." *JCGS* 26(3).
//! - Scott, D. W. (1992). *Multivariate Density Estimation*. Wiley.
//! - Efron, B., & Tibshirani, R. (1993). *An Introduction to the Bootstrap*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types, palettes and color space conversions.
pub mod color;

/// Geometric primitives (points, rectangles, orientation).
pub mod geometry;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

/// In-memory tabular data.
pub mod data;

/// Non-data appearance of a figure.
pub mod theme;

// ============================================================================
// Plotting Modules
// ============================================================================

/// Statistics behind the plot kinds.
pub mod stats;

/// Dispatcher: roles, ordering, hue, facets and figures.
pub mod categorical;

/// Per-kind renderers.
pub mod plots;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Data-space draw commands.
pub mod render;

/// Output encoders (SVG).
pub mod output;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML plot configuration.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-catplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_catplot::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::categorical::{CatPlot, DodgeEmpty, Figure, Panel, PlotKind};
    pub use crate::color::{Palette, Rgba};
    pub use crate::data::{DataFrame, DataValue};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Orient, Point, Rect};
    pub use crate::output::SvgEncoder;
    pub use crate::plots::{PlotOptions, ViolinInner, ViolinScale};
    pub use crate::render::{DrawCommand, DrawList};
    pub use crate::stats::{Bandwidth, ErrorBar, Estimator, KDepth};
    pub use crate::theme::Theme;

    #[cfg(feature = "config")]
    pub use crate::config::CatPlotConfig;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
