//! Categorical plot dispatch.
//!
//! # Pipeline
//!
//! 1. **Order**: each categorical variable resolves to a [`CategoryAxis`]
//! 2. **Hue**: an optional [`HueGrouping`] splits every category again
//! 3. **Dodge**: [`DodgeLayout`] places hue sub-groups side by side
//! 4. **Facet**: [`FacetGrid`] partitions rows into independent panels
//! 5. **Dispatch**: [`CatPlot::build`] renders each panel by [`PlotKind`]

mod catplot;
mod dodge;
mod facet;
mod hue;
mod kind;
mod order;

pub use catplot::{CatPlot, Figure, Panel};
pub use dodge::{DodgeEmpty, DodgeLayout};
pub use facet::{Facet, FacetCell, FacetGrid};
pub use hue::HueGrouping;
pub use kind::PlotKind;
pub use order::{resolve_order, CategoryAxis};
