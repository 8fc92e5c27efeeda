//! Error types for trueno-catplot operations.
//!
//! Errors fall into two classes. Configuration errors describe a plot request
//! that can never be satisfied (unknown kind, missing column, bad order list).
//! Data errors describe a well-formed request whose data cannot support the
//! requested statistic. Both are raised by [`CatPlot::build`] before any
//! renderer runs.
//!
//! [`CatPlot::build`]: crate::categorical::CatPlot::build

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-catplot operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Plot kind name not recognized.
    #[error("Unknown plot kind: {0:?} (expected strip, swarm, box, violin, boxen, point, bar or count)")]
    UnknownKind(String),

    /// A variable names a column that is not in the dataset.
    #[error("Column not found in dataset: {0:?}")]
    MissingColumn(String),

    /// A required role (x or y) was not assigned.
    #[error("Missing variable: {0}")]
    MissingVariable(String),

    /// Explicit order references labels absent from the data.
    #[error("Order for {variable:?} references labels not present in the data: {missing:?}")]
    OrderMismatch {
        /// Variable the order applies to.
        variable: String,
        /// Labels named in the order but never observed.
        missing: Vec<String>,
    },

    /// Split violins need exactly two hue levels.
    #[error("Split violins require exactly 2 hue levels, found {found}")]
    SplitRequiresTwoHues {
        /// Number of hue levels present.
        found: usize,
    },

    /// Parameter outside its valid domain.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numeric statistic requested on a column without numeric values.
    #[error("Column {column:?} contains no numeric values")]
    NoNumericData {
        /// Column name.
        column: String,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// Configuration file could not be parsed.
    #[cfg(feature = "config")]
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}

impl Error {
    /// Whether this error describes an invalid plot request.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownKind(_)
                | Error::MissingColumn(_)
                | Error::MissingVariable(_)
                | Error::OrderMismatch { .. }
                | Error::SplitRequiresTwoHues { .. }
                | Error::InvalidParameter(_)
        )
    }

    /// Whether this error describes data that cannot support the request.
    #[must_use]
    pub fn is_data(&self) -> bool {
        matches!(self, Error::NoNumericData { .. } | Error::EmptyData)
    }
}
