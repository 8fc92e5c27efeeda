//! Faceting: small multiples keyed by up to two variables.
//!
//! Each cell of a [`FacetGrid`] owns a disjoint set of row indices. Cells are
//! stored row-major (left-to-right, top-to-bottom), which is also the order in
//! which they are rendered.

use crate::categorical::order::{resolve_order, CategoryAxis};
use crate::data::DataFrame;
use crate::error::{Error, Result};

/// Faceting specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Facet {
    /// No faceting.
    #[default]
    None,
    /// One panel per level, stacked vertically.
    Row {
        /// Column to facet by.
        var: String,
    },
    /// One panel per level, side by side.
    Col {
        /// Column to facet by.
        var: String,
    },
    /// Grid of panels keyed by two variables.
    Grid {
        /// Row variable.
        row: String,
        /// Column variable.
        col: String,
    },
    /// Column facets wrapped after `ncol` panels.
    Wrap {
        /// Variable to facet by.
        var: String,
        /// Number of columns.
        ncol: usize,
    },
}

impl Facet {
    /// Combine optional row/column variables (and wrapping) into a facet layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `col_wrap` is zero or combined
    /// with a row variable.
    pub fn from_vars(row: Option<&str>, col: Option<&str>, col_wrap: Option<usize>) -> Result<Self> {
        match (row, col, col_wrap) {
            (_, _, Some(0)) => Err(Error::InvalidParameter("col_wrap must be positive".into())),
            (Some(_), _, Some(_)) => Err(Error::InvalidParameter(
                "col_wrap cannot be combined with a row variable".into(),
            )),
            (None, Some(c), Some(n)) => Ok(Facet::Wrap { var: c.to_string(), ncol: n }),
            (None, None, Some(_)) => Err(Error::InvalidParameter(
                "col_wrap requires a col variable".into(),
            )),
            (Some(r), Some(c), None) => Ok(Facet::Grid { row: r.to_string(), col: c.to_string() }),
            (Some(r), None, None) => Ok(Facet::Row { var: r.to_string() }),
            (None, Some(c), None) => Ok(Facet::Col { var: c.to_string() }),
            (None, None, None) => Ok(Facet::None),
        }
    }

    /// Variables referenced by this layout.
    #[must_use]
    pub fn variables(&self) -> Vec<&str> {
        match self {
            Facet::None => Vec::new(),
            Facet::Row { var } | Facet::Col { var } | Facet::Wrap { var, .. } => vec![var.as_str()],
            Facet::Grid { row, col } => vec![row.as_str(), col.as_str()],
        }
    }
}

/// One panel of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetCell {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Level of the row variable, if any.
    pub row_label: Option<String>,
    /// Level of the column variable, if any.
    pub col_label: Option<String>,
    /// Indices of the dataset rows owned by this cell.
    pub rows: Vec<usize>,
}

impl FacetCell {
    /// Panel title such as `"time = Lunch | smoker = Yes"`.
    #[must_use]
    pub fn title(&self, row_var: Option<&str>, col_var: Option<&str>) -> String {
        let parts: Vec<String> = [(row_var, &self.row_label), (col_var, &self.col_label)]
            .into_iter()
            .filter_map(|(var, label)| Some(format!("{} = {}", var?, label.as_ref()?)))
            .collect();
        parts.join(" | ")
    }
}

/// A 2D arrangement of independent panels.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetGrid {
    nrows: usize,
    ncols: usize,
    row_var: Option<String>,
    col_var: Option<String>,
    cells: Vec<FacetCell>,
}

impl FacetGrid {
    /// Partition `data` according to `facet`.
    ///
    /// # Errors
    ///
    /// Fails if a facet variable is missing or an order names absent labels.
    pub fn build(
        data: &DataFrame,
        facet: &Facet,
        row_order: Option<&[String]>,
        col_order: Option<&[String]>,
    ) -> Result<Self> {
        let all_rows: Vec<usize> = (0..data.nrow()).collect();

        let levels = |var: &str, order: Option<&[String]>| -> Result<CategoryAxis> {
            resolve_order(data.require(var)?, order)
        };
        let level_of = |var: &str, axis: &CategoryAxis, row: usize| -> Option<usize> {
            data.value(row, var).and_then(|v| axis.position_of(v))
        };

        let grid = match facet {
            Facet::None => Self {
                nrows: 1,
                ncols: 1,
                row_var: None,
                col_var: None,
                cells: vec![FacetCell {
                    row: 0,
                    col: 0,
                    row_label: None,
                    col_label: None,
                    rows: all_rows,
                }],
            },
            Facet::Row { var } => {
                let axis = levels(var.as_str(), row_order)?;
                let cells = split(&axis, &all_rows, |r| level_of(var.as_str(), &axis, r))
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, rows))| FacetCell {
                        row: i,
                        col: 0,
                        row_label: Some(label),
                        col_label: None,
                        rows,
                    })
                    .collect();
                Self { nrows: axis.len(), ncols: 1, row_var: Some(var.clone()), col_var: None, cells }
            }
            Facet::Col { var } | Facet::Wrap { var, .. } => {
                let axis = levels(var.as_str(), col_order)?;
                let wrap = match facet {
                    Facet::Wrap { ncol, .. } => (*ncol).max(1),
                    _ => axis.len().max(1),
                };
                let cells = split(&axis, &all_rows, |r| level_of(var.as_str(), &axis, r))
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, rows))| FacetCell {
                        row: i / wrap,
                        col: i % wrap,
                        row_label: None,
                        col_label: Some(label),
                        rows,
                    })
                    .collect();
                Self {
                    nrows: axis.len().div_ceil(wrap),
                    ncols: wrap.min(axis.len()),
                    row_var: None,
                    col_var: Some(var.clone()),
                    cells,
                }
            }
            Facet::Grid { row, col } => {
                let row_axis = levels(row.as_str(), row_order)?;
                let col_axis = levels(col.as_str(), col_order)?;
                let mut cells = Vec::with_capacity(row_axis.len() * col_axis.len());
                let by_row = split(&row_axis, &all_rows, |r| level_of(row.as_str(), &row_axis, r));
                for (i, (row_label, row_rows)) in by_row.into_iter().enumerate() {
                    let by_col = split(&col_axis, &row_rows, |r| level_of(col.as_str(), &col_axis, r));
                    for (j, (col_label, rows)) in by_col.into_iter().enumerate() {
                        cells.push(FacetCell {
                            row: i,
                            col: j,
                            row_label: Some(row_label.clone()),
                            col_label: Some(col_label),
                            rows,
                        });
                    }
                }
                Self {
                    nrows: row_axis.len(),
                    ncols: col_axis.len(),
                    row_var: Some(row.clone()),
                    col_var: Some(col.clone()),
                    cells,
                }
            }
        };

        tracing::debug!(nrows = grid.nrows, ncols = grid.ncols, "facet grid built");
        Ok(grid)
    }

    /// Number of grid rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Row facet variable.
    #[must_use]
    pub fn row_var(&self) -> Option<&str> {
        self.row_var.as_deref()
    }

    /// Column facet variable.
    #[must_use]
    pub fn col_var(&self) -> Option<&str> {
        self.col_var.as_deref()
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[FacetCell] {
        &self.cells
    }

    /// Cell at a grid position.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&FacetCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }
}

/// Bucket `rows` by level; rows with no level are dropped.
fn split(
    axis: &CategoryAxis,
    rows: &[usize],
    level: impl Fn(usize) -> Option<usize>,
) -> Vec<(String, Vec<usize>)> {
    let mut buckets: Vec<(String, Vec<usize>)> =
        axis.labels().iter().map(|l| (l.clone(), Vec::new())).collect();
    for &r in rows {
        if let Some(i) = level(r) {
            buckets[i].1.push(r);
        }
    }
    buckets
}
