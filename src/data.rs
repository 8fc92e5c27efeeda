//! Tabular data for categorical plots.
//!
//! A [`DataFrame`] holds named columns in insertion order. Columns may carry an
//! attached categorical order, which the order resolver honours ahead of any
//! inferred order.

use crate::error::{Error, Result};

/// A value in a data frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// A numeric value.
    Number(f32),
    /// A text value.
    Text(String),
    /// A missing value.
    Null,
}

impl DataValue {
    /// Get as f32, or None if not a finite number.
    #[must_use]
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            DataValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Get as string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether the value is missing (null or NaN).
    #[must_use]
    pub fn is_null(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::Number(n) => n.is_nan(),
            DataValue::Text(_) => false,
        }
    }

    /// Category label for this value. Numbers print without a trailing `.0`.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        match self {
            _ if self.is_null() => None,
            DataValue::Number(n) => Some(format!("{n}")),
            DataValue::Text(s) => Some(s.clone()),
            DataValue::Null => None,
        }
    }
}

impl From<f32> for DataValue {
    fn from(v: f32) -> Self {
        DataValue::Number(v)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DataValue::Null, Into::into)
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<DataValue>,
    categories: Option<Vec<String>>,
}

impl Column {
    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values.
    #[must_use]
    pub fn values(&self) -> &[DataValue] {
        &self.values
    }

    /// Attached categorical order, if any.
    #[must_use]
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    /// Finite numeric values, skipping text and nulls.
    #[must_use]
    pub fn numbers(&self) -> Vec<f32> {
        self.values.iter().filter_map(DataValue::as_f32).collect()
    }

    /// Whether any value is numeric.
    #[must_use]
    pub fn has_numbers(&self) -> bool {
        self.values.iter().any(|v| v.as_f32().is_some())
    }

    /// Whether every non-null value is numeric (and at least one exists).
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.has_numbers()
            && self
                .values
                .iter()
                .all(|v| v.is_null() || matches!(v, DataValue::Number(_)))
    }
}

/// A columnar data frame with ordered columns.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a column of arbitrary values.
    pub fn add_column(&mut self, name: &str, values: Vec<DataValue>) {
        self.n_rows = self.n_rows.max(values.len());
        let column = Column {
            name: name.to_string(),
            values,
            categories: None,
        };
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Add a numeric column.
    pub fn add_column_f32(&mut self, name: &str, data: &[f32]) {
        self.add_column(name, data.iter().map(|&v| DataValue::Number(v)).collect());
    }

    /// Add a text column.
    pub fn add_column_str(&mut self, name: &str, data: &[&str]) {
        self.add_column(name, data.iter().map(|&s| DataValue::from(s)).collect());
    }

    /// Builder-style [`add_column_f32`](Self::add_column_f32).
    #[must_use]
    pub fn with_f32(mut self, name: &str, data: &[f32]) -> Self {
        self.add_column_f32(name, data);
        self
    }

    /// Builder-style [`add_column_str`](Self::add_column_str).
    #[must_use]
    pub fn with_str(mut self, name: &str, data: &[&str]) -> Self {
        self.add_column_str(name, data);
        self
    }

    /// Attach a categorical order to a column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if the column does not exist.
    pub fn set_categories(&mut self, name: &str, categories: &[&str]) -> Result<()> {
        let column = self
            .columns
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))?;
        column.categories = Some(categories.iter().map(|s| s.to_string()).collect());
        Ok(())
    }

    /// Get a column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a column or fail with [`Error::MissingColumn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the column does not exist.
    pub fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Get a column's values.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[DataValue]> {
        self.column(name).map(Column::values)
    }

    /// Get a column as f32 values (non-numeric cells skipped).
    #[must_use]
    pub fn get_f32(&self, name: &str) -> Option<Vec<f32>> {
        self.column(name).map(Column::numbers)
    }

    /// Value at (`row`, `column`); [`DataValue::Null`] past a short column's end.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<&DataValue> {
        const NULL: &DataValue = &DataValue::Null;
        self.column(name)
            .map(|c| c.values.get(row).unwrap_or(NULL))
    }

    /// All values of one row, paired with column names.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<(&str, &DataValue)>> {
        const NULL: &DataValue = &DataValue::Null;
        if index >= self.n_rows {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name.as_str(), c.values.get(index).unwrap_or(NULL)))
                .collect(),
        )
    }

    /// Get number of rows.
    #[must_use]
    pub fn nrow(&self) -> usize {
        self.n_rows
    }

    /// Get number of columns.
    #[must_use]
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in insertion order.
    #[must_use]
    pub fn columns(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Reshape wide-form data (one numeric column per category) to long form.
    ///
    /// Every numeric column becomes a level of `var_name`, in column order;
    /// its values go to `value_name`. Non-numeric columns are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if no column is numeric.
    pub fn melt_numeric(&self, var_name: &str, value_name: &str) -> Result<DataFrame> {
        let numeric: Vec<&Column> = self.columns.iter().filter(|c| c.is_numeric()).collect();
        if numeric.is_empty() {
            return Err(Error::EmptyData);
        }

        let mut vars = Vec::new();
        let mut values = Vec::new();
        for column in &numeric {
            for value in &column.values {
                vars.push(DataValue::Text(column.name.clone()));
                values.push(value.clone());
            }
        }

        let mut long = DataFrame::new();
        long.add_column(var_name, vars);
        long.add_column(value_name, values);
        let order: Vec<&str> = numeric.iter().map(|c| c.name.as_str()).collect();
        long.set_categories(var_name, &order)?;
        Ok(long)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tips() -> DataFrame {
        DataFrame::new()
            .with_str("day", &["Thu", "Fri", "Thu", "Sat"])
            .with_f32("total_bill", &[10.0, 20.5, 15.0, 30.0])
    }

    #[test]
    fn test_dataframe_basic() {
        let df = tips();
        assert_eq!(df.nrow(), 4);
        assert_eq!(df.ncol(), 2);
        assert_eq!(df.columns(), vec!["day", "total_bill"]);
        assert!(df.has_column("day"));
        assert!(!df.has_column("tip"));
    }

    #[test]
    fn test_get_f32_skips_text() {
        let mut df = DataFrame::new();
        df.add_column("mixed", vec![1.0f32.into(), "a".into(), DataValue::Null, 2.0f32.into()]);
        assert_eq!(df.get_f32("mixed").unwrap(), vec![1.0, 2.0]);
        assert!(df.get_f32("missing").is_none());
    }

    #[test]
    fn test_require_missing_column() {
        let err = tips().require("size").unwrap_err();
        assert!(matches!(err, Error::MissingColumn(name) if name == "size"));
    }

    #[test]
    fn test_replace_column_keeps_position() {
        let mut df = tips();
        df.add_column_f32("day", &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(df.columns(), vec!["day", "total_bill"]);
        assert!(df.column("day").unwrap().is_numeric());
    }

    #[test]
    fn test_row_access() {
        let df = tips();
        let row = df.row(1).unwrap();
        assert_eq!(row[0], ("day", &DataValue::Text("Fri".into())));
        assert_eq!(row[1], ("total_bill", &DataValue::Number(20.5)));
        assert!(df.row(4).is_none());
    }

    #[test]
    fn test_short_column_reads_null() {
        let mut df = tips();
        df.add_column_f32("short", &[1.0]);
        assert_eq!(df.value(3, "short"), Some(&DataValue::Null));
        assert_eq!(df.value(0, "nope"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DataValue::Number(3.0).label().as_deref(), Some("3"));
        assert_eq!(DataValue::Number(2.5).label().as_deref(), Some("2.5"));
        assert_eq!(DataValue::Number(f32::NAN).label(), None);
        assert_eq!(DataValue::Null.label(), None);
        assert_eq!(DataValue::from(Some("x")).label().as_deref(), Some("x"));
        assert_eq!(DataValue::from(None::<f32>), DataValue::Null);
    }

    #[test]
    fn test_is_numeric() {
        let mut df = DataFrame::new();
        df.add_column("n", vec![1.0f32.into(), DataValue::Null]);
        df.add_column("t", vec!["1".into()]);
        assert!(df.column("n").unwrap().is_numeric());
        assert!(!df.column("t").unwrap().is_numeric());
    }

    #[test]
    fn test_set_categories() {
        let mut df = tips();
        df.set_categories("day", &["Thu", "Fri", "Sat", "Sun"]).unwrap();
        assert_eq!(df.column("day").unwrap().categories().unwrap().len(), 4);
        assert!(df.set_categories("nope", &["a"]).is_err());
    }

    #[test]
    fn test_melt_numeric() {
        let wide = DataFrame::new()
            .with_f32("b", &[1.0, 2.0])
            .with_str("label", &["x", "y"])
            .with_f32("a", &[3.0, 4.0]);
        let long = wide.melt_numeric("variable", "value").unwrap();
        assert_eq!(long.nrow(), 4);
        let vars = long.column("variable").unwrap();
        assert_eq!(vars.categories().unwrap(), &["b".to_string(), "a".to_string()]);
        assert_eq!(long.get_f32("value").unwrap(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_melt_without_numeric_columns() {
        let df = DataFrame::new().with_str("s", &["a"]);
        assert!(matches!(df.melt_numeric("v", "w"), Err(Error::EmptyData)));
    }
}
