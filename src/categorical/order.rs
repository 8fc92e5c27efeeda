//! Category order resolution.
//!
//! Precedence: explicit order, then the column's attached categorical order,
//! then ascending numeric order when every value is a number (numeric columns
//! and text columns whose labels all parse as numbers), then order of first
//! appearance.

use crate::data::{Column, DataValue};
use crate::error::{Error, Result};

/// Ordered, distinct category labels mapped to positions `0..N-1`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryAxis {
    labels: Vec<String>,
}

impl CategoryAxis {
    /// Build an axis from labels that are already ordered and distinct.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Labels in axis order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the axis has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Ordinal position of a label.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Ordinal position of a data value.
    #[must_use]
    pub fn position_of(&self, value: &DataValue) -> Option<usize> {
        value.label().and_then(|l| self.position(&l))
    }
}

/// Resolve the category order of a column.
///
/// # Errors
///
/// Returns [`Error::OrderMismatch`] when `explicit` names labels that never
/// occur in the column.
pub fn resolve_order(column: &Column, explicit: Option<&[String]>) -> Result<CategoryAxis> {
    let observed = first_seen(column.values());

    if let Some(order) = explicit {
        let missing: Vec<String> = order
            .iter()
            .filter(|label| !observed.contains(label))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::OrderMismatch {
                variable: column.name().to_string(),
                missing,
            });
        }
        let dropped = observed.iter().filter(|l| !order.contains(l)).count();
        if dropped > 0 {
            tracing::debug!(
                variable = column.name(),
                dropped,
                "labels outside the explicit order are not drawn"
            );
        }
        return Ok(CategoryAxis::new(dedup(order)));
    }

    if let Some(categories) = column.categories() {
        return Ok(CategoryAxis::new(dedup(categories)));
    }

    if column.is_numeric() {
        let mut numbers = column.numbers();
        numbers.sort_by(f32::total_cmp);
        numbers.dedup();
        return Ok(CategoryAxis::new(
            numbers.into_iter().map(|n| format!("{n}")).collect(),
        ));
    }

    Ok(CategoryAxis::new(sort_if_numeric(observed)))
}

/// Sort labels by numeric value when every label parses as a number.
fn sort_if_numeric(labels: Vec<String>) -> Vec<String> {
    let parsed: Option<Vec<f64>> = labels.iter().map(|l| l.trim().parse::<f64>().ok()).collect();
    let Some(numbers) = parsed.filter(|n| !n.is_empty()) else {
        return labels;
    };
    let mut keyed: Vec<(f64, String)> = numbers.into_iter().zip(labels).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, label)| label).collect()
}

fn first_seen(values: &[DataValue]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for label in values.iter().filter_map(DataValue::label) {
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels
}

fn dedup(labels: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if !out.contains(label) {
            out.push(label.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataFrame;
    use proptest::prelude::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_numeric_text_labels_sort_by_value() {
        let df = DataFrame::new().with_str("size", &["3", "1", "10", "2", "1"]);
        let axis = resolve_order(df.column("size").unwrap(), None).unwrap();
        assert_eq!(axis.labels(), &strings(&["1", "2", "3", "10"]));

        let df = DataFrame::new().with_str("size", &["3", "1", "ten"]);
        let axis = resolve_order(df.column("size").unwrap(), None).unwrap();
        assert_eq!(axis.labels(), &strings(&["3", "1", "ten"]));
    }

    #[test]
    fn test_first_appearance_order() {
        let df = DataFrame::new().with_str("day", &["Sun", "Thu", "Sun", "Fri", "Sat"]);
        let axis = resolve_order(df.column("day").unwrap(), None).unwrap();
        assert_eq!(axis.labels(), &strings(&["Sun", "Thu", "Fri", "Sat"]));
        assert_eq!(axis.position("Fri"), Some(2));
        assert_eq!(axis.position("Mon"), None);
    }

    #[test]
    fn test_numeric_sorted_ascending() {
        let df = DataFrame::new().with_f32("size", &[3.0, 1.0, 2.0, 3.0, 6.0]);
        let axis = resolve_order(df.column("size").unwrap(), None).unwrap();
        assert_eq!(axis.labels(), &strings(&["1", "2", "3", "6"]));
        assert_eq!(axis.position_of(&DataValue::Number(6.0)), Some(3));
    }

    #[test]
    fn test_categorical_order_wins_over_inference() {
        let mut df = DataFrame::new().with_str("day", &["Sun", "Thu"]);
        df.set_categories("day", &["Thu", "Fri", "Sat", "Sun"]).unwrap();
        let axis = resolve_order(df.column("day").unwrap(), None).unwrap();
        assert_eq!(axis.len(), 4);
        assert_eq!(axis.labels()[0], "Thu");
    }

    #[test]
    fn test_explicit_order_wins() {
        let mut df = DataFrame::new().with_str("day", &["Sun", "Thu"]);
        df.set_categories("day", &["Thu", "Sun"]).unwrap();
        let order = strings(&["Sun", "Thu"]);
        let axis = resolve_order(df.column("day").unwrap(), Some(&order)).unwrap();
        assert_eq!(axis.labels(), &order);
    }

    #[test]
    fn test_explicit_order_subset_is_allowed() {
        let df = DataFrame::new().with_str("day", &["Sun", "Thu", "Fri"]);
        let order = strings(&["Fri"]);
        let axis = resolve_order(df.column("day").unwrap(), Some(&order)).unwrap();
        assert_eq!(axis.labels(), &order);
    }

    #[test]
    fn test_explicit_order_unknown_label_fails() {
        let df = DataFrame::new().with_str("day", &["Sun", "Thu"]);
        let order = strings(&["Sun", "Mon"]);
        let err = resolve_order(df.column("day").unwrap(), Some(&order)).unwrap_err();
        assert!(err.is_configuration());
        match err {
            Error::OrderMismatch { variable, missing } => {
                assert_eq!(variable, "day");
                assert_eq!(missing, strings(&["Mon"]));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_nulls_are_not_labels() {
        let mut df = DataFrame::new();
        df.add_column("deck", vec!["A".into(), DataValue::Null, "B".into()]);
        let axis = resolve_order(df.column("deck").unwrap(), None).unwrap();
        assert_eq!(axis.labels(), &strings(&["A", "B"]));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_explicit_order_is_returned_exactly(
            labels in prop::collection::vec("[a-e]", 1..40),
            seed in any::<u64>(),
        ) {
            let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
            let df = DataFrame::new().with_str("c", &refs);
            let mut order = first_seen(df.column("c").unwrap().values());
            // deterministic shuffle from the seed
            let n = order.len();
            for i in (1..n).rev() {
                let j = (seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64) % (i as u64 + 1)) as usize;
                order.swap(i, j);
            }
            let axis = resolve_order(df.column("c").unwrap(), Some(&order)).unwrap();
            prop_assert_eq!(axis.labels(), order.as_slice());
        }
    }
}
