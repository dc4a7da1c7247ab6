use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::column::{CategoricalColumn, NumericColumn};

/// Schema tag attached to every column when the table is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Numeric,
    Categorical,
}

/// Operations shared by every column implementation
pub trait ColumnTrait: Debug + Send + Sync {
    /// Number of rows, missing entries included
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_type(&self) -> ColumnType;

    /// Whether the row at `index` holds a missing value.
    /// Out-of-range indices are reported as missing.
    fn is_null(&self, index: usize) -> bool;

    /// Number of missing entries
    fn null_count(&self) -> usize {
        (0..self.len()).filter(|&i| self.is_null(i)).count()
    }
}

/// A typed column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(NumericColumn),
    Categorical(CategoricalColumn),
}

/// Null bitmask helpers. A set bit marks a missing row.
pub mod utils {
    use std::sync::Arc;

    /// Packs a bool-per-row null vector into a bitmask, or `None` when nothing is null
    pub fn create_bitmask(nulls: &[bool]) -> Option<Arc<[u8]>> {
        if !nulls.iter().any(|&is_null| is_null) {
            return None;
        }

        let bytes_needed = (nulls.len() + 7) / 8;
        let mut data = vec![0u8; bytes_needed];

        for (i, &is_null) in nulls.iter().enumerate() {
            if is_null {
                data[i / 8] |= 1 << (i % 8);
            }
        }

        Some(data.into())
    }

    /// Reads one bit of a bitmask; positions past the mask are not set
    #[inline]
    pub fn bit_is_set(mask: &[u8], index: usize) -> bool {
        let byte_idx = index / 8;
        byte_idx < mask.len() && (mask[byte_idx] & (1 << (index % 8))) != 0
    }
}

impl Column {
    /// Numeric column from plain values (NaN counts as missing)
    pub fn numeric<T: num_traits::ToPrimitive>(values: Vec<T>) -> Self {
        Column::Numeric(NumericColumn::from_values(values))
    }

    /// Numeric column from optional values
    pub fn numeric_opt<T: num_traits::ToPrimitive>(values: Vec<Option<T>>) -> Self {
        Column::Numeric(NumericColumn::from_options(values))
    }

    /// Categorical column from plain strings
    pub fn categorical<S: Into<String>>(values: Vec<S>) -> Self {
        Column::Categorical(CategoricalColumn::new(values))
    }

    /// Categorical column from optional strings
    pub fn categorical_opt<S: Into<String>>(values: Vec<Option<S>>) -> Self {
        Column::Categorical(CategoricalColumn::from_options(values))
    }

    pub fn len(&self) -> usize {
        self.as_trait().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        self.as_trait().column_type()
    }

    pub fn is_null(&self, index: usize) -> bool {
        self.as_trait().is_null(index)
    }

    pub fn null_count(&self) -> usize {
        self.as_trait().null_count()
    }

    pub fn as_numeric(&self) -> Option<&NumericColumn> {
        match self {
            Column::Numeric(col) => Some(col),
            Column::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalColumn> {
        match self {
            Column::Categorical(col) => Some(col),
            Column::Numeric(_) => None,
        }
    }

    /// Keeps only the rows whose flag in `keep` is true
    pub fn take_rows(&self, keep: &[bool]) -> Self {
        match self {
            Column::Numeric(col) => Column::Numeric(col.take_rows(keep)),
            Column::Categorical(col) => Column::Categorical(col.take_rows(keep)),
        }
    }

    fn as_trait(&self) -> &dyn ColumnTrait {
        match self {
            Column::Numeric(col) => col,
            Column::Categorical(col) => col,
        }
    }
}

impl From<NumericColumn> for Column {
    fn from(col: NumericColumn) -> Self {
        Column::Numeric(col)
    }
}

impl From<CategoricalColumn> for Column {
    fn from(col: CategoricalColumn) -> Self {
        Column::Categorical(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask_only_when_nulls_present() {
        assert!(utils::create_bitmask(&[false, false]).is_none());

        let mask = utils::create_bitmask(&[false, true, false, false, false, false, false, false, true])
            .unwrap();
        assert_eq!(mask.len(), 2);
        assert!(utils::bit_is_set(&mask, 1));
        assert!(utils::bit_is_set(&mask, 8));
        assert!(!utils::bit_is_set(&mask, 0));
        assert!(!utils::bit_is_set(&mask, 42));
    }

    #[test]
    fn test_column_type_tags() {
        assert_eq!(Column::numeric(vec![1, 2, 3]).column_type(), ColumnType::Numeric);
        assert_eq!(Column::categorical(vec!["a"]).column_type(), ColumnType::Categorical);
        assert!(Column::numeric(vec![1.0]).as_categorical().is_none());
    }
}
