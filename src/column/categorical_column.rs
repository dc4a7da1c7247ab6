use std::collections::HashMap;
use std::sync::Arc;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Dictionary-encoded string column.
///
/// Distinct values are kept once in first-seen order and every row stores a
/// code into that dictionary. Missing rows carry code 0 and a set null bit.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalColumn {
    pub(crate) categories: Arc<[String]>,
    pub(crate) codes: Arc<[u32]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl CategoricalColumn {
    /// Builds a column with no missing values
    pub fn new<S: Into<String>>(values: Vec<S>) -> Self {
        Self::from_options(values.into_iter().map(Some).collect())
    }

    /// Builds a column where `None` marks a missing value
    pub fn from_options<S: Into<String>>(values: Vec<Option<S>>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        let mut lookup: HashMap<String, u32> = HashMap::new();
        let mut codes = Vec::with_capacity(values.len());
        let mut nulls = Vec::with_capacity(values.len());

        // single pass: assign codes in first-seen order
        for value in values {
            match value {
                Some(v) => {
                    let v: String = v.into();
                    let code = match lookup.get(&v) {
                        Some(&code) => code,
                        None => {
                            let code = categories.len() as u32;
                            lookup.insert(v.clone(), code);
                            categories.push(v);
                            code
                        }
                    };
                    codes.push(code);
                    nulls.push(false);
                }
                None => {
                    codes.push(0);
                    nulls.push(true);
                }
            }
        }

        Self {
            categories: categories.into(),
            codes: codes.into(),
            null_mask: utils::create_bitmask(&nulls),
        }
    }

    /// Value at `index`, `None` when missing
    pub fn get(&self, index: usize) -> Result<Option<&str>> {
        if index >= self.codes.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.codes.len(),
            });
        }

        if self.is_null(index) {
            return Ok(None);
        }

        Ok(self
            .categories
            .get(self.codes[index] as usize)
            .map(|s| s.as_str()))
    }

    /// Iterates every row, `None` for missing entries
    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.codes.iter().enumerate().map(move |(i, &code)| {
            if self.is_null(i) {
                None
            } else {
                self.categories.get(code as usize).map(|s| s.as_str())
            }
        })
    }

    /// Distinct non-missing values in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Number of distinct non-missing values
    pub fn n_unique(&self) -> usize {
        self.categories.len()
    }

    /// Occurrences of each category, in first-seen order
    pub fn value_counts(&self) -> Vec<(&str, usize)> {
        let mut counts = vec![0usize; self.categories.len()];

        for (i, &code) in self.codes.iter().enumerate() {
            if !self.is_null(i) {
                counts[code as usize] += 1;
            }
        }

        self.categories
            .iter()
            .map(|s| s.as_str())
            .zip(counts)
            .collect()
    }

    /// Keeps the rows flagged `true` in `keep`; the dictionary is rebuilt
    /// so categories that no longer occur are dropped.
    pub fn take_rows(&self, keep: &[bool]) -> Self {
        let kept: Vec<Option<&str>> = self
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(v, _)| v)
            .collect();
        Self::from_options(kept)
    }
}

impl ColumnTrait for CategoricalColumn {
    fn len(&self) -> usize {
        self.codes.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Categorical
    }

    fn is_null(&self, index: usize) -> bool {
        if index >= self.codes.len() {
            return true;
        }
        match &self.null_mask {
            Some(mask) => utils::bit_is_set(mask, index),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_first_seen_order() {
        let col = CategoricalColumn::new(vec!["No", "Yes", "No", "No"]);
        assert_eq!(col.categories(), &["No".to_string(), "Yes".to_string()]);
        assert_eq!(col.n_unique(), 2);
        assert_eq!(col.get(1).unwrap(), Some("Yes"));
        assert!(col.get(4).is_err());
    }

    #[test]
    fn test_value_counts_skip_missing() {
        let col = CategoricalColumn::from_options(vec![Some("a"), None, Some("b"), Some("a")]);
        assert_eq!(col.null_count(), 1);
        assert_eq!(col.value_counts(), vec![("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_take_rows_rebuilds_dictionary() {
        let col = CategoricalColumn::new(vec!["x", "y", "z"]);
        let taken = col.take_rows(&[false, true, true]);
        assert_eq!(taken.categories(), &["y".to_string(), "z".to_string()]);
        assert_eq!(taken.len(), 2);
    }

    #[test]
    fn test_all_missing() {
        let col = CategoricalColumn::from_options::<String>(vec![None, None]);
        assert_eq!(col.len(), 2);
        assert_eq!(col.n_unique(), 0);
        assert!(col.value_counts().is_empty());
    }
}
