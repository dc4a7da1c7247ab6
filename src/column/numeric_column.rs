use std::sync::Arc;

use num_traits::ToPrimitive;

use crate::column::common::{utils, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Numeric column stored as `f64` with an optional null bitmask.
///
/// Missing slots hold `0.0` in `data`; the bitmask is the only source of
/// truth for missingness. `NaN` inputs are recorded as missing.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub(crate) data: Arc<[f64]>,
    pub(crate) null_mask: Option<Arc<[u8]>>,
}

impl NumericColumn {
    /// Builds a column from values of any primitive numeric type
    pub fn from_values<T: ToPrimitive>(values: Vec<T>) -> Self {
        Self::from_options(values.into_iter().map(Some).collect())
    }

    /// Builds a column where `None` marks a missing value
    pub fn from_options<T: ToPrimitive>(values: Vec<Option<T>>) -> Self {
        let mut data = Vec::with_capacity(values.len());
        let mut nulls = Vec::with_capacity(values.len());

        for value in values {
            match value.and_then(|v| v.to_f64()).filter(|v| !v.is_nan()) {
                Some(v) => {
                    data.push(v);
                    nulls.push(false);
                }
                None => {
                    data.push(0.0);
                    nulls.push(true);
                }
            }
        }

        Self {
            data: data.into(),
            null_mask: utils::create_bitmask(&nulls),
        }
    }

    /// Value at `index`, `None` when missing
    pub fn get(&self, index: usize) -> Result<Option<f64>> {
        if index >= self.data.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                size: self.data.len(),
            });
        }

        if self.is_null(index) {
            Ok(None)
        } else {
            Ok(Some(self.data[index]))
        }
    }

    /// Iterates every row, `None` for missing entries
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &v)| if self.is_null(i) { None } else { Some(v) })
    }

    /// The non-missing values in row order
    pub fn valid_values(&self) -> Vec<f64> {
        self.iter().flatten().collect()
    }

    /// Mean of the non-missing values
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .iter()
            .flatten()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }

    /// New column with every missing entry replaced by `value`
    pub fn fill_missing(&self, value: f64) -> Self {
        if self.null_mask.is_none() {
            return self.clone();
        }

        let filled: Vec<f64> = self.iter().map(|v| v.unwrap_or(value)).collect();
        Self::from_values(filled)
    }

    /// Keeps the rows flagged `true` in `keep`
    pub fn take_rows(&self, keep: &[bool]) -> Self {
        let kept: Vec<Option<f64>> = self
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(v, _)| v)
            .collect();
        Self::from_options(kept)
    }
}

impl ColumnTrait for NumericColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Numeric
    }

    fn is_null(&self, index: usize) -> bool {
        if index >= self.data.len() {
            return true;
        }
        match &self.null_mask {
            Some(mask) => utils::bit_is_set(mask, index),
            None => false,
        }
    }
}
