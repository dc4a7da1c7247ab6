use std::fmt::{self, Display};

use serde::Serialize;

use crate::column::{CategoricalColumn, Column, ColumnType};
use crate::error::{Error, Result};
use crate::table::Table;

/// Tenure bucket in months. Variants are ordered from shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TenureSegment {
    #[serde(rename = "0-6")]
    UpTo6,
    #[serde(rename = "7-12")]
    From7To12,
    #[serde(rename = "13-18")]
    From13To18,
    #[serde(rename = "19-24")]
    From19To24,
    #[serde(rename = ">24")]
    Over24,
}

impl TenureSegment {
    /// Every segment in ascending order
    pub const ALL: [TenureSegment; 5] = [
        TenureSegment::UpTo6,
        TenureSegment::From7To12,
        TenureSegment::From13To18,
        TenureSegment::From19To24,
        TenureSegment::Over24,
    ];

    /// Buckets a tenure. Anything at or below 6 months, negatives included,
    /// lands in the first segment.
    pub fn from_months(months: i64) -> Self {
        if months <= 6 {
            TenureSegment::UpTo6
        } else if months <= 12 {
            TenureSegment::From7To12
        } else if months <= 18 {
            TenureSegment::From13To18
        } else if months <= 24 {
            TenureSegment::From19To24
        } else {
            TenureSegment::Over24
        }
    }

    /// Short label, e.g. `"7-12"`
    pub fn label(&self) -> &'static str {
        match self {
            TenureSegment::UpTo6 => "0-6",
            TenureSegment::From7To12 => "7-12",
            TenureSegment::From13To18 => "13-18",
            TenureSegment::From19To24 => "19-24",
            TenureSegment::Over24 => ">24",
        }
    }

    /// Numbered label that sorts lexically, e.g. `"2. 7 - 12 months"`
    pub fn report_label(&self) -> &'static str {
        match self {
            TenureSegment::UpTo6 => "1. 0 - 6 months",
            TenureSegment::From7To12 => "2. 7 - 12 months",
            TenureSegment::From13To18 => "3. 13 - 18 months",
            TenureSegment::From19To24 => "4. 19 - 24 months",
            TenureSegment::Over24 => "5. > 24 months",
        }
    }

    /// Parses a short label back into a segment
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl Display for TenureSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Buckets a tenure in months
///
/// ```rust
/// use churn_eda::{segment_tenure, TenureSegment};
///
/// assert_eq!(segment_tenure(12), TenureSegment::From7To12);
/// assert_eq!(segment_tenure(25).label(), ">24");
/// ```
pub fn segment_tenure(months: i64) -> TenureSegment {
    TenureSegment::from_months(months)
}

/// Segments a numeric column row by row. Fractional months are rounded to
/// the nearest month first, so 6.5 lands in `7-12` rather than falling
/// between bands; missing rows stay missing.
pub(crate) fn segment_tenure_column_impl(table: &Table, column: &str) -> Result<CategoricalColumn> {
    let col = match table.column(column)? {
        Column::Numeric(col) => col,
        Column::Categorical(_) => {
            return Err(Error::ColumnTypeMismatch {
                name: column.to_string(),
                expected: ColumnType::Numeric,
                found: ColumnType::Categorical,
            })
        }
    };

    let labels: Vec<Option<&'static str>> = col
        .iter()
        .map(|v| v.map(|months| segment_tenure(months.round() as i64).label()))
        .collect();

    Ok(CategoricalColumn::from_options(labels))
}

/// Copy of `table` with the segment column appended as `<column><suffix>`
pub(crate) fn with_tenure_segments_impl(table: &Table, column: &str, suffix: &str) -> Result<Table> {
    let segments = segment_tenure_column_impl(table, column)?;
    let mut result = table.clone();
    result.add_column(format!("{}{}", column, suffix), segments)?;
    Ok(result)
}
