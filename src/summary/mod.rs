//! Exploratory summaries over a [`Table`].
//!
//! [`TableSummarizer`] bundles the operations with a [`SummaryConfig`]. Each
//! operation reads the table and returns a fresh record; nothing is cached.
//!
//! # Example
//!
//! ```rust
//! use churn_eda::{Column, Table, TableSummarizer};
//!
//! let table = Table::new()
//!     .with_column("tenure", Column::numeric(vec![3, 10, 15, 30]))?
//!     .with_column("Churn", Column::categorical(vec!["Yes", "No", "No", "No"]))?;
//!
//! let summarizer = TableSummarizer::new();
//! let churn = summarizer.summarize_distribution(&table, "Churn")?;
//! assert_eq!(churn.entries[0].value, "No");
//! assert_eq!(churn.entries[0].percentage, 75.0);
//!
//! let numeric = summarizer.summarize_numeric(&table, None)?;
//! assert_eq!(numeric.get("tenure").unwrap().median, Some(12.5));
//! # Ok::<(), churn_eda::Error>(())
//! ```

mod categories;
mod classify;
mod distribution;
mod numeric;
mod tenure;

pub use categories::{CategoryCardinality, CategorySummary};
pub use classify::ColumnClassification;
pub use distribution::{DistributionEntry, DistributionSummary};
pub use numeric::{ColumnStats, NumericSummary};
pub use tenure::{segment_tenure, TenureSegment};

use crate::column::CategoricalColumn;
use crate::config::SummaryConfig;
use crate::error::Result;
use crate::table::Table;

/// Entry point for the summary operations
#[derive(Debug, Clone, Default)]
pub struct TableSummarizer {
    config: SummaryConfig,
}

impl TableSummarizer {
    /// Summarizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Splits the column names into numeric and categorical
    pub fn classify_columns(&self, table: &Table) -> ColumnClassification {
        classify::classify_columns_impl(table)
    }

    /// Distinct values of every categorical column
    pub fn summarize_categories(&self, table: &Table) -> CategorySummary {
        categories::summarize_categories_impl(table)
    }

    /// Buckets a tenure in months
    pub fn segment_tenure(&self, months: i64) -> TenureSegment {
        segment_tenure(months)
    }

    /// Buckets every row of a numeric tenure column
    ///
    /// # Errors
    /// `ColumnNotFound` when the column is absent, `ColumnTypeMismatch` when
    /// it is categorical.
    pub fn segment_tenure_column(&self, table: &Table, column: &str) -> Result<CategoricalColumn> {
        tenure::segment_tenure_column_impl(table, column)
    }

    /// Copy of `table` with the tenure segments of `column` appended under
    /// `column` + the configured suffix
    pub fn with_tenure_segments(&self, table: &Table, column: &str) -> Result<Table> {
        tenure::with_tenure_segments_impl(table, column, &self.config.segment_suffix)
    }

    /// Mean, median and sample standard deviation per numeric column
    ///
    /// `columns` defaults to every numeric column. Missing values are handled
    /// per the configured [`MissingPolicy`](crate::MissingPolicy); absent or
    /// non-numeric requested columns per
    /// [`OnMissingColumn`](crate::OnMissingColumn).
    pub fn summarize_numeric(&self, table: &Table, columns: Option<&[&str]>) -> Result<NumericSummary> {
        numeric::summarize_numeric_impl(table, columns, &self.config)
    }

    /// Count and share of each distinct value of `column`
    ///
    /// # Errors
    /// `ColumnNotFound` when the column is absent.
    pub fn summarize_distribution(&self, table: &Table, column: &str) -> Result<DistributionSummary> {
        distribution::summarize_distribution_impl(table, column, self.config.round_digits)
    }
}

/// [`TableSummarizer::classify_columns`] with the default configuration
pub fn classify_columns(table: &Table) -> ColumnClassification {
    classify::classify_columns_impl(table)
}

/// [`TableSummarizer::summarize_categories`] with the default configuration
pub fn summarize_categories(table: &Table) -> CategorySummary {
    categories::summarize_categories_impl(table)
}

/// [`TableSummarizer::summarize_numeric`] with the default configuration
pub fn summarize_numeric(table: &Table, columns: Option<&[&str]>) -> Result<NumericSummary> {
    numeric::summarize_numeric_impl(table, columns, &SummaryConfig::default())
}

/// [`TableSummarizer::summarize_distribution`] with the default configuration
pub fn summarize_distribution(table: &Table, column: &str) -> Result<DistributionSummary> {
    distribution::summarize_distribution_impl(table, column, SummaryConfig::default().round_digits)
}
