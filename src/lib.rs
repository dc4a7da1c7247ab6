//! Exploratory summaries for tabular customer data.
//!
//! Build a [`Table`] of typed columns, then classify its columns, segment
//! tenures, summarize numeric columns or count the values of a categorical
//! one through [`TableSummarizer`].

pub mod column;
pub mod config;
pub mod error;
pub mod stats;
pub mod summary;
pub mod table;

// Re-export commonly used types
pub use column::{CategoricalColumn, Column, ColumnTrait, ColumnType, NumericColumn};
pub use config::{MissingPolicy, OnMissingColumn, SummaryConfig};
pub use error::{Error, Result};
pub use summary::{
    classify_columns, segment_tenure, summarize_categories, summarize_distribution,
    summarize_numeric, CategoryCardinality, CategorySummary, ColumnClassification, ColumnStats,
    DistributionEntry, DistributionSummary, NumericSummary, TableSummarizer, TenureSegment,
};
pub use table::Table;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
