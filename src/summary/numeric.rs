use std::borrow::Cow;

use rayon::prelude::*;
use serde::Serialize;

use crate::column::{Column, ColumnTrait, ColumnType};
use crate::config::{MissingPolicy, OnMissingColumn, SummaryConfig};
use crate::error::{Error, Result};
use crate::stats::{self, round_to};
use crate::summary::classify::classify_columns_impl;
use crate::table::Table;

/// Statistics of one numeric column, rounded to the configured precision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStats {
    pub column: String,
    /// Values that entered the reductions
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation
    pub std_dev: Option<f64>,
}

/// Result of a numeric summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Policy the summary was computed under
    pub policy: MissingPolicy,
    /// Rows in the aggregation window after missing-value handling
    pub rows_used: usize,
    /// One entry per summarized column, in request order
    pub columns: Vec<ColumnStats>,
}

impl NumericSummary {
    pub fn get(&self, column: &str) -> Option<&ColumnStats> {
        self.columns.iter().find(|c| c.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnStats> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Long-form `Metric`/`Value` table: `Average <col>`, `Median <col>` and
    /// `Std Dev <col>` for every column. Undefined statistics are missing.
    pub fn to_table(&self) -> Result<Table> {
        let mut metrics = Vec::with_capacity(self.columns.len() * 3);
        let mut values = Vec::with_capacity(self.columns.len() * 3);

        for stats in &self.columns {
            metrics.push(format!("Average {}", stats.column));
            values.push(stats.mean);
            metrics.push(format!("Median {}", stats.column));
            values.push(stats.median);
            metrics.push(format!("Std Dev {}", stats.column));
            values.push(stats.std_dev);
        }

        Table::new()
            .with_column("Metric", Column::categorical(metrics))?
            .with_column("Value", Column::numeric_opt(values))
    }
}

pub(crate) fn summarize_numeric_impl(
    table: &Table,
    columns: Option<&[&str]>,
    config: &SummaryConfig,
) -> Result<NumericSummary> {
    let requested: Vec<String> = match columns {
        Some(names) => names.iter().map(|n| n.to_string()).collect(),
        None => classify_columns_impl(table).numeric,
    };

    let selected = resolve_columns(table, &requested, config.on_missing_column)?;
    let subset: Vec<&str> = selected.iter().map(|s| s.as_str()).collect();

    let working: Cow<'_, Table> = match config.missing {
        MissingPolicy::Drop => {
            let dropped = table.drop_missing(&subset)?;
            log::debug!(
                "dropped {} of {} rows with missing values",
                table.row_count() - dropped.row_count(),
                table.row_count()
            );
            Cow::Owned(dropped)
        }
        MissingPolicy::Fill => Cow::Owned(fill_with_means(table, &subset)?),
        MissingPolicy::Ignore => Cow::Borrowed(table),
    };

    let digits = config.round_digits;
    let summarize = |name: &&str| -> Result<ColumnStats> { column_stats(&working, name, digits) };

    let stats = if config.parallel {
        subset.par_iter().map(summarize).collect::<Result<Vec<_>>>()?
    } else {
        subset.iter().map(summarize).collect::<Result<Vec<_>>>()?
    };

    Ok(NumericSummary {
        policy: config.missing,
        rows_used: working.row_count(),
        columns: stats,
    })
}

/// Keeps the requested columns that exist and are numeric, dropping repeats.
/// Anything else is skipped with a warning or turned into an error.
fn resolve_columns(
    table: &Table,
    requested: &[String],
    on_missing: OnMissingColumn,
) -> Result<Vec<String>> {
    let mut selected: Vec<String> = Vec::with_capacity(requested.len());

    for name in requested {
        if selected.contains(name) {
            continue;
        }

        match table.column_type(name) {
            Ok(ColumnType::Numeric) => selected.push(name.clone()),
            Ok(found) => match on_missing {
                OnMissingColumn::Skip => {
                    log::warn!("skipping non-numeric column '{}'", name);
                }
                OnMissingColumn::Error => {
                    return Err(Error::ColumnTypeMismatch {
                        name: name.clone(),
                        expected: ColumnType::Numeric,
                        found,
                    })
                }
            },
            Err(err) => match on_missing {
                OnMissingColumn::Skip => {
                    log::warn!("skipping column '{}': not in table", name);
                }
                OnMissingColumn::Error => return Err(err),
            },
        }
    }

    log::debug!("summarizing numeric columns {:?}", selected);
    Ok(selected)
}

/// Copy of the table where each selected column's gaps hold that column's mean
fn fill_with_means(table: &Table, subset: &[&str]) -> Result<Table> {
    let mut filled = table.clone();

    for &name in subset {
        if let Column::Numeric(col) = table.column(name)? {
            let missing = col.null_count();
            if missing == 0 {
                continue;
            }
            if let Some(mean) = col.mean() {
                log::debug!("filling {} missing values in '{}' with {}", missing, name, mean);
                filled.replace_column(name, Column::Numeric(col.fill_missing(mean)))?;
            }
        }
    }

    Ok(filled)
}

fn column_stats(table: &Table, name: &str, digits: u32) -> Result<ColumnStats> {
    let values = match table.column(name)? {
        Column::Numeric(col) => col.valid_values(),
        Column::Categorical(_) => {
            return Err(Error::ColumnTypeMismatch {
                name: name.to_string(),
                expected: ColumnType::Numeric,
                found: ColumnType::Categorical,
            })
        }
    };

    let moments = stats::describe(&values);
    let round = |v: Option<f64>| v.map(|x| round_to(x, digits));

    Ok(ColumnStats {
        column: name.to_string(),
        count: moments.count,
        mean: round(moments.mean),
        median: round(moments.median),
        std_dev: round(moments.std_dev),
    })
}
