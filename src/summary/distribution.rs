use std::collections::HashMap;

use serde::Serialize;

use crate::column::Column;
use crate::error::Result;
use crate::stats::round_to;
use crate::table::Table;

/// One distinct value of the summarized column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionEntry {
    pub value: String,
    pub count: usize,
    /// Share of all table rows, in percent
    pub percentage: f64,
}

/// Count and percentage of each distinct value, most frequent first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub column: String,
    /// Denominator of every percentage: the table's row count
    pub total_rows: usize,
    pub entries: Vec<DistributionEntry>,
}

impl DistributionSummary {
    pub fn get(&self, value: &str) -> Option<&DistributionEntry> {
        self.entries.iter().find(|e| e.value == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DistributionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows that carried a value; missing rows are not a category
    pub fn counted_rows(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Table with columns `<column>`, `Count` and `Percentage`
    pub fn to_table(&self) -> Result<Table> {
        let values: Vec<&str> = self.entries.iter().map(|e| e.value.as_str()).collect();
        let counts: Vec<usize> = self.entries.iter().map(|e| e.count).collect();
        let percentages: Vec<f64> = self.entries.iter().map(|e| e.percentage).collect();

        Table::new()
            .with_column(self.column.clone(), Column::categorical(values))?
            .with_column("Count", Column::numeric(counts))?
            .with_column("Percentage", Column::numeric(percentages))
    }
}

pub(crate) fn summarize_distribution_impl(
    table: &Table,
    column: &str,
    digits: u32,
) -> Result<DistributionSummary> {
    let counts: Vec<(String, usize)> = match table.column(column)? {
        Column::Categorical(col) => col
            .value_counts()
            .into_iter()
            .map(|(value, count)| (value.to_string(), count))
            .collect(),
        Column::Numeric(col) => {
            let mut order: Vec<(f64, usize)> = Vec::new();
            let mut positions: HashMap<u64, usize> = HashMap::new();

            for value in col.iter().flatten() {
                // fold -0.0 into 0.0 so both count as one value
                let value = if value == 0.0 { 0.0 } else { value };
                let pos = *positions.entry(value.to_bits()).or_insert_with(|| {
                    order.push((value, 0));
                    order.len() - 1
                });
                order[pos].1 += 1;
            }

            order
                .into_iter()
                .map(|(value, count)| (value.to_string(), count))
                .collect()
        }
    };

    let total_rows = table.row_count();
    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(value, count)| DistributionEntry {
            value,
            count,
            percentage: round_to(count as f64 / total_rows as f64 * 100.0, digits),
        })
        .collect();

    // stable: equal counts keep first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(DistributionSummary {
        column: column.to_string(),
        total_rows,
        entries,
    })
}
