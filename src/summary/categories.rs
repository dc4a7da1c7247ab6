use serde::Serialize;

use crate::column::Column;
use crate::table::Table;

/// Cardinality of one categorical column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCardinality {
    pub column: String,
    /// Distinct non-missing values
    pub n_unique: usize,
    /// The distinct values in first-seen order
    pub categories: Vec<String>,
    /// Rows with no value
    pub missing: usize,
}

/// Cardinality of every categorical column, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub columns: Vec<CategoryCardinality>,
}

impl CategorySummary {
    pub fn get(&self, column: &str) -> Option<&CategoryCardinality> {
        self.columns.iter().find(|c| c.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCardinality> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

pub(crate) fn summarize_categories_impl(table: &Table) -> CategorySummary {
    let columns = table
        .columns()
        .filter_map(|(name, column)| match column {
            Column::Categorical(col) => Some(CategoryCardinality {
                column: name.to_string(),
                n_unique: col.n_unique(),
                categories: col.categories().to_vec(),
                missing: column.null_count(),
            }),
            Column::Numeric(_) => None,
        })
        .collect();

    CategorySummary { columns }
}
