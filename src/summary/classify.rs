use serde::Serialize;

use crate::column::ColumnType;
use crate::table::Table;

/// Column names split by schema tag, each list in table order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnClassification {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

impl ColumnClassification {
    /// Total number of classified columns
    pub fn len(&self) -> usize {
        self.numeric.len() + self.categorical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tag assigned to `name`, if it was classified
    pub fn kind_of(&self, name: &str) -> Option<ColumnType> {
        if self.numeric.iter().any(|n| n == name) {
            Some(ColumnType::Numeric)
        } else if self.categorical.iter().any(|n| n == name) {
            Some(ColumnType::Categorical)
        } else {
            None
        }
    }
}

pub(crate) fn classify_columns_impl(table: &Table) -> ColumnClassification {
    let mut classification = ColumnClassification::default();

    for (name, column) in table.columns() {
        match column.column_type() {
            ColumnType::Numeric => classification.numeric.push(name.to_string()),
            ColumnType::Categorical => classification.categorical.push(name.to_string()),
        }
    }

    classification
}
