//! In-memory table with an explicit column schema.
//!
//! Columns are stored in insertion order next to a name → position map, so
//! lookups and schema queries are O(1). Summaries only ever read a table.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::column::{Column, ColumnType};
use crate::error::{Error, Result};

/// Ordered collection of named, typed columns sharing one row count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    // column data
    pub(crate) columns: Vec<Column>,
    // name -> position in `columns`
    pub(crate) column_indices: HashMap<String, usize>,
    // insertion order
    pub(crate) column_names: Vec<String>,
    pub(crate) row_count: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column
    ///
    /// # Errors
    /// `DuplicateColumnName` if the name is taken, `InconsistentRowCount`
    /// if the column length differs from the table's row count.
    pub fn add_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column_indices.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        let column_len = column.len();
        if !self.columns.is_empty() && column_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column_len,
            });
        }

        self.column_indices.insert(name.clone(), self.columns.len());
        self.columns.push(column);
        self.column_names.push(name);
        self.row_count = column_len;

        Ok(())
    }

    /// Builder-style variant of [`Table::add_column`]
    pub fn with_column<C: Into<Column>>(mut self, name: impl Into<String>, column: C) -> Result<Self> {
        self.add_column(name, column)?;
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.column_indices
            .get(name)
            .map(|&idx| &self.columns[idx])
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_indices.contains_key(name)
    }

    /// Schema tag of a column
    pub fn column_type(&self, name: &str) -> Result<ColumnType> {
        self.column(name).map(Column::column_type)
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// `(name, column)` pairs in insertion order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> + '_ {
        self.column_names
            .iter()
            .map(|n| n.as_str())
            .zip(self.columns.iter())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Copy of the table without the rows that are missing a value in any
    /// of `subset`
    pub fn drop_missing(&self, subset: &[&str]) -> Result<Table> {
        let selected = subset
            .iter()
            .map(|name| self.column(name))
            .collect::<Result<Vec<_>>>()?;

        let keep: Vec<bool> = (0..self.row_count)
            .map(|row| selected.iter().all(|col| !col.is_null(row)))
            .collect();

        Ok(self.take_rows(&keep))
    }

    /// Copy of the table keeping the rows flagged `true` in `keep`
    pub(crate) fn take_rows(&self, keep: &[bool]) -> Table {
        let columns: Vec<Column> = self.columns.iter().map(|c| c.take_rows(keep)).collect();
        let row_count = keep.iter().take(self.row_count).filter(|&&k| k).count();

        Table {
            columns,
            column_indices: self.column_indices.clone(),
            column_names: self.column_names.clone(),
            row_count,
        }
    }

    /// Swaps a column in place; schema tag and row count must match
    pub(crate) fn replace_column(&mut self, name: &str, column: Column) -> Result<()> {
        let idx = *self
            .column_indices
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;

        let current = &self.columns[idx];
        if current.column_type() != column.column_type() {
            return Err(Error::ColumnTypeMismatch {
                name: name.to_string(),
                expected: current.column_type(),
                found: column.column_type(),
            });
        }
        if column.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column.len(),
            });
        }

        self.columns[idx] = column;
        Ok(())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        if self.columns.is_empty() {
            return write!(f, "Table (0 rows x 0 columns)");
        }

        writeln!(f, "Table ({} rows x {} columns):", self.row_count, self.columns.len())?;

        for name in &self.column_names {
            write!(f, " {:<15} |", name)?;
        }
        writeln!(f)?;
        for _ in &self.column_names {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        for row in 0..self.row_count.min(MAX_ROWS) {
            for column in &self.columns {
                let cell = match column {
                    Column::Numeric(col) => match col.get(row) {
                        Ok(Some(v)) => v.to_string(),
                        _ => "NA".to_string(),
                    },
                    Column::Categorical(col) => match col.get(row) {
                        Ok(Some(v)) => v.to_string(),
                        _ => "NA".to_string(),
                    },
                };
                write!(f, " {:<15} |", cell)?;
            }
            writeln!(f)?;
        }

        if self.row_count > MAX_ROWS {
            writeln!(f, "... ({} more rows)", self.row_count - MAX_ROWS)?;
        }

        Ok(())
    }
}
