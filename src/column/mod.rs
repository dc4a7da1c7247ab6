mod categorical_column;
mod common;
mod numeric_column;

pub use categorical_column::CategoricalColumn;
pub use common::{utils, Column, ColumnTrait, ColumnType};
pub use numeric_column::NumericColumn;
