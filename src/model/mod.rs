//! Data model for parsed tabular data

mod column;
mod table;

pub use column::Column;
pub use table::{FieldValue, Record, Table};
