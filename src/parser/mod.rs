//! Parser layer for reading delimited tabular text

mod delimited;

pub use delimited::TableReader;
