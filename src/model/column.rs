//! Column metadata

/// A column declared by the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (trimmed header cell)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }

    /// Case-insensitive name match
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}
