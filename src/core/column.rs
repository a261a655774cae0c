use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{AutoVegaError, AutoVegaResult};

/// One dataset column: its identifier plus ordinal position in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    name: String,
    ordinal: usize,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ordinal,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered snapshot of the dataset's column names.
///
/// Taken once when a widget mounts and never mutated afterwards; later schema
/// changes in the underlying dataset are not observed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ColumnCatalog {
    columns: Vec<Column>,
}

impl ColumnCatalog {
    /// Builds a catalog in the given order. Column names must be unique.
    pub fn new<I, S>(names: I) -> AutoVegaResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = IndexSet::new();
        let mut columns = Vec::new();
        for (ordinal, name) in names.into_iter().enumerate() {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(AutoVegaError::InvalidConfig(format!(
                    "duplicate column name `{name}` in dataset"
                )));
            }
            columns.push(Column::new(name, ordinal));
        }
        Ok(Self { columns })
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Deterministic fallback used when a channel is enabled without a selection.
    #[must_use]
    pub fn first(&self) -> Option<&Column> {
        self.columns.first()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn contains(&self, column: &Column) -> bool {
        self.columns.get(column.ordinal) == Some(column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }
}
