use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::{Channel, Column, ColumnCatalog};
use crate::error::{AutoVegaError, AutoVegaResult};

/// Channel to column mapping that parameterizes a chart.
///
/// Bindings are always kept in declared channel order, so two encodings built
/// from the same bindings compare and serialize identically no matter which
/// order the bindings were collected in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoding {
    bindings: IndexMap<Channel, Column>,
}

impl Encoding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> Option<&Column> {
        self.bindings.get(&channel)
    }

    #[must_use]
    pub fn contains(&self, channel: Channel) -> bool {
        self.bindings.contains_key(&channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Column)> {
        self.bindings.iter().map(|(channel, column)| (*channel, column))
    }

    pub fn channels(&self) -> impl Iterator<Item = Channel> {
        self.bindings.keys().copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.bindings.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Column names keyed by channel, as stored in snapshots.
    #[must_use]
    pub fn to_name_map(&self) -> IndexMap<Channel, String> {
        self.iter()
            .map(|(channel, column)| (channel, column.name().to_owned()))
            .collect()
    }
}

impl FromIterator<(Channel, Column)> for Encoding {
    fn from_iter<T: IntoIterator<Item = (Channel, Column)>>(iter: T) -> Self {
        let mut bindings: IndexMap<Channel, Column> = iter.into_iter().collect();
        bindings.sort_keys();
        Self { bindings }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (channel, column)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{channel}: {column}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for Encoding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bindings.len()))?;
        for (channel, column) in &self.bindings {
            map.serialize_entry(channel, column.name())?;
        }
        map.end()
    }
}

/// Guesses the encoding a freshly mounted widget starts with.
///
/// - no columns: `InsufficientColumns`
/// - one column: `{x: first}`
/// - two or more: `{x: first, y: second}`
///
/// `color` is never bound by the guess.
pub fn guess_initial_encoding(catalog: &ColumnCatalog) -> AutoVegaResult<Encoding> {
    match catalog.columns() {
        [] => Err(AutoVegaError::InsufficientColumns { found: 0 }),
        [x] => Ok([(Channel::X, x.clone())].into_iter().collect()),
        [x, y, ..] => Ok([(Channel::X, x.clone()), (Channel::Y, y.clone())]
            .into_iter()
            .collect()),
    }
}
