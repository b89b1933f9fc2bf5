use indexmap::IndexMap;
use plate::well::WellCoordinate;
use thiserror::Error;

/// One named index, e.g. name: 'S502', sequence: 'ATAGAGAG'.
#[derive(Debug, Clone)]
#[derive(Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct NamedIndex {
    pub name: String,
    pub sequence: String,
}

impl NamedIndex {
    pub fn new(name: String, sequence: String) -> Self {
        Self {
            name,
            sequence,
        }
    }
}

/// The i5 and i7 indexes recorded against one reference key.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ReferenceEntry {
    pub i5: NamedIndex,
    pub i7: NamedIndex,
}

/// Reference entries keyed by well coordinate, in source order.
///
/// Keys are arbitrary row/column combinations inside the 8×12 space; a
/// partial table is valid, absent keys surface as per-well lookup misses
/// at resolution time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    entries: IndexMap<WellCoordinate, ReferenceEntry>,
}

impl ReferenceTable {
    /// Each key must resolve to exactly one entry.
    pub fn insert(&mut self, key: WellCoordinate, entry: ReferenceEntry) -> Result<(), ReferenceTableError> {
        if self.entries.contains_key(&key) {
            return Err(ReferenceTableError::DuplicateKey(key));
        }

        self.entries.insert(key, entry);
        Ok(())
    }

    pub fn entry(&self, key: &WellCoordinate) -> Option<&ReferenceEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReferenceTableError {
    #[error("Duplicate reference entry. key: '{0}'")]
    DuplicateKey(WellCoordinate),
}
