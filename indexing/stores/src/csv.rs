use std::str::FromStr;

use anyhow::{anyhow, Error};
use index_mapper::reference::{NamedIndex, ReferenceEntry};
use plate::well::WellCoordinate;

/// One row of the reference index table.
///
/// Column names match the index lists shipped with library-prep kits, e.g.:
///
/// `index,i5-name,i5-index,i7-name,i7-index`
/// `H1,S517,GCGTAAGA,N708,CAGAGAGG`
#[derive(Debug, serde::Deserialize)]
pub struct IndexRecord {
    pub index: String,

    #[serde(rename = "i5-name")]
    pub i5_name: String,
    #[serde(rename = "i5-index")]
    pub i5_index: String,

    #[serde(rename = "i7-name")]
    pub i7_name: String,
    #[serde(rename = "i7-index")]
    pub i7_index: String,
}

impl IndexRecord {
    /// Keys are validated here so a malformed reference file fails at load
    /// time, not at lookup time.
    pub fn build_entry(&self) -> Result<(WellCoordinate, ReferenceEntry), Error> {
        let key = WellCoordinate::from_str(self.index.as_str())
            .map_err(|error| anyhow!("Invalid reference key. key: '{}', cause: {}", self.index, error))?;

        let entry = ReferenceEntry {
            i5: NamedIndex::new(self.i5_name.clone(), self.i5_index.clone()),
            i7: NamedIndex::new(self.i7_name.clone(), self.i7_index.clone()),
        };

        Ok((key, entry))
    }
}
