use anyhow::{anyhow, Context, Error};
use index_mapper::reference::ReferenceTable;
use tracing::Level;
use tracing::{info, trace};
use util::source::Source;

use crate::csv::IndexRecord;

pub type ReferenceSource = Source;

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_reference_table(source: &ReferenceSource) -> Result<ReferenceTable, Error> {
    info!("Loading reference index table. source: {}", source);

    let path = source
        .path()
        .map_err(|error| anyhow!("Unsupported source type. cause: {:?}", error))?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Error reading reference index table. file: {}", path.display()))?;

    let mut reference_table = ReferenceTable::default();

    for result in csv_reader.deserialize() {
        let record: IndexRecord = result.with_context(|| "Deserializing index record".to_string())?;

        trace!("{:?}", record);

        let (key, entry) = record
            .build_entry()
            .with_context(|| format!("Building reference entry from record. record: {:?}", record))?;

        reference_table
            .insert(key, entry)
            .with_context(|| format!("Adding reference entry. key: '{}'", key))?;
    }

    Ok(reference_table)
}
