use std::path::Path;

use anyhow::{Context, Error};
use csv::QuoteStyle;
use index_mapper::assignment::AssignmentRow;
use tracing::info;

/// One row of the exported assignment tables.
///
/// `Sample_name` is emitted blank for the user to fill in externally.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct AssignmentRecord {
    #[serde(rename = "Sample_ID")]
    pub sample_id: String,
    #[serde(rename = "Sample_name")]
    pub sample_name: String,

    #[serde(rename = "i5-name")]
    pub i5_name: String,
    #[serde(rename = "i5-index")]
    pub i5_index: String,

    #[serde(rename = "i7-name")]
    pub i7_name: String,
    #[serde(rename = "i7-index")]
    pub i7_index: String,
}

impl From<&AssignmentRow> for AssignmentRecord {
    fn from(row: &AssignmentRow) -> Self {
        Self {
            sample_id: row.sample_id.clone(),
            sample_name: "".to_string(),
            i5_name: row.i5.name.clone(),
            i5_index: row.i5.sequence.clone(),
            i7_name: row.i7.name.clone(),
            i7_index: row.i7.sequence.clone(),
        }
    }
}

pub fn store_assignments(path: &Path, rows: &[&AssignmentRow]) -> Result<(), Error> {
    info!("Storing assignments. file: {}", path.display());

    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .with_context(|| format!("Error writing assignments. file: {}", path.display()))?;

    for row in rows {
        writer.serialize(AssignmentRecord::from(*row))?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod csv_storing_tests {
    use std::fs::read_to_string;
    use std::str::FromStr;

    use assert_fs::TempDir;
    use index_mapper::assignment::AssignmentRow;
    use index_mapper::reference::NamedIndex;
    use plate::well::WellCoordinate;

    use super::store_assignments;

    #[test]
    pub fn store_rows_with_quoted_fields_and_headers() -> anyhow::Result<()> {
        // given
        let temp_dir = TempDir::new()?;
        let mut output_path = temp_dir.path().to_path_buf();
        output_path.push("assignments.csv");

        let row = AssignmentRow {
            well: WellCoordinate::from_str("A1")?,
            sample_id: "SA1".to_string(),
            i5: NamedIndex::new("S517".to_string(), "GCGTAAGA".to_string()),
            i7: NamedIndex::new("N701".to_string(), "TAAGGCGA".to_string()),
        };

        // when
        store_assignments(&output_path, &[&row])?;

        // then
        let content = read_to_string(&output_path)?;
        assert_eq!(
            content,
            "\"Sample_ID\",\"Sample_name\",\"i5-name\",\"i5-index\",\"i7-name\",\"i7-index\"\n\
             \"SA1\",\"\",\"S517\",\"GCGTAAGA\",\"N701\",\"TAAGGCGA\"\n"
        );

        Ok(())
    }
}
