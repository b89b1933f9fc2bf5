pub mod assignment;
pub mod reference;

use plate::well::{ColumnNumber, RowLetter, WellCoordinate};
use thiserror::Error;

use crate::reference::{NamedIndex, ReferenceTable};

/// Resolves each selected well to its i5/i7 index pair.
///
/// A single compact reference table covers the whole plate: the i5 key is
/// the chosen i5 row combined with the well's own column, the i7 key is the
/// well's own row combined with the chosen i7 column, so no 96-way
/// enumeration of combinations is required in the table itself.
pub struct IndexMapper {}

impl IndexMapper {
    /// Resolves `wells` in the order given.
    ///
    /// When any well fails to resolve the whole result set is still
    /// returned, wrapped in [`IndexMapperError::MappingErrors`], so callers
    /// can report the failures and continue with the wells that resolved.
    pub fn process<'table>(
        wells: &[WellCoordinate],
        i5_row: RowLetter,
        i7_column: ColumnNumber,
        reference_table: &'table ReferenceTable,
    ) -> Result<Vec<WellIndexMappingResult<'table>>, IndexMapperError<'table>> {
        let results: Vec<WellIndexMappingResult> = wells
            .iter()
            .map(|well| {
                let mapping_result = Self::resolve(well, i5_row, i7_column, reference_table);

                WellIndexMappingResult {
                    well: *well,
                    mapping_result,
                }
            })
            .collect();

        match results
            .iter()
            .any(|result| result.mapping_result.is_err())
        {
            true => Err(IndexMapperError::MappingErrors(results)),
            false => Ok(results),
        }
    }

    fn resolve<'table>(
        well: &WellCoordinate,
        i5_row: RowLetter,
        i7_column: ColumnNumber,
        reference_table: &'table ReferenceTable,
    ) -> Result<WellIndexMapping<'table>, IndexMappingError> {
        let i5_key = WellCoordinate::new(i5_row, well.column);
        let i7_key = WellCoordinate::new(well.row, i7_column);

        let i5_entry = reference_table
            .entry(&i5_key)
            .ok_or(IndexMappingError::LookupMiss(i5_key))?;
        let i7_entry = reference_table
            .entry(&i7_key)
            .ok_or(IndexMappingError::LookupMiss(i7_key))?;

        Ok(WellIndexMapping {
            i5_key,
            i5: &i5_entry.i5,
            i7_key,
            i7: &i7_entry.i7,
        })
    }
}

/// The outcome of resolving one well.
#[derive(Debug, Clone, PartialEq)]
pub struct WellIndexMappingResult<'table> {
    pub well: WellCoordinate,
    pub mapping_result: Result<WellIndexMapping<'table>, IndexMappingError>,
}

/// The resolved indexes for one well, and the synthesized keys they came
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct WellIndexMapping<'table> {
    pub i5_key: WellCoordinate,
    pub i5: &'table NamedIndex,
    pub i7_key: WellCoordinate,
    pub i7: &'table NamedIndex,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndexMappingError {
    #[error("No reference entry for key. key: '{0}'")]
    LookupMiss(WellCoordinate),
}

#[derive(Debug, Error, PartialEq)]
pub enum IndexMapperError<'table> {
    #[error("Mapping errors")]
    MappingErrors(Vec<WellIndexMappingResult<'table>>),
}

#[cfg(test)]
mod index_mapper_tests {
    use std::str::FromStr;

    use plate::well::{ColumnNumber, RowLetter, WellCoordinate};

    use crate::reference::{NamedIndex, ReferenceEntry, ReferenceTable};
    use crate::{IndexMapper, IndexMapperError, IndexMappingError};

    fn well(value: &str) -> WellCoordinate {
        WellCoordinate::from_str(value).unwrap()
    }

    fn named(name: &str, sequence: &str) -> NamedIndex {
        NamedIndex::new(name.to_string(), sequence.to_string())
    }

    /// i5 entries on row 'H', i7 entries on column 12, enough for an 'A1'
    /// to 'B2' selection with i5 row 'H' and i7 column 12.
    fn reference_table() -> ReferenceTable {
        let mut table = ReferenceTable::default();

        for (key, i5, i7) in [
            ("H1", ("S517", "GCGTAAGA"), ("N708", "CAGAGAGG")),
            ("H2", ("S502", "CTCTCTAT"), ("N709", "GCTACGCT")),
            ("A12", ("S503", "TATCCTCT"), ("N701", "TAAGGCGA")),
            ("B12", ("S504", "AGAGTAGA"), ("N702", "CGTACTAG")),
        ] {
            table
                .insert(well(key), ReferenceEntry {
                    i5: named(i5.0, i5.1),
                    i7: named(i7.0, i7.1),
                })
                .unwrap();
        }

        table
    }

    #[test]
    fn resolve_combines_chosen_row_with_well_column_and_chosen_column_with_well_row() {
        // given
        let table = reference_table();
        let wells = [well("A1"), well("A2"), well("B1"), well("B2")];

        // when
        let results = IndexMapper::process(&wells, RowLetter::H, ColumnNumber::new(12).unwrap(), &table).unwrap();

        // then
        let a1 = results
            .first()
            .unwrap()
            .mapping_result
            .as_ref()
            .unwrap();
        assert_eq!(a1.i5_key, well("H1"));
        assert_eq!(a1.i7_key, well("A12"));
        assert_eq!(a1.i5, &named("S517", "GCGTAAGA"));
        assert_eq!(a1.i7, &named("N701", "TAAGGCGA"));

        // and the well's own column and row select the keys, per well
        let b2 = results
            .last()
            .unwrap()
            .mapping_result
            .as_ref()
            .unwrap();
        assert_eq!(b2.i5_key, well("H2"));
        assert_eq!(b2.i7_key, well("B12"));
    }

    #[test]
    fn resolution_is_deterministic() {
        // given
        let table = reference_table();
        let wells = [well("A1"), well("B2")];
        let i7_column = ColumnNumber::new(12).unwrap();

        // when
        let first = IndexMapper::process(&wells, RowLetter::H, i7_column, &table).unwrap();
        let second = IndexMapper::process(&wells, RowLetter::H, i7_column, &table).unwrap();

        // then
        assert_eq!(first, second);
    }

    #[test]
    fn missing_key_is_reported_per_well_and_other_wells_still_resolve() {
        // given a table without an entry for 'H1'
        let full = reference_table();
        let mut table = ReferenceTable::default();
        for key in ["H2", "A12", "B12"] {
            table
                .insert(well(key), full.entry(&well(key)).unwrap().clone())
                .unwrap();
        }

        let wells = [well("A1"), well("A2")];

        // when
        let result = IndexMapper::process(&wells, RowLetter::H, ColumnNumber::new(12).unwrap(), &table);

        // then
        let Err(IndexMapperError::MappingErrors(results)) = result else {
            panic!("expected mapping errors");
        };

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].mapping_result,
            Err(IndexMappingError::LookupMiss(well("H1")))
        );
        assert!(results[1].mapping_result.is_ok());
    }
}
