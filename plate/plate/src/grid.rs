//! The fixed 8×12 well grid.

use itertools::Itertools;
use strum::{EnumCount, IntoEnumIterator};

use crate::well::{ColumnNumber, RowLetter, WellCoordinate};

pub const ROW_COUNT: usize = RowLetter::COUNT;
pub const COLUMN_COUNT: usize = ColumnNumber::MAX as usize;
pub const WELL_COUNT: usize = ROW_COUNT * COLUMN_COUNT;

/// All 96 wells in row-major order, 'A1' first, 'A2' second.
pub fn wells_row_major() -> impl Iterator<Item = WellCoordinate> {
    RowLetter::iter()
        .cartesian_product(ColumnNumber::iter())
        .map(|(row, column)| WellCoordinate::new(row, column))
}

/// All 96 wells in column-major order, 'A1' first, 'B1' second.
pub fn wells_column_major() -> impl Iterator<Item = WellCoordinate> {
    ColumnNumber::iter()
        .cartesian_product(RowLetter::iter())
        .map(|(column, row)| WellCoordinate::new(row, column))
}

#[cfg(test)]
mod grid_tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use crate::well::WellCoordinate;

    use super::{wells_column_major, wells_row_major, WELL_COUNT};

    #[test]
    fn row_major_enumeration_covers_the_plate() {
        // when
        let wells: Vec<WellCoordinate> = wells_row_major().collect();

        // then
        assert_eq!(wells.len(), WELL_COUNT);
        assert_eq!(wells.first(), Some(&WellCoordinate::from_str("A1").unwrap()));
        assert_eq!(wells.get(1), Some(&WellCoordinate::from_str("A2").unwrap()));
        assert_eq!(wells.last(), Some(&WellCoordinate::from_str("H12").unwrap()));
    }

    #[test]
    fn column_major_enumeration_covers_the_plate() {
        // when
        let wells: Vec<WellCoordinate> = wells_column_major().collect();

        // then
        assert_eq!(wells.len(), WELL_COUNT);
        assert_eq!(wells.first(), Some(&WellCoordinate::from_str("A1").unwrap()));
        assert_eq!(wells.get(1), Some(&WellCoordinate::from_str("B1").unwrap()));
        assert_eq!(wells.last(), Some(&WellCoordinate::from_str("H12").unwrap()));
    }

    #[test]
    fn both_enumerations_yield_the_same_wells() {
        // when
        let row_major: BTreeSet<WellCoordinate> = wells_row_major().collect();
        let column_major: BTreeSet<WellCoordinate> = wells_column_major().collect();

        // then
        assert_eq!(row_major, column_major);
    }
}
