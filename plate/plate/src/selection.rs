use std::collections::BTreeSet;

use crate::grid;
use crate::well::WellCoordinate;

/// The set of wells included in the current selection.
///
/// Always the rectangle from the plate origin ('A1') to an end cell,
/// inclusive on both bounds, minus any removed wells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    wells: BTreeSet<WellCoordinate>,
}

impl SelectionSet {
    /// The rectangle from 'A1' to `end`, inclusive.
    pub fn from_end_cell(end: &WellCoordinate) -> Self {
        let wells = grid::wells_row_major()
            .filter(|well| well.row <= end.row && well.column <= end.column)
            .collect();

        Self {
            wells,
        }
    }

    /// Removes `removals` from the selection.
    ///
    /// Removing a well that is not selected, or was already removed, is a
    /// no-op.
    pub fn remove_wells(&mut self, removals: &BTreeSet<WellCoordinate>) {
        for removal in removals {
            self.wells.remove(removal);
        }
    }

    pub fn contains(&self, well: &WellCoordinate) -> bool {
        self.wells.contains(well)
    }

    pub fn len(&self) -> usize {
        self.wells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// Selected wells, row 'A' before 'B', column 1 before 2 within a row.
    pub fn iter_row_major(&self) -> impl Iterator<Item = &WellCoordinate> {
        self.wells.iter()
    }

    /// Selected wells, column 1 before 2, row 'A' before 'B' within a column.
    pub fn iter_column_major(&self) -> impl Iterator<Item = &WellCoordinate> {
        let mut wells: Vec<&WellCoordinate> = self.wells.iter().collect();
        wells.sort_by(|a, b| a.cmp_column_major(b));

        wells.into_iter()
    }
}

#[cfg(test)]
mod selection_tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use rstest::rstest;

    use crate::well::WellCoordinate;

    use super::SelectionSet;

    fn well(value: &str) -> WellCoordinate {
        WellCoordinate::from_str(value).unwrap()
    }

    #[rstest]
    #[case("A1", 1)]
    #[case("A12", 12)]
    #[case("H1", 8)]
    #[case("B2", 4)]
    #[case("C7", 21)]
    #[case("H12", 96)]
    fn rectangle_covers_rows_times_columns(#[case] end: &str, #[case] expected_count: usize) {
        // given
        let end = well(end);

        // when
        let selection = SelectionSet::from_end_cell(&end);

        // then
        assert_eq!(selection.len(), expected_count);

        // and every selected well is inside the rectangle
        assert!(selection
            .iter_row_major()
            .all(|candidate| candidate.row <= end.row && candidate.column <= end.column));
    }

    #[test]
    fn rectangle_from_b2() {
        // when
        let selection = SelectionSet::from_end_cell(&well("B2"));

        // then
        let selected: Vec<String> = selection
            .iter_row_major()
            .map(ToString::to_string)
            .collect();
        assert_eq!(selected, vec!["A1", "A2", "B1", "B2"]);
    }

    #[test]
    fn removal_is_idempotent() {
        // given
        let removals = BTreeSet::from([well("A1")]);

        // and
        let mut removed_once = SelectionSet::from_end_cell(&well("B2"));
        removed_once.remove_wells(&removals);

        // when
        let mut removed_twice = removed_once.clone();
        removed_twice.remove_wells(&removals);

        // then
        assert_eq!(removed_once, removed_twice);
    }

    #[test]
    fn removed_wells_are_excluded() {
        // given
        let mut selection = SelectionSet::from_end_cell(&well("B2"));

        // when
        selection.remove_wells(&BTreeSet::from([well("A1")]));

        // then
        let selected: Vec<String> = selection
            .iter_row_major()
            .map(ToString::to_string)
            .collect();
        assert_eq!(selected, vec!["A2", "B1", "B2"]);

        // and removing a well outside the selection is a no-op
        selection.remove_wells(&BTreeSet::from([well("H12")]));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn orderings_contain_the_same_wells() {
        // given
        let mut selection = SelectionSet::from_end_cell(&well("C3"));
        selection.remove_wells(&BTreeSet::from([well("B2")]));

        // when
        let row_major: BTreeSet<&WellCoordinate> = selection.iter_row_major().collect();
        let column_major: BTreeSet<&WellCoordinate> = selection.iter_column_major().collect();

        // then
        assert_eq!(row_major, column_major);

        // and the orders differ
        let row_major_order: Vec<String> = selection
            .iter_row_major()
            .map(ToString::to_string)
            .collect();
        let column_major_order: Vec<String> = selection
            .iter_column_major()
            .map(ToString::to_string)
            .collect();
        assert_eq!(row_major_order, vec!["A1", "A2", "A3", "B1", "B3", "C1", "C2", "C3"]);
        assert_eq!(column_major_order, vec!["A1", "B1", "C1", "A2", "C2", "A3", "B3", "C3"]);
    }
}
