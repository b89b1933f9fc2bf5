use plate::well::WellCoordinate;

use crate::reference::NamedIndex;
use crate::WellIndexMappingResult;

/// One row of the exported assignment tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub well: WellCoordinate,
    pub sample_id: String,
    pub i5: NamedIndex,
    pub i7: NamedIndex,
}

/// The prefix is prepended to the canonical coordinate verbatim, no
/// separator; an empty prefix yields the bare coordinate.
pub fn sample_id(prefix: &str, well: &WellCoordinate) -> String {
    format!("{}{}", prefix, well)
}

/// Assignment rows for the wells that resolved, in the order given.
///
/// Unresolved wells are excluded here; reporting them is the caller's
/// responsibility.
pub fn build_assignment_rows(results: &[WellIndexMappingResult], sample_id_prefix: &str) -> Vec<AssignmentRow> {
    results
        .iter()
        .filter_map(|result| {
            result
                .mapping_result
                .as_ref()
                .ok()
                .map(|mapping| AssignmentRow {
                    well: result.well,
                    sample_id: sample_id(sample_id_prefix, &result.well),
                    i5: mapping.i5.clone(),
                    i7: mapping.i7.clone(),
                })
        })
        .collect()
}

/// Row-major view, row 'A' before 'B', column 1 before 2 within a row.
pub fn rows_row_major(rows: &[AssignmentRow]) -> Vec<&AssignmentRow> {
    let mut view: Vec<&AssignmentRow> = rows.iter().collect();
    view.sort_by(|a, b| a.well.cmp(&b.well));

    view
}

/// Column-major view, column 1 before 2, row 'A' before 'B' within a
/// column.
pub fn rows_column_major(rows: &[AssignmentRow]) -> Vec<&AssignmentRow> {
    let mut view: Vec<&AssignmentRow> = rows.iter().collect();
    view.sort_by(|a, b| a.well.cmp_column_major(&b.well));

    view
}
