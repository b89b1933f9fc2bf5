use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Error;
use chrono::Utc;
use crux_core::macros::Effect;
use crux_core::render::Render;
use crux_core::App;
use termtree::Tree;
use thiserror::Error;
use tracing::Level;
use tracing::{error, info, trace};

pub use crux_core::Core;
pub use plate::well::{ColumnNumber, RowLetter, WellCoordinate};
pub use stores::reference::ReferenceSource;

use index_mapper::assignment;
use index_mapper::{IndexMapper, IndexMapperError, IndexMappingError, WellIndexMapping, WellIndexMappingResult};
use plate::selection::SelectionSet;
use stores::{assignments, reference};

#[derive(Default)]
pub struct PlateMapper;

/// Session state. The removal set only ever grows; the way back is
/// [`Event::Reset`].
#[derive(Default)]
pub struct Model {
    end_cell: Option<WellCoordinate>,
    removals: BTreeSet<WellCoordinate>,
    error: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Debug)]
pub struct SessionViewModel {
    /// Canonical labels of the post-removal selection, row-major.
    pub selected_wells: Vec<String>,
    pub error: Option<String>,
}

#[derive(Effect)]
pub struct Capabilities {
    render: Render<Event>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub enum Event {
    None,

    /// Selects the rectangle from the plate origin to `coordinate`,
    /// inclusive. Replaces any previous end cell.
    SelectEndCell {
        coordinate: WellCoordinate,
    },

    /// Excludes a well for the rest of the session. Excluding a well twice
    /// is a no-op.
    RemoveWell {
        coordinate: WellCoordinate,
    },

    /// Clears the end cell and the removal set.
    Reset,

    /// Resolves the current selection against the reference index table and
    /// stores both assignment table views.
    Export {
        reference: ReferenceSource,
        i5_row: RowLetter,
        i7_column: ColumnNumber,
        sample_id_prefix: String,
        output_directory: PathBuf,
        output_stem: String,
    },
}

impl App for PlateMapper {
    type Event = Event;
    type Model = Model;
    type ViewModel = SessionViewModel;
    type Capabilities = Capabilities;
    type Effect = Effect;

    fn update(
        &self,
        event: Self::Event,
        model: &mut Self::Model,
        caps: &Self::Capabilities,
    ) -> crux_core::Command<Self::Effect, Self::Event> {
        trace!("event: {:?}", event);

        match event {
            Event::None => {}
            Event::SelectEndCell {
                coordinate,
            } => {
                info!("Selected end cell. coordinate: {}", coordinate);
                model.end_cell.replace(coordinate);
            }
            Event::RemoveWell {
                coordinate,
            } => {
                info!("Removed well. coordinate: {}", coordinate);
                model.removals.insert(coordinate);
            }
            Event::Reset => {
                info!("Session reset");
                *model = Model::default();
            }
            Event::Export {
                reference,
                i5_row,
                i7_column,
                sample_id_prefix,
                output_directory,
                output_stem,
            } => {
                let try_fn = |model: &mut Model| -> Result<(), AppError> {
                    let selection = current_selection(model);

                    let result = export_assignments(
                        &selection,
                        &reference,
                        i5_row,
                        i7_column,
                        &sample_id_prefix,
                        &output_directory,
                        &output_stem,
                    )
                    .map_err(|cause| AppError::OperationError(cause))?;

                    Ok(result)
                };

                if let Err(e) = try_fn(model) {
                    model.error.replace(format!("{:?}", e));
                };
            }
        }

        // This causes the shell to request the view, via `view()`
        caps.render.render();

        crux_core::Command::done()
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        SessionViewModel {
            selected_wells: current_selection(model)
                .iter_row_major()
                .map(ToString::to_string)
                .collect(),
            error: model.error.clone(),
        }
    }
}

#[derive(Error, Debug)]
enum AppError {
    #[error("Operation error, cause: {0}")]
    OperationError(anyhow::Error),
}

fn current_selection(model: &Model) -> SelectionSet {
    match &model.end_cell {
        Some(end_cell) => {
            let mut selection = SelectionSet::from_end_cell(end_cell);
            selection.remove_wells(&model.removals);

            selection
        }
        None => SelectionSet::default(),
    }
}

#[tracing::instrument(level = Level::DEBUG)]
fn export_assignments(
    selection: &SelectionSet,
    reference_source: &ReferenceSource,
    i5_row: RowLetter,
    i7_column: ColumnNumber,
    sample_id_prefix: &str,
    output_directory: &Path,
    output_stem: &str,
) -> Result<(), Error> {
    if selection.is_empty() {
        info!("Nothing selected, no assignment tables stored");
        return Ok(());
    }

    let reference_table = reference::load_reference_table(reference_source)?;
    info!("Loaded {} reference entries", reference_table.len());

    let wells: Vec<WellCoordinate> = selection.iter_row_major().copied().collect();
    info!("Selected {} wells", wells.len());

    let processing_result = IndexMapper::process(&wells, i5_row, i7_column, &reference_table);

    let mapping_results = match &processing_result {
        Ok(results) => results,
        Err(IndexMapperError::MappingErrors(results)) => results,
    };

    let tree = build_mapping_tree(mapping_results);
    info!("{}", tree);

    match &processing_result {
        Ok(_) => (),
        Err(IndexMapperError::MappingErrors(_)) => {
            error!("Mapping failures")
        }
    }

    let rows = assignment::build_assignment_rows(mapping_results, sample_id_prefix);

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");

    let horizontal_path = output_directory.join(format!("{}_horizontal_{}.csv", output_stem, timestamp));
    assignments::store_assignments(&horizontal_path, &assignment::rows_row_major(&rows))?;

    let vertical_path = output_directory.join(format!("{}_vertical_{}.csv", output_stem, timestamp));
    assignments::store_assignments(&vertical_path, &assignment::rows_column_major(&rows))?;

    Ok(())
}

fn build_mapping_tree(mapping_results: &[WellIndexMappingResult]) -> Tree<String> {
    let mut tree = Tree::new("Index Assignment".to_string());

    for WellIndexMappingResult {
        well,
        mapping_result,
    } in mapping_results.iter()
    {
        let mut well_node = Tree::new(well.to_string());

        match mapping_result {
            Ok(WellIndexMapping {
                i5_key,
                i5,
                i7_key,
                i7,
            }) => {
                let i5_chunk = format!("i5: '{}' ({})", i5.name, i5_key);
                let i7_chunk = format!("i7: '{}' ({})", i7.name, i7_key);

                well_node.leaves.push(Tree::new(i5_chunk));
                well_node.leaves.push(Tree::new(i7_chunk));
            }
            Err(IndexMappingError::LookupMiss(key)) => {
                let reason = format!("no reference entry for '{}'", key);
                let error_node = Tree::new(format!("ERROR: Unresolved index - {}.", reason));

                well_node.leaves.push(error_node);
            }
        }

        tree.leaves.push(well_node);
    }

    tree
}
