use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::RowLetterArg;
use cli::parsers::{ColumnNumberParser, WellCoordinateParser};
use platemapper_app::{ColumnNumber, Event, ReferenceSource, WellCoordinate};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "platemapper_cli")]
#[command(bin_name = "platemapper_cli")]
#[command(version, about, long_about = None)]
pub struct Opts {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub trace: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
#[command(arg_required_else_help(true))]
pub enum Command {
    /// Export assignment tables for a plate selection
    Export {
        /// Reference index table source
        #[arg(long, value_name = "SOURCE")]
        reference: ReferenceSource,

        /// End cell of the selection, e.g. 'B2'
        #[arg(long, value_name = "WELL", value_parser = WellCoordinateParser::default())]
        end_cell: WellCoordinate,

        /// List of wells to exclude from the selection
        #[arg(long, num_args = 0.., value_delimiter = ',', value_name = "WELL", value_parser = WellCoordinateParser::default())]
        remove: Vec<WellCoordinate>,

        /// i5 index row
        #[arg(long, value_name = "ROW")]
        i5_row: RowLetterArg,

        /// i7 index column
        #[arg(long, value_name = "COLUMN", value_parser = ColumnNumberParser::default())]
        i7_column: ColumnNumber,

        /// Sample ID prefix
        #[arg(long, default_value = "", value_name = "PREFIX")]
        prefix: String,

        /// Output directory for the generated tables
        #[arg(long, value_name = "DIRECTORY")]
        output: PathBuf,

        /// Output file name stem
        #[arg(long, default_value = "indexes", value_name = "NAME")]
        name: String,
    },
}

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Missing command")]
    MissingCommand,
}

/// The CLI is stateless, so one invocation replays the session as a
/// sequence of events: select the end cell, apply removals, then operate.
pub fn build_events(opts: Opts) -> Result<Vec<Event>, EventError> {
    match opts.command {
        Some(Command::Export {
            reference,
            end_cell,
            remove,
            i5_row,
            i7_column,
            prefix,
            output,
            name,
        }) => {
            let mut events = vec![Event::SelectEndCell {
                coordinate: end_cell,
            }];

            events.extend(remove.into_iter().map(|coordinate| Event::RemoveWell {
                coordinate,
            }));

            events.push(Event::Export {
                reference,
                i5_row: i5_row.to_row_letter(),
                i7_column,
                sample_id_prefix: prefix,
                output_directory: output,
                output_stem: name,
            });

            Ok(events)
        }
        None => Err(EventError::MissingCommand),
    }
}
