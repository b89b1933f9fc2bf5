use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_log::AsTrace;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Console output at the requested verbosity, plus an optional TRACE-level
/// log file.
pub fn configure_tracing(trace: Option<PathBuf>, verbose: Verbosity<InfoLevel>) -> anyhow::Result<()> {
    let trace_layer = match trace {
        Some(path) => {
            let file = File::create(path)?;

            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .with_filter(LevelFilter::TRACE);

            Some(layer)
        }
        None => None,
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_filter(verbose.log_level_filter().as_trace());

    tracing_subscriber::registry()
        .with(trace_layer)
        .with(console_layer)
        .init();

    tracing::trace!("Tracing configured. verbosity: {:?}", verbose);

    Ok(())
}
