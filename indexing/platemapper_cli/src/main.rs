use std::sync::Arc;

use anyhow::bail;
use clap::Parser;
use crossbeam_channel::unbounded;
use platemapper_app::{Effect, Event};
use tracing::trace;

use crate::core::Core;
use crate::opts::{build_events, EventError, Opts};

mod core;
mod opts;

fn main() -> anyhow::Result<()> {
    let args = argfile::expand_args(argfile::parse_fromfile, argfile::PREFIX).unwrap();

    let opts = Opts::parse_from(args);

    cli::tracing::configure_tracing(opts.trace.clone(), opts.verbose.clone())?;

    let events = match build_events(opts) {
        Ok(events) => events,
        // clap configuration prevents this
        Err(EventError::MissingCommand) => unreachable!(),
    };

    let core = core::new();

    for event in events {
        run_loop(&core, event)?;
    }

    Ok(())
}

fn run_loop(core: &Core, event: Event) -> Result<(), anyhow::Error> {
    let (tx, rx) = unbounded::<Effect>();

    core::update(core, event, &Arc::new(tx))?;

    while let Ok(effect) = rx.recv() {
        trace!("run_loop. effect: {:?}", effect);
        match effect {
            _render @ Effect::Render(_) => {
                let view = core.view();

                if let Some(error) = view.error {
                    bail!(error)
                }
            }
        }
    }
    Ok(())
}
