//! store-matrix CLI - resolve a store group into a CI deployment matrix
//!
//! Usage: store-matrix [OPTIONS] [GROUP]
//!
//! Reads `config/stores.yml` and `config/groups.yml`, keeps the members of
//! GROUP whose store type is `target`, and appends `stores=` / `total_stores=`
//! to `$GITHUB_OUTPUT` (or prints them when it is unset).

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use store_matrix::presentation::Cli;
use store_matrix::{config, sink_for, PrepareUseCase, YamlConfigSource};

mod ui;

use ui::context::UiContext;
use ui::views::prepare::ConsoleEventSink;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ctx = UiContext::new(cli.verbose, cli.color);
    init_tracing(cli.verbose, ctx.color);

    match run(&cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, &ctx);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, ctx: UiContext) -> Result<()> {
    let settings = config::load(cli.overrides());
    tracing::debug!(?settings, "resolved settings");

    let use_case = PrepareUseCase::new(YamlConfigSource::from_settings(&settings))
        .with_events(Arc::new(ConsoleEventSink::new(ctx)));
    let mut sink = sink_for(&settings);

    use_case.execute(&settings.group, sink.as_mut())?;
    Ok(())
}

/// Diagnostic logging on stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, ansi: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .without_time()
        .init();
}
