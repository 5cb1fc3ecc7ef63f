use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::{WrapErr, eyre};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod status;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let (settings, source) = mystify_config::resolve(cli.config.as_deref(), cli.layer())?;
    info!(?settings, ?source, "starting mystify");

    let terminal = ratatui::init();
    let result = App::new(settings).run(terminal);
    ratatui::restore();
    result
}

/// Send logs to `log_file` when one is given. The terminal belongs to the
/// animation, so without a file nothing is logged.
fn init_tracing(log_file: Option<&Path>) -> color_eyre::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
