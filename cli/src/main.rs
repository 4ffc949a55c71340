mod cli;
mod commands;
mod render;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use duetodo_core::{FileTodoRepository, StoreConfig, TodoService};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let config = StoreConfig::new(cli.file).with_lock(cli.lock);
    debug!(path = %config.path.display(), lock = config.lock, "using todo store");
    let service = TodoService::new(FileTodoRepository::new(config));

    let stdout = io::stdout();
    let color = stdout.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let mut out = stdout.lock();
    commands::dispatch(&service, cli.command, &mut out, color)
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("duetodo=debug,duetodo_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
