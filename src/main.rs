//! Packwise command line entry point

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use packwise::{
    cli::{Cli, Command, OutputFormat},
    store::PackSizeStore,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");

            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.command {
        Command::Calculate {
            items,
            sizes,
            format,
        } => {
            let store = PackSizeStore::new(sizes.resolve().context("cannot load pack sizes")?);
            let report = store
                .calculate(items)
                .context("cannot calculate packs")?;

            match format {
                OutputFormat::Table => report.write_table(&mut handle)?,
                OutputFormat::Json => report.write_json(&mut handle)?,
            }
        }
        Command::Sizes { sizes } => {
            let sizes = sizes.resolve().context("cannot load pack sizes")?;

            serde_json::to_writer(&mut handle, &sizes)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
