//! Command line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    config::{ConfigError, PackConfig},
    packs::PackSizes,
};

/// Calculate the fewest packs needed to ship an order
#[derive(Debug, Parser)]
#[command(name = "packwise", version, about, long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate the packs to ship for a number of items
    Calculate {
        /// Number of items ordered
        #[arg(allow_negative_numbers = true)]
        items: i64,

        /// Pack size source
        #[command(flatten)]
        sizes: SizeArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print the pack sizes that would be used
    Sizes {
        /// Pack size source
        #[command(flatten)]
        sizes: SizeArgs,
    },
}

/// Where pack sizes come from
#[derive(Debug, Clone, clap::Args)]
pub struct SizeArgs {
    /// Comma separated pack sizes, e.g. `250,500,1000`
    #[arg(short, long, env = "PACKWISE_PACK_SIZES")]
    pub pack_sizes: Option<PackSizes>,

    /// YAML configuration file
    #[arg(short, long, env = "PACKWISE_CONFIG")]
    pub config: Option<PathBuf>,
}

impl SizeArgs {
    /// Resolve pack sizes: explicit sizes first, then the configuration file,
    /// then the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration file cannot be loaded.
    pub fn resolve(&self) -> Result<PackSizes, ConfigError> {
        if let Some(sizes) = &self.pack_sizes {
            return Ok(sizes.clone());
        }

        match &self.config {
            Some(path) => Ok(PackConfig::load(path)?.pack_sizes),
            None => Ok(PackSizes::default()),
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table
    Table,

    /// Single line JSON
    Json,
}
