//! CLI argument definitions using clap
//!
//! Commands:
//! - gradelens serve [--config <path>] [--port <n>] [--data <path>]
//! - gradelens dashboard [--data <path>]
//! - gradelens summary [--data <path>] [filters...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::filter::{AGE_MAX, AGE_MIN, WILDCARD};

/// Default dataset location, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/dados.csv";

/// gradelens - student performance data service and dashboard
#[derive(Parser, Debug)]
#[command(name = "gradelens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the dataset over HTTP at GET /dados
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to bind (overrides the config file)
        #[arg(long)]
        port: Option<u16>,

        /// Dataset file (overrides the config file)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Explore the dataset in an interactive terminal dashboard
    Dashboard {
        /// Dataset file
        #[arg(long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },

    /// Print the full view battery for a filtered subset as JSON
    Summary {
        /// Dataset file
        #[arg(long, default_value = DEFAULT_DATA_PATH)]
        data: PathBuf,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// School selector; prefix a value with `\` to match it literally
        #[arg(long, default_value = WILDCARD)]
        school: String,

        /// Sex selector; prefix a value with `\` to match it literally
        #[arg(long, default_value = WILDCARD)]
        sex: String,

        /// Lowest age, inclusive
        #[arg(long, default_value_t = AGE_MIN)]
        age_min: u8,

        /// Highest age, inclusive
        #[arg(long, default_value_t = AGE_MAX)]
        age_max: u8,

        /// Extra predicate, `field=value` or `field=lo..hi` (repeatable)
        #[arg(long = "where", value_name = "EXPR")]
        predicates: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
