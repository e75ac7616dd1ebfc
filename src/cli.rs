use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{report, serve};

#[derive(Parser)]
#[command(name = "santacruz")]
#[command(about = "Santa Cruz agriculture and weather dashboard with a web API and a terminal report")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the tables and start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080).
        /// Overrides SANTACRUZ_BIND_ADDRESS and the config file.
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Seed for the random generator
        ///
        /// Without a seed every start produces different tables.
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print the dashboard for one year and month to the terminal
    ///
    /// Examples:
    ///   santacruz report --year 2018 --month 7
    ///   santacruz report --year 2030 --month 1 --seed 42
    Report {
        /// Selected year
        #[arg(short, long)]
        year: i32,

        /// Selected month (1-12)
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,

        /// Seed for the random generator
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, seed } => {
                serve(bind_address, seed).await?;
            }
            Commands::Report { year, month, seed } => {
                report(year, month, seed)?;
            }
        }
        Ok(())
    }
}
