mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::estimate::EstimateArgs;
use commands::schedule::ScheduleArgs;
use commands::validate::ValidateIdArgs;

/// Loan calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "prestamo",
    version,
    about = "Loan payment estimation and amortization schedules",
    long_about = "A CLI for loan calculations with decimal precision. Estimates level \
                  installment payments, generates amortization schedules under fixed, \
                  variable, and variable_rd interest allocation, and validates Dominican \
                  identity documents (cedula, RNC, NCF, NSS)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the periodic payment for a set of loan terms
    Estimate(EstimateArgs),
    /// Generate a dated installment schedule
    Schedule(ScheduleArgs),
    /// Validate a Dominican identity document number
    ValidateId(ValidateIdArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Estimate(args) => commands::estimate::run_estimate(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::ValidateId(args) => commands::validate::run_validate_id(args),
        Commands::Version => {
            println!("prestamo {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
