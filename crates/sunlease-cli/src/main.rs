mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::economics::EconomicsArgs;
use commands::offers::OffersArgs;
use commands::payment::PaymentArgs;
use commands::residuals::ResidualsArgs;

/// Solar subscription sales calculations
#[derive(Parser)]
#[command(
    name = "sunlease",
    version,
    about = "Solar subscription sales calculations",
    long_about = "A CLI for solar subscription sales support: amortized monthly \
                  payments per contract duration, regulatory price ceilings, \
                  residual value schedules, and multi-year savings projections, \
                  all with decimal precision."
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
    /// Calculate the full offer set for an installation
    Offers(OffersArgs),
    /// Project multi-year savings from an annual yield
    Economics(EconomicsArgs),
    /// Calculate a single amortized monthly payment
    Payment(PaymentArgs),
    /// Print the residual value schedule for a duration
    Residuals(ResidualsArgs),
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
        Commands::Offers(args) => commands::offers::run_offers(args),
        Commands::Economics(args) => commands::economics::run_economics(args),
        Commands::Payment(args) => commands::payment::run_payment(args),
        Commands::Residuals(args) => commands::residuals::run_residuals(args),
        Commands::Version => {
            println!("sunlease {}", env!("CARGO_PKG_VERSION"));
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
