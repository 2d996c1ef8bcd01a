//! docdiff CLI
//!
//! Command-line driver for the legend and detail views of a comparison result

use clap::{Parser, Subcommand, ValueEnum};
use docdiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "docdiff")]
#[command(about = "docdiff - Legend and detail views for document comparison results", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count unique differences per category
    Legend(commands::legend::LegendArgs),
    /// Show the detail overlay for one difference
    Detail(commands::detail::DetailArgs),
    /// List unique differences
    List(commands::list::ListArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Legend(args) => commands::legend::execute(args),
        Commands::Detail(args) => commands::detail::execute(args),
        Commands::List(args) => commands::list::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
