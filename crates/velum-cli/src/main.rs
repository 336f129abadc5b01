//! Velum CLI — soft-body scenario simulation and input validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "velum")]
#[command(version, about = "Velum — mass-spring and tetrahedral soft-body simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a scenario file.
    Simulate {
        /// Path to scenario file (TOML).
        #[arg(short, long, default_value = "scenario.toml")]
        scenario: String,

        /// Print per-tick telemetry to stdout.
        #[arg(long)]
        verbose: bool,
    },

    /// Validate a scenario, mesh, or node file.
    Validate {
        /// Path to a .toml (scenario), .json (mesh), or .node file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate { scenario, verbose } => commands::simulate(&scenario, verbose),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
