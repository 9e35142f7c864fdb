use std::path::PathBuf;

use clap::{Parser, Subcommand};
use traypack::AppError;

#[derive(Parser)]
#[command(name = "traypack")]
#[command(version)]
#[command(
    about = "Build the VPN Monitor tray application and install its desktop integration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline: environment, icon, packaging, desktop install
    #[clap(visible_alias = "b")]
    Build {
        /// Working root containing the application sources (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Remove the files recorded by the last successful build
    #[clap(visible_alias = "un")]
    Uninstall {
        /// Working root of the install to remove
        #[arg(long)]
        root: Option<PathBuf>,
    },
    /// Report environment and install health
    #[clap(visible_alias = "st")]
    Status {
        /// Working root to inspect
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Build { root } => traypack::build(root).map(|_| ()),
        Commands::Uninstall { root } => traypack::uninstall(root).map(|_| ()),
        Commands::Status { root } => match traypack::status(root) {
            Ok(outcome) => std::process::exit(outcome.exit_code),
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
