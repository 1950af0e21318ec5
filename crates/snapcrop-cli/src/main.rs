mod commands;
mod script;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snapcrop", about = "Photo crop selection with text-region detection")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show image metrics and how the image is laid out in a viewport
    Info(commands::info::InfoArgs),
    /// Detect the text region of one or more images
    Detect(commands::detect::DetectArgs),
    /// Run a crop session: detect, replay drag gestures, confirm
    Crop(commands::crop::CropArgs),
    /// List the subjects a crop can be filed under
    Subjects,
    /// Print or save the default configuration as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Crop(args) => commands::crop::run(args),
        Commands::Subjects => commands::subjects::run(),
        Commands::Config(args) => commands::config::run(args),
    }
}
