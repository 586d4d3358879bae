mod cli;
mod config;
mod error;
mod models;
mod renderer;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kwdoc")]
#[command(about = "Generate a Markdown documentation skeleton from a keyword JSON description", long_about = None)]
struct Cli {
    /// Path to the keyword JSON description file
    #[arg(value_name = "keyword.json")]
    input: PathBuf,

    /// Output Markdown file (defaults to stdout)
    #[arg(value_name = "output.md")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::gen::run(cli.input, cli.output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
