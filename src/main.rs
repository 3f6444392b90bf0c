//! Unified CLI for the Random Earth Teleporter
//!
//! This is the main binary that provides both server and render modes
//! through a unified command-line interface.
//!
//! # Usage
//!
//! ## Server Mode (default)
//! ```bash
//! earth-teleporter --port 5000 --host 0.0.0.0
//! ```
//!
//! ## Render Mode
//! ```bash
//! earth-teleporter render --author "Jane Doe"
//! ```
//!
//! ## Help and Version
//! ```bash
//! earth-teleporter --version
//! earth-teleporter --help
//! earth-teleporter render --help
//! ```

use clap::{Parser, Subcommand};

use earth_teleporter::cli::{
    render::{RenderArgs, run_render_mode},
    serve::{ServeArgs, run_serve_mode},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "earth-teleporter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // Server mode options (when no subcommand is provided)
    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Configuration file path
    #[arg(long)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page once to stdout and exit
    Render {
        /// Author name to credit, overriding the environment
        #[arg(short, long, value_name = "AUTHOR")]
        author: Option<String>,

        /// Configuration file path
        #[arg(long)]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a .env file before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            author,
            config,
            verbose,
        }) => {
            let args = RenderArgs {
                author,
                config,
                verbose,
            };
            run_render_mode(args).await
        }
        None => {
            // Server mode (default when no subcommand)
            let args = ServeArgs {
                port: cli.port,
                host: cli.host,
                config: cli.config,
                verbose: cli.verbose,
            };
            run_serve_mode(args).await
        }
    }
}
