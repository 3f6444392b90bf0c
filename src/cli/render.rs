//! Render mode CLI logic
//!
//! Contains the core logic for the one-shot page render mode: render the
//! page once with the effective configuration and print it to stdout.

use anyhow::Result;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Settings, config::ConfigLoader, page};

/// Arguments for render mode
#[derive(Debug)]
pub struct RenderArgs {
    pub author: Option<String>,
    pub config: Option<String>,
    pub verbose: bool,
}

/// Run render mode with the given arguments
pub async fn run_render_mode(args: RenderArgs) -> Result<()> {
    // Initialize logging (minimal for render mode, kept off stdout so the
    // rendered page stays pipeable)
    if args.verbose {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "error".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let settings = resolve_settings(&args)?;

    debug!("Rendering page for author: {}", settings.page.author);

    match page::render_index(&settings.page.author) {
        Ok(html) => {
            println!("{}", html);
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to render page. Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve effective settings for render mode from config sources and the
/// optional --author override
fn resolve_settings(args: &RenderArgs) -> Result<Settings> {
    let config_loader = ConfigLoader::new();

    let config_path = if let Some(config) = &args.config {
        Some(std::path::PathBuf::from(config))
    } else {
        ConfigLoader::get_config_path()
    };

    let mut settings = config_loader
        .load(config_path.as_deref())
        .unwrap_or_else(|e| {
            eprintln!(
                "Warning: Failed to load configuration: {}. Using defaults.",
                e
            );
            Settings::default()
        });

    if let Some(author) = &args.author
        && !author.is_empty()
    {
        settings.page.author = author.clone();
    }

    Ok(settings)
}
