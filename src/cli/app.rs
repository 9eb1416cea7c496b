//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{page_cmd, render_cmd};
use crate::storage::{Config, LoadedRegistry, REGISTRY_ENV};

#[derive(Parser)]
#[command(name = "format-docs")]
#[command(author, version, about = "Format and plugin listings for imaging library docs")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Registry file (TOML or YAML)
    #[arg(long, short = 'r', global = true, env = REGISTRY_ENV)]
    pub registry: Option<PathBuf>,

    /// Output format (defaults to the global config, then text)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the documentation line for one format
    Entry {
        /// File extension, with or without the leading dot
        extension: String,
    },

    /// Render documentation lines for all formats
    Formats {
        /// List video formats instead
        #[arg(long)]
        video: bool,
    },

    /// Check that every plugin in a priority list is registered
    Check,

    /// Substitute placeholders in a documentation page
    Page {
        /// Document name, e.g. `formats/index`
        docname: String,

        /// Page source (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Render the list of standard example images
    Images,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    // A broken global config should not block commands that don't need it
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let format = cli
        .format
        .unwrap_or_else(|| config.global.default_format.into());
    let output = Output::new(format, cli.verbose);

    output.verbose("format-docs starting");
    if let Some(e) = config_error {
        output.verbose_ctx("config", &format!("Ignoring global config: {:#}", e));
    }

    let path = config.resolve_registry(cli.registry.as_deref())?;
    output.verbose_ctx("registry", &format!("Loading {}", path.display()));
    let loaded = LoadedRegistry::load(&path)?;
    output.verbose_ctx(
        "registry",
        &format!(
            "{} plugins, {} formats, {} video formats, {} images",
            loaded.registry.plugins.len(),
            loaded.registry.formats.len(),
            loaded.registry.video_formats.len(),
            loaded.registry.images.len()
        ),
    );

    match cli.command {
        Commands::Entry { extension } => render_cmd::entry(&output, &loaded, &extension)?,
        Commands::Formats { video } => render_cmd::formats(&output, &loaded, video)?,
        Commands::Check => render_cmd::check(&output, &loaded)?,
        Commands::Images => render_cmd::images(&output, &loaded),
        Commands::Page { docname, file } => {
            page_cmd::run(&output, &loaded, &docname, file.as_deref())?
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
