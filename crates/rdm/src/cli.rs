//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `rdm generate --category core lib/` | Write one page per documented root module |
//! | `rdm modules lib/` | List root modules without writing anything |
//! | `rdm config --write rdm.toml` | Print or save the effective configuration |

use clap::{Parser, Subcommand};
use rdm_domain::error::Result;
use rdm_infrastructure::config::{AppConfig, ConfigLoader};
use rdm_infrastructure::logging::init_logging;
use rdm_infrastructure::sources::expand_sources;
use rdm_infrastructure::{build_pipeline, config::validate_app_config};
use std::path::PathBuf;
use tracing::info;

/// Command line interface for rdm
#[derive(Parser, Debug)]
#[command(name = "rdm")]
#[command(about = "Ruby documentation comments to Markdown reference pages")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// rdm subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate Markdown pages for the root modules of the given sources
    Generate {
        /// Sub-directory of the output directory to write into
        #[arg(long)]
        category: String,

        /// Library root that library units are computed against
        #[arg(long)]
        root: Option<PathBuf>,

        /// Output base directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Base URL of the full reference documentation
        #[arg(long)]
        reference: Option<String>,

        /// Ruby source files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List the root modules of the given sources without writing anything
    Modules {
        /// Library root that library units are computed against
        #[arg(long)]
        root: Option<PathBuf>,

        /// Ruby source files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Save to this file instead of printing
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

impl Cli {
    /// Loaded configuration with this command's flag overrides applied
    pub fn config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;

        match &self.command {
            Commands::Generate {
                root,
                out,
                reference,
                ..
            } => {
                if let Some(root) = root {
                    config.library.root.clone_from(root);
                }
                if let Some(out) = out {
                    config.output.dir.clone_from(out);
                }
                if let Some(reference) = reference {
                    config.output.reference_base.clone_from(reference);
                }
            }
            Commands::Modules { root, .. } => {
                if let Some(root) = root {
                    config.library.root.clone_from(root);
                }
            }
            Commands::Config { .. } => {}
        }

        validate_app_config(&config)?;
        Ok(config)
    }
}

/// Run a parsed command line with an already loaded configuration
pub fn execute(command: &Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Generate {
            category, paths, ..
        } => {
            let sources = expand_sources(paths)?;
            let report = build_pipeline(config).run(category, &sources)?;
            info!(
                files = report.files_parsed,
                collected = report.modules_collected,
                roots = report.roots_kept,
                written = report.documents_written,
                skipped = report.skipped_undocumented,
                "Generated {} pages into {}",
                report.documents_written,
                config.output.dir.join(category).display()
            );
        }
        Commands::Modules { paths, .. } => {
            let sources = expand_sources(paths)?;
            for module in build_pipeline(config).plan(&sources)? {
                let status = if module.documented {
                    "documented"
                } else {
                    "undocumented"
                };
                println!("{}\t{}\t{}", module.full_name, module.library, status);
            }
        }
        Commands::Config { write: Some(path) } => {
            ConfigLoader::new().save_to_file(config, path)?;
            info!(path = %path.display(), "Configuration saved");
        }
        Commands::Config { write: None } => print!("{}", ConfigLoader::to_toml(config)?),
    }

    Ok(())
}

/// Load configuration, start logging and run the command
pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    init_logging(&config.logging)?;
    execute(&cli.command, &config)
}
