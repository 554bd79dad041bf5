// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::Path;

use crate::app_config::Config;
use crate::document_loader::DocumentLoader;
use crate::file_utils::FileManager;
use crate::media::MediaLibrary;
use crate::page_composer::PageComposer;

mod app_config;
mod contact;
mod document_loader;
mod errors;
mod file_utils;
mod media;
mod page_composer;
mod section_splitter;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Folio - Portfolio content composer
///
/// Composes a single-page portfolio from four markdown documents
/// (home, about, projects, contact) into a JSON page structure.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio content composition tool")]
#[command(long_about = "Folio reads the four source documents from a content directory, splits the
projects document into sub-sections, parses the contact records, binds the
curated media tables and emits the composed page as JSON for the renderer.

EXAMPLES:
    folio                               # Compose using default config
    folio -d site/content               # Use a different content directory
    folio -o page.json --pretty         # Write pretty JSON to a file
    folio --log-level debug             # Compose with debug logging

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    /// Content directory holding home.md, about.md, projects.md, contact.md
    #[arg(short = 'd', long)]
    content_dir: Option<String>,

    /// Output file for the composed page (stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// @maps: Config log level to the log crate's filter
fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let mut config = if Path::new(&cli.config_path).exists() {
        Config::from_file(&cli.config_path)
            .with_context(|| format!("Failed to load config file: {}", cli.config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            cli.config_path
        );
        let config = Config::default();
        config.save_to_file(&cli.config_path)?;
        config
    };

    // Override config with CLI options if provided
    if let Some(content_dir) = cli.content_dir {
        config.content_dir = content_dir;
    }
    if let Some(output) = cli.output {
        config.output = Some(output);
    }
    if cli.pretty {
        config.pretty = true;
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level.into();
    }
    log::set_max_level(level_filter(&config.log_level));
    config.validate()?;

    if !FileManager::dir_exists(&config.content_dir) {
        anyhow::bail!("Content directory does not exist: {}", config.content_dir);
    }

    // Compose the page
    let loader = DocumentLoader::new(&config.content_dir);
    for slug in document_loader::Slug::ALL {
        let path = loader.document_path(slug);
        if !FileManager::file_exists(&path) {
            warn!("Missing content file for '{}': {:?}", slug, path);
        }
    }
    let composer = PageComposer::new(loader, MediaLibrary::default());
    let page = composer.compose().await?;
    info!(
        "Composed page with {} sections and {} contact entries",
        page.sections.len(),
        page.contact.entries.len()
    );

    // Hand the structure to the renderer as JSON
    let json = if config.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };

    match &config.output {
        Some(path) => {
            FileManager::write_to_file(path, &json)?;
            info!("Wrote composed page to {}", path);
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
