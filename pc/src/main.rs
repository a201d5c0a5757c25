//! PromptCat - compose a prompt from text fragments
//!
//! CLI entry point. The composed document goes to stdout; diagnostics and
//! logs go to stderr.

use std::io::{self, Write};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use promptcat::cli::Cli;
use promptcat::config::Config;
use promptcat::{Composer, DirectoryStore, FragmentStore, Resolver};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) {
    // Priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
                tracing::Level::WARN
            }
        },
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Logging initialized (level: {:?})", level);
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // help and version go to stdout and are not failures
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref());

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(base_dir) = cli.base_dir {
        config.base_dir = Some(base_dir);
    }
    if let Some(separator) = cli.separator {
        config.separator = separator;
    }

    let base_dir = config.resolve_base_dir()?;
    info!(base_dir = %base_dir.display(), "promptcat starting");
    let store = DirectoryStore::new(&base_dir, config.extension.clone());

    if cli.list {
        return cmd_list(&store, &cli.topics);
    }

    let composer = Composer::new(Resolver::new(store), config.separator);
    let document = composer.compose(cli.topics.as_slice())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", document).context("Failed to write document")?;
    Ok(())
}

fn cmd_list(store: &DirectoryStore, categories: &[String]) -> Result<()> {
    let categories = if categories.is_empty() {
        store.categories()?
    } else {
        categories.to_vec()
    };

    let mut out = String::new();
    for category in &categories {
        if !store.has_category(category) {
            return Err(promptcat::ComposeError::CategoryNotFound {
                category: category.clone(),
            }
            .into());
        }
        out.push_str(&format!("{}\n", category));
        for fragment in store.fragments(category)? {
            out.push_str(&format!("  {}\n", fragment));
        }
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", out).context("Failed to write listing")?;
    Ok(())
}
