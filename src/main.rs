//! Huaolelo - Main entrypoint.
//!
//! Loads configuration, initializes logging, indexes the word list and runs
//! the requested query or the interactive session.

use clap::{Parser, Subcommand};
use huaolelo_lib::config::{ConfigLoader, HuaoleloConfig, LogConfig, ENV_PREFIX};
use huaolelo_lib::console::Session;
use huaolelo_lib::dictionary::{Dictionary, WordList};
use huaolelo_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, HuaoleloError, HuaoleloResult,
    TracingErrorReporter,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for Huaolelo.
#[derive(Parser, Debug)]
#[clap(name = "huaolelo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to index, overriding `dictionary.path`
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the entry stored under a word
    Lookup {
        /// The word to look up
        word: String,
    },

    /// Tell whether any word starts with a prefix
    Prefix {
        /// The prefix to test
        prefix: String,
    },

    /// List entries starting with a prefix
    Complete {
        /// The prefix to complete
        prefix: String,

        /// Maximum number of entries, overriding `dictionary.max_suggestions`
        #[clap(short, long, value_parser)]
        limit: Option<usize>,
    },

    /// List every entry
    List,

    /// Start the interactive menu
    Interactive,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that query output on stdout stays clean.
fn init_logging(log: &LogConfig) -> HuaoleloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| HuaoleloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn load_words(config: &HuaoleloConfig) -> HuaoleloResult<WordList> {
    match &config.dictionary.path {
        Some(path) => Ok(WordList::load(path, config.dictionary.format)?),
        None => {
            warn!("No word list configured, starting with an empty dictionary");
            Ok(WordList::new())
        }
    }
}

fn run(args: Args) -> HuaoleloResult<()> {
    let command = args.command.unwrap_or(Command::Interactive);

    if let Command::GenConfig { output } = &command {
        // Create parent directories if they don't exist
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output, HuaoleloConfig::default().to_toml_string()?)?;
        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = config_loader.load()?;

    init_logging(&config.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    if let Some(words) = args.words {
        config.override_word_list(words)?;
    }

    if let Command::Validate = command {
        info!("Configuration validated successfully");
        println!("Configuration is valid");
        return Ok(());
    }

    let words = load_words(&config)?;
    let dictionary = Dictionary::index(&words, &config.dictionary);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Lookup { word } => match dictionary.lookup(&word) {
            Some(entry) => writeln!(out, "{entry}")?,
            None => writeln!(out, "\"{word}\" is not in the dictionary")?,
        },
        Command::Prefix { prefix } => {
            writeln!(out, "{}", dictionary.has_prefix(&prefix))?;
        }
        Command::Complete { prefix, limit } => {
            let limit = limit.unwrap_or(config.dictionary.max_suggestions);
            for entry in dictionary.suggest_at_most(&prefix, limit) {
                writeln!(out, "{entry}")?;
            }
        }
        Command::List => {
            for entry in dictionary.all() {
                writeln!(out, "{entry}")?;
            }
        }
        Command::Interactive => {
            info!(words = dictionary.len(), "Starting interactive session");
            let stdin = io::stdin();
            Session::new(&dictionary, stdin.lock(), out, &config.console).run()?;
        }
        Command::Validate | Command::GenConfig { .. } => {}
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = <Args as clap::Parser>::parse();

    if let Err(error) = run(args) {
        get_error_reporting().report(&ErrorContext::new(error, "huaolelo"));
        process::exit(1);
    }
}
