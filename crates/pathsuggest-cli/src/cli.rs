use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default number of suggestions shown or printed.
pub(crate) const DEFAULT_MAX_RESULTS: usize = 10;

/// Live directory-path completion for terminal prompts.
#[derive(Debug, Parser)]
#[command(name = "pathsuggest", version, about)]
pub(crate) struct Cli {
    /// Directory substituted for a leading `~/` (defaults to the current
    /// user's home directory).
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) home: Option<String>,

    /// Maximum number of suggestions to show.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_RESULTS)]
    pub(crate) max_results: usize,

    /// Appends debug logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Prints directory completions for `input`, one per line.
    Complete { input: String },
    /// Prints the directory boundary for `input`.
    Boundary { input: String },
    /// Opens the interactive picker and prints the accepted path.
    Pick {
        /// Text to pre-fill the prompt with.
        initial: Option<String>,
    },
}

impl Cli {
    /// Resolves the home directory used for `~/` expansion.
    ///
    /// Falls back to an empty string when no home directory is known, which
    /// expands `~/` to the root.
    pub(crate) fn home_dir(&self) -> String {
        if let Some(home) = &self.home {
            return home.clone();
        }

        dirs::home_dir()
            .map(|home| home.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
