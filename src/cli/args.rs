//! Command line argument parsing for the spellcorrect CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::spelling::corpus::CorpusFormat;

/// spellcorrect - check words against a corpus and suggest corrections
#[derive(Parser, Debug, Clone)]
#[command(name = "spellcorrect")]
#[command(about = "Check words against a corpus and suggest corrections")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check words, from the command line or one per line on stdin
    Check(CheckArgs),

    /// Show corpus statistics
    Stats(CorpusArgs),

    /// Print the prefix tree built from a corpus
    Dump(CorpusArgs),
}

/// Corpus selection shared by every command
#[derive(Parser, Debug, Clone)]
pub struct CorpusArgs {
    /// Path to the corpus file
    #[arg(short, long, value_name = "CORPUS", env = "SPELLCORRECT_CORPUS")]
    pub corpus: PathBuf,

    /// How the corpus is split into words (defaults to the config value)
    #[arg(long, value_name = "FORMAT")]
    pub corpus_format: Option<CorpusFormatArg>,

    /// Configuration file (JSON)
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for checking words
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Edits allowed between a word and a suggestion
    #[arg(short = 'e', long, allow_negative_numbers = true)]
    pub max_edits: Option<i64>,

    /// Suggestions shown per misspelled word
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_suggestions: Option<i64>,

    /// Log every search step (needs -vvvv to be visible)
    #[arg(long)]
    pub trace: bool,

    /// Worker threads (defaults to the number of CPU cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Words to check; reads stdin when empty
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,
}

/// Corpus formats accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormatArg {
    /// One word per line
    Lines,
    /// Running text, split into lowercased words
    Text,
}

impl From<CorpusFormatArg> for CorpusFormat {
    fn from(arg: CorpusFormatArg) -> Self {
        match arg {
            CorpusFormatArg::Lines => CorpusFormat::Lines,
            CorpusFormatArg::Text => CorpusFormat::Text,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output, one object per line
    Json,
}
