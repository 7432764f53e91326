use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "captionfetch",
    about = "Caption Fetch - Fetch and clean YouTube video transcripts",
    version,
    long_about = "A CLI tool for fetching the caption track of a YouTube video and turning it into a clean transcript: emoji are stripped and whitespace is normalized before the fragments are joined into a single text."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the transcript of a video
    Fetch {
        /// YouTube URL or bare video ID
        #[arg(value_name = "URL_OR_ID")]
        video: String,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Comma-separated caption language preference (e.g. "en,es")
        #[arg(short, long, value_name = "LANGS")]
        languages: Option<String>,

        /// Keep emoji instead of stripping them
        #[arg(long)]
        keep_emoji: bool,
    },

    /// Show configuration or print the config file location
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormat {
    /// Plain transcript text
    Text,
    /// JSON with video metadata
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
