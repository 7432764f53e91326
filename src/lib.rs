//! Caption Fetch - A Rust library and CLI for fetching YouTube video transcripts
//!
//! This library provides functionality to fetch the caption track of a YouTube video,
//! clean the text (emoji removal, whitespace/encoding normalization), and return a
//! single space-joined transcript string.

pub mod clean;
pub mod cli;
pub mod config;
pub mod output;
pub mod provider;
pub mod service;
pub mod utils;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use provider::{FetchedTranscript, TranscriptFragment, TranscriptProvider};
pub use service::{TranscriptFetcher, TranscriptResult};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Failures surfaced by the transcript service, with HTTP-style status codes
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("No transcript available for video: {video_id}")]
    NoTranscript { video_id: String },

    #[error("Could not get transcript: {0}")]
    Retrieval(String),

    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl FetchError {
    /// HTTP-style status code for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            FetchError::NoTranscript { .. } => 404,
            FetchError::Retrieval(_) => 500,
            FetchError::Internal(_) => 500,
        }
    }
}
