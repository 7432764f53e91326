use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod youtube;

use crate::FetchError;

/// One timed unit of caption text as supplied by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptFragment {
    /// Caption text for this fragment
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

/// Raw transcript for a video as returned by a provider, before cleaning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedTranscript {
    /// Video identifier in the provider's namespace
    pub video_id: String,

    /// Language code of the caption track that was found
    pub language: String,

    /// Video title if the provider could resolve one
    pub title: Option<String>,

    /// Caption fragments in provider-supplied order
    pub fragments: Vec<TranscriptFragment>,
}

/// Trait for retrieving transcripts from an external provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript fragments for a video, trying the given
    /// languages in preference order
    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<FetchedTranscript, FetchError>;

    /// Get the name of this provider
    fn provider_name(&self) -> &'static str;
}
