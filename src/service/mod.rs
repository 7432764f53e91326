use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::clean::{self, CleanOptions};
use crate::config::Config;
use crate::provider::youtube::YouTubeTranscriptProvider;
use crate::provider::TranscriptProvider;
use crate::FetchError;

/// Cleaned transcript with fetch metadata
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResult {
    /// Video identifier the transcript belongs to
    pub video_id: String,

    /// Video title if the provider could resolve one
    pub title: Option<String>,

    /// Language code of the caption track that was used
    pub language: String,

    /// Cleaned, space-joined transcript text
    pub transcript: String,

    /// Timestamp when the fetch completed
    pub fetched_at: DateTime<Utc>,
}

/// Transcript fetching service.
///
/// Stateless per call: every invocation performs a fresh provider fetch,
/// cleans each fragment independently, and joins the results. Nothing is
/// cached or retained between calls.
pub struct TranscriptFetcher {
    provider: Arc<dyn TranscriptProvider>,
    languages: Vec<String>,
    clean_options: CleanOptions,
}

impl TranscriptFetcher {
    /// Create a fetcher backed by the YouTube timedtext provider
    pub fn new(config: &Config) -> Self {
        let provider = Arc::new(YouTubeTranscriptProvider::new(config.fetch.timeout()));
        Self::with_provider(config, provider)
    }

    /// Create a fetcher with a custom provider
    pub fn with_provider(config: &Config, provider: Arc<dyn TranscriptProvider>) -> Self {
        Self {
            provider,
            languages: config.fetch.languages.clone(),
            clean_options: CleanOptions::default(),
        }
    }

    /// Override the cleaning options (emoji stripping is on by default)
    pub fn with_clean_options(mut self, clean_options: CleanOptions) -> Self {
        self.clean_options = clean_options;
        self
    }

    /// Fetch the transcript of a video and return the full result record.
    ///
    /// Fragments are cleaned independently and joined with single spaces in
    /// provider-supplied order. An empty fragment list yields an empty
    /// transcript, not an error.
    pub async fn fetch(&self, video_id: &str) -> Result<TranscriptResult, FetchError> {
        tracing::info!(
            "Fetching transcript for video {} via {}",
            video_id,
            self.provider.provider_name()
        );

        let fetched = self
            .provider
            .fetch_transcript(video_id, &self.languages)
            .await?;

        let transcript = fetched
            .fragments
            .iter()
            .map(|fragment| clean::clean_with(&fragment.text, &self.clean_options))
            .collect::<Vec<_>>()
            .join(" ");

        Ok(TranscriptResult {
            video_id: fetched.video_id,
            title: fetched.title,
            language: fetched.language,
            transcript,
            fetched_at: Utc::now(),
        })
    }

    /// Fetch the transcript of a video and return just the cleaned text
    pub async fn get_transcript(&self, video_id: &str) -> Result<String, FetchError> {
        Ok(self.fetch(video_id).await?.transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{FetchedTranscript, MockTranscriptProvider, TranscriptFragment};

    fn fragment(text: &str) -> TranscriptFragment {
        TranscriptFragment {
            text: text.to_string(),
            start: 0.0,
            duration: 1.0,
        }
    }

    fn transcript_for(video_id: &str, texts: &[&str]) -> FetchedTranscript {
        FetchedTranscript {
            video_id: video_id.to_string(),
            language: "en".to_string(),
            title: None,
            fragments: texts.iter().map(|t| fragment(t)).collect(),
        }
    }

    fn fetcher_with(provider: MockTranscriptProvider) -> TranscriptFetcher {
        TranscriptFetcher::with_provider(&Config::default(), Arc::new(provider))
    }

    #[tokio::test]
    async fn test_fragments_joined_with_single_space() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider
            .expect_fetch_transcript()
            .returning(|video_id, _| Ok(transcript_for(video_id, &["Hello", "world"])));

        let transcript = fetcher_with(provider)
            .get_transcript("dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(transcript, "Hello world");
    }

    #[tokio::test]
    async fn test_emoji_stripped_from_fragments() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider
            .expect_fetch_transcript()
            .returning(|video_id, _| Ok(transcript_for(video_id, &["Hi 😀", "there"])));

        let transcript = fetcher_with(provider)
            .get_transcript("dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(transcript, "Hi there");
    }

    #[tokio::test]
    async fn test_empty_fragment_list_yields_empty_string() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider
            .expect_fetch_transcript()
            .returning(|video_id, _| Ok(transcript_for(video_id, &[])));

        let transcript = fetcher_with(provider)
            .get_transcript("dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(transcript, "");
    }

    #[tokio::test]
    async fn test_retrieval_failure_surfaces_provider_message_with_500() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider.expect_fetch_transcript().returning(|_, _| {
            Err(FetchError::Retrieval(
                "Subtitles are disabled for this video".to_string(),
            ))
        });

        let err = fetcher_with(provider)
            .get_transcript("dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert!(err
            .to_string()
            .contains("Subtitles are disabled for this video"));
    }

    #[tokio::test]
    async fn test_unexpected_failure_surfaces_original_error_with_500() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider
            .expect_fetch_transcript()
            .returning(|_, _| Err(FetchError::Internal("connection timed out".to_string())));

        let err = fetcher_with(provider)
            .get_transcript("dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("connection timed out"));
    }

    #[tokio::test]
    async fn test_missing_transcript_is_a_distinct_404() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider.expect_fetch_transcript().returning(|video_id, _| {
            Err(FetchError::NoTranscript {
                video_id: video_id.to_string(),
            })
        });

        let err = fetcher_with(provider)
            .get_transcript("dQw4w9WgXcQ")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
        assert!(matches!(err, FetchError::NoTranscript { .. }));
        assert!(err.to_string().contains("dQw4w9WgXcQ"));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_are_independent() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider.expect_fetch_transcript().returning(|video_id, _| {
            let texts: &[&str] = match video_id {
                "video-one-id" => &["first", "video"],
                _ => &["second", "video"],
            };
            Ok(transcript_for(video_id, texts))
        });

        let fetcher = fetcher_with(provider);
        let (one, two) = tokio::join!(
            fetcher.get_transcript("video-one-id"),
            fetcher.get_transcript("video-two-id")
        );

        assert_eq!(one.unwrap(), "first video");
        assert_eq!(two.unwrap(), "second video");
    }

    #[tokio::test]
    async fn test_configured_languages_are_passed_to_provider() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider
            .expect_fetch_transcript()
            .withf(|_, languages| languages.len() == 1 && languages[0] == "es")
            .returning(|video_id, _| Ok(transcript_for(video_id, &["hola"])));

        let mut config = Config::default();
        config.fetch.languages = vec!["es".to_string()];
        let fetcher = TranscriptFetcher::with_provider(&config, Arc::new(provider));

        assert_eq!(fetcher.get_transcript("dQw4w9WgXcQ").await.unwrap(), "hola");
    }

    #[tokio::test]
    async fn test_emoji_kept_when_stripping_disabled() {
        let mut provider = MockTranscriptProvider::new();
        provider.expect_provider_name().return_const("mock");
        provider
            .expect_fetch_transcript()
            .returning(|video_id, _| Ok(transcript_for(video_id, &["Hi 😀"])));

        let fetcher = fetcher_with(provider)
            .with_clean_options(CleanOptions { strip_emoji: false });

        assert_eq!(fetcher.get_transcript("dQw4w9WgXcQ").await.unwrap(), "Hi 😀");
    }
}
