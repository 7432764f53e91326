use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{FetchedTranscript, TranscriptFragment, TranscriptProvider};
use crate::FetchError;

const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";
const OEMBED_URL: &str = "https://www.youtube.com/oembed";

/// YouTube transcript provider backed by the public timedtext endpoint.
///
/// The underlying HTTP calls are blocking and run on tokio's blocking worker
/// pool; the async trait surface only suspends on the worker handle.
pub struct YouTubeTranscriptProvider {
    timeout: Duration,
    timedtext_url: String,
    oembed_url: String,
}

impl YouTubeTranscriptProvider {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            timedtext_url: TIMEDTEXT_URL.to_string(),
            oembed_url: OEMBED_URL.to_string(),
        }
    }
}

/// timedtext `fmt=json3` payload
#[derive(Debug, Deserialize)]
struct TimedTextResponse {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,

    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,

    segs: Option<Vec<TimedTextSegment>>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSegment {
    #[serde(default)]
    utf8: String,
}

/// Parse a timedtext json3 body into ordered fragments.
///
/// Events without caption segments (styling/window events) and events whose
/// text is entirely whitespace (newline filler) carry no transcript content
/// and are not part of the returned fragment list.
fn parse_timed_text(body: &str) -> Result<Vec<TranscriptFragment>, serde_json::Error> {
    let response: TimedTextResponse = serde_json::from_str(body)?;

    let fragments = response
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event
                .segs?
                .iter()
                .map(|seg| seg.utf8.as_str())
                .collect();
            if text.trim().is_empty() {
                return None;
            }
            Some(TranscriptFragment {
                text,
                start: event.start_ms as f64 / 1000.0,
                duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
            })
        })
        .collect();

    Ok(fragments)
}

/// Fetch one caption track. An empty body means YouTube has no track for
/// this language; that is not an error, the caller falls through to the
/// next preferred language.
fn fetch_track_blocking(
    timedtext_url: &str,
    video_id: &str,
    language: &str,
    timeout: Duration,
) -> Result<Vec<TranscriptFragment>, FetchError> {
    let url = format!(
        "{}?v={}&lang={}&fmt=json3",
        timedtext_url,
        urlencoding::encode(video_id),
        urlencoding::encode(language)
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Retrieval(e.to_string()))?;

    let response = client
        .get(&url)
        .send()
        .map_err(|e| FetchError::Retrieval(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Retrieval(format!(
            "timedtext request for video {} failed: HTTP {}",
            video_id,
            response.status()
        )));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::Retrieval(e.to_string()))?;

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    parse_timed_text(&body)
        .map_err(|e| FetchError::Retrieval(format!("unexpected timedtext payload: {e}")))
}

/// Best-effort title lookup via oEmbed. Any failure degrades to `None`.
fn fetch_title_blocking(oembed_url: &str, video_id: &str, timeout: Duration) -> Option<String> {
    #[derive(Deserialize)]
    struct OEmbedResponse {
        title: String,
    }

    let watch_url = format!("https://www.youtube.com/watch?v={video_id}");
    let url = format!(
        "{}?url={}&format=json",
        oembed_url,
        urlencoding::encode(&watch_url)
    );

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .ok()?;

    let response: OEmbedResponse = client.get(&url).send().ok()?.json().ok()?;
    Some(response.title)
}

#[async_trait]
impl TranscriptProvider for YouTubeTranscriptProvider {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<FetchedTranscript, FetchError> {
        let video_id = video_id.to_string();
        let languages: Vec<String> = if languages.is_empty() {
            vec!["en".to_string()]
        } else {
            languages.to_vec()
        };
        let timeout = self.timeout;
        let timedtext_url = self.timedtext_url.clone();
        let oembed_url = self.oembed_url.clone();

        // The blocking HTTP client must never run on the async runtime
        // itself; the whole retrieval is handed to the worker pool and the
        // caller suspends until it finishes or fails.
        tokio::task::spawn_blocking(move || {
            for language in &languages {
                tracing::debug!("Requesting '{}' captions for video: {}", language, video_id);

                let fragments =
                    fetch_track_blocking(&timedtext_url, &video_id, language, timeout)?;
                if fragments.is_empty() {
                    continue;
                }

                tracing::debug!(
                    "Found {} caption fragments for video {} in '{}'",
                    fragments.len(),
                    video_id,
                    language
                );

                let title = fetch_title_blocking(&oembed_url, &video_id, timeout);
                return Ok(FetchedTranscript {
                    video_id: video_id.clone(),
                    language: language.clone(),
                    title,
                    fragments,
                });
            }

            Err(FetchError::NoTranscript {
                video_id: video_id.clone(),
            })
        })
        .await
        .map_err(|e| FetchError::Internal(e.to_string()))?
    }

    fn provider_name(&self) -> &'static str {
        "YouTube"
    }
}
