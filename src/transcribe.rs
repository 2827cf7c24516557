//! Transcription Client
//!
//! Turns captured audio into transcript text through an AssemblyAI-style
//! HTTP service: upload the audio, create a transcript job with the
//! language tag, poll until the job completes or fails. Callers treat any
//! failure as "no command to parse"; a bad network day never crashes the
//! session. Audio capture itself happens upstream; this module only ever
//! sees the recorded bytes, base64-encoded per the service contract.

use crate::error::{SaudaError, SaudaResult};
use crate::language::Language;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio_retry::{strategy::FixedInterval, RetryIf};
use tracing::{debug, info, warn};

/// Trait for transcription backends
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe base64-encoded audio into final transcript text
    async fn transcribe(&self, audio_base64: &str, lang: Language) -> SaudaResult<String>;
}

/// Polling failure modes, separated so only "not done yet" is retried
#[derive(Debug, thiserror::Error)]
enum PollError {
    #[error("transcript still processing")]
    Pending,
    #[error("transcription failed: {0}")]
    Failed(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct TranscriptRequest {
    audio_url: String,
    speech_model: &'static str,
    language_code: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptJob {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP transcription client
pub struct HttpTranscriber {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    poll_interval: Duration,
    max_polls: usize,
}

impl HttpTranscriber {
    pub fn new(base_url: &str, api_key: &str) -> SaudaResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            poll_interval: Duration::from_secs(1),
            max_polls: 60,
        })
    }

    async fn upload(&self, audio: &[u8]) -> SaudaResult<String> {
        let response = self
            .client
            .post(format!("{}/v2/upload", self.base_url))
            .header("authorization", &self.api_key)
            .body(audio.to_vec())
            .send()
            .await?
            .error_for_status()?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.upload_url)
    }

    async fn create_job(&self, audio_url: String, lang: Language) -> SaudaResult<String> {
        let request = TranscriptRequest {
            audio_url,
            speech_model: "universal",
            language_code: lang.code().to_string(),
        };
        let response = self
            .client
            .post(format!("{}/v2/transcript", self.base_url))
            .header("authorization", &self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let job: TranscriptJob = response.json().await?;
        Ok(job.id)
    }

    async fn poll_once(&self, job_id: &str) -> Result<String, PollError> {
        let job: TranscriptJob = self
            .client
            .get(format!("{}/v2/transcript/{}", self.base_url, job_id))
            .header("authorization", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match job.status.as_str() {
            "completed" => Ok(job.text.unwrap_or_default()),
            "error" => Err(PollError::Failed(
                job.error.unwrap_or_else(|| "unknown service error".to_string()),
            )),
            status => {
                debug!("transcript {} still {}", job.id, status);
                Err(PollError::Pending)
            }
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio_base64: &str, lang: Language) -> SaudaResult<String> {
        let audio = STANDARD
            .decode(audio_base64)
            .map_err(|e| SaudaError::Transcribe(format!("invalid audio payload: {}", e)))?;
        info!("🎤 Uploading {} audio bytes for {}", audio.len(), lang.name());

        let audio_url = self.upload(&audio).await?;
        let job_id = self.create_job(audio_url, lang).await?;
        debug!("transcript job created: {}", job_id);

        let strategy = FixedInterval::new(self.poll_interval).take(self.max_polls);
        let result = RetryIf::spawn(
            strategy,
            || self.poll_once(&job_id),
            |e: &PollError| matches!(e, PollError::Pending),
        )
        .await;

        match result {
            Ok(text) => {
                info!("📝 Transcript: '{}'", text);
                Ok(text)
            }
            Err(PollError::Pending) => {
                warn!("⏳ Transcription gave up after {} polls", self.max_polls);
                Err(SaudaError::TranscribeTimeout(self.max_polls))
            }
            Err(PollError::Failed(message)) => Err(SaudaError::Transcribe(message)),
            Err(PollError::Http(e)) => Err(SaudaError::Http(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_parsing() {
        let job: TranscriptJob = serde_json::from_str(
            r#"{"id":"t-1","status":"completed","text":"add two bottles of water"}"#,
        )
        .unwrap();
        assert_eq!(job.status, "completed");
        assert_eq!(job.text.as_deref(), Some("add two bottles of water"));

        let job: TranscriptJob =
            serde_json::from_str(r#"{"id":"t-2","status":"error","error":"no audio"}"#).unwrap();
        assert_eq!(job.error.as_deref(), Some("no audio"));

        let job: TranscriptJob =
            serde_json::from_str(r#"{"id":"t-3","status":"processing"}"#).unwrap();
        assert!(job.text.is_none());
    }

    #[test]
    fn test_transcript_request_carries_language() {
        let request = TranscriptRequest {
            audio_url: "https://cdn.example/upload/1".to_string(),
            speech_model: "universal",
            language_code: Language::Hindi.code().to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["language_code"], "hi");
        assert_eq!(json["speech_model"], "universal");
    }

    #[test]
    fn test_invalid_base64_is_typed_failure() {
        let transcriber = HttpTranscriber::new("https://api.example", "key").unwrap();
        let result = tokio_test::block_on(
            transcriber.transcribe("not base64!!!", Language::English),
        );
        assert!(matches!(result, Err(SaudaError::Transcribe(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transcriber = HttpTranscriber::new("https://api.example/", "key").unwrap();
        assert_eq!(transcriber.base_url, "https://api.example");
    }
}
