use serde::{Deserialize, Serialize};

use super::SummarizeError;

/// Output-length bounds for one summarization call, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryBounds {
    pub min_tokens: u32,
    pub max_tokens: u32,
}

/// Abstractive summarization capability.
///
/// The pipeline treats the backend as opaque: given text and length bounds,
/// return a summary. Implementations are blocking; callers that need a
/// wall-clock bound wrap the invocation themselves.
pub trait Summarizer {
    fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizeError>;
}

const SUMMARY_SYSTEM_PROMPT: &str = "You are a clinical documentation assistant. \
Summarize the provided medical report text faithfully. Do not invent findings, \
do not diagnose, and keep the summary within the requested length.";

/// Summarizer backed by a local Ollama instance.
pub struct OllamaSummarizer {
    base_url: String,
    client: reqwest::blocking::Client,
    model: String,
    timeout_secs: u64,
}

impl OllamaSummarizer {
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            model: model.to_string(),
            timeout_secs,
        }
    }

    /// Default Ollama instance at localhost:11434 with a 5-minute timeout.
    pub fn default_local() -> Self {
        Self::new("http://localhost:11434", "medgemma:latest", 300)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the configured model is present on the backend.
    pub fn is_model_available(&self) -> Result<bool, SummarizeError> {
        let models = self.list_models()?;
        Ok(models.iter().any(|m| m.starts_with(&self.model)
            || self.model.starts_with(m.trim_end_matches(":latest"))))
    }

    pub fn list_models(&self) -> Result<Vec<String>, SummarizeError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() {
                SummarizeError::Connection(self.base_url.clone())
            } else {
                SummarizeError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SummarizeError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaTagsResponse = response
            .json()
            .map_err(|e| SummarizeError::ResponseParsing(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    num_predict: u32,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

/// Response body from Ollama /api/tags
#[derive(Deserialize)]
struct OllamaTagsResponse {
    models: Vec<OllamaModel>,
}

#[derive(Deserialize)]
struct OllamaModel {
    name: String,
}

impl Summarizer for OllamaSummarizer {
    fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizeError> {
        let url = format!("{}/api/generate", self.base_url);
        let prompt = format!(
            "Summarize the following medical report text in roughly {} to {} words:\n\n{text}",
            bounds.min_tokens, bounds.max_tokens
        );
        let body = OllamaGenerateRequest {
            model: &self.model,
            prompt: &prompt,
            system: SUMMARY_SYSTEM_PROMPT,
            stream: false,
            options: OllamaOptions {
                num_predict: bounds.max_tokens,
            },
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                SummarizeError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                SummarizeError::Timeout(self.timeout_secs)
            } else {
                SummarizeError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SummarizeError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| SummarizeError::ResponseParsing(e.to_string()))?;

        let summary = parsed.response.trim().to_string();
        if summary.is_empty() {
            return Err(SummarizeError::EmptyOutput);
        }
        Ok(summary)
    }
}

/// Mock summarizer for testing — returns a fixed response.
pub struct MockSummarizer {
    response: String,
}

impl MockSummarizer {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl Summarizer for MockSummarizer {
    fn summarize(&self, _text: &str, _bounds: SummaryBounds) -> Result<String, SummarizeError> {
        Ok(self.response.clone())
    }
}

/// Scripted summarizer for testing multi-call flows.
///
/// Each call pops the next scripted outcome; an `Err` entry becomes a
/// backend failure. Once the script is exhausted, calls echo their input —
/// convenient for asserting what the final re-summarization pass received.
pub struct ScriptedSummarizer {
    script: std::sync::Mutex<std::collections::VecDeque<Result<String, String>>>,
}

impl ScriptedSummarizer {
    pub fn new(script: Vec<Result<String, String>>) -> Self {
        Self {
            script: std::sync::Mutex::new(script.into()),
        }
    }
}

impl Summarizer for ScriptedSummarizer {
    fn summarize(&self, text: &str, _bounds: SummaryBounds) -> Result<String, SummarizeError> {
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());
        match next {
            Some(Ok(summary)) => Ok(summary),
            Some(Err(message)) => Err(SummarizeError::Backend {
                status: 500,
                body: message,
            }),
            None => Ok(text.to_string()),
        }
    }
}
