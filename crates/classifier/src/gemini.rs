use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use cysafe_common::error::{CysafeError, CysafeResult};

use crate::engine::{Verdict, VerdictLabel};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Remote variant of the link checker: asks a Gemini model for a
/// safe / suspicious / malicious call and passes its explanation through
/// as the summary. Produces no per-rule matches.
#[derive(Clone)]
pub struct GeminiClassifier {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiClassifier {
    pub fn new(api_key: String, model: String) -> CysafeResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| CysafeError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
        })
    }

    /// Point the classifier at a different endpoint (test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn prompt(url: &str) -> String {
        format!(
            "You are a cybersecurity assistant. Analyze this URL and classify it as either \
             'Likely safe', 'Suspicious', or 'Likely malicious'. Explain briefly why in \
             simple language. URL: {url}"
        )
    }

    pub async fn classify(&self, url: &str) -> CysafeResult<Verdict> {
        if url.trim().is_empty() {
            return Err(CysafeError::EmptyInput("no URL provided".to_string()));
        }

        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt(url),
                }],
            }],
        };

        let response = self
            .client
            .post(&endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| CysafeError::Upstream(format!("gemini request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(CysafeError::Upstream(format!(
                "gemini returned {}",
                response.status()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CysafeError::Upstream(format!("gemini response unreadable: {e}")))?;

        let text = body
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                CysafeError::Upstream("unexpected response from Gemini API".to_string())
            })?;

        Ok(Verdict {
            label: label_from_text(&text),
            summary: text,
            matches: Vec::new(),
        })
    }
}

/// Recover a verdict label from the model's free text. Anything the model
/// neither calls safe nor malicious is treated as suspicious.
fn label_from_text(text: &str) -> VerdictLabel {
    let lower = text.to_lowercase();
    if lower.contains("likely malicious") {
        VerdictLabel::LikelyMalicious
    } else if lower.contains("likely safe") {
        VerdictLabel::LikelySafe
    } else {
        VerdictLabel::Suspicious
    }
}
