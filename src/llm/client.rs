//! Text-completion service client
//!
//! One prompt in, one text reply out; no conversation state. The same call
//! shape serves keyword extraction, location extraction, and outreach
//! drafting.

use crate::config::LlmConfig;
use crate::error::{Result, ScreenerError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait TextCompletion {
    fn complete(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Gemini generateContent client with a small bounded retry count.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    temperature: f32,
    max_output_tokens: usize,
    max_retries: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: usize,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            max_retries: config.max_retries,
        }
    }

    async fn request_once(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self.http.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScreenerError::LlmService(format!(
                "Completion request failed with {}: {}",
                status, body
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ScreenerError::LlmService(
                "Completion response contained no text".to_string(),
            ));
        }

        Ok(text.trim().to_string())
    }
}

impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!("Sending completion request ({} chars)", prompt.len());

        let mut last_error = None;
        for attempt in 0..=self.max_retries {
            match self.request_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    warn!(
                        "Completion attempt {}/{} failed: {}",
                        attempt + 1,
                        self.max_retries + 1,
                        e
                    );
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(500)).await;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ScreenerError::LlmService("No completion attempts made".into())))
    }
}
