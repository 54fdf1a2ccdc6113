//! Report Synthesizer boundary: hands the assembled context payload to a
//! hosted text-generation service and returns its raw text.
//!
//! The returned report is opaque to the pipeline: no parsing or validation
//! is imposed on it here. A failed call fails the current request; there is
//! no retry and no canned substitute report.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use serde_json::{json, Value};

use crate::config::SynthesisSettings;
use crate::context::ContextPayload;
use crate::error::SynthesisError;

/// Seam over the text-generation boundary, so tests can stub it out.
pub trait ReportSynthesizer {
    fn synthesize(&self, payload: &ContextPayload) -> Result<String, SynthesisError>;
}

/// Client for an OpenAI-compatible chat-completions endpoint. Temperature
/// is kept low so the report stays close to the supplied data.
pub struct ChatSynthesizer {
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl ChatSynthesizer {
    pub fn new(settings: &SynthesisSettings, api_key: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build report synthesis HTTP client")?;
        Ok(Self {
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            api_key,
            client,
        })
    }
}

impl ReportSynthesizer for ChatSynthesizer {
    fn synthesize(&self, payload: &ContextPayload) -> Result<String, SynthesisError> {
        let api_key = self.api_key.as_deref().ok_or(SynthesisError::MissingApiKey {
            env_var: crate::config::API_KEY_ENV,
        })?;

        let body = json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": payload.role},
                {"role": "user", "content": payload.render()},
            ],
        });

        debug!("submitting context payload to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: Value = response.json()?;
        parsed
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or(SynthesisError::EmptyResponse)
    }
}
