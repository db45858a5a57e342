//! OpenAI-shaped completion gateway
//!
//! Availability over correctness: a tutoring or analysis request must never
//! fail because the upstream provider did. The fallible layer lives in
//! `try_complete` / `try_open_stream`; everything public degrades to the
//! canned fallback payloads.

use async_trait::async_trait;
use futures::stream;
use serde::Deserialize;
use tracing::{error, info};

use super::stream::fragments;
use crate::config::UpstreamConfig;
use crate::domain::{
    CompletionGateway, DomainError, FragmentStream, FALLBACK_REPLY, STREAM_FALLBACK_REPLY,
};
use crate::infrastructure::http::{ByteStream, HttpClientTrait};

/// Gateway to a single OpenAI-compatible chat-completions endpoint.
///
/// Holds the process-wide upstream profile (endpoint, credential, model,
/// generation limits), read once at startup and immutable afterwards.
pub struct OpenAiGateway<C: HttpClientTrait> {
    client: C,
    config: UpstreamConfig,
    url: String,
}

impl<C: HttpClientTrait> OpenAiGateway<C> {
    pub fn new(client: C, config: UpstreamConfig) -> Self {
        let url = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        info!(base_url = %config.base_url, model = %config.model, "Completion gateway initialized");

        Self {
            client,
            config,
            url,
        }
    }

    fn build_body(&self, system_prompt: &str, user_message: &str, stream: bool) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                {"role": "system", "content": system_prompt},
                {"role": "user", "content": user_message},
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "stream": stream,
        })
    }

    async fn try_complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, DomainError> {
        let body = self.build_body(system_prompt, user_message, false);
        let response = self
            .client
            .post_json(&self.url, &self.config.api_key, &body)
            .await?;

        extract_content(response)
    }

    async fn try_open_stream(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<ByteStream, DomainError> {
        let body = self.build_body(system_prompt, user_message, true);
        self.client
            .post_json_stream(&self.url, &self.config.api_key, &body)
            .await
    }
}

#[async_trait]
impl<C: HttpClientTrait> CompletionGateway for OpenAiGateway<C> {
    async fn complete(&self, system_prompt: &str, user_message: &str) -> String {
        match self.try_complete(system_prompt, user_message).await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "Error calling completion API");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn complete_stream(&self, system_prompt: &str, user_message: &str) -> FragmentStream {
        match self.try_open_stream(system_prompt, user_message).await {
            Ok(bytes) => fragments(bytes),
            Err(e) => {
                error!(error = %e, "Error opening streaming completion");
                Box::pin(stream::iter([STREAM_FALLBACK_REPLY.to_string()]))
            }
        }
    }
}

/// Assistant text at `choices[0].message.content`; anything else about the
/// envelope is an upstream protocol failure.
fn extract_content(response: serde_json::Value) -> Result<String, DomainError> {
    let envelope: CompletionEnvelope = serde_json::from_value(response)
        .map_err(|e| DomainError::provider(format!("Malformed response envelope: {e}")))?;

    envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| DomainError::provider("Response carried no assistant content"))
}

#[derive(Debug, Deserialize)]
struct CompletionEnvelope {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}
