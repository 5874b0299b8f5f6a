//! OpenAI-compatible API client speaking `/chat/completions`.

use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{ChatResponse, LlmError, Message};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    /// # Errors
    ///
    /// Returns an [`LlmError`] on transport failure, non-200 status, or an
    /// unparseable body.
    pub async fn chat(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        messages: &[Message],
    ) -> Result<ChatResponse, LlmError> {
        let mut wire_messages = Vec::with_capacity(messages.len() + 1);
        wire_messages.push(Message { role: "system".into(), content: system.to_owned() });
        wire_messages.extend(messages.iter().cloned());

        let body = ApiRequest { model, max_completion_tokens: max_tokens, messages: &wire_messages };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_completion_tokens: u32,
    messages: &'a [Message],
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
    model: String,
    usage: Usage,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(serde::Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(serde::Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

fn parse_response(json: &str) -> Result<ChatResponse, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = api
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LlmError::ApiParse("response carried no message content".into()))?;

    Ok(ChatResponse {
        text,
        model: api.model,
        input_tokens: api.usage.prompt_tokens,
        output_tokens: api.usage.completion_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_response_takes_first_choice() {
        let json = r#"{
            "choices": [{"message": {"role": "assistant", "content": "hi"}}],
            "model": "gpt-4o",
            "usage": {"prompt_tokens": 7, "completion_tokens": 2}
        }"#;
        let response = parse_response(json).unwrap();
        assert_eq!(response.text, "hi");
        assert_eq!(response.output_tokens, 2);
    }

    #[test]
    fn parse_response_requires_content() {
        let json = r#"{"choices": [{"message": {"role": "assistant"}}], "model": "m", "usage": {"prompt_tokens": 0, "completion_tokens": 0}}"#;
        assert!(matches!(parse_response(json), Err(LlmError::ApiParse(_))));
    }
}
