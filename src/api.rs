//! Non-streaming client for OpenAI-compatible chat completion endpoints.
//!
//! Both the completion and the translation services talk to the same kind
//! of endpoint; this module owns the wire format and the HTTP round trip.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message<'a>],
    stream: bool,
}

/// A single message in a chat completion request.
#[derive(Debug, Serialize)]
pub struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

impl<'a> Message<'a> {
    pub fn system(content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<Cow<'a, str>>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// HTTP connection to one OpenAI-compatible endpoint.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ChatApi {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    /// Sends one chat completion request and returns the assistant text.
    ///
    /// A single round trip: no retry and no streaming.
    pub async fn chat(&self, model: &str, messages: &[Message<'_>]) -> Result<String> {
        let url = self.completions_url();

        let chat_request = ChatCompletionRequest {
            model,
            messages,
            stream: false,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        parse_completion(&body)
    }
}

/// Extracts the first choice's message content from a response body.
fn parse_completion(body: &str) -> Result<String> {
    let response: ChatCompletionResponse =
        serde_json::from_str(body).context("Failed to parse API response")?;

    response
        .choices
        .into_iter()
        .find_map(|c| c.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| anyhow::anyhow!("API response contained no content"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_completion_with_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hello"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "Hello");
    }

    #[test]
    fn test_parse_completion_unicode_content() {
        let body = r#"{"choices":[{"message":{"content":"नमस्ते"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "नमस्ते");
    }

    #[test]
    fn test_parse_completion_skips_null_content() {
        let body = r#"{"choices":[{"message":{"content":null}},{"message":{"content":"second"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "second");
    }

    #[test]
    fn test_parse_completion_no_choices() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no content"));
    }

    #[test]
    fn test_parse_completion_empty_content() {
        let body = r#"{"choices":[{"message":{"content":""}}]}"#;
        assert!(parse_completion(body).is_err());
    }

    #[test]
    fn test_parse_completion_invalid_json() {
        let err = parse_completion("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let api = ChatApi::new("http://localhost:11434/".to_string(), None);
        assert_eq!(
            api.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_serialization() {
        let messages = [Message::system("be brief"), Message::user("User: hi\nAI:")];
        let request = ChatCompletionRequest {
            model: "gemma3:12b",
            messages: &messages,
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gemma3:12b");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "User: hi\nAI:");
    }
}
