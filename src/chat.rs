use std::env;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::http_client::http_client;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4";
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f64 = 0.3;

/// Final-phrasing collaborator: turns a stats-grounded system prompt plus
/// the user's query into prose. Failure modes are opaque to the core.
pub trait ChatCompleter {
    fn complete(&self, system_prompt: &str, user_query: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY is not set")?
            .trim()
            .to_string();
        if api_key.is_empty() {
            bail!("OPENAI_API_KEY is empty");
        }
        let base_url = env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        let model = env::var("OPENAI_MODEL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

/// OpenAI-style chat-completions client over the shared blocking client.
pub struct OpenAiChat {
    cfg: ChatConfig,
}

impl OpenAiChat {
    pub fn new(cfg: ChatConfig) -> Self {
        Self { cfg }
    }
}

impl ChatCompleter for OpenAiChat {
    fn complete(&self, system_prompt: &str, user_query: &str) -> Result<String> {
        let client = http_client()?;
        let url = format!("{}/chat/completions", self.cfg.base_url);
        let body = ChatRequest {
            model: &self.cfg.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_query,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        tracing::debug!(model = %self.cfg.model, "requesting chat completion");

        let response: ChatResponse = client
            .post(&url)
            .bearer_auth(&self.cfg.api_key)
            .json(&body)
            .send()
            .context("chat completion request failed")?
            .error_for_status()
            .context("chat completion request rejected")?
            .json()
            .context("chat completion response was not valid json")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .context("chat completion returned no choices")?;
        Ok(choice.message.content.trim().to_string())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
