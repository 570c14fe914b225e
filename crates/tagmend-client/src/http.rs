//! OpenAI-compatible chat-completions client
//!
//! One HTTP round trip per collaborator call. Network and API failures are
//! surfaced as [`Error::Collaborator`] with the upstream message passed
//! through verbatim; replies that parse but violate the output contract are
//! [`Error::UnexpectedResponse`]. The API key comes from `TAGMEND_API_KEY`
//! only; a missing key is a configuration error raised at construction,
//! before any request is attempted.

use async_trait::async_trait;
use reqwest::Client as Http;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tagmend_core::{CorrectionSet, Error, Result};
use tracing::debug;

use crate::wire::parse_correction_payload;
use crate::Collaborator;

/// Environment variable holding the collaborator credential.
pub const API_KEY_ENV: &str = "TAGMEND_API_KEY";

const CORRECTION_SYSTEM_PROMPT: &str = "\
You are an HTML/CSS reviewer. You receive an HTML file and a CSS file and \
review them line by line. Respond with a JSON object only, no prose, of the \
shape {\"html\": [...], \"css\": [...]} where each array has exactly one \
entry per input line, in order: {\"lineNumber\": <1-indexed line>, \
\"original\": <the line as given>, \"corrected\": <the fixed line>, \
\"isError\": <bool>, \"explanation\": <why, empty when isError is false>}. \
When a line has no issue, \"corrected\" must equal \"original\" and \
\"isError\" must be false. An empty file gets an empty array.";

const CHAT_SYSTEM_PROMPT: &str = "\
You are a concise assistant answering questions about the user's HTML and \
CSS. Answer in plain text; you may use **bold** and '- ' bullet lists.";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// HTTP implementation of [`Collaborator`].
#[derive(Clone, Debug)]
pub struct HttpCollaborator {
    http: Http,
    api_key: String,
    model: String,
    base_url: String,
}

impl HttpCollaborator {
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self> {
        let http = Http::builder()
            .pool_max_idle_per_host(8)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key,
            model,
            base_url,
        })
    }

    /// Pick up the credential from `TAGMEND_API_KEY`.
    pub fn from_env(model: String, base_url: String) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::config(format!("{API_KEY_ENV} not set")))?;
        Self::new(api_key, model, base_url)
    }

    async fn chat(&self, messages: &[ChatMessage], json_object: bool) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let msgs: Vec<Value> = messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                };
                json!({ "role": role, "content": m.content })
            })
            .collect();

        let mut body = json!({
            "model": self.model,
            "messages": msgs,
            "temperature": 0.0
        });
        if json_object {
            if let Some(obj) = body.as_object_mut() {
                obj.insert(
                    "response_format".into(),
                    json!({ "type": "json_object" }),
                );
            }
        }

        debug!(model = %self.model, json_object, "collaborator request");

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::collaborator(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::collaborator(format!("{status}: {text}")));
        }

        let v: Value = resp
            .json()
            .await
            .map_err(|e| Error::collaborator(format!("invalid response body: {e}")))?;
        let content = v
            .pointer("/choices/0/message/content")
            .and_then(|x| x.as_str())
            .ok_or_else(|| {
                Error::unexpected_response("missing choices[0].message.content")
            })?;
        Ok(content.to_string())
    }
}

#[async_trait]
impl Collaborator for HttpCollaborator {
    async fn request_corrections(&self, html: &str, css: &str) -> Result<CorrectionSet> {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: CORRECTION_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: format!("HTML file:\n{html}\n\nCSS file:\n{css}"),
            },
        ];

        let reply = self.chat(&messages, true).await?;
        parse_correction_payload(&reply, html, css)
    }

    async fn ask(&self, html: &str, css: &str, question: &str) -> Result<String> {
        let messages = vec![
            ChatMessage {
                role: Role::System,
                content: CHAT_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: Role::User,
                content: format!(
                    "HTML file:\n{html}\n\nCSS file:\n{css}\n\nQuestion: {question}"
                ),
            },
        ];

        self.chat(&messages, false).await
    }
}
