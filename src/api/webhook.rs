use std::time::Duration;

use anyhow::Result;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::client::HttpClient;
use crate::api::normalize::WebhookPayload;
use crate::session::history::{Message, Role};

pub const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n.srv1128584.hstgr.cloud/webhook/b897c235-0dfc-4d29-b285-2c82ff6403fb";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const NO_CONTENT_REPLY: &str =
    "The system processed your request but returned no content. Please check the workflow.";
pub const CONNECTIVITY_REPLY: &str = "I apologize, but I cannot connect to the laboratory system at the moment. Please check your connection or try again later.";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook answered {code} {reason}")]
    Status { code: u16, reason: String },
    #[error("webhook returned no content")]
    NoContent,
}

impl WebhookError {
    /// Text shown to the user in place of an answer.
    pub fn reply_text(&self) -> String {
        match self {
            Self::Transport(_) => CONNECTIVITY_REPLY.to_string(),
            Self::Status { code, reason } => format!("System Error: {} - {}", code, reason),
            Self::NoContent => NO_CONTENT_REPLY.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WebhookRequest<'a> {
    chat_input: &'a str,
    query: &'a str,
    user: &'a str,
    history: Vec<HistoryEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct HistoryEntry<'a> {
    role: Role,
    content: &'a str,
}

/// Forwards chat turns to the assistant's automation webhook.
#[derive(Clone)]
pub struct WebhookClient {
    http: HttpClient,
    endpoint: String,
}

impl WebhookClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self { http: HttpClient::new(timeout)?, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// Sends one turn and returns the messages to show for it.
    ///
    /// Never fails: transport errors, timeouts, HTTP errors and empty answers
    /// each come back as a single model message describing what happened.
    /// One attempt only.
    pub async fn send_message(
        &self,
        history: &[Message],
        new_text: &str,
        user_name: &str,
    ) -> Vec<Message> {
        let content = match self.request(history, new_text, user_name).await {
            Ok(answer) => answer,
            Err(e) => {
                match &e {
                    WebhookError::Transport(err) if err.is_timeout() => warn!("webhook timed out"),
                    WebhookError::Transport(err) => warn!(error = %err, "webhook connection failed"),
                    other => info!(error = %other, "webhook gave no usable answer"),
                }
                e.reply_text()
            }
        };
        vec![Message::model(content)]
    }

    /// The fallible core of [`WebhookClient::send_message`].
    pub async fn request(
        &self,
        history: &[Message],
        new_text: &str,
        user_name: &str,
    ) -> Result<String, WebhookError> {
        let body = WebhookRequest {
            chat_input: new_text,
            query: new_text,
            user: user_name,
            history: history
                .iter()
                .map(|m| HistoryEntry { role: m.role, content: &m.content })
                .collect(),
        };
        debug!(endpoint = %self.endpoint, history = body.history.len(), "posting to webhook");

        let resp = self
            .http
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WebhookError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown Status").to_string(),
            });
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = resp.text().await?;
        WebhookPayload::from_body(content_type.as_deref(), &text)
            .extract_text()
            .ok_or(WebhookError::NoContent)
    }
}
