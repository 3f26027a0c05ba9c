use serde_json::{Map, Value};

const ANSWER_KEYS: &[&str] = &["output", "text", "answer", "message", "result"];
const WORKFLOW_STARTED: &str = "Workflow was started";

/// Shape of a webhook response body.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookPayload {
    Text(String),
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
    /// Numbers, booleans and null.
    Unknown,
}

impl WebhookPayload {
    /// Parses `body` as JSON when the content type says so, otherwise keeps
    /// it as text. A JSON content type with an unparsable body falls back to
    /// text as well.
    pub fn from_body(content_type: Option<&str>, body: &str) -> Self {
        let is_json = content_type
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            return Self::Text(body.to_string());
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from(value),
            Err(e) => {
                tracing::debug!(error = %e, "json content type but body did not parse; using raw text");
                Self::Text(body.to_string())
            }
        }
    }

    /// The answer carried by this payload, or `None` when there is nothing
    /// worth showing.
    pub fn extract_text(&self) -> Option<String> {
        let raw = match self {
            Self::Text(s) => s.clone(),
            Self::Sequence(items) => match items.first() {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Object(map)) => search_keys(map),
                Some(nested @ Value::Array(_)) => nested.to_string(),
                _ => String::new(),
            },
            Self::Mapping(map) => search_keys(map),
            Self::Unknown => String::new(),
        };
        usable(raw)
    }
}

impl From<Value> for WebhookPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Mapping(map),
            _ => Self::Unknown,
        }
    }
}

fn search_keys(map: &Map<String, Value>) -> String {
    ANSWER_KEYS
        .iter()
        .find_map(|key| non_empty_str(map.get(*key)))
        .or_else(|| non_empty_str(map.get("json").and_then(|j| j.get("text"))))
        .map(str::to_string)
        .unwrap_or_else(|| Value::Object(map.clone()).to_string())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn usable(text: String) -> Option<String> {
    let placeholder = text.trim().is_empty() || text == "{}" || text.contains(WORKFLOW_STARTED);
    (!placeholder).then_some(text)
}
