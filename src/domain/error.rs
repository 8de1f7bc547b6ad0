use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Invalid API key - check your configuration")]
    InvalidApiKey,

    #[error("Rate limit exceeded - try again later")]
    RateLimited,

    #[error("API Error: {0}")]
    Api(String),

    #[error("Translation failed (Status: {0})")]
    Status(u16),

    #[error("Network error - check your connection")]
    Network(#[source] reqwest::Error),

    #[error("Translation failed: No translation received from API")]
    EmptyResponse,

    #[error("No text to translate")]
    EmptyInput,

    #[error("API key not configured")]
    MissingApiKey,

    #[error("Translation failed: {0}")]
    Failed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranslateError {
    /// Classify a non-success HTTP response.
    ///
    /// 401 and 429 get fixed messages. Otherwise an `error` member in a JSON
    /// body is surfaced as an API error, and anything else reports the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 => Self::InvalidApiKey,
            429 => Self::RateLimited,
            _ => match api_error_message(body) {
                Some(message) => Self::Api(message),
                None => Self::Status(status),
            },
        }
    }

    /// Whether the failure happened before any response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            return Self::Network(err);
        }
        Self::Failed(err.to_string())
    }
}

// Providers disagree on the shape: `{"error": {"message": ...}}` is the
// OpenAI form, some proxies send `{"error": "..."}`.
fn api_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;

    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => Some(message.to_string()),
            _ => Some(error.to_string()),
        },
        other => Some(other.to_string()),
    }
}
