use crate::domain::error::TranslateError;
use crate::domain::language::language_name;
use crate::domain::model::{
    ChatMessage, ChatRequest, ChatResponse, TranslationRequest, MAX_COMPLETION_TOKENS,
    SYSTEM_PROMPT,
};
use crate::domain::traits::Translator;
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, warn};

/// Client for any server speaking the OpenAI chat completions API
pub struct OpenAiTranslator {
    client: Client,
    url: String,
    api_key: String,
    model: String,
}

impl OpenAiTranslator {
    pub fn new(client: Client, config: &Config) -> Result<Self, TranslateError> {
        let api_key = config.api_key().ok_or(TranslateError::MissingApiKey)?;

        Ok(Self {
            client,
            url: config.completions_url(),
            api_key: api_key.to_string(),
            model: config.api_model.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// User turn asking for a translation into `target_lang`
pub fn user_prompt(text: &str, target_lang: &str) -> String {
    format!(
        "Translate the following text to {}:\n\n\"{}\"",
        language_name(target_lang),
        text
    )
}

pub fn build_messages(request: &TranslationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(&request.text, &request.target_lang)),
    ]
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let body = ChatRequest {
            model: &self.model,
            messages: build_messages(request),
            max_completion_tokens: MAX_COMPLETION_TOKENS,
        };

        debug!(
            url = %self.url,
            model = %self.model,
            target = %request.target_lang,
            chars = request.text.chars().count(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                TranslateError::from(e)
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = TranslateError::from_response(status.as_u16(), &text);
            warn!(status = status.as_u16(), error = %err, "API returned an error");
            return Err(err);
        }

        let text = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| TranslateError::Failed(format!("invalid response body: {}", e)))?;

        parsed.first_content().ok_or(TranslateError::EmptyResponse)
    }
}
