use crate::domain::error::TranslateError;
use crate::domain::model::TranslationRequest;
use crate::domain::traits::Translator;
use crate::infrastructure::network::client::OpenAiTranslator;
use crate::state::AppState;
use tracing::info;

/// Translate `text` into the configured destination language
pub async fn translate_selection(state: &AppState, text: &str) -> Result<String, TranslateError> {
    let translator = OpenAiTranslator::new(state.http_client.clone(), &state.config)?;
    translate_with(&translator, text, &state.config.dest_lang).await
}

pub async fn translate_with(
    translator: &dyn Translator,
    text: &str,
    target_lang: &str,
) -> Result<String, TranslateError> {
    // Reject blank input before any request is made
    if text.trim().is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    let request = TranslationRequest::new(text, target_lang);
    let translation = translator.translate(&request).await?;
    info!(target = %target_lang, chars = translation.chars().count(), "translation received");

    Ok(translation)
}
