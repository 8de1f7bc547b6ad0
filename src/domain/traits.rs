use crate::domain::error::TranslateError;
use crate::domain::model::TranslationRequest;
use async_trait::async_trait;

/// A translation backend
///
/// One call, one answer. Implementations must not retry.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError>;
}
