// HTTP client utilities
use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("llm-translate/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for the completion call
pub fn create_client(config: &Config) -> Result<Client, TranslateError> {
    let mut builder = Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(config.timeout_secs.max(1)))
        .user_agent(USER_AGENT);

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| TranslateError::Config(format!("Invalid http_proxy: {}", e)))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| TranslateError::Config(format!("Failed to build HTTP client: {}", e)))
}
