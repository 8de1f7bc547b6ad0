use crate::domain::error::TranslateError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::create_client;
use reqwest::Client;

pub struct AppState {
    pub config: Config,
    pub http_client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TranslateError> {
        let http_client = create_client(&config)?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
