use crate::domain::error::TranslateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_MODEL: &str = "gpt-5-mini";
pub const DEFAULT_DEST_LANG: &str = "en";

// PopClip exposes extension options as POPCLIP_OPTION_<IDENTIFIER>
pub const ENV_API_KEY: &str = "POPCLIP_OPTION_APIKEY";
pub const ENV_API_ENDPOINT: &str = "POPCLIP_OPTION_APIENDPOINT";
pub const ENV_API_MODEL: &str = "POPCLIP_OPTION_APIMODEL";
pub const ENV_DEST_LANG: &str = "POPCLIP_OPTION_DESTLANG";

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    #[serde(default = "default_api_endpoint")]
    pub api_endpoint: String,
    #[serde(default = "default_api_model")]
    pub api_model: String,
    #[serde(default = "default_dest_lang")]
    pub dest_lang: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: "WARN".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_endpoint: default_api_endpoint(),
            api_model: default_api_model(),
            dest_lang: default_dest_lang(),
            timeout_secs: default_timeout_secs(),
            http_proxy: None,
            logging: Logging::default(),
        }
    }
}

// Keep the secret out of debug output
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_endpoint", &self.api_endpoint)
            .field("api_model", &self.api_model)
            .field("dest_lang", &self.dest_lang)
            .field("timeout_secs", &self.timeout_secs)
            .field("http_proxy", &self.http_proxy)
            .field("logging", &self.logging)
            .finish()
    }
}

// Defaults
fn default_api_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}
fn default_api_model() -> String {
    DEFAULT_API_MODEL.to_string()
}
fn default_dest_lang() -> String {
    DEFAULT_DEST_LANG.to_string()
}
fn default_timeout_secs() -> u64 {
    60
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

/// Per-invocation overrides, e.g. from command-line flags
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_model: Option<String>,
    pub dest_lang: Option<String>,
}

impl Config {
    /// Layer host-provided options on top of the file values.
    ///
    /// Empty values are ignored, so an unset PopClip field keeps the default.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_API_KEY) {
            self.api_key = Some(v);
        }
        if let Some(v) = get(ENV_API_ENDPOINT) {
            self.api_endpoint = v;
        }
        if let Some(v) = get(ENV_API_MODEL) {
            self.api_model = v;
        }
        if let Some(v) = get(ENV_DEST_LANG) {
            self.dest_lang = v;
        }
    }

    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(v) = &overrides.api_key {
            self.api_key = Some(v.clone());
        }
        if let Some(v) = &overrides.api_endpoint {
            self.api_endpoint = v.clone();
        }
        if let Some(v) = &overrides.api_model {
            self.api_model = v.clone();
        }
        if let Some(v) = &overrides.dest_lang {
            self.dest_lang = v.clone();
        }
    }

    /// The configured key, if any non-blank one is set
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Full chat completions URL for the configured endpoint
    pub fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.api_endpoint.trim().trim_end_matches('/')
        )
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("llm-translate").join("config.toml"))
}

pub fn load_config() -> Result<Config, TranslateError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Read config from `path`; a missing or malformed file yields defaults
pub fn load_config_from(path: &Path) -> Result<Config, TranslateError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<(), TranslateError> {
    match get_config_path() {
        Some(path) => write_config_sample(&path),
        None => Err(TranslateError::Config(
            "Cannot determine config directory".to_string(),
        )),
    }
}

pub fn write_config_sample(path: &Path) -> Result<(), TranslateError> {
    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut sample = Config::default();
    sample.api_key = Some(String::new());
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}
