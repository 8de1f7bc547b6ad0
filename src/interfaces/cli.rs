use crate::infrastructure::config::Overrides;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "llmt")]
#[command(about = "Translate selected text using OpenAI-compatible LLM APIs.")]
#[command(version)]
pub struct Cli {
    /// Destination language code (e.g. en, de, zh-Hans)
    #[arg(short = 't', long = "to")]
    pub dest_lang: Option<String>,

    /// Model to use for translation
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Base URL of the API endpoint
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// API key (prefer the config file or POPCLIP_OPTION_APIKEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// List supported destination languages
    #[arg(long)]
    pub list_languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Edit configuration file
    #[arg(long)]
    pub edit_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate (defaults to $POPCLIP_TEXT, then stdin)
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            api_endpoint: self.endpoint.clone(),
            api_model: self.model.clone(),
            dest_lang: self.dest_lang.clone(),
        }
    }

    /// Positional text joined with spaces, if any was given
    pub fn inline_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}
