// Main entry point
use clap::Parser;
use colored::Colorize;
use llm_translate::application::translate::translate_selection;
use llm_translate::domain::language::{find_language, language_list};
use llm_translate::infrastructure::config::{self, load_config, Logging};
use llm_translate::interfaces::cli::Cli;
use llm_translate::presentation::output;
use llm_translate::state::AppState;
use std::io::IsTerminal;
use tokio::io::AsyncReadExt;

const POPCLIP_TEXT: &str = "POPCLIP_TEXT";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config()?;
    config.apply_env(|key| std::env::var(key).ok());
    config.apply_overrides(&cli.overrides());

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }
    tracing::debug!(?config, "configuration loaded");

    // Handle commands (flags)
    if cli.list_languages {
        print!("{}", output::render_language_list(&language_list(), cli.json)?);
        return Ok(());
    }
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path().filter(|p| p.exists()) {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!(
                "{}",
                "Config file not found, run with --generate-config first".red()
            );
        }
        return Ok(());
    }
    if cli.status {
        let path = config::get_config_path();
        print!("{}", output::render_status(&config, path.as_deref()));
        return Ok(());
    }

    let popclip = std::env::var_os(POPCLIP_TEXT).is_some();

    let text = match read_input(&cli).await? {
        Some(text) => text,
        None => {
            eprintln!("{}", "Please provide text to translate".red());
            std::process::exit(1);
        }
    };

    if find_language(&config.dest_lang).is_none() {
        tracing::warn!(code = %config.dest_lang, "unknown destination language, passing code to the model");
    }

    let state = AppState::new(config)?;

    let result = tokio::select! {
        result = translate_selection(&state, &text) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            std::process::exit(130);
        }
    };

    println!("{}", output::render_outcome(&result, cli.json));

    // PopClip only displays output from a successful exit
    if result.is_err() && !popclip {
        std::process::exit(1);
    }

    Ok(())
}

/// Text from arguments, then $POPCLIP_TEXT, then piped stdin
async fn read_input(cli: &Cli) -> anyhow::Result<Option<String>> {
    if let Some(text) = cli.inline_text() {
        return Ok(Some(text));
    }
    if let Ok(text) = std::env::var(POPCLIP_TEXT) {
        return Ok(Some(text));
    }
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buf = String::new();
    tokio::io::stdin().read_to_string(&mut buf).await?;
    Ok(Some(buf))
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return Ok(());
    }

    // Log to stderr so stdout stays clean for the host
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
