use crate::domain::error::TranslateError;
use crate::domain::language::LanguageList;
use crate::domain::model::Outcome;
use crate::infrastructure::config::Config;
use colored::Colorize;
use std::fmt::Write;
use std::path::Path;

/// Text handed back to the host for display.
///
/// Failures read `Error: <message>` so the host can show them in place of a
/// translation.
pub fn render_outcome(result: &Result<String, TranslateError>, json: bool) -> String {
    if json {
        let outcome = match result {
            Ok(text) => Outcome::Translation(text.clone()),
            Err(e) => Outcome::Error(e.to_string()),
        };
        // Serializing a single string field cannot fail
        return serde_json::to_string(&outcome).unwrap_or_default();
    }

    match result {
        Ok(text) => text.clone(),
        Err(e) => format!("Error: {}", e),
    }
}

/// One `code<TAB>label` line per language, or the raw lists as JSON
pub fn render_language_list(list: &LanguageList, json: bool) -> Result<String, TranslateError> {
    if json {
        return Ok(serde_json::to_string_pretty(list)?);
    }

    let mut output = String::new();
    for (code, name) in list.codes.iter().zip(&list.names) {
        writeln!(output, "{}\t{}", code, name).ok();
    }
    Ok(output)
}

pub fn render_status(config: &Config, config_path: Option<&Path>) -> String {
    let mut output = String::new();
    writeln!(output, "{}", "llm-translate Status".green().bold()).ok();
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━").ok();

    let config_line = match config_path {
        Some(p) if p.exists() => p.display().to_string(),
        Some(p) => format!("{} (not created, using defaults)", p.display()),
        None => "Not found".to_string(),
    };
    writeln!(output, "Config: {}", config_line).ok();
    writeln!(output, "Endpoint: {}", config.api_endpoint).ok();
    writeln!(output, "Model: {}", config.api_model).ok();
    writeln!(
        output,
        "Destination: {} ({})",
        config.dest_lang,
        crate::domain::language::language_name(&config.dest_lang)
    )
    .ok();

    if config.api_key().is_some() {
        writeln!(output, "API Key: Configured").ok();
    } else {
        writeln!(output, "API Key: {}", "Not configured".red()).ok();
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::language::language_list;

    #[test]
    fn test_success_is_printed_verbatim() {
        let out = render_outcome(&Ok("Hallo".to_string()), false);
        assert_eq!(out, "Hallo");
    }

    #[test]
    fn test_failure_is_prefixed() {
        let out = render_outcome(&Err(TranslateError::InvalidApiKey), false);
        assert_eq!(out, "Error: Invalid API key - check your configuration");
    }

    #[test]
    fn test_json_outcome() {
        let out = render_outcome(&Err(TranslateError::Status(500)), true);
        assert_eq!(out, r#"{"error":"Translation failed (Status: 500)"}"#);
    }

    #[test]
    fn test_language_list_lines() {
        let list = language_list();
        let out = render_language_list(&list, false).unwrap();
        assert_eq!(out.lines().count(), list.codes.len());
        assert!(out.contains("de\tGerman / Deutsch\n"));
        assert!(out.contains("en\tEnglish\n"));
    }

    #[test]
    fn test_status_never_shows_key() {
        colored::control::set_override(false);
        let config = Config {
            api_key: Some("sk-very-secret".to_string()),
            ..Default::default()
        };
        let out = render_status(&config, None);
        assert!(out.contains("API Key: Configured"));
        assert!(out.contains("Destination: en (English)"));
        assert!(!out.contains("sk-very-secret"));
    }
}
