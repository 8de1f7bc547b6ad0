//! Translate selected text with an OpenAI-compatible chat completion API.
//!
//! Built to run as a PopClip shell-script action: the selection arrives in
//! `POPCLIP_TEXT`, options in `POPCLIP_OPTION_*`, and whatever is printed on
//! stdout is shown to the user.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use domain::error::TranslateError;
pub use domain::language::{language_list, language_name, LanguageList};
