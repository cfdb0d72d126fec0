//! Interactive prompts for the campaign wizard.
//!
//! Every prompt has a flag equivalent. In batch mode, or when stdin is not a
//! terminal, a missing value is an error naming the flag to pass instead.

use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use multiad_core::ads::Overrides;
use std::collections::HashMap;
use std::io::{self, IsTerminal};

/// Options for prompting behavior.
#[derive(Debug, Clone, Default)]
pub struct PromptOptions {
    /// If true, fail on missing values instead of prompting.
    pub batch_mode: bool,
}

impl PromptOptions {
    pub fn is_interactive(&self) -> bool {
        !self.batch_mode && io::stdin().is_terminal()
    }
}

/// Error type for value collection.
#[derive(Debug)]
pub enum PromptError {
    /// Missing required value in batch mode; holds the flag name.
    MissingRequired(String),
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::MissingRequired(flag) => {
                write!(f, "missing required value: {flag}\n  Hint: pass {flag} or run without --batch in a terminal")
            }
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Free-text value: the flag value if given, else a prompt.
pub fn text(
    given: Option<String>,
    prompt: &str,
    flag: &str,
    default: Option<&str>,
    options: &PromptOptions,
) -> Result<String, PromptError> {
    if let Some(v) = given {
        return Ok(v);
    }
    if !options.is_interactive() {
        return match default {
            Some(d) => Ok(d.to_string()),
            None => Err(PromptError::MissingRequired(flag.to_string())),
        };
    }

    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(d) = default {
        input = input.default(d.to_string());
    }
    input.interact_text().map_err(dialoguer_error_to_prompt_error)
}

/// Numeric value, re-prompting until it parses.
pub fn number(
    given: Option<f64>,
    prompt: &str,
    flag: &str,
    options: &PromptOptions,
) -> Result<f64, PromptError> {
    if let Some(v) = given {
        return Ok(v);
    }
    if !options.is_interactive() {
        return Err(PromptError::MissingRequired(flag.to_string()));
    }

    Input::<f64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)
}

/// One of `items`, by index.
pub fn choose_one(
    prompt: &str,
    flag: &str,
    items: &[&str],
    options: &PromptOptions,
) -> Result<usize, PromptError> {
    if !options.is_interactive() {
        return Err(PromptError::MissingRequired(flag.to_string()));
    }

    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(dialoguer_error_to_prompt_error)?
        .ok_or(PromptError::Cancelled)
}

/// Zero or more of `items`, by index. Skipped when non-interactive.
pub fn choose_many(
    prompt: &str,
    items: &[String],
    options: &PromptOptions,
) -> Result<Vec<usize>, PromptError> {
    if !options.is_interactive() || items.is_empty() {
        return Ok(Vec::new());
    }

    MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .interact_opt()
        .map_err(dialoguer_error_to_prompt_error)?
        .ok_or(PromptError::Cancelled)
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}

/// Parse --var arguments into a HashMap.
///
/// Expected format: `key=value`. An argument without `=` or with an empty key
/// is an error.
pub fn parse_var_args(args: &[String]) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();
    for arg in args {
        let (key, value) = split_key_value(arg)
            .ok_or_else(|| format!("invalid --var '{arg}': expected KEY=VALUE"))?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Parse --override arguments into per-location custom values.
///
/// Expected format: `location-id:key=value`.
pub fn parse_override_args(args: &[String]) -> Result<Overrides, String> {
    let mut overrides = Overrides::new();
    for arg in args {
        let parsed = arg
            .split_once(':')
            .filter(|(id, _)| !id.is_empty())
            .and_then(|(id, rest)| split_key_value(rest).map(|(k, v)| (id, k, v)));
        let Some((id, key, value)) = parsed else {
            return Err(format!("invalid --override '{arg}': expected ID:KEY=VALUE"));
        };
        overrides
            .entry(id.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
    Ok(overrides)
}

fn split_key_value(s: &str) -> Option<(&str, &str)> {
    s.split_once('=').filter(|(k, _)| !k.is_empty())
}
