use crate::utils::error::{FixturesError, Result};
use regex::{Captures, Regex};
use serde_json::Value;
use std::path::Path;
use std::sync::OnceLock;

fn env_placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder regex"))
}

/// Replaces `${VAR}` with the value of the environment variable.
/// Unset variables are left untouched.
pub fn substitute_env_vars(content: &str) -> String {
    env_placeholder()
        .replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            std::env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

pub fn parse_toml_config(content: &str) -> Result<Value> {
    let processed = substitute_env_vars(content);
    let table: toml::Table = toml::from_str(&processed)?;
    Ok(serde_json::to_value(table)?)
}

pub fn parse_json_config(content: &str) -> Result<Value> {
    let processed = substitute_env_vars(content);
    Ok(serde_json::from_str(&processed)?)
}

/// Loads the configuration blob from a `.toml` or `.json` file.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml_config(&content),
        Some("json") => parse_json_config(&content),
        other => Err(FixturesError::ConfigError {
            message: format!(
                "Unsupported configuration format {:?} for {}, expected .toml or .json",
                other.unwrap_or(""),
                path.display()
            ),
        }),
    }
}
