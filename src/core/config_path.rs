use crate::domain::model::CONFIG_KEY;
use crate::domain::ports::ServiceContainer;
use crate::utils::error::{ContainerError, FixturesError, Result};
use serde_json::Value;

pub const FIXTURES_KEY_NOT_FOUND: &str = "Key `fixtures` not found in doctrine configuration.";

/// Safe navigation to `doctrine.fixtures`.
///
/// A null blob, a missing key at either level, or a non-string value all yield `None`.
pub fn extract_fixtures_path(config: &Value) -> Option<&str> {
    config.get("doctrine")?.get("fixtures")?.as_str()
}

/// Reads the configuration blob from the container and returns the fixtures directory.
///
/// The path is returned as configured; whether it exists on disk is not checked here.
pub fn fixtures_path<C: ServiceContainer + ?Sized>(container: &C) -> Result<String> {
    if !container.has(CONFIG_KEY) {
        tracing::warn!("No `{}` service registered", CONFIG_KEY);
        return Err(FixturesError::not_found(format!("{} not found.", CONFIG_KEY)));
    }

    let service = container.get(CONFIG_KEY)?;
    let found = service.kind();
    let config = service.into_config().ok_or_else(|| ContainerError::TypeMismatch {
        key: CONFIG_KEY.to_string(),
        expected: "configuration",
        found,
    })?;

    match extract_fixtures_path(&config) {
        Some(path) => {
            tracing::debug!("Fixtures directory resolved to {}", path);
            Ok(path.to_string())
        }
        None => {
            tracing::warn!("doctrine.fixtures is missing from the configuration");
            Err(FixturesError::not_found(FIXTURES_KEY_NOT_FOUND))
        }
    }
}
