use thiserror::Error;

/// Faults raised by a service container while retrieving a service.
///
/// These are distinct from [`FixturesError::NotFound`]: by the time `get` is
/// called the factory has already confirmed presence, so they surface as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Service `{key}` is not registered in the container")]
    NotRegistered { key: String },

    #[error("Service `{key}` has kind `{found}`, expected `{expected}`")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Service `{key}` could not be created: {reason}")]
    Unavailable { key: String, reason: String },
}

#[derive(Error, Debug)]
pub enum FixturesError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for `{field}` ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Fixture execution failed: {message}")]
    ExecutionError { message: String },
}

impl FixturesError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NotFound(message) if message.starts_with("Key `fixtures`") => {
                "Set `doctrine.fixtures` to the directory holding your fixture classes"
            }
            Self::NotFound(_) => "Register the missing service in the container before creating the command",
            Self::Container(_) => "Check the container factory for the service that failed to load",
            Self::ConfigError { .. } | Self::TomlError(_) | Self::SerializationError(_) => {
                "Check the configuration file syntax"
            }
            Self::InvalidConfigValueError { .. } => "Correct the configuration value and retry",
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::ExecutionError { .. } => "Inspect the fixture that failed and the database state",
        }
    }
}

pub type Result<T> = std::result::Result<T, FixturesError>;
