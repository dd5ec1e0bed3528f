use thiserror::Error;

pub type Result<T> = std::result::Result<T, StilError>;

#[derive(Debug, Error)]
pub enum StilError {
    #[error("trigger container not found: {selector}")]
    MissingContainer { selector: String },

    #[error("persisted record under `{key}` is corrupted: {source}")]
    CorruptRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("host error: {message}")]
    Host { message: String },

    #[error("unknown theme key: {name}")]
    UnknownThemeKey { name: String },

    #[error("invalid config: {source}")]
    InvalidConfig {
        #[source]
        source: serde_json::Error,
    },
}

impl StilError {
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn missing_container(selector: impl Into<String>) -> Self {
        Self::MissingContainer {
            selector: selector.into(),
        }
    }
}
