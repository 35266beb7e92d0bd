use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// Serializing the empty sentinel is a caller bug
    #[error("Empty action id!")]
    EmptyActionId,

    /// Canonical `item-N` / `spell-N-T` string that does not parse
    #[error("invalid action id string '{0}'")]
    InvalidIdString(String),

    /// Structured key JSON that does not decode
    #[error("invalid action id key '{key}': {source}")]
    InvalidKey {
        key: String,
        source: serde_json::Error,
    },

    /// Data source has no entry for the requested id
    #[error("{kind} {id} not found in data source")]
    NotFound { kind: &'static str, id: i32 },

    /// HTTP data source failed to send or decode a request
    #[error("request for {kind} {id} failed: {source}")]
    Request {
        kind: &'static str,
        id: i32,
        source: reqwest::Error,
    },

    /// Static icon database could not be read
    #[error("failed to read icon database '{path}': {source}")]
    DatabaseIo {
        path: String,
        source: std::io::Error,
    },

    /// Static icon database is not valid YAML
    #[error("failed to parse icon database '{path}': {source}")]
    DatabaseParse {
        path: String,
        source: serde_yaml::Error,
    },

    /// A spawned resolution task panicked or was cancelled
    #[error("resolution task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ActionError>;
