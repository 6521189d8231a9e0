use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevDisplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source {name} failed: {reason}")]
    Source { name: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Loading was cancelled")]
    Cancelled,

    #[error("Aggregation failed: {0}")]
    Aggregate(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl DevDisplayError {
    pub fn source_failure(name: impl Into<String>, reason: impl ToString) -> Self {
        DevDisplayError::Source {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DevDisplayError>;
