//! Error types for the setup binary and its supporting modules

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to parse environment variable {name} = '{value}': {reason}")]
    InvalidEnvVar {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid key script token '{0}'. Valid tokens: {valid}", valid = crate::script::VALID_TOKENS)]
    InvalidScriptToken(String),

    #[error("Key script ended before the setup screen was closed")]
    ScriptExhausted,

    #[error("Cannot prepare log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode credentials: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Screen error: {0}")]
    Screen(String),
}

impl From<anyhow::Error> for SetupError {
    fn from(err: anyhow::Error) -> Self {
        SetupError::Screen(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SetupError>;
