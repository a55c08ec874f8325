use ::scraper::error::SelectorErrorKind;
use std::path::PathBuf;

/// All errors that can occur while loading a roster or building its view-models.
#[derive(thiserror::Error, Debug)]
pub enum RosterError {
    /// A roster file could not be read.
    #[error("failed to read roster file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A JSON roster document is malformed.
    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A record was rejected by strict validation.
    #[error("record {index} is invalid: {reason}")]
    Validation { index: usize, reason: &'static str },
}

impl<'a> From<SelectorErrorKind<'a>> for RosterError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        RosterError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
