use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, AcronymError>;

/// Errors produced by core `acronym` operations.
///
/// Searching itself never fails; only loading inputs and validating options do.
#[derive(Debug, thiserror::Error)]
pub enum AcronymError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("failed to read config: {0}")]
    ConfigRead(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AcronymError {
    pub fn dictionary_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DictionaryRead {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_option(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name,
            reason: reason.into(),
        }
    }
}
