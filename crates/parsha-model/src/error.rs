use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid text source key: {0:?}")]
    InvalidTextSource(String),
    #[error("invalid verse coordinate: {0:?} (expected <chapter>:<verse>)")]
    InvalidVerseCoordinate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
