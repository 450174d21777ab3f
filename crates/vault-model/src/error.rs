use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown processing type '{0}' (run `text-vault types` for the list)")]
    InvalidProcessingType(String),
    #[error("invalid entry id '{0}'")]
    InvalidEntryId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
