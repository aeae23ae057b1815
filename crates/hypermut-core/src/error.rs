use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdjustError {
    #[error("missing required column {0}")]
    MissingColumn(&'static str),
}

pub type Result<T> = std::result::Result<T, AdjustError>;
