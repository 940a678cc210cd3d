use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown confidence level: {0}")]
    ParseConfidence(String),
}
