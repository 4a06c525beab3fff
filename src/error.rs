use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    /// Unsupported argument, e.g. an unknown scoring method name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid weight profile: {0}")]
    InvalidWeights(String),
}
