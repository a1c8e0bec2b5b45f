use thiserror::Error;

pub const MISSING_REQUIRED_INFORMATION: &str = "missing required information";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockingError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Persistence(String),
}

impl BlockingError {
    pub fn missing_information() -> Self {
        BlockingError::InvalidInput(MISSING_REQUIRED_INFORMATION.to_string())
    }

    /// Stable machine-readable code, used as the GraphQL error extension.
    pub fn code(&self) -> &'static str {
        match self {
            BlockingError::InvalidInput(_) => "INVALID_INPUT",
            BlockingError::NotFound(_) => "NOT_FOUND",
            BlockingError::Persistence(_) => "PERSISTENCE_ERROR",
        }
    }
}

impl From<sqlx::Error> for BlockingError {
    fn from(err: sqlx::Error) -> Self {
        BlockingError::Persistence(err.to_string())
    }
}
