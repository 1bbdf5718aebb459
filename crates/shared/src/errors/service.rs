use crate::errors::{auth::AuthError, request::RequestError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Malformed report response: {0}")]
    MalformedResponse(String),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ServiceError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ServiceError::Auth(_))
    }
}
