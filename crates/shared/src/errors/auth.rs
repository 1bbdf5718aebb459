use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to read key file {path}: {source}")]
    KeyFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed key file {path}: {source}")]
    KeyFileParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid private key: {0}")]
    InvalidKey(#[source] JwtError),

    #[error("Failed to sign assertion: {0}")]
    Signing(#[source] JwtError),

    #[error("Token request rejected ({status}): {body}")]
    TokenRejected { status: u16, body: String },

    #[error("Token endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}
