use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Reporting API unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Reporting API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode report response: {0}")]
    Decode(#[from] serde_json::Error),
}
