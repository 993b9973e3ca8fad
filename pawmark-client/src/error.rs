use thiserror::Error;

/// Client-side failures. `Api` carries the server's `error` envelope field
/// when one was present, otherwise a message synthesized from the status.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Api(String),

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}
