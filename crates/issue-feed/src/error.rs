use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to reach the analysis backend: {0}")]
    Transport(String),

    #[error("Failed to decode issue payload: {0}")]
    Decode(String),

    /// A newer fetch was issued while this one was in flight; its result is
    /// discarded instead of overwriting newer data.
    #[error("Response superseded by a newer request")]
    Superseded,
}
