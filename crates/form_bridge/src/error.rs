use thiserror::Error;

/// Everything that can go wrong between a submit event and the page update.
///
/// The bridge handles every variant the same way (log, leave the page alone);
/// the variants only exist so the log line says what happened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("config error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(String),

    #[error("invalid json: {0}")]
    InvalidJson(String),

    #[error("response is not a json object")]
    NotAnObject,

    #[error("mock replies exhausted")]
    MockExhausted,
}
