use std::fmt;

use async_trait::async_trait;

use crate::Mode;

/// Errors that can occur while talking to the simulation server.
/// `Network` and `Status` are transport-class failures; `MalformedResponse`
/// means the server answered but not with something we can render.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Backend misconfigured (unparseable base URL, client build failure).
    Config(String),
    /// Connection refused, DNS failure, timeout, broken body stream.
    Network(String),
    /// Server answered with a non-2xx status.
    Status { status: u16, message: String },
    /// Body was not JSON or had no usable `output` field.
    MalformedResponse(String),
    /// The selected protocol has no endpoint for the requested mode.
    Unsupported(String),
}

impl ApiError {
    /// True for the transport-class failures (no response or a non-2xx one).
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Status { .. })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(msg) => write!(f, "config error: {msg}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, message } => {
                write!(f, "server error (HTTP {status}): {message}")
            }
            ApiError::MalformedResponse(msg) => write!(f, "malformed response: {msg}"),
            ApiError::Unsupported(msg) => write!(f, "unsupported: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[async_trait]
pub trait AutomataBackend: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Runs `input` through the automaton selected by `mode` and returns the
    /// server's `output` text.
    async fn simulate(&self, mode: Mode, input: &str) -> Result<String, ApiError>;

    /// Checks that the server is reachable.
    async fn health(&self) -> Result<(), ApiError>;
}
