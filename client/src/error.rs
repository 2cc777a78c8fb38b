use pokedex_protocol::ParseError;
use thiserror::Error;

/// Failures surfaced by a [`PokeApi`](crate::PokeApi) gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The API answered 404 for the requested resource
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Malformed response: {0}")]
    Parse(#[from] ParseError),
}

impl GatewayError {
    pub(crate) fn network(error: reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
