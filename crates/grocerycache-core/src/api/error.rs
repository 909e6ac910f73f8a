use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of a response body kept in an error
const BODY_SNIPPET_LIMIT: usize = 500;

/// Why a catalog fetch failed. Every variant sends the loader to the snapshot.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Catalog request returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Could not reach the catalog service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Catalog body is not a product list: {0}")]
    MalformedBody(String),
}

impl ApiError {
    /// Build an error for a non-success response, keeping a bounded body snippet.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        ApiError::Status {
            status,
            body: snippet(body),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status(),
            ApiError::MalformedBody(_) => None,
        }
    }

    /// Failures that may clear up on their own: connectivity, throttling, 5xx.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            ApiError::MalformedBody(_) => false,
        }
    }
}

fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_LIMIT {
        return body.to_string();
    }
    let end = (0..=BODY_SNIPPET_LIMIT)
        .rev()
        .find(|&i| body.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}... ({} bytes)", &body[..end], body.len())
}
