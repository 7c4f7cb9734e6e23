use thiserror::Error;

use crate::client::ApiResponse;

/// Errors surfaced by API calls
///
/// Nothing is retried or rewritten here: a transport failure, a non-2xx
/// response or an undecodable body reaches the caller as-is.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or a request that could not be built
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-2xx status; the full response is kept
    #[error("Request failed with status code {}", .0.status().as_u16())]
    Status(Box<ApiResponse>),
    /// Response body did not match the requested type
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Base URL and path did not resolve to a valid URL
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl ApiError {
    /// The failed response, when the server answered at all
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Status(response) => Some(response),
            _ => None,
        }
    }

    /// Status of the failed response; transport and decode errors have none
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.response().map(ApiResponse::status)
    }
}

/// Errors from building or querying the route table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("No route named '{0}'")]
    UnknownRoute(String),
    #[error("Missing required param '{param}' for route '{route}'")]
    MissingParam { route: String, param: String },
    #[error("No route matches '{0}'")]
    NoMatch(String),
}
