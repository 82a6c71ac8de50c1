use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single HTTP exchange with the provider service.
///
/// These never reach the user directly; the client logs them and records the
/// fixed message of the operation that failed.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub type ApiResult<T> = Result<T, ApiError>;
