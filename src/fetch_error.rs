use reqwest::StatusCode;
use std::fmt;

/// Every way the request can fail. Callers treat all variants the same.
#[derive(Debug)]
pub enum FetchError {
    NetworkError(reqwest::Error),
    StatusError(StatusCode),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::NetworkError(e) => write!(f, "Network error: {}", e),
            FetchError::StatusError(status) => {
                write!(f, "Request failed with status code {}", status.as_u16())
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::NetworkError(e) => Some(e),
            FetchError::StatusError(_) => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::NetworkError(err)
    }
}
