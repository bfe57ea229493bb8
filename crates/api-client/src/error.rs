// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy and HTTP status classification

use alchemy_types::ParseEnumError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used by every request operation
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by API operations
///
/// The first six variants correspond one-to-one with the classified HTTP
/// statuses; [`ApiError::status`] returns that status so callers can branch
/// on it without matching on messages.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// 400, carries the response body verbatim
    #[error("{message}")]
    BadRequest { message: String },

    /// 401
    #[error("Invalid API key")]
    Unauthorized,

    /// 403
    #[error("Access denied")]
    Forbidden,

    /// 404
    #[error("Not found")]
    NotFound,

    /// 429
    #[error("Rate limit exceeded")]
    RateLimited,

    /// 500
    #[error("Internal server error")]
    Upstream,

    /// Connection level failure raised by the transport (DNS, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-error status came back with a body that is not JSON
    #[error("Invalid response format: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The caller passed a value the API does not accept
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Client construction or configuration failed
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ApiError {
    /// HTTP status this error was classified from, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadRequest { .. } => Some(StatusCode::BAD_REQUEST),
            Self::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            Self::Forbidden => Some(StatusCode::FORBIDDEN),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            Self::RateLimited => Some(StatusCode::TOO_MANY_REQUESTS),
            Self::Upstream => Some(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Transport(error) => error.status(),
            Self::InvalidResponse(_)
            | Self::InvalidArgument { .. }
            | Self::Configuration { .. } => None,
        }
    }

    /// Whether the transport gave up waiting for the response
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(error) if error.is_timeout())
    }

    /// Shorthand for an [`ApiError::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Shorthand for an [`ApiError::Configuration`]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<ParseEnumError> for ApiError {
    fn from(value: ParseEnumError) -> Self {
        Self::invalid_argument(value.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(value: url::ParseError) -> Self {
        Self::configuration(format!("invalid URL: {value}"))
    }
}

/// What to do with a response given its status
#[derive(Debug)]
pub enum Disposition {
    /// Parse the body as JSON and hand it back
    Parse,
    /// Fail with [`ApiError::BadRequest`] carrying the body text
    EchoBody,
    /// Fail without reading the body
    Fail(ApiError),
}

/// Classify a response status
///
/// | status | outcome |
/// |---|---|
/// | 400 | [`ApiError::BadRequest`] with the body |
/// | 401 | [`ApiError::Unauthorized`] |
/// | 403 | [`ApiError::Forbidden`] |
/// | 404 | [`ApiError::NotFound`] |
/// | 429 | [`ApiError::RateLimited`] |
/// | 500 | [`ApiError::Upstream`] |
/// | anything else | body parsed as JSON |
pub fn classify_status(status: StatusCode) -> Disposition {
    match status {
        StatusCode::BAD_REQUEST => Disposition::EchoBody,
        StatusCode::UNAUTHORIZED => Disposition::Fail(ApiError::Unauthorized),
        StatusCode::FORBIDDEN => Disposition::Fail(ApiError::Forbidden),
        StatusCode::NOT_FOUND => Disposition::Fail(ApiError::NotFound),
        StatusCode::TOO_MANY_REQUESTS => Disposition::Fail(ApiError::RateLimited),
        StatusCode::INTERNAL_SERVER_ERROR => Disposition::Fail(ApiError::Upstream),
        _ => Disposition::Parse,
    }
}
