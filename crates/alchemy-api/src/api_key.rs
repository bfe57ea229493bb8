// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated API key
//!
//! The key travels inside the URL path, so it is checked once at construction
//! and kept out of `Debug` output and logs afterwards.
//!
//! ```rust
//! use alchemy_api::ApiKey;
//!
//! let key = ApiKey::new("demo-key").unwrap();
//! assert_eq!(key.as_str(), "demo-key");
//! assert_eq!(format!("{key:?}"), "ApiKey(***)");
//!
//! assert!(ApiKey::new("   ").is_err());
//! assert!(ApiKey::new("key/with/slashes").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

use api_client::{ApiError, ApiResult};
use serde::{Deserialize, Deserializer};

const REDACTED: &str = "***";

/// An API key that is non-empty and safe to embed as a single path segment
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Box<str>);

impl ApiKey {
    /// Validate and wrap a key
    ///
    /// Leading and trailing whitespace is trimmed. The key is rejected if
    /// nothing is left, or if it contains whitespace or any of `/ ? #`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] describing the rejected input
    pub fn new(key: impl Into<String>) -> ApiResult<Self> {
        let key = key.into();
        let key = key.trim();

        if key.is_empty() {
            return Err(ApiError::configuration("API key cannot be empty"));
        }

        if key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#'))
        {
            return Err(ApiError::configuration(
                "API key cannot contain whitespace, '/', '?' or '#'",
            ));
        }

        Ok(Self(key.into()))
    }

    /// The raw key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace every occurrence of the key in `text`
    pub fn redact(&self, text: &str) -> String {
        text.replace(self.as_str(), REDACTED)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({REDACTED})")
    }
}

impl FromStr for ApiKey {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for ApiKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Self::new(key).map_err(serde::de::Error::custom)
    }
}
