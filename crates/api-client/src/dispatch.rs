// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Sending prepared requests and normalizing their outcome

use std::time::Duration;

use reqwest::{
    Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::{ApiError, ApiResult, Disposition, classify_status},
    request::PreparedRequest,
};

/// Media type sent in both `accept` and `content-type`
pub const JSON_MEDIA_TYPE: &str = "application/json";

const USER_AGENT: &str = concat!("alchemy-api/", env!("CARGO_PKG_VERSION"));

/// Headers attached to every request
pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
    headers
}

/// HTTP client that speaks JSON in both directions
///
/// Holds the transport and the fixed header set; neither changes after
/// construction, so clones can be used from any number of tasks at once.
#[derive(Debug, Clone)]
pub struct JsonHttpClient {
    client: Client,
    headers: HeaderMap,
}

impl JsonHttpClient {
    /// Build a client whose transport gives up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client))
    }

    /// Wrap an existing transport, keeping its timeout, proxy and TLS settings
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            headers: json_headers(),
        }
    }

    /// Headers sent with every request
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Issue exactly one request and normalize the response
    ///
    /// # Errors
    ///
    /// Returns the classified error for 400/401/403/404/429/500,
    /// [`ApiError::Transport`] when the request could not be completed and
    /// [`ApiError::InvalidResponse`] when any other status carries a non-JSON body
    pub async fn send(&self, request: PreparedRequest) -> ApiResult<Value> {
        let PreparedRequest {
            operation,
            method,
            url,
            query,
            body,
        } = request;

        debug!(operation, method = %method, "dispatching request");

        let mut builder = self
            .client
            .request(method, url)
            .headers(self.headers.clone());
        if !query.is_empty() {
            builder = builder.query(query.pairs());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        match classify_status(status) {
            Disposition::Parse => {
                let bytes = response.bytes().await?;
                debug!(
                    operation,
                    status = status.as_u16(),
                    bytes = bytes.len(),
                    "received response"
                );
                Ok(serde_json::from_slice(&bytes)?)
            }
            Disposition::EchoBody => {
                let message = response.text().await?;
                warn!(operation, status = status.as_u16(), error = %message, "request rejected");
                Err(ApiError::BadRequest { message })
            }
            Disposition::Fail(error) => {
                warn!(operation, status = status.as_u16(), %error, "request failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_headers_are_fixed() {
        let client = JsonHttpClient::new(Duration::from_secs(5)).unwrap();
        let headers = client.headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[ACCEPT], JSON_MEDIA_TYPE);
        assert_eq!(headers[CONTENT_TYPE], JSON_MEDIA_TYPE);
    }

    #[test]
    fn injected_client_gets_the_same_headers() {
        let client = JsonHttpClient::with_client(Client::new());
        assert_eq!(client.headers(), &json_headers());
    }
}
