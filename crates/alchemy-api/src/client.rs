// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Alchemy API client
//!
//! [`AlchemyClient`] owns the immutable configuration (API key, base URL and
//! JSON transport). The operations themselves live in [`crate::nft`] and
//! [`crate::transfers`] as further `impl AlchemyClient` blocks.

use api_client::{ApiError, ApiResult, JsonHttpClient, PreparedRequest, ToQuery};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, trace};
use url::Url;

use crate::{
    api_key::ApiKey,
    config::AlchemyConfig,
    endpoints::{NftEndpoint, TransferEndpoint},
};

/// Client for the Alchemy NFT and transfers API
///
/// Cloning is cheap and every clone shares the same connection pool. Calls do
/// not mutate the client, so it can be used from many tasks at once.
#[derive(Debug, Clone)]
pub struct AlchemyClient {
    http: JsonHttpClient,
    api_key: ApiKey,
    base_url: Url,
}

impl AlchemyClient {
    /// Create a new client from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client cannot be created
    pub fn new(config: AlchemyConfig) -> ApiResult<Self> {
        config.validate()?;
        let http = JsonHttpClient::new(config.timeout())?;
        Self::build(config, http)
    }

    /// Create a client that sends through a caller-supplied transport
    ///
    /// The transport's own timeout and proxy settings apply; `timeout_seconds`
    /// from `config` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn with_http_client(config: AlchemyConfig, client: Client) -> ApiResult<Self> {
        config.validate()?;
        Self::build(config, JsonHttpClient::with_client(client))
    }

    /// Create a client configured from `ALCHEMY_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn from_env() -> ApiResult<Self> {
        Self::new(AlchemyConfig::from_env()?)
    }

    fn build(config: AlchemyConfig, http: JsonHttpClient) -> ApiResult<Self> {
        let base_url = config.resolved_base_url()?;

        info!(
            network = %config.network,
            base_url = %base_url,
            "created Alchemy API client"
        );

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url,
        })
    }

    /// Base every endpoint URL is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the GET request for an NFT operation without sending it
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be resolved
    pub fn prepare_get(
        &self,
        endpoint: NftEndpoint,
        params: &impl ToQuery,
    ) -> ApiResult<PreparedRequest> {
        let url = endpoint.url(&self.base_url, &self.api_key)?;
        Ok(PreparedRequest::get(endpoint.name(), url, params))
    }

    /// Build the POST request for an NFT operation without sending it
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be resolved or the payload is not JSON
    pub fn prepare_post(
        &self,
        endpoint: NftEndpoint,
        payload: &impl Serialize,
    ) -> ApiResult<PreparedRequest> {
        let url = endpoint.url(&self.base_url, &self.api_key)?;
        PreparedRequest::post(endpoint.name(), url, payload)
    }

    /// Build the JSON-RPC POST for a transfers operation without sending it
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URL cannot be resolved or the payload is not JSON
    pub fn prepare_rpc(
        &self,
        endpoint: TransferEndpoint,
        payload: &impl Serialize,
    ) -> ApiResult<PreparedRequest> {
        let url = endpoint.url(&self.base_url, &self.api_key)?;
        PreparedRequest::post(endpoint.method(), url, payload)
    }

    pub(crate) async fn get(&self, endpoint: NftEndpoint, params: &impl ToQuery) -> ApiResult<Value> {
        let request = self.prepare_get(endpoint, params)?;
        self.execute(request).await
    }

    pub(crate) async fn post(
        &self,
        endpoint: NftEndpoint,
        payload: &impl Serialize,
    ) -> ApiResult<Value> {
        let request = self.prepare_post(endpoint, payload)?;
        self.execute(request).await
    }

    pub(crate) async fn rpc(
        &self,
        endpoint: TransferEndpoint,
        payload: &impl Serialize,
    ) -> ApiResult<Value> {
        let request = self.prepare_rpc(endpoint, payload)?;
        self.execute(request).await
    }

    async fn execute(&self, request: PreparedRequest) -> ApiResult<Value> {
        trace!(
            operation = request.operation,
            url = %self.api_key.redact(request.full_url().as_str()),
            "resolved request URL"
        );
        self.http.send(request).await
    }
}

/// Reject empty values for parameters the API requires
pub(crate) fn require(name: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_argument(format!("{name} is required")));
    }
    Ok(())
}

/// Reject empty lists for parameters the API requires
pub(crate) fn require_any<T>(name: &str, values: &[T]) -> ApiResult<()> {
    if values.is_empty() {
        return Err(ApiError::invalid_argument(format!(
            "{name} must contain at least one entry"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alchemy_types::Network;

    use super::*;

    #[test]
    fn client_creation_success() {
        let config = AlchemyConfig::new("valid-api-key").unwrap();
        let client = AlchemyClient::new(config).unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://eth-mainnet.g.alchemy.com/"
        );
    }

    #[test]
    fn client_creation_invalid_timeout() {
        let config = AlchemyConfig::new("valid-api-key")
            .unwrap()
            .with_timeout_seconds(0);

        let result = AlchemyClient::new(config);
        assert!(matches!(result, Err(ApiError::Configuration { .. })));
    }

    #[test]
    fn network_selects_host() {
        let config = AlchemyConfig::new("valid-api-key")
            .unwrap()
            .with_network(Network::ArbMainnet);
        let client = AlchemyClient::with_http_client(config, Client::new()).unwrap();

        let request = client.prepare_get(NftEndpoint::GetFloorPrice, &()).unwrap();
        assert_eq!(
            request.url.as_str(),
            "https://arb-mainnet.g.alchemy.com/nft/v2/valid-api-key/getFloorPrice"
        );
    }

    #[test]
    fn debug_output_hides_key() {
        let config = AlchemyConfig::new("super-secret").unwrap();
        let client = AlchemyClient::new(config).unwrap();
        assert!(!format!("{client:?}").contains("super-secret"));
    }

    #[test]
    fn required_values() {
        assert!(require("owner", "0xabc").is_ok());
        assert!(matches!(
            require("owner", " "),
            Err(ApiError::InvalidArgument { .. })
        ));
        assert!(require_any("category", &[1]).is_ok());
        assert!(require_any::<u8>("category", &[]).is_err());
    }
}
