// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! Configuration is either built in code with [`AlchemyConfig::new`] or read
//! from `ALCHEMY_*` environment variables with [`AlchemyConfig::from_env`].

use std::time::Duration;

use alchemy_types::Network;
use api_client::{ApiError, ApiResult};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use url::Url;

use crate::api_key::ApiKey;

/// Prefix of the environment variables read by [`AlchemyConfig::from_env`]
pub const ENV_PREFIX: &str = "ALCHEMY";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Configuration for the Alchemy API client
#[derive(Debug, Clone, Deserialize)]
pub struct AlchemyConfig {
    /// Key embedded in every request path
    pub api_key: ApiKey,
    /// Network whose host requests go to
    pub network: Network,
    /// Replaces the network host, e.g. for a proxy or a mock server
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Transport timeout in seconds (1-300)
    pub timeout_seconds: u64,
}

impl AlchemyConfig {
    /// Configuration for `api_key` on Ethereum mainnet with default timeout
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the key is invalid
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            network: Network::default(),
            base_url: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        })
    }

    /// Select a different network
    #[must_use]
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Send requests to `base_url` instead of the network host
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Override the transport timeout
    #[must_use]
    pub fn with_timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Load configuration from the environment
    ///
    /// | variable | default |
    /// |---|---|
    /// | `ALCHEMY_API_KEY` | required |
    /// | `ALCHEMY_NETWORK` | `eth-mainnet` |
    /// | `ALCHEMY_BASE_URL` | network host |
    /// | `ALCHEMY_TIMEOUT_SECONDS` | `30` |
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if a variable is missing or invalid
    pub fn from_env() -> ApiResult<Self> {
        Self::load(Self::environment()).map_err(|e| {
            ApiError::configuration(format!("failed to load configuration: {e}"))
        })
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Load configuration from the given environment source on top of the defaults
    fn load(environment: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("network", Network::default().subdomain())?
            .set_default("timeout_seconds", DEFAULT_TIMEOUT_SECONDS)?
            .add_source(environment)
            .build()?;

        let alchemy_config: Self = config.try_deserialize()?;
        alchemy_config
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        Ok(alchemy_config)
    }

    /// Check values that cannot be enforced by their types
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the timeout is out of range
    /// or the base URL cannot carry a path
    pub fn validate(&self) -> ApiResult<()> {
        if self.timeout_seconds == 0 {
            return Err(ApiError::configuration("timeout must be greater than 0"));
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ApiError::configuration(format!(
                "timeout cannot exceed {MAX_TIMEOUT_SECONDS}"
            )));
        }
        if let Some(base_url) = &self.base_url
            && base_url.cannot_be_a_base()
        {
            return Err(ApiError::configuration(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }
        Ok(())
    }

    /// Base every endpoint URL is resolved against
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the network host is not a valid URL
    pub fn resolved_base_url(&self) -> ApiResult<Url> {
        match &self.base_url {
            Some(base_url) => Ok(base_url.clone()),
            None => Ok(Url::parse(&self.network.base_url())?),
        }
    }

    /// Transport timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use config::Map;

    use super::*;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: Map<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AlchemyConfig::environment().source(Some(source))
    }

    #[test]
    fn defaults() {
        let config = AlchemyConfig::new("key").unwrap();
        assert_eq!(config.network, Network::EthMainnet);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.resolved_base_url().unwrap().as_str(),
            "https://eth-mainnet.g.alchemy.com/"
        );
    }

    #[test]
    fn base_url_overrides_network() {
        let base = Url::parse("http://127.0.0.1:8080/proxy").unwrap();
        let config = AlchemyConfig::new("key")
            .unwrap()
            .with_network(Network::BaseMainnet)
            .with_base_url(base.clone());
        assert_eq!(config.resolved_base_url().unwrap(), base);
    }

    #[test]
    fn timeout_validation() {
        let config = AlchemyConfig::new("key").unwrap();
        assert!(config.clone().with_timeout_seconds(0).validate().is_err());
        assert!(config.clone().with_timeout_seconds(301).validate().is_err());
        assert!(config.clone().with_timeout_seconds(1).validate().is_ok());
        assert!(config.with_timeout_seconds(300).validate().is_ok());
    }

    #[test]
    fn load_from_environment() {
        let config = AlchemyConfig::load(environment(&[
            ("ALCHEMY_API_KEY", "env-key"),
            ("ALCHEMY_NETWORK", "polygon-mainnet"),
            ("ALCHEMY_TIMEOUT_SECONDS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.api_key.as_str(), "env-key");
        assert_eq!(config.network, Network::PolygonMainnet);
        assert_eq!(config.timeout_seconds, 12);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn load_applies_defaults() {
        let config = AlchemyConfig::load(environment(&[("ALCHEMY_API_KEY", "env-key")])).unwrap();

        assert_eq!(config.network, Network::EthMainnet);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn load_reads_base_url() {
        let config = AlchemyConfig::load(environment(&[
            ("ALCHEMY_API_KEY", "env-key"),
            ("ALCHEMY_BASE_URL", "http://localhost:9000"),
        ]))
        .unwrap();

        assert_eq!(
            config.base_url.map(String::from).as_deref(),
            Some("http://localhost:9000/")
        );
    }

    #[test]
    fn load_requires_api_key() {
        assert!(AlchemyConfig::load(environment(&[])).is_err());
        assert!(AlchemyConfig::load(environment(&[("ALCHEMY_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn load_rejects_unknown_network() {
        let result = AlchemyConfig::load(environment(&[
            ("ALCHEMY_API_KEY", "env-key"),
            ("ALCHEMY_NETWORK", "dogechain"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn load_rejects_zero_timeout() {
        let result = AlchemyConfig::load(environment(&[
            ("ALCHEMY_API_KEY", "env-key"),
            ("ALCHEMY_TIMEOUT_SECONDS", "0"),
        ]));
        assert!(result.is_err());
    }
}
