// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Networks served by the Alchemy API
//!
//! Every network has its own host; the API key and endpoint path are appended
//! to [`Network::base_url`] when a request URL is resolved.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseEnumError;

/// Supported Alchemy networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Ethereum mainnet
    #[default]
    EthMainnet,
    /// Ethereum Sepolia testnet
    EthSepolia,
    /// Polygon PoS mainnet
    PolygonMainnet,
    /// Polygon Amoy testnet
    PolygonAmoy,
    /// Arbitrum One
    ArbMainnet,
    /// OP mainnet
    OptMainnet,
    /// Base mainnet
    BaseMainnet,
}

impl Network {
    /// Host prefix used by Alchemy for this network
    pub const fn subdomain(self) -> &'static str {
        match self {
            Self::EthMainnet => "eth-mainnet",
            Self::EthSepolia => "eth-sepolia",
            Self::PolygonMainnet => "polygon-mainnet",
            Self::PolygonAmoy => "polygon-amoy",
            Self::ArbMainnet => "arb-mainnet",
            Self::OptMainnet => "opt-mainnet",
            Self::BaseMainnet => "base-mainnet",
        }
    }

    /// Returns the human-readable name of the network
    pub const fn name(self) -> &'static str {
        match self {
            Self::EthMainnet => "Ethereum",
            Self::EthSepolia => "Ethereum Sepolia",
            Self::PolygonMainnet => "Polygon",
            Self::PolygonAmoy => "Polygon Amoy",
            Self::ArbMainnet => "Arbitrum",
            Self::OptMainnet => "Optimism",
            Self::BaseMainnet => "Base",
        }
    }

    /// Scheme and host every endpoint of this network lives under
    pub fn base_url(self) -> String {
        format!("https://{}.g.alchemy.com", self.subdomain())
    }

    /// Returns all supported networks
    pub const fn all() -> &'static [Self] {
        &[
            Self::EthMainnet,
            Self::EthSepolia,
            Self::PolygonMainnet,
            Self::PolygonAmoy,
            Self::ArbMainnet,
            Self::OptMainnet,
            Self::BaseMainnet,
        ]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subdomain())
    }
}

impl FromStr for Network {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        if let Some(network) = Self::all()
            .iter()
            .copied()
            .find(|network| network.subdomain() == normalized)
        {
            return Ok(network);
        }

        // Short aliases for the mainnets
        match normalized.as_str() {
            "eth" | "ethereum" | "mainnet" => Ok(Self::EthMainnet),
            "sepolia" => Ok(Self::EthSepolia),
            "polygon" | "matic" => Ok(Self::PolygonMainnet),
            "amoy" => Ok(Self::PolygonAmoy),
            "arbitrum" | "arb" => Ok(Self::ArbMainnet),
            "optimism" | "opt" => Ok(Self::OptMainnet),
            "base" => Ok(Self::BaseMainnet),
            _ => Err(ParseEnumError::new(
                "network",
                s,
                Self::all().iter().map(|network| network.subdomain()).collect(),
            )),
        }
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.subdomain())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
