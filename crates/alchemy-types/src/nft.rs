// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter types used by the NFT endpoints

use std::fmt;

use serde::{Deserialize, Serialize};

closed_enum! {
    /// Contract classes that can be included in or excluded from NFT listings
    pub enum NftFilter as "NFT filter" {
        /// Contracts flagged as spam
        Spam => "SPAM",
        /// Tokens received through airdrops
        Airdrops => "AIRDROPS",
    }
}

closed_enum! {
    /// Ordering applied to owner listings
    pub enum OrderBy as "order by" {
        /// Most recently transferred first
        TransferTime => "transferTime",
        /// The service default ordering, sent as the literal `null`
        Null => "null",
    }
}

closed_enum! {
    /// NFT token standard
    pub enum TokenType as "token type" {
        /// ERC-721 non-fungible token
        Erc721 => "ERC721",
        /// ERC-1155 multi-token
        Erc1155 => "ERC1155",
    }
}

closed_enum! {
    /// Marketplaces indexed by the sales endpoint
    pub enum Marketplace as "marketplace" {
        /// OpenSea Seaport
        Seaport => "seaport",
        /// LooksRare
        LooksRare => "looksrare",
        /// X2Y2
        X2y2 => "x2y2",
        /// Legacy OpenSea Wyvern
        Wyvern => "wyvern",
        /// Blur
        Blur => "blur",
        /// CryptoPunks native marketplace
        CryptoPunks => "cryptopunks",
    }
}

closed_enum! {
    /// Which side of a sale the address filters apply to
    pub enum Taker as "taker" {
        /// The purchasing side
        Buyer => "buyer",
        /// The selling side
        Seller => "seller",
    }
}

/// Token identifier, either numeric or textual (hex or large decimal)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenId {
    /// Identifier small enough for a `u64`
    Number(u64),
    /// Identifier kept verbatim, e.g. `"0x1a"` or a uint256 decimal string
    Text(String),
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for TokenId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for TokenId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for TokenId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(NftFilter::Spam.as_str(), "SPAM");
        assert_eq!(OrderBy::TransferTime.to_string(), "transferTime");
        assert_eq!(OrderBy::Null.to_string(), "null");
        assert_eq!(
            serde_json::to_value(TokenType::Erc1155).unwrap(),
            json!("ERC1155")
        );
        assert_eq!(
            serde_json::to_value(Marketplace::LooksRare).unwrap(),
            json!("looksrare")
        );
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("spam".parse::<NftFilter>().unwrap(), NftFilter::Spam);
        assert_eq!("erc721".parse::<TokenType>().unwrap(), TokenType::Erc721);
        assert_eq!("Seller".parse::<Taker>().unwrap(), Taker::Seller);
    }

    #[test]
    fn unknown_marketplace_is_rejected() {
        let error = "opensea".parse::<Marketplace>().unwrap_err();
        assert_eq!(error.value, "opensea");
        assert_eq!(error.expected.len(), Marketplace::all().len());
    }

    #[test]
    fn token_id_serializes_as_given() {
        assert_eq!(serde_json::to_value(TokenId::from(44_u64)).unwrap(), json!(44));
        assert_eq!(
            serde_json::to_value(TokenId::from("0x2c")).unwrap(),
            json!("0x2c")
        );
        assert_eq!(TokenId::from(44_u64).to_string(), "44");
    }
}
