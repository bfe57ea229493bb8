// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Block range and ordering parameters

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

closed_enum! {
    /// Result ordering by block number
    pub enum SortOrder as "sort order" {
        /// Oldest first
        Asc => "asc",
        /// Newest first
        Desc => "desc",
    }
}

/// A block reference accepted by `fromBlock` / `toBlock`
///
/// The API takes either a decimal integer, a hex-encoded block number string
/// or the `latest` tag. Each variant serializes to the JSON type the caller
/// chose, so `Number(0)` becomes `0` and `Tag("0x0")` becomes `"0x0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockNumber {
    /// A plain block height
    Number(u64),
    /// The most recent block
    Latest,
    /// Any other textual block reference, usually a `0x` prefixed hex height
    Tag(String),
}

impl BlockNumber {
    /// Hex-encoded block reference, e.g. `BlockNumber::hex(1000)` is `"0x3e8"`
    pub fn hex(height: u64) -> Self {
        Self::Tag(format!("{height:#x}"))
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(height) => write!(f, "{height}"),
            Self::Latest => f.write_str("latest"),
            Self::Tag(tag) => f.write_str(tag),
        }
    }
}

impl From<u64> for BlockNumber {
    fn from(height: u64) -> Self {
        Self::Number(height)
    }
}

impl From<&str> for BlockNumber {
    fn from(value: &str) -> Self {
        if value.eq_ignore_ascii_case("latest") {
            Self::Latest
        } else {
            Self::Tag(value.to_string())
        }
    }
}

impl From<String> for BlockNumber {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("latest") {
            Self::Latest
        } else {
            Self::Tag(value)
        }
    }
}

impl Serialize for BlockNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Number(height) => serializer.serialize_u64(*height),
            Self::Latest => serializer.serialize_str("latest"),
            Self::Tag(tag) => serializer.serialize_str(tag),
        }
    }
}

impl<'de> Deserialize<'de> for BlockNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(height) => Self::Number(height),
            Raw::Text(text) => Self::from(text),
        })
    }
}
