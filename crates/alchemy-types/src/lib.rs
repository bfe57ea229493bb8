// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter types for the Alchemy NFT and transfers API
//!
//! Every enumerated request parameter the API accepts is modelled as a closed
//! Rust enum, so a value outside the accepted set cannot reach the wire.
//! Parsing a value from text goes through [`std::str::FromStr`] and fails with
//! [`ParseEnumError`] when it is not part of the set.
//!
//! Mixed-type parameters (`tokenId`, `fromBlock`/`toBlock`) get dedicated
//! types ([`TokenId`], [`BlockNumber`]) that serialize to the same JSON shape
//! the API documents for them.

#[macro_use]
mod macros;

pub mod block;
pub mod error;
pub mod network;
pub mod nft;
pub mod transfers;

pub use block::{BlockNumber, SortOrder};
pub use error::ParseEnumError;
pub use network::Network;
pub use nft::{Marketplace, NftFilter, OrderBy, Taker, TokenId, TokenType};
pub use transfers::TransferCategory;
