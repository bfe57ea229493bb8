// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the Alchemy NFT and asset transfers API
//!
//! Every remote operation is one async method on [`AlchemyClient`] that issues
//! exactly one HTTP request and returns the response body as a
//! [`serde_json::Value`], or a classified [`ApiError`].
//!
//! # Architecture
//!
//! - **Client**: [`client::AlchemyClient`] - immutable key, base URL and transport
//! - **Operations**: [`nft`] (GET/POST per NFT endpoint), [`transfers`] (JSON-RPC POST)
//! - **Endpoints**: [`endpoints`] - pure URL resolution per operation
//! - **Configuration**: [`config::AlchemyConfig`] - in code or from `ALCHEMY_*` variables
//!
//! # Example
//!
//! ```rust,no_run
//! use alchemy_api::{AlchemyClient, AlchemyConfig, AssetTransfersParams, AssetTransfersRequest,
//!     GetNftsParams, TransferCategory};
//!
//! # async fn run() -> Result<(), alchemy_api::ApiError> {
//! let client = AlchemyClient::new(AlchemyConfig::new("demo")?)?;
//!
//! let nfts = client.get_nfts(&GetNftsParams::new("vitalik.eth")).await?;
//!
//! let transfers = client
//!     .get_asset_transfers(&AssetTransfersRequest::new(
//!         1,
//!         AssetTransfersParams::new(vec![TransferCategory::Erc721]),
//!     ))
//!     .await?;
//! # let _ = (nfts, transfers);
//! # Ok(())
//! # }
//! ```

pub mod api_key;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod nft;
pub mod transfers;

pub use alchemy_types::{
    BlockNumber, Marketplace, Network, NftFilter, OrderBy, ParseEnumError, SortOrder, Taker,
    TokenId, TokenType, TransferCategory,
};
pub use api_client::{ApiError, ApiResult, PreparedRequest, QueryPairs, ToQuery};
pub use api_key::ApiKey;
pub use client::AlchemyClient;
pub use config::AlchemyConfig;
pub use endpoints::{NftEndpoint, TransferEndpoint};
pub use nft::*;
pub use transfers::*;
