// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Asset transfers operation
//!
//! Transfers are queried through a JSON-RPC style POST. The envelope fields
//! (`id`, `jsonrpc`, `method`) are always sent; inside `params` every unset
//! optional field is left out of the body entirely.

use alchemy_types::{BlockNumber, SortOrder, TransferCategory};
use api_client::ApiResult;
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::{
    client::{AlchemyClient, require_any},
    endpoints::TransferEndpoint,
};

/// JSON-RPC protocol version sent in every envelope
pub const JSONRPC_VERSION: &str = "2.0";

const DEFAULT_MAX_COUNT: &str = "0x3e8";

/// JSON-RPC style request envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonRpcRequest<P> {
    /// Caller chosen request id, echoed in the response
    pub id: u64,
    /// Protocol version
    pub jsonrpc: String,
    /// Remote method name
    pub method: String,
    /// Method parameters
    pub params: P,
}

/// Envelope of `alchemy_getAssetTransfers`
pub type AssetTransfersRequest = JsonRpcRequest<AssetTransfersParams>;

impl AssetTransfersRequest {
    /// Envelope with the default protocol version and method name
    pub fn new(id: u64, params: AssetTransfersParams) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: TransferEndpoint::GetAssetTransfers.method().to_string(),
            params,
        }
    }
}

/// Parameters of `alchemy_getAssetTransfers`
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetTransfersParams {
    /// First block of the range
    pub from_block: BlockNumber,
    /// Last block of the range
    pub to_block: BlockNumber,
    /// Kinds of transfers to return
    pub category: Vec<TransferCategory>,
    /// Only transfers sent by this address
    pub from_address: Option<String>,
    /// Only transfers received by this address
    pub to_address: Option<String>,
    /// Only transfers of these token contracts
    pub contract_addresses: Option<Vec<String>>,
    /// Ordering by block number
    pub order: SortOrder,
    /// Include block timestamps
    pub with_metadata: bool,
    /// Leave out transfers of zero value
    pub exclude_zero_value: bool,
    /// Maximum results as a hex string
    pub max_count: String,
    /// Cursor returned by the previous page
    pub page_key: Option<String>,
}

impl AssetTransfersParams {
    /// Parameters for `category` with every option at its default
    pub fn new(category: Vec<TransferCategory>) -> Self {
        Self {
            from_block: BlockNumber::hex(0),
            to_block: BlockNumber::Latest,
            category,
            from_address: None,
            to_address: None,
            contract_addresses: None,
            order: SortOrder::Asc,
            with_metadata: false,
            exclude_zero_value: true,
            max_count: DEFAULT_MAX_COUNT.to_string(),
            page_key: None,
        }
    }

    /// Set `max_count` from a number, hex-encoded as the API expects
    #[must_use]
    pub fn with_max_count(mut self, max_count: u64) -> Self {
        self.max_count = format!("{max_count:#x}");
        self
    }
}

impl AlchemyClient {
    /// Historical transfers matching the given filters
    ///
    /// # Errors
    ///
    /// Returns [`api_client::ApiError::InvalidArgument`] if no category is
    /// given, otherwise any error of [`api_client::JsonHttpClient::send`]
    pub async fn get_asset_transfers(&self, request: &AssetTransfersRequest) -> ApiResult<Value> {
        require_any("category", &request.params.category)?;
        debug!(
            id = request.id,
            from_block = %request.params.from_block,
            to_block = %request.params.to_block,
            "fetching asset transfers"
        );
        self.rpc(TransferEndpoint::GetAssetTransfers, request).await
    }
}
