// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! NFT API operations
//!
//! GET operations take a parameter struct implementing [`ToQuery`]; required
//! fields are set through its `new` constructor and optional ones default to
//! the values the API documents. Unset optional fields are never sent.
//!
//! ```rust
//! use alchemy_api::{GetNftsParams, NftFilter, ToQuery};
//!
//! let params = GetNftsParams {
//!     exclude_filters: Some(vec![NftFilter::Spam]),
//!     ..GetNftsParams::new("0xabc")
//! };
//! assert_eq!(
//!     params.to_query().encode(),
//!     "owner=0xabc&pageSize=100&withMetadata=false&excludeFilters=SPAM"
//! );
//! ```

use alchemy_types::{
    BlockNumber, Marketplace, NftFilter, OrderBy, SortOrder, Taker, TokenId, TokenType,
};
use api_client::{ApiResult, QueryPairs, ToQuery};
use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::{
    client::{AlchemyClient, require, require_any},
    endpoints::NftEndpoint,
};

const DEFAULT_PAGE_SIZE: u32 = 100;
const DEFAULT_COLLECTION_LIMIT: u32 = 100;
const DEFAULT_SALES_LIMIT: u32 = 1000;

/// Parameters of `getNFTs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNftsParams {
    /// Wallet address or ENS name
    pub owner: String,
    /// Cursor returned by the previous page
    pub page_key: Option<String>,
    /// Results per page
    pub page_size: u32,
    /// Restrict to these contracts
    pub contract_addresses: Option<Vec<String>>,
    /// Include token metadata
    pub with_metadata: bool,
    /// Metadata fetch timeout on the service side
    pub token_uri_timeout_in_ms: Option<u64>,
    /// Contract classes to leave out
    pub exclude_filters: Option<Vec<NftFilter>>,
    /// Contract classes to keep
    pub include_filters: Option<Vec<NftFilter>>,
    /// Result ordering
    pub order_by: Option<OrderBy>,
}

impl GetNftsParams {
    /// Parameters for `owner` with every option at its default
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            page_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            contract_addresses: None,
            with_metadata: false,
            token_uri_timeout_in_ms: None,
            exclude_filters: None,
            include_filters: None,
            order_by: None,
        }
    }
}

impl ToQuery for GetNftsParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("owner", &self.owner)
            .push_opt("pageKey", self.page_key.as_deref())
            .push("pageSize", self.page_size)
            .push_all("contractAddresses", self.contract_addresses.iter().flatten())
            .push("withMetadata", self.with_metadata)
            .push_opt("tokenUriTimeoutInMs", self.token_uri_timeout_in_ms)
            .push_all("excludeFilters", self.exclude_filters.iter().flatten())
            .push_all("includeFilters", self.include_filters.iter().flatten())
            .push_opt("orderBy", self.order_by);
        query
    }
}

/// Parameters of `getContractsForOwner`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetContractsForOwnerParams {
    /// Wallet address or ENS name
    pub owner: String,
    /// Cursor returned by the previous page
    pub page_key: Option<String>,
    /// Results per page
    pub page_size: u32,
    /// Contract classes to leave out
    pub exclude_filters: Option<Vec<NftFilter>>,
    /// Contract classes to keep
    pub include_filters: Option<Vec<NftFilter>>,
    /// Result ordering
    pub order_by: Option<OrderBy>,
}

impl GetContractsForOwnerParams {
    /// Parameters for `owner` with every option at its default
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            page_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            exclude_filters: None,
            include_filters: None,
            order_by: None,
        }
    }
}

impl ToQuery for GetContractsForOwnerParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("owner", &self.owner)
            .push_opt("pageKey", self.page_key.as_deref())
            .push("pageSize", self.page_size)
            .push_all("excludeFilters", self.exclude_filters.iter().flatten())
            .push_all("includeFilters", self.include_filters.iter().flatten())
            .push_opt("orderBy", self.order_by);
        query
    }
}

/// A single contract, used by the contract-level lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractParams {
    /// Contract address
    pub contract_address: String,
}

impl ToQuery for ContractParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push("contractAddress", &self.contract_address);
        query
    }
}

/// A single token, used by the token-level lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenParams {
    /// Contract address
    pub contract_address: String,
    /// Token within the contract
    pub token_id: TokenId,
}

impl ToQuery for TokenParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("contractAddress", &self.contract_address)
            .push("tokenId", &self.token_id);
        query
    }
}

/// Parameters of `getOwnersForCollection`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOwnersForCollectionParams {
    /// Collection contract address
    pub contract_address: String,
    /// Include per-token balances of each owner
    pub with_token_balances: bool,
    /// Snapshot block
    pub block: Option<String>,
    /// Cursor returned by the previous page
    pub page_key: Option<String>,
}

impl GetOwnersForCollectionParams {
    /// Parameters for `contract_address` with every option at its default
    pub fn new(contract_address: impl Into<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            with_token_balances: false,
            block: None,
            page_key: None,
        }
    }
}

impl ToQuery for GetOwnersForCollectionParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("contractAddress", &self.contract_address)
            .push("withTokenBalances", self.with_token_balances)
            .push_opt("block", self.block.as_deref())
            .push_opt("pageKey", self.page_key.as_deref());
        query
    }
}

/// Parameters of `isHolderOfCollection`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderParams {
    /// Wallet to check
    pub wallet: String,
    /// Collection contract address
    pub contract_address: String,
}

impl ToQuery for HolderParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("wallet", &self.wallet)
            .push("contractAddress", &self.contract_address);
        query
    }
}

/// Parameters of `getNFTMetadata`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNftMetadataParams {
    /// Contract address
    pub contract_address: String,
    /// Token within the contract
    pub token_id: TokenId,
    /// Token standard, speeds up the lookup when known
    pub token_type: Option<TokenType>,
    /// Metadata fetch timeout on the service side
    pub token_uri_timeout_in_ms: Option<u64>,
    /// Bypass the service side metadata cache
    pub refresh_cache: bool,
}

impl GetNftMetadataParams {
    /// Parameters for one token with every option at its default
    pub fn new(contract_address: impl Into<String>, token_id: impl Into<TokenId>) -> Self {
        Self {
            contract_address: contract_address.into(),
            token_id: token_id.into(),
            token_type: None,
            token_uri_timeout_in_ms: None,
            refresh_cache: false,
        }
    }
}

impl ToQuery for GetNftMetadataParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("contractAddress", &self.contract_address)
            .push("tokenId", &self.token_id)
            .push_opt("tokenType", self.token_type)
            .push_opt("tokenUriTimeoutInMs", self.token_uri_timeout_in_ms)
            .push("refreshCache", self.refresh_cache);
        query
    }
}

/// One entry of a metadata batch
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRef {
    /// Contract address
    pub contract_address: String,
    /// Token within the contract
    pub token_id: TokenId,
    /// Token standard, if known
    pub token_type: Option<TokenType>,
}

impl TokenRef {
    /// Reference a token without specifying its standard
    pub fn new(contract_address: impl Into<String>, token_id: impl Into<TokenId>) -> Self {
        Self {
            contract_address: contract_address.into(),
            token_id: token_id.into(),
            token_type: None,
        }
    }
}

/// Body of `getNFTMetadataBatch`
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMetadataBatchRequest {
    /// Tokens to look up
    pub tokens: Vec<TokenRef>,
    /// Metadata fetch timeout on the service side
    pub token_uri_timeout_in_ms: Option<u64>,
    /// Bypass the service side metadata cache
    pub refresh_cache: bool,
}

impl NftMetadataBatchRequest {
    /// Batch for `tokens` with every option at its default
    pub fn new(tokens: Vec<TokenRef>) -> Self {
        Self {
            tokens,
            token_uri_timeout_in_ms: None,
            refresh_cache: false,
        }
    }
}

/// Body of `getContractMetadataBatch`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractMetadataBatchRequest {
    /// Contracts to look up
    pub contract_addresses: Vec<String>,
}

/// Parameters of `searchContractMetadata`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Free text matched against contract metadata
    pub query: String,
}

impl ToQuery for SearchParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query.push("query", &self.query);
        query
    }
}

/// Parameters of `getNFTsForCollection`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNftsForCollectionParams {
    /// Collection contract address
    pub contract_address: String,
    /// Include token metadata
    pub with_metadata: bool,
    /// First token of the page
    pub start_token: Option<TokenId>,
    /// Results per page
    pub limit: u32,
    /// Metadata fetch timeout on the service side
    pub token_uri_timeout_in_ms: Option<u64>,
}

impl GetNftsForCollectionParams {
    /// Parameters for `contract_address` with every option at its default
    pub fn new(contract_address: impl Into<String>) -> Self {
        Self {
            contract_address: contract_address.into(),
            with_metadata: false,
            start_token: None,
            limit: DEFAULT_COLLECTION_LIMIT,
            token_uri_timeout_in_ms: None,
        }
    }
}

impl ToQuery for GetNftsForCollectionParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("contractAddress", &self.contract_address)
            .push("withMetadata", self.with_metadata)
            .push_opt("startToken", self.start_token.as_ref())
            .push("limit", self.limit)
            .push_opt("tokenUriTimeoutInMs", self.token_uri_timeout_in_ms);
        query
    }
}

/// Parameters of `getNFTSales`, every field is optional
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetNftSalesParams {
    /// First block of the range
    pub from_block: BlockNumber,
    /// Last block of the range
    pub to_block: BlockNumber,
    /// Ordering by block number
    pub order: SortOrder,
    /// Only sales on this marketplace
    pub marketplace: Option<Marketplace>,
    /// Only sales of this contract
    pub contract_address: Option<String>,
    /// Only sales of this token, requires `contract_address`
    pub token_id: Option<TokenId>,
    /// Only sales bought by this address
    pub buyer_address: Option<String>,
    /// Only sales sold by this address
    pub seller_address: Option<String>,
    /// Side of the sale that took the order
    pub taker: Option<Taker>,
    /// Maximum number of sales returned
    pub limit: u32,
    /// Cursor returned by the previous page
    pub page_key: Option<String>,
}

impl Default for GetNftSalesParams {
    fn default() -> Self {
        Self {
            from_block: BlockNumber::Number(0),
            to_block: BlockNumber::Latest,
            order: SortOrder::Desc,
            marketplace: None,
            contract_address: None,
            token_id: None,
            buyer_address: None,
            seller_address: None,
            taker: None,
            limit: DEFAULT_SALES_LIMIT,
            page_key: None,
        }
    }
}

impl ToQuery for GetNftSalesParams {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        query
            .push("fromBlock", &self.from_block)
            .push("toBlock", &self.to_block)
            .push("order", self.order)
            .push_opt("marketplace", self.marketplace)
            .push_opt("contractAddress", self.contract_address.as_deref())
            .push_opt("tokenId", self.token_id.as_ref())
            .push_opt("buyerAddress", self.buyer_address.as_deref())
            .push_opt("sellerAddress", self.seller_address.as_deref())
            .push_opt("taker", self.taker)
            .push("limit", self.limit)
            .push_opt("pageKey", self.page_key.as_deref());
        query
    }
}

fn contract(contract_address: &str) -> ApiResult<ContractParams> {
    require("contractAddress", contract_address)?;
    Ok(ContractParams {
        contract_address: contract_address.to_string(),
    })
}

fn token(contract_address: &str, token_id: impl Into<TokenId>) -> ApiResult<TokenParams> {
    require("contractAddress", contract_address)?;
    Ok(TokenParams {
        contract_address: contract_address.to_string(),
        token_id: token_id.into(),
    })
}

impl AlchemyClient {
    /// NFTs currently owned by an address
    ///
    /// # Errors
    ///
    /// Returns [`api_client::ApiError::InvalidArgument`] if `owner` is empty,
    /// otherwise any error of [`api_client::JsonHttpClient::send`]
    pub async fn get_nfts(&self, params: &GetNftsParams) -> ApiResult<Value> {
        require("owner", &params.owner)?;
        debug!(owner = %params.owner, page_size = params.page_size, "fetching NFTs for owner");
        self.get(NftEndpoint::GetNfts, params).await
    }

    /// NFT contracts an address holds tokens of
    ///
    /// # Errors
    ///
    /// Returns an error if `owner` is empty or the request fails
    pub async fn get_contracts_for_owner(
        &self,
        params: &GetContractsForOwnerParams,
    ) -> ApiResult<Value> {
        require("owner", &params.owner)?;
        self.get(NftEndpoint::GetContractsForOwner, params).await
    }

    /// Owners of a single token
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn get_owners_for_token(
        &self,
        contract_address: &str,
        token_id: impl Into<TokenId>,
    ) -> ApiResult<Value> {
        let params = token(contract_address, token_id)?;
        self.get(NftEndpoint::GetOwnersForToken, &params).await
    }

    /// Owners of any token of a collection
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn get_owners_for_collection(
        &self,
        params: &GetOwnersForCollectionParams,
    ) -> ApiResult<Value> {
        require("contractAddress", &params.contract_address)?;
        self.get(NftEndpoint::GetOwnersForCollection, params).await
    }

    /// Whether `wallet` holds any token of a collection
    ///
    /// # Errors
    ///
    /// Returns an error if an argument is empty or the request fails
    pub async fn is_holder_of_collection(
        &self,
        wallet: &str,
        contract_address: &str,
    ) -> ApiResult<Value> {
        require("wallet", wallet)?;
        require("contractAddress", contract_address)?;
        let params = HolderParams {
            wallet: wallet.to_string(),
            contract_address: contract_address.to_string(),
        };
        self.get(NftEndpoint::IsHolderOfCollection, &params).await
    }

    /// Metadata of a single token
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn get_nft_metadata(&self, params: &GetNftMetadataParams) -> ApiResult<Value> {
        require("contractAddress", &params.contract_address)?;
        self.get(NftEndpoint::GetNftMetadata, params).await
    }

    /// Metadata of several tokens in one call
    ///
    /// # Errors
    ///
    /// Returns an error if `tokens` is empty or the request fails
    pub async fn get_nft_metadata_batch(
        &self,
        request: &NftMetadataBatchRequest,
    ) -> ApiResult<Value> {
        require_any("tokens", &request.tokens)?;
        debug!(tokens = request.tokens.len(), "fetching NFT metadata batch");
        self.post(NftEndpoint::GetNftMetadataBatch, request).await
    }

    /// Metadata of a single contract
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn get_contract_metadata(&self, contract_address: &str) -> ApiResult<Value> {
        let params = contract(contract_address)?;
        self.get(NftEndpoint::GetContractMetadata, &params).await
    }

    /// Metadata of several contracts in one call
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_addresses` is empty or the request fails
    pub async fn get_contract_metadata_batch(
        &self,
        contract_addresses: Vec<String>,
    ) -> ApiResult<Value> {
        require_any("contractAddresses", &contract_addresses)?;
        let request = ContractMetadataBatchRequest { contract_addresses };
        self.post(NftEndpoint::GetContractMetadataBatch, &request)
            .await
    }

    /// Contracts whose metadata matches a free text query
    ///
    /// # Errors
    ///
    /// Returns an error if `query` is empty or the request fails
    pub async fn search_contract_metadata(&self, query: &str) -> ApiResult<Value> {
        require("query", query)?;
        let params = SearchParams {
            query: query.to_string(),
        };
        self.get(NftEndpoint::SearchContractMetadata, &params).await
    }

    /// Ask the service to re-index a contract
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn reingest_contract(&self, contract_address: &str) -> ApiResult<Value> {
        let params = contract(contract_address)?;
        self.get(NftEndpoint::ReingestContract, &params).await
    }

    /// Tokens of a collection
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn get_nfts_for_collection(
        &self,
        params: &GetNftsForCollectionParams,
    ) -> ApiResult<Value> {
        require("contractAddress", &params.contract_address)?;
        self.get(NftEndpoint::GetNftsForCollection, params).await
    }

    /// Every contract the service classifies as spam
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_spam_contracts(&self) -> ApiResult<Value> {
        self.get(NftEndpoint::GetSpamContracts, &()).await
    }

    /// Whether a contract is classified as spam
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn is_spam_contract(&self, contract_address: &str) -> ApiResult<Value> {
        let params = contract(contract_address)?;
        self.get(NftEndpoint::IsSpamContract, &params).await
    }

    /// Whether a token was airdropped
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn is_airdrop(
        &self,
        contract_address: &str,
        token_id: impl Into<TokenId>,
    ) -> ApiResult<Value> {
        let params = token(contract_address, token_id)?;
        self.get(NftEndpoint::IsAirdrop, &params).await
    }

    /// Floor price of a collection per marketplace
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn get_floor_price(&self, contract_address: &str) -> ApiResult<Value> {
        let params = contract(contract_address)?;
        self.get(NftEndpoint::GetFloorPrice, &params).await
    }

    /// NFT sales matching the given filters
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails
    pub async fn get_nft_sales(&self, params: &GetNftSalesParams) -> ApiResult<Value> {
        self.get(NftEndpoint::GetNftSales, params).await
    }

    /// Rarity of each attribute of a token
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn compute_rarity(
        &self,
        contract_address: &str,
        token_id: impl Into<TokenId>,
    ) -> ApiResult<Value> {
        let params = token(contract_address, token_id)?;
        self.get(NftEndpoint::ComputeRarity, &params).await
    }

    /// Attribute value counts across a collection
    ///
    /// # Errors
    ///
    /// Returns an error if `contract_address` is empty or the request fails
    pub async fn summarize_nft_attributes(&self, contract_address: &str) -> ApiResult<Value> {
        let params = contract(contract_address)?;
        self.get(NftEndpoint::SummarizeNftAttributes, &params).await
    }
}
