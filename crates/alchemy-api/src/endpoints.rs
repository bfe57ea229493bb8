// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint descriptors
//!
//! Each operation resolves to a URL by pure path substitution:
//!
//! - NFT family: `{base}/nft/v2/{api_key}/{operation}`
//! - transfers family: `{base}/v2/{api_key}`, the operation travels in the
//!   JSON-RPC `method` field instead

use api_client::{ApiError, ApiResult};
use url::Url;

use crate::api_key::ApiKey;

const NFT_API: &str = "nft";
const API_VERSION: &str = "v2";

/// Operations of the NFT API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum NftEndpoint {
    GetNfts,
    GetContractsForOwner,
    GetOwnersForToken,
    GetOwnersForCollection,
    IsHolderOfCollection,
    GetNftMetadata,
    GetNftMetadataBatch,
    GetContractMetadata,
    GetContractMetadataBatch,
    SearchContractMetadata,
    ReingestContract,
    GetNftsForCollection,
    GetSpamContracts,
    IsSpamContract,
    IsAirdrop,
    GetFloorPrice,
    GetNftSales,
    ComputeRarity,
    SummarizeNftAttributes,
}

impl NftEndpoint {
    /// Path segment naming the operation
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetNfts => "getNFTs",
            Self::GetContractsForOwner => "getContractsForOwner",
            Self::GetOwnersForToken => "getOwnersForToken",
            Self::GetOwnersForCollection => "getOwnersForCollection",
            Self::IsHolderOfCollection => "isHolderOfCollection",
            Self::GetNftMetadata => "getNFTMetadata",
            Self::GetNftMetadataBatch => "getNFTMetadataBatch",
            Self::GetContractMetadata => "getContractMetadata",
            Self::GetContractMetadataBatch => "getContractMetadataBatch",
            Self::SearchContractMetadata => "searchContractMetadata",
            Self::ReingestContract => "reingestContract",
            Self::GetNftsForCollection => "getNFTsForCollection",
            Self::GetSpamContracts => "getSpamContracts",
            Self::IsSpamContract => "isSpamContract",
            Self::IsAirdrop => "isAirdrop",
            Self::GetFloorPrice => "getFloorPrice",
            Self::GetNftSales => "getNFTSales",
            Self::ComputeRarity => "computeRarity",
            Self::SummarizeNftAttributes => "summarizeNFTAttributes",
        }
    }

    /// Resolve the request URL for this operation
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `base` cannot carry a path
    pub fn url(self, base: &Url, api_key: &ApiKey) -> ApiResult<Url> {
        resolve(
            base,
            &[NFT_API, API_VERSION, api_key.as_str(), self.name()],
        )
    }
}

/// Operations of the transfers API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TransferEndpoint {
    GetAssetTransfers,
}

impl TransferEndpoint {
    /// JSON-RPC method name
    pub const fn method(self) -> &'static str {
        match self {
            Self::GetAssetTransfers => "alchemy_getAssetTransfers",
        }
    }

    /// Resolve the request URL for this operation
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `base` cannot carry a path
    pub fn url(self, base: &Url, api_key: &ApiKey) -> ApiResult<Url> {
        resolve(base, &[API_VERSION, api_key.as_str()])
    }
}

fn resolve(base: &Url, segments: &[&str]) -> ApiResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| ApiError::configuration(format!("base URL {base} cannot carry a path")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://eth-mainnet.g.alchemy.com").unwrap()
    }

    fn key() -> ApiKey {
        ApiKey::new("demo").unwrap()
    }

    #[test]
    fn nft_endpoint_url() {
        assert_eq!(
            NftEndpoint::GetNfts.url(&base(), &key()).unwrap().as_str(),
            "https://eth-mainnet.g.alchemy.com/nft/v2/demo/getNFTs"
        );
        assert_eq!(
            NftEndpoint::SummarizeNftAttributes
                .url(&base(), &key())
                .unwrap()
                .as_str(),
            "https://eth-mainnet.g.alchemy.com/nft/v2/demo/summarizeNFTAttributes"
        );
    }

    #[test]
    fn transfer_endpoint_url() {
        assert_eq!(
            TransferEndpoint::GetAssetTransfers
                .url(&base(), &key())
                .unwrap()
                .as_str(),
            "https://eth-mainnet.g.alchemy.com/v2/demo"
        );
        assert_eq!(
            TransferEndpoint::GetAssetTransfers.method(),
            "alchemy_getAssetTransfers"
        );
    }

    #[test]
    fn base_path_is_kept() {
        let base = Url::parse("http://localhost:8080/proxy/").unwrap();
        assert_eq!(
            NftEndpoint::GetFloorPrice.url(&base, &key()).unwrap().as_str(),
            "http://localhost:8080/proxy/nft/v2/demo/getFloorPrice"
        );
    }

    #[test]
    fn base_without_path_is_rejected() {
        let base = Url::parse("mailto:nobody@example.com").unwrap();
        let error = NftEndpoint::GetNfts.url(&base, &key()).unwrap_err();
        assert!(matches!(error, ApiError::Configuration { .. }));
    }
}
