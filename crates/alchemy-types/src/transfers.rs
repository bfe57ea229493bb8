// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter types used by the asset transfers endpoint

closed_enum! {
    /// Kind of asset movement returned by `alchemy_getAssetTransfers`
    pub enum TransferCategory as "transfer category" {
        /// Top level native currency transfers
        External => "external",
        /// Native currency transfers from internal calls
        Internal => "internal",
        /// Fungible token transfers
        Erc20 => "erc20",
        /// ERC-721 token transfers
        Erc721 => "erc721",
        /// ERC-1155 token transfers
        Erc1155 => "erc1155",
        /// Non-standard NFT contracts such as CryptoPunks
        SpecialNft => "specialnft",
    }
}
