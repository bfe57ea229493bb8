// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `alchemy_getAssetTransfers`

use alchemy_api::{
    AlchemyClient, AlchemyConfig, ApiError, AssetTransfersParams, AssetTransfersRequest,
    BlockNumber, SortOrder, TransferCategory,
};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

use fixtures::*;

/// Test the default request body sent for a single category
#[tokio::test]
async fn get_asset_transfers_defaults() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(transfers_path()))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "id": 1,
            "jsonrpc": "2.0",
            "method": "alchemy_getAssetTransfers",
            "params": {
                "fromBlock": "0x0",
                "toBlock": "latest",
                "category": ["erc721"],
                "order": "asc",
                "withMetadata": false,
                "excludeZeroValue": true,
                "maxCount": "0x3e8"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_transfers_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = AssetTransfersRequest::new(
        1,
        AssetTransfersParams::new(vec![TransferCategory::Erc721]),
    );
    let result = client.get_asset_transfers(&request).await.unwrap();

    assert_eq!(result, asset_transfers_response());
    assert_eq!(result["result"]["transfers"][0]["category"], "erc721");
}

/// Test that every set filter is sent and nothing else
#[tokio::test]
async fn get_asset_transfers_with_filters() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("POST"))
        .and(path(transfers_path()))
        .and(body_json(json!({
            "id": 7,
            "jsonrpc": "2.0",
            "method": "alchemy_getAssetTransfers",
            "params": {
                "fromBlock": "0xf42400",
                "toBlock": "0xf42464",
                "category": ["external", "erc20", "specialnft"],
                "toAddress": TEST_OWNER,
                "contractAddresses": [TEST_CONTRACT],
                "order": "desc",
                "withMetadata": true,
                "excludeZeroValue": false,
                "maxCount": "0x64",
                "pageKey": "a1b2"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_transfers_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = AssetTransfersParams {
        from_block: BlockNumber::hex(16_000_000),
        to_block: BlockNumber::hex(16_000_100),
        to_address: Some(TEST_OWNER.to_string()),
        contract_addresses: Some(vec![TEST_CONTRACT.to_string()]),
        order: SortOrder::Desc,
        with_metadata: true,
        exclude_zero_value: false,
        page_key: Some("a1b2".to_string()),
        ..AssetTransfersParams::new(vec![
            TransferCategory::External,
            TransferCategory::Erc20,
            TransferCategory::SpecialNft,
        ])
    }
    .with_max_count(100);

    client
        .get_asset_transfers(&AssetTransfersRequest::new(7, params))
        .await
        .unwrap();
}

/// Test that a request without categories never leaves the client
#[tokio::test]
async fn get_asset_transfers_requires_category() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    let request = AssetTransfersRequest::new(1, AssetTransfersParams::new(vec![]));
    let error = client.get_asset_transfers(&request).await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidArgument { .. }));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

/// Test classified statuses on the transfers endpoint
#[tokio::test]
async fn get_asset_transfers_error_statuses() {
    for (status, expected) in [
        (400, "unsupported category"),
        (403, "Access denied"),
        (404, "Not found"),
        (429, "Rate limit exceeded"),
        (500, "Internal server error"),
    ] {
        let mock_server = MockServer::start().await;
        let client = create_test_client(&mock_server);

        Mock::given(method("POST"))
            .and(path(transfers_path()))
            .respond_with(ResponseTemplate::new(status).set_body_string("unsupported category"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = AssetTransfersRequest::new(
            1,
            AssetTransfersParams::new(vec![TransferCategory::Internal]),
        );
        let error = client.get_asset_transfers(&request).await.unwrap_err();

        assert_eq!(error.to_string(), expected, "status {status}");
        assert_eq!(error.status().map(|s| s.as_u16()), Some(status));
    }
}

/// Test a JSON-RPC error object under a 200 status is returned unchanged
#[tokio::test]
async fn get_asset_transfers_rpc_error_is_returned() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    let rpc_error = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": -32602, "message": "invalid block range"}
    });

    Mock::given(method("POST"))
        .and(path(transfers_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(&rpc_error))
        .mount(&mock_server)
        .await;

    let request = AssetTransfersRequest::new(
        1,
        AssetTransfersParams::new(vec![TransferCategory::Erc1155]),
    );
    let result = client.get_asset_transfers(&request).await.unwrap();

    assert_eq!(result, rpc_error);
}

/// Test a caller-supplied transport is used for dispatch
#[tokio::test]
async fn injected_http_client_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(transfers_path()))
        .and(header("x-proxy-tag", "edge"))
        .respond_with(ResponseTemplate::new(200).set_body_json(asset_transfers_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-proxy-tag", "edge".parse().unwrap());
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(TEST_TIMEOUT_SECONDS))
        .build()
        .unwrap();
    let config = AlchemyConfig::new(TEST_API_KEY)
        .unwrap()
        .with_base_url(Url::parse(&mock_server.uri()).unwrap());
    let client = AlchemyClient::with_http_client(config, http).unwrap();

    let request = AssetTransfersRequest::new(
        1,
        AssetTransfersParams::new(vec![TransferCategory::Erc721]),
    );
    client.get_asset_transfers(&request).await.unwrap();
}
