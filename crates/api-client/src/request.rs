// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request building blocks
//!
//! A [`PreparedRequest`] is everything needed to issue one call: the resolved
//! URL, the HTTP method, query pairs for GET and a JSON body for POST. Building
//! it is a pure step, so the exact query string or body an operation produces
//! can be inspected without touching the network.

use std::fmt::Display;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::{Url, form_urlencoded};

use crate::error::{ApiError, ApiResult};

/// Ordered query parameters
///
/// Optional values are pushed through [`QueryPairs::push_opt`], which skips
/// `None` entirely, and lists are encoded as one pair per element under the
/// same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Create an empty set of query pairs
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter
    pub fn push(&mut self, name: &str, value: impl Display) -> &mut Self {
        self.0.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when a value is present
    pub fn push_opt(&mut self, name: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Append one pair per element
    pub fn push_all<T: Display>(
        &mut self,
        name: &str,
        values: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        for value in values {
            self.push(name, value);
        }
        self
    }

    /// Pairs in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    /// Value of the first pair named `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether any pair is named `name`
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(key, _)| key == name)
    }

    /// Whether no pairs were pushed
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// URL-encoded form, e.g. `owner=0xabc&pageSize=100`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

/// Parameters of a GET operation
pub trait ToQuery {
    /// Flatten into query pairs, leaving out every absent value
    fn to_query(&self) -> QueryPairs;
}

impl ToQuery for () {
    fn to_query(&self) -> QueryPairs {
        QueryPairs::new()
    }
}

/// A single fully-resolved request
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Operation name used in logs
    pub operation: &'static str,
    /// HTTP method
    pub method: Method,
    /// Endpoint URL without query string
    pub url: Url,
    /// Query parameters, empty for POST operations
    pub query: QueryPairs,
    /// JSON body, only set for POST operations
    pub body: Option<Value>,
}

impl PreparedRequest {
    /// A GET carrying `params` as its query string
    pub fn get(operation: &'static str, url: Url, params: &impl ToQuery) -> Self {
        Self {
            operation,
            method: Method::GET,
            url,
            query: params.to_query(),
            body: None,
        }
    }

    /// A POST carrying `payload` as its JSON body
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if the payload cannot be represented as JSON
    pub fn post(operation: &'static str, url: Url, payload: &impl Serialize) -> ApiResult<Self> {
        let body = serde_json::to_value(payload).map_err(|e| {
            ApiError::invalid_argument(format!("{operation} payload is not valid JSON: {e}"))
        })?;

        Ok(Self {
            operation,
            method: Method::POST,
            url,
            query: QueryPairs::new(),
            body: Some(body),
        })
    }

    /// Endpoint URL with the query string attached
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.set_query(Some(&self.query.encode()));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct Listing {
        owner: String,
        page_key: Option<String>,
        contracts: Option<Vec<String>>,
        with_metadata: bool,
    }

    impl ToQuery for Listing {
        fn to_query(&self) -> QueryPairs {
            let mut query = QueryPairs::new();
            query
                .push("owner", &self.owner)
                .push_opt("pageKey", self.page_key.as_deref())
                .push_all("contractAddresses", self.contracts.iter().flatten())
                .push("withMetadata", self.with_metadata);
            query
        }
    }

    #[test]
    fn absent_values_are_not_encoded() {
        let listing = Listing {
            owner: "0xabc".to_string(),
            page_key: None,
            contracts: None,
            with_metadata: false,
        };

        let query = listing.to_query();
        assert_eq!(query.encode(), "owner=0xabc&withMetadata=false");
        assert!(!query.contains("pageKey"));
        assert!(!query.encode().contains("None"));
    }

    #[test]
    fn lists_repeat_the_key() {
        let listing = Listing {
            owner: "0xabc".to_string(),
            page_key: Some("next page".to_string()),
            contracts: Some(vec!["0x1".to_string(), "0x2".to_string()]),
            with_metadata: true,
        };

        assert_eq!(
            listing.to_query().encode(),
            "owner=0xabc&pageKey=next+page&contractAddresses=0x1&contractAddresses=0x2&withMetadata=true"
        );
    }

    #[test]
    fn prepared_get_attaches_query() {
        let listing = Listing {
            owner: "0xabc".to_string(),
            page_key: None,
            contracts: None,
            with_metadata: false,
        };
        let url = Url::parse("https://example.com/nft/v2/key/getNFTs").unwrap();
        let request = PreparedRequest::get("getNFTs", url, &listing);

        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
        assert_eq!(
            request.full_url().as_str(),
            "https://example.com/nft/v2/key/getNFTs?owner=0xabc&withMetadata=false"
        );
    }

    #[test]
    fn prepared_post_serializes_body() {
        let url = Url::parse("https://example.com/v2/key").unwrap();
        let request =
            PreparedRequest::post("batch", url.clone(), &json!({"contractAddresses": ["0x1"]}))
                .unwrap();

        assert_eq!(request.method, Method::POST);
        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(json!({"contractAddresses": ["0x1"]})));
        assert_eq!(request.full_url(), url);
    }
}
