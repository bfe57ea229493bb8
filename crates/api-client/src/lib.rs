// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Request construction and response normalization for JSON HTTP APIs
//!
//! This crate holds the layer every endpoint method of a provider client goes
//! through, independent of which provider it is.
//!
//! # Core Abstractions
//!
//! - **[`QueryPairs`]**: flat query parameters where absent values are never emitted
//! - **[`PreparedRequest`]**: a fully built GET or POST, inspectable before it is sent
//! - **[`JsonHttpClient`]**: sends a prepared request with fixed JSON headers
//! - **[`ApiError`]**: classified failures, see [`classify_status`] for the status table
//!
//! # Key Features
//!
//! - **One request per call**: no retries, caching or throttling happen here
//! - **Status Classification**: 400/401/403/404/429/500 become typed errors,
//!   every other status is parsed as JSON and returned verbatim
//! - **Transport Pass-through**: connection, TLS and timeout failures surface
//!   unchanged as [`ApiError::Transport`]

pub mod dispatch;
pub mod error;
pub mod request;

pub use dispatch::*;
pub use error::*;
pub use request::*;
