// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Media lookup API endpoint
//!
//! Provides the `/api/fetch` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::fetch_media_handler;
pub use request::UrlQuery;
pub use response::MediaApiResponse;
