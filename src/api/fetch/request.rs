// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Query parameters shared by the media and proxy endpoints

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Query string for GET /api/fetch and GET /api/proxy
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UrlQuery {
    /// Target URL (required)
    #[serde(default)]
    pub url: Option<String>,
}

impl UrlQuery {
    /// Return the trimmed target URL, or an error if it is missing
    pub fn validate(&self) -> Result<&str, ApiError> {
        match self.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(ApiError::MissingParameter("url".to_string())),
        }
    }
}
