// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::fetch::FetchError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Missing {0}")]
    MissingParameter(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Rate limit exceeded, retry after {retry_after} seconds")]
    RateLimitExceeded { retry_after: u64 },

    #[error("Upstream error: {0}")]
    BadGateway(String),

    #[error("Upstream timed out: {0}")]
    GatewayTimeout(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        let (error_type, details) = match self {
            ApiError::MissingParameter(name) => {
                let mut details = HashMap::new();
                details.insert(
                    "parameter".to_string(),
                    serde_json::Value::String(name.clone()),
                );
                ("missing_parameter", Some(details))
            }
            ApiError::InvalidRequest(_) => ("invalid_request", None),
            ApiError::Forbidden(_) => ("forbidden", None),
            ApiError::RateLimitExceeded { retry_after } => {
                let mut details = HashMap::new();
                details.insert(
                    "retry_after".to_string(),
                    serde_json::Value::Number((*retry_after).into()),
                );
                ("rate_limit_exceeded", Some(details))
            }
            ApiError::BadGateway(_) => ("upstream_error", None),
            ApiError::GatewayTimeout(_) => ("upstream_timeout", None),
            ApiError::InternalError(_) => ("internal_error", None),
        };

        ErrorResponse {
            error: self.to_string(),
            error_type: error_type.to_string(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::InvalidUrl(msg) => ApiError::InvalidRequest(msg),
            FetchError::UnsafeUrl(url) => ApiError::Forbidden(format!("refusing to fetch {}", url)),
            FetchError::Timeout(url) => ApiError::GatewayTimeout(url),
            e @ (FetchError::Http(_) | FetchError::HttpStatus { .. } | FetchError::Body(_)) => {
                ApiError::BadGateway(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(self.to_response())).into_response();

        if let ApiError::RateLimitExceeded { retry_after } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}
