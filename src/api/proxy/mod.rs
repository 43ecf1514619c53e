// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Byte-stream proxy endpoint

pub mod handler;

pub use handler::proxy_handler;
