//! Async wrapper around synchronous FubClient.
//!
//! This module provides an async interface to the synchronous FubClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::FubClient;
use crate::error::{FubApiError, FubApiResult};
use crate::metrics::Metrics;
use crate::models::ApiRequest;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async seam between the dispatcher and the HTTP transport.
///
/// The dispatcher only ever issues one `execute` per tool call, which keeps
/// alternative implementations (recording mocks in tests) trivial.
#[async_trait]
pub trait AsyncFubClient: Send + Sync {
    /// Issue one request and return the decoded response body.
    async fn execute(&self, request: ApiRequest) -> FubApiResult<Value>;

    /// Metrics for the underlying transport, if it keeps any.
    fn metrics(&self) -> Option<&Metrics> {
        None
    }
}

/// Async wrapper around synchronous FubClient.
///
/// If the calling future is dropped while a request is in flight, the
/// blocking task runs to completion and its result is discarded.
#[derive(Clone)]
pub struct AsyncFubClientImpl {
    client: Arc<FubClient>,
}

impl AsyncFubClientImpl {
    pub fn new(client: FubClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncFubClient for AsyncFubClientImpl {
    async fn execute(&self, request: ApiRequest) -> FubApiResult<Value> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.execute(&request))
            .await
            .map_err(|e| FubApiError::Join(e.to_string()))?
    }

    fn metrics(&self) -> Option<&Metrics> {
        Some(self.client.metrics())
    }
}
