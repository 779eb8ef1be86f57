//! # Search Transport
//!
//! A JSON-RPC 2.0 client for the node's RPC endpoint. The core only uses it for the
//! transaction-history search (`tx_search`); the `result` member is returned as JSON text.
use super::CallContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// JSON-RPC request envelope.
#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: &'a Value,
}

/// JSON-RPC response envelope.
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum RpcRequestError {
    #[error("request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("'{url}' responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(#[source] serde_json::Error),
    #[error("'{method}' returned error {}: {}", .error.code, .error.message)]
    Rpc { method: String, error: JsonRpcError },
    #[error("'{0}' returned neither a result nor an error")]
    MissingResult(String),
}

#[derive(Debug)]
pub struct RpcClient {
    url: String,
    client: reqwest::Client,
    request_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
            request_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Makes a JSON-RPC call and returns the `result` member serialized as JSON.
    pub async fn call(
        &self,
        method: &str,
        params: &Value,
        ctx: &CallContext,
    ) -> Result<String, RpcRequestError> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);

        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(timeout) = ctx.timeout {
            request = request.timeout(timeout);
        }

        let http_error = |source| RpcRequestError::Http {
            url: self.url.clone(),
            source,
        };

        let response = request.send().await.map_err(http_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(http_error)?;

        // JSON-RPC servers report call errors inside a 2xx or 500 body
        let envelope: JsonRpcResponse = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(RpcRequestError::Status {
                    url: self.url.clone(),
                    status,
                });
            }
            Err(e) => return Err(RpcRequestError::InvalidResponse(e)),
        };

        if let Some(error) = envelope.error {
            return Err(RpcRequestError::Rpc {
                method: method.to_string(),
                error,
            });
        }

        let result = envelope
            .result
            .ok_or_else(|| RpcRequestError::MissingResult(method.to_string()))?;

        serde_json::to_string(&result).map_err(RpcRequestError::InvalidResponse)
    }
}
