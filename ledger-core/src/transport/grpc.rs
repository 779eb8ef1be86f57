//! # Binary Transport
//!
//! This module wraps a standard `tonic` client to provide a generic interface for the binary
//! query path. It is agnostic to the specific protobuf messages being exchanged.
//!
//! ## How it works
//!
//! The [`GrpcClient`] utilizes the [`BytesCodec`] to move already-encoded messages. The query
//! routes know the concrete request/response types; the client only knows the method path.
//!
//! * **Dynamic Pathing**: The HTTP/2 path (e.g., `/cosmos.bank.v1beta1.Query/Balance`) is
//!   supplied per call.
//! * **Shared connection**: The underlying `tonic` client is cloned per call, so a single
//!   connection serves concurrent calls without locking.
//! * **Call context**: The caller's deadline becomes the gRPC timeout, the query height
//!   becomes the `x-cosmos-block-height` metadata entry.
//!
//! The [`GrpcTransport`] trait is the seam the dispatcher talks to, so tests can substitute
//! an in-memory backend.
use super::{BLOCK_HEIGHT_HEADER, CallContext, codec::BytesCodec};
use crate::BoxError;
use bytes::Bytes;
use futures_util::future::BoxFuture;
use http_body::Body as HttpBody;
use std::str::FromStr;
use tonic::{
    Status,
    client::GrpcService,
    metadata::MetadataValue,
    transport::{Channel, Endpoint},
};

/// Errors that can occur when connecting to a gRPC server.
#[derive(Debug, thiserror::Error)]
pub enum ClientConnectError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("Failed to connect to '{0}': {1}")]
    ConnectionFailed(String, #[source] tonic::transport::Error),
}

/// A unary gRPC call over raw protobuf bytes.
pub trait GrpcTransport: Send + Sync {
    /// Sends `request` to the method at `path` and returns the encoded response message.
    fn unary<'a>(
        &'a self,
        path: &'a str,
        request: Bytes,
        ctx: &'a CallContext,
    ) -> BoxFuture<'a, Result<Bytes, Status>>;
}

/// A generic client for unary protobuf calls.
#[derive(Debug, Clone)]
pub struct GrpcClient<S = Channel> {
    client: tonic::client::Grpc<S>,
}

impl GrpcClient<Channel> {
    /// Connects to a gRPC server.
    ///
    /// # Arguments
    ///
    /// * `addr` - The server URI (e.g., `http://localhost:9090`).
    pub async fn connect(addr: &str) -> Result<Self, ClientConnectError> {
        let endpoint = Endpoint::new(addr.to_string())
            .map_err(|e| ClientConnectError::InvalidUrl(addr.to_string(), e))?;

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ClientConnectError::ConnectionFailed(addr.to_string(), e))?;

        Ok(Self::new(channel))
    }

    /// Creates a client whose connection is established on first use.
    pub fn connect_lazy(addr: &str) -> Result<Self, ClientConnectError> {
        let endpoint = Endpoint::new(addr.to_string())
            .map_err(|e| ClientConnectError::InvalidUrl(addr.to_string(), e))?;

        Ok(Self::new(endpoint.connect_lazy()))
    }
}

impl<S> GrpcClient<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    pub fn new(service: S) -> Self {
        let client = tonic::client::Grpc::new(service);
        Self { client }
    }

    /// Performs a unary gRPC call with an already-encoded request.
    ///
    /// # Returns
    ///
    /// * `Ok(Bytes)` - The encoded response message.
    /// * `Err(Status)` - The client was not ready, the deadline expired, or the server
    ///   returned an error status.
    pub async fn unary_bytes(
        &self,
        path: &str,
        request: Bytes,
        ctx: &CallContext,
    ) -> Result<Bytes, Status> {
        let mut client = self.client.clone();

        client.ready().await.map_err(|e| {
            let err: BoxError = e.into();
            Status::unavailable(format!("client was not ready: {err}"))
        })?;

        let path = http::uri::PathAndQuery::from_str(path)
            .map_err(|e| Status::internal(format!("invalid gRPC path '{path}': {e}")))?;
        let request = build_request(request, ctx)?;

        let call = client.unary(request, path, BytesCodec);

        let response = match ctx.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .map_err(|_| Status::deadline_exceeded("call deadline exceeded"))??,
            None => call.await?,
        };

        Ok(response.into_inner())
    }
}

impl<S> GrpcTransport for GrpcClient<S>
where
    S: GrpcService<tonic::body::Body> + Clone + Send + Sync + 'static,
    S::Future: Send,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    fn unary<'a>(
        &'a self,
        path: &'a str,
        request: Bytes,
        ctx: &'a CallContext,
    ) -> BoxFuture<'a, Result<Bytes, Status>> {
        Box::pin(self.unary_bytes(path, request, ctx))
    }
}

fn build_request(payload: Bytes, ctx: &CallContext) -> Result<tonic::Request<Bytes>, Status> {
    let mut request = tonic::Request::new(payload);

    if let Some(timeout) = ctx.timeout {
        request.set_timeout(timeout);
    }

    if let Some(height) = ctx.height {
        let value = MetadataValue::from_str(&height.to_string())
            .map_err(|e| Status::invalid_argument(format!("invalid height metadata: {e}")))?;
        request.metadata_mut().insert(BLOCK_HEIGHT_HEADER, value);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_request_sets_height_metadata() {
        let ctx = CallContext::default().at_height(42);

        let request = build_request(Bytes::from_static(b"\x01"), &ctx).unwrap();

        assert_eq!(
            request.metadata().get(BLOCK_HEIGHT_HEADER).unwrap(),
            "42"
        );
    }

    #[test]
    fn test_build_request_sets_timeout_header() {
        let ctx = CallContext::default().with_timeout(Duration::from_secs(3));

        let request = build_request(Bytes::new(), &ctx).unwrap();

        assert!(request.metadata().get("grpc-timeout").is_some());
    }
}
