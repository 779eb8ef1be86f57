//! # Query Dispatcher
//!
//! Runs a [`QueryRequest`] on one of two mutually exclusive paths and returns the answer as
//! JSON text:
//!
//! * **Binary**: the module resolves the payload into a [`GrpcCall`]. The encoded request is
//!   sent over the shared gRPC transport and the response is decoded and rendered as JSON.
//!   Transaction-history search resolves into an [`RpcCall`] on the search transport
//!   instead.
//! * **Textual**: the module resolves the payload into a [`RestPath`]. The GET goes through
//!   the [`RestClient`], which serializes textual calls behind its lock, and the body is
//!   returned unmodified.
//!
//! Per call:
//!
//! ```text
//! lookup module -> resolve tag for backend -> invoke transport -> JSON
//!       |                  |                         |
//!    NotFound     InvalidMsgType / NotSupported   *Request error
//! ```
//!
//! Nothing is retried. Parse errors short-circuit before any I/O because the payload was
//! validated by its factory.
use crate::{
    error::Error,
    module::{BinaryCall, GrpcCall, PreparedQuery, RpcCall},
    msg::{Backend, QueryRequest},
    registry::Registry,
    transport::{
        CallContext,
        grpc::GrpcTransport,
        rest::{RestClient, RestPath},
        rpc::RpcClient,
    },
};
use std::{fmt, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct QueryDispatcher {
    registry: Arc<Registry>,
    grpc: Option<Arc<dyn GrpcTransport>>,
    rest: Option<Arc<RestClient>>,
    rpc: Option<Arc<RpcClient>>,
    default_backend: Backend,
    default_timeout: Option<Duration>,
}

impl fmt::Debug for QueryDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDispatcher")
            .field("modules", &self.registry.names())
            .field("grpc", &self.grpc.is_some())
            .field("rest", &self.rest.as_ref().map(|r| r.base_url()))
            .field("rpc", &self.rpc.as_ref().map(|r| r.url()))
            .field("default_backend", &self.default_backend)
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

impl QueryDispatcher {
    /// A dispatcher over `registry` with no transport attached yet.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            grpc: None,
            rest: None,
            rpc: None,
            default_backend: Backend::default(),
            default_timeout: None,
        }
    }

    pub fn with_grpc(self, transport: impl GrpcTransport + 'static) -> Self {
        self.with_shared_grpc(Arc::new(transport))
    }

    pub fn with_shared_grpc(mut self, transport: Arc<dyn GrpcTransport>) -> Self {
        self.grpc = Some(transport);
        self
    }

    pub fn with_rest(mut self, client: RestClient) -> Self {
        self.rest = Some(Arc::new(client));
        self
    }

    pub fn with_rpc(mut self, client: RpcClient) -> Self {
        self.rpc = Some(Arc::new(client));
        self
    }

    /// Backend used by requests that do not select one.
    pub fn with_default_backend(mut self, backend: Backend) -> Self {
        self.default_backend = backend;
        self
    }

    /// Deadline used by calls whose context has none.
    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn default_backend(&self) -> Backend {
        self.default_backend
    }

    /// Resolves `request` into the transport call it would make, without performing it.
    pub fn prepare(&self, request: QueryRequest) -> Result<PreparedQuery, Error> {
        let backend = request.backend.unwrap_or(self.default_backend);
        let module = self.registry.module(&request.module)?;

        tracing::debug!(
            module = module.name(),
            msg_type = %request.msg_type,
            %backend,
            "dispatching query"
        );

        module.route_query(&request.msg_type, request.payload, backend)
    }

    /// Runs `request` with the default call context.
    pub async fn query(&self, request: QueryRequest) -> Result<String, Error> {
        self.query_with(request, &CallContext::default()).await
    }

    /// Runs `request` with `ctx`. The default timeout applies when `ctx` has none.
    pub async fn query_with(
        &self,
        request: QueryRequest,
        ctx: &CallContext,
    ) -> Result<String, Error> {
        let prepared = self.prepare(request)?;

        let mut ctx = ctx.clone();
        if ctx.timeout.is_none() {
            ctx.timeout = self.default_timeout;
        }

        match prepared {
            PreparedQuery::Binary(BinaryCall::Grpc(call)) => self.grpc_call(call, &ctx).await,
            PreparedQuery::Binary(BinaryCall::Rpc(call)) => self.rpc_call(call, &ctx).await,
            PreparedQuery::Textual(route) => self.rest_call(&route, &ctx).await,
        }
    }

    async fn grpc_call(&self, call: GrpcCall, ctx: &CallContext) -> Result<String, Error> {
        let grpc = self
            .grpc
            .as_ref()
            .ok_or_else(|| Error::NotSupported("no gRPC endpoint is configured".to_string()))?;

        tracing::trace!(path = %call.path, "sending gRPC request");

        let response = grpc
            .unary(&call.path, call.request.clone(), ctx)
            .await
            .map_err(|status| {
                tracing::warn!(path = %call.path, code = ?status.code(), "gRPC request failed");
                Error::GrpcRequest(status)
            })?;

        call.decode(response)
    }

    async fn rpc_call(&self, call: RpcCall, ctx: &CallContext) -> Result<String, Error> {
        let rpc = self
            .rpc
            .as_ref()
            .ok_or_else(|| Error::NotSupported("no RPC endpoint is configured".to_string()))?;

        tracing::trace!(method = call.method, "sending JSON-RPC request");

        rpc.call(call.method, &call.params, ctx).await.map_err(|e| {
            tracing::warn!(method = call.method, error = %e, "JSON-RPC request failed");
            Error::RpcRequest(e)
        })
    }

    async fn rest_call(&self, route: &RestPath, ctx: &CallContext) -> Result<String, Error> {
        let rest = self
            .rest
            .as_ref()
            .ok_or_else(|| Error::NotSupported("no REST endpoint is configured".to_string()))?;

        tracing::trace!(path = %route.path, query = ?route.query, "sending REST request");

        rest.get(route, ctx).await.map_err(|e| {
            tracing::warn!(path = %route.path, error = %e, "REST request failed");
            Error::RestRequest(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ErrorKind,
        args::ArgParser,
        modules::{bank, staking},
    };

    fn dispatcher() -> QueryDispatcher {
        QueryDispatcher::new(Arc::new(Registry::standard()))
    }

    #[test]
    fn test_prepare_uses_default_backend() {
        let query = QueryRequest::new(bank::query_params());

        let binary = dispatcher().prepare(query.clone()).unwrap();
        assert!(matches!(binary, PreparedQuery::Binary(BinaryCall::Grpc(_))));

        let textual = dispatcher()
            .with_default_backend(Backend::Textual)
            .prepare(query)
            .unwrap();
        let PreparedQuery::Textual(route) = textual else {
            panic!("expected a REST route");
        };
        assert_eq!(route.path, "/cosmos/bank/v1beta1/params");
    }

    #[test]
    fn test_unknown_module_is_not_found() {
        let mut query = QueryRequest::new(bank::query_params());
        query.module = "ibc".into();

        let err = dispatcher().prepare(query).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_unknown_tag_is_invalid_msg_type() {
        let mut query = QueryRequest::new(bank::query_params());
        query.msg_type = "query-burns".into();

        let err = dispatcher().prepare(query).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidMsgType);
        assert!(err.to_string().contains("query-burns"));
    }

    #[test]
    fn test_binary_only_query_on_rest() {
        let args = ArgParser::default();
        let query = QueryRequest::new(staking::query_historical_info(&args, "10").unwrap())
            .on(Backend::Textual);

        let err = dispatcher().prepare(query).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotSupported);
        assert!(err.to_string().contains("query-historical-info"));
    }

    #[tokio::test]
    async fn test_missing_transport_is_not_supported() {
        let query = QueryRequest::new(bank::query_params());

        let err = dispatcher().query(query).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotSupported);
    }
}
