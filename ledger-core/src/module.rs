//! # Modules
//!
//! A [`Module`] is the capability set of one protocol domain: its name, the transaction
//! messages it can route and the queries it can dispatch.
//!
//! Routing is table driven. Each module owns two maps built once by [`ModuleBuilder`]:
//!
//! * `tx_routes`: message-type tag to [`TxHandler`], which packs the payload into one or more
//!   `Any` messages.
//! * `query_routes`: message-type tag to [`QueryRoute`], which holds one handler per backend.
//!   A backend a query cannot run on holds the reason instead of a handler, so the restriction
//!   is a property of the table and not a fall-through.
//!
//! Handlers are pure: they turn a payload into a [`BinaryCall`] or a [`RestPath`], and the
//! [`crate::QueryDispatcher`] performs the I/O.
use crate::{
    error::Error,
    msg::{Backend, QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use bytes::Bytes;
use ledger_proto::Any;
use prost::Message;
use serde::Serialize;
use std::collections::HashMap;

pub type TxHandler = fn(TxMsg) -> Result<Vec<Any>, Error>;
pub type BinaryHandler = fn(QueryMsg) -> Result<BinaryCall, Error>;
pub type TextualHandler = fn(&QueryMsg) -> Result<RestPath, Error>;

/// Reason given for queries that only exist as gRPC methods.
pub const BINARY_ONLY: &str = "unsupported on REST: use the binary path";

/// A unary gRPC call with an encoded request and the matching response decoder.
#[derive(Debug, Clone)]
pub struct GrpcCall {
    pub path: String,
    pub request: Bytes,
    decode: fn(Bytes) -> Result<String, Error>,
}

impl GrpcCall {
    /// Builds the call to `/{service}/{method}`, decoding the answer as `Res`.
    pub fn new<Req, Res>(service: &str, method: &str, request: &Req) -> Self
    where
        Req: Message,
        Res: Message + Default + Serialize,
    {
        Self {
            path: format!("/{service}/{method}"),
            request: Bytes::from(request.encode_to_vec()),
            decode: decode_json::<Res>,
        }
    }

    /// Decodes the response bytes and renders them as JSON.
    pub fn decode(&self, response: Bytes) -> Result<String, Error> {
        (self.decode)(response)
    }
}

/// A JSON-RPC call on the search transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    pub method: &'static str,
    pub params: serde_json::Value,
}

#[derive(Debug, Clone)]
pub enum BinaryCall {
    Grpc(GrpcCall),
    Rpc(RpcCall),
}

/// A query resolved to a concrete transport call.
#[derive(Debug, Clone)]
pub enum PreparedQuery {
    Binary(BinaryCall),
    Textual(RestPath),
}

fn decode_json<M>(bytes: Bytes) -> Result<String, Error>
where
    M: Message + Default + Serialize,
{
    let message = M::decode(bytes).map_err(|e| {
        Error::Parse(format!(
            "cannot decode {} response: {e}",
            std::any::type_name::<M>()
        ))
    })?;

    serde_json::to_string(&message)
        .map_err(|e| Error::Convert(format!("cannot render response as JSON: {e}")))
}

/// The REST base path of a proto package: `cosmos.bank.v1beta1` -> `/cosmos/bank/v1beta1`.
pub fn rest_base(package: &str) -> String {
    format!("/{}", package.replace('.', "/"))
}

/// The handlers of one query tag, one per backend.
#[derive(Debug, Clone, Copy)]
pub struct QueryRoute {
    binary: Result<BinaryHandler, &'static str>,
    textual: Result<TextualHandler, &'static str>,
}

impl QueryRoute {
    pub fn both(binary: BinaryHandler, textual: TextualHandler) -> Self {
        Self {
            binary: Ok(binary),
            textual: Ok(textual),
        }
    }

    pub fn binary_only(binary: BinaryHandler, reason: &'static str) -> Self {
        Self {
            binary: Ok(binary),
            textual: Err(reason),
        }
    }

    pub fn textual_only(textual: TextualHandler, reason: &'static str) -> Self {
        Self {
            binary: Err(reason),
            textual: Ok(textual),
        }
    }

    pub fn supports(&self, backend: Backend) -> bool {
        self.restriction(backend).is_none()
    }

    /// Why the query cannot run on `backend`, if it cannot.
    pub fn restriction(&self, backend: Backend) -> Option<&'static str> {
        match backend {
            Backend::Binary => self.binary.err(),
            Backend::Textual => self.textual.err(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub route_tx: bool,
    pub route_query: bool,
}

#[derive(Debug, Clone)]
pub struct Module {
    name: &'static str,
    tx_routes: HashMap<&'static str, TxHandler>,
    query_routes: HashMap<&'static str, QueryRoute>,
}

impl Module {
    pub fn builder(name: &'static str) -> ModuleBuilder {
        ModuleBuilder {
            module: Module {
                name,
                tx_routes: HashMap::new(),
                query_routes: HashMap::new(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            route_tx: !self.tx_routes.is_empty(),
            route_query: !self.query_routes.is_empty(),
        }
    }

    /// The transaction tags of the module, sorted.
    pub fn tx_types(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.tx_routes.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// The query tags of the module, sorted.
    pub fn query_types(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.query_routes.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn query_route(&self, msg_type: &str) -> Option<&QueryRoute> {
        self.query_routes.get(msg_type)
    }

    /// Packs `payload` into the messages routed under `msg_type`.
    pub fn route_tx(&self, msg_type: &str, payload: TxMsg) -> Result<Vec<Any>, Error> {
        let handler = self
            .tx_routes
            .get(msg_type)
            .ok_or_else(|| Error::InvalidMsgType(msg_type.to_string()))?;

        if payload.module() != self.name || payload.msg_type() != msg_type {
            return Err(Error::payload_mismatch(msg_type, payload.msg_type()));
        }

        handler(payload)
    }

    /// Resolves `payload` into the transport call of `backend`.
    pub fn route_query(
        &self,
        msg_type: &str,
        payload: QueryMsg,
        backend: Backend,
    ) -> Result<PreparedQuery, Error> {
        let route = self
            .query_routes
            .get(msg_type)
            .ok_or_else(|| Error::InvalidMsgType(msg_type.to_string()))?;

        if payload.module() != self.name || payload.msg_type() != msg_type {
            return Err(Error::payload_mismatch(msg_type, payload.msg_type()));
        }

        let unsupported = |reason: &str| Error::NotSupported(format!("'{msg_type}' is {reason}"));

        match backend {
            Backend::Binary => {
                let handler = route.binary.map_err(unsupported)?;
                handler(payload).map(PreparedQuery::Binary)
            }
            Backend::Textual => {
                let handler = route.textual.map_err(unsupported)?;
                handler(&payload).map(PreparedQuery::Textual)
            }
        }
    }
}

pub struct ModuleBuilder {
    module: Module,
}

impl ModuleBuilder {
    pub fn tx(mut self, msg_type: &'static str, handler: TxHandler) -> Self {
        self.module.tx_routes.insert(msg_type, handler);
        self
    }

    /// Routes several tags to the same handler.
    pub fn txs(mut self, msg_types: &[&'static str], handler: TxHandler) -> Self {
        for &msg_type in msg_types {
            self.module.tx_routes.insert(msg_type, handler);
        }
        self
    }

    pub fn query(mut self, msg_type: &'static str, route: QueryRoute) -> Self {
        self.module.query_routes.insert(msg_type, route);
        self
    }

    /// Routes several tags to the same pair of handlers.
    pub fn queries(
        mut self,
        msg_types: &[&'static str],
        binary: BinaryHandler,
        textual: TextualHandler,
    ) -> Self {
        for &msg_type in msg_types {
            self.module
                .query_routes
                .insert(msg_type, QueryRoute::both(binary, textual));
        }
        self
    }

    pub fn build(self) -> Module {
        self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_proto::bank::{QueryBalanceRequest, QueryBalanceResponse};
    use ledger_proto::base::Coin;

    #[test]
    fn test_grpc_call_path_and_decoder() {
        let request = QueryBalanceRequest {
            address: "cosmos1x".into(),
            denom: "uatom".into(),
        };

        let call = GrpcCall::new::<_, QueryBalanceResponse>(
            "cosmos.bank.v1beta1.Query",
            "Balance",
            &request,
        );

        assert_eq!(call.path, "/cosmos.bank.v1beta1.Query/Balance");
        assert_eq!(
            QueryBalanceRequest::decode(call.request.clone()).unwrap(),
            request
        );

        let response = QueryBalanceResponse {
            balance: Some(Coin::new("10", "uatom")),
        };
        let json = call.decode(Bytes::from(response.encode_to_vec())).unwrap();

        assert_eq!(json, r#"{"balance":{"denom":"uatom","amount":"10"}}"#);
    }

    #[test]
    fn test_decode_garbage_is_parse_error() {
        let call = GrpcCall::new::<_, QueryBalanceResponse>(
            "cosmos.bank.v1beta1.Query",
            "Balance",
            &QueryBalanceRequest::default(),
        );

        let err = call.decode(Bytes::from_static(&[0xff, 0xff, 0xff])).unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Parse);
    }

    #[test]
    fn test_rest_base() {
        assert_eq!(rest_base("cosmos.bank.v1beta1"), "/cosmos/bank/v1beta1");
        assert_eq!(
            rest_base("cosmos.base.tendermint.v1beta1"),
            "/cosmos/base/tendermint/v1beta1"
        );
    }
}
