//! Transaction lookup and history search (`cosmos.tx.v1beta1`). Query only.
//!
//! `query-tx` finds a transaction by hash, signatures or `address/sequence` and runs on both
//! backends, except that the REST gateway only takes a single event condition.
//! `search-txs` matches arbitrary event filters through the node's `tx_search` RPC and has
//! no REST form.
use crate::{
    args::{ArgParser, QueryTxMode, events::to_query, parse_events, parse_query_tx},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, QueryRoute, RpcCall, rest_base},
    msg::QueryMsg,
    transport::rest::RestPath,
};
use ledger_proto::{
    base::PageRequest,
    tx::{self as pb, OrderBy},
};
use serde_json::json;

pub const NAME: &str = "tx";

pub const QUERY_TX: &str = "query-tx";
pub const SEARCH_TXS: &str = "search-txs";

pub const MULTI_EVENT_SEARCH: &str = "unsupported on REST: use the binary path for multi-event search";

/// JSON-RPC method behind `search-txs`.
pub const TX_SEARCH_METHOD: &str = "tx_search";

const SERVICE: &str = "cosmos.tx.v1beta1.Service";

#[derive(Debug, Clone, PartialEq)]
pub enum TxQuery {
    ByHash(pb::GetTxRequest),
    ByEvents(pb::GetTxsEventRequest),
    Search(TxSearch),
}

impl TxQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            TxQuery::ByHash(_) | TxQuery::ByEvents(_) => QUERY_TX,
            TxQuery::Search(_) => SEARCH_TXS,
        }
    }
}

/// Parameters of a `tx_search` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxSearch {
    pub query: String,
    /// One-based.
    pub page: u64,
    pub per_page: u64,
    pub order_by: OrderBy,
}

impl TxSearch {
    fn params(&self) -> serde_json::Value {
        let order_by = match self.order_by {
            OrderBy::Unspecified => "",
            OrderBy::Asc => "asc",
            OrderBy::Desc => "desc",
        };
        json!({
            "query": self.query,
            "prove": false,
            "page": self.page.to_string(),
            "per_page": self.per_page.to_string(),
            "order_by": order_by,
        })
    }
}

/// Looks a transaction up by `(type, value)`: `hash` (default), `signature` or `acc_seq`.
pub fn query_tx(args: &ArgParser, kind: &str, value: &str) -> Result<TxQuery, Error> {
    let params = parse_query_tx(kind, value)?;

    let query = match params.mode {
        QueryTxMode::Hash => TxQuery::ByHash(pb::GetTxRequest {
            hash: tx_hash(&params.events.concat())?,
        }),
        QueryTxMode::Signature | QueryTxMode::AccSeq => {
            let limit = page_limit(args, None);
            TxQuery::ByEvents(pb::GetTxsEventRequest {
                events: params.events,
                pagination: None,
                order_by: OrderBy::Unspecified as i32,
                page: 1,
                limit,
            })
        }
    };
    Ok(query)
}

/// A transaction hash is hex: it ends up as a REST path segment.
fn tx_hash(input: &str) -> Result<String, Error> {
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Parse(format!("invalid tx hash '{input}': expected hex")));
    }
    Ok(input.to_string())
}

/// Searches transactions matching every `key=value` clause of `events` (joined by `&`).
/// `order` is `asc`, `desc` or blank.
pub fn search_txs(
    args: &ArgParser,
    events: &str,
    order: &str,
    page: Option<PageRequest>,
) -> Result<TxQuery, Error> {
    let filters = parse_events(events)?;
    let order_by = parse_order(order)?;

    let page = args.page(page);
    let per_page = page_limit(args, Some(&page));

    Ok(TxQuery::Search(TxSearch {
        query: to_query(&filters),
        page: page.offset / per_page + 1,
        per_page,
        order_by,
    }))
}

fn parse_order(input: &str) -> Result<OrderBy, Error> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Ok(OrderBy::Unspecified),
        "asc" => Ok(OrderBy::Asc),
        "desc" => Ok(OrderBy::Desc),
        other => Err(Error::InvalidRequest(format!(
            "invalid order '{other}', expected 'asc' or 'desc'"
        ))),
    }
}

/// The limit of `page`, falling back to the default page and then to one.
fn page_limit(args: &ArgParser, page: Option<&PageRequest>) -> u64 {
    page.map(|p| p.limit)
        .filter(|&limit| limit > 0)
        .unwrap_or(args.default_page().limit)
        .max(1)
}

pub fn module() -> Module {
    Module::builder(NAME)
        .queries(&[QUERY_TX], binary, textual)
        .query(
            SEARCH_TXS,
            QueryRoute::binary_only(binary, MULTI_EVENT_SEARCH),
        )
        .build()
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Tx(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        TxQuery::ByHash(req) => {
            BinaryCall::Grpc(GrpcCall::new::<_, pb::GetTxResponse>(SERVICE, "GetTx", &req))
        }
        TxQuery::ByEvents(req) => BinaryCall::Grpc(GrpcCall::new::<_, pb::GetTxsEventResponse>(
            SERVICE,
            "GetTxsEvent",
            &req,
        )),
        TxQuery::Search(search) => BinaryCall::Rpc(RpcCall {
            method: TX_SEARCH_METHOD,
            params: search.params(),
        }),
    };

    Ok(call)
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Tx(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        TxQuery::ByHash(req) => RestPath::new(format!("{base}/txs/{}", req.hash)),
        TxQuery::ByEvents(req) => match req.events.as_slice() {
            [event] => RestPath::new(format!("{base}/txs"))
                .param("events", event.as_str())
                .param("pagination.page", req.page.to_string())
                .param("pagination.limit", req.limit.to_string()),
            events => {
                return Err(Error::NotSupported(format!(
                    "'{QUERY_TX}' with {} events is {MULTI_EVENT_SEARCH}",
                    events.len()
                )));
            }
        },
        TxQuery::Search(_) => {
            return Err(Error::NotSupported(format!(
                "'{SEARCH_TXS}' is {MULTI_EVENT_SEARCH}"
            )));
        }
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_hash_lookup_paths() {
        let args = ArgParser::default();
        let query = QueryMsg::Tx(query_tx(&args, "", "A1B2C3").unwrap());

        let rest = textual(&query).unwrap();
        assert_eq!(rest.path, "/cosmos/tx/v1beta1/txs/A1B2C3");

        let BinaryCall::Grpc(call) = binary(query).unwrap() else {
            panic!("expected a gRPC call");
        };
        assert_eq!(call.path, "/cosmos.tx.v1beta1.Service/GetTx");
    }

    #[test]
    fn test_hash_must_be_hex() {
        let args = ArgParser::default();

        for hash in ["HASH123", "abc/../x", "a?b=c"] {
            let err = query_tx(&args, "hash", hash).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{hash}");
        }
    }

    #[test]
    fn test_single_signature_on_rest() {
        let args = ArgParser::default();
        let query = query_tx(&args, "signature", "sig1").unwrap();

        let rest = textual(&QueryMsg::Tx(query)).unwrap();

        assert_eq!(rest.path, "/cosmos/tx/v1beta1/txs");
        assert_eq!(
            rest.query,
            vec![
                ("events".to_string(), "tx.signature='sig1'".to_string()),
                ("pagination.page".to_string(), "1".to_string()),
                ("pagination.limit".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_many_signatures_are_binary_only() {
        let args = ArgParser::default();
        let query = query_tx(&args, "signature", "sig1,sig2").unwrap();

        let err = textual(&QueryMsg::Tx(query.clone())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotSupported);
        assert!(err.to_string().contains("multi-event search"));

        assert!(matches!(
            binary(QueryMsg::Tx(query)).unwrap(),
            BinaryCall::Grpc(_)
        ));
    }

    #[test]
    fn test_search_goes_to_tx_search() {
        let args = ArgParser::default();
        let page = PageRequest {
            offset: 20,
            limit: 10,
            ..Default::default()
        };
        let query = search_txs(
            &args,
            "transfer.recipient=cosmos1abc&tx.height=5",
            "desc",
            Some(page),
        )
        .unwrap();

        let BinaryCall::Rpc(call) = binary(QueryMsg::Tx(query)).unwrap() else {
            panic!("expected an RPC call");
        };

        assert_eq!(call.method, "tx_search");
        assert_eq!(
            call.params,
            json!({
                "query": "transfer.recipient='cosmos1abc' AND tx.height=5",
                "prove": false,
                "page": "3",
                "per_page": "10",
                "order_by": "desc",
            })
        );
    }

    #[test]
    fn test_search_rejects_bad_order() {
        let args = ArgParser::default();

        let err = search_txs(&args, "a=1", "sideways", None).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_search_is_binary_only() {
        let module = module();
        let route = module.query_route(SEARCH_TXS).unwrap();

        assert_eq!(
            route.restriction(crate::Backend::Textual),
            Some(MULTI_EVENT_SEARCH)
        );
        assert!(route.supports(crate::Backend::Binary));
    }
}
