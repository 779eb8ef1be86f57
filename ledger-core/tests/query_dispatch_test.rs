use futures_util::future::join_all;
use ledger_core::{
    ArgParser, Backend, CallContext, ErrorKind, QueryDispatcher, QueryRequest, Registry,
    args::AddressKind,
    ledger_proto::{
        Any, bank as bank_pb,
        base::Coin,
        crypto::PubKey,
        google::Timestamp,
        mint as mint_pb,
        staking::{self as staking_pb, BondStatus},
    },
    modules::{bank, mint, staking, tx},
    transport::{rest::RestClient, rpc::RpcClient},
};
use mock_grpc::MockGrpc;
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tonic::Status;

mod mock_grpc;
mod mock_http;

const BALANCE_PATH: &str = "/cosmos.bank.v1beta1.Query/Balance";
const INFLATION_PATH: &str = "/cosmos.mint.v1beta1.Query/Inflation";

fn dispatcher() -> QueryDispatcher {
    QueryDispatcher::new(Arc::new(Registry::standard()))
}

fn account(args: &ArgParser) -> String {
    args.address_from_bytes(AddressKind::Account, &[1; 20])
        .unwrap()
}

fn balance_query(args: &ArgParser) -> QueryRequest {
    QueryRequest::new(bank::query_balance(args, &account(args), &["uatom"], None).unwrap())
}

fn grpc_backend() -> Arc<MockGrpc> {
    let mock = MockGrpc::new()
        .on(BALANCE_PATH, |req: bank_pb::QueryBalanceRequest| {
            Ok(bank_pb::QueryBalanceResponse {
                balance: Some(Coin::new("42", req.denom)),
            })
        })
        .on(INFLATION_PATH, |_: mint_pb::QueryInflationRequest| {
            Ok(mint_pb::QueryInflationResponse {
                inflation: b"0.130000000000000000".to_vec(),
            })
        })
        .on(
            "/cosmos.bank.v1beta1.Query/Params",
            |_: bank_pb::QueryParamsRequest| -> Result<bank_pb::QueryParamsResponse, Status> {
                Err(Status::unavailable("node is syncing"))
            },
        );
    Arc::new(mock)
}

#[tokio::test]
async fn test_binary_query_returns_json() {
    let args = ArgParser::default();
    let grpc = grpc_backend();
    let dispatcher = dispatcher().with_shared_grpc(grpc.clone());

    let json = dispatcher.query(balance_query(&args)).await.unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, json!({ "balance": { "denom": "uatom", "amount": "42" } }));
    assert_eq!(grpc.paths(), vec![BALANCE_PATH]);
}

#[tokio::test]
async fn test_binary_query_at_height() {
    let args = ArgParser::default();
    let grpc = grpc_backend();
    let dispatcher = dispatcher().with_shared_grpc(grpc.clone());

    dispatcher
        .query_with(balance_query(&args), &CallContext::default().at_height(42))
        .await
        .unwrap();

    assert_eq!(grpc.heights(), vec![Some(42)]);
}

#[tokio::test]
async fn test_textual_query_returns_body() {
    let args = ArgParser::default();
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher = dispatcher().with_rest(RestClient::new(url));

    let json = dispatcher
        .query_with(
            balance_query(&args).on(Backend::Textual),
            &CallContext::default().at_height(7),
        )
        .await
        .unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["balance"], json!({ "denom": "uatom", "amount": "1000" }));
    assert_eq!(value["address"], account(&args));
    assert_eq!(value["height"], "7");
    assert_eq!(stats.requests(), 1);
}

#[tokio::test]
async fn test_binary_validator_matches_rest_shape() {
    let args = ArgParser::default();
    let operator = args
        .address_from_bytes(AddressKind::Validator, &[1; 20])
        .unwrap();
    let validator = staking_pb::Validator {
        operator_address: operator.clone(),
        consensus_pubkey: Some(Any::pack(&PubKey { key: vec![7; 32] })),
        jailed: false,
        status: BondStatus::Bonded as i32,
        tokens: "1000".to_string(),
        delegator_shares: "1000.000000000000000000".to_string(),
        description: Some(staking_pb::Description {
            moniker: "node-1".to_string(),
            ..Default::default()
        }),
        unbonding_height: 1234,
        unbonding_time: Some(Timestamp::from_unix(0)),
        commission: Some(staking_pb::Commission {
            commission_rates: Some(staking_pb::CommissionRates {
                rate: "0.100000000000000000".to_string(),
                max_rate: "0.200000000000000000".to_string(),
                max_change_rate: "0.010000000000000000".to_string(),
            }),
            update_time: Some(Timestamp::from_unix(1_700_000_000)),
        }),
        min_self_delegation: "1".to_string(),
    };
    let grpc = Arc::new(MockGrpc::new().on(
        "/cosmos.staking.v1beta1.Query/Validator",
        move |_: staking_pb::QueryValidatorRequest| {
            Ok(staking_pb::QueryValidatorResponse {
                validator: Some(validator.clone()),
            })
        },
    ));
    let dispatcher = dispatcher().with_shared_grpc(grpc);

    let query = staking::query_validator(&args, &operator).unwrap();
    let json = dispatcher.query(QueryRequest::new(query)).await.unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        json!({
            "validator": {
                "operator_address": operator,
                "consensus_pubkey": {
                    "@type": "/cosmos.crypto.ed25519.PubKey",
                    "key": "BwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwc=",
                },
                "jailed": false,
                "status": "BOND_STATUS_BONDED",
                "tokens": "1000",
                "delegator_shares": "1000.000000000000000000",
                "description": {
                    "moniker": "node-1",
                    "identity": "",
                    "website": "",
                    "security_contact": "",
                    "details": "",
                },
                "unbonding_height": "1234",
                "unbonding_time": "1970-01-01T00:00:00Z",
                "commission": {
                    "commission_rates": {
                        "rate": "0.100000000000000000",
                        "max_rate": "0.200000000000000000",
                        "max_change_rate": "0.010000000000000000",
                    },
                    "update_time": "2023-11-14T22:13:20Z",
                },
                "min_self_delegation": "1",
            }
        })
    );
}

#[tokio::test]
async fn test_default_backend_selects_path() {
    let args = ArgParser::default();
    let grpc = grpc_backend();
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher = dispatcher()
        .with_shared_grpc(grpc.clone())
        .with_rest(RestClient::new(url))
        .with_default_backend(Backend::Textual);

    dispatcher.query(balance_query(&args)).await.unwrap();
    dispatcher
        .query(balance_query(&args).on(Backend::Binary))
        .await
        .unwrap();

    assert_eq!(stats.requests(), 1);
    assert_eq!(grpc.paths().len(), 1);
}

#[tokio::test]
async fn test_grpc_status_is_grpc_request_error() {
    let dispatcher = dispatcher().with_shared_grpc(grpc_backend());

    let err = dispatcher
        .query(QueryRequest::new(bank::query_params()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::GrpcRequest);
    assert!(err.kind().is_transport());
    assert!(err.to_string().contains("node is syncing"));
}

#[tokio::test]
async fn test_rest_status_is_rest_request_error() {
    let (url, _) = mock_http::rest_server().await;
    let dispatcher = dispatcher().with_rest(RestClient::new(url));

    let err = dispatcher
        .query(QueryRequest::new(bank::query_params()).on(Backend::Textual))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RestRequest);
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_binary_only_query_never_reaches_rest() {
    let args = ArgParser::default();
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher = dispatcher().with_rest(RestClient::new(url));

    let query = staking::query_historical_info(&args, "100").unwrap();
    let err = dispatcher
        .query(QueryRequest::new(query).on(Backend::Textual))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert!(err.to_string().contains("binary path"));
    assert_eq!(stats.requests(), 0);
}

#[tokio::test]
async fn test_multi_signature_lookup_is_binary_only() {
    let args = ArgParser::default();
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher = dispatcher().with_rest(RestClient::new(url));

    let query = tx::query_tx(&args, "signature", "c2lnMQ==,c2lnMg==").unwrap();
    let err = dispatcher
        .query(QueryRequest::new(query).on(Backend::Textual))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert_eq!(stats.requests(), 0);
}

#[tokio::test]
async fn test_rest_requests_are_serialized() {
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher = dispatcher().with_rest(RestClient::new(url));

    let calls = (0..4).map(|_| {
        dispatcher.query(QueryRequest::new(mint::query_inflation()).on(Backend::Textual))
    });
    let results = join_all(calls).await;

    assert!(results.iter().all(Result::is_ok));
    assert_eq!(stats.requests(), 4);
    assert_eq!(stats.max_in_flight(), 1);
}

#[tokio::test]
async fn test_grpc_requests_run_concurrently() {
    let grpc = Arc::new(
        MockGrpc::new()
            .with_delay(Duration::from_millis(30))
            .on(INFLATION_PATH, |_: mint_pb::QueryInflationRequest| {
                Ok(mint_pb::QueryInflationResponse {
                    inflation: b"0.1".to_vec(),
                })
            }),
    );
    let dispatcher = dispatcher().with_shared_grpc(grpc.clone());

    let calls = (0..4).map(|_| dispatcher.query(QueryRequest::new(mint::query_inflation())));
    let results = join_all(calls).await;

    for result in results {
        let value: Value = serde_json::from_str(&result.unwrap()).unwrap();
        assert_eq!(value, json!({ "inflation": "0.1" }));
    }
    assert!(grpc.max_in_flight() > 1);
}

#[tokio::test]
async fn test_default_timeout_applies_to_rest() {
    let (url, _) = mock_http::rest_server().await;
    let dispatcher = dispatcher()
        .with_rest(RestClient::new(url))
        .with_default_timeout(Duration::from_millis(5));

    let err = dispatcher
        .query(QueryRequest::new(mint::query_inflation()).on(Backend::Textual))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RestRequest);
}

#[tokio::test]
async fn test_tx_search_goes_to_rpc() {
    let args = ArgParser::default();
    let (url, stats) = mock_http::rpc_server().await;
    let dispatcher = dispatcher().with_rpc(RpcClient::new(url));

    let query = tx::search_txs(&args, "message.action=send&tx.height=12", "asc", None).unwrap();
    let json = dispatcher.query(QueryRequest::new(query)).await.unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["total_count"], "0");
    assert_eq!(
        value["params"]["query"],
        "message.action='send' AND tx.height=12"
    );
    assert_eq!(value["params"]["order_by"], "asc");
    assert_eq!(stats.requests(), 1);
}

#[tokio::test]
async fn test_tx_search_without_rpc_endpoint() {
    let args = ArgParser::default();
    let dispatcher = dispatcher().with_shared_grpc(grpc_backend());

    let query = tx::search_txs(&args, "message.action=send", "", None).unwrap();
    let err = dispatcher.query(QueryRequest::new(query)).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotSupported);
}

#[tokio::test]
async fn test_tx_search_on_rest_is_rejected() {
    let args = ArgParser::default();
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher = dispatcher().with_rest(RestClient::new(url));

    let query = tx::search_txs(&args, "message.action=send", "", None).unwrap();
    let err = dispatcher
        .query(QueryRequest::new(query).on(Backend::Textual))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotSupported);
    assert!(err.to_string().contains("multi-event search"));
    assert_eq!(stats.requests(), 0);
}
