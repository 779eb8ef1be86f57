use ledger_core::{
    ArgParser, Backend, ClientConfig, ErrorKind, LedgerClient, QueryDispatcher, QueryRequest,
    Registry, TxBuilder, TxRequest, UnsignedTx,
    args::AddressKind,
    ledger_proto::distribution::{
        MsgWithdrawDelegatorReward, QueryDelegatorValidatorsRequest,
        QueryDelegatorValidatorsResponse,
    },
    modules::{bank, distribution},
    transport::rest::RestClient,
};
use mock_grpc::MockGrpc;
use prost::Message;
use std::sync::Arc;

mod mock_grpc;
mod mock_http;

const DELEGATOR_VALIDATORS_PATH: &str = "/cosmos.distribution.v1beta1.Query/DelegatorValidators";

fn validators(args: &ArgParser, count: u8) -> Vec<String> {
    (1..=count)
        .map(|b| {
            args.address_from_bytes(AddressKind::Validator, &[b; 20])
                .unwrap()
        })
        .collect()
}

fn delegator(args: &ArgParser) -> String {
    args.address_from_bytes(AddressKind::Account, &[9; 20])
        .unwrap()
}

fn client_with_grpc(bonded: Vec<String>) -> (LedgerClient, Arc<MockGrpc>) {
    let grpc = Arc::new(MockGrpc::new().on(
        DELEGATOR_VALIDATORS_PATH,
        move |_: QueryDelegatorValidatorsRequest| {
            Ok(QueryDelegatorValidatorsResponse {
                validators: bonded.clone(),
            })
        },
    ));

    let dispatcher =
        QueryDispatcher::new(Arc::new(Registry::standard())).with_shared_grpc(grpc.clone());

    (
        LedgerClient::from_parts(ArgParser::default(), dispatcher),
        grpc,
    )
}

#[tokio::test]
async fn test_withdraw_all_rewards_over_grpc() {
    let args = ArgParser::default();
    let bonded = validators(&args, 3);
    let (client, grpc) = client_with_grpc(bonded.clone());
    let mut tx = UnsignedTx::new();

    let count = client
        .withdraw_all_rewards(&mut tx, &delegator(&args), None)
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(grpc.paths(), vec![DELEGATOR_VALIDATORS_PATH]);

    let withdrawn: Vec<_> = tx
        .messages()
        .iter()
        .map(|any| {
            let msg = MsgWithdrawDelegatorReward::decode(any.value.as_slice()).unwrap();
            assert_eq!(msg.delegator_address, delegator(&args));
            msg.validator_address
        })
        .collect();
    assert_eq!(withdrawn, bonded);
}

#[tokio::test]
async fn test_withdraw_all_rewards_over_rest() {
    let args = ArgParser::default();
    let (url, stats) = mock_http::rest_server().await;
    let dispatcher =
        QueryDispatcher::new(Arc::new(Registry::standard())).with_rest(RestClient::new(url));
    let client = LedgerClient::from_parts(args.clone(), dispatcher);
    let mut tx = UnsignedTx::new();

    let count = client
        .withdraw_all_rewards(&mut tx, &delegator(&args), Some(Backend::Textual))
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(tx.messages().len(), 2);
    assert_eq!(stats.requests(), 1);
}

#[tokio::test]
async fn test_withdraw_all_rewards_without_delegations() {
    let args = ArgParser::default();
    let (client, _) = client_with_grpc(Vec::new());
    let mut tx = UnsignedTx::new();

    let err = client
        .withdraw_all_rewards(&mut tx, &delegator(&args), None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(tx.is_empty());
}

#[tokio::test]
async fn test_withdraw_all_rewards_rejects_bad_delegator() {
    let (client, grpc) = client_with_grpc(Vec::new());
    let mut tx = UnsignedTx::new();

    let err = client
        .withdraw_all_rewards(&mut tx, "cosmos1notanaddress", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(grpc.paths().is_empty());
}

#[tokio::test]
async fn test_client_from_config_uses_its_conventions() {
    let (url, _) = mock_http::rest_server().await;
    let config = ClientConfig {
        rest_url: Some(url),
        backend: Backend::Textual,
        account_prefix: "osmo".into(),
        ..Default::default()
    };

    let client = LedgerClient::connect(config).await.unwrap();

    let osmo = client
        .args()
        .address_from_bytes(AddressKind::Account, &[3; 20])
        .unwrap();
    assert!(osmo.starts_with("osmo1"));

    let query = bank::query_balance(client.args(), &osmo, &["uosmo"], None).unwrap();
    let json = client.query(QueryRequest::new(query)).await.unwrap();
    assert!(json.contains("uosmo"));

    let err = bank::query_balance(client.args(), &delegator(&ArgParser::default()), &[], None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn test_client_routes_transactions() {
    let args = ArgParser::default();
    let (client, _) = client_with_grpc(Vec::new());
    let validator = &validators(&args, 1)[0];
    let mut tx = UnsignedTx::new();

    let withdraw =
        distribution::withdraw_rewards(client.args(), &delegator(&args), validator).unwrap();
    client.route_tx(&mut tx, TxRequest::new(withdraw)).unwrap();

    assert_eq!(tx.messages().len(), 1);
}
