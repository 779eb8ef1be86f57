use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

/// Request counters shared with the handlers of a test server.
#[derive(Debug, Default)]
pub struct Stats {
    requests: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl Stats {
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
    }

    fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// A REST gateway answering a handful of bank and distribution routes.
pub async fn rest_server() -> (String, Arc<Stats>) {
    let stats = Arc::new(Stats::default());

    let router = Router::new()
        .route(
            "/cosmos/bank/v1beta1/balances/:address/by_denom",
            get(balance_by_denom),
        )
        .route("/cosmos/bank/v1beta1/params", get(bank_params))
        .route(
            "/cosmos/distribution/v1beta1/delegators/:delegator/validators",
            get(delegator_validators),
        )
        .route("/cosmos/mint/v1beta1/inflation", get(slow_inflation))
        .with_state(stats.clone());

    (serve(router).await, stats)
}

async fn balance_by_denom(
    State(stats): State<Arc<Stats>>,
    Path(address): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    stats.enter();
    let height = headers
        .get("x-cosmos-block-height")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    stats.exit();

    Json(json!({
        "balance": {
            "denom": query.get("denom").cloned().unwrap_or_default(),
            "amount": "1000",
        },
        "address": address,
        "height": height,
    }))
}

async fn bank_params(State(stats): State<Arc<Stats>>) -> (StatusCode, String) {
    stats.enter();
    stats.exit();
    (
        StatusCode::SERVICE_UNAVAILABLE,
        r#"{"code":14,"message":"node is syncing"}"#.to_string(),
    )
}

async fn delegator_validators(
    State(stats): State<Arc<Stats>>,
    Path(_delegator): Path<String>,
) -> Json<Value> {
    stats.enter();
    stats.exit();
    Json(json!({
        "validators": [
            "cosmosvaloper1qyqszqgpqyqszqgpqyqszqgpqyqszqgph84tp0",
            "cosmosvaloper1qgpqyqszqgpqyqszqgpqyqszqgpqyqszxrnw2e",
        ]
    }))
}

async fn slow_inflation(State(stats): State<Arc<Stats>>) -> Json<Value> {
    stats.enter();
    tokio::time::sleep(Duration::from_millis(40)).await;
    stats.exit();
    Json(json!({ "inflation": "0.130000000000000000" }))
}

/// A node RPC endpoint implementing `tx_search` by echoing its parameters.
pub async fn rpc_server() -> (String, Arc<Stats>) {
    let stats = Arc::new(Stats::default());

    let router = Router::new()
        .route("/", post(json_rpc))
        .with_state(stats.clone());

    (serve(router).await, stats)
}

async fn json_rpc(State(stats): State<Arc<Stats>>, Json(body): Json<Value>) -> Json<Value> {
    stats.enter();
    stats.exit();

    let id = body["id"].clone();
    let params = body["params"].clone();

    if body["method"] != "tx_search" {
        return Json(json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": -32601, "message": "Method not found" },
        }));
    }

    Json(json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": { "txs": [], "total_count": "0", "params": params },
    }))
}
