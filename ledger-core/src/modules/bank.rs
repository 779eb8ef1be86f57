//! Token transfers and balances (`cosmos.bank.v1beta1`).
use crate::{
    args::{ArgParser, coin::validate_denom, optional_one},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::{QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use ledger_proto::{
    Any,
    bank::{self as pb, Input, MsgMultiSend, MsgSend, Output},
    base::{Coin, PageRequest},
};
use num_bigint::BigUint;
use std::collections::BTreeMap;

pub const NAME: &str = "bank";

pub const BANK_SEND: &str = "bank-send";
pub const BANK_MULTI_SEND: &str = "bank-multi-send";

pub const QUERY_BALANCE: &str = "query-balance";
pub const QUERY_SPENDABLE_BALANCES: &str = "query-spendable-balances";
pub const QUERY_SUPPLY: &str = "query-supply";
pub const QUERY_DENOM_METADATA: &str = "query-denom-metadata";
pub const QUERY_PARAMS: &str = "query-params";

const SERVICE: &str = "cosmos.bank.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum BankTx {
    Send(MsgSend),
    MultiSend(MsgMultiSend),
}

impl BankTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            BankTx::Send(_) => BANK_SEND,
            BankTx::MultiSend(_) => BANK_MULTI_SEND,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        match self {
            BankTx::Send(msg) => vec![Any::pack(&msg)],
            BankTx::MultiSend(msg) => vec![Any::pack(&msg)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BankQuery {
    Balance(pb::QueryBalanceRequest),
    AllBalances(pb::QueryAllBalancesRequest),
    SpendableBalances(pb::QuerySpendableBalancesRequest),
    SupplyOf(pb::QuerySupplyOfRequest),
    TotalSupply(pb::QueryTotalSupplyRequest),
    DenomMetadata(pb::QueryDenomMetadataRequest),
    DenomsMetadata(pb::QueryDenomsMetadataRequest),
    Params(pb::QueryParamsRequest),
}

impl BankQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            BankQuery::Balance(_) | BankQuery::AllBalances(_) => QUERY_BALANCE,
            BankQuery::SpendableBalances(_) => QUERY_SPENDABLE_BALANCES,
            BankQuery::SupplyOf(_) | BankQuery::TotalSupply(_) => QUERY_SUPPLY,
            BankQuery::DenomMetadata(_) | BankQuery::DenomsMetadata(_) => QUERY_DENOM_METADATA,
            BankQuery::Params(_) => QUERY_PARAMS,
        }
    }
}

pub fn send(args: &ArgParser, from: &str, to: &str, amount: &str) -> Result<BankTx, Error> {
    let amount = non_empty_coins(args, amount)?;

    Ok(BankTx::Send(MsgSend {
        from_address: args.account_address(from)?,
        to_address: args.account_address(to)?,
        amount,
    }))
}

/// Sends to several recipients from one account. The single input carries the sum of the
/// outputs per denomination.
pub fn multi_send(
    args: &ArgParser,
    from: &str,
    outputs: &[(&str, &str)],
) -> Result<BankTx, Error> {
    if outputs.is_empty() {
        return Err(Error::InsufficientParams(
            "at least one recipient is required".to_string(),
        ));
    }

    let from = args.account_address(from)?;

    let outputs = outputs
        .iter()
        .map(|(address, amount)| {
            Ok(Output {
                address: args.account_address(address)?,
                coins: non_empty_coins(args, amount)?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let mut totals: BTreeMap<&str, BigUint> = BTreeMap::new();
    for coin in outputs.iter().flat_map(|o| &o.coins) {
        let amount: BigUint = coin
            .amount
            .parse()
            .map_err(|e| Error::Convert(format!("invalid amount '{}': {e}", coin.amount)))?;
        *totals.entry(coin.denom.as_str()).or_default() += amount;
    }

    let coins = totals
        .into_iter()
        .map(|(denom, amount)| Coin::new(amount.to_string(), denom))
        .collect();

    Ok(BankTx::MultiSend(MsgMultiSend {
        inputs: vec![Input {
            address: from,
            coins,
        }],
        outputs,
    }))
}

/// The balance of one denomination, or every balance when no denomination is given.
pub fn query_balance(
    args: &ArgParser,
    address: &str,
    denoms: &[&str],
    page: Option<PageRequest>,
) -> Result<BankQuery, Error> {
    let address = args.account_address(address)?;

    match optional_one("denomination", denoms)? {
        Some(denom) => {
            validate_denom(denom)?;
            Ok(BankQuery::Balance(pb::QueryBalanceRequest {
                address,
                denom: denom.to_string(),
            }))
        }
        None => Ok(BankQuery::AllBalances(pb::QueryAllBalancesRequest {
            address,
            pagination: Some(args.page(page)),
        })),
    }
}

pub fn query_spendable_balances(
    args: &ArgParser,
    address: &str,
    page: Option<PageRequest>,
) -> Result<BankQuery, Error> {
    Ok(BankQuery::SpendableBalances(
        pb::QuerySpendableBalancesRequest {
            address: args.account_address(address)?,
            pagination: Some(args.page(page)),
        },
    ))
}

pub fn query_supply(
    args: &ArgParser,
    denoms: &[&str],
    page: Option<PageRequest>,
) -> Result<BankQuery, Error> {
    match optional_one("denomination", denoms)? {
        Some(denom) => {
            validate_denom(denom)?;
            Ok(BankQuery::SupplyOf(pb::QuerySupplyOfRequest {
                denom: denom.to_string(),
            }))
        }
        None => Ok(BankQuery::TotalSupply(pb::QueryTotalSupplyRequest {
            pagination: Some(args.page(page)),
        })),
    }
}

pub fn query_denom_metadata(
    args: &ArgParser,
    denoms: &[&str],
    page: Option<PageRequest>,
) -> Result<BankQuery, Error> {
    match optional_one("denomination", denoms)? {
        Some(denom) => {
            validate_denom(denom)?;
            Ok(BankQuery::DenomMetadata(pb::QueryDenomMetadataRequest {
                denom: denom.to_string(),
            }))
        }
        None => Ok(BankQuery::DenomsMetadata(pb::QueryDenomsMetadataRequest {
            pagination: Some(args.page(page)),
        })),
    }
}

pub fn query_params() -> BankQuery {
    BankQuery::Params(pb::QueryParamsRequest::default())
}

fn non_empty_coins(args: &ArgParser, amount: &str) -> Result<Vec<Coin>, Error> {
    let coins = args.coins(amount)?;
    if coins.is_empty() {
        return Err(Error::InsufficientParams("amount is required".to_string()));
    }
    Ok(coins)
}

pub fn module() -> Module {
    Module::builder(NAME)
        .txs(&[BANK_SEND, BANK_MULTI_SEND], route_tx)
        .queries(
            &[
                QUERY_BALANCE,
                QUERY_SPENDABLE_BALANCES,
                QUERY_SUPPLY,
                QUERY_DENOM_METADATA,
                QUERY_PARAMS,
            ],
            binary,
            textual,
        )
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Bank(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Bank(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        BankQuery::Balance(req) => {
            GrpcCall::new::<_, pb::QueryBalanceResponse>(SERVICE, "Balance", &req)
        }
        BankQuery::AllBalances(req) => {
            GrpcCall::new::<_, pb::QueryAllBalancesResponse>(SERVICE, "AllBalances", &req)
        }
        BankQuery::SpendableBalances(req) => GrpcCall::new::<_, pb::QuerySpendableBalancesResponse>(
            SERVICE,
            "SpendableBalances",
            &req,
        ),
        BankQuery::SupplyOf(req) => {
            GrpcCall::new::<_, pb::QuerySupplyOfResponse>(SERVICE, "SupplyOf", &req)
        }
        BankQuery::TotalSupply(req) => {
            GrpcCall::new::<_, pb::QueryTotalSupplyResponse>(SERVICE, "TotalSupply", &req)
        }
        BankQuery::DenomMetadata(req) => {
            GrpcCall::new::<_, pb::QueryDenomMetadataResponse>(SERVICE, "DenomMetadata", &req)
        }
        BankQuery::DenomsMetadata(req) => {
            GrpcCall::new::<_, pb::QueryDenomsMetadataResponse>(SERVICE, "DenomsMetadata", &req)
        }
        BankQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Bank(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        BankQuery::Balance(req) => {
            RestPath::new(format!("{base}/balances/{}/by_denom", req.address))
                .param("denom", &req.denom)
        }
        BankQuery::AllBalances(req) => RestPath::new(format!("{base}/balances/{}", req.address))
            .paginate(req.pagination.as_ref()),
        BankQuery::SpendableBalances(req) => {
            RestPath::new(format!("{base}/spendable_balances/{}", req.address))
                .paginate(req.pagination.as_ref())
        }
        BankQuery::SupplyOf(req) => {
            RestPath::new(format!("{base}/supply/by_denom")).param("denom", &req.denom)
        }
        BankQuery::TotalSupply(req) => {
            RestPath::new(format!("{base}/supply")).paginate(req.pagination.as_ref())
        }
        // IBC denoms contain `/`, so the denom travels as a query parameter
        BankQuery::DenomMetadata(req) => {
            RestPath::new(format!("{base}/denoms_metadata_by_query_string"))
                .param("denom", &req.denom)
        }
        BankQuery::DenomsMetadata(req) => {
            RestPath::new(format!("{base}/denoms_metadata")).paginate(req.pagination.as_ref())
        }
        BankQuery::Params(_) => RestPath::new(format!("{base}/params")),
    };

    Ok(path)
}
