//! `cosmos.bank.v1beta1`
use crate::base::{Coin, PageRequest, PageResponse};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.bank.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgSend {
    #[prost(string, tag = "1")]
    pub from_address: String,
    #[prost(string, tag = "2")]
    pub to_address: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Input {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Output {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, repeated, tag = "2")]
    pub coins: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgMultiSend {
    #[prost(message, repeated, tag = "1")]
    pub inputs: Vec<Input>,
    #[prost(message, repeated, tag = "2")]
    pub outputs: Vec<Output>,
}

/// Authorization that lets a grantee send up to `spend_limit` on behalf of the granter.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct SendAuthorization {
    #[prost(message, repeated, tag = "1")]
    pub spend_limit: Vec<Coin>,
    #[prost(string, repeated, tag = "2")]
    pub allow_list: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct SendEnabled {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(bool, tag = "2")]
    pub enabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Params {
    #[prost(message, repeated, tag = "1")]
    pub send_enabled: Vec<SendEnabled>,
    #[prost(bool, tag = "2")]
    pub default_send_enabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct DenomUnit {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(uint32, tag = "2")]
    pub exponent: u32,
    #[prost(string, repeated, tag = "3")]
    pub aliases: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Metadata {
    #[prost(string, tag = "1")]
    pub description: String,
    #[prost(message, repeated, tag = "2")]
    pub denom_units: Vec<DenomUnit>,
    #[prost(string, tag = "3")]
    pub base: String,
    #[prost(string, tag = "4")]
    pub display: String,
    #[prost(string, tag = "5")]
    pub name: String,
    #[prost(string, tag = "6")]
    pub symbol: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryBalanceRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(string, tag = "2")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryBalanceResponse {
    #[prost(message, optional, tag = "1")]
    pub balance: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllBalancesRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllBalancesResponse {
    #[prost(message, repeated, tag = "1")]
    pub balances: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySpendableBalancesRequest {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySpendableBalancesResponse {
    #[prost(message, repeated, tag = "1")]
    pub balances: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryTotalSupplyRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryTotalSupplyResponse {
    #[prost(message, repeated, tag = "1")]
    pub supply: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySupplyOfRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySupplyOfResponse {
    #[prost(message, optional, tag = "1")]
    pub amount: Option<Coin>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDenomMetadataRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDenomMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDenomsMetadataRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDenomsMetadataResponse {
    #[prost(message, repeated, tag = "1")]
    pub metadatas: Vec<Metadata>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

impl_name!("cosmos.bank.v1beta1" => MsgSend, MsgMultiSend, SendAuthorization);
