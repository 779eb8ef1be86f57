//! `cosmos.auth.v1beta1`
use crate::{
    base::{PageRequest, PageResponse},
    google::Any,
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.auth.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BaseAccount {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pub_key: Option<Any>,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub account_number: u64,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub sequence: u64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct Params {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub max_memo_characters: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub tx_sig_limit: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub tx_size_cost_per_byte: u64,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub sig_verify_cost_ed25519: u64,
    #[prost(uint64, tag = "5")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub sig_verify_cost_secp256k1: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAccountsRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: Vec<Any>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAccountRequest {
    #[prost(string, tag = "1")]
    pub address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: Option<Any>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryModuleAccountsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryModuleAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: Vec<Any>,
}

impl_name!("cosmos.auth.v1beta1" => BaseAccount);
