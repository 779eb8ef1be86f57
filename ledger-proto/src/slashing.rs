//! `cosmos.slashing.v1beta1`
use crate::{
    base::{PageRequest, PageResponse},
    google::{Duration, Timestamp},
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.slashing.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ValidatorSigningInfo {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(int64, tag = "2")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub start_height: i64,
    #[prost(int64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub index_offset: i64,
    #[prost(message, optional, tag = "4")]
    pub jailed_until: Option<Timestamp>,
    #[prost(bool, tag = "5")]
    pub tombstoned: bool,
    #[prost(int64, tag = "6")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub missed_blocks_counter: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Params {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub signed_blocks_window: i64,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub min_signed_per_window: Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub downtime_jail_duration: Option<Duration>,
    #[prost(bytes = "vec", tag = "4")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub slash_fraction_double_sign: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub slash_fraction_downtime: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgUnjail {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySigningInfoRequest {
    #[prost(string, tag = "1")]
    pub cons_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySigningInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub val_signing_info: Option<ValidatorSigningInfo>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySigningInfosRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QuerySigningInfosResponse {
    #[prost(message, repeated, tag = "1")]
    pub info: Vec<ValidatorSigningInfo>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

impl_name!("cosmos.slashing.v1beta1" => MsgUnjail);
