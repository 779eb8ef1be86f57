//! `cosmos.base.tendermint.v1beta1`: the node service exposed next to the module queries.
//!
//! Only the header and identity fields are declared; block data, evidence and commits are
//! skipped on decode.
use crate::{
    base::{PageRequest, PageResponse},
    google::{Any, Timestamp},
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.base.tendermint.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct DefaultNodeInfo {
    #[prost(string, tag = "2")]
    pub default_node_id: String,
    #[prost(string, tag = "3")]
    pub listen_addr: String,
    #[prost(string, tag = "4")]
    pub network: String,
    #[prost(string, tag = "5")]
    pub version: String,
    #[prost(string, tag = "7")]
    pub moniker: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct VersionInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub app_name: String,
    #[prost(string, tag = "3")]
    pub version: String,
    #[prost(string, tag = "4")]
    pub git_commit: String,
    #[prost(string, tag = "6")]
    pub go_version: String,
    #[prost(string, tag = "8")]
    pub cosmos_sdk_version: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct PartSetHeader {
    #[prost(uint32, tag = "1")]
    pub total: u32,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "crate::serde_helpers::base64_bytes")]
    pub hash: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BlockId {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::base64_bytes")]
    pub hash: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub part_set_header: Option<PartSetHeader>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Header {
    #[prost(string, tag = "2")]
    pub chain_id: String,
    #[prost(int64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub height: i64,
    #[prost(message, optional, tag = "4")]
    pub time: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub last_block_id: Option<BlockId>,
    #[prost(bytes = "vec", tag = "11")]
    #[serde(with = "crate::serde_helpers::base64_bytes")]
    pub app_hash: Vec<u8>,
    #[prost(string, tag = "14")]
    pub proposer_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Block {
    #[prost(message, optional, tag = "1")]
    pub header: Option<Header>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Validator {
    #[prost(string, tag = "1")]
    pub address: String,
    #[prost(message, optional, tag = "2")]
    pub pub_key: Option<Any>,
    #[prost(int64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub voting_power: i64,
    #[prost(int64, tag = "4")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposer_priority: i64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct GetNodeInfoRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetNodeInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub default_node_info: Option<DefaultNodeInfo>,
    #[prost(message, optional, tag = "2")]
    pub application_version: Option<VersionInfo>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct GetSyncingRequest {}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct GetSyncingResponse {
    #[prost(bool, tag = "1")]
    pub syncing: bool,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct GetLatestBlockRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetLatestBlockResponse {
    #[prost(message, optional, tag = "1")]
    pub block_id: Option<BlockId>,
    #[prost(message, optional, tag = "3")]
    pub sdk_block: Option<Block>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct GetBlockByHeightRequest {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub height: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetBlockByHeightResponse {
    #[prost(message, optional, tag = "1")]
    pub block_id: Option<BlockId>,
    #[prost(message, optional, tag = "3")]
    pub sdk_block: Option<Block>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetLatestValidatorSetRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetLatestValidatorSetResponse {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub block_height: i64,
    #[prost(message, repeated, tag = "2")]
    pub validators: Vec<Validator>,
    #[prost(message, optional, tag = "3")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetValidatorSetByHeightRequest {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub height: i64,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetValidatorSetByHeightResponse {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub block_height: i64,
    #[prost(message, repeated, tag = "2")]
    pub validators: Vec<Validator>,
    #[prost(message, optional, tag = "3")]
    pub pagination: Option<PageResponse>,
}
