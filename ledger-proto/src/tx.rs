//! `cosmos.tx.v1beta1`
use crate::{
    base::{Coin, PageRequest, PageResponse},
    google::Any,
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.tx.v1beta1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderBy {
    Unspecified = 0,
    Asc = 1,
    Desc = 2,
}

impl OrderBy {
    /// String value of the enum field name used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "ORDER_BY_UNSPECIFIED",
            Self::Asc => "ORDER_BY_ASC",
            Self::Desc => "ORDER_BY_DESC",
        }
    }
}

impl_enum_json!(OrderBy => order_by_json);

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TxBody {
    #[prost(message, repeated, tag = "1")]
    pub messages: Vec<Any>,
    #[prost(string, tag = "2")]
    pub memo: String,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub timeout_height: u64,
}

/// Signer metadata. The signing mode (tag 2) is not decoded.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct SignerInfo {
    #[prost(message, optional, tag = "1")]
    pub public_key: Option<Any>,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub sequence: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Fee {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub gas_limit: u64,
    #[prost(string, tag = "3")]
    pub payer: String,
    #[prost(string, tag = "4")]
    pub granter: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct AuthInfo {
    #[prost(message, repeated, tag = "1")]
    pub signer_infos: Vec<SignerInfo>,
    #[prost(message, optional, tag = "2")]
    pub fee: Option<Fee>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Tx {
    #[prost(message, optional, tag = "1")]
    pub body: Option<TxBody>,
    #[prost(message, optional, tag = "2")]
    pub auth_info: Option<AuthInfo>,
    #[prost(bytes = "vec", repeated, tag = "3")]
    #[serde(with = "crate::serde_helpers::base64_bytes_list")]
    pub signatures: Vec<Vec<u8>>,
}

/// Indexed transaction result. ABCI logs and events (tags 7 and 13) are not decoded.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TxResponse {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub height: i64,
    #[prost(string, tag = "2")]
    pub txhash: String,
    #[prost(string, tag = "3")]
    pub codespace: String,
    #[prost(uint32, tag = "4")]
    pub code: u32,
    #[prost(string, tag = "5")]
    pub data: String,
    #[prost(string, tag = "6")]
    pub raw_log: String,
    #[prost(string, tag = "8")]
    pub info: String,
    #[prost(int64, tag = "9")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub gas_wanted: i64,
    #[prost(int64, tag = "10")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub gas_used: i64,
    #[prost(message, optional, tag = "11")]
    pub tx: Option<Any>,
    #[prost(string, tag = "12")]
    pub timestamp: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetTxRequest {
    #[prost(string, tag = "1")]
    pub hash: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetTxResponse {
    #[prost(message, optional, tag = "1")]
    pub tx: Option<Tx>,
    #[prost(message, optional, tag = "2")]
    pub tx_response: Option<TxResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetTxsEventRequest {
    #[prost(string, repeated, tag = "1")]
    pub events: Vec<String>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
    #[prost(enumeration = "OrderBy", tag = "3")]
    #[serde(with = "order_by_json")]
    pub order_by: i32,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub page: u64,
    #[prost(uint64, tag = "5")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub limit: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GetTxsEventResponse {
    #[prost(message, repeated, tag = "1")]
    pub txs: Vec<Tx>,
    #[prost(message, repeated, tag = "2")]
    pub tx_responses: Vec<TxResponse>,
    #[prost(message, optional, tag = "3")]
    pub pagination: Option<PageResponse>,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub total: u64,
}

impl_name!("cosmos.tx.v1beta1" => Tx);
