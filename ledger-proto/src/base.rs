//! Shared value types: coins (`cosmos.base.v1beta1`) and pagination
//! (`cosmos.base.query.v1beta1`).
use serde::Serialize;

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

impl Coin {
    pub fn new(amount: impl Into<String>, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize)]
pub struct DecCoin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize)]
pub struct PageRequest {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::base64_bytes")]
    pub key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message, Serialize)]
pub struct PageResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::base64_bytes")]
    pub next_key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub total: u64,
}
