//! `cosmos.mint.v1beta1`
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.mint.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Params {
    #[prost(string, tag = "1")]
    pub mint_denom: String,
    #[prost(string, tag = "2")]
    pub inflation_rate_change: String,
    #[prost(string, tag = "3")]
    pub inflation_max: String,
    #[prost(string, tag = "4")]
    pub inflation_min: String,
    #[prost(string, tag = "5")]
    pub goal_bonded: String,
    #[prost(uint64, tag = "6")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub blocks_per_year: u64,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryInflationRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryInflationResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub inflation: Vec<u8>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAnnualProvisionsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAnnualProvisionsResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub annual_provisions: Vec<u8>,
}
