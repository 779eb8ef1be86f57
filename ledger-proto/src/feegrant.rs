//! `cosmos.feegrant.v1beta1`
use crate::{
    base::{Coin, PageRequest, PageResponse},
    google::{Any, Timestamp},
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.feegrant.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct BasicAllowance {
    #[prost(message, repeated, tag = "1")]
    pub spend_limit: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub expiration: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Grant {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(message, optional, tag = "3")]
    pub allowance: Option<Any>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgGrantAllowance {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(message, optional, tag = "3")]
    pub allowance: Option<Any>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgRevokeAllowance {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllowanceRequest {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllowanceResponse {
    #[prost(message, optional, tag = "1")]
    pub allowance: Option<Grant>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllowancesRequest {
    #[prost(string, tag = "1")]
    pub grantee: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllowancesResponse {
    #[prost(message, repeated, tag = "1")]
    pub allowances: Vec<Grant>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllowancesByGranterRequest {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryAllowancesByGranterResponse {
    #[prost(message, repeated, tag = "1")]
    pub allowances: Vec<Grant>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

impl_name!("cosmos.feegrant.v1beta1" => BasicAllowance, MsgGrantAllowance, MsgRevokeAllowance);
