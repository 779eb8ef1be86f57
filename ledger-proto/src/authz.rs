//! `cosmos.authz.v1beta1`
use crate::{
    base::{PageRequest, PageResponse},
    google::{Any, Timestamp},
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.authz.v1beta1";

/// Authorization without limits for a single message type URL.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GenericAuthorization {
    #[prost(string, tag = "1")]
    pub msg: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Grant {
    #[prost(message, optional, tag = "1")]
    pub authorization: Option<Any>,
    #[prost(message, optional, tag = "2")]
    pub expiration: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct GrantAuthorization {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(message, optional, tag = "3")]
    pub authorization: Option<Any>,
    #[prost(message, optional, tag = "4")]
    pub expiration: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgGrant {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(message, optional, tag = "3")]
    pub grant: Option<Grant>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgRevoke {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(string, tag = "3")]
    pub msg_type_url: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgExec {
    #[prost(string, tag = "1")]
    pub grantee: String,
    #[prost(message, repeated, tag = "2")]
    pub msgs: Vec<Any>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryGrantsRequest {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(string, tag = "2")]
    pub grantee: String,
    #[prost(string, tag = "3")]
    pub msg_type_url: String,
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryGrantsResponse {
    #[prost(message, repeated, tag = "1")]
    pub grants: Vec<Grant>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryGranterGrantsRequest {
    #[prost(string, tag = "1")]
    pub granter: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryGranterGrantsResponse {
    #[prost(message, repeated, tag = "1")]
    pub grants: Vec<GrantAuthorization>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryGranteeGrantsRequest {
    #[prost(string, tag = "1")]
    pub grantee: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryGranteeGrantsResponse {
    #[prost(message, repeated, tag = "1")]
    pub grants: Vec<GrantAuthorization>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

impl_name!("cosmos.authz.v1beta1" => GenericAuthorization, MsgGrant, MsgRevoke, MsgExec);
