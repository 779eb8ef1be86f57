//! `cosmos.staking.v1beta1`
use crate::{
    base::{Coin, PageRequest, PageResponse},
    google::{Any, Duration, Timestamp},
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.staking.v1beta1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum BondStatus {
    Unspecified = 0,
    Unbonded = 1,
    Unbonding = 2,
    Bonded = 3,
}

impl BondStatus {
    /// String value of the enum field name used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "BOND_STATUS_UNSPECIFIED",
            Self::Unbonded => "BOND_STATUS_UNBONDED",
            Self::Unbonding => "BOND_STATUS_UNBONDING",
            Self::Bonded => "BOND_STATUS_BONDED",
        }
    }

    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "BOND_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
            "BOND_STATUS_UNBONDED" => Some(Self::Unbonded),
            "BOND_STATUS_UNBONDING" => Some(Self::Unbonding),
            "BOND_STATUS_BONDED" => Some(Self::Bonded),
            _ => None,
        }
    }
}

impl_enum_json!(BondStatus => bond_status_json);

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Description {
    #[prost(string, tag = "1")]
    pub moniker: String,
    #[prost(string, tag = "2")]
    pub identity: String,
    #[prost(string, tag = "3")]
    pub website: String,
    #[prost(string, tag = "4")]
    pub security_contact: String,
    #[prost(string, tag = "5")]
    pub details: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct CommissionRates {
    #[prost(string, tag = "1")]
    pub rate: String,
    #[prost(string, tag = "2")]
    pub max_rate: String,
    #[prost(string, tag = "3")]
    pub max_change_rate: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Commission {
    #[prost(message, optional, tag = "1")]
    pub commission_rates: Option<CommissionRates>,
    #[prost(message, optional, tag = "2")]
    pub update_time: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Validator {
    #[prost(string, tag = "1")]
    pub operator_address: String,
    #[prost(message, optional, tag = "2")]
    pub consensus_pubkey: Option<Any>,
    #[prost(bool, tag = "3")]
    pub jailed: bool,
    #[prost(enumeration = "BondStatus", tag = "4")]
    #[serde(with = "bond_status_json")]
    pub status: i32,
    #[prost(string, tag = "5")]
    pub tokens: String,
    #[prost(string, tag = "6")]
    pub delegator_shares: String,
    #[prost(message, optional, tag = "7")]
    pub description: Option<Description>,
    #[prost(int64, tag = "8")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub unbonding_height: i64,
    #[prost(message, optional, tag = "9")]
    pub unbonding_time: Option<Timestamp>,
    #[prost(message, optional, tag = "10")]
    pub commission: Option<Commission>,
    #[prost(string, tag = "11")]
    pub min_self_delegation: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Delegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(string, tag = "3")]
    pub shares: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct DelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub delegation: Option<Delegation>,
    #[prost(message, optional, tag = "2")]
    pub balance: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct UnbondingDelegationEntry {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub creation_height: i64,
    #[prost(message, optional, tag = "2")]
    pub completion_time: Option<Timestamp>,
    #[prost(string, tag = "3")]
    pub initial_balance: String,
    #[prost(string, tag = "4")]
    pub balance: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct UnbondingDelegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, repeated, tag = "3")]
    pub entries: Vec<UnbondingDelegationEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct RedelegationEntry {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub creation_height: i64,
    #[prost(message, optional, tag = "2")]
    pub completion_time: Option<Timestamp>,
    #[prost(string, tag = "3")]
    pub initial_balance: String,
    #[prost(string, tag = "4")]
    pub shares_dst: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Redelegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_src_address: String,
    #[prost(string, tag = "3")]
    pub validator_dst_address: String,
    #[prost(message, repeated, tag = "4")]
    pub entries: Vec<RedelegationEntry>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct RedelegationEntryResponse {
    #[prost(message, optional, tag = "1")]
    pub redelegation_entry: Option<RedelegationEntry>,
    #[prost(string, tag = "4")]
    pub balance: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct RedelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub redelegation: Option<Redelegation>,
    #[prost(message, repeated, tag = "2")]
    pub entries: Vec<RedelegationEntryResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Pool {
    #[prost(string, tag = "1")]
    pub not_bonded_tokens: String,
    #[prost(string, tag = "2")]
    pub bonded_tokens: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Params {
    #[prost(message, optional, tag = "1")]
    pub unbonding_time: Option<Duration>,
    #[prost(uint32, tag = "2")]
    pub max_validators: u32,
    #[prost(uint32, tag = "3")]
    pub max_entries: u32,
    #[prost(uint32, tag = "4")]
    pub historical_entries: u32,
    #[prost(string, tag = "5")]
    pub bond_denom: String,
    #[prost(string, tag = "6")]
    pub min_commission_rate: String,
}

/// Historical validator set. The block header (tag 1) is not decoded.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct HistoricalInfo {
    #[prost(message, repeated, tag = "2")]
    pub valset: Vec<Validator>,
}

// Msgs

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgCreateValidator {
    #[prost(message, optional, tag = "1")]
    pub description: Option<Description>,
    #[prost(message, optional, tag = "2")]
    pub commission: Option<CommissionRates>,
    #[prost(string, tag = "3")]
    pub min_self_delegation: String,
    #[prost(string, tag = "4")]
    pub delegator_address: String,
    #[prost(string, tag = "5")]
    pub validator_address: String,
    #[prost(message, optional, tag = "6")]
    pub pubkey: Option<Any>,
    #[prost(message, optional, tag = "7")]
    pub value: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgEditValidator {
    #[prost(message, optional, tag = "1")]
    pub description: Option<Description>,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(string, tag = "3")]
    pub commission_rate: String,
    #[prost(string, tag = "4")]
    pub min_self_delegation: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgDelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgBeginRedelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_src_address: String,
    #[prost(string, tag = "3")]
    pub validator_dst_address: String,
    #[prost(message, optional, tag = "4")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgUndelegate {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgCancelUnbondingDelegation {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
    #[prost(message, optional, tag = "3")]
    pub amount: Option<Coin>,
    #[prost(int64, tag = "4")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub creation_height: i64,
}

// Queries

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorsRequest {
    #[prost(string, tag = "1")]
    pub status: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorsResponse {
    #[prost(message, repeated, tag = "1")]
    pub validators: Vec<Validator>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorResponse {
    #[prost(message, optional, tag = "1")]
    pub validator: Option<Validator>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorDelegationsRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub delegation_responses: Vec<DelegationResponse>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorUnbondingDelegationsRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorUnbondingDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub unbonding_responses: Vec<UnbondingDelegation>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegationRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(string, tag = "2")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub delegation_response: Option<DelegationResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryUnbondingDelegationRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(string, tag = "2")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryUnbondingDelegationResponse {
    #[prost(message, optional, tag = "1")]
    pub unbond: Option<UnbondingDelegation>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorDelegationsRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub delegation_responses: Vec<DelegationResponse>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorUnbondingDelegationsRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorUnbondingDelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub unbonding_responses: Vec<UnbondingDelegation>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryRedelegationsRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(string, tag = "2")]
    pub src_validator_addr: String,
    #[prost(string, tag = "3")]
    pub dst_validator_addr: String,
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryRedelegationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub redelegation_responses: Vec<RedelegationResponse>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorValidatorsRequest {
    #[prost(string, tag = "1")]
    pub delegator_addr: String,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorValidatorsResponse {
    #[prost(message, repeated, tag = "1")]
    pub validators: Vec<Validator>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryHistoricalInfoRequest {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub height: i64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryHistoricalInfoResponse {
    #[prost(message, optional, tag = "1")]
    pub hist: Option<HistoricalInfo>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryPoolRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryPoolResponse {
    #[prost(message, optional, tag = "1")]
    pub pool: Option<Pool>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

impl_name!(
    "cosmos.staking.v1beta1" =>
    MsgCreateValidator,
    MsgEditValidator,
    MsgDelegate,
    MsgBeginRedelegate,
    MsgUndelegate,
    MsgCancelUnbondingDelegation,
);
