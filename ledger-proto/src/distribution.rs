//! `cosmos.distribution.v1beta1`
use crate::base::{Coin, DecCoin, PageRequest, PageResponse};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.distribution.v1beta1";

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Params {
    #[prost(string, tag = "1")]
    pub community_tax: String,
    #[prost(string, tag = "2")]
    pub base_proposer_reward: String,
    #[prost(string, tag = "3")]
    pub bonus_proposer_reward: String,
    #[prost(bool, tag = "4")]
    pub withdraw_addr_enabled: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ValidatorOutstandingRewards {
    #[prost(message, repeated, tag = "1")]
    pub rewards: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ValidatorAccumulatedCommission {
    #[prost(message, repeated, tag = "1")]
    pub commission: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ValidatorSlashEvent {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub validator_period: u64,
    #[prost(string, tag = "2")]
    pub fraction: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct DelegationDelegatorReward {
    #[prost(string, tag = "1")]
    pub validator_address: String,
    #[prost(message, repeated, tag = "2")]
    pub reward: Vec<DecCoin>,
}

// Msgs

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgSetWithdrawAddress {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub withdraw_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgWithdrawDelegatorReward {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgWithdrawValidatorCommission {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgFundCommunityPool {
    #[prost(message, repeated, tag = "1")]
    pub amount: Vec<Coin>,
    #[prost(string, tag = "2")]
    pub depositor: String,
}

// Queries

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorOutstandingRewardsRequest {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorOutstandingRewardsResponse {
    #[prost(message, optional, tag = "1")]
    pub rewards: Option<ValidatorOutstandingRewards>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorCommissionRequest {
    #[prost(string, tag = "1")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorCommissionResponse {
    #[prost(message, optional, tag = "1")]
    pub commission: Option<ValidatorAccumulatedCommission>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorSlashesRequest {
    #[prost(string, tag = "1")]
    pub validator_address: String,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub starting_height: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub ending_height: u64,
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryValidatorSlashesResponse {
    #[prost(message, repeated, tag = "1")]
    pub slashes: Vec<ValidatorSlashEvent>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegationRewardsRequest {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
    #[prost(string, tag = "2")]
    pub validator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegationRewardsResponse {
    #[prost(message, repeated, tag = "1")]
    pub rewards: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegationTotalRewardsRequest {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegationTotalRewardsResponse {
    #[prost(message, repeated, tag = "1")]
    pub rewards: Vec<DelegationDelegatorReward>,
    #[prost(message, repeated, tag = "2")]
    pub total: Vec<DecCoin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorValidatorsRequest {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorValidatorsResponse {
    #[prost(string, repeated, tag = "1")]
    pub validators: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorWithdrawAddressRequest {
    #[prost(string, tag = "1")]
    pub delegator_address: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDelegatorWithdrawAddressResponse {
    #[prost(string, tag = "1")]
    pub withdraw_address: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryCommunityPoolRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryCommunityPoolResponse {
    #[prost(message, repeated, tag = "1")]
    pub pool: Vec<DecCoin>,
}

impl_name!(
    "cosmos.distribution.v1beta1" =>
    MsgSetWithdrawAddress,
    MsgWithdrawDelegatorReward,
    MsgWithdrawValidatorCommission,
    MsgFundCommunityPool,
);
