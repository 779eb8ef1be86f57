//! `cosmos.gov.v1beta1`
use crate::{
    base::{Coin, PageRequest, PageResponse},
    google::{Any, Duration, Timestamp},
};
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.gov.v1beta1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteOption {
    Unspecified = 0,
    Yes = 1,
    Abstain = 2,
    No = 3,
    NoWithVeto = 4,
}

impl VoteOption {
    /// String value of the enum field name used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "VOTE_OPTION_UNSPECIFIED",
            Self::Yes => "VOTE_OPTION_YES",
            Self::Abstain => "VOTE_OPTION_ABSTAIN",
            Self::No => "VOTE_OPTION_NO",
            Self::NoWithVeto => "VOTE_OPTION_NO_WITH_VETO",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ProposalStatus {
    Unspecified = 0,
    DepositPeriod = 1,
    VotingPeriod = 2,
    Passed = 3,
    Rejected = 4,
    Failed = 5,
}

impl ProposalStatus {
    /// String value of the enum field name used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "PROPOSAL_STATUS_UNSPECIFIED",
            Self::DepositPeriod => "PROPOSAL_STATUS_DEPOSIT_PERIOD",
            Self::VotingPeriod => "PROPOSAL_STATUS_VOTING_PERIOD",
            Self::Passed => "PROPOSAL_STATUS_PASSED",
            Self::Rejected => "PROPOSAL_STATUS_REJECTED",
            Self::Failed => "PROPOSAL_STATUS_FAILED",
        }
    }
}

impl_enum_json!(VoteOption => vote_option_json, ProposalStatus => proposal_status_json);

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TextProposal {
    #[prost(string, tag = "1")]
    pub title: String,
    #[prost(string, tag = "2")]
    pub description: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct WeightedVoteOption {
    #[prost(enumeration = "VoteOption", tag = "1")]
    #[serde(with = "vote_option_json")]
    pub option: i32,
    #[prost(string, tag = "2")]
    pub weight: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Deposit {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub depositor: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TallyResult {
    #[prost(string, tag = "1")]
    pub yes: String,
    #[prost(string, tag = "2")]
    pub abstain: String,
    #[prost(string, tag = "3")]
    pub no: String,
    #[prost(string, tag = "4")]
    pub no_with_veto: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Proposal {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(message, optional, tag = "2")]
    pub content: Option<Any>,
    #[prost(enumeration = "ProposalStatus", tag = "3")]
    #[serde(with = "proposal_status_json")]
    pub status: i32,
    #[prost(message, optional, tag = "4")]
    pub final_tally_result: Option<TallyResult>,
    #[prost(message, optional, tag = "5")]
    pub submit_time: Option<Timestamp>,
    #[prost(message, optional, tag = "6")]
    pub deposit_end_time: Option<Timestamp>,
    #[prost(message, repeated, tag = "7")]
    pub total_deposit: Vec<Coin>,
    #[prost(message, optional, tag = "8")]
    pub voting_start_time: Option<Timestamp>,
    #[prost(message, optional, tag = "9")]
    pub voting_end_time: Option<Timestamp>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Vote {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: String,
    #[prost(enumeration = "VoteOption", tag = "3")]
    #[serde(with = "vote_option_json")]
    pub option: i32,
    #[prost(message, repeated, tag = "4")]
    pub options: Vec<WeightedVoteOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct DepositParams {
    #[prost(message, repeated, tag = "1")]
    pub min_deposit: Vec<Coin>,
    #[prost(message, optional, tag = "2")]
    pub max_deposit_period: Option<Duration>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct VotingParams {
    #[prost(message, optional, tag = "1")]
    pub voting_period: Option<Duration>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct TallyParams {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub quorum: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub threshold: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    #[serde(with = "crate::serde_helpers::ascii_bytes")]
    pub veto_threshold: Vec<u8>,
}

// Msgs

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgSubmitProposal {
    #[prost(message, optional, tag = "1")]
    pub content: Option<Any>,
    #[prost(message, repeated, tag = "2")]
    pub initial_deposit: Vec<Coin>,
    #[prost(string, tag = "3")]
    pub proposer: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgVote {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: String,
    #[prost(enumeration = "VoteOption", tag = "3")]
    #[serde(with = "vote_option_json")]
    pub option: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgVoteWeighted {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: String,
    #[prost(message, repeated, tag = "3")]
    pub options: Vec<WeightedVoteOption>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct MsgDeposit {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub depositor: String,
    #[prost(message, repeated, tag = "3")]
    pub amount: Vec<Coin>,
}

// Queries

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryProposalRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryProposalResponse {
    #[prost(message, optional, tag = "1")]
    pub proposal: Option<Proposal>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryProposalsRequest {
    #[prost(enumeration = "ProposalStatus", tag = "1")]
    #[serde(with = "proposal_status_json")]
    pub proposal_status: i32,
    #[prost(string, tag = "2")]
    pub voter: String,
    #[prost(string, tag = "3")]
    pub depositor: String,
    #[prost(message, optional, tag = "4")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryProposalsResponse {
    #[prost(message, repeated, tag = "1")]
    pub proposals: Vec<Proposal>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryVoteRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub voter: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryVoteResponse {
    #[prost(message, optional, tag = "1")]
    pub vote: Option<Vote>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryVotesRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryVotesResponse {
    #[prost(message, repeated, tag = "1")]
    pub votes: Vec<Vote>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsRequest {
    #[prost(string, tag = "1")]
    pub params_type: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub voting_params: Option<VotingParams>,
    #[prost(message, optional, tag = "2")]
    pub deposit_params: Option<DepositParams>,
    #[prost(message, optional, tag = "3")]
    pub tally_params: Option<TallyParams>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDepositRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(string, tag = "2")]
    pub depositor: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDepositResponse {
    #[prost(message, optional, tag = "1")]
    pub deposit: Option<Deposit>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDepositsRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageRequest>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryDepositsResponse {
    #[prost(message, repeated, tag = "1")]
    pub deposits: Vec<Deposit>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message, Serialize)]
pub struct QueryTallyResultRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::serde_helpers::int64")]
    pub proposal_id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct QueryTallyResultResponse {
    #[prost(message, optional, tag = "1")]
    pub tally: Option<TallyResult>,
}

impl_name!(
    "cosmos.gov.v1beta1" =>
    TextProposal,
    MsgSubmitProposal,
    MsgVote,
    MsgVoteWeighted,
    MsgDeposit,
);
