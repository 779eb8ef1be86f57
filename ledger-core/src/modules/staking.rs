//! Validators, delegations and their queries (`cosmos.staking.v1beta1`).
//!
//! The delegation family of queries picks its request shape from the addresses given:
//!
//! | tag | delegator | validator | request |
//! |---|---|---|---|
//! | `query-delegation` | yes | yes | one delegation |
//! | | yes | no | every delegation of the delegator |
//! | | no | yes | every delegation to the validator |
//! | `query-unbonding-delegation` | same as above | | |
//!
//! `query-redelegation` takes a delegator, a source and a destination validator: all three
//! select one redelegation, the delegator alone lists its redelegations, the source alone
//! lists the redelegations away from it (binary path only).
mod query;
mod tx;

pub use query::*;
pub use tx::*;

use crate::{
    error::Error,
    module::{BINARY_ONLY, Module, QueryRoute},
    msg::TxMsg,
};
use ledger_proto::{
    Any,
    staking::{
        self as pb, MsgBeginRedelegate, MsgCancelUnbondingDelegation, MsgCreateValidator,
        MsgDelegate, MsgEditValidator, MsgUndelegate,
    },
};

pub const NAME: &str = "staking";

pub const CREATE_VALIDATOR: &str = "create-validator";
pub const EDIT_VALIDATOR: &str = "edit-validator";
pub const DELEGATE: &str = "delegate";
pub const REDELEGATE: &str = "redelegate";
pub const UNBOND: &str = "unbond";
pub const CANCEL_UNBOND: &str = "cancel-unbond";

pub const QUERY_VALIDATOR: &str = "query-validator";
pub const QUERY_VALIDATORS: &str = "query-validators";
pub const QUERY_DELEGATION: &str = "query-delegation";
pub const QUERY_UNBONDING_DELEGATION: &str = "query-unbonding-delegation";
pub const QUERY_REDELEGATION: &str = "query-redelegation";
pub const QUERY_DELEGATOR_VALIDATORS: &str = "query-delegator-validators";
pub const QUERY_HISTORICAL_INFO: &str = "query-historical-info";
pub const QUERY_POOL: &str = "query-pool";
pub const QUERY_PARAMS: &str = "query-params";

const SERVICE: &str = "cosmos.staking.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum StakingTx {
    CreateValidator(MsgCreateValidator),
    EditValidator(MsgEditValidator),
    Delegate(MsgDelegate),
    Redelegate(MsgBeginRedelegate),
    Unbond(MsgUndelegate),
    CancelUnbond(MsgCancelUnbondingDelegation),
}

impl StakingTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            StakingTx::CreateValidator(_) => CREATE_VALIDATOR,
            StakingTx::EditValidator(_) => EDIT_VALIDATOR,
            StakingTx::Delegate(_) => DELEGATE,
            StakingTx::Redelegate(_) => REDELEGATE,
            StakingTx::Unbond(_) => UNBOND,
            StakingTx::CancelUnbond(_) => CANCEL_UNBOND,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        let any = match self {
            StakingTx::CreateValidator(msg) => Any::pack(&msg),
            StakingTx::EditValidator(msg) => Any::pack(&msg),
            StakingTx::Delegate(msg) => Any::pack(&msg),
            StakingTx::Redelegate(msg) => Any::pack(&msg),
            StakingTx::Unbond(msg) => Any::pack(&msg),
            StakingTx::CancelUnbond(msg) => Any::pack(&msg),
        };
        vec![any]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StakingQuery {
    Validator(pb::QueryValidatorRequest),
    Validators(pb::QueryValidatorsRequest),
    Delegation(pb::QueryDelegationRequest),
    DelegatorDelegations(pb::QueryDelegatorDelegationsRequest),
    ValidatorDelegations(pb::QueryValidatorDelegationsRequest),
    UnbondingDelegation(pb::QueryUnbondingDelegationRequest),
    DelegatorUnbondingDelegations(pb::QueryDelegatorUnbondingDelegationsRequest),
    ValidatorUnbondingDelegations(pb::QueryValidatorUnbondingDelegationsRequest),
    Redelegations(pb::QueryRedelegationsRequest),
    DelegatorValidators(pb::QueryDelegatorValidatorsRequest),
    HistoricalInfo(pb::QueryHistoricalInfoRequest),
    Pool(pb::QueryPoolRequest),
    Params(pb::QueryParamsRequest),
}

impl StakingQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            StakingQuery::Validator(_) => QUERY_VALIDATOR,
            StakingQuery::Validators(_) => QUERY_VALIDATORS,
            StakingQuery::Delegation(_)
            | StakingQuery::DelegatorDelegations(_)
            | StakingQuery::ValidatorDelegations(_) => QUERY_DELEGATION,
            StakingQuery::UnbondingDelegation(_)
            | StakingQuery::DelegatorUnbondingDelegations(_)
            | StakingQuery::ValidatorUnbondingDelegations(_) => QUERY_UNBONDING_DELEGATION,
            StakingQuery::Redelegations(_) => QUERY_REDELEGATION,
            StakingQuery::DelegatorValidators(_) => QUERY_DELEGATOR_VALIDATORS,
            StakingQuery::HistoricalInfo(_) => QUERY_HISTORICAL_INFO,
            StakingQuery::Pool(_) => QUERY_POOL,
            StakingQuery::Params(_) => QUERY_PARAMS,
        }
    }
}

pub fn module() -> Module {
    Module::builder(NAME)
        .txs(
            &[
                CREATE_VALIDATOR,
                EDIT_VALIDATOR,
                DELEGATE,
                REDELEGATE,
                UNBOND,
                CANCEL_UNBOND,
            ],
            route_tx,
        )
        .queries(
            &[
                QUERY_VALIDATOR,
                QUERY_VALIDATORS,
                QUERY_DELEGATION,
                QUERY_UNBONDING_DELEGATION,
                QUERY_REDELEGATION,
                QUERY_DELEGATOR_VALIDATORS,
                QUERY_POOL,
                QUERY_PARAMS,
            ],
            query::binary,
            query::textual,
        )
        .query(
            QUERY_HISTORICAL_INFO,
            QueryRoute::binary_only(query::binary, BINARY_ONLY),
        )
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Staking(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}
