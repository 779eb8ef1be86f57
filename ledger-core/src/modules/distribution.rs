//! Staking rewards, validator commission and the community pool
//! (`cosmos.distribution.v1beta1`).
use crate::{
    args::{ArgParser, present, required},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::{QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use ledger_proto::{
    Any,
    base::PageRequest,
    distribution::{
        self as pb, MsgFundCommunityPool, MsgSetWithdrawAddress, MsgWithdrawDelegatorReward,
        MsgWithdrawValidatorCommission,
    },
};

pub const NAME: &str = "distribution";

pub const SET_WITHDRAW_ADDRESS: &str = "set-withdraw-address";
pub const WITHDRAW_REWARDS: &str = "withdraw-rewards";
pub const WITHDRAW_ALL_REWARDS: &str = "withdraw-all-rewards";
pub const WITHDRAW_VALIDATOR_COMMISSION: &str = "withdraw-validator-commission";
pub const FUND_COMMUNITY_POOL: &str = "fund-community-pool";

pub const QUERY_PARAMS: &str = "query-params";
pub const QUERY_VALIDATOR_OUTSTANDING_REWARDS: &str = "query-validator-outstanding-rewards";
pub const QUERY_VALIDATOR_COMMISSION: &str = "query-validator-commission";
pub const QUERY_VALIDATOR_SLASHES: &str = "query-validator-slashes";
pub const QUERY_DELEGATION_REWARDS: &str = "query-delegation-rewards";
pub const QUERY_DELEGATOR_VALIDATORS: &str = "query-delegator-validators";
pub const QUERY_WITHDRAW_ADDRESS: &str = "query-withdraw-address";
pub const QUERY_COMMUNITY_POOL: &str = "query-community-pool";

const SERVICE: &str = "cosmos.distribution.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum DistributionTx {
    SetWithdrawAddress(MsgSetWithdrawAddress),
    WithdrawRewards(MsgWithdrawDelegatorReward),
    /// One withdrawal per validator the delegator is bonded to.
    WithdrawAllRewards(Vec<MsgWithdrawDelegatorReward>),
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),
    FundCommunityPool(MsgFundCommunityPool),
}

impl DistributionTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            DistributionTx::SetWithdrawAddress(_) => SET_WITHDRAW_ADDRESS,
            DistributionTx::WithdrawRewards(_) => WITHDRAW_REWARDS,
            DistributionTx::WithdrawAllRewards(_) => WITHDRAW_ALL_REWARDS,
            DistributionTx::WithdrawValidatorCommission(_) => WITHDRAW_VALIDATOR_COMMISSION,
            DistributionTx::FundCommunityPool(_) => FUND_COMMUNITY_POOL,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        match self {
            DistributionTx::SetWithdrawAddress(msg) => vec![Any::pack(&msg)],
            DistributionTx::WithdrawRewards(msg) => vec![Any::pack(&msg)],
            DistributionTx::WithdrawAllRewards(msgs) => msgs.iter().map(Any::pack).collect(),
            DistributionTx::WithdrawValidatorCommission(msg) => vec![Any::pack(&msg)],
            DistributionTx::FundCommunityPool(msg) => vec![Any::pack(&msg)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DistributionQuery {
    Params(pb::QueryParamsRequest),
    ValidatorOutstandingRewards(pb::QueryValidatorOutstandingRewardsRequest),
    ValidatorCommission(pb::QueryValidatorCommissionRequest),
    ValidatorSlashes(pb::QueryValidatorSlashesRequest),
    DelegationRewards(pb::QueryDelegationRewardsRequest),
    DelegationTotalRewards(pb::QueryDelegationTotalRewardsRequest),
    DelegatorValidators(pb::QueryDelegatorValidatorsRequest),
    WithdrawAddress(pb::QueryDelegatorWithdrawAddressRequest),
    CommunityPool(pb::QueryCommunityPoolRequest),
}

impl DistributionQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            DistributionQuery::Params(_) => QUERY_PARAMS,
            DistributionQuery::ValidatorOutstandingRewards(_) => {
                QUERY_VALIDATOR_OUTSTANDING_REWARDS
            }
            DistributionQuery::ValidatorCommission(_) => QUERY_VALIDATOR_COMMISSION,
            DistributionQuery::ValidatorSlashes(_) => QUERY_VALIDATOR_SLASHES,
            DistributionQuery::DelegationRewards(_)
            | DistributionQuery::DelegationTotalRewards(_) => QUERY_DELEGATION_REWARDS,
            DistributionQuery::DelegatorValidators(_) => QUERY_DELEGATOR_VALIDATORS,
            DistributionQuery::WithdrawAddress(_) => QUERY_WITHDRAW_ADDRESS,
            DistributionQuery::CommunityPool(_) => QUERY_COMMUNITY_POOL,
        }
    }
}

pub fn set_withdraw_address(
    args: &ArgParser,
    delegator: &str,
    withdraw_address: &str,
) -> Result<DistributionTx, Error> {
    Ok(DistributionTx::SetWithdrawAddress(MsgSetWithdrawAddress {
        delegator_address: args.account_address(delegator)?,
        withdraw_address: args.account_address(withdraw_address)?,
    }))
}

pub fn withdraw_rewards(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
) -> Result<DistributionTx, Error> {
    Ok(DistributionTx::WithdrawRewards(MsgWithdrawDelegatorReward {
        delegator_address: args.account_address(delegator)?,
        validator_address: args.validator_address(validator)?,
    }))
}

/// Withdraws from every validator in `validators`, typically the answer of
/// [`query_delegator_validators`].
pub fn withdraw_all_rewards<S: AsRef<str>>(
    args: &ArgParser,
    delegator: &str,
    validators: &[S],
) -> Result<DistributionTx, Error> {
    if validators.is_empty() {
        return Err(Error::InvalidRequest(
            "the delegator has no delegations to withdraw rewards from".to_string(),
        ));
    }

    let delegator_address = args.account_address(delegator)?;

    let msgs = validators
        .iter()
        .map(|validator| {
            Ok(MsgWithdrawDelegatorReward {
                delegator_address: delegator_address.clone(),
                validator_address: args.validator_address(validator.as_ref())?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(DistributionTx::WithdrawAllRewards(msgs))
}

pub fn withdraw_validator_commission(
    args: &ArgParser,
    validator: &str,
) -> Result<DistributionTx, Error> {
    Ok(DistributionTx::WithdrawValidatorCommission(
        MsgWithdrawValidatorCommission {
            validator_address: args.validator_address(validator)?,
        },
    ))
}

pub fn fund_community_pool(
    args: &ArgParser,
    depositor: &str,
    amount: &str,
) -> Result<DistributionTx, Error> {
    Ok(DistributionTx::FundCommunityPool(MsgFundCommunityPool {
        amount: args.coins(required("amount", amount)?)?,
        depositor: args.account_address(depositor)?,
    }))
}

pub fn query_params() -> DistributionQuery {
    DistributionQuery::Params(pb::QueryParamsRequest::default())
}

pub fn query_validator_outstanding_rewards(
    args: &ArgParser,
    validator: &str,
) -> Result<DistributionQuery, Error> {
    Ok(DistributionQuery::ValidatorOutstandingRewards(
        pb::QueryValidatorOutstandingRewardsRequest {
            validator_address: args.validator_address(validator)?,
        },
    ))
}

pub fn query_validator_commission(
    args: &ArgParser,
    validator: &str,
) -> Result<DistributionQuery, Error> {
    Ok(DistributionQuery::ValidatorCommission(
        pb::QueryValidatorCommissionRequest {
            validator_address: args.validator_address(validator)?,
        },
    ))
}

/// Slashes of a validator between two block heights.
pub fn query_validator_slashes(
    args: &ArgParser,
    validator: &str,
    starting_height: &str,
    ending_height: &str,
    page: Option<PageRequest>,
) -> Result<DistributionQuery, Error> {
    let starting_height = args.id("starting height", required("starting height", starting_height)?)?;
    let ending_height = args.id("ending height", required("ending height", ending_height)?)?;

    if starting_height > ending_height {
        return Err(Error::InvalidRequest(format!(
            "starting height {starting_height} is after ending height {ending_height}"
        )));
    }

    Ok(DistributionQuery::ValidatorSlashes(
        pb::QueryValidatorSlashesRequest {
            validator_address: args.validator_address(validator)?,
            starting_height,
            ending_height,
            pagination: Some(args.page(page)),
        },
    ))
}

/// Rewards of one delegation, or of every delegation of the delegator when no validator
/// is given.
pub fn query_delegation_rewards(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
) -> Result<DistributionQuery, Error> {
    let delegator_address = args.account_address(required("delegator", delegator)?)?;

    let query = match present(validator) {
        Some(v) => DistributionQuery::DelegationRewards(pb::QueryDelegationRewardsRequest {
            delegator_address,
            validator_address: args.validator_address(v)?,
        }),
        None => DistributionQuery::DelegationTotalRewards(
            pb::QueryDelegationTotalRewardsRequest { delegator_address },
        ),
    };
    Ok(query)
}

pub fn query_delegator_validators(
    args: &ArgParser,
    delegator: &str,
) -> Result<DistributionQuery, Error> {
    Ok(DistributionQuery::DelegatorValidators(
        pb::QueryDelegatorValidatorsRequest {
            delegator_address: args.account_address(delegator)?,
        },
    ))
}

pub fn query_withdraw_address(
    args: &ArgParser,
    delegator: &str,
) -> Result<DistributionQuery, Error> {
    Ok(DistributionQuery::WithdrawAddress(
        pb::QueryDelegatorWithdrawAddressRequest {
            delegator_address: args.account_address(delegator)?,
        },
    ))
}

pub fn query_community_pool() -> DistributionQuery {
    DistributionQuery::CommunityPool(pb::QueryCommunityPoolRequest::default())
}

pub fn module() -> Module {
    Module::builder(NAME)
        .txs(
            &[
                SET_WITHDRAW_ADDRESS,
                WITHDRAW_REWARDS,
                WITHDRAW_ALL_REWARDS,
                WITHDRAW_VALIDATOR_COMMISSION,
                FUND_COMMUNITY_POOL,
            ],
            route_tx,
        )
        .queries(
            &[
                QUERY_PARAMS,
                QUERY_VALIDATOR_OUTSTANDING_REWARDS,
                QUERY_VALIDATOR_COMMISSION,
                QUERY_VALIDATOR_SLASHES,
                QUERY_DELEGATION_REWARDS,
                QUERY_DELEGATOR_VALIDATORS,
                QUERY_WITHDRAW_ADDRESS,
                QUERY_COMMUNITY_POOL,
            ],
            binary,
            textual,
        )
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Distribution(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Distribution(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        DistributionQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
        DistributionQuery::ValidatorOutstandingRewards(req) => GrpcCall::new::<
            _,
            pb::QueryValidatorOutstandingRewardsResponse,
        >(
            SERVICE, "ValidatorOutstandingRewards", &req
        ),
        DistributionQuery::ValidatorCommission(req) => GrpcCall::new::<
            _,
            pb::QueryValidatorCommissionResponse,
        >(SERVICE, "ValidatorCommission", &req),
        DistributionQuery::ValidatorSlashes(req) => {
            GrpcCall::new::<_, pb::QueryValidatorSlashesResponse>(SERVICE, "ValidatorSlashes", &req)
        }
        DistributionQuery::DelegationRewards(req) => GrpcCall::new::<
            _,
            pb::QueryDelegationRewardsResponse,
        >(SERVICE, "DelegationRewards", &req),
        DistributionQuery::DelegationTotalRewards(req) => GrpcCall::new::<
            _,
            pb::QueryDelegationTotalRewardsResponse,
        >(SERVICE, "DelegationTotalRewards", &req),
        DistributionQuery::DelegatorValidators(req) => GrpcCall::new::<
            _,
            pb::QueryDelegatorValidatorsResponse,
        >(SERVICE, "DelegatorValidators", &req),
        DistributionQuery::WithdrawAddress(req) => GrpcCall::new::<
            _,
            pb::QueryDelegatorWithdrawAddressResponse,
        >(SERVICE, "DelegatorWithdrawAddress", &req),
        DistributionQuery::CommunityPool(req) => {
            GrpcCall::new::<_, pb::QueryCommunityPoolResponse>(SERVICE, "CommunityPool", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Distribution(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        DistributionQuery::Params(_) => RestPath::new(format!("{base}/params")),
        DistributionQuery::ValidatorOutstandingRewards(req) => RestPath::new(format!(
            "{base}/validators/{}/outstanding_rewards",
            req.validator_address
        )),
        DistributionQuery::ValidatorCommission(req) => RestPath::new(format!(
            "{base}/validators/{}/commission",
            req.validator_address
        )),
        DistributionQuery::ValidatorSlashes(req) => RestPath::new(format!(
            "{base}/validators/{}/slashes",
            req.validator_address
        ))
        .param("starting_height", req.starting_height.to_string())
        .param("ending_height", req.ending_height.to_string())
        .paginate(req.pagination.as_ref()),
        DistributionQuery::DelegationRewards(req) => RestPath::new(format!(
            "{base}/delegators/{}/rewards/{}",
            req.delegator_address, req.validator_address
        )),
        DistributionQuery::DelegationTotalRewards(req) => RestPath::new(format!(
            "{base}/delegators/{}/rewards",
            req.delegator_address
        )),
        DistributionQuery::DelegatorValidators(req) => RestPath::new(format!(
            "{base}/delegators/{}/validators",
            req.delegator_address
        )),
        DistributionQuery::WithdrawAddress(req) => RestPath::new(format!(
            "{base}/delegators/{}/withdraw_address",
            req.delegator_address
        )),
        DistributionQuery::CommunityPool(_) => RestPath::new(format!("{base}/community_pool")),
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, args::AddressKind};

    fn account(args: &ArgParser) -> String {
        args.address_from_bytes(AddressKind::Account, &[4; 20])
            .unwrap()
    }

    fn validator(args: &ArgParser, byte: u8) -> String {
        args.address_from_bytes(AddressKind::Validator, &[byte; 20])
            .unwrap()
    }

    #[test]
    fn test_withdraw_all_rewards_expands_per_validator() {
        let args = ArgParser::default();
        let delegator = account(&args);
        let validators = [validator(&args, 1), validator(&args, 2), validator(&args, 3)];

        let tx = withdraw_all_rewards(&args, &delegator, &validators).unwrap();
        let anys = tx.into_anys();

        assert_eq!(anys.len(), 3);
        assert!(
            anys.iter()
                .all(|a| a.type_url == "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward")
        );
    }

    #[test]
    fn test_withdraw_all_rewards_without_delegations() {
        let args = ArgParser::default();
        let delegator = account(&args);
        let none: [&str; 0] = [];

        let err = withdraw_all_rewards(&args, &delegator, &none).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_delegation_rewards_selection() {
        let args = ArgParser::default();
        let (d, v) = (account(&args), validator(&args, 1));

        assert!(matches!(
            query_delegation_rewards(&args, &d, &v).unwrap(),
            DistributionQuery::DelegationRewards(_)
        ));
        assert!(matches!(
            query_delegation_rewards(&args, &d, "").unwrap(),
            DistributionQuery::DelegationTotalRewards(_)
        ));
        assert_eq!(
            query_delegation_rewards(&args, "", &v).unwrap_err().kind(),
            ErrorKind::InsufficientParams
        );
    }

    #[test]
    fn test_slashes_height_range() {
        let args = ArgParser::default();
        let v = validator(&args, 1);

        assert!(query_validator_slashes(&args, &v, "1", "100", None).is_ok());
        assert_eq!(
            query_validator_slashes(&args, &v, "100", "1", None)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidRequest
        );
    }
}
