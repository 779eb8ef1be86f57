use super::{NAME, SERVICE, StakingQuery};
use crate::{
    args::{ArgParser, Selection, optional_one, present, select},
    error::Error,
    module::{BinaryCall, GrpcCall, rest_base},
    msg::QueryMsg,
    transport::rest::RestPath,
};
use ledger_proto::{
    base::PageRequest,
    staking::{self as pb, BondStatus},
};

/// One validator by operator address.
pub fn query_validator(args: &ArgParser, validator: &str) -> Result<StakingQuery, Error> {
    Ok(StakingQuery::Validator(pb::QueryValidatorRequest {
        validator_addr: args.validator_address(validator)?,
    }))
}

/// Every validator, optionally filtered by one bond status (`bonded`, `unbonding`,
/// `unbonded` or the `BOND_STATUS_*` name).
pub fn query_validators(
    args: &ArgParser,
    statuses: &[&str],
    page: Option<PageRequest>,
) -> Result<StakingQuery, Error> {
    let status = match optional_one("bond status", statuses)? {
        Some(status) => bond_status(status)?.as_str_name().to_string(),
        None => String::new(),
    };

    Ok(StakingQuery::Validators(pb::QueryValidatorsRequest {
        status,
        pagination: Some(args.page(page)),
    }))
}

pub fn query_delegation(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
    page: Option<PageRequest>,
) -> Result<StakingQuery, Error> {
    let query = match select(("delegator", delegator), ("validator", validator))? {
        Selection::Both(d, v) => StakingQuery::Delegation(pb::QueryDelegationRequest {
            delegator_addr: args.account_address(d)?,
            validator_addr: args.validator_address(v)?,
        }),
        Selection::First(d) => {
            StakingQuery::DelegatorDelegations(pb::QueryDelegatorDelegationsRequest {
                delegator_addr: args.account_address(d)?,
                pagination: Some(args.page(page)),
            })
        }
        Selection::Second(v) => {
            StakingQuery::ValidatorDelegations(pb::QueryValidatorDelegationsRequest {
                validator_addr: args.validator_address(v)?,
                pagination: Some(args.page(page)),
            })
        }
    };
    Ok(query)
}

pub fn query_unbonding_delegation(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
    page: Option<PageRequest>,
) -> Result<StakingQuery, Error> {
    let query = match select(("delegator", delegator), ("validator", validator))? {
        Selection::Both(d, v) => {
            StakingQuery::UnbondingDelegation(pb::QueryUnbondingDelegationRequest {
                delegator_addr: args.account_address(d)?,
                validator_addr: args.validator_address(v)?,
            })
        }
        Selection::First(d) => StakingQuery::DelegatorUnbondingDelegations(
            pb::QueryDelegatorUnbondingDelegationsRequest {
                delegator_addr: args.account_address(d)?,
                pagination: Some(args.page(page)),
            },
        ),
        Selection::Second(v) => StakingQuery::ValidatorUnbondingDelegations(
            pb::QueryValidatorUnbondingDelegationsRequest {
                validator_addr: args.validator_address(v)?,
                pagination: Some(args.page(page)),
            },
        ),
    };
    Ok(query)
}

/// Redelegations selected by `{delegator, source, destination}`:
///
/// * all three: the redelegation between the two validators,
/// * delegator only: every redelegation of the delegator,
/// * source only: every redelegation away from the source validator.
///
/// Nothing at all is `InsufficientParams`; any other combination is `InvalidRequest`.
pub fn query_redelegation(
    args: &ArgParser,
    delegator: &str,
    src_validator: &str,
    dst_validator: &str,
    page: Option<PageRequest>,
) -> Result<StakingQuery, Error> {
    let mut request = pb::QueryRedelegationsRequest::default();

    match (present(delegator), present(src_validator), present(dst_validator)) {
        (Some(d), Some(src), Some(dst)) => {
            request.delegator_addr = args.account_address(d)?;
            request.src_validator_addr = args.validator_address(src)?;
            request.dst_validator_addr = args.validator_address(dst)?;
        }
        (Some(d), None, None) => {
            request.delegator_addr = args.account_address(d)?;
            request.pagination = Some(args.page(page));
        }
        (None, Some(src), None) => {
            request.src_validator_addr = args.validator_address(src)?;
            request.pagination = Some(args.page(page));
        }
        (None, None, None) => {
            return Err(Error::InsufficientParams(
                "a delegator or a source validator is required".to_string(),
            ));
        }
        _ => {
            return Err(Error::InvalidRequest(
                "give the delegator with both validators, the delegator alone, \
                 or the source validator alone"
                    .to_string(),
            ));
        }
    }

    Ok(StakingQuery::Redelegations(request))
}

/// The validators a delegator is bonded to.
pub fn query_delegator_validators(
    args: &ArgParser,
    delegator: &str,
    page: Option<PageRequest>,
) -> Result<StakingQuery, Error> {
    Ok(StakingQuery::DelegatorValidators(
        pb::QueryDelegatorValidatorsRequest {
            delegator_addr: args.account_address(delegator)?,
            pagination: Some(args.page(page)),
        },
    ))
}

pub fn query_historical_info(args: &ArgParser, height: &str) -> Result<StakingQuery, Error> {
    Ok(StakingQuery::HistoricalInfo(pb::QueryHistoricalInfoRequest {
        height: args.height(height)?,
    }))
}

pub fn query_pool() -> StakingQuery {
    StakingQuery::Pool(pb::QueryPoolRequest::default())
}

pub fn query_params() -> StakingQuery {
    StakingQuery::Params(pb::QueryParamsRequest::default())
}

fn bond_status(input: &str) -> Result<BondStatus, Error> {
    let name = input.trim().to_uppercase();
    let name = if name.starts_with("BOND_STATUS_") {
        name
    } else {
        format!("BOND_STATUS_{name}")
    };

    BondStatus::from_str_name(&name)
        .filter(|status| *status != BondStatus::Unspecified)
        .ok_or_else(|| Error::InvalidRequest(format!("unknown bond status '{input}'")))
}

pub(super) fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Staking(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        StakingQuery::Validator(req) => {
            GrpcCall::new::<_, pb::QueryValidatorResponse>(SERVICE, "Validator", &req)
        }
        StakingQuery::Validators(req) => {
            GrpcCall::new::<_, pb::QueryValidatorsResponse>(SERVICE, "Validators", &req)
        }
        StakingQuery::Delegation(req) => {
            GrpcCall::new::<_, pb::QueryDelegationResponse>(SERVICE, "Delegation", &req)
        }
        StakingQuery::DelegatorDelegations(req) => GrpcCall::new::<
            _,
            pb::QueryDelegatorDelegationsResponse,
        >(SERVICE, "DelegatorDelegations", &req),
        StakingQuery::ValidatorDelegations(req) => GrpcCall::new::<
            _,
            pb::QueryValidatorDelegationsResponse,
        >(SERVICE, "ValidatorDelegations", &req),
        StakingQuery::UnbondingDelegation(req) => GrpcCall::new::<
            _,
            pb::QueryUnbondingDelegationResponse,
        >(SERVICE, "UnbondingDelegation", &req),
        StakingQuery::DelegatorUnbondingDelegations(req) => GrpcCall::new::<
            _,
            pb::QueryDelegatorUnbondingDelegationsResponse,
        >(
            SERVICE, "DelegatorUnbondingDelegations", &req
        ),
        StakingQuery::ValidatorUnbondingDelegations(req) => GrpcCall::new::<
            _,
            pb::QueryValidatorUnbondingDelegationsResponse,
        >(
            SERVICE, "ValidatorUnbondingDelegations", &req
        ),
        StakingQuery::Redelegations(req) => {
            GrpcCall::new::<_, pb::QueryRedelegationsResponse>(SERVICE, "Redelegations", &req)
        }
        StakingQuery::DelegatorValidators(req) => GrpcCall::new::<
            _,
            pb::QueryDelegatorValidatorsResponse,
        >(SERVICE, "DelegatorValidators", &req),
        StakingQuery::HistoricalInfo(req) => {
            GrpcCall::new::<_, pb::QueryHistoricalInfoResponse>(SERVICE, "HistoricalInfo", &req)
        }
        StakingQuery::Pool(req) => GrpcCall::new::<_, pb::QueryPoolResponse>(SERVICE, "Pool", &req),
        StakingQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

pub(super) fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Staking(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        StakingQuery::Validator(req) => {
            RestPath::new(format!("{base}/validators/{}", req.validator_addr))
        }
        StakingQuery::Validators(req) => RestPath::new(format!("{base}/validators"))
            .param_if("status", &req.status)
            .paginate(req.pagination.as_ref()),
        StakingQuery::Delegation(req) => RestPath::new(format!(
            "{base}/validators/{}/delegations/{}",
            req.validator_addr, req.delegator_addr
        )),
        StakingQuery::DelegatorDelegations(req) => {
            RestPath::new(format!("{base}/delegations/{}", req.delegator_addr))
                .paginate(req.pagination.as_ref())
        }
        StakingQuery::ValidatorDelegations(req) => {
            RestPath::new(format!("{base}/validators/{}/delegations", req.validator_addr))
                .paginate(req.pagination.as_ref())
        }
        StakingQuery::UnbondingDelegation(req) => RestPath::new(format!(
            "{base}/validators/{}/delegations/{}/unbonding_delegation",
            req.validator_addr, req.delegator_addr
        )),
        StakingQuery::DelegatorUnbondingDelegations(req) => RestPath::new(format!(
            "{base}/delegators/{}/unbonding_delegations",
            req.delegator_addr
        ))
        .paginate(req.pagination.as_ref()),
        StakingQuery::ValidatorUnbondingDelegations(req) => RestPath::new(format!(
            "{base}/validators/{}/unbonding_delegations",
            req.validator_addr
        ))
        .paginate(req.pagination.as_ref()),
        StakingQuery::Redelegations(req) => {
            if req.delegator_addr.is_empty() {
                return Err(Error::NotSupported(
                    "unsupported on REST: redelegations from a source validator need the \
                     binary path"
                        .to_string(),
                ));
            }
            RestPath::new(format!(
                "{base}/delegators/{}/redelegations",
                req.delegator_addr
            ))
            .param_if("src_validator_addr", &req.src_validator_addr)
            .param_if("dst_validator_addr", &req.dst_validator_addr)
            .paginate(req.pagination.as_ref())
        }
        StakingQuery::DelegatorValidators(req) => {
            RestPath::new(format!("{base}/delegators/{}/validators", req.delegator_addr))
                .paginate(req.pagination.as_ref())
        }
        StakingQuery::HistoricalInfo(_) => {
            return Err(Error::NotSupported(
                "unsupported on REST: use the binary path for historical info".to_string(),
            ));
        }
        StakingQuery::Pool(_) => RestPath::new(format!("{base}/pool")),
        StakingQuery::Params(_) => RestPath::new(format!("{base}/params")),
    };

    Ok(path)
}
