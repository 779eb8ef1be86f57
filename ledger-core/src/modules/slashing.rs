//! Validator liveness and jailing (`cosmos.slashing.v1beta1`).
use crate::{
    args::{ArgParser, optional_one},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::{QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use ledger_proto::{
    Any,
    base::PageRequest,
    slashing::{self as pb, MsgUnjail},
};

pub const NAME: &str = "slashing";

pub const UNJAIL: &str = "unjail";

pub const QUERY_SIGNING_INFO: &str = "query-signing-info";
pub const QUERY_PARAMS: &str = "query-params";

const SERVICE: &str = "cosmos.slashing.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum SlashingTx {
    Unjail(MsgUnjail),
}

impl SlashingTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            SlashingTx::Unjail(_) => UNJAIL,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        match self {
            SlashingTx::Unjail(msg) => vec![Any::pack(&msg)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlashingQuery {
    SigningInfo(pb::QuerySigningInfoRequest),
    SigningInfos(pb::QuerySigningInfosRequest),
    Params(pb::QueryParamsRequest),
}

impl SlashingQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            SlashingQuery::SigningInfo(_) | SlashingQuery::SigningInfos(_) => QUERY_SIGNING_INFO,
            SlashingQuery::Params(_) => QUERY_PARAMS,
        }
    }
}

/// Unjails the validator with operator address `validator`.
pub fn unjail(args: &ArgParser, validator: &str) -> Result<SlashingTx, Error> {
    Ok(SlashingTx::Unjail(MsgUnjail {
        validator_addr: args.validator_address(validator)?,
    }))
}

/// Signing info of one consensus address, or of every validator when none is given.
pub fn query_signing_info<S: AsRef<str>>(
    args: &ArgParser,
    cons_address: &[S],
    page: Option<PageRequest>,
) -> Result<SlashingQuery, Error> {
    let query = match optional_one("consensus address", cons_address)? {
        Some(address) => SlashingQuery::SigningInfo(pb::QuerySigningInfoRequest {
            cons_address: args.consensus_address(address.as_ref())?,
        }),
        None => SlashingQuery::SigningInfos(pb::QuerySigningInfosRequest {
            pagination: Some(args.page(page)),
        }),
    };
    Ok(query)
}

pub fn query_params() -> SlashingQuery {
    SlashingQuery::Params(pb::QueryParamsRequest::default())
}

pub fn module() -> Module {
    Module::builder(NAME)
        .tx(UNJAIL, route_tx)
        .queries(&[QUERY_SIGNING_INFO, QUERY_PARAMS], binary, textual)
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Slashing(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Slashing(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        SlashingQuery::SigningInfo(req) => {
            GrpcCall::new::<_, pb::QuerySigningInfoResponse>(SERVICE, "SigningInfo", &req)
        }
        SlashingQuery::SigningInfos(req) => {
            GrpcCall::new::<_, pb::QuerySigningInfosResponse>(SERVICE, "SigningInfos", &req)
        }
        SlashingQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Slashing(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        SlashingQuery::SigningInfo(req) => {
            RestPath::new(format!("{base}/signing_infos/{}", req.cons_address))
        }
        SlashingQuery::SigningInfos(req) => {
            RestPath::new(format!("{base}/signing_infos")).paginate(req.pagination.as_ref())
        }
        SlashingQuery::Params(_) => RestPath::new(format!("{base}/params")),
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, args::AddressKind};

    #[test]
    fn test_signing_info_zero_or_one() {
        let args = ArgParser::default();
        let cons = args
            .address_from_bytes(AddressKind::Consensus, &[3; 20])
            .unwrap();
        let none: [&str; 0] = [];

        assert!(matches!(
            query_signing_info(&args, &[cons.as_str()], None).unwrap(),
            SlashingQuery::SigningInfo(_)
        ));
        assert!(matches!(
            query_signing_info(&args, &none, None).unwrap(),
            SlashingQuery::SigningInfos(_)
        ));
        assert_eq!(
            query_signing_info(&args, &[cons.as_str(), cons.as_str()], None)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidRequest
        );
    }

    #[test]
    fn test_unjail_needs_operator_address() {
        let args = ArgParser::default();
        let account = args
            .address_from_bytes(AddressKind::Account, &[3; 20])
            .unwrap();

        assert_eq!(unjail(&args, &account).unwrap_err().kind(), ErrorKind::Parse);
    }
}
