//! Fee allowances (`cosmos.feegrant.v1beta1`).
use crate::{
    args::{ArgParser, Selection, present, select, unix_time},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::{QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use ledger_proto::{
    Any,
    base::PageRequest,
    feegrant::{self as pb, BasicAllowance, MsgGrantAllowance, MsgRevokeAllowance},
};

pub const NAME: &str = "feegrant";

pub const GRANT_ALLOWANCE: &str = "grant-allowance";
pub const REVOKE_ALLOWANCE: &str = "revoke-allowance";

pub const QUERY_ALLOWANCE: &str = "query-allowance";

const SERVICE: &str = "cosmos.feegrant.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum FeegrantTx {
    GrantAllowance(MsgGrantAllowance),
    RevokeAllowance(MsgRevokeAllowance),
}

impl FeegrantTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            FeegrantTx::GrantAllowance(_) => GRANT_ALLOWANCE,
            FeegrantTx::RevokeAllowance(_) => REVOKE_ALLOWANCE,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        let any = match self {
            FeegrantTx::GrantAllowance(msg) => Any::pack(&msg),
            FeegrantTx::RevokeAllowance(msg) => Any::pack(&msg),
        };
        vec![any]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeegrantQuery {
    Allowance(pb::QueryAllowanceRequest),
    Allowances(pb::QueryAllowancesRequest),
    AllowancesByGranter(pb::QueryAllowancesByGranterRequest),
}

impl FeegrantQuery {
    pub fn msg_type(&self) -> &'static str {
        QUERY_ALLOWANCE
    }
}

/// Lets `grantee` pay fees from `granter`'s account, up to `spend_limit` (unlimited when
/// blank) and until the unix time `expiration` if given.
pub fn grant_allowance(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
    spend_limit: &str,
    expiration: &str,
) -> Result<FeegrantTx, Error> {
    let granter = args.account_address(granter)?;
    let grantee = args.account_address(grantee)?;
    if granter == grantee {
        return Err(Error::InvalidRequest(
            "cannot grant a fee allowance to self".to_string(),
        ));
    }

    let allowance = BasicAllowance {
        spend_limit: args.coins(spend_limit)?,
        expiration: present(expiration)
            .map(|e| unix_time("expiration", e))
            .transpose()?,
    };

    Ok(FeegrantTx::GrantAllowance(MsgGrantAllowance {
        granter,
        grantee,
        allowance: Some(Any::pack(&allowance)),
    }))
}

pub fn revoke_allowance(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
) -> Result<FeegrantTx, Error> {
    Ok(FeegrantTx::RevokeAllowance(MsgRevokeAllowance {
        granter: args.account_address(granter)?,
        grantee: args.account_address(grantee)?,
    }))
}

/// The allowance between `granter` and `grantee`, or every allowance of whichever one is
/// given.
pub fn query_allowance(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
    page: Option<PageRequest>,
) -> Result<FeegrantQuery, Error> {
    let query = match select(("granter", granter), ("grantee", grantee))? {
        Selection::Both(granter, grantee) => {
            FeegrantQuery::Allowance(pb::QueryAllowanceRequest {
                granter: args.account_address(granter)?,
                grantee: args.account_address(grantee)?,
            })
        }
        Selection::First(granter) => {
            FeegrantQuery::AllowancesByGranter(pb::QueryAllowancesByGranterRequest {
                granter: args.account_address(granter)?,
                pagination: Some(args.page(page)),
            })
        }
        Selection::Second(grantee) => FeegrantQuery::Allowances(pb::QueryAllowancesRequest {
            grantee: args.account_address(grantee)?,
            pagination: Some(args.page(page)),
        }),
    };
    Ok(query)
}

pub fn module() -> Module {
    Module::builder(NAME)
        .txs(&[GRANT_ALLOWANCE, REVOKE_ALLOWANCE], route_tx)
        .queries(&[QUERY_ALLOWANCE], binary, textual)
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Feegrant(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Feegrant(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        FeegrantQuery::Allowance(req) => {
            GrpcCall::new::<_, pb::QueryAllowanceResponse>(SERVICE, "Allowance", &req)
        }
        FeegrantQuery::Allowances(req) => {
            GrpcCall::new::<_, pb::QueryAllowancesResponse>(SERVICE, "Allowances", &req)
        }
        FeegrantQuery::AllowancesByGranter(req) => GrpcCall::new::<
            _,
            pb::QueryAllowancesByGranterResponse,
        >(SERVICE, "AllowancesByGranter", &req),
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Feegrant(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        FeegrantQuery::Allowance(req) => RestPath::new(format!(
            "{base}/allowance/{}/{}",
            req.granter, req.grantee
        )),
        FeegrantQuery::Allowances(req) => {
            RestPath::new(format!("{base}/allowances/{}", req.grantee))
                .paginate(req.pagination.as_ref())
        }
        FeegrantQuery::AllowancesByGranter(req) => {
            RestPath::new(format!("{base}/issued/{}", req.granter))
                .paginate(req.pagination.as_ref())
        }
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, args::AddressKind};

    fn account(args: &ArgParser, byte: u8) -> String {
        args.address_from_bytes(AddressKind::Account, &[byte; 20])
            .unwrap()
    }

    #[test]
    fn test_unlimited_allowance() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));

        let FeegrantTx::GrantAllowance(msg) =
            grant_allowance(&args, &granter, &grantee, "", "").unwrap()
        else {
            panic!("expected grant-allowance");
        };

        let allowance = msg
            .allowance
            .unwrap()
            .unpack::<BasicAllowance>()
            .unwrap();
        assert!(allowance.spend_limit.is_empty());
        assert!(allowance.expiration.is_none());
    }

    #[test]
    fn test_allowance_expiration_must_be_positive() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));

        let err = grant_allowance(&args, &granter, &grantee, "10uatom", "-5").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_allowance_selection_and_paths() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));

        let pair = query_allowance(&args, &granter, &grantee, None).unwrap();
        let path = textual(&QueryMsg::Feegrant(pair)).unwrap();
        assert_eq!(
            path.path,
            format!("/cosmos/feegrant/v1beta1/allowance/{granter}/{grantee}")
        );

        let issued = query_allowance(&args, &granter, "", None).unwrap();
        let path = textual(&QueryMsg::Feegrant(issued)).unwrap();
        assert_eq!(path.path, format!("/cosmos/feegrant/v1beta1/issued/{granter}"));

        assert!(matches!(
            query_allowance(&args, "", &grantee, None).unwrap(),
            FeegrantQuery::Allowances(_)
        ));
    }
}
