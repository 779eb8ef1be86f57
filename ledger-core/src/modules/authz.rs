//! Authorizations one account grants another to act on its behalf
//! (`cosmos.authz.v1beta1`).
//!
//! `query-grants` picks its request from the addresses given: granter and grantee select
//! the grants between the pair, either one alone lists its side.
use crate::{
    args::{ArgParser, Selection, present, required, select, unix_time},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::{QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use ledger_proto::{
    Any,
    authz::{self as pb, GenericAuthorization, Grant, MsgExec, MsgGrant, MsgRevoke},
    base::PageRequest,
};

pub const NAME: &str = "authz";

pub const GRANT: &str = "grant";
pub const REVOKE: &str = "revoke";
pub const EXEC: &str = "exec";

pub const QUERY_GRANTS: &str = "query-grants";

const SERVICE: &str = "cosmos.authz.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum AuthzTx {
    Grant(MsgGrant),
    Revoke(MsgRevoke),
    Exec(MsgExec),
}

impl AuthzTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            AuthzTx::Grant(_) => GRANT,
            AuthzTx::Revoke(_) => REVOKE,
            AuthzTx::Exec(_) => EXEC,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        let any = match self {
            AuthzTx::Grant(msg) => Any::pack(&msg),
            AuthzTx::Revoke(msg) => Any::pack(&msg),
            AuthzTx::Exec(msg) => Any::pack(&msg),
        };
        vec![any]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthzQuery {
    Grants(pb::QueryGrantsRequest),
    GranterGrants(pb::QueryGranterGrantsRequest),
    GranteeGrants(pb::QueryGranteeGrantsRequest),
}

impl AuthzQuery {
    pub fn msg_type(&self) -> &'static str {
        QUERY_GRANTS
    }
}

/// Grants `grantee` unlimited use of the message type `msg_type_url`
/// (e.g. `/cosmos.bank.v1beta1.MsgSend`), until the unix time `expiration` if given.
pub fn grant(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
    msg_type_url: &str,
    expiration: &str,
) -> Result<AuthzTx, Error> {
    let (granter, grantee) = distinct_parties(args, granter, grantee)?;

    let authorization = GenericAuthorization {
        msg: type_url(msg_type_url)?,
    };
    let expiration = present(expiration)
        .map(|e| unix_time("expiration", e))
        .transpose()?;

    Ok(AuthzTx::Grant(MsgGrant {
        granter,
        grantee,
        grant: Some(Grant {
            authorization: Some(Any::pack(&authorization)),
            expiration,
        }),
    }))
}

pub fn revoke(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
    msg_type_url: &str,
) -> Result<AuthzTx, Error> {
    let (granter, grantee) = distinct_parties(args, granter, grantee)?;

    Ok(AuthzTx::Revoke(MsgRevoke {
        granter,
        grantee,
        msg_type_url: type_url(msg_type_url)?,
    }))
}

/// Executes `msgs` as `grantee` under the grants it holds.
pub fn exec(args: &ArgParser, grantee: &str, msgs: Vec<TxMsg>) -> Result<AuthzTx, Error> {
    if msgs.is_empty() {
        return Err(Error::InvalidRequest(
            "exec needs at least one message".to_string(),
        ));
    }

    let grantee = args.account_address(grantee)?;
    let msgs = msgs.into_iter().flat_map(TxMsg::into_anys).collect();

    Ok(AuthzTx::Exec(MsgExec { grantee, msgs }))
}

/// Grants between `granter` and `grantee`, or every grant of whichever one is given.
pub fn query_grants(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
    msg_type_url: &str,
    page: Option<PageRequest>,
) -> Result<AuthzQuery, Error> {
    let pagination = Some(args.page(page));
    let selection = select(("granter", granter), ("grantee", grantee))?;

    if !matches!(selection, Selection::Both(..)) && present(msg_type_url).is_some() {
        return Err(Error::InvalidRequest(
            "a message type filter needs both the granter and the grantee".to_string(),
        ));
    }

    let query = match selection {
        Selection::Both(granter, grantee) => AuthzQuery::Grants(pb::QueryGrantsRequest {
            granter: args.account_address(granter)?,
            grantee: args.account_address(grantee)?,
            msg_type_url: present(msg_type_url)
                .map(type_url)
                .transpose()?
                .unwrap_or_default(),
            pagination,
        }),
        Selection::First(granter) => AuthzQuery::GranterGrants(pb::QueryGranterGrantsRequest {
            granter: args.account_address(granter)?,
            pagination,
        }),
        Selection::Second(grantee) => AuthzQuery::GranteeGrants(pb::QueryGranteeGrantsRequest {
            grantee: args.account_address(grantee)?,
            pagination,
        }),
    };
    Ok(query)
}

fn distinct_parties(
    args: &ArgParser,
    granter: &str,
    grantee: &str,
) -> Result<(String, String), Error> {
    let granter = args.account_address(granter)?;
    let grantee = args.account_address(grantee)?;

    if granter == grantee {
        return Err(Error::InvalidRequest(
            "granter and grantee must differ".to_string(),
        ));
    }
    Ok((granter, grantee))
}

fn type_url(input: &str) -> Result<String, Error> {
    let input = required("message type url", input)?;
    match input.strip_prefix('/') {
        Some(name) if name.contains('.') => Ok(input.to_string()),
        _ => Err(Error::Parse(format!(
            "invalid message type url '{input}': expected '/package.Message'"
        ))),
    }
}

pub fn module() -> Module {
    Module::builder(NAME)
        .txs(&[GRANT, REVOKE, EXEC], route_tx)
        .queries(&[QUERY_GRANTS], binary, textual)
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Authz(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Authz(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        AuthzQuery::Grants(req) => {
            GrpcCall::new::<_, pb::QueryGrantsResponse>(SERVICE, "Grants", &req)
        }
        AuthzQuery::GranterGrants(req) => {
            GrpcCall::new::<_, pb::QueryGranterGrantsResponse>(SERVICE, "GranterGrants", &req)
        }
        AuthzQuery::GranteeGrants(req) => {
            GrpcCall::new::<_, pb::QueryGranteeGrantsResponse>(SERVICE, "GranteeGrants", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Authz(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        AuthzQuery::Grants(req) => RestPath::new(format!("{base}/grants"))
            .param("granter", req.granter.as_str())
            .param("grantee", req.grantee.as_str())
            .param_if("msg_type_url", &req.msg_type_url)
            .paginate(req.pagination.as_ref()),
        AuthzQuery::GranterGrants(req) => {
            RestPath::new(format!("{base}/grants/granter/{}", req.granter))
                .paginate(req.pagination.as_ref())
        }
        AuthzQuery::GranteeGrants(req) => {
            RestPath::new(format!("{base}/grants/grantee/{}", req.grantee))
                .paginate(req.pagination.as_ref())
        }
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, args::AddressKind, modules::bank};

    fn account(args: &ArgParser, byte: u8) -> String {
        args.address_from_bytes(AddressKind::Account, &[byte; 20])
            .unwrap()
    }

    #[test]
    fn test_grant_packs_generic_authorization() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));

        let AuthzTx::Grant(msg) = grant(
            &args,
            &granter,
            &grantee,
            "/cosmos.bank.v1beta1.MsgSend",
            "1900000000",
        )
        .unwrap() else {
            panic!("expected grant");
        };

        let grant = msg.grant.unwrap();
        let authorization = grant
            .authorization
            .unwrap()
            .unpack::<GenericAuthorization>()
            .unwrap();
        assert_eq!(authorization.msg, "/cosmos.bank.v1beta1.MsgSend");
        assert_eq!(grant.expiration.unwrap().seconds, 1_900_000_000);
    }

    #[test]
    fn test_grant_to_self_is_rejected() {
        let args = ArgParser::default();
        let granter = account(&args, 1);

        let err = grant(&args, &granter, &granter, "/cosmos.bank.v1beta1.MsgSend", "")
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_grants_type_filter_needs_both_parties() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));
        let filter = "/cosmos.bank.v1beta1.MsgSend";

        let by_pair = query_grants(&args, &granter, &grantee, filter, None).unwrap();
        let AuthzQuery::Grants(request) = by_pair else {
            panic!("expected pair grants");
        };
        assert_eq!(request.msg_type_url, filter);

        for (granter, grantee) in [(granter.as_str(), ""), ("", grantee.as_str())] {
            let err = query_grants(&args, granter, grantee, filter, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        }

        assert!(matches!(
            query_grants(&args, &granter, "", "", None).unwrap(),
            AuthzQuery::GranterGrants(_)
        ));
    }

    #[test]
    fn test_type_url_shape() {
        assert!(type_url("/cosmos.gov.v1beta1.MsgVote").is_ok());
        assert_eq!(type_url("MsgVote").unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(
            type_url("").unwrap_err().kind(),
            ErrorKind::InsufficientParams
        );
    }

    #[test]
    fn test_exec_packs_inner_messages() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));
        let send = bank::send(&args, &granter, &grantee, "5uatom").unwrap();

        let AuthzTx::Exec(msg) = exec(&args, &grantee, vec![send.into()]).unwrap() else {
            panic!("expected exec");
        };

        assert_eq!(msg.msgs.len(), 1);
        assert_eq!(msg.msgs[0].type_url, "/cosmos.bank.v1beta1.MsgSend");
    }

    #[test]
    fn test_exec_without_messages() {
        let args = ArgParser::default();
        let grantee = account(&args, 2);

        let err = exec(&args, &grantee, Vec::new()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_grants_selection() {
        let args = ArgParser::default();
        let (granter, grantee) = (account(&args, 1), account(&args, 2));

        assert!(matches!(
            query_grants(&args, &granter, &grantee, "", None).unwrap(),
            AuthzQuery::Grants(_)
        ));
        assert!(matches!(
            query_grants(&args, &granter, "", "", None).unwrap(),
            AuthzQuery::GranterGrants(_)
        ));
        assert!(matches!(
            query_grants(&args, "", &grantee, "", None).unwrap(),
            AuthzQuery::GranteeGrants(_)
        ));
        assert_eq!(
            query_grants(&args, "", "", "", None).unwrap_err().kind(),
            ErrorKind::InsufficientParams
        );
    }
}
