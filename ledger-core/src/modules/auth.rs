//! Accounts and their parameters (`cosmos.auth.v1beta1`). Query only.
use crate::{
    args::ArgParser,
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::QueryMsg,
    transport::rest::RestPath,
};
use ledger_proto::{auth as pb, base::PageRequest};

pub const NAME: &str = "auth";

pub const QUERY_ACCOUNT: &str = "query-account";
pub const QUERY_ACCOUNTS: &str = "query-accounts";
pub const QUERY_MODULE_ACCOUNTS: &str = "query-module-accounts";
pub const QUERY_PARAMS: &str = "query-params";

const SERVICE: &str = "cosmos.auth.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum AuthQuery {
    Account(pb::QueryAccountRequest),
    Accounts(pb::QueryAccountsRequest),
    ModuleAccounts(pb::QueryModuleAccountsRequest),
    Params(pb::QueryParamsRequest),
}

impl AuthQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            AuthQuery::Account(_) => QUERY_ACCOUNT,
            AuthQuery::Accounts(_) => QUERY_ACCOUNTS,
            AuthQuery::ModuleAccounts(_) => QUERY_MODULE_ACCOUNTS,
            AuthQuery::Params(_) => QUERY_PARAMS,
        }
    }
}

pub fn query_account(args: &ArgParser, address: &str) -> Result<AuthQuery, Error> {
    Ok(AuthQuery::Account(pb::QueryAccountRequest {
        address: args.account_address(address)?,
    }))
}

pub fn query_accounts(args: &ArgParser, page: Option<PageRequest>) -> AuthQuery {
    AuthQuery::Accounts(pb::QueryAccountsRequest {
        pagination: Some(args.page(page)),
    })
}

pub fn query_module_accounts() -> AuthQuery {
    AuthQuery::ModuleAccounts(pb::QueryModuleAccountsRequest::default())
}

pub fn query_params() -> AuthQuery {
    AuthQuery::Params(pb::QueryParamsRequest::default())
}

pub fn module() -> Module {
    Module::builder(NAME)
        .queries(
            &[
                QUERY_ACCOUNT,
                QUERY_ACCOUNTS,
                QUERY_MODULE_ACCOUNTS,
                QUERY_PARAMS,
            ],
            binary,
            textual,
        )
        .build()
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Auth(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        AuthQuery::Account(req) => {
            GrpcCall::new::<_, pb::QueryAccountResponse>(SERVICE, "Account", &req)
        }
        AuthQuery::Accounts(req) => {
            GrpcCall::new::<_, pb::QueryAccountsResponse>(SERVICE, "Accounts", &req)
        }
        AuthQuery::ModuleAccounts(req) => {
            GrpcCall::new::<_, pb::QueryModuleAccountsResponse>(SERVICE, "ModuleAccounts", &req)
        }
        AuthQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Auth(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        AuthQuery::Account(req) => RestPath::new(format!("{base}/accounts/{}", req.address)),
        AuthQuery::Accounts(req) => {
            RestPath::new(format!("{base}/accounts")).paginate(req.pagination.as_ref())
        }
        AuthQuery::ModuleAccounts(_) => RestPath::new(format!("{base}/module_accounts")),
        AuthQuery::Params(_) => RestPath::new(format!("{base}/params")),
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::AddressKind;

    #[test]
    fn test_account_paths() {
        let args = ArgParser::default();
        let address = args
            .address_from_bytes(AddressKind::Account, &[8; 20])
            .unwrap();

        let account = textual(&QueryMsg::Auth(query_account(&args, &address).unwrap())).unwrap();
        assert_eq!(
            account.path,
            format!("/cosmos/auth/v1beta1/accounts/{address}")
        );

        let accounts = textual(&QueryMsg::Auth(query_accounts(&args, None))).unwrap();
        assert_eq!(accounts.path, "/cosmos/auth/v1beta1/accounts");
        assert!(
            accounts
                .query
                .contains(&("pagination.limit".into(), "100".into()))
        );
    }

    #[test]
    fn test_binary_paths() {
        let BinaryCall::Grpc(call) = binary(QueryMsg::Auth(query_module_accounts())).unwrap()
        else {
            panic!("expected a gRPC call");
        };

        assert_eq!(call.path, "/cosmos.auth.v1beta1.Query/ModuleAccounts");
    }
}
