//! Token issuance (`cosmos.mint.v1beta1`). Query only.
use crate::{
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::QueryMsg,
    transport::rest::RestPath,
};
use ledger_proto::mint as pb;

pub const NAME: &str = "mint";

pub const QUERY_PARAMS: &str = "query-params";
pub const QUERY_INFLATION: &str = "query-inflation";
pub const QUERY_ANNUAL_PROVISIONS: &str = "query-annual-provisions";

const SERVICE: &str = "cosmos.mint.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum MintQuery {
    Params(pb::QueryParamsRequest),
    Inflation(pb::QueryInflationRequest),
    AnnualProvisions(pb::QueryAnnualProvisionsRequest),
}

impl MintQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            MintQuery::Params(_) => QUERY_PARAMS,
            MintQuery::Inflation(_) => QUERY_INFLATION,
            MintQuery::AnnualProvisions(_) => QUERY_ANNUAL_PROVISIONS,
        }
    }
}

pub fn query_params() -> MintQuery {
    MintQuery::Params(pb::QueryParamsRequest::default())
}

pub fn query_inflation() -> MintQuery {
    MintQuery::Inflation(pb::QueryInflationRequest::default())
}

pub fn query_annual_provisions() -> MintQuery {
    MintQuery::AnnualProvisions(pb::QueryAnnualProvisionsRequest::default())
}

pub fn module() -> Module {
    Module::builder(NAME)
        .queries(
            &[QUERY_PARAMS, QUERY_INFLATION, QUERY_ANNUAL_PROVISIONS],
            binary,
            textual,
        )
        .build()
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Mint(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        MintQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
        MintQuery::Inflation(req) => {
            GrpcCall::new::<_, pb::QueryInflationResponse>(SERVICE, "Inflation", &req)
        }
        MintQuery::AnnualProvisions(req) => {
            GrpcCall::new::<_, pb::QueryAnnualProvisionsResponse>(SERVICE, "AnnualProvisions", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Mint(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        MintQuery::Params(_) => RestPath::new(format!("{base}/params")),
        MintQuery::Inflation(_) => RestPath::new(format!("{base}/inflation")),
        MintQuery::AnnualProvisions(_) => RestPath::new(format!("{base}/annual_provisions")),
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use prost::Message;

    #[test]
    fn test_inflation_renders_as_decimal_text() {
        let BinaryCall::Grpc(call) = binary(QueryMsg::Mint(query_inflation())).unwrap() else {
            panic!("expected a gRPC call");
        };
        let response = pb::QueryInflationResponse {
            inflation: b"0.130000000000000000".to_vec(),
        };

        let json = call.decode(Bytes::from(response.encode_to_vec())).unwrap();

        assert_eq!(call.path, "/cosmos.mint.v1beta1.Query/Inflation");
        assert_eq!(json, r#"{"inflation":"0.130000000000000000"}"#);
    }

    #[test]
    fn test_query_only() {
        let module = module();

        assert!(!module.capabilities().route_tx);
        assert_eq!(
            module.query_types(),
            vec![QUERY_ANNUAL_PROVISIONS, QUERY_INFLATION, QUERY_PARAMS]
        );
    }
}
