//! The node service (`cosmos.base.tendermint.v1beta1`): node info, sync state, blocks and
//! validator sets. Query only.
use crate::{
    args::{ArgParser, optional_one},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::QueryMsg,
    transport::rest::RestPath,
};
use ledger_proto::{base::PageRequest, cmtservice as pb};

pub const NAME: &str = "base";

pub const QUERY_NODE_INFO: &str = "query-node-info";
pub const QUERY_SYNCING: &str = "query-syncing";
pub const QUERY_BLOCK: &str = "query-block";
pub const QUERY_VALIDATOR_SET: &str = "query-validator-set";

const SERVICE: &str = "cosmos.base.tendermint.v1beta1.Service";

#[derive(Debug, Clone, PartialEq)]
pub enum BaseQuery {
    NodeInfo(pb::GetNodeInfoRequest),
    Syncing(pb::GetSyncingRequest),
    LatestBlock(pb::GetLatestBlockRequest),
    BlockByHeight(pb::GetBlockByHeightRequest),
    LatestValidatorSet(pb::GetLatestValidatorSetRequest),
    ValidatorSetByHeight(pb::GetValidatorSetByHeightRequest),
}

impl BaseQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            BaseQuery::NodeInfo(_) => QUERY_NODE_INFO,
            BaseQuery::Syncing(_) => QUERY_SYNCING,
            BaseQuery::LatestBlock(_) | BaseQuery::BlockByHeight(_) => QUERY_BLOCK,
            BaseQuery::LatestValidatorSet(_) | BaseQuery::ValidatorSetByHeight(_) => {
                QUERY_VALIDATOR_SET
            }
        }
    }
}

pub fn query_node_info() -> BaseQuery {
    BaseQuery::NodeInfo(pb::GetNodeInfoRequest::default())
}

pub fn query_syncing() -> BaseQuery {
    BaseQuery::Syncing(pb::GetSyncingRequest::default())
}

/// The block at the given height, or the latest block when none is given.
pub fn query_block<S: AsRef<str>>(args: &ArgParser, height: &[S]) -> Result<BaseQuery, Error> {
    let query = match optional_one("height", height)? {
        Some(height) => BaseQuery::BlockByHeight(pb::GetBlockByHeightRequest {
            height: args.height(height.as_ref())?,
        }),
        None => BaseQuery::LatestBlock(pb::GetLatestBlockRequest::default()),
    };
    Ok(query)
}

/// The validator set at the given height, or the latest one when none is given.
pub fn query_validator_set<S: AsRef<str>>(
    args: &ArgParser,
    height: &[S],
    page: Option<PageRequest>,
) -> Result<BaseQuery, Error> {
    let pagination = Some(args.page(page));

    let query = match optional_one("height", height)? {
        Some(height) => BaseQuery::ValidatorSetByHeight(pb::GetValidatorSetByHeightRequest {
            height: args.height(height.as_ref())?,
            pagination,
        }),
        None => BaseQuery::LatestValidatorSet(pb::GetLatestValidatorSetRequest { pagination }),
    };
    Ok(query)
}

pub fn module() -> Module {
    Module::builder(NAME)
        .queries(
            &[
                QUERY_NODE_INFO,
                QUERY_SYNCING,
                QUERY_BLOCK,
                QUERY_VALIDATOR_SET,
            ],
            binary,
            textual,
        )
        .build()
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Base(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        BaseQuery::NodeInfo(req) => {
            GrpcCall::new::<_, pb::GetNodeInfoResponse>(SERVICE, "GetNodeInfo", &req)
        }
        BaseQuery::Syncing(req) => {
            GrpcCall::new::<_, pb::GetSyncingResponse>(SERVICE, "GetSyncing", &req)
        }
        BaseQuery::LatestBlock(req) => {
            GrpcCall::new::<_, pb::GetLatestBlockResponse>(SERVICE, "GetLatestBlock", &req)
        }
        BaseQuery::BlockByHeight(req) => {
            GrpcCall::new::<_, pb::GetBlockByHeightResponse>(SERVICE, "GetBlockByHeight", &req)
        }
        BaseQuery::LatestValidatorSet(req) => GrpcCall::new::<
            _,
            pb::GetLatestValidatorSetResponse,
        >(SERVICE, "GetLatestValidatorSet", &req),
        BaseQuery::ValidatorSetByHeight(req) => GrpcCall::new::<
            _,
            pb::GetValidatorSetByHeightResponse,
        >(SERVICE, "GetValidatorSetByHeight", &req),
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Base(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        BaseQuery::NodeInfo(_) => RestPath::new(format!("{base}/node_info")),
        BaseQuery::Syncing(_) => RestPath::new(format!("{base}/syncing")),
        BaseQuery::LatestBlock(_) => RestPath::new(format!("{base}/blocks/latest")),
        BaseQuery::BlockByHeight(req) => {
            RestPath::new(format!("{base}/blocks/{}", req.height))
        }
        BaseQuery::LatestValidatorSet(req) => {
            RestPath::new(format!("{base}/validatorsets/latest"))
                .paginate(req.pagination.as_ref())
        }
        BaseQuery::ValidatorSetByHeight(req) => {
            RestPath::new(format!("{base}/validatorsets/{}", req.height))
                .paginate(req.pagination.as_ref())
        }
    };

    Ok(path)
}
