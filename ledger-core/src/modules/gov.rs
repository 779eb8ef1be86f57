//! Proposals, deposits and votes (`cosmos.gov.v1beta1`).
//!
//! Vote options and proposal statuses are accepted in their short form (`yes`,
//! `no_with_veto`, `voting_period`) or as the full enum name (`VOTE_OPTION_YES`).
use crate::{
    args::{ArgParser, coin::DEC_PRECISION, optional_one, present, required},
    error::Error,
    module::{BinaryCall, GrpcCall, Module, rest_base},
    msg::{QueryMsg, TxMsg},
    transport::rest::RestPath,
};
use ledger_proto::{
    Any,
    base::PageRequest,
    gov::{
        self as pb, MsgDeposit, MsgSubmitProposal, MsgVote, MsgVoteWeighted, ProposalStatus,
        TextProposal, VoteOption, WeightedVoteOption,
    },
};
use num_bigint::BigUint;
use std::collections::HashSet;

pub const NAME: &str = "gov";

pub const SUBMIT_PROPOSAL: &str = "submit-proposal";
pub const DEPOSIT: &str = "deposit";
pub const VOTE: &str = "vote";
pub const WEIGHTED_VOTE: &str = "weighted-vote";

pub const QUERY_PROPOSAL: &str = "query-proposal";
pub const QUERY_PROPOSALS: &str = "query-proposals";
pub const QUERY_VOTE: &str = "query-vote";
pub const QUERY_DEPOSIT: &str = "query-deposit";
pub const QUERY_TALLY: &str = "query-tally";
pub const QUERY_PARAMS: &str = "query-params";

/// Params type used when none is given.
pub const DEFAULT_PARAMS_TYPE: &str = "voting";
pub const PARAMS_TYPES: [&str; 3] = ["voting", "deposit", "tallying"];

const SERVICE: &str = "cosmos.gov.v1beta1.Query";

#[derive(Debug, Clone, PartialEq)]
pub enum GovTx {
    SubmitProposal(MsgSubmitProposal),
    Deposit(MsgDeposit),
    Vote(MsgVote),
    WeightedVote(MsgVoteWeighted),
}

impl GovTx {
    pub fn msg_type(&self) -> &'static str {
        match self {
            GovTx::SubmitProposal(_) => SUBMIT_PROPOSAL,
            GovTx::Deposit(_) => DEPOSIT,
            GovTx::Vote(_) => VOTE,
            GovTx::WeightedVote(_) => WEIGHTED_VOTE,
        }
    }

    pub fn into_anys(self) -> Vec<Any> {
        let any = match self {
            GovTx::SubmitProposal(msg) => Any::pack(&msg),
            GovTx::Deposit(msg) => Any::pack(&msg),
            GovTx::Vote(msg) => Any::pack(&msg),
            GovTx::WeightedVote(msg) => Any::pack(&msg),
        };
        vec![any]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GovQuery {
    Proposal(pb::QueryProposalRequest),
    Proposals(pb::QueryProposalsRequest),
    Vote(pb::QueryVoteRequest),
    Votes(pb::QueryVotesRequest),
    Deposit(pb::QueryDepositRequest),
    Deposits(pb::QueryDepositsRequest),
    Tally(pb::QueryTallyResultRequest),
    Params(pb::QueryParamsRequest),
}

impl GovQuery {
    pub fn msg_type(&self) -> &'static str {
        match self {
            GovQuery::Proposal(_) => QUERY_PROPOSAL,
            GovQuery::Proposals(_) => QUERY_PROPOSALS,
            GovQuery::Vote(_) | GovQuery::Votes(_) => QUERY_VOTE,
            GovQuery::Deposit(_) | GovQuery::Deposits(_) => QUERY_DEPOSIT,
            GovQuery::Tally(_) => QUERY_TALLY,
            GovQuery::Params(_) => QUERY_PARAMS,
        }
    }
}

/// Parses a vote option such as `yes` or `VOTE_OPTION_NO_WITH_VETO`.
pub fn parse_vote_option(input: &str) -> Result<VoteOption, Error> {
    let name = input.trim().to_ascii_uppercase();
    let name = name.strip_prefix("VOTE_OPTION_").unwrap_or(&name);

    match name {
        "YES" => Ok(VoteOption::Yes),
        "NO" => Ok(VoteOption::No),
        "ABSTAIN" => Ok(VoteOption::Abstain),
        "NO_WITH_VETO" | "NOWITHVETO" => Ok(VoteOption::NoWithVeto),
        _ => Err(Error::Parse(format!("invalid vote option '{input}'"))),
    }
}

/// Parses a proposal status such as `voting_period` or `PROPOSAL_STATUS_PASSED`.
pub fn parse_proposal_status(input: &str) -> Result<ProposalStatus, Error> {
    let name = input.trim().to_ascii_uppercase();
    let name = name.strip_prefix("PROPOSAL_STATUS_").unwrap_or(&name);

    match name {
        "DEPOSIT_PERIOD" => Ok(ProposalStatus::DepositPeriod),
        "VOTING_PERIOD" => Ok(ProposalStatus::VotingPeriod),
        "PASSED" => Ok(ProposalStatus::Passed),
        "REJECTED" => Ok(ProposalStatus::Rejected),
        "FAILED" => Ok(ProposalStatus::Failed),
        _ => Err(Error::Parse(format!("invalid proposal status '{input}'"))),
    }
}

/// Submits a text proposal with an optional initial deposit.
pub fn submit_proposal(
    args: &ArgParser,
    proposer: &str,
    title: &str,
    description: &str,
    initial_deposit: &str,
) -> Result<GovTx, Error> {
    let content = TextProposal {
        title: required("title", title)?.to_string(),
        description: required("description", description)?.to_string(),
    };

    Ok(GovTx::SubmitProposal(MsgSubmitProposal {
        content: Some(Any::pack(&content)),
        initial_deposit: args.coins(initial_deposit)?,
        proposer: args.account_address(proposer)?,
    }))
}

pub fn deposit(
    args: &ArgParser,
    depositor: &str,
    proposal_id: &str,
    amount: &str,
) -> Result<GovTx, Error> {
    Ok(GovTx::Deposit(MsgDeposit {
        proposal_id: args.id("proposal id", proposal_id)?,
        depositor: args.account_address(depositor)?,
        amount: args.coins(required("amount", amount)?)?,
    }))
}

pub fn vote(args: &ArgParser, voter: &str, proposal_id: &str, option: &str) -> Result<GovTx, Error> {
    Ok(GovTx::Vote(MsgVote {
        proposal_id: args.id("proposal id", proposal_id)?,
        voter: args.account_address(voter)?,
        option: parse_vote_option(option)? as i32,
    }))
}

/// Splits a vote across options, e.g. `yes=0.6,no=0.4`. Weights must add up to one.
pub fn weighted_vote(
    args: &ArgParser,
    voter: &str,
    proposal_id: &str,
    options: &str,
) -> Result<GovTx, Error> {
    let mut seen = HashSet::new();
    let mut total = BigUint::default();
    let mut weighted = Vec::new();

    for part in required("options", options)?.split(',') {
        let (option, weight) = part
            .split_once('=')
            .ok_or_else(|| Error::Parse(format!("invalid weighted option '{}'", part.trim())))?;

        let option = parse_vote_option(option)?;
        if !seen.insert(option) {
            return Err(Error::InvalidRequest(format!(
                "duplicate vote option {}",
                option.as_str_name()
            )));
        }

        let weight = args.dec(weight)?;
        let scaled: BigUint = weight
            .parse()
            .map_err(|e| Error::Convert(format!("invalid weight '{weight}': {e}")))?;
        if scaled == BigUint::default() {
            return Err(Error::InvalidRequest(format!(
                "weight of {} must be positive",
                option.as_str_name()
            )));
        }
        total += scaled;

        weighted.push(WeightedVoteOption {
            option: option as i32,
            weight,
        });
    }

    if total != BigUint::from(10u32).pow(DEC_PRECISION as u32) {
        return Err(Error::InvalidRequest(
            "vote weights must add up to 1".to_string(),
        ));
    }

    Ok(GovTx::WeightedVote(MsgVoteWeighted {
        proposal_id: args.id("proposal id", proposal_id)?,
        voter: args.account_address(voter)?,
        options: weighted,
    }))
}

pub fn query_proposal(args: &ArgParser, proposal_id: &str) -> Result<GovQuery, Error> {
    Ok(GovQuery::Proposal(pb::QueryProposalRequest {
        proposal_id: args.id("proposal id", required("proposal id", proposal_id)?)?,
    }))
}

/// Lists proposals, optionally filtered by status, voter and depositor.
pub fn query_proposals(
    args: &ArgParser,
    status: &str,
    voter: &str,
    depositor: &str,
    page: Option<PageRequest>,
) -> Result<GovQuery, Error> {
    let proposal_status = match present(status) {
        Some(status) => parse_proposal_status(status)?,
        None => ProposalStatus::Unspecified,
    };
    let voter = present(voter)
        .map(|v| args.account_address(v))
        .transpose()?
        .unwrap_or_default();
    let depositor = present(depositor)
        .map(|d| args.account_address(d))
        .transpose()?
        .unwrap_or_default();

    Ok(GovQuery::Proposals(pb::QueryProposalsRequest {
        proposal_status: proposal_status as i32,
        voter,
        depositor,
        pagination: Some(args.page(page)),
    }))
}

/// One vote when `voter` is given, every vote on the proposal otherwise.
pub fn query_vote(
    args: &ArgParser,
    proposal_id: &str,
    voter: &str,
    page: Option<PageRequest>,
) -> Result<GovQuery, Error> {
    let proposal_id = args.id("proposal id", required("proposal id", proposal_id)?)?;

    let query = match present(voter) {
        Some(voter) => GovQuery::Vote(pb::QueryVoteRequest {
            proposal_id,
            voter: args.account_address(voter)?,
        }),
        None => GovQuery::Votes(pb::QueryVotesRequest {
            proposal_id,
            pagination: Some(args.page(page)),
        }),
    };
    Ok(query)
}

/// One deposit when `depositor` is given, every deposit on the proposal otherwise.
pub fn query_deposit(
    args: &ArgParser,
    proposal_id: &str,
    depositor: &str,
    page: Option<PageRequest>,
) -> Result<GovQuery, Error> {
    let proposal_id = args.id("proposal id", required("proposal id", proposal_id)?)?;

    let query = match present(depositor) {
        Some(depositor) => GovQuery::Deposit(pb::QueryDepositRequest {
            proposal_id,
            depositor: args.account_address(depositor)?,
        }),
        None => GovQuery::Deposits(pb::QueryDepositsRequest {
            proposal_id,
            pagination: Some(args.page(page)),
        }),
    };
    Ok(query)
}

pub fn query_tally(args: &ArgParser, proposal_id: &str) -> Result<GovQuery, Error> {
    Ok(GovQuery::Tally(pb::QueryTallyResultRequest {
        proposal_id: args.id("proposal id", required("proposal id", proposal_id)?)?,
    }))
}

/// Params of one type (`voting`, `deposit` or `tallying`), `voting` when none is given.
pub fn query_params<S: AsRef<str>>(params_type: &[S]) -> Result<GovQuery, Error> {
    let params_type = optional_one("params type", params_type)?
        .map(|t| t.as_ref().trim())
        .unwrap_or(DEFAULT_PARAMS_TYPE);

    if !PARAMS_TYPES.contains(&params_type) {
        return Err(Error::InvalidRequest(format!(
            "unknown params type '{params_type}', expected one of {}",
            PARAMS_TYPES.join(", ")
        )));
    }

    Ok(GovQuery::Params(pb::QueryParamsRequest {
        params_type: params_type.to_string(),
    }))
}

pub fn module() -> Module {
    Module::builder(NAME)
        .txs(&[SUBMIT_PROPOSAL, DEPOSIT, VOTE, WEIGHTED_VOTE], route_tx)
        .queries(
            &[
                QUERY_PROPOSAL,
                QUERY_PROPOSALS,
                QUERY_VOTE,
                QUERY_DEPOSIT,
                QUERY_TALLY,
                QUERY_PARAMS,
            ],
            binary,
            textual,
        )
        .build()
}

fn route_tx(msg: TxMsg) -> Result<Vec<Any>, Error> {
    match msg {
        TxMsg::Gov(tx) => Ok(tx.into_anys()),
        other => Err(Error::payload_mismatch(NAME, other.msg_type())),
    }
}

fn binary(msg: QueryMsg) -> Result<BinaryCall, Error> {
    let query = match msg {
        QueryMsg::Gov(query) => query,
        other => return Err(Error::payload_mismatch(NAME, other.msg_type())),
    };

    let call = match query {
        GovQuery::Proposal(req) => {
            GrpcCall::new::<_, pb::QueryProposalResponse>(SERVICE, "Proposal", &req)
        }
        GovQuery::Proposals(req) => {
            GrpcCall::new::<_, pb::QueryProposalsResponse>(SERVICE, "Proposals", &req)
        }
        GovQuery::Vote(req) => GrpcCall::new::<_, pb::QueryVoteResponse>(SERVICE, "Vote", &req),
        GovQuery::Votes(req) => GrpcCall::new::<_, pb::QueryVotesResponse>(SERVICE, "Votes", &req),
        GovQuery::Deposit(req) => {
            GrpcCall::new::<_, pb::QueryDepositResponse>(SERVICE, "Deposit", &req)
        }
        GovQuery::Deposits(req) => {
            GrpcCall::new::<_, pb::QueryDepositsResponse>(SERVICE, "Deposits", &req)
        }
        GovQuery::Tally(req) => {
            GrpcCall::new::<_, pb::QueryTallyResultResponse>(SERVICE, "TallyResult", &req)
        }
        GovQuery::Params(req) => {
            GrpcCall::new::<_, pb::QueryParamsResponse>(SERVICE, "Params", &req)
        }
    };

    Ok(BinaryCall::Grpc(call))
}

fn textual(msg: &QueryMsg) -> Result<RestPath, Error> {
    let QueryMsg::Gov(query) = msg else {
        return Err(Error::payload_mismatch(NAME, msg.msg_type()));
    };

    let base = rest_base(pb::PACKAGE);

    let path = match query {
        GovQuery::Proposal(req) => RestPath::new(format!("{base}/proposals/{}", req.proposal_id)),
        GovQuery::Proposals(req) => {
            let status = match ProposalStatus::try_from(req.proposal_status) {
                Ok(ProposalStatus::Unspecified) | Err(_) => "",
                Ok(status) => status.as_str_name(),
            };
            RestPath::new(format!("{base}/proposals"))
                .param_if("proposal_status", status)
                .param_if("voter", &req.voter)
                .param_if("depositor", &req.depositor)
                .paginate(req.pagination.as_ref())
        }
        GovQuery::Vote(req) => RestPath::new(format!(
            "{base}/proposals/{}/votes/{}",
            req.proposal_id, req.voter
        )),
        GovQuery::Votes(req) => {
            RestPath::new(format!("{base}/proposals/{}/votes", req.proposal_id))
                .paginate(req.pagination.as_ref())
        }
        GovQuery::Deposit(req) => RestPath::new(format!(
            "{base}/proposals/{}/deposits/{}",
            req.proposal_id, req.depositor
        )),
        GovQuery::Deposits(req) => {
            RestPath::new(format!("{base}/proposals/{}/deposits", req.proposal_id))
                .paginate(req.pagination.as_ref())
        }
        GovQuery::Tally(req) => {
            RestPath::new(format!("{base}/proposals/{}/tally", req.proposal_id))
        }
        GovQuery::Params(req) => RestPath::new(format!("{base}/params/{}", req.params_type)),
    };

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, args::AddressKind};
    use test_case::test_case;

    fn account(args: &ArgParser) -> String {
        args.address_from_bytes(AddressKind::Account, &[5; 20])
            .unwrap()
    }

    #[test_case("yes", VoteOption::Yes ; "short")]
    #[test_case("No_With_Veto", VoteOption::NoWithVeto ; "mixed case")]
    #[test_case("VOTE_OPTION_ABSTAIN", VoteOption::Abstain ; "enum name")]
    fn test_parse_vote_option(input: &str, expected: VoteOption) {
        assert_eq!(parse_vote_option(input).unwrap(), expected);
    }

    #[test]
    fn test_parse_vote_option_rejects_unspecified() {
        assert_eq!(
            parse_vote_option("unspecified").unwrap_err().kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_weighted_vote() {
        let args = ArgParser::default();
        let voter = account(&args);

        let GovTx::WeightedVote(msg) =
            weighted_vote(&args, &voter, "4", "yes=0.6,no=0.4").unwrap()
        else {
            panic!("expected weighted-vote");
        };

        assert_eq!(msg.proposal_id, 4);
        assert_eq!(msg.options.len(), 2);
        assert_eq!(msg.options[0].option, VoteOption::Yes as i32);
        assert_eq!(msg.options[0].weight, "600000000000000000");
    }

    #[test_case("yes=0.5,no=0.4", ErrorKind::InvalidRequest ; "short of one")]
    #[test_case("yes=0.5,yes=0.5", ErrorKind::InvalidRequest ; "duplicate option")]
    #[test_case("yes=1,no=0", ErrorKind::InvalidRequest ; "zero weight")]
    #[test_case("yes", ErrorKind::Parse ; "missing weight")]
    fn test_weighted_vote_rejects(options: &str, kind: ErrorKind) {
        let args = ArgParser::default();
        let voter = account(&args);

        let err = weighted_vote(&args, &voter, "4", options).unwrap_err();

        assert_eq!(err.kind(), kind);
    }

    #[test]
    fn test_params_type_defaults_to_voting() {
        let none: [&str; 0] = [];

        assert_eq!(
            query_params(&none).unwrap(),
            GovQuery::Params(pb::QueryParamsRequest {
                params_type: "voting".into()
            })
        );
        assert!(query_params(&["tallying"]).is_ok());
        assert_eq!(
            query_params(&["voting", "deposit"]).unwrap_err().kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            query_params(&["quorum"]).unwrap_err().kind(),
            ErrorKind::InvalidRequest
        );
    }

    #[test]
    fn test_vote_selection() {
        let args = ArgParser::default();
        let voter = account(&args);

        assert!(matches!(
            query_vote(&args, "1", &voter, None).unwrap(),
            GovQuery::Vote(_)
        ));
        assert!(matches!(
            query_vote(&args, "1", "", None).unwrap(),
            GovQuery::Votes(_)
        ));
        assert_eq!(
            query_vote(&args, "", &voter, None).unwrap_err().kind(),
            ErrorKind::InsufficientParams
        );
    }

    #[test]
    fn test_missing_proposal_id_is_insufficient() {
        let args = ArgParser::default();
        let voter = account(&args);

        let errors = [
            query_proposal(&args, "").unwrap_err(),
            query_tally(&args, " ").unwrap_err(),
            query_deposit(&args, "", &voter, None).unwrap_err(),
        ];

        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InsufficientParams);
        }
        assert_eq!(
            query_tally(&args, "x1").unwrap_err().kind(),
            ErrorKind::Parse
        );
    }

    #[test]
    fn test_proposals_rest_filter_uses_enum_name() {
        let args = ArgParser::default();
        let query = query_proposals(&args, "voting_period", "", "", None).unwrap();

        let path = textual(&QueryMsg::Gov(query)).unwrap();

        assert_eq!(path.path, "/cosmos/gov/v1beta1/proposals");
        assert!(
            path.query
                .contains(&("proposal_status".into(), "PROPOSAL_STATUS_VOTING_PERIOD".into()))
        );
    }

    #[test]
    fn test_submit_proposal_packs_text_content() {
        let args = ArgParser::default();
        let proposer = account(&args);

        let GovTx::SubmitProposal(msg) =
            submit_proposal(&args, &proposer, "Title", "Body", "").unwrap()
        else {
            panic!("expected submit-proposal");
        };

        let content = msg.content.unwrap();
        assert_eq!(content.type_url, "/cosmos.gov.v1beta1.TextProposal");
        assert_eq!(
            content.unpack::<TextProposal>().unwrap().title,
            "Title"
        );
        assert!(msg.initial_deposit.is_empty());
    }
}
