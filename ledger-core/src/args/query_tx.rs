//! Selector of the "query transaction" operation.
//!
//! A transaction is looked up by hash (the default), by one or more signatures, or by
//! `address/sequence`. The selector is parsed into the list of events to search for.
use crate::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryTxMode {
    Hash,
    Signature,
    AccSeq,
}

impl QueryTxMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryTxMode::Hash => "hash",
            QueryTxMode::Signature => "signature",
            QueryTxMode::AccSeq => "acc_seq",
        }
    }
}

impl fmt::Display for QueryTxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTxParams {
    pub mode: QueryTxMode,
    /// The hash itself in `hash` mode, otherwise rendered event conditions.
    pub events: Vec<String>,
}

/// Parses a `(type, value)` selector. An empty type means `hash`.
pub fn parse_query_tx(kind: &str, value: &str) -> Result<QueryTxParams, Error> {
    let value = value.trim();

    let mode = match kind.trim() {
        "" | "hash" => QueryTxMode::Hash,
        "signature" => QueryTxMode::Signature,
        "acc_seq" => QueryTxMode::AccSeq,
        other => return Err(Error::InvalidMsgType(other.to_string())),
    };

    if value.is_empty() {
        let reason = match mode {
            QueryTxMode::Hash => "argument should be a tx hash",
            QueryTxMode::Signature => "argument should be comma-separated signatures",
            QueryTxMode::AccSeq => "`acc_seq` type takes an argument '<addr>/<seq>'",
        };
        return Err(Error::InvalidRequest(reason.to_string()));
    }

    let events = match mode {
        QueryTxMode::Hash => vec![value.to_string()],
        QueryTxMode::Signature => value
            .split(',')
            .map(str::trim)
            .filter(|sig| !sig.is_empty())
            .map(|sig| format!("tx.signature='{sig}'"))
            .collect(),
        QueryTxMode::AccSeq => vec![format!("tx.acc_seq='{value}'")],
    };

    if events.is_empty() {
        return Err(Error::InvalidRequest(
            "argument should be comma-separated signatures".to_string(),
        ));
    }

    Ok(QueryTxParams { mode, events })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_default_mode_is_hash() {
        let params = parse_query_tx("", "HASH123").unwrap();

        assert_eq!(params.mode, QueryTxMode::Hash);
        assert_eq!(params.events, vec!["HASH123".to_string()]);
    }

    #[test]
    fn test_signatures_become_one_event_each() {
        let params = parse_query_tx("signature", "sig1,sig2").unwrap();

        assert_eq!(params.mode, QueryTxMode::Signature);
        assert_eq!(
            params.events,
            vec!["tx.signature='sig1'", "tx.signature='sig2'"]
        );
    }

    #[test]
    fn test_acc_seq() {
        let params = parse_query_tx("acc_seq", "cosmos1abc/7").unwrap();

        assert_eq!(params.events, vec!["tx.acc_seq='cosmos1abc/7'"]);
    }

    #[test]
    fn test_empty_acc_seq_is_invalid_request() {
        let err = parse_query_tx("acc_seq", "").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("'<addr>/<seq>'"));
    }

    #[test]
    fn test_empty_hash_has_its_own_message() {
        let err = parse_query_tx("hash", " ").unwrap_err();

        assert!(err.to_string().contains("argument should be a tx hash"));
    }

    #[test]
    fn test_unknown_mode() {
        let err = parse_query_tx("bogus", "x").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidMsgType);
        assert!(err.to_string().contains("bogus"));
    }
}
