//! Event filters for transaction search.
//!
//! The input grammar is `key=value` clauses joined by `&`. Each clause must contain exactly
//! one `=`. The block-height key is numeric and stays unquoted in the rendered query; every
//! other value is single-quoted.
use crate::error::Error;
use std::fmt;

/// The event key whose value is a block height.
pub const HEIGHT_KEY: &str = "tx.height";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    pub key: String,
    pub value: String,
}

impl EventFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.key == HEIGHT_KEY
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_numeric() {
            write!(f, "{}={}", self.key, self.value)
        } else {
            write!(f, "{}='{}'", self.key, self.value)
        }
    }
}

/// Parses `key=value[&key=value...]` into one filter per clause.
pub fn parse_events(input: &str) -> Result<Vec<EventFilter>, Error> {
    if input.trim().is_empty() {
        return Err(Error::InvalidRequest("empty event filter".to_string()));
    }

    input.split('&').map(parse_clause).collect()
}

fn parse_clause(clause: &str) -> Result<EventFilter, Error> {
    let clause = clause.trim();

    if clause.matches('=').count() != 1 {
        return Err(Error::InvalidRequest(format!(
            "event '{clause}' should be of the form 'key=value'"
        )));
    }

    let (key, value) = clause.split_once('=').unwrap_or_default();
    let (key, value) = (key.trim(), value.trim());

    if key.is_empty() || value.is_empty() {
        return Err(Error::InvalidRequest(format!(
            "event '{clause}' has an empty key or value"
        )));
    }

    if key == HEIGHT_KEY && !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidRequest(format!(
            "event '{clause}': '{HEIGHT_KEY}' takes a block height"
        )));
    }

    Ok(EventFilter::new(key, value))
}

/// Renders filters as one search query, clauses joined with `AND`.
pub fn to_query(filters: &[EventFilter]) -> String {
    filters
        .iter()
        .map(EventFilter::to_string)
        .collect::<Vec<_>>()
        .join(" AND ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use test_case::test_case;

    #[test]
    fn test_single_clause() {
        let events = parse_events("transfer.recipient=addr1").unwrap();

        assert_eq!(events, vec![EventFilter::new("transfer.recipient", "addr1")]);
    }

    #[test]
    fn test_two_clauses() {
        let events = parse_events("a=1&b=2").unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[1], EventFilter::new("b", "2"));
    }

    #[test_case("a=1=2" ; "two equals")]
    #[test_case("novalue" ; "no equals")]
    #[test_case("a=" ; "empty value")]
    #[test_case("=1" ; "empty key")]
    #[test_case("a=1&" ; "trailing ampersand")]
    #[test_case("tx.height=abc" ; "non numeric height")]
    #[test_case("" ; "empty")]
    fn test_invalid(input: &str) {
        assert_eq!(
            parse_events(input).unwrap_err().kind(),
            ErrorKind::InvalidRequest
        );
    }

    #[test]
    fn test_height_stays_unquoted() {
        let events = parse_events("message.sender=cosmos1x&tx.height=42").unwrap();

        assert_eq!(
            to_query(&events),
            "message.sender='cosmos1x' AND tx.height=42"
        );
    }
}
