//! # Argument Parser
//!
//! Pure functions that turn primitive caller input into validated domain values. Nothing
//! here performs I/O, and every failure is reported before a message is built.
//!
//! The parser carries the chain conventions it needs to do that:
//!
//! * the bech32 prefixes of the three address roles ([`AddressPrefixes`]),
//! * the base denomination and the display denominations with their exponents
//!   ([`Denomination`]),
//! * the default [`PageRequest`] used by listing queries when the caller passes none.
//!
//! Input shapes without chain context (event filters, query-tx selectors, "zero or one"
//! parameters) are free functions in the submodules.
pub mod address;
pub mod coin;
pub mod events;
pub mod query_tx;

pub use address::{AddressKind, AddressPrefixes};
pub use coin::Denomination;
pub use events::{EventFilter, parse_events};
pub use query_tx::{QueryTxMode, QueryTxParams, parse_query_tx};

use crate::error::Error;
use ledger_proto::{base::PageRequest, google::Timestamp};

pub const DEFAULT_ACCOUNT_PREFIX: &str = "cosmos";
pub const DEFAULT_BASE_DENOM: &str = "uatom";
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgParser {
    prefixes: AddressPrefixes,
    base_denom: String,
    denoms: Vec<Denomination>,
    default_page: PageRequest,
}

impl Default for ArgParser {
    fn default() -> Self {
        Self::new(
            AddressPrefixes::new(DEFAULT_ACCOUNT_PREFIX),
            DEFAULT_BASE_DENOM,
        )
    }
}

impl ArgParser {
    pub fn new(prefixes: AddressPrefixes, base_denom: impl Into<String>) -> Self {
        Self {
            prefixes,
            base_denom: base_denom.into(),
            denoms: Vec::new(),
            default_page: PageRequest {
                limit: DEFAULT_PAGE_LIMIT,
                ..Default::default()
            },
        }
    }

    pub fn with_denoms(mut self, denoms: Vec<Denomination>) -> Self {
        self.denoms = denoms;
        self
    }

    pub fn with_default_page(mut self, page: PageRequest) -> Self {
        self.default_page = page;
        self
    }

    pub fn prefixes(&self) -> &AddressPrefixes {
        &self.prefixes
    }

    pub fn base_denom(&self) -> &str {
        &self.base_denom
    }

    pub fn denoms(&self) -> &[Denomination] {
        &self.denoms
    }

    pub fn default_page(&self) -> &PageRequest {
        &self.default_page
    }

    /// The caller's page if given, otherwise a copy of the default one.
    pub fn page(&self, page: Option<PageRequest>) -> PageRequest {
        page.unwrap_or_else(|| self.default_page.clone())
    }

    /// Parses a block height. Zero is not a valid height.
    pub fn height(&self, input: &str) -> Result<i64, Error> {
        let height: i64 = input
            .trim()
            .parse()
            .map_err(|e| Error::Parse(format!("invalid height '{input}': {e}")))?;
        if height <= 0 {
            return Err(Error::InvalidRequest(format!(
                "height must be positive, got {height}"
            )));
        }
        Ok(height)
    }

    /// Parses an unsigned integer identifier such as a proposal id.
    pub fn id(&self, field: &str, input: &str) -> Result<u64, Error> {
        input
            .trim()
            .parse()
            .map_err(|e| Error::Parse(format!("invalid {field} '{input}': {e}")))
    }
}

/// Accepts zero or one value of a variadic parameter.
///
/// More than one value is an `InvalidRequest` naming `what`.
pub fn optional_one<'a, T>(what: &str, values: &'a [T]) -> Result<Option<&'a T>, Error> {
    match values {
        [] => Ok(None),
        [value] => Ok(Some(value)),
        _ => Err(Error::InvalidRequest(format!(
            "at most one {what} is accepted, got {}",
            values.len()
        ))),
    }
}

/// Treats blank strings as absent.
pub fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Fails with `InsufficientParams` when `value` is blank.
pub fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, Error> {
    present(value).ok_or_else(|| Error::InsufficientParams(format!("'{field}' is required")))
}

/// Parses a unix time in seconds, such as a grant expiration.
pub fn unix_time(field: &str, input: &str) -> Result<Timestamp, Error> {
    let seconds: i64 = input
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("invalid {field} '{input}': {e}")))?;
    if seconds <= 0 {
        return Err(Error::InvalidRequest(format!(
            "{field} must be a positive unix time, got {seconds}"
        )));
    }
    Ok(Timestamp::from_unix(seconds))
}

/// Which of two mutually-selecting fields were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Both(&'a str, &'a str),
    First(&'a str),
    Second(&'a str),
}

/// Selects a request shape from two `(name, value)` fields, at least one of which must be
/// present.
pub fn select<'a>(first: (&str, &'a str), second: (&str, &'a str)) -> Result<Selection<'a>, Error> {
    match (present(first.1), present(second.1)) {
        (Some(a), Some(b)) => Ok(Selection::Both(a, b)),
        (Some(a), None) => Ok(Selection::First(a)),
        (None, Some(b)) => Ok(Selection::Second(b)),
        (None, None) => Err(Error::InsufficientParams(format!(
            "either '{}' or '{}' is required",
            first.0, second.0
        ))),
    }
}
