//! # Client Configuration
//!
//! A [`ClientConfig`] describes the chain a [`crate::LedgerClient`] talks to: its
//! endpoints, its address prefixes and denominations, the default backend, the default
//! pagination and the default call deadline.
//!
//! It is read from a JSON document. Every field has a default, so a document only needs
//! the endpoints:
//!
//! ```json
//! {
//!   "chain_id": "cosmoshub-4",
//!   "grpc_url": "http://localhost:9090",
//!   "rest_url": "http://localhost:1317",
//!   "denoms": [{ "display": "atom", "base": "uatom", "exponent": 6 }],
//!   "pagination": { "limit": 50 }
//! }
//! ```
use crate::{
    args::{
        AddressPrefixes, ArgParser, DEFAULT_ACCOUNT_PREFIX, DEFAULT_BASE_DENOM,
        DEFAULT_PAGE_LIMIT, Denomination, coin::DEC_PRECISION,
    },
    msg::Backend,
};
use ledger_proto::base::PageRequest;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Errors raised while loading or validating a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No endpoint configured: set 'grpc_url' or 'rest_url'")]
    NoEndpoint,
    #[error("Invalid URL in '{field}': '{url}'")]
    InvalidUrl { field: &'static str, url: String },
    #[error("Invalid bech32 prefix in '{field}': '{prefix}'")]
    InvalidPrefix { field: &'static str, prefix: String },
    #[error("Invalid denomination: {0}")]
    InvalidDenom(String),
    #[error("Default backend '{0}' has no configured endpoint")]
    BackendUnavailable(Backend),
    #[error("Pagination limit must be positive")]
    ZeroPageLimit,
}

/// Default pagination applied to listing queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub limit: u64,
    pub offset: u64,
    pub count_total: bool,
    pub reverse: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
            count_total: false,
            reverse: false,
        }
    }
}

impl Pagination {
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest {
            key: Vec::new(),
            offset: self.offset,
            limit: self.limit,
            count_total: self.count_total,
            reverse: self.reverse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub chain_id: String,
    pub grpc_url: Option<String>,
    pub rest_url: Option<String>,
    /// Node RPC endpoint, used by transaction-history search.
    pub rpc_url: Option<String>,
    pub backend: Backend,
    pub account_prefix: String,
    /// Overrides `{account_prefix}valoper`.
    pub validator_prefix: Option<String>,
    /// Overrides `{account_prefix}valcons`.
    pub consensus_prefix: Option<String>,
    pub base_denom: String,
    pub denoms: Vec<Denomination>,
    pub pagination: Pagination,
    /// Default deadline of every call, in milliseconds. Zero disables it.
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain_id: String::new(),
            grpc_url: None,
            rest_url: None,
            rpc_url: None,
            backend: Backend::default(),
            account_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            validator_prefix: None,
            consensus_prefix: None,
            base_denom: DEFAULT_BASE_DENOM.to_string(),
            denoms: Vec::new(),
            pagination: Pagination::default(),
            timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the JSON document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grpc_url.is_none() && self.rest_url.is_none() {
            return Err(ConfigError::NoEndpoint);
        }

        for (field, url) in [
            ("grpc_url", &self.grpc_url),
            ("rest_url", &self.rest_url),
            ("rpc_url", &self.rpc_url),
        ] {
            if let Some(url) = url {
                check_url(field, url)?;
            }
        }

        let available = match self.backend {
            Backend::Binary => self.grpc_url.is_some(),
            Backend::Textual => self.rest_url.is_some(),
        };
        if !available {
            return Err(ConfigError::BackendUnavailable(self.backend));
        }

        let prefixes = self.prefixes();
        for (field, prefix) in [
            ("account_prefix", &prefixes.account),
            ("validator_prefix", &prefixes.validator),
            ("consensus_prefix", &prefixes.consensus),
        ] {
            check_prefix(field, prefix)?;
        }

        if self.base_denom.trim().is_empty() {
            return Err(ConfigError::InvalidDenom("'base_denom' is empty".to_string()));
        }
        for denom in &self.denoms {
            if denom.display.trim().is_empty() || denom.base.trim().is_empty() {
                return Err(ConfigError::InvalidDenom(format!(
                    "'{}' -> '{}' has an empty name",
                    denom.display, denom.base
                )));
            }
            if denom.exponent as usize > DEC_PRECISION {
                return Err(ConfigError::InvalidDenom(format!(
                    "exponent of '{}' is {}, at most {DEC_PRECISION} is supported",
                    denom.display, denom.exponent
                )));
            }
        }

        if self.pagination.limit == 0 {
            return Err(ConfigError::ZeroPageLimit);
        }

        Ok(())
    }

    /// Address prefixes, with the validator and consensus ones derived unless overridden.
    pub fn prefixes(&self) -> AddressPrefixes {
        let mut prefixes = AddressPrefixes::new(self.account_prefix.clone());
        if let Some(validator) = &self.validator_prefix {
            prefixes.validator = validator.clone();
        }
        if let Some(consensus) = &self.consensus_prefix {
            prefixes.consensus = consensus.clone();
        }
        prefixes
    }

    /// The argument parser for this chain.
    pub fn arg_parser(&self) -> ArgParser {
        ArgParser::new(self.prefixes(), self.base_denom.clone())
            .with_denoms(self.denoms.clone())
            .with_default_page(self.pagination.to_page_request())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

fn check_url(field: &'static str, url: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidUrl {
        field,
        url: url.to_string(),
    };

    let uri: http::Uri = url.parse().map_err(|_| invalid())?;
    match uri.scheme_str() {
        Some("http" | "https") if uri.host().is_some() => Ok(()),
        _ => Err(invalid()),
    }
}

fn check_prefix(field: &'static str, prefix: &str) -> Result<(), ConfigError> {
    let valid = !prefix.is_empty()
        && prefix == prefix.to_lowercase()
        && bech32::Hrp::parse(prefix).is_ok();
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidPrefix {
            field,
            prefix: prefix.to_string(),
        })
    }
}
