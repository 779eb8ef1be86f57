//! Bech32 addresses.
//!
//! Each address role has its own human-readable prefix. Parsing checks the checksum and the
//! prefix of the expected role and returns the canonical lowercase form, so parsing an
//! already-parsed address yields the same string.
use super::ArgParser;
use crate::error::Error;
use bech32::{Bech32, Hrp};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Account,
    Validator,
    Consensus,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressKind::Account => "account",
            AddressKind::Validator => "validator",
            AddressKind::Consensus => "consensus",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressPrefixes {
    pub account: String,
    pub validator: String,
    pub consensus: String,
}

impl AddressPrefixes {
    /// Derives the validator and consensus prefixes as `{account}valoper` and `{account}valcons`.
    pub fn new(account: impl Into<String>) -> Self {
        let account = account.into();
        Self {
            validator: format!("{account}valoper"),
            consensus: format!("{account}valcons"),
            account,
        }
    }

    pub fn get(&self, kind: AddressKind) -> &str {
        match kind {
            AddressKind::Account => &self.account,
            AddressKind::Validator => &self.validator,
            AddressKind::Consensus => &self.consensus,
        }
    }
}

impl ArgParser {
    pub fn account_address(&self, input: &str) -> Result<String, Error> {
        self.address(AddressKind::Account, input)
    }

    pub fn validator_address(&self, input: &str) -> Result<String, Error> {
        self.address(AddressKind::Validator, input)
    }

    pub fn consensus_address(&self, input: &str) -> Result<String, Error> {
        self.address(AddressKind::Consensus, input)
    }

    /// Validates `input` as an address of the given role and returns its canonical form.
    pub fn address(&self, kind: AddressKind, input: &str) -> Result<String, Error> {
        let bytes = self.address_bytes(kind, input)?;
        encode(self.prefixes.get(kind), &bytes)
    }

    /// Decodes `input` as an address of the given role.
    pub fn address_bytes(&self, kind: AddressKind, input: &str) -> Result<Vec<u8>, Error> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::Parse(format!("empty {kind} address")));
        }

        let (hrp, bytes) = bech32::decode(input)
            .map_err(|e| Error::Parse(format!("invalid {kind} address '{input}': {e}")))?;

        let expected = self.prefixes.get(kind);
        if hrp.to_lowercase() != expected {
            return Err(Error::Parse(format!(
                "invalid {kind} address '{input}': expected prefix '{expected}', found '{}'",
                hrp.to_lowercase()
            )));
        }

        Ok(bytes)
    }

    /// Encodes raw address bytes under the prefix of `kind`.
    pub fn address_from_bytes(&self, kind: AddressKind, bytes: &[u8]) -> Result<String, Error> {
        encode(self.prefixes.get(kind), bytes)
    }

    /// Re-encodes an address of one role under the prefix of another (e.g. the operator
    /// address of an account).
    pub fn convert_address(
        &self,
        input: &str,
        from: AddressKind,
        to: AddressKind,
    ) -> Result<String, Error> {
        let bytes = self.address_bytes(from, input)?;
        encode(self.prefixes.get(to), &bytes)
    }
}

fn encode(prefix: &str, bytes: &[u8]) -> Result<String, Error> {
    let hrp = Hrp::parse(prefix)
        .map_err(|e| Error::Convert(format!("invalid address prefix '{prefix}': {e}")))?;

    bech32::encode::<Bech32>(hrp, bytes)
        .map_err(|e| Error::Convert(format!("cannot encode address: {e}")))
}
