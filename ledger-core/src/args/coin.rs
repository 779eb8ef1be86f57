//! Coin amounts and fixed-point decimals.
//!
//! An amount is an integer followed by an optional denomination (`"1000"`, `"1000uatom"`,
//! `"1.5atom"`). Without a denomination the base denomination is assumed. A configured display
//! denomination is converted to its base denomination by its exponent; any other denomination
//! is passed through as is. Amounts are arbitrary-precision integers.
use super::ArgParser;
use crate::error::Error;
use ledger_proto::base::Coin;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// Number of fractional digits of a chain decimal.
pub const DEC_PRECISION: usize = 18;

/// A display denomination, e.g. `atom` = 10^6 `uatom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denomination {
    pub display: String,
    pub base: String,
    pub exponent: u32,
}

impl ArgParser {
    /// Parses a single amount into a base-denomination coin.
    pub fn coin(&self, input: &str) -> Result<Coin, Error> {
        let input = input.trim();
        let split = input
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(input.len());
        let (number, denom) = input.split_at(split);
        let denom = denom.trim();

        if number.is_empty() {
            return Err(Error::Parse(format!("invalid amount '{input}': missing number")));
        }

        let denom = if denom.is_empty() {
            self.base_denom.as_str()
        } else {
            validate_denom(denom)?;
            denom
        };

        match self.denoms.iter().find(|d| d.display == denom) {
            Some(unit) => {
                let amount = scale(number, unit.exponent as usize)
                    .map_err(|e| e.with_context(input))?;
                Ok(Coin::new(amount.to_string(), &unit.base))
            }
            None => {
                if number.contains('.') {
                    return Err(Error::Convert(format!(
                        "invalid amount '{input}': '{denom}' does not take fractional amounts"
                    )));
                }
                let amount = parse_uint(number).map_err(|e| e.with_context(input))?;
                Ok(Coin::new(amount.to_string(), denom))
            }
        }
    }

    /// Parses a comma-separated list of amounts, sorted by denomination.
    ///
    /// A blank input is an empty list. A denomination may appear only once.
    pub fn coins(&self, input: &str) -> Result<Vec<Coin>, Error> {
        if input.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut coins = input
            .split(',')
            .map(|part| self.coin(part))
            .collect::<Result<Vec<_>, _>>()?;

        coins.sort_by(|a, b| a.denom.cmp(&b.denom));

        if let Some(pair) = coins.windows(2).find(|w| w[0].denom == w[1].denom) {
            return Err(Error::InvalidRequest(format!(
                "duplicate denomination '{}' in '{input}'",
                pair[0].denom
            )));
        }

        Ok(coins)
    }

    /// Parses a decimal such as `"0.05"` into its 18-digit fixed-point integer form, which is
    /// how decimals travel on the wire.
    pub fn dec(&self, input: &str) -> Result<String, Error> {
        let input = input.trim();
        scale(input, DEC_PRECISION)
            .map(|v| v.to_string())
            .map_err(|e| e.with_context(input))
    }
}

/// Denominations are 3 to 128 characters, start with a letter and continue with
/// alphanumerics or `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), Error> {
    let mut chars = denom.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));

    if !(3..=128).contains(&denom.len()) || !starts_with_letter || !rest_valid {
        return Err(Error::Parse(format!("invalid denomination '{denom}'")));
    }
    Ok(())
}

enum AmountError {
    Malformed(String),
    Precision(usize),
}

impl AmountError {
    fn with_context(self, input: &str) -> Error {
        match self {
            AmountError::Malformed(reason) => {
                Error::Parse(format!("invalid amount '{input}': {reason}"))
            }
            AmountError::Precision(max) => Error::Convert(format!(
                "invalid amount '{input}': more than {max} fractional digits"
            )),
        }
    }
}

fn parse_uint(digits: &str) -> Result<BigUint, AmountError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed(format!("'{digits}' is not a number")));
    }
    digits
        .parse()
        .map_err(|e| AmountError::Malformed(format!("{e}")))
}

/// `number * 10^exponent`, rejecting fractions finer than the exponent allows.
fn scale(number: &str, exponent: usize) -> Result<BigUint, AmountError> {
    let (int, frac) = number.split_once('.').unwrap_or((number, ""));

    if int.is_empty() && frac.is_empty() {
        return Err(AmountError::Malformed("missing number".to_string()));
    }
    if frac.len() > exponent {
        return Err(AmountError::Precision(exponent));
    }

    let int = if int.is_empty() { "0" } else { int };
    let digits = format!("{int}{frac:0<exponent$}");
    parse_uint(&digits)
}
