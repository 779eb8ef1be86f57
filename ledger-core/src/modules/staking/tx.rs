use super::StakingTx;
use crate::{
    args::{AddressKind, ArgParser, required},
    error::Error,
};
use base64::Engine;
use ledger_proto::{
    Any,
    crypto::{PUBKEY_LENGTH, PubKey},
    staking::{
        CommissionRates, Description, MsgBeginRedelegate, MsgCancelUnbondingDelegation,
        MsgCreateValidator, MsgDelegate, MsgEditValidator, MsgUndelegate,
    },
};
use num_bigint::BigUint;

/// Placeholder the chain reads as "keep the current value" in a validator edit.
pub const DO_NOT_MODIFY: &str = "[do-not-modify]";

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatorDescription<'a> {
    pub moniker: &'a str,
    pub identity: &'a str,
    pub website: &'a str,
    pub security_contact: &'a str,
    pub details: &'a str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreateValidator<'a> {
    pub description: ValidatorDescription<'a>,
    pub commission_rate: &'a str,
    pub commission_max_rate: &'a str,
    pub commission_max_change_rate: &'a str,
    /// Defaults to `1` when blank.
    pub min_self_delegation: &'a str,
    /// Base64 ed25519 consensus key.
    pub pubkey: &'a str,
    pub amount: &'a str,
}

/// Blank fields are left unchanged on chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditValidator<'a> {
    pub description: ValidatorDescription<'a>,
    pub commission_rate: &'a str,
    pub min_self_delegation: &'a str,
}

/// Creates the validator operated by `signer`.
pub fn create_validator(
    args: &ArgParser,
    signer: &str,
    params: &CreateValidator<'_>,
) -> Result<StakingTx, Error> {
    let delegator_address = args.account_address(signer)?;
    let validator_address =
        args.convert_address(signer, AddressKind::Account, AddressKind::Validator)?;

    let d = &params.description;
    let description = Description {
        moniker: required("moniker", d.moniker)?.to_string(),
        identity: d.identity.to_string(),
        website: d.website.to_string(),
        security_contact: d.security_contact.to_string(),
        details: d.details.to_string(),
    };

    let commission = CommissionRates {
        rate: args.dec(required("commission rate", params.commission_rate)?)?,
        max_rate: args.dec(required("commission max rate", params.commission_max_rate)?)?,
        max_change_rate: args.dec(required(
            "commission max change rate",
            params.commission_max_change_rate,
        )?)?,
    };

    let min_self_delegation = match params.min_self_delegation.trim() {
        "" => "1".to_string(),
        value => integer("min self delegation", value)?,
    };

    Ok(StakingTx::CreateValidator(MsgCreateValidator {
        description: Some(description),
        commission: Some(commission),
        min_self_delegation,
        delegator_address,
        validator_address,
        pubkey: Some(consensus_pubkey(params.pubkey)?),
        value: Some(args.coin(required("amount", params.amount)?)?),
    }))
}

/// Edits the validator operated by `signer`.
pub fn edit_validator(
    args: &ArgParser,
    signer: &str,
    params: &EditValidator<'_>,
) -> Result<StakingTx, Error> {
    let validator_address =
        args.convert_address(signer, AddressKind::Account, AddressKind::Validator)?;

    let keep = |value: &str| match value.trim() {
        "" => DO_NOT_MODIFY.to_string(),
        value => value.to_string(),
    };
    let d = &params.description;
    let description = Description {
        moniker: keep(d.moniker),
        identity: keep(d.identity),
        website: keep(d.website),
        security_contact: keep(d.security_contact),
        details: keep(d.details),
    };

    let commission_rate = match params.commission_rate.trim() {
        "" => String::new(),
        rate => args.dec(rate)?,
    };
    let min_self_delegation = match params.min_self_delegation.trim() {
        "" => String::new(),
        value => integer("min self delegation", value)?,
    };

    Ok(StakingTx::EditValidator(MsgEditValidator {
        description: Some(description),
        validator_address,
        commission_rate,
        min_self_delegation,
    }))
}

pub fn delegate(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
    amount: &str,
) -> Result<StakingTx, Error> {
    Ok(StakingTx::Delegate(MsgDelegate {
        delegator_address: args.account_address(delegator)?,
        validator_address: args.validator_address(validator)?,
        amount: Some(args.coin(required("amount", amount)?)?),
    }))
}

pub fn redelegate(
    args: &ArgParser,
    delegator: &str,
    src_validator: &str,
    dst_validator: &str,
    amount: &str,
) -> Result<StakingTx, Error> {
    let validator_src_address = args.validator_address(src_validator)?;
    let validator_dst_address = args.validator_address(dst_validator)?;

    if validator_src_address == validator_dst_address {
        return Err(Error::InvalidRequest(
            "source and destination validators must differ".to_string(),
        ));
    }

    Ok(StakingTx::Redelegate(MsgBeginRedelegate {
        delegator_address: args.account_address(delegator)?,
        validator_src_address,
        validator_dst_address,
        amount: Some(args.coin(required("amount", amount)?)?),
    }))
}

pub fn unbond(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
    amount: &str,
) -> Result<StakingTx, Error> {
    Ok(StakingTx::Unbond(MsgUndelegate {
        delegator_address: args.account_address(delegator)?,
        validator_address: args.validator_address(validator)?,
        amount: Some(args.coin(required("amount", amount)?)?),
    }))
}

/// Cancels the unbonding entry created at `creation_height`.
pub fn cancel_unbond(
    args: &ArgParser,
    delegator: &str,
    validator: &str,
    amount: &str,
    creation_height: &str,
) -> Result<StakingTx, Error> {
    Ok(StakingTx::CancelUnbond(MsgCancelUnbondingDelegation {
        delegator_address: args.account_address(delegator)?,
        validator_address: args.validator_address(validator)?,
        amount: Some(args.coin(required("amount", amount)?)?),
        creation_height: args.height(required("creation height", creation_height)?)?,
    }))
}

fn integer(field: &str, value: &str) -> Result<String, Error> {
    value
        .parse::<BigUint>()
        .map(|v| v.to_string())
        .map_err(|e| Error::Parse(format!("invalid {field} '{value}': {e}")))
}

fn consensus_pubkey(input: &str) -> Result<Any, Error> {
    let input = required("consensus public key", input)?;

    let key = base64::engine::general_purpose::STANDARD
        .decode(input)
        .map_err(|e| Error::Parse(format!("invalid consensus public key: {e}")))?;

    if key.len() != PUBKEY_LENGTH {
        return Err(Error::Parse(format!(
            "invalid consensus public key: expected {PUBKEY_LENGTH} bytes, got {}",
            key.len()
        )));
    }

    Ok(Any::pack(&PubKey { key }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn account(args: &ArgParser, byte: u8) -> String {
        args.address_from_bytes(AddressKind::Account, &[byte; 20])
            .unwrap()
    }

    fn validator(args: &ArgParser, byte: u8) -> String {
        args.address_from_bytes(AddressKind::Validator, &[byte; 20])
            .unwrap()
    }

    fn create_params() -> CreateValidator<'static> {
        CreateValidator {
            description: ValidatorDescription {
                moniker: "node0",
                ..Default::default()
            },
            commission_rate: "0.1",
            commission_max_rate: "0.2",
            commission_max_change_rate: "0.01",
            min_self_delegation: "",
            pubkey: "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=",
            amount: "1000000uatom",
        }
    }

    #[test]
    fn test_create_validator_derives_operator_address() {
        let args = ArgParser::default();
        let signer = account(&args, 9);

        let StakingTx::CreateValidator(msg) =
            create_validator(&args, &signer, &create_params()).unwrap()
        else {
            panic!("expected create-validator");
        };

        assert_eq!(msg.validator_address, validator(&args, 9));
        assert_eq!(msg.min_self_delegation, "1");
        assert_eq!(
            msg.commission.unwrap().rate,
            "100000000000000000"
        );
        assert_eq!(
            msg.pubkey.unwrap().type_url,
            "/cosmos.crypto.ed25519.PubKey"
        );
    }

    #[test]
    fn test_create_validator_requires_moniker() {
        let args = ArgParser::default();
        let signer = account(&args, 9);
        let mut params = create_params();
        params.description.moniker = "";

        let err = create_validator(&args, &signer, &params).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InsufficientParams);
    }

    #[test]
    fn test_create_validator_rejects_short_pubkey() {
        let args = ArgParser::default();
        let signer = account(&args, 9);
        let mut params = create_params();
        params.pubkey = "AAAA";

        let err = create_validator(&args, &signer, &params).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_edit_validator_keeps_blank_fields() {
        let args = ArgParser::default();
        let signer = account(&args, 9);
        let params = EditValidator {
            description: ValidatorDescription {
                website: "https://example.org",
                ..Default::default()
            },
            ..Default::default()
        };

        let StakingTx::EditValidator(msg) = edit_validator(&args, &signer, &params).unwrap()
        else {
            panic!("expected edit-validator");
        };

        let description = msg.description.unwrap();
        assert_eq!(description.moniker, DO_NOT_MODIFY);
        assert_eq!(description.website, "https://example.org");
        assert!(msg.commission_rate.is_empty());
    }

    #[test]
    fn test_delegate_checks_address_roles() {
        let args = ArgParser::default();
        let delegator = account(&args, 1);

        let err = delegate(&args, &delegator, &delegator, "10").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_redelegate_to_same_validator_is_rejected() {
        let args = ArgParser::default();
        let (delegator, val) = (account(&args, 1), validator(&args, 2));

        let err = redelegate(&args, &delegator, &val, &val, "10").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_cancel_unbond_parses_height() {
        let args = ArgParser::default();
        let (delegator, val) = (account(&args, 1), validator(&args, 2));

        let StakingTx::CancelUnbond(msg) =
            cancel_unbond(&args, &delegator, &val, "10", "1200").unwrap()
        else {
            panic!("expected cancel-unbond");
        };

        assert_eq!(msg.creation_height, 1200);
    }
}
