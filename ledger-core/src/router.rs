//! # Tx Router
//!
//! Attaches validated transaction messages to a [`TxBuilder`].
//!
//! The router resolves the message-type tag through the module's route table, packs the
//! payload into one or more `Any` messages and only then touches the builder, so a failed
//! route leaves the builder unchanged. It performs no validation beyond that: the message
//! factories are the only producers of payloads.
//!
//! Signing and broadcasting are out of scope. [`UnsignedTx`] is the builder shipped with
//! the crate; it collects the messages plus the fee, memo and timeout metadata and renders
//! the `TxBody`/`AuthInfo` protos a signer needs.
use crate::{error::Error, module::Module, msg::TxMsg};
use ledger_proto::{
    Any,
    base::Coin,
    tx::{AuthInfo, Fee, Tx, TxBody},
};
use prost::Message;

/// An accumulator of transaction messages, owned by the caller.
pub trait TxBuilder {
    /// Appends `msgs` in order.
    fn add_messages(&mut self, msgs: Vec<Any>);

    /// Messages attached so far.
    fn messages(&self) -> &[Any];
}

/// Routes `payload` under `msg_type` through `module` and attaches the result to `builder`.
pub fn route_tx<B>(
    module: &Module,
    builder: &mut B,
    msg_type: &str,
    payload: TxMsg,
) -> Result<(), Error>
where
    B: TxBuilder + ?Sized,
{
    let msgs = module.route_tx(msg_type, payload)?;

    tracing::debug!(
        module = module.name(),
        msg_type,
        count = msgs.len(),
        "attaching transaction messages"
    );

    builder.add_messages(msgs);
    Ok(())
}

/// A transaction body and fee, ready to be signed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnsignedTx {
    messages: Vec<Any>,
    memo: String,
    fee: Vec<Coin>,
    gas_limit: u64,
    fee_granter: String,
    timeout_height: u64,
}

impl UnsignedTx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_fee(mut self, fee: Vec<Coin>) -> Self {
        self.fee = fee;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Pays the fee from `granter`'s allowance.
    pub fn with_fee_granter(mut self, granter: impl Into<String>) -> Self {
        self.fee_granter = granter.into();
        self
    }

    /// The transaction is rejected once the chain passes `height`.
    pub fn with_timeout_height(mut self, height: u64) -> Self {
        self.timeout_height = height;
        self
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn body(&self) -> TxBody {
        TxBody {
            messages: self.messages.clone(),
            memo: self.memo.clone(),
            timeout_height: self.timeout_height,
        }
    }

    /// Fee information. Signer infos are left to the signer.
    pub fn auth_info(&self) -> AuthInfo {
        AuthInfo {
            signer_infos: Vec::new(),
            fee: Some(Fee {
                amount: self.fee.clone(),
                gas_limit: self.gas_limit,
                payer: String::new(),
                granter: self.fee_granter.clone(),
            }),
        }
    }

    pub fn body_bytes(&self) -> Vec<u8> {
        self.body().encode_to_vec()
    }

    pub fn auth_info_bytes(&self) -> Vec<u8> {
        self.auth_info().encode_to_vec()
    }

    /// The transaction without signatures.
    pub fn to_tx(&self) -> Tx {
        Tx {
            body: Some(self.body()),
            auth_info: Some(self.auth_info()),
            signatures: Vec::new(),
        }
    }
}

impl TxBuilder for UnsignedTx {
    fn add_messages(&mut self, msgs: Vec<Any>) {
        self.messages.extend(msgs);
    }

    fn messages(&self) -> &[Any] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ErrorKind,
        args::{AddressKind, ArgParser},
        modules::{bank, distribution, staking},
    };

    fn account(args: &ArgParser, byte: u8) -> String {
        args.address_from_bytes(AddressKind::Account, &[byte; 20])
            .unwrap()
    }

    #[test]
    fn test_route_attaches_message() {
        let args = ArgParser::default();
        let send = bank::send(&args, &account(&args, 1), &account(&args, 2), "10uatom").unwrap();
        let mut tx = UnsignedTx::new();

        route_tx(&bank::module(), &mut tx, bank::BANK_SEND, send.into()).unwrap();

        assert_eq!(tx.messages().len(), 1);
        assert_eq!(tx.messages()[0].type_url, "/cosmos.bank.v1beta1.MsgSend");
    }

    #[test]
    fn test_unknown_tag_leaves_builder_untouched() {
        let args = ArgParser::default();
        let send = bank::send(&args, &account(&args, 1), &account(&args, 2), "10uatom").unwrap();
        let mut tx = UnsignedTx::new();

        let err = route_tx(&bank::module(), &mut tx, "bank-burn", send.into()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidMsgType);
        assert!(err.to_string().contains("bank-burn"));
        assert!(tx.is_empty());
    }

    #[test]
    fn test_payload_of_another_module_is_rejected() {
        let args = ArgParser::default();
        let send = bank::send(&args, &account(&args, 1), &account(&args, 2), "10uatom").unwrap();
        let mut tx = UnsignedTx::new();

        let err = route_tx(&staking::module(), &mut tx, staking::DELEGATE, send.into())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(tx.is_empty());
    }

    #[test]
    fn test_withdraw_all_expands_to_many_messages() {
        let args = ArgParser::default();
        let validators: Vec<_> = (1..=3)
            .map(|b| {
                args.address_from_bytes(AddressKind::Validator, &[b; 20])
                    .unwrap()
            })
            .collect();
        let withdraw =
            distribution::withdraw_all_rewards(&args, &account(&args, 9), &validators).unwrap();
        let mut tx = UnsignedTx::new().with_memo("rewards");

        route_tx(
            &distribution::module(),
            &mut tx,
            distribution::WITHDRAW_ALL_REWARDS,
            withdraw.into(),
        )
        .unwrap();

        assert_eq!(tx.messages().len(), 3);
        assert_eq!(tx.body().memo, "rewards");
    }

    #[test]
    fn test_body_bytes_round_trip() {
        let mut tx = UnsignedTx::new()
            .with_memo("hi")
            .with_gas_limit(200_000)
            .with_fee(vec![Coin::new("500", "uatom")])
            .with_timeout_height(99);
        tx.add_messages(vec![Any {
            type_url: "/x.y.Z".into(),
            value: vec![1],
        }]);

        let body = TxBody::decode(tx.body_bytes().as_slice()).unwrap();
        let fee = AuthInfo::decode(tx.auth_info_bytes().as_slice())
            .unwrap()
            .fee
            .unwrap();

        assert_eq!(body.timeout_height, 99);
        assert_eq!(body.messages.len(), 1);
        assert_eq!(fee.gas_limit, 200_000);
        assert_eq!(fee.amount, vec![Coin::new("500", "uatom")]);
    }
}
