//! `google.protobuf` well-known types.
//!
//! Declared locally (instead of using `prost-types`) so that they carry their proto3 JSON
//! rendering alongside the rest of the messages.
use crate::{auth, authz, bank, crypto, distribution, feegrant, gov, slashing, staking};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, SecondsFormat};
use prost::Name;
use serde::{
    Serialize, Serializer,
    ser::{Error as _, SerializeMap},
};

/// `google.protobuf.Any`: a packed message together with its type URL.
///
/// Renders as the packed message's own fields next to `"@type"`. Type URLs this crate does not
/// declare fall back to `{"@type", "value"}` with the raw bytes in base64.
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

impl Any {
    /// Packs `msg` using its `/package.Type` type URL.
    pub fn pack<M: Name>(msg: &M) -> Self {
        Self {
            type_url: M::type_url(),
            value: msg.encode_to_vec(),
        }
    }

    /// Unpacks the inner message if the type URL matches `M` and the bytes decode.
    pub fn unpack<M: Name + Default>(&self) -> Option<M> {
        if self.type_url != M::type_url() {
            return None;
        }
        M::decode(self.value.as_slice()).ok()
    }

    /// Returns `true` if this value holds a message of type `M`.
    pub fn is<M: Name>(&self) -> bool {
        self.type_url == M::type_url()
    }

    /// The packed message as JSON, when its type is known and its bytes decode.
    fn expand(&self) -> Option<Result<serde_json::Value, serde_json::Error>> {
        macro_rules! expand_known {
            ($($ty:ty),+ $(,)?) => {
                $(
                    if self.is::<$ty>() {
                        return self.unpack::<$ty>().map(|msg| serde_json::to_value(&msg));
                    }
                )+
            };
        }

        expand_known!(
            crypto::PubKey,
            auth::BaseAccount,
            bank::MsgSend,
            bank::MsgMultiSend,
            bank::SendAuthorization,
            authz::GenericAuthorization,
            authz::MsgGrant,
            authz::MsgRevoke,
            authz::MsgExec,
            feegrant::BasicAllowance,
            feegrant::MsgGrantAllowance,
            feegrant::MsgRevokeAllowance,
            gov::TextProposal,
            gov::MsgSubmitProposal,
            gov::MsgVote,
            gov::MsgVoteWeighted,
            gov::MsgDeposit,
            distribution::MsgSetWithdrawAddress,
            distribution::MsgWithdrawDelegatorReward,
            distribution::MsgWithdrawValidatorCommission,
            distribution::MsgFundCommunityPool,
            slashing::MsgUnjail,
            staking::MsgCreateValidator,
            staking::MsgEditValidator,
            staking::MsgDelegate,
            staking::MsgBeginRedelegate,
            staking::MsgUndelegate,
            staking::MsgCancelUnbondingDelegation,
        );
        None
    }
}

impl Serialize for Any {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match self.expand() {
            Some(Ok(serde_json::Value::Object(fields))) => Some(fields),
            Some(Ok(_)) => None,
            Some(Err(e)) => return Err(S::Error::custom(e)),
            None => None,
        };

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("@type", &self.type_url)?;
        match fields {
            Some(fields) => {
                for (key, value) in &fields {
                    map.serialize_entry(key, value)?;
                }
            }
            None => map.serialize_entry("value", &STANDARD.encode(&self.value))?,
        }
        map.end()
    }
}

/// Renders as an RFC 3339 UTC string with 0, 3, 6 or 9 fractional digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Timestamp {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Timestamp {
    pub fn from_unix(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let nanos = u32::try_from(self.nanos)
            .map_err(|_| S::Error::custom(format!("negative timestamp nanos {}", self.nanos)))?;
        let time = DateTime::from_timestamp(self.seconds, nanos).ok_or_else(|| {
            S::Error::custom(format!("timestamp out of range: {}s {}ns", self.seconds, nanos))
        })?;

        serializer.collect_str(&time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Renders as decimal seconds with an `s` suffix, e.g. `"1.500s"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Duration {
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sign = if self.seconds < 0 || self.nanos < 0 { "-" } else { "" };
        let seconds = self.seconds.unsigned_abs();
        let nanos = self.nanos.unsigned_abs();

        let text = match nanos {
            0 => format!("{sign}{seconds}s"),
            n if n % 1_000_000 == 0 => format!("{sign}{seconds}.{:03}s", n / 1_000_000),
            n if n % 1_000 == 0 => format!("{sign}{seconds}.{:06}s", n / 1_000),
            n => format!("{sign}{seconds}.{n:09}s"),
        };
        serializer.collect_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::MsgSend;
    use crate::base::Coin;
    use serde_json::json;

    #[test]
    fn test_pack_uses_chain_type_url_and_unpacks() {
        let msg = MsgSend {
            from_address: "from".to_string(),
            to_address: "to".to_string(),
            amount: vec![Coin::new("10", "stake")],
        };

        let any = Any::pack(&msg);

        assert_eq!(any.type_url, "/cosmos.bank.v1beta1.MsgSend");
        assert!(any.is::<MsgSend>());
        assert_eq!(any.unpack::<MsgSend>(), Some(msg));
    }

    #[test]
    fn test_known_any_expands_under_type() {
        let any = Any::pack(&crypto::PubKey { key: vec![1, 2, 3] });

        let json = serde_json::to_value(&any).unwrap();

        assert_eq!(
            json,
            json!({ "@type": "/cosmos.crypto.ed25519.PubKey", "key": "AQID" })
        );
    }

    #[test]
    fn test_unknown_any_keeps_raw_value() {
        let any = Any {
            type_url: "/x".to_string(),
            value: vec![1, 2, 3],
        };

        let json = serde_json::to_value(&any).unwrap();

        assert_eq!(json, json!({ "@type": "/x", "value": "AQID" }));
    }

    #[test]
    fn test_timestamp_renders_rfc3339() {
        let render = |seconds, nanos| serde_json::to_value(Timestamp { seconds, nanos }).unwrap();

        assert_eq!(render(0, 0), json!("1970-01-01T00:00:00Z"));
        assert_eq!(render(1_700_000_000, 0), json!("2023-11-14T22:13:20Z"));
        assert_eq!(render(1_700_000_000, 500_000_000), json!("2023-11-14T22:13:20.500Z"));
        assert!(serde_json::to_value(Timestamp { seconds: 0, nanos: -1 }).is_err());
    }

    #[test]
    fn test_duration_renders_seconds() {
        let render = |seconds, nanos| serde_json::to_value(Duration { seconds, nanos }).unwrap();

        assert_eq!(render(1_814_400, 0), json!("1814400s"));
        assert_eq!(render(1, 500_000_000), json!("1.500s"));
        assert_eq!(render(0, 1_500), json!("0.000001500s"));
        assert_eq!(render(-2, -250_000), json!("-2.000250s"));
    }
}
