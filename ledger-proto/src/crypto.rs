//! `cosmos.crypto.ed25519`: consensus public keys.
use serde::Serialize;

pub const PACKAGE: &str = "cosmos.crypto.ed25519";

/// Length of an ed25519 public key.
pub const PUBKEY_LENGTH: usize = 32;

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize)]
pub struct PubKey {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::serde_helpers::base64_bytes")]
    pub key: Vec<u8>,
}

impl_name!("cosmos.crypto.ed25519" => PubKey);
