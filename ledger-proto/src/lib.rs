//! # Ledger Proto
//!
//! Protobuf message types for every protocol package the ledger SDK core speaks.
//!
//! The structs are `prost` messages, wire-compatible with the chain's `.proto` definitions
//! (only the fields the SDK reads or writes are declared, unknown fields are skipped on decode).
//! Every message also derives `serde::Serialize` and renders as proto3 JSON, the same shape
//! the chain's REST gateway answers with: proto field names, 64-bit integers as strings,
//! enums by name, RFC 3339 timestamps, `bytes` as base64 and `Any` expanded under `@type`.
//!
//! Transaction messages implement [`prost::Name`] with the chain's `/package.Type` type URL,
//! which is what [`Any::pack`] uses when attaching them to a transaction body.
//!
//! ## Packages
//!
//! | module | proto package |
//! |---|---|
//! | [`base`] | `cosmos.base.v1beta1`, `cosmos.base.query.v1beta1` |
//! | [`google`] | `google.protobuf` (`Any`, `Timestamp`, `Duration`) |
//! | [`auth`] | `cosmos.auth.v1beta1` |
//! | [`bank`] | `cosmos.bank.v1beta1` |
//! | [`staking`] | `cosmos.staking.v1beta1` |
//! | [`distribution`] | `cosmos.distribution.v1beta1` |
//! | [`gov`] | `cosmos.gov.v1beta1` |
//! | [`authz`] | `cosmos.authz.v1beta1` |
//! | [`feegrant`] | `cosmos.feegrant.v1beta1` |
//! | [`slashing`] | `cosmos.slashing.v1beta1` |
//! | [`mint`] | `cosmos.mint.v1beta1` |
//! | [`tx`] | `cosmos.tx.v1beta1` |
//! | [`cmtservice`] | `cosmos.base.tendermint.v1beta1` |
//! | [`crypto`] | `cosmos.crypto.ed25519` |

/// Implements [`prost::Name`] for messages of a single proto package.
///
/// The type URL is the `/package.Type` form the chain expects inside `Any`.
macro_rules! impl_name {
    ($package:expr => $($ty:ident),+ $(,)?) => {
        $(
            impl ::prost::Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = $package;

                fn type_url() -> String {
                    format!("/{}.{}", Self::PACKAGE, Self::NAME)
                }
            }
        )+
    };
}

/// Renders `i32` enumeration fields by their proto name.
///
/// For each enum, implements [`serde_helpers::ProtoEnum`] and declares the `with` module
/// used on the fields that carry it.
macro_rules! impl_enum_json {
    ($($ty:ident => $module:ident),+ $(,)?) => {
        $(
            impl $crate::serde_helpers::ProtoEnum for $ty {
                fn proto_name(&self) -> &'static str {
                    self.as_str_name()
                }
            }

            pub(crate) mod $module {
                pub fn serialize<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    $crate::serde_helpers::enum_name::<super::$ty, S>(*value, serializer)
                }
            }
        )+
    };
}

pub mod auth;
pub mod authz;
pub mod bank;
pub mod base;
pub mod cmtservice;
pub mod crypto;
pub mod distribution;
pub mod feegrant;
pub mod google;
pub mod gov;
pub mod mint;
pub mod serde_helpers;
pub mod slashing;
pub mod staking;
pub mod tx;

pub use google::Any;

// Re-exports
pub use prost;
