//! # Requests
//!
//! The payload of a request is a sum type over every message kind the modules support.
//! [`TxMsg`] and [`QueryMsg`] have one variant per module, each wrapping that module's own
//! enum, so the module name and message-type tag are derived from the payload rather than
//! supplied separately.
//!
//! [`TxRequest::new`] and [`QueryRequest::new`] fill in `module` and `msg_type` from the
//! payload. The fields stay public so a caller can address a request explicitly; the router
//! then checks the payload against the tag it was dispatched under.
use crate::modules::{
    auth::AuthQuery,
    authz::{AuthzQuery, AuthzTx},
    bank::{BankQuery, BankTx},
    base::BaseQuery,
    distribution::{DistributionQuery, DistributionTx},
    feegrant::{FeegrantQuery, FeegrantTx},
    gov::{GovQuery, GovTx},
    mint::MintQuery,
    slashing::{SlashingQuery, SlashingTx},
    staking::{StakingQuery, StakingTx},
    tx::TxQuery,
};
use ledger_proto::Any;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The transport a query runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// gRPC, plus the search RPC for transaction history.
    #[default]
    Binary,
    /// REST over HTTP.
    Textual,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Binary => f.write_str("binary"),
            Backend::Textual => f.write_str("textual"),
        }
    }
}

/// Implements the conversions and tag accessors shared by [`TxMsg`] and [`QueryMsg`].
macro_rules! payload_enum {
    ($name:ident { $($variant:ident($inner:ty) => $module:expr),+ $(,)? }) => {
        impl $name {
            /// Name of the module the payload belongs to.
            pub fn module(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => $module,)+
                }
            }

            /// Message-type tag of the payload.
            pub fn msg_type(&self) -> &'static str {
                match self {
                    $($name::$variant(inner) => inner.msg_type(),)+
                }
            }
        }

        $(
            impl From<$inner> for $name {
                fn from(inner: $inner) -> Self {
                    $name::$variant(inner)
                }
            }
        )+
    };
}

#[derive(Debug, Clone, PartialEq)]
pub enum TxMsg {
    Bank(BankTx),
    Staking(StakingTx),
    Distribution(DistributionTx),
    Gov(GovTx),
    Authz(AuthzTx),
    Feegrant(FeegrantTx),
    Slashing(SlashingTx),
}

payload_enum!(TxMsg {
    Bank(BankTx) => crate::modules::bank::NAME,
    Staking(StakingTx) => crate::modules::staking::NAME,
    Distribution(DistributionTx) => crate::modules::distribution::NAME,
    Gov(GovTx) => crate::modules::gov::NAME,
    Authz(AuthzTx) => crate::modules::authz::NAME,
    Feegrant(FeegrantTx) => crate::modules::feegrant::NAME,
    Slashing(SlashingTx) => crate::modules::slashing::NAME,
});

impl TxMsg {
    /// Packs the payload into the message(s) it stands for.
    pub fn into_anys(self) -> Vec<Any> {
        match self {
            TxMsg::Bank(tx) => tx.into_anys(),
            TxMsg::Staking(tx) => tx.into_anys(),
            TxMsg::Distribution(tx) => tx.into_anys(),
            TxMsg::Gov(tx) => tx.into_anys(),
            TxMsg::Authz(tx) => tx.into_anys(),
            TxMsg::Feegrant(tx) => tx.into_anys(),
            TxMsg::Slashing(tx) => tx.into_anys(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryMsg {
    Auth(AuthQuery),
    Bank(BankQuery),
    Staking(StakingQuery),
    Distribution(DistributionQuery),
    Gov(GovQuery),
    Authz(AuthzQuery),
    Feegrant(FeegrantQuery),
    Slashing(SlashingQuery),
    Mint(MintQuery),
    Tx(TxQuery),
    Base(BaseQuery),
}

payload_enum!(QueryMsg {
    Auth(AuthQuery) => crate::modules::auth::NAME,
    Bank(BankQuery) => crate::modules::bank::NAME,
    Staking(StakingQuery) => crate::modules::staking::NAME,
    Distribution(DistributionQuery) => crate::modules::distribution::NAME,
    Gov(GovQuery) => crate::modules::gov::NAME,
    Authz(AuthzQuery) => crate::modules::authz::NAME,
    Feegrant(FeegrantQuery) => crate::modules::feegrant::NAME,
    Slashing(SlashingQuery) => crate::modules::slashing::NAME,
    Mint(MintQuery) => crate::modules::mint::NAME,
    Tx(TxQuery) => crate::modules::tx::NAME,
    Base(BaseQuery) => crate::modules::base::NAME,
});

#[derive(Debug, Clone, PartialEq)]
pub struct TxRequest {
    pub module: String,
    pub msg_type: String,
    pub payload: TxMsg,
}

impl TxRequest {
    pub fn new(payload: impl Into<TxMsg>) -> Self {
        let payload = payload.into();
        Self {
            module: payload.module().to_string(),
            msg_type: payload.msg_type().to_string(),
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub module: String,
    pub msg_type: String,
    pub payload: QueryMsg,
    /// `None` runs on the dispatcher's default backend.
    pub backend: Option<Backend>,
}

impl QueryRequest {
    pub fn new(payload: impl Into<QueryMsg>) -> Self {
        let payload = payload.into();
        Self {
            module: payload.module().to_string(),
            msg_type: payload.msg_type().to_string(),
            payload,
            backend: None,
        }
    }

    pub fn on(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }
}
