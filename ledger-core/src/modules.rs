//! # Protocol Modules
//!
//! One submodule per protocol domain. Each one declares:
//!
//! * `NAME`, the registry key, and one `pub const` per message-type tag;
//! * its transaction and query payload enums (`BankTx`, `BankQuery`, ...);
//! * the message factories, one function per operation, taking the [`crate::ArgParser`] and
//!   primitive input and returning a payload;
//! * `module()`, which builds the [`crate::Module`] lookup tables.
//!
//! Adding a protocol domain means adding a submodule here and listing it in [`all`].
pub mod auth;
pub mod authz;
pub mod bank;
pub mod base;
pub mod distribution;
pub mod feegrant;
pub mod gov;
pub mod mint;
pub mod slashing;
pub mod staking;
pub mod tx;

use crate::module::Module;

/// Every module the SDK ships with.
pub fn all() -> Vec<Module> {
    vec![
        auth::module(),
        bank::module(),
        staking::module(),
        distribution::module(),
        gov::module(),
        authz::module(),
        feegrant::module(),
        slashing::module(),
        mint::module(),
        tx::module(),
        base::module(),
    ]
}
