//! # Ledger Core
//!
//! `ledger-core` is the module dispatch and message pipeline core of the ledger SDK. It turns
//! loosely-typed caller input into protocol messages, attaches transaction messages to a
//! transaction builder, and runs queries against whichever transport the caller selects.
//!
//! ## Key Components
//!
//! * **[`ArgParser`]:** Validates primitive input (addresses, amounts, decimals, event filters,
//!   query-tx selectors) into domain values.
//! * **Message factories** ([`modules`]): one constructor per operation, returning a typed
//!   [`TxMsg`] or [`QueryMsg`] payload. They never perform I/O.
//! * **[`Module`]:** the per-domain capability set. Each module owns a lookup table from
//!   message-type tag to handler, built once when the module is constructed.
//! * **[`Registry`]:** the set of modules, indexed by name. [`Registry::global`] is initialized
//!   exactly once per process; [`Registry::new`] builds an isolated one.
//! * **Tx router** ([`router`]): attaches the messages of a [`TxRequest`] to a [`TxBuilder`].
//! * **[`QueryDispatcher`]:** runs a [`QueryRequest`] over the binary (gRPC) or textual (REST)
//!   path and returns the response as a JSON string.
//! * **[`LedgerClient`]:** connects the transports described by a [`ClientConfig`] and wires
//!   everything together.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ledger_core::{ClientConfig, LedgerClient, QueryRequest, modules::bank};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::load("ledger.json")?;
//! let client = LedgerClient::connect(config).await?;
//!
//! let payload = bank::query_balance(client.args(), "cosmos1...", &["uatom"], None)?;
//! let json = client.query(QueryRequest::new(payload)).await?;
//! println!("{json}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports `ledger-proto`, `prost` and `tonic` so consumers use compatible
//! versions of the message types and the transport.
pub mod args;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod module;
pub mod modules;
pub mod msg;
pub mod registry;
pub mod router;
pub mod transport;

pub use args::ArgParser;
pub use client::LedgerClient;
pub use config::ClientConfig;
pub use dispatch::QueryDispatcher;
pub use error::{Error, ErrorKind};
pub use module::Module;
pub use msg::{Backend, QueryMsg, QueryRequest, TxMsg, TxRequest};
pub use registry::Registry;
pub use router::{TxBuilder, UnsignedTx};
pub use transport::CallContext;

// Re-exports
pub use ledger_proto;
pub use prost;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
