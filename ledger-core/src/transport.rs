//! # Transports
//!
//! The network clients the query dispatcher drives. They are agnostic to the modules:
//!
//! * [`grpc`]: the binary path. A generic `tonic` client that sends already-encoded protobuf
//!   request bytes to a method path (e.g. `/cosmos.bank.v1beta1.Query/Balance`) and returns
//!   the raw response bytes, using the pass-through [`codec::BytesCodec`].
//! * [`rest`]: the textual path. An HTTP GET client whose single `reqwest::Client` is guarded
//!   by a mutex, so at most one textual request is in flight at any time.
//! * [`rpc`]: the search transport. A JSON-RPC client for the node's `tx_search` endpoint,
//!   used only by transaction-history queries.
//!
//! Every call takes a [`CallContext`] carrying the caller's deadline and query height.
pub mod codec;
pub mod grpc;
pub mod rest;
pub mod rpc;

use std::time::Duration;

/// Header (gRPC metadata or HTTP) that asks the node to answer at a past block height.
pub const BLOCK_HEIGHT_HEADER: &str = "x-cosmos-block-height";

/// Per-call options propagated into the underlying transport.
///
/// Cancelling a call is done by dropping its future; every transport releases what it
/// holds (including the REST client lock) on drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallContext {
    /// Deadline for the whole call.
    pub timeout: Option<Duration>,
    /// Query the state at this block height instead of the latest one.
    pub height: Option<u64>,
}

impl CallContext {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn at_height(mut self, height: u64) -> Self {
        self.height = Some(height);
        self
    }
}
