//! # Errors
//!
//! Every failure surfaced by the core is an [`Error`]. Callers branch on [`Error::kind`]
//! (or its stable [`ErrorKind::code`]), never on the message text.
//!
//! The `Display` output always starts with the kind description, followed by the
//! context recorded at the call site (offending tag, field or value), so it can be shown
//! to a user as is.
use crate::transport::{rest::RestRequestError, rpc::RpcRequestError};
use std::fmt;

/// The error taxonomy of the core, with a stable numeric code per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidMsgType,
    InvalidRequest,
    InsufficientParams,
    Parse,
    Convert,
    NotSupported,
    GrpcRequest,
    RestRequest,
    RpcRequest,
    NotFound,
}

impl ErrorKind {
    pub fn code(&self) -> u32 {
        match self {
            ErrorKind::InvalidMsgType => 2,
            ErrorKind::InvalidRequest => 3,
            ErrorKind::InsufficientParams => 4,
            ErrorKind::Parse => 5,
            ErrorKind::Convert => 6,
            ErrorKind::NotSupported => 7,
            ErrorKind::GrpcRequest => 8,
            ErrorKind::RestRequest => 9,
            ErrorKind::RpcRequest => 10,
            ErrorKind::NotFound => 11,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidMsgType => "invalid message type",
            ErrorKind::InvalidRequest => "invalid request",
            ErrorKind::InsufficientParams => "insufficient parameters",
            ErrorKind::Parse => "parse error",
            ErrorKind::Convert => "convert error",
            ErrorKind::NotSupported => "not supported",
            ErrorKind::GrpcRequest => "grpc request failed",
            ErrorKind::RestRequest => "rest request failed",
            ErrorKind::RpcRequest => "rpc request failed",
            ErrorKind::NotFound => "not found",
        }
    }

    /// Returns `true` for the three transport failure kinds.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ErrorKind::GrpcRequest | ErrorKind::RestRequest | ErrorKind::RpcRequest
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid message type: '{0}'")]
    InvalidMsgType(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("insufficient parameters: {0}")]
    InsufficientParams(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("convert error: {0}")]
    Convert(String),
    #[error("not supported: {0}")]
    NotSupported(String),
    #[error("grpc request failed: code={:?} message='{}'", .0.code(), .0.message())]
    GrpcRequest(#[source] tonic::Status),
    #[error("rest request failed: {0}")]
    RestRequest(#[from] RestRequestError),
    #[error("rpc request failed: {0}")]
    RpcRequest(#[from] RpcRequestError),
    #[error("not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidMsgType(_) => ErrorKind::InvalidMsgType,
            Error::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Error::InsufficientParams(_) => ErrorKind::InsufficientParams,
            Error::Parse(_) => ErrorKind::Parse,
            Error::Convert(_) => ErrorKind::Convert,
            Error::NotSupported(_) => ErrorKind::NotSupported,
            Error::GrpcRequest(_) => ErrorKind::GrpcRequest,
            Error::RestRequest(_) => ErrorKind::RestRequest,
            Error::RpcRequest(_) => ErrorKind::RpcRequest,
            Error::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> u32 {
        self.kind().code()
    }

    /// A router received a payload that belongs to a different tag or module than the one
    /// it was dispatched under.
    pub(crate) fn payload_mismatch(expected: &str, payload: &str) -> Self {
        Error::InvalidRequest(format!("payload '{payload}' does not belong to '{expected}'"))
    }
}

impl From<tonic::Status> for Error {
    fn from(status: tonic::Status) -> Self {
        Error::GrpcRequest(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let kinds = [
            ErrorKind::InvalidMsgType,
            ErrorKind::InvalidRequest,
            ErrorKind::InsufficientParams,
            ErrorKind::Parse,
            ErrorKind::Convert,
            ErrorKind::NotSupported,
            ErrorKind::GrpcRequest,
            ErrorKind::RestRequest,
            ErrorKind::RpcRequest,
            ErrorKind::NotFound,
        ];

        let codes: std::collections::HashSet<_> = kinds.iter().map(ErrorKind::code).collect();

        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_message_starts_with_kind_description() {
        let errors = [
            Error::InvalidMsgType("bogus".into()),
            Error::InvalidRequest("x".into()),
            Error::InsufficientParams("x".into()),
            Error::Parse("x".into()),
            Error::Convert("x".into()),
            Error::NotSupported("x".into()),
            Error::GrpcRequest(tonic::Status::not_found("missing")),
            Error::NotFound("x".into()),
        ];

        for err in errors {
            assert!(
                err.to_string().starts_with(err.kind().description()),
                "'{err}' should start with '{}'",
                err.kind()
            );
        }
    }

    #[test]
    fn test_invalid_msg_type_carries_tag() {
        let err = Error::InvalidMsgType("bank-burn".into());

        assert_eq!(err.kind(), ErrorKind::InvalidMsgType);
        assert_eq!(err.code(), 2);
        assert!(err.to_string().contains("bank-burn"));
    }
}
