//! Shared error type across visicount crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Backing store could not be reached or refused the call.
    StoreUnavailable,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VisiCountError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VisiCountError {
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The store was unreachable or failed the call. Distinct from a record
    /// that simply does not exist yet.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("corrupt counter record: {0}")]
    CorruptRecord(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl VisiCountError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VisiCountError::BadRequest(_) => ClientCode::BadRequest,
            VisiCountError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            VisiCountError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            VisiCountError::CorruptRecord(_) | VisiCountError::Internal(_) => ClientCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_unavailable_has_own_code() {
        let e = VisiCountError::StoreUnavailable("connection refused".into());
        assert_eq!(e.client_code().as_str(), "STORE_UNAVAILABLE");
        assert_eq!(e.to_string(), "store unavailable: connection refused");
    }

    #[test]
    fn corrupt_record_is_internal() {
        let e = VisiCountError::CorruptRecord("count is not a number".into());
        assert_eq!(e.client_code(), ClientCode::Internal);
    }
}
