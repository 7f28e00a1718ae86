//! Custom error types for lnbalance
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::MalformedRecord;

/// The main error type for lnbalance operations
#[derive(Error, Debug)]
pub enum LnBalanceError {
    /// The node could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The node rejected the TLS handshake or the macaroon
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Local configuration problems: missing home directory, unreadable
    /// certificate or macaroon
    #[error("Configuration error: {0}")]
    Config(String),

    /// The node answered with an unexpected status or payload
    #[error("Node RPC error: {0}")]
    Rpc(String),

    /// A channel record is missing balance fields or holds non-numeric values
    #[error("Malformed channel record: {0}")]
    MalformedRecord(#[from] MalformedRecord),

    /// Missing or unrecognized output format selection
    #[error("No output format selected: {0} (expected table, dict, or json)")]
    InvalidFormat(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LnBalanceError {
    /// Check if this is a connection error
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

impl From<serde_json::Error> for LnBalanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for lnbalance operations
pub type LnBalanceResult<T> = Result<T, LnBalanceError>;
