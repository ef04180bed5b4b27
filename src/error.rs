//! Unified error types for chainsweep
//!
//! All fallible operations flow through this module so that failure kinds
//! stay distinguishable in logs and tests instead of being silenced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all sweep operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl SweepError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn directory_fetch(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::DirectoryFetchFailure, msg)
    }

    pub fn chain_unreachable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ChainUnreachable, msg)
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedResponse, msg)
    }

    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAddressEncoding, msg)
    }

    pub fn amount_parse(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AmountParseFailure, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for SweepError {}

/// Error codes for categorization
///
/// The first five mirror the per-operation failure taxonomy of the scan
/// engine; the rest are support codes for plumbing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Scan taxonomy
    DirectoryFetchFailure,
    ChainUnreachable,
    MalformedResponse,
    InvalidAddressEncoding,
    AmountParseFailure,

    // Network plumbing
    Timeout,

    // Input / internal
    InvalidInput,
    Internal,
}

/// Result type alias for sweep operations
pub type SweepResult<T> = Result<T, SweepError>;

// Conversions from common error types

impl From<serde_json::Error> for SweepError {
    fn from(e: serde_json::Error) -> Self {
        SweepError::new(ErrorCode::MalformedResponse, e.to_string())
    }
}

impl From<reqwest::Error> for SweepError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SweepError::new(ErrorCode::Timeout, "Request timed out")
        } else if e.is_connect() {
            SweepError::new(ErrorCode::ChainUnreachable, "Connection failed")
        } else {
            SweepError::new(ErrorCode::ChainUnreachable, e.to_string())
        }
    }
}

impl From<std::io::Error> for SweepError {
    fn from(e: std::io::Error) -> Self {
        SweepError::new(ErrorCode::Internal, e.to_string())
    }
}

impl From<crate::address::ConvertError> for SweepError {
    fn from(e: crate::address::ConvertError) -> Self {
        SweepError::new(ErrorCode::InvalidAddressEncoding, e.to_string())
    }
}
