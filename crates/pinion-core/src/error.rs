//! Error types for Pinion

use thiserror::Error;

use crate::PinAddress;

/// Core Pinion errors
#[derive(Error, Debug)]
pub enum PinionError {
    // Address errors
    #[error("Invalid pin address: {0:?}")]
    InvalidAddress(String),

    // Resolution errors
    #[error("Unknown device token")]
    UnknownToken,

    #[error("No widget bound to pin {0}")]
    UnboundAddress(PinAddress),

    // Profile load errors
    #[error("Profile read failed: {0}")]
    ProfileRead(String),

    #[error("Profile parse failed: {0}")]
    ProfileParse(String),

    #[error("Duplicate widget binding for pin {0}")]
    DuplicateBinding(PinAddress),

    #[error("Duplicate token across profiles")]
    DuplicateToken,

    // Request errors
    #[error("Content type missing or not JSON")]
    UnsupportedContentType,

    #[error("Malformed value payload: {0}")]
    MalformedPayload(String),

    // Transport errors
    #[error("Server error: {0}")]
    Server(String),
}

/// Result type for Pinion operations
pub type PinionResult<T> = Result<T, PinionError>;
