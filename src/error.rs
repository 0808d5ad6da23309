//! Error types for message signing and verification

use crate::types::Network;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("Malformed input: {0}")]
    Format(String),

    #[error("Base58Check checksum mismatch")]
    ChecksumMismatch,

    #[error("Unrecognized network version byte: {0:#04x}")]
    UnrecognizedNetwork(u8),

    #[error("Address belongs to {found}, expected {expected}")]
    NetworkMismatch { expected: Network, found: Network },

    #[error("Public key recovery failed: {0}")]
    RecoveryFailure(String),
}

pub type Result<T> = std::result::Result<T, MessageError>;
