//! Core value types shared by the codecs and the signature engine

use crate::constants::*;
use crate::error::{MessageError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Private key: a secp256k1 scalar
pub type PrivateKey = secp256k1::SecretKey;

/// Public key: a secp256k1 curve point
pub type PublicKey = secp256k1::PublicKey;

/// 32-byte digest
pub type Hash = [u8; 32];

/// RIPEMD160(SHA256(compressed pubkey))
pub type PubkeyHash = [u8; PUBKEY_HASH_LEN];

/// Dash network selector
///
/// Governs which version bytes are used for addresses and WIF keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Pay-to-pubkey-hash address version
    pub fn address_version(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_PUBKEY_HASH_VERSION,
            Network::Testnet => TESTNET_PUBKEY_HASH_VERSION,
        }
    }

    /// Pay-to-script-hash address version
    pub fn script_version(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_SCRIPT_HASH_VERSION,
            Network::Testnet => TESTNET_SCRIPT_HASH_VERSION,
        }
    }

    /// Wallet-import-format version
    pub fn wif_version(self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_WIF_VERSION,
            Network::Testnet => TESTNET_WIF_VERSION,
        }
    }

    /// Both address versions accepted for this network
    pub fn address_versions(self) -> [u8; 2] {
        [self.address_version(), self.script_version()]
    }

    /// Classify any known version byte, address or WIF flavored
    pub fn from_version(version: u8) -> Result<Network> {
        match version {
            MAINNET_PUBKEY_HASH_VERSION | MAINNET_SCRIPT_HASH_VERSION | MAINNET_WIF_VERSION => {
                Ok(Network::Mainnet)
            }
            TESTNET_PUBKEY_HASH_VERSION | TESTNET_SCRIPT_HASH_VERSION | TESTNET_WIF_VERSION => {
                Ok(Network::Testnet)
            }
            other => Err(MessageError::UnrecognizedNetwork(other)),
        }
    }

    /// Classify a version byte that must be a WIF version
    pub fn from_wif_version(version: u8) -> Result<Network> {
        match version {
            MAINNET_WIF_VERSION => Ok(Network::Mainnet),
            TESTNET_WIF_VERSION => Ok(Network::Testnet),
            other => Err(MessageError::UnrecognizedNetwork(other)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(MessageError::Format(format!(
                "unknown Dash network '{}', expected \"mainnet\" or \"testnet\"",
                s
            ))),
        }
    }
}

/// Normalize a version byte to the address version it stands for.
///
/// Address versions pass through unchanged; a WIF version maps to its
/// network's pubkey-hash version.
pub fn normalize_address_version(version: u8) -> Result<u8> {
    match version {
        MAINNET_WIF_VERSION => Ok(MAINNET_PUBKEY_HASH_VERSION),
        TESTNET_WIF_VERSION => Ok(TESTNET_PUBKEY_HASH_VERSION),
        MAINNET_PUBKEY_HASH_VERSION
        | MAINNET_SCRIPT_HASH_VERSION
        | TESTNET_PUBKEY_HASH_VERSION
        | TESTNET_SCRIPT_HASH_VERSION => Ok(version),
        other => Err(MessageError::UnrecognizedNetwork(other)),
    }
}

/// Normalize a version byte to its network's WIF version
pub fn normalize_wif_version(version: u8) -> Result<u8> {
    Network::from_version(version).map(Network::wif_version)
}

/// Outcome of verifying a well-formed signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationResult {
    Valid,
    /// The signature recovered a key whose address is the contained one
    Mismatch(String),
}

impl VerificationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationResult::Valid)
    }
}

/// An externally submitted (address, message, signature) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    #[serde(rename = "addr")]
    pub address: String,
    #[serde(rename = "msg")]
    pub message: String,
    /// Base64 compact signature
    #[serde(rename = "sig")]
    pub signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_from_version_table() {
        for v in [0x4c, 0x10, 0xcc] {
            assert_eq!(Network::from_version(v).unwrap(), Network::Mainnet);
        }
        for v in [0x8c, 0x13, 0xef] {
            assert_eq!(Network::from_version(v).unwrap(), Network::Testnet);
        }
        assert_eq!(
            Network::from_version(0x00),
            Err(MessageError::UnrecognizedNetwork(0x00))
        );
    }

    #[test]
    fn test_wif_version_rejects_address_versions() {
        assert!(Network::from_wif_version(0x4c).is_err());
        assert_eq!(Network::from_wif_version(0xef).unwrap(), Network::Testnet);
    }

    #[test]
    fn test_normalize_address_version() {
        assert_eq!(normalize_address_version(0xcc).unwrap(), 76);
        assert_eq!(normalize_address_version(0xef).unwrap(), 140);
        assert_eq!(normalize_address_version(16).unwrap(), 16);
        assert_eq!(normalize_address_version(19).unwrap(), 19);
        assert!(normalize_address_version(0x80).is_err());
    }

    #[test]
    fn test_normalize_wif_version() {
        assert_eq!(normalize_wif_version(76).unwrap(), 204);
        assert_eq!(normalize_wif_version(19).unwrap(), 239);
        assert_eq!(normalize_wif_version(204).unwrap(), 204);
    }

    #[test]
    fn test_network_parse_and_display() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!(" Testnet ".parse::<Network>().unwrap(), Network::Testnet);
        assert!(matches!(
            "regtest".parse::<Network>(),
            Err(MessageError::Format(_))
        ));
        assert_eq!(Network::Testnet.to_string(), "testnet");
    }

    #[test]
    fn test_verification_result_is_valid() {
        assert!(VerificationResult::Valid.is_valid());
        assert!(!VerificationResult::Mismatch("X".into()).is_valid());
    }
}
