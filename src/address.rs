//! Pay-to-pubkey-hash addresses
//!
//! An address is the Base58Check encoding of a version byte and the 20-byte
//! RIPEMD160(SHA256(compressed pubkey)). Version bytes follow the Dash table
//! (76/16 mainnet, 140/19 testnet); WIF versions handed in by key-material
//! callers are normalized to their pubkey-hash sibling.

use crate::base58check;
use crate::constants::PUBKEY_HASH_LEN;
use crate::error::{MessageError, Result};
use crate::hash::hash160;
use crate::keys::compressed_public_key;
use crate::types::*;

/// Pubkey hash of the compressed serialization
pub fn pubkey_hash(public_key: &PublicKey) -> PubkeyHash {
    hash160(&compressed_public_key(public_key))
}

/// Derive the pay-to-pubkey-hash address of `public_key` on `network`
pub fn derive_address(network: Network, public_key: &PublicKey) -> String {
    base58check::encode(network.address_version(), &pubkey_hash(public_key))
}

/// Derive an address under an explicit version byte
pub fn derive_address_with_version(version: u8, public_key: &PublicKey) -> Result<String> {
    let version = normalize_address_version(version)?;
    Ok(base58check::encode(version, &pubkey_hash(public_key)))
}

/// Decode an address into its normalized version byte and pubkey hash
pub fn decode_address(address: &str) -> Result<(u8, PubkeyHash)> {
    let (version, payload) = base58check::decode(address)?;

    if payload.len() != PUBKEY_HASH_LEN {
        return Err(MessageError::Format(format!(
            "address payload must be {} bytes, got {}",
            PUBKEY_HASH_LEN,
            payload.len()
        )));
    }

    let version = normalize_address_version(version)?;
    let mut hash = [0u8; PUBKEY_HASH_LEN];
    hash.copy_from_slice(&payload);
    Ok((version, hash))
}

/// Network an address belongs to
pub fn network_of(address: &str) -> Result<Network> {
    let (version, _) = decode_address(address)?;
    Network::from_version(version)
}

/// Normalized version byte embedded in an address
pub fn address_version(address: &str) -> Result<u8> {
    decode_address(address).map(|(version, _)| version)
}

/// Whether `address` is a well-formed address of `network`.
///
/// Only real address versions count here; a WIF-versioned string is not an
/// address even though the version byte names a network.
pub fn is_valid_address(address: &str, network: Network) -> bool {
    match base58check::decode(address) {
        Ok((version, payload)) => {
            payload.len() == PUBKEY_HASH_LEN && network.address_versions().contains(&version)
        }
        Err(_) => false,
    }
}

/// Check `address` is a real address of `network`.
///
/// Stricter than [`network_of`]: a WIF version byte names a network but does
/// not make the string an address.
pub fn expect_network(address: &str, network: Network) -> Result<()> {
    let found = network_of(address)?;
    if found != network {
        return Err(MessageError::NetworkMismatch {
            expected: network,
            found,
        });
    }
    if !is_valid_address(address, network) {
        return Err(MessageError::Format(format!(
            "{} does not carry a {} address version",
            address, network
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TESTNET_WIF_VERSION;
    use crate::keys::{generate, public_key};

    fn key_one_public() -> PublicKey {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        public_key(&PrivateKey::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_pubkey_hash_generator_point() {
        assert_eq!(
            hex::encode(pubkey_hash(&key_one_public())),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_derive_address_prefixes() {
        let public = key_one_public();
        assert!(derive_address(Network::Mainnet, &public).starts_with('X'));
        assert!(derive_address(Network::Testnet, &public).starts_with('y'));
    }

    #[test]
    fn test_derive_address_decodes_back() {
        let public = key_one_public();
        let address = derive_address(Network::Mainnet, &public);
        let (version, hash) = decode_address(&address).unwrap();
        assert_eq!(version, 76);
        assert_eq!(hash, pubkey_hash(&public));
        assert_eq!(network_of(&address).unwrap(), Network::Mainnet);
    }

    #[test]
    fn test_derive_with_wif_version_normalizes() {
        let public = key_one_public();
        assert_eq!(
            derive_address_with_version(0xcc, &public).unwrap(),
            derive_address(Network::Mainnet, &public)
        );
        assert_eq!(
            derive_address_with_version(0xef, &public).unwrap(),
            derive_address(Network::Testnet, &public)
        );
        assert!(derive_address_with_version(19, &public).unwrap().starts_with('8'));
        assert_eq!(
            derive_address_with_version(0x00, &public),
            Err(MessageError::UnrecognizedNetwork(0x00))
        );
    }

    #[test]
    fn test_script_hash_version_classified() {
        let address = base58check::encode(16, &[9u8; 20]);
        assert_eq!(network_of(&address).unwrap(), Network::Mainnet);
        assert_eq!(address_version(&address).unwrap(), 16);
        assert!(is_valid_address(&address, Network::Mainnet));
    }

    #[test]
    fn test_wrong_payload_length_rejected() {
        for len in [0usize, 19, 21, 32] {
            let address = base58check::encode(76, &vec![1u8; len]);
            assert!(matches!(decode_address(&address), Err(MessageError::Format(_))));
            assert!(!is_valid_address(&address, Network::Mainnet));
        }
    }

    #[test]
    fn test_unknown_version_rejected() {
        let address = base58check::encode(0x00, &[1u8; 20]);
        assert_eq!(network_of(&address), Err(MessageError::UnrecognizedNetwork(0x00)));
        assert!(!is_valid_address(&address, Network::Mainnet));
    }

    #[test]
    fn test_is_valid_address_checks_network() {
        let (key, _) = generate(Network::Testnet);
        let address = derive_address(Network::Testnet, &public_key(&key));
        assert!(is_valid_address(&address, Network::Testnet));
        assert!(!is_valid_address(&address, Network::Mainnet));
        assert!(!is_valid_address("not-an-address", Network::Testnet));
    }

    #[test]
    fn test_expect_network() {
        let address = derive_address(Network::Testnet, &key_one_public());
        assert!(expect_network(&address, Network::Testnet).is_ok());
        assert_eq!(
            expect_network(&address, Network::Mainnet),
            Err(MessageError::NetworkMismatch {
                expected: Network::Mainnet,
                found: Network::Testnet,
            })
        );
    }

    #[test]
    fn test_expect_network_rejects_wif_version() {
        let hash = pubkey_hash(&key_one_public());
        let address = base58check::encode(TESTNET_WIF_VERSION, &hash);
        assert_eq!(network_of(&address).unwrap(), Network::Testnet);
        assert!(matches!(
            expect_network(&address, Network::Testnet),
            Err(MessageError::Format(_))
        ));
        assert!(matches!(
            expect_network(&address, Network::Mainnet),
            Err(MessageError::NetworkMismatch { .. })
        ));
    }
}
