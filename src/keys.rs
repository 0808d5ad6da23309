//! Private keys, public key serializations, and wallet-import format

use crate::base58check;
use crate::constants::*;
use crate::error::{MessageError, Result};
use crate::types::*;
use secp256k1::rand::Rng;
use secp256k1::Secp256k1;

/// A decoded WIF private key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedWif {
    pub network: Network,
    /// Raw version byte as found in the WIF string
    pub version: u8,
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
    /// Whether the WIF carried the compressed-public-key flag
    pub compressed: bool,
}

/// Generate a fresh key for `network` using the thread-local CSPRNG.
///
/// Returns the key and its compressed WIF encoding.
pub fn generate(network: Network) -> (PrivateKey, String) {
    generate_with_rng(network, &mut secp256k1::rand::thread_rng())
}

/// Generate a fresh key for `network` from a caller-supplied RNG
pub fn generate_with_rng<R: Rng + ?Sized>(network: Network, rng: &mut R) -> (PrivateKey, String) {
    let private_key = PrivateKey::new(rng);
    let wif = encode_wif(network, &private_key, true);
    tracing::trace!(%network, "generated private key");
    (private_key, wif)
}

/// Encode a private key as WIF for `network`
pub fn encode_wif(network: Network, private_key: &PrivateKey, compressed: bool) -> String {
    encode_wif_payload(network.wif_version(), private_key, compressed)
}

/// Encode a private key as WIF under an explicit version byte.
///
/// Address versions are accepted and mapped to their network's WIF version.
pub fn encode_wif_with_version(
    version: u8,
    private_key: &PrivateKey,
    compressed: bool,
) -> Result<String> {
    let version = normalize_wif_version(version)?;
    Ok(encode_wif_payload(version, private_key, compressed))
}

fn encode_wif_payload(version: u8, private_key: &PrivateKey, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(PRIVATE_KEY_LEN + 1);
    payload.extend_from_slice(&private_key.secret_bytes());
    if compressed {
        payload.push(WIF_COMPRESSED_FLAG);
    }
    base58check::encode(version, &payload)
}

/// Decode a WIF string into its network, private key and public key
pub fn decode_wif(wif: &str) -> Result<DecodedWif> {
    let (version, payload) = base58check::decode(wif)?;

    let compressed = match payload.len() {
        PRIVATE_KEY_LEN => false,
        len if len == PRIVATE_KEY_LEN + 1 => {
            if payload[PRIVATE_KEY_LEN] != WIF_COMPRESSED_FLAG {
                return Err(MessageError::Format(format!(
                    "invalid WIF compression flag {:#04x}",
                    payload[PRIVATE_KEY_LEN]
                )));
            }
            true
        }
        len => {
            return Err(MessageError::Format(format!(
                "invalid WIF length: {} bytes",
                len + 1
            )))
        }
    };

    let network = Network::from_wif_version(version)?;

    let private_key = PrivateKey::from_slice(&payload[..PRIVATE_KEY_LEN])
        .map_err(|e| MessageError::Format(format!("invalid private key scalar: {}", e)))?;

    Ok(DecodedWif {
        network,
        version,
        private_key,
        public_key: public_key(&private_key),
        compressed,
    })
}

/// Scalar base-point multiplication
pub fn public_key(private_key: &PrivateKey) -> PublicKey {
    let secp = Secp256k1::signing_only();
    PublicKey::from_secret_key(&secp, private_key)
}

/// 33-byte parity-tagged X coordinate, the form used for addresses
pub fn compressed_public_key(public_key: &PublicKey) -> [u8; 33] {
    public_key.serialize()
}

/// 65-byte `0x04 || X || Y` form
pub fn uncompressed_public_key(public_key: &PublicKey) -> [u8; 65] {
    public_key.serialize_uncompressed()
}
