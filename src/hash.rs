//! Hashing primitives and the magic-scoped message preimage

use crate::constants::MAGIC_BYTES;
use crate::types::{Hash, PubkeyHash};
use crate::varint::{encode_varint, varint_len};
use bitcoin_hashes::{sha256d, Hash as BitcoinHash, HashEngine};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA256(data)
pub fn sha256(data: &[u8]) -> Hash {
    let result = Sha256::digest(data);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// SHA256(SHA256(data))
pub fn double_hash(data: &[u8]) -> Hash {
    let mut hasher = sha256d::Hash::engine();
    hasher.input(data);
    sha256d::Hash::from_engine(hasher).into_inner()
}

/// RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> PubkeyHash {
    let result = Ripemd160::digest(sha256(data));
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&result);
    hash
}

/// varint(len(magic)) || magic || varint(len(message)) || message
pub fn magic_preimage(magic: &[u8], message: &[u8]) -> Vec<u8> {
    let magic_len = magic.len() as u64;
    let message_len = message.len() as u64;

    let mut buf = Vec::with_capacity(
        varint_len(magic_len) + magic.len() + varint_len(message_len) + message.len(),
    );
    buf.extend_from_slice(&encode_varint(magic_len));
    buf.extend_from_slice(magic);
    buf.extend_from_slice(&encode_varint(message_len));
    buf.extend_from_slice(message);
    buf
}

/// The digest actually signed: double hash of the Dash-scoped preimage
pub fn magic_hash(message: &[u8]) -> Hash {
    double_hash(&magic_preimage(MAGIC_BYTES, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            hex::encode(sha256(b"")),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_double_hash_empty() {
        assert_eq!(
            hex::encode(double_hash(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_double_hash_is_sha256_twice() {
        let data = b"DarkCoin";
        assert_eq!(double_hash(data), sha256(&sha256(data)));
    }

    #[test]
    fn test_hash160_generator_point() {
        let pubkey = hex::decode(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        )
        .unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );
    }

    #[test]
    fn test_magic_preimage_layout() {
        let preimage = magic_preimage(MAGIC_BYTES, b"hi");
        assert_eq!(preimage[0], 25);
        assert_eq!(&preimage[1..26], MAGIC_BYTES);
        assert_eq!(preimage[26], 2);
        assert_eq!(&preimage[27..], b"hi");
    }

    #[test]
    fn test_magic_preimage_long_message() {
        let message = vec![b'a'; 300];
        let preimage = magic_preimage(b"m", &message);
        assert_eq!(&preimage[..2], &[1, b'm']);
        assert_eq!(&preimage[2..5], &[0xfd, 0x2c, 0x01]);
        assert_eq!(preimage.len(), 2 + 3 + 300);
    }

    #[test]
    fn test_magic_hash_is_scoped() {
        let dash = magic_hash(b"vote");
        let bitcoin = double_hash(&magic_preimage(b"Bitcoin Signed Message:\n", b"vote"));
        assert_ne!(dash, bitcoin);
        assert_eq!(dash, magic_hash(b"vote"));
    }

    #[test]
    fn test_magic_hash_trailing_whitespace_matters() {
        assert_ne!(magic_hash(b"vote"), magic_hash(b"vote "));
        assert_ne!(magic_hash(b"vote"), magic_hash(b"vote\n"));
    }
}
