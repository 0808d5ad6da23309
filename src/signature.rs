//! Recoverable compact signatures over the magic message hash
//!
//! A compact signature is `marker || r || s` (65 bytes) where
//! `marker = 27 + 4 + recovery_id`. The `+ 4` flags that the signer's public
//! key is used in compressed form, which is the only form this scheme derives
//! addresses from. Verification never needs the public key: it is recovered
//! from the signature and turned back into an address.

use crate::address::{decode_address, derive_address_with_version};
use crate::constants::*;
use crate::error::{MessageError, Result};
use crate::hash::magic_hash;
use crate::keys::public_key;
use crate::types::*;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1, Verification};

/// 65-byte recoverable signature split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactSignature {
    recovery_id: u8,
    r: [u8; 32],
    s: [u8; 32],
}

impl CompactSignature {
    pub fn new(recovery_id: u8, r: [u8; 32], s: [u8; 32]) -> Result<Self> {
        if recovery_id >= RECOVERY_ID_COUNT {
            return Err(MessageError::Format(format!(
                "recovery id {} out of range",
                recovery_id
            )));
        }
        Ok(Self { recovery_id, r, s })
    }

    /// Parse `marker || r || s`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != COMPACT_SIGNATURE_LEN {
            return Err(MessageError::Format(format!(
                "signature must be {} bytes, got {}",
                COMPACT_SIGNATURE_LEN,
                bytes.len()
            )));
        }

        let marker = bytes[0];
        let recovery_id = marker
            .checked_sub(RECOVERY_MARKER_BASE)
            .filter(|id| *id < RECOVERY_ID_COUNT)
            .ok_or_else(|| {
                MessageError::Format(format!("invalid recovery marker {}", marker))
            })?;

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[1..33]);
        s.copy_from_slice(&bytes[33..65]);
        Ok(Self { recovery_id, r, s })
    }

    /// Parse standard (padded) base64 text
    pub fn from_base64(text: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(text)
            .map_err(|e| MessageError::Format(format!("could not decode signature: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> [u8; COMPACT_SIGNATURE_LEN] {
        let mut bytes = [0u8; COMPACT_SIGNATURE_LEN];
        bytes[0] = self.recovery_marker();
        bytes[1..33].copy_from_slice(&self.r);
        bytes[33..65].copy_from_slice(&self.s);
        bytes
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// First byte on the wire: 27 + 4 + recovery id
    pub fn recovery_marker(&self) -> u8 {
        RECOVERY_MARKER_BASE + self.recovery_id
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    fn rs(&self) -> [u8; 64] {
        let mut rs = [0u8; 64];
        rs[..32].copy_from_slice(&self.r);
        rs[32..].copy_from_slice(&self.s);
        rs
    }
}

/// Sign `message` under the Dash magic hash
pub fn sign_message(private_key: &PrivateKey, message: &[u8]) -> Result<CompactSignature> {
    let secp = Secp256k1::new();
    let digest = Message::from_digest(magic_hash(message));

    let signature = secp.sign_ecdsa(&digest, private_key).serialize_compact();
    let signer = PublicKey::from_secret_key(&secp, private_key);

    let recovery_id = find_recovery_id(&secp, &digest, &signature, &signer)?;
    tracing::trace!(recovery_id, "signed message");

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..]);
    CompactSignature::new(recovery_id, r, s)
}

/// Try each recovery id in order and return the first whose candidate key is
/// the signer's.
fn find_recovery_id<C: Verification>(
    secp: &Secp256k1<C>,
    digest: &Message,
    signature: &[u8; 64],
    signer: &PublicKey,
) -> Result<u8> {
    for id in 0..RECOVERY_ID_COUNT {
        if let Ok(candidate) = recover_with_id(secp, digest, signature, id) {
            if candidate == *signer {
                return Ok(id);
            }
        }
    }
    Err(MessageError::RecoveryFailure(
        "no recovery id reproduces the signing key".to_string(),
    ))
}

fn recover_with_id<C: Verification>(
    secp: &Secp256k1<C>,
    digest: &Message,
    signature: &[u8; 64],
    id: u8,
) -> Result<PublicKey> {
    let recovery_id = RecoveryId::from_i32(i32::from(id))
        .map_err(|e| MessageError::Format(format!("invalid recovery id {}: {}", id, e)))?;
    let recoverable = RecoverableSignature::from_compact(signature, recovery_id)
        .map_err(|e| MessageError::RecoveryFailure(format!("invalid (r, s): {}", e)))?;
    secp.recover_ecdsa(digest, &recoverable)
        .map_err(|e| MessageError::RecoveryFailure(e.to_string()))
}

/// Recover the signer's public key from a digest and compact signature
pub fn recover_public_key(hash: &Hash, signature: &CompactSignature) -> Result<PublicKey> {
    let secp = Secp256k1::verification_only();
    let digest = Message::from_digest(*hash);
    recover_with_id(&secp, &digest, &signature.rs(), signature.recovery_id())
}

/// Verify a base64 compact signature over `message` against `address`.
///
/// `address` must belong to `network`. A well-formed signature from a
/// different key is `Ok(VerificationResult::Mismatch)`, not an error.
pub fn verify_message(
    network: Network,
    address: &str,
    message: &[u8],
    signature: &str,
) -> Result<VerificationResult> {
    let signature = CompactSignature::from_base64(signature)?;
    let hash = magic_hash(message);
    let recovered = recover_public_key(&hash, &signature)?;

    let (version, _) = decode_address(address)?;
    let found = Network::from_version(version)?;
    if found != network {
        return Err(MessageError::NetworkMismatch {
            expected: network,
            found,
        });
    }

    let derived = derive_address_with_version(version, &recovered)?;
    if derived == address {
        Ok(VerificationResult::Valid)
    } else {
        tracing::debug!(%address, %derived, "signature does not match address");
        Ok(VerificationResult::Mismatch(derived))
    }
}

/// Whether `signature` is valid for `private_key`'s own public key
pub fn signed_by(private_key: &PrivateKey, message: &[u8], signature: &CompactSignature) -> bool {
    recover_public_key(&magic_hash(message), signature)
        .map(|recovered| recovered == public_key(private_key))
        .unwrap_or(false)
}
