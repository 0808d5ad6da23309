//! Base58Check: versioned payloads with a double-hash checksum
//!
//! Text form is base58(version || payload || checksum), where the checksum is
//! the first four bytes of SHA256(SHA256(version || payload)). Every address
//! and WIF key rides on this codec, so decoding always recomputes and
//! compares the checksum.

use crate::constants::CHECKSUM_LEN;
use crate::error::{MessageError, Result};
use crate::hash::double_hash;

/// Smallest decodable input: version byte plus checksum
const MIN_DECODED_LEN: usize = 1 + CHECKSUM_LEN;

/// First four bytes of the double hash over version || payload
pub fn checksum(version: u8, payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(version);
    data.extend_from_slice(payload);

    let hash = double_hash(&data);
    let mut check = [0u8; CHECKSUM_LEN];
    check.copy_from_slice(&hash[..CHECKSUM_LEN]);
    check
}

/// Encode a version byte and payload as Base58Check text
pub fn encode(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(version, payload));
    bs58::encode(data).into_string()
}

/// Decode Base58Check text into its version byte and payload.
///
/// Payload length rules are scheme specific and left to the caller.
pub fn decode(text: &str) -> Result<(u8, Vec<u8>)> {
    let data = bs58::decode(text)
        .into_vec()
        .map_err(|e| MessageError::Format(format!("invalid base58: {}", e)))?;

    if data.len() < MIN_DECODED_LEN {
        return Err(MessageError::Format(format!(
            "base58check data too short: {} bytes",
            data.len()
        )));
    }

    let (body, check) = data.split_at(data.len() - CHECKSUM_LEN);
    let version = body[0];
    let payload = &body[1..];

    if checksum(version, payload) != check {
        return Err(MessageError::ChecksumMismatch);
    }

    Ok((version, payload.to_vec()))
}
