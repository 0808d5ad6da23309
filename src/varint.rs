//! Bitcoin-style variable-width length prefixes
//!
//! Values below 0xfd take one byte; larger values take a marker byte
//! (0xfd, 0xfe, 0xff) followed by a 2, 4 or 8 byte little-endian integer.

use crate::error::{MessageError, Result};

const MARKER_U16: u8 = 0xfd;
const MARKER_U32: u8 = 0xfe;
const MARKER_U64: u8 = 0xff;

/// Encode a number as a Bitcoin varint
pub fn encode_varint(value: u64) -> Vec<u8> {
    let le = value.to_le_bytes();
    let width = varint_len(value);
    let marker = match width {
        1 => return vec![le[0]],
        3 => MARKER_U16,
        5 => MARKER_U32,
        _ => MARKER_U64,
    };

    let mut out = Vec::with_capacity(width);
    out.push(marker);
    out.extend_from_slice(&le[..width - 1]);
    out
}

/// Encode a signed length, rejecting negative values
pub fn try_encode_varint(value: i64) -> Result<Vec<u8>> {
    let value = u64::try_from(value).map_err(|_| {
        MessageError::Format(format!("cannot encode negative varint {}", value))
    })?;
    Ok(encode_varint(value))
}

/// Encoded width of `value` in bytes
pub fn varint_len(value: u64) -> usize {
    match value {
        0..=0xfc => 1,
        0xfd..=0xffff => 3,
        0x10000..=0xffffffff => 5,
        _ => 9,
    }
}

/// Decode a varint from the front of `bytes`.
///
/// Returns the value and the number of bytes consumed.
pub fn decode_varint(bytes: &[u8]) -> Result<(u64, usize)> {
    let marker = *bytes
        .first()
        .ok_or_else(|| MessageError::Format("empty varint".to_string()))?;

    let width = match marker {
        MARKER_U16 => 2,
        MARKER_U32 => 4,
        MARKER_U64 => 8,
        small => return Ok((small as u64, 1)),
    };

    let body = bytes.get(1..1 + width).ok_or_else(|| {
        MessageError::Format(format!(
            "truncated varint: marker {:#04x} needs {} bytes, {} available",
            marker,
            width,
            bytes.len() - 1
        ))
    })?;

    let mut le = [0u8; 8];
    le[..width].copy_from_slice(body);
    Ok((u64::from_le_bytes(le), 1 + width))
}
