//! Dash signed-message constants

/// Domain separator prepended to every signed message
pub const MAGIC_BYTES: &[u8] = b"DarkCoin Signed Message:\n";

/// Mainnet pay-to-pubkey-hash version (addresses start with `X`)
pub const MAINNET_PUBKEY_HASH_VERSION: u8 = 0x4c;

/// Mainnet pay-to-script-hash version (addresses start with `7`)
pub const MAINNET_SCRIPT_HASH_VERSION: u8 = 0x10;

/// Mainnet wallet-import-format version
pub const MAINNET_WIF_VERSION: u8 = 0xcc;

/// Testnet pay-to-pubkey-hash version (addresses start with `y`)
pub const TESTNET_PUBKEY_HASH_VERSION: u8 = 0x8c;

/// Testnet pay-to-script-hash version (addresses start with `8` or `9`)
pub const TESTNET_SCRIPT_HASH_VERSION: u8 = 0x13;

/// Testnet wallet-import-format version
pub const TESTNET_WIF_VERSION: u8 = 0xef;

/// Base58Check checksum length: first 4 bytes of the double hash
pub const CHECKSUM_LEN: usize = 4;

/// Pubkey hash length: RIPEMD160(SHA256(pubkey))
pub const PUBKEY_HASH_LEN: usize = 20;

/// Raw private key scalar length
pub const PRIVATE_KEY_LEN: usize = 32;

/// Trailing WIF byte marking a key whose public key is used compressed
pub const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// Compact signature length: marker || r || s
pub const COMPACT_SIGNATURE_LEN: usize = 65;

/// Base recovery marker (27) plus 4 for "compressed public key"
pub const RECOVERY_MARKER_BASE: u8 = 27 + 4;

/// Number of candidate public keys recoverable from (r, s)
pub const RECOVERY_ID_COUNT: u8 = 4;
