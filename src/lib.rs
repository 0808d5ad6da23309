//! # Dash-Message
//!
//! Dash "signed message" signing and verification.
//!
//! A holder of a private key signs an arbitrary message with a 65-byte
//! recoverable signature. Anyone holding only the signer's payment address can
//! verify it: the public key is recovered from the signature, turned back into
//! an address, and compared with the claimed one. This is how an externally
//! submitted vote (address, message, signature) is authenticated without any
//! shared secret.
//!
//! ## Pipeline
//!
//! - Signing: magic preimage -> SHA256d -> ECDSA -> recovery id trial ->
//!   compact signature -> base64
//! - Verification: base64 -> SHA256d of the same preimage -> public key
//!   recovery -> address derivation -> string comparison
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: everything except key generation is deterministic
//!    and side-effect-free
//! 2. **Explicit Network**: every call takes its [`Network`]; there is no
//!    global configuration
//! 3. **Exact Version Pinning**: signature-critical dependencies are pinned
//! 4. **Errors, Never Panics**: malformed input is always an `Err`
//!
//! ## Usage
//!
//! ```rust
//! use dash_message::{DashMessage, Network, VerificationResult};
//!
//! let dash = DashMessage::new(Network::Mainnet);
//! let (key, _wif) = dash.generate_key();
//! let address = dash.address_of(&key);
//!
//! let signature = dash.sign(&key, "I vote for candidate A").unwrap();
//! let result = dash.verify(&address, "I vote for candidate A", &signature).unwrap();
//! assert_eq!(result, VerificationResult::Valid);
//! ```

pub mod types;
pub mod constants;
pub mod varint;
pub mod hash;
pub mod base58check;
pub mod keys;
pub mod address;
pub mod signature;
pub mod error;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{MessageError, Result};
pub use keys::DecodedWif;
pub use signature::CompactSignature;

/// Network-bound entry point for signing and verifying Dash messages
///
/// # Examples
///
/// ```
/// use dash_message::{DashMessage, Network};
///
/// let dash: DashMessage = "testnet".parse::<Network>().unwrap().into();
/// assert_eq!(dash.network(), Network::Testnet);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashMessage {
    network: Network,
}

impl DashMessage {
    /// Create an instance bound to `network`
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    pub fn mainnet() -> Self {
        Self::new(Network::Mainnet)
    }

    pub fn testnet() -> Self {
        Self::new(Network::Testnet)
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Generate a random private key and its compressed WIF
    ///
    /// # Examples
    ///
    /// ```
    /// use dash_message::DashMessage;
    ///
    /// let dash = DashMessage::mainnet();
    /// let (key, wif) = dash.generate_key();
    /// assert_eq!(dash.decode_wif(&wif).unwrap().private_key, key);
    /// ```
    pub fn generate_key(&self) -> (PrivateKey, String) {
        keys::generate(self.network)
    }

    /// Decode a WIF key. Keys from either network are accepted.
    pub fn decode_wif(&self, wif: &str) -> Result<DecodedWif> {
        keys::decode_wif(wif)
    }

    /// Payment address of a public key on this network
    pub fn derive_address(&self, public_key: &PublicKey) -> String {
        address::derive_address(self.network, public_key)
    }

    /// Payment address of a private key's public key on this network
    pub fn address_of(&self, private_key: &PrivateKey) -> String {
        self.derive_address(&keys::public_key(private_key))
    }

    /// Whether `address` is a well-formed address of this network
    pub fn is_valid_address(&self, address: &str) -> bool {
        address::is_valid_address(address, self.network)
    }

    /// Sign `message`, returning the base64 compact signature
    pub fn sign(&self, private_key: &PrivateKey, message: &str) -> Result<String> {
        signature::sign_message(private_key, message.as_bytes()).map(|sig| sig.to_base64())
    }

    /// Sign `message` with a WIF-encoded key
    pub fn sign_wif(&self, wif: &str, message: &str) -> Result<String> {
        let decoded = keys::decode_wif(wif)?;
        self.sign(&decoded.private_key, message)
    }

    /// Verify a base64 signature over `message` against `address`
    ///
    /// # Examples
    ///
    /// ```
    /// use dash_message::{DashMessage, VerificationResult};
    ///
    /// let dash = DashMessage::mainnet();
    /// let (key, _) = dash.generate_key();
    /// let address = dash.address_of(&key);
    /// let signature = dash.sign(&key, "I vote for candidate A").unwrap();
    ///
    /// let result = dash.verify(&address, "I vote for candidate B", &signature).unwrap();
    /// assert!(matches!(result, VerificationResult::Mismatch(_)));
    /// ```
    pub fn verify(&self, address: &str, message: &str, signature: &str) -> Result<VerificationResult> {
        signature::verify_message(self.network, address, message.as_bytes(), signature)
    }

    /// Authenticate an externally submitted message.
    ///
    /// The address must be a real address of this network (the same rule as
    /// [`DashMessage::is_valid_address`]) before any signature work is done.
    pub fn authenticate(&self, submission: &SignedMessage) -> Result<VerificationResult> {
        if let Err(err) = address::expect_network(&submission.address, self.network) {
            tracing::debug!(address = %submission.address, %err, "rejected submission address");
            return Err(err);
        }
        self.verify(&submission.address, &submission.message, &submission.signature)
    }
}

impl Default for DashMessage {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl From<Network> for DashMessage {
    fn from(network: Network) -> Self {
        Self::new(network)
    }
}
