// wallet-core/src/chains/evm/address.rs
//
// EVM Address Module - Address Derivation
// EIP-55 (Checksum), Keccak-256, secp256k1

use crate::error::{CryptoError, WalletError, WalletResult};
use alloy_primitives::Address;
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::{Zeroize, Zeroizing};

/// EVM Address Generator
///
/// # Flow:  Private Key (32B) → Public Key (64B) → Keccak256 → Address (20B)
///
/// # Security
/// - Zeroize: intermediate hash and public key bytes are wiped after use
/// - No Storage: this module never keeps the private key
pub struct EvmAddress;

impl EvmAddress {
    // =========================================================================
    // CORE: Private Key → Address Bytes (20 bytes)
    // =========================================================================

    /// Derive the 20-byte address of a secp256k1 private key.
    ///
    /// # Algorithm (Ethereum Yellow Paper)
    /// 1. `priv_key` (32B) → secp256k1 → `pub_key` (uncompressed, 65B)
    /// 2. Drop the 0x04 prefix → `pub_key_raw` (64B)
    /// 3. Keccak-256(`pub_key_raw`) → `hash` (32B)
    /// 4. `hash[12..32]` → `address` (20B)
    ///
    /// Zero and values ≥ the curve order are rejected.
    pub fn derive_bytes(priv_key: &[u8; 32]) -> WalletResult<[u8; 20]> {
        let secret_key = SecretKey::from_slice(priv_key).map_err(|e| {
            WalletError::Crypto(CryptoError::InvalidKeyFormat(format!(
                "Invalid secp256k1 private key: {}",
                e
            )))
        })?;

        let public_key = secret_key.public_key();
        let encoded = Zeroizing::new(public_key.to_encoded_point(false));
        let pub_key_raw = &encoded.as_bytes()[1..];

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(pub_key_raw);
        hasher.finalize(&mut hash);

        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);

        hash.zeroize();

        Ok(address)
    }

    /// Derive the EIP-55 checksummed address string.
    ///
    /// # Returns
    /// `"0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B"` (mixed-case checksum)
    #[inline]
    pub fn derive(priv_key: &[u8; 32]) -> WalletResult<String> {
        let bytes = Self::derive_bytes(priv_key)?;
        Ok(Address::from_slice(&bytes).to_checksum(None))
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// `0x` prefix + 40 hex chars. Mixed-case input must carry a valid
    /// EIP-55 checksum; all-lowercase or all-uppercase input is accepted.
    pub fn is_valid(address: &str) -> bool {
        let Some(hex_part) = address.strip_prefix("0x") else {
            return false;
        };
        let Ok(parsed) = address.parse::<Address>() else {
            return false;
        };
        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper {
            return parsed.to_checksum(None) == address;
        }
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
