// wallet-core/src/crypto/key_deriver/slip10.rs
//
// Hardened HMAC-SHA512 Key Derivation - SLIP-0010 (ed25519 construction)
//
// Applied uniformly to every supported chain: the 32-byte output is an
// ed25519 seed for Solana and a secp256k1 scalar for Ethereum.
// Reference: https://github.com/satoshilabs/slips/blob/master/slip-0010.md
//
// Only hardened child derivation exists in this scheme.

use crate::crypto::paths::{DerivationPath, HARDENED_OFFSET};
use crate::error::{CryptoError, WalletError, WalletResult};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// Hardened-only Key Deriver
///
/// # Algorithm
/// - Master: `I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)`
/// - Child:  `I = HMAC-SHA512(Key = chain_code, Data = 0x00 || key || ser32(index | 2^31))`
/// - `IL` (32 bytes) = key, `IR` (32 bytes) = chain code
///
/// # Security
/// - Private key + chain code zeroized between levels
/// - No intermediate state is kept
pub struct HardenedDeriver;

impl HardenedDeriver {
    /// SLIP-0010 master key seed constant
    const MASTER_SECRET: &'static [u8] = b"ed25519 seed";

    /// Walk `path` from the master node and return the final 32-byte key.
    pub fn derive(seed: &[u8], path: &DerivationPath) -> WalletResult<Zeroizing<[u8; 32]>> {
        Self::derive_indices(seed, &path.segments())
    }

    /// Walk arbitrary child numbers (all treated as hardened).
    pub fn derive_indices(seed: &[u8], indices: &[u32]) -> WalletResult<Zeroizing<[u8; 32]>> {
        let (mut key, mut chain_code) = Self::master_key_generate(seed)?;

        for index in indices {
            let (child_key, child_chain) = Self::child_key_derive(&key, &chain_code, *index)?;
            key.zeroize();
            chain_code.zeroize();
            key = child_key;
            chain_code = child_chain;
        }

        chain_code.zeroize();

        Ok(Zeroizing::new(key))
    }

    /// I = HMAC-SHA512(Key = "ed25519 seed", Data = seed)
    fn master_key_generate(seed: &[u8]) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = Self::new_mac(Self::MASTER_SECRET)?;
        mac.update(seed);
        Ok(Self::split(mac))
    }

    /// Data = 0x00 || parent_key || ser32(index + 0x80000000)
    fn child_key_derive(
        parent_key: &[u8; 32],
        parent_chain_code: &[u8; 32],
        index: u32,
    ) -> WalletResult<([u8; 32], [u8; 32])> {
        let mut mac = Self::new_mac(parent_chain_code)?;

        let hardened_index = index | HARDENED_OFFSET;
        mac.update(&[0x00]);
        mac.update(parent_key);
        mac.update(&hardened_index.to_be_bytes());

        Ok(Self::split(mac))
    }

    fn new_mac(key: &[u8]) -> WalletResult<HmacSha512> {
        HmacSha512::new_from_slice(key).map_err(|e| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "HMAC init failed: {}",
                e
            )))
        })
    }

    /// Finalize and split `I` into `(IL, IR)`.
    fn split(mac: HmacSha512) -> ([u8; 32], [u8; 32]) {
        let result = mac.finalize().into_bytes();

        let mut buf = [0u8; 64];
        buf.copy_from_slice(&result);

        let mut key = [0u8; 32];
        let mut chain_code = [0u8; 32];
        key.copy_from_slice(&buf[..32]);
        chain_code.copy_from_slice(&buf[32..]);

        buf.zeroize();

        (key, chain_code)
    }
}

// =============================================================================
// TESTS
// =============================================================================
