// wallet-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - one hardened scheme, two chains
//
// ┌─────────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 Mnemonic)           │
// │                    │                            │
// │        m/44'/<coin>'/0'/<account>'              │
// │        (HMAC-SHA512, hardened levels)           │
// │                    │                            │
// │     ┌──────────────┴──────────────┐             │
// │     ▼                             ▼             │
// │  Solana (501)               Ethereum (60)       │
// │  ed25519 seed               secp256k1 scalar    │
// └─────────────────────────────────────────────────┘

pub mod slip10;

pub use slip10::HardenedDeriver;

use crate::chains::ChainType;
use crate::crypto::mnemonic::SEED_LEN;
use crate::crypto::paths::DerivationPath;
use crate::error::{CryptoError, WalletError, WalletResult};
use zeroize::Zeroizing;

// =============================================================================
// COMMON TYPES
// =============================================================================

/// Derivation result: the raw key material plus the path that produced it
pub struct DerivedKey {
    /// Private key bytes (32 bytes, auto-zeroize on drop)
    pub private_key: Zeroizing<[u8; 32]>,
    pub chain: ChainType,
    pub path: DerivationPath,
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("chain", &self.chain)
            .field("path", &self.path.to_string())
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// UNIFIED DERIVER
// =============================================================================

/// Path Derivation Engine
///
/// Pure and deterministic: the same `(seed, chain, account_index)` always
/// yields the same key, which is what keeps a recovery phrase portable across
/// wallets using the same standard paths.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the account key for `chain`
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed (64 bytes)
    /// * `chain` - Target chain; selects the coin type segment
    /// * `account_index` - Last path level, `< 2^31`
    #[tracing::instrument(level = "debug", skip(seed), err)]
    pub fn derive(seed: &[u8], chain: ChainType, account_index: u32) -> WalletResult<DerivedKey> {
        Self::validate_seed(seed)?;

        let path = DerivationPath::new(chain.coin_type(), account_index)?;
        let private_key = HardenedDeriver::derive(seed, &path)?;

        tracing::debug!(%path, "derived account key");

        Ok(DerivedKey {
            private_key,
            chain,
            path,
        })
    }

    /// Same as [`derive`](Self::derive), but takes a raw SLIP-44 coin type
    ///
    /// Unsupported coin types fail with [`WalletError::UnsupportedChain`]
    /// before any derivation work.
    pub fn derive_for_coin_type(
        seed: &[u8],
        coin_type: u32,
        account_index: u32,
    ) -> WalletResult<DerivedKey> {
        let chain = ChainType::from_coin_type(coin_type)?;
        Self::derive(seed, chain, account_index)
    }

    /// Derive consecutive account keys `indices` for one chain.
    pub fn derive_batch(
        seed: &[u8],
        chain: ChainType,
        indices: std::ops::Range<u32>,
    ) -> WalletResult<Vec<DerivedKey>> {
        Self::validate_seed(seed)?;
        indices
            .map(|index| Self::derive(seed, chain, index))
            .collect()
    }

    #[inline]
    fn validate_seed(seed: &[u8]) -> WalletResult<()> {
        if seed.len() != SEED_LEN {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid seed length: expected {} bytes, got {}",
                SEED_LEN,
                seed.len()
            ))));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
