// wallet-core/src/wallet/mod.rs
//
// Wallet records and wallet sets
//
// phrase ─► seed ─► (path, seed) ─► raw key ─► (public, private) ─► Wallet

pub mod manager;
pub mod persist;

pub use manager::{SetState, SharedWalletSetManager, WalletSetManager};

use crate::chains::{ChainKeyCodec, ChainType};
use crate::config::IndexPolicy;
use crate::crypto::{DerivationPath, KeyDeriver, WalletMnemonic};
use crate::error::{CryptoError, WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// WALLET
// =============================================================================

/// One derived account
///
/// Immutable once created. Field names serialize in camelCase:
/// `{publicKey, privateKey, mnemonic, path}`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    public_key: String,
    private_key: String,
    mnemonic: String,
    path: String,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key)
            .field("path", &self.path)
            .field("private_key", &"[REDACTED]")
            .field("mnemonic", &"[REDACTED]")
            .finish()
    }
}

impl Wallet {
    /// Run the full derivation pipeline for one account.
    pub fn derive(
        mnemonic: &WalletMnemonic,
        chain: ChainType,
        account_index: u32,
    ) -> WalletResult<Self> {
        let seed = mnemonic.to_seed(None);
        let key = KeyDeriver::derive(&*seed, chain, account_index)?;
        let encoded = ChainKeyCodec::encode(&key)?;

        Ok(Self {
            public_key: encoded.public_key,
            private_key: encoded.private_key.to_string(),
            mnemonic: mnemonic.phrase().to_string(),
            path: key.path.to_string(),
        })
    }

    /// Address (Solana base58 / Ethereum EIP-55).
    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// # Warning
    /// Spend authority for the account. Never log it.
    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// # Warning
    /// Root secret of the whole set. Never log it.
    #[inline]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn derivation_path(&self) -> WalletResult<DerivationPath> {
        self.path.parse()
    }

    /// Account index recorded at creation time (not the current position).
    pub fn account_index(&self) -> Option<u32> {
        self.derivation_path().ok().map(|p| p.account_index())
    }
}

// =============================================================================
// WALLET SET
// =============================================================================

/// Ordered wallets sharing one phrase and one chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSet {
    chain: ChainType,
    mnemonic: WalletMnemonic,
    wallets: Vec<Wallet>,
}

impl WalletSet {
    pub fn new(chain: ChainType, mnemonic: WalletMnemonic) -> Self {
        Self {
            chain,
            mnemonic,
            wallets: Vec::new(),
        }
    }

    /// Rebuild a set from records, enforcing that every wallet shares the
    /// phrase and the coin-type path segment.
    pub fn from_parts(
        chain: ChainType,
        mnemonic: WalletMnemonic,
        wallets: Vec<Wallet>,
    ) -> WalletResult<Self> {
        for (position, wallet) in wallets.iter().enumerate() {
            if wallet.mnemonic() != mnemonic.phrase() {
                return Err(WalletError::Storage(format!(
                    "Wallet #{} belongs to a different recovery phrase",
                    position
                )));
            }
            let path = wallet.derivation_path().map_err(|e| {
                WalletError::Storage(format!("Wallet #{} has a malformed path: {}", position, e))
            })?;
            if path.coin_type() != chain.coin_type() {
                return Err(WalletError::Storage(format!(
                    "Wallet #{} path {} does not belong to {}",
                    position,
                    wallet.path(),
                    chain
                )));
            }
        }

        Ok(Self {
            chain,
            mnemonic,
            wallets,
        })
    }

    #[inline]
    pub fn chain(&self) -> ChainType {
        self.chain
    }

    #[inline]
    pub fn mnemonic(&self) -> &WalletMnemonic {
        &self.mnemonic
    }

    #[inline]
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// Account index the next derived wallet receives under `policy`.
    pub fn next_index(&self, policy: IndexPolicy) -> WalletResult<u32> {
        let overflow = || {
            WalletError::Crypto(CryptoError::DerivationFailed(
                "Account index space exhausted".to_string(),
            ))
        };

        match policy {
            IndexPolicy::Length => u32::try_from(self.wallets.len()).map_err(|_| overflow()),
            IndexPolicy::NextAfterMax => match self
                .wallets
                .iter()
                .filter_map(Wallet::account_index)
                .max()
            {
                Some(max) => max.checked_add(1).ok_or_else(overflow),
                None => Ok(0),
            },
        }
    }

    pub(crate) fn push(&mut self, wallet: Wallet) {
        self.wallets.push(wallet);
    }

    pub(crate) fn remove(&mut self, position: usize) -> Wallet {
        self.wallets.remove(position)
    }
}

// =============================================================================
// TESTS
// =============================================================================
