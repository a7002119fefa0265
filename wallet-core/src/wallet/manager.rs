// wallet-core/src/wallet/manager.rs
//
// Wallet set lifecycle: bind a phrase to a chain, derive, remove, clear.
//
// Every mutation builds the next state first, persists it (when a store is
// attached and autosave is on), and only then replaces the in-memory set.
// A failed operation leaves the set exactly as it was.

use super::{persist, Wallet, WalletSet};
use crate::chains::ChainType;
use crate::config::WalletConfig;
use crate::crypto::WalletMnemonic;
use crate::error::{WalletError, WalletResult};
use crate::notify::{NotificationSink, NotifyLevel, TracingNotifier};
use crate::storage::KeyValueStore;
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const MSG_INVALID_PHRASE: &str = "Invalid recovery phrase. Please try again";
pub const MSG_SET_READY: &str = "Recovery phrase ready";
pub const MSG_WALLET_CREATED: &str = "Wallet generated successfully";
pub const MSG_NO_PHRASE: &str = "No mnemonic found. Please generate a wallet first";
pub const MSG_DERIVE_FAILED: &str = "Failed to generate wallet. Please try again";
pub const MSG_WALLET_REMOVED: &str = "Wallet deleted successfully";
pub const MSG_CLEARED: &str = "All wallets cleared";
pub const MSG_SAVE_FAILED: &str = "Failed to save wallets. Please try again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetState {
    /// No phrase bound
    Empty,
    /// Phrase and chain bound; zero or more wallets
    Active,
}

pub struct WalletSetManager {
    config: WalletConfig,
    active: Option<WalletSet>,
    rng: Box<dyn CryptoRngCore + Send>,
    notifier: Box<dyn NotificationSink>,
    store: Option<Box<dyn KeyValueStore>>,
}

impl std::fmt::Debug for WalletSetManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSetManager")
            .field("config", &self.config)
            .field("chain", &self.chain())
            .field("wallets", &self.len())
            .field("store", &self.store.is_some())
            .finish()
    }
}

impl Default for WalletSetManager {
    fn default() -> Self {
        Self::new(WalletConfig::default())
    }
}

impl WalletSetManager {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config,
            active: None,
            rng: Box::new(OsRng),
            notifier: Box::new(TracingNotifier),
            store: None,
        }
    }

    /// Replace the entropy source used to generate new phrases.
    pub fn with_rng<R: CryptoRngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_notifier<N: NotificationSink + 'static>(mut self, notifier: N) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_store<S: KeyValueStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Bind a phrase and chain, discarding any previous set
    ///
    /// An empty (or whitespace-only) `phrase_text` generates a fresh phrase.
    /// On an invalid phrase the current set is left untouched.
    #[tracing::instrument(level = "debug", skip(self, phrase_text))]
    pub fn start_new(&mut self, chain: ChainType, phrase_text: &str) -> WalletResult<WalletMnemonic> {
        let text = phrase_text.trim();

        let mnemonic = if text.is_empty() {
            WalletMnemonic::generate_with(&mut *self.rng)
        } else {
            match WalletMnemonic::from_phrase(text) {
                Ok(mnemonic) => mnemonic,
                Err(e) => {
                    tracing::warn!(error = %e, "rejected recovery phrase");
                    self.notifier.notify(NotifyLevel::Error, MSG_INVALID_PHRASE);
                    return Err(e);
                }
            }
        };

        if let Err(e) = self.commit(WalletSet::new(chain, mnemonic.clone())) {
            self.notifier.notify(NotifyLevel::Error, MSG_SAVE_FAILED);
            return Err(e);
        }

        tracing::info!(%chain, generated = text.is_empty(), "wallet set bound");
        self.notifier.notify(NotifyLevel::Info, MSG_SET_READY);
        Ok(mnemonic)
    }

    /// Derive the wallet at the next account index and append it
    ///
    /// The index comes from the configured [`IndexPolicy`](crate::config::IndexPolicy).
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn derive_next(&mut self) -> WalletResult<Wallet> {
        let Some(set) = self.active.as_ref() else {
            self.notifier.notify(NotifyLevel::Error, MSG_NO_PHRASE);
            return Err(WalletError::NoActiveSet);
        };

        let derived = set
            .next_index(self.config.index_policy)
            .and_then(|index| Wallet::derive(set.mnemonic(), set.chain(), index));
        let wallet = match derived {
            Ok(wallet) => wallet,
            Err(e) => {
                tracing::error!(error = %e, "derivation failed");
                self.notifier.notify(NotifyLevel::Error, MSG_DERIVE_FAILED);
                return Err(e);
            }
        };

        let mut next = set.clone();
        next.push(wallet.clone());
        if let Err(e) = self.commit(next) {
            self.notifier.notify(NotifyLevel::Error, MSG_DERIVE_FAILED);
            return Err(e);
        }

        tracing::info!(
            public_key = wallet.public_key(),
            path = wallet.path(),
            "wallet derived"
        );
        self.notifier.notify(NotifyLevel::Success, MSG_WALLET_CREATED);
        Ok(wallet)
    }

    /// Remove the wallet at display `position` and return it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, position: usize) -> WalletResult<Wallet> {
        let len = self.len();
        let set = match self.active.as_ref() {
            Some(set) if position < len => set,
            _ => return Err(WalletError::IndexOutOfRange { index: position, len }),
        };

        let mut next = set.clone();
        let removed = next.remove(position);
        if let Err(e) = self.commit(next) {
            self.notifier.notify(NotifyLevel::Error, MSG_SAVE_FAILED);
            return Err(e);
        }

        tracing::info!(position, path = removed.path(), "wallet removed");
        self.notifier.notify(NotifyLevel::Success, MSG_WALLET_REMOVED);
        Ok(removed)
    }

    /// Drop the phrase, the chain and every wallet, including the persisted
    /// record. Clearing an empty manager succeeds.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) -> WalletResult<()> {
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = persist::erase(store.as_mut(), &self.config.storage_namespace) {
                tracing::error!(error = %e, "failed to erase wallet set");
                self.notifier.notify(NotifyLevel::Error, MSG_SAVE_FAILED);
                return Err(e);
            }
        }
        self.active = None;

        tracing::info!("wallet set cleared");
        self.notifier.notify(NotifyLevel::Success, MSG_CLEARED);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Derive the wallet for `account_index` without changing the set.
    pub fn derive_at(&self, account_index: u32) -> WalletResult<Wallet> {
        let set = self.active.as_ref().ok_or(WalletError::NoActiveSet)?;
        Wallet::derive(set.mnemonic(), set.chain(), account_index)
    }

    pub fn state(&self) -> SetState {
        if self.active.is_some() {
            SetState::Active
        } else {
            SetState::Empty
        }
    }

    pub fn is_bound(&self) -> bool {
        self.active.is_some()
    }

    pub fn chain(&self) -> Option<ChainType> {
        self.active.as_ref().map(WalletSet::chain)
    }

    pub fn mnemonic(&self) -> Option<&WalletMnemonic> {
        self.active.as_ref().map(WalletSet::mnemonic)
    }

    /// Wallets in display order; empty when no set is bound.
    pub fn wallets(&self) -> &[Wallet] {
        self.active.as_ref().map(WalletSet::wallets).unwrap_or(&[])
    }

    pub fn get(&self, position: usize) -> WalletResult<&Wallet> {
        let wallets = self.wallets();
        wallets.get(position).ok_or(WalletError::IndexOutOfRange {
            index: position,
            len: wallets.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.wallets().len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets().is_empty()
    }

    /// Owned copy of the current set.
    pub fn snapshot(&self) -> Option<WalletSet> {
        self.active.clone()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the current set to the attached store (or erase the record when
    /// no set is bound).
    pub fn persist(&mut self) -> WalletResult<()> {
        let namespace = &self.config.storage_namespace;
        let store = self
            .store
            .as_mut()
            .ok_or_else(|| WalletError::Storage("No store attached".to_string()))?;

        match self.active.as_ref() {
            Some(set) => persist::save(store.as_mut(), namespace, set),
            None => persist::erase(store.as_mut(), namespace),
        }
    }

    /// Replace the in-memory set with the one in the attached store
    ///
    /// Returns `Ok(false)` and leaves the set unchanged when nothing is stored.
    pub fn restore(&mut self) -> WalletResult<bool> {
        let store = self
            .store
            .as_deref()
            .ok_or_else(|| WalletError::Storage("No store attached".to_string()))?;
        let loaded = persist::load(store, &self.config.storage_namespace)?;
        Ok(self.install(loaded))
    }

    /// Like [`restore`](Self::restore), reading from an arbitrary store.
    pub fn restore_from(&mut self, store: &dyn KeyValueStore) -> WalletResult<bool> {
        let loaded = persist::load(store, &self.config.storage_namespace)?;
        Ok(self.install(loaded))
    }

    fn install(&mut self, loaded: Option<WalletSet>) -> bool {
        match loaded {
            Some(set) => {
                tracing::info!(chain = %set.chain(), wallets = set.wallets().len(), "wallet set restored");
                self.active = Some(set);
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, next: WalletSet) -> WalletResult<()> {
        if self.config.autosave {
            if let Some(store) = self.store.as_mut() {
                persist::save(store.as_mut(), &self.config.storage_namespace, &next)
                    .inspect_err(|e| tracing::error!(error = %e, "failed to persist wallet set"))?;
            }
        }
        self.active = Some(next);
        Ok(())
    }
}

// =============================================================================
// SHARED HANDLE
// =============================================================================

/// Cloneable, thread-safe handle to one manager
///
/// Operations are serialized by a mutex, so concurrent `derive_next` calls
/// never observe the same next index.
#[derive(Debug, Clone)]
pub struct SharedWalletSetManager {
    inner: Arc<Mutex<WalletSetManager>>,
}

impl SharedWalletSetManager {
    pub fn new(manager: WalletSetManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Lock the manager for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, WalletSetManager> {
        // Every mutation commits atomically, so a panic elsewhere cannot leave
        // a half-applied set behind the poison flag.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start_new(&self, chain: ChainType, phrase_text: &str) -> WalletResult<WalletMnemonic> {
        self.lock().start_new(chain, phrase_text)
    }

    pub fn derive_next(&self) -> WalletResult<Wallet> {
        self.lock().derive_next()
    }

    pub fn remove(&self, position: usize) -> WalletResult<Wallet> {
        self.lock().remove(position)
    }

    pub fn clear(&self) -> WalletResult<()> {
        self.lock().clear()
    }

    pub fn wallets(&self) -> Vec<Wallet> {
        self.lock().wallets().to_vec()
    }

    pub fn snapshot(&self) -> Option<WalletSet> {
        self.lock().snapshot()
    }
}

impl From<WalletSetManager> for SharedWalletSetManager {
    fn from(manager: WalletSetManager) -> Self {
        Self::new(manager)
    }
}

// =============================================================================
// TESTS
// =============================================================================
