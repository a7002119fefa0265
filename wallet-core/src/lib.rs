// wallet-core/src/lib.rs

//! Deterministic multi-chain wallet derivation
//!
//! One BIP-39 recovery phrase yields an ordered set of Solana or Ethereum
//! wallets at `m/44'/<coin>'/0'/<index>'`:
//!
//! ```text
//! phrase ─► seed ─► (path, seed) ─► raw key ─► (public, private) ─► Wallet
//! ```
//!
//! - [`crypto`]: phrases, seeds, paths, hardened key derivation
//! - [`chains`]: per-chain key encoding
//! - [`wallet`]: wallet records and the [`WalletSetManager`] lifecycle
//! - [`storage`] / [`notify`]: injected persistence and notification collaborators
//!
//! ```no_run
//! use hdwallet_core::{ChainType, WalletSetManager};
//!
//! let mut manager = WalletSetManager::default();
//! manager.start_new(ChainType::Solana, "")?;
//! let wallet = manager.derive_next()?;
//! println!("{} {}", wallet.path(), wallet.public_key());
//! # Ok::<(), hdwallet_core::WalletError>(())
//! ```

pub mod chains;
pub mod config;
pub mod crypto;
pub mod error;
pub mod notify;
pub mod storage;
pub mod wallet;

pub use chains::{ChainKeyCodec, ChainType, CurveType, EncodedKeyPair};
pub use config::{IndexPolicy, WalletConfig};
pub use crypto::{DerivationPath, DerivedKey, KeyDeriver, WalletMnemonic};
pub use error::{CryptoError, MnemonicError, WalletError, WalletResult};
pub use notify::{NoopNotifier, NotificationSink, NotifyLevel, TracingNotifier};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use wallet::{SetState, SharedWalletSetManager, Wallet, WalletSet, WalletSetManager};
