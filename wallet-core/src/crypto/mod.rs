// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! - **Mnemonic**: BIP-39 12-word recovery phrases and seed stretching via [`WalletMnemonic`].
//! - **Derivation Paths**: `m/44'/<coin>'/0'/<account>'` via [`DerivationPath`].
//! - **Key Derivation**: hardened HMAC-SHA512 child derivation via [`KeyDeriver`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use key_deriver::{DerivedKey, HardenedDeriver, KeyDeriver};
pub use mnemonic::WalletMnemonic;
pub use paths::DerivationPath;
