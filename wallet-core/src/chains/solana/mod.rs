// wallet-core/src/chains/solana/mod.rs

//! Solana Chain Support
//!
//! - **Key Pair**: ed25519 key pair from a 32-byte derived seed via [`SolanaKeypair`].
//! - **Encoding**: base58 public key (the address) and base58 64-byte secret key,
//!   the format accepted by Phantom, Solflare and `solana-keygen`.

pub mod keypair;

pub use keypair::SolanaKeypair;
