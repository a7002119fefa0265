// wallet-core/src/chains/evm/mod.rs

//! Ethereum Virtual Machine (EVM) Chain Support
//!
//! - **Address Derivation**: EIP-55 checksummed address generation via [`EvmAddress`].
//! - **Private Key**: lowercase hex of the raw secp256k1 scalar, no `0x` prefix.

pub mod address;

pub use address::EvmAddress;
