// wallet-core/src/chains/mod.rs
//
// Supported chains and their key encoders
//
// ┌──────────────────────────────────────────────────────────┐
// │  DerivedKey (32 bytes)                                   │
// │          │                                               │
// │   ┌──────┴──────────┐                                    │
// │   ▼                 ▼                                    │
// │  Solana (ed25519)  Ethereum (secp256k1)                  │
// │  base58 keypair    hex key + EIP-55 address              │
// └──────────────────────────────────────────────────────────┘

pub mod evm;
pub mod solana;

pub use evm::EvmAddress;
pub use solana::SolanaKeypair;

use crate::crypto::key_deriver::DerivedKey;
use crate::crypto::paths::coin_type;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroizing;

// =============================================================================
// CHAIN IDENTIFICATION
// =============================================================================

/// Elliptic curve a chain signs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveType {
    Ed25519,
    Secp256k1,
}

/// Closed set of supported chains.
///
/// Serialized as the SLIP-44 coin type string (`"501"`, `"60"`), which is the
/// chain selector stored alongside a persisted wallet set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ChainType {
    Solana,
    Ethereum,
}

impl ChainType {
    pub const ALL: [ChainType; 2] = [ChainType::Solana, ChainType::Ethereum];

    #[inline]
    pub const fn coin_type(self) -> u32 {
        match self {
            ChainType::Solana => coin_type::SOLANA,
            ChainType::Ethereum => coin_type::ETHEREUM,
        }
    }

    #[inline]
    pub const fn curve(self) -> CurveType {
        match self {
            ChainType::Solana => CurveType::Ed25519,
            ChainType::Ethereum => CurveType::Secp256k1,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ChainType::Solana => "Solana",
            ChainType::Ethereum => "Ethereum",
        }
    }

    /// Resolve a SLIP-44 coin type, rejecting anything outside the supported set.
    pub fn from_coin_type(coin_type: u32) -> WalletResult<Self> {
        Self::ALL
            .into_iter()
            .find(|chain| chain.coin_type() == coin_type)
            .ok_or_else(|| WalletError::UnsupportedChain(coin_type.to_string()))
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChainType {
    type Err = WalletError;

    /// Accepts the coin type (`"501"`), the name, or the ticker, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim().to_ascii_lowercase();
        match selector.as_str() {
            "solana" | "sol" => Ok(ChainType::Solana),
            "ethereum" | "eth" => Ok(ChainType::Ethereum),
            other => match other.parse::<u32>() {
                Ok(coin) => Self::from_coin_type(coin),
                Err(_) => Err(WalletError::UnsupportedChain(s.to_string())),
            },
        }
    }
}

impl TryFrom<String> for ChainType {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChainType> for String {
    fn from(chain: ChainType) -> Self {
        chain.coin_type().to_string()
    }
}

// =============================================================================
// KEY CODEC
// =============================================================================

/// Chain-native string encodings of one derived key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedKeyPair {
    pub public_key: String,
    pub private_key: Zeroizing<String>,
}

impl fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Turns raw derived key material into each chain's public/private key strings.
pub struct ChainKeyCodec;

impl ChainKeyCodec {
    /// Encode a key produced by [`KeyDeriver`](crate::crypto::KeyDeriver).
    pub fn encode(key: &DerivedKey) -> WalletResult<EncodedKeyPair> {
        Self::encode_for(key.chain, &key.private_key)
    }

    /// Encode a raw 32-byte key for a SLIP-44 coin type.
    ///
    /// Unknown coin types fail with [`WalletError::UnsupportedChain`].
    pub fn encode_raw(coin_type: u32, raw: &[u8; 32]) -> WalletResult<EncodedKeyPair> {
        let chain = ChainType::from_coin_type(coin_type)?;
        Self::encode_for(chain, raw)
    }

    fn encode_for(chain: ChainType, raw: &[u8; 32]) -> WalletResult<EncodedKeyPair> {
        match chain {
            ChainType::Solana => {
                let keypair = SolanaKeypair::from_seed(raw);
                Ok(EncodedKeyPair {
                    public_key: keypair.address(),
                    private_key: keypair.secret_key_base58(),
                })
            }
            ChainType::Ethereum => Ok(EncodedKeyPair {
                public_key: EvmAddress::derive(raw)?,
                private_key: Zeroizing::new(hex::encode(raw)),
            }),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
