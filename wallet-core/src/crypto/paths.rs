// wallet-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-44 account paths, hardened at every level
// Shape: m/44'/<coin_type>'/0'/<account_index>'

use crate::error::{CryptoError, WalletError, WalletResult};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const ETHEREUM: u32 = 60;
    pub const SOLANA: u32 = 501;
}

/// BIP-44 purpose level.
pub const PURPOSE: u32 = 44;

/// Bit set on a child number to mark hardened derivation.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

// =============================================================================
// DERIVATION PATH
// =============================================================================
/// Account-level derivation path `m/44'/<coin_type>'/0'/<account_index>'`
///
/// The path is fully determined by the coin type and the account index. All
/// four levels are hardened; there is no non-hardened variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    coin_type: u32,
    account_index: u32,
}

impl DerivationPath {
    /// Build the path for `coin_type` / `account_index`.
    ///
    /// Fails when `account_index` does not fit below the hardened offset,
    /// since `index | 0x8000_0000` would alias another account.
    pub fn new(coin_type: u32, account_index: u32) -> WalletResult<Self> {
        if coin_type >= HARDENED_OFFSET {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Coin type {} out of hardened range",
                coin_type
            ))));
        }
        if account_index >= HARDENED_OFFSET {
            return Err(WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Account index {} out of hardened range (max {})",
                account_index,
                HARDENED_OFFSET - 1
            ))));
        }
        Ok(Self {
            coin_type,
            account_index,
        })
    }

    #[inline]
    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    #[inline]
    pub fn account_index(&self) -> u32 {
        self.account_index
    }

    /// Unhardened child numbers in walk order: `[44, coin_type, 0, account_index]`.
    #[inline]
    pub fn segments(&self) -> [u32; 4] {
        [PURPOSE, self.coin_type, 0, self.account_index]
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m/{}'/{}'/0'/{}'",
            PURPOSE, self.coin_type, self.account_index
        )
    }
}

impl FromStr for DerivationPath {
    type Err = WalletError;

    /// Parse `m/44'/<coin>'/0'/<index>'`
    ///
    /// Accepts `'` or `h` as the hardened marker. Every level must be hardened.
    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| {
            WalletError::Crypto(CryptoError::DerivationFailed(format!(
                "Invalid path '{}': {}",
                path, reason
            )))
        };

        let rest = path
            .trim()
            .strip_prefix("m/")
            .ok_or_else(|| invalid("must start with 'm/'".to_string()))?;

        let mut indices = Vec::with_capacity(4);
        for segment in rest.split('/') {
            let num_str = segment
                .strip_suffix('\'')
                .or_else(|| segment.strip_suffix('h'))
                .ok_or_else(|| invalid(format!("segment '{}' is not hardened", segment)))?;
            if !num_str.starts_with(|c: char| c.is_ascii_digit()) {
                return Err(invalid(format!("segment '{}' is not a number", segment)));
            }
            let index: u32 = num_str
                .parse()
                .map_err(|e| invalid(format!("segment '{}': {}", segment, e)))?;
            indices.push(index);
        }

        match indices.as_slice() {
            [PURPOSE, coin, 0, account] => Self::new(*coin, *account),
            [purpose, _, _, _] if *purpose != PURPOSE => {
                Err(invalid(format!("purpose must be {}", PURPOSE)))
            }
            [_, _, _, _] => Err(invalid("account level must be 0'".to_string())),
            other => Err(invalid(format!("expected 4 levels, got {}", other.len()))),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
