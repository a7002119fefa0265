// wallet-core/src/chains/solana/keypair.rs
//
// Solana Key Pair Module
// ed25519 (RFC 8032) key pair, base58 encoding

use ed25519_dalek::{SigningKey, VerifyingKey};
use zeroize::Zeroizing;

/// Solana key pair built from a 32-byte ed25519 seed
///
/// # Flow:  Seed (32B) → SHA-512 expand → Public Key (32B)
///
/// Secret Key (64B) = Seed (32B) || Public Key (32B)
///
/// # Security
/// - `SigningKey` zeroizes itself on drop
/// - No Debug Leak: Debug prints the address only
pub struct SolanaKeypair {
    signing_key: SigningKey,
}

impl std::fmt::Debug for SolanaKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaKeypair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl SolanaKeypair {
    /// Standard ed25519 key pair construction from a seed. Every 32-byte
    /// value is a valid seed.
    #[inline]
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(seed),
        }
    }

    #[inline]
    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// 64-byte secret key: seed followed by public key.
    #[inline]
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; 64]> {
        Zeroizing::new(self.signing_key.to_keypair_bytes())
    }

    /// The account address: base58 of the 32-byte public key.
    pub fn address(&self) -> String {
        bs58::encode(self.verifying_key().as_bytes()).into_string()
    }

    /// base58 of the 64-byte secret key.
    pub fn secret_key_base58(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(&*self.secret_key_bytes()).into_string())
    }

    /// Whether `address` decodes to a 32-byte ed25519 public key.
    ///
    /// Off-curve 32-byte values (program-derived addresses) are rejected.
    pub fn is_valid_address(address: &str) -> bool {
        let Ok(bytes) = bs58::decode(address).into_vec() else {
            return false;
        };
        let Ok(bytes) = <[u8; 32]>::try_from(bytes.as_slice()) else {
            return false;
        };
        VerifyingKey::from_bytes(&bytes).is_ok()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 ed25519 TEST 1
    const RFC8032_SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const RFC8032_PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn rfc_keypair() -> SolanaKeypair {
        let seed: [u8; 32] = hex::decode(RFC8032_SECRET).unwrap().try_into().unwrap();
        SolanaKeypair::from_seed(&seed)
    }

    #[test]
    fn test_public_key_rfc8032() {
        let keypair = rfc_keypair();
        assert_eq!(hex::encode(keypair.verifying_key().as_bytes()), RFC8032_PUBLIC);
    }

    #[test]
    fn test_secret_key_layout() {
        let keypair = rfc_keypair();
        let secret = keypair.secret_key_bytes();
        assert_eq!(hex::encode(&secret[..32]), RFC8032_SECRET);
        assert_eq!(hex::encode(&secret[32..]), RFC8032_PUBLIC);
    }

    #[test]
    fn test_base58_encodings() {
        let keypair = rfc_keypair();
        let public = hex::decode(RFC8032_PUBLIC).unwrap();
        assert_eq!(keypair.address(), bs58::encode(&public).into_string());

        let decoded = bs58::decode(keypair.secret_key_base58().as_str())
            .into_vec()
            .unwrap();
        assert_eq!(decoded.as_slice(), &keypair.secret_key_bytes()[..]);
    }

    #[test]
    fn test_is_valid_address() {
        let keypair = rfc_keypair();
        assert!(SolanaKeypair::is_valid_address(&keypair.address()));
        assert!(SolanaKeypair::is_valid_address(
            "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk"
        ));
        assert!(!SolanaKeypair::is_valid_address(""));
        assert!(!SolanaKeypair::is_valid_address("0OIl"));
        assert!(!SolanaKeypair::is_valid_address("abc"));
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let keypair = rfc_keypair();
        let out = format!("{:?}", keypair);
        assert!(out.contains(&keypair.address()));
        assert!(!out.contains(keypair.secret_key_base58().as_str()));
    }
}
