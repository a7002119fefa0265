// wallet-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 recovery phrase handling
// Standard: BIP-39 (English wordlist), PBKDF2-HMAC-SHA512 (seed stretching)

use crate::error::{MnemonicError, WalletError, WalletResult};
use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// The only supported phrase length: 128 bits of entropy + 4 checksum bits.
pub const WORD_COUNT: usize = 12;

/// Entropy size backing a [`WORD_COUNT`]-word phrase.
pub const ENTROPY_BYTES: usize = 16;

/// Seed length produced by [`WalletMnemonic::to_seed`].
pub const SEED_LEN: usize = 64;

/// Wallet Mnemonic - the root secret of one wallet set
///
/// # Security Architecture
/// - **ZeroizeOnDrop**: the phrase is overwritten when the struct is dropped
/// - **CSPRNG**: generation draws from `OsRng` or an injected `CryptoRngCore`
/// - **No Debug Leak**: custom Debug impl never prints the phrase
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct WalletMnemonic {
    phrase: String,
}

impl std::fmt::Debug for WalletMnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletMnemonic")
            .field("word_count", &self.word_count())
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl WalletMnemonic {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh 12-word phrase from the operating system CSPRNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng)
    }

    /// Generate a fresh 12-word phrase from an injected randomness source.
    ///
    /// Only cryptographically secure generators are accepted at the type
    /// level; reusing entropy across wallet sets is a key-compromise bug.
    pub fn generate_with<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Self {
        let mut entropy = [0u8; ENTROPY_BYTES];
        rng.fill_bytes(&mut entropy);

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy)
            .expect("16 bytes is a valid BIP-39 entropy size");
        entropy.zeroize();

        Self {
            phrase: mnemonic.to_string(),
        }
    }

    /// Restore a mnemonic from user-supplied text
    ///
    /// # Validation
    /// - Whitespace is normalized (trimmed, runs collapsed to one space)
    /// - Exactly 12 words
    /// - Every word must be in the English BIP-39 wordlist
    /// - The embedded checksum must match
    pub fn from_phrase(phrase: &str) -> WalletResult<Self> {
        let words: Vec<&str> = phrase.split_whitespace().collect();

        if words.len() != WORD_COUNT {
            return Err(WalletError::InvalidMnemonic(
                MnemonicError::InvalidWordCount(words.len()),
            ));
        }

        if let Some(unknown) = words.iter().find(|w| !Self::is_valid_word(w)) {
            return Err(WalletError::InvalidMnemonic(MnemonicError::UnknownWord(
                (*unknown).to_string(),
            )));
        }

        let normalized = words.join(" ");
        Mnemonic::parse_in_normalized(Language::English, &normalized).map_err(|e| {
            WalletError::InvalidMnemonic(match e {
                bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
                bip39::Error::BadWordCount(n) => MnemonicError::InvalidWordCount(n),
                other => MnemonicError::Bip39Error(other.to_string()),
            })
        })?;

        Ok(Self { phrase: normalized })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The phrase text, words separated by single spaces.
    ///
    /// # Warning
    /// This is the wallet's root secret. Never log it.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }

    pub fn words(&self) -> Vec<&str> {
        self.phrase.split_whitespace().collect()
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// Stretch the phrase into a 64-byte seed (PBKDF2-HMAC-SHA512, 2048 rounds)
    ///
    /// # Arguments
    /// * `passphrase` - Optional BIP-39 passphrase; wallet sets use `None`
    ///
    /// # Returns
    /// 64-byte seed wrapped in `Zeroizing`
    pub fn to_seed(&self, passphrase: Option<&str>) -> Zeroizing<[u8; SEED_LEN]> {
        let password = passphrase.unwrap_or("");
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &self.phrase)
            .expect("Internal phrase is valid");
        Zeroizing::new(mnemonic.to_seed_normalized(password))
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// `true` iff `phrase` is a 12-word English BIP-39 phrase with a valid
    /// checksum. Never panics on malformed input.
    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }

    /// Whether `word` appears in the English BIP-39 wordlist.
    #[inline]
    pub fn is_valid_word(word: &str) -> bool {
        Language::English.find_word(word).is_some()
    }
}

impl Default for WalletMnemonic {
    fn default() -> Self {
        Self::generate()
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    // All-zero entropy (BIP-39 test vectors)
    const TEST_MNEMONIC_12: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
    // 0x7f7f.. entropy (BIP-39 test vectors)
    const TEST_MNEMONIC_7F: &str =
        "legal winner thank year wave sausage worth useful legal winner thank yellow";
    const TEST_SEED_HEX: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    #[test]
    fn test_generate_12_words() {
        let mnemonic = WalletMnemonic::generate();
        assert_eq!(mnemonic.word_count(), 12);
        assert!(WalletMnemonic::validate(mnemonic.phrase()));
    }

    #[test]
    fn test_generate_with_injected_rng_is_reproducible() {
        let a = WalletMnemonic::generate_with(&mut StdRng::seed_from_u64(7));
        let b = WalletMnemonic::generate_with(&mut StdRng::seed_from_u64(7));
        let c = WalletMnemonic::generate_with(&mut StdRng::seed_from_u64(8));
        assert_eq!(a.phrase(), b.phrase());
        assert_ne!(a.phrase(), c.phrase());
    }

    #[test]
    fn test_from_phrase_valid() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        assert_eq!(mnemonic.word_count(), 12);
        assert!(WalletMnemonic::from_phrase(TEST_MNEMONIC_7F).is_ok());
    }

    #[test]
    fn test_from_phrase_normalizes_whitespace() {
        let messy_phrase =
            "  abandon  abandon   abandon abandon abandon abandon abandon abandon abandon abandon abandon about  ";
        let mnemonic = WalletMnemonic::from_phrase(messy_phrase).unwrap();
        assert_eq!(mnemonic.phrase(), TEST_MNEMONIC_12);
    }

    #[test]
    fn test_from_phrase_invalid_word_count() {
        let result = WalletMnemonic::from_phrase("abandon abandon abandon");
        assert_eq!(
            result,
            Err(WalletError::InvalidMnemonic(MnemonicError::InvalidWordCount(3)))
        );

        // Valid 24-word BIP-39 phrase, but only 12 words are supported here
        let twenty_four = format!("{} art", ["abandon"; 23].join(" "));
        assert_eq!(
            WalletMnemonic::from_phrase(&twenty_four),
            Err(WalletError::InvalidMnemonic(MnemonicError::InvalidWordCount(24)))
        );
    }

    #[test]
    fn test_from_phrase_invalid_word() {
        let invalid = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon invalid";
        assert_eq!(
            WalletMnemonic::from_phrase(invalid),
            Err(WalletError::InvalidMnemonic(MnemonicError::UnknownWord(
                "invalid".to_string()
            )))
        );
    }

    #[test]
    fn test_from_phrase_bad_checksum() {
        let bad = ["abandon"; 12].join(" ");
        assert_eq!(
            WalletMnemonic::from_phrase(&bad),
            Err(WalletError::InvalidMnemonic(MnemonicError::ChecksumFailed))
        );
    }

    #[test]
    fn test_to_seed_vector() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed = mnemonic.to_seed(None);
        assert_eq!(hex::encode(*seed), TEST_SEED_HEX);
    }

    #[test]
    fn test_to_seed_with_passphrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let seed_no_pass = mnemonic.to_seed(None);
        let seed_with_pass = mnemonic.to_seed(Some("TREZOR"));
        assert_ne!(&*seed_no_pass, &*seed_with_pass);
        assert_eq!(
            hex::encode(*seed_with_pass),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_validate() {
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_12));
        assert!(WalletMnemonic::validate(TEST_MNEMONIC_7F));
        assert!(!WalletMnemonic::validate("invalid mnemonic phrase"));
        assert!(!WalletMnemonic::validate("abandon"));
        assert!(!WalletMnemonic::validate(""));
        assert!(!WalletMnemonic::validate("ABANDON abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"));
    }

    #[test]
    fn test_is_valid_word() {
        assert!(WalletMnemonic::is_valid_word("abandon"));
        assert!(WalletMnemonic::is_valid_word("zoo"));
        assert!(!WalletMnemonic::is_valid_word("invalidword"));
        assert!(!WalletMnemonic::is_valid_word("helo"));
    }

    #[test]
    fn test_words() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let words = mnemonic.words();
        assert_eq!(words.len(), 12);
        assert_eq!(words[0], "abandon");
        assert_eq!(words[11], "about");
    }

    #[test]
    fn test_debug_does_not_leak_phrase() {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC_12).unwrap();
        let debug_output = format!("{:?}", mnemonic);
        assert!(!debug_output.contains("abandon"));
        assert!(debug_output.contains("REDACTED"));
        assert!(debug_output.contains("word_count: 12"));
    }

    #[test]
    fn test_unique_generation() {
        let m1 = WalletMnemonic::generate();
        let m2 = WalletMnemonic::generate();
        assert_ne!(m1.phrase(), m2.phrase());
    }
}
