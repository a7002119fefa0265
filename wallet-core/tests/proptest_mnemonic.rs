// wallet-core/tests/proptest_mnemonic.rs
//
// Property tests for phrase validation and derivation determinism.

use bip39::Language;
use hdwallet_core::chains::{EvmAddress, SolanaKeypair};
use hdwallet_core::{ChainType, Wallet, WalletMnemonic};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn chain() -> impl Strategy<Value = ChainType> {
    prop_oneof![Just(ChainType::Solana), Just(ChainType::Ethereum)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_phrases_validate(seed in any::<[u8; 32]>()) {
        let mnemonic = WalletMnemonic::generate_with(&mut StdRng::from_seed(seed));
        prop_assert_eq!(mnemonic.word_count(), 12);
        prop_assert!(WalletMnemonic::validate(mnemonic.phrase()));
        prop_assert_eq!(
            WalletMnemonic::from_phrase(mnemonic.phrase()).unwrap(),
            mnemonic
        );
    }

    #[test]
    fn tampered_checksum_is_rejected(seed in any::<[u8; 32]>(), flip in 1u16..16) {
        let mnemonic = WalletMnemonic::generate_with(&mut StdRng::from_seed(seed));
        let mut words = mnemonic.words();

        // The low 4 bits of the last word are the checksum of a 12-word phrase.
        let last = Language::English.find_word(words[11]).unwrap();
        words[11] = Language::English.word_list()[usize::from(last ^ flip)];

        let tampered = words.join(" ");
        prop_assert!(!WalletMnemonic::validate(&tampered));
        prop_assert!(WalletMnemonic::from_phrase(&tampered).is_err());
    }

    #[test]
    fn derivation_is_deterministic(chain in chain(), index in 0u32..0x8000_0000) {
        let mnemonic = WalletMnemonic::from_phrase(TEST_MNEMONIC).unwrap();
        let a = Wallet::derive(&mnemonic, chain, index).unwrap();
        let b = Wallet::derive(&mnemonic, chain, index).unwrap();
        prop_assert_eq!(&a, &b);

        prop_assert_eq!(a.account_index(), Some(index));
        prop_assert_eq!(a.derivation_path().unwrap().coin_type(), chain.coin_type());
        match chain {
            ChainType::Ethereum => prop_assert!(EvmAddress::is_valid(a.public_key())),
            ChainType::Solana => prop_assert!(SolanaKeypair::is_valid_address(a.public_key())),
        }
    }
}
