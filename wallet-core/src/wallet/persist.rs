// wallet-core/src/wallet/persist.rs
//
// Persisted wallet set record
//
// One key per namespace, `<ns>`, holding a single JSON object:
//
//   chain     SLIP-44 coin type string ("501" / "60")
//   mnemonic  array of the phrase words
//   wallets   array of {publicKey, privateKey, mnemonic, path}
//
// A save or erase is one store operation, so a failure never leaves a
// record mixing two sets.

use super::{Wallet, WalletSet};
use crate::chains::ChainType;
use crate::crypto::WalletMnemonic;
use crate::error::WalletResult;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

#[derive(Serialize)]
struct RecordRef<'a> {
    chain: ChainType,
    mnemonic: Vec<&'a str>,
    wallets: &'a [Wallet],
}

#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
struct Record {
    chain: String,
    mnemonic: Vec<String>,
    wallets: Vec<Wallet>,
}

/// Serialize `set` under `namespace`, replacing any previous record.
pub fn save(store: &mut dyn KeyValueStore, namespace: &str, set: &WalletSet) -> WalletResult<()> {
    let record = RecordRef {
        chain: set.chain(),
        mnemonic: set.mnemonic().words(),
        wallets: set.wallets(),
    };
    let bytes = Zeroizing::new(serde_json::to_vec(&record)?);
    store.put(namespace, &bytes)?;

    tracing::debug!(namespace, wallets = set.wallets().len(), "persisted wallet set");
    Ok(())
}

/// Load the set stored under `namespace`
///
/// Returns `Ok(None)` when nothing is stored. A malformed or inconsistent
/// record is an error.
pub fn load(store: &dyn KeyValueStore, namespace: &str) -> WalletResult<Option<WalletSet>> {
    let Some(bytes) = store.get(namespace)?.map(Zeroizing::new) else {
        return Ok(None);
    };
    let mut record: Record = serde_json::from_slice(&bytes)?;

    let chain: ChainType = record.chain.parse()?;
    let mnemonic = WalletMnemonic::from_phrase(&Zeroizing::new(record.mnemonic.join(" ")))?;
    let wallets = std::mem::take(&mut record.wallets);

    let set = WalletSet::from_parts(chain, mnemonic, wallets).inspect_err(|e| {
        tracing::warn!(namespace, error = %e, "rejected persisted wallet set");
    })?;

    tracing::debug!(namespace, wallets = set.wallets().len(), "loaded wallet set");
    Ok(Some(set))
}

/// Remove the record under `namespace`.
pub fn erase(store: &mut dyn KeyValueStore, namespace: &str) -> WalletResult<()> {
    store.delete(namespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use crate::storage::MemoryStore;

    const NS: &str = "test";
    const TEST_MNEMONIC: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn sample_set() -> WalletSet {
        let m = WalletMnemonic::from_phrase(TEST_MNEMONIC).unwrap();
        let wallets = (0..2)
            .map(|i| Wallet::derive(&m, ChainType::Solana, i).unwrap())
            .collect();
        WalletSet::from_parts(ChainType::Solana, m, wallets).unwrap()
    }

    fn stored_json(store: &MemoryStore) -> serde_json::Value {
        serde_json::from_slice(&store.get(NS).unwrap().unwrap()).unwrap()
    }

    fn put_json(store: &mut MemoryStore, value: &serde_json::Value) {
        store.put(NS, &serde_json::to_vec(value).unwrap()).unwrap();
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let set = sample_set();
        save(&mut store, NS, &set).unwrap();
        assert_eq!(store.len(), 1);

        let loaded = load(&store, NS).unwrap().unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_record_shape() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();

        let record = stored_json(&store);
        assert_eq!(record["chain"], "501");
        assert_eq!(record["mnemonic"].as_array().unwrap().len(), 12);
        assert_eq!(record["mnemonic"][11], "about");
        assert_eq!(record["wallets"][1]["path"], "m/44'/501'/0'/1'");
    }

    #[test]
    fn test_save_replaces_whole_record() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();

        let other = WalletSet::new(
            ChainType::Ethereum,
            WalletMnemonic::from_phrase(TEST_MNEMONIC).unwrap(),
        );
        save(&mut store, NS, &other).unwrap();
        assert_eq!(load(&store, NS).unwrap().unwrap(), other);
    }

    #[test]
    fn test_load_empty() {
        let store = MemoryStore::new();
        assert_eq!(load(&store, NS).unwrap(), None);
    }

    #[test]
    fn test_load_missing_field() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();
        let mut record = stored_json(&store);
        record.as_object_mut().unwrap().remove("chain");
        put_json(&mut store, &record);
        assert!(matches!(load(&store, NS), Err(WalletError::Storage(_))));
    }

    #[test]
    fn test_load_unsupported_chain() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();
        let mut record = stored_json(&store);
        record["chain"] = "0".into();
        put_json(&mut store, &record);
        assert_eq!(
            load(&store, NS).unwrap_err(),
            WalletError::UnsupportedChain("0".to_string())
        );
    }

    #[test]
    fn test_load_mismatched_chain() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();
        let mut record = stored_json(&store);
        record["chain"] = "60".into();
        put_json(&mut store, &record);
        assert!(matches!(load(&store, NS), Err(WalletError::Storage(_))));
    }

    #[test]
    fn test_load_tampered_phrase() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();
        let mut record = stored_json(&store);
        record["mnemonic"] = serde_json::json!(vec!["abandon"; 12]);
        put_json(&mut store, &record);
        assert!(matches!(
            load(&store, NS),
            Err(WalletError::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_load_garbage() {
        let mut store = MemoryStore::new();
        store.put(NS, b"not json").unwrap();
        assert!(matches!(load(&store, NS), Err(WalletError::Storage(_))));
    }

    #[test]
    fn test_erase() {
        let mut store = MemoryStore::new();
        save(&mut store, NS, &sample_set()).unwrap();
        store.put("other", b"{}").unwrap();
        erase(&mut store, NS).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(load(&store, NS).unwrap(), None);
    }
}
