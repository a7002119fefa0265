// wallet-core/src/config.rs
//
// Wallet set configuration, loaded from TOML and/or environment variables

use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const ENV_INDEX_POLICY: &str = "HDWALLET_INDEX_POLICY";
pub const ENV_STORAGE_NAMESPACE: &str = "HDWALLET_STORAGE_NAMESPACE";
pub const ENV_AUTOSAVE: &str = "HDWALLET_AUTOSAVE";

/// How `derive_next` picks the account index of a new wallet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndexPolicy {
    /// New index = current number of wallets.
    ///
    /// After a removal this can re-derive an account that is still in the
    /// set, producing two wallets with the same path.
    #[default]
    Length,
    /// New index = highest recorded account index + 1 (0 for an empty set).
    NextAfterMax,
}

impl FromStr for IndexPolicy {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IndexPolicy::Length),
            "next-after-max" | "next_after_max" => Ok(IndexPolicy::NextAfterMax),
            other => Err(WalletError::Config(format!(
                "Unknown index policy '{}' (expected 'length' or 'next-after-max')",
                other
            ))),
        }
    }
}

/// Wallet set manager configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalletConfig {
    pub index_policy: IndexPolicy,
    /// Store key holding the persisted wallet set record
    pub storage_namespace: String,
    /// Persist after every successful mutation when a store is attached
    pub autosave: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            index_policy: IndexPolicy::default(),
            storage_namespace: "wallet-set".to_string(),
            autosave: true,
        }
    }
}

impl WalletConfig {
    pub fn from_toml_str(s: &str) -> WalletResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> WalletResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WalletError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Override fields from `HDWALLET_*` environment variables.
    pub fn apply_env_overrides(self) -> WalletResult<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> WalletResult<Self> {
        if let Some(policy) = lookup(ENV_INDEX_POLICY) {
            self.index_policy = policy.parse()?;
        }
        if let Some(namespace) = lookup(ENV_STORAGE_NAMESPACE) {
            self.storage_namespace = namespace;
        }
        if let Some(autosave) = lookup(ENV_AUTOSAVE) {
            self.autosave = match autosave.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(WalletError::Config(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_AUTOSAVE, other
                    )))
                }
            };
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> WalletResult<()> {
        let ns = &self.storage_namespace;
        if ns.is_empty()
            || !ns
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(WalletError::Config(format!(
                "storage_namespace '{}' must be non-empty and contain only [A-Za-z0-9._-]",
                ns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = WalletConfig::default();
        assert_eq!(config.index_policy, IndexPolicy::Length);
        assert_eq!(config.storage_namespace, "wallet-set");
        assert!(config.autosave);
    }

    #[test]
    fn test_from_toml() {
        let config = WalletConfig::from_toml_str(
            r#"
            index_policy = "next-after-max"
            storage_namespace = "demo"
            "#,
        )
        .unwrap();
        assert_eq!(config.index_policy, IndexPolicy::NextAfterMax);
        assert_eq!(config.storage_namespace, "demo");
        assert!(config.autosave);
    }

    #[test]
    fn test_from_toml_rejects_unknown() {
        assert!(matches!(
            WalletConfig::from_toml_str("index_policy = \"random\""),
            Err(WalletError::Config(_))
        ));
        assert!(WalletConfig::from_toml_str("colour = 3").is_err());
        assert!(WalletConfig::from_toml_str("storage_namespace = \"a/b\"").is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_INDEX_POLICY, "next_after_max"),
            (ENV_AUTOSAVE, "off"),
        ]
        .into_iter()
        .collect();
        let config = WalletConfig::default()
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.index_policy, IndexPolicy::NextAfterMax);
        assert!(!config.autosave);
        assert_eq!(config.storage_namespace, "wallet-set");
    }

    #[test]
    fn test_overrides_reject_bad_bool() {
        let result = WalletConfig::default().apply_overrides(|k| {
            (k == ENV_AUTOSAVE).then(|| "maybe".to_string())
        });
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.toml");
        std::fs::write(&path, "autosave = false\n").unwrap();
        let config = WalletConfig::from_file(&path).unwrap();
        assert!(!config.autosave);
        assert!(WalletConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}
