//! Watcher configuration.

use serde::Deserialize;

/// Configuration for the mint watcher.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::rpc_url")]
    pub rpc_url: String,

    #[serde(default = "defaults::fallback_rpc_url")]
    pub fallback_rpc_url: String,

    /// Deployed epic-nft contract account. Empty means the watcher idles.
    #[serde(default = "defaults::contract_id")]
    pub contract_id: String,

    /// Minimum interval between view fetches (ms).
    #[serde(default = "defaults::fetch_debounce_ms")]
    pub fetch_debounce_ms: u64,

    /// How often the binary asks the watcher to refresh (ms).
    #[serde(default = "defaults::tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: defaults::rpc_url(),
            fallback_rpc_url: defaults::fallback_rpc_url(),
            contract_id: defaults::contract_id(),
            fetch_debounce_ms: defaults::fetch_debounce_ms(),
            tick_interval_ms: defaults::tick_interval_ms(),
        }
    }
}

mod defaults {
    fn network() -> String {
        std::env::var("NEAR_NETWORK").unwrap_or_else(|_| "testnet".into())
    }

    pub fn rpc_url() -> String {
        if let Ok(url) = std::env::var("WATCHER_RPC_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        if network().contains("mainnet") {
            "https://free.rpc.fastnear.com".into()
        } else {
            "https://test.rpc.fastnear.com".into()
        }
    }

    pub fn fallback_rpc_url() -> String {
        if let Ok(url) = std::env::var("WATCHER_FALLBACK_RPC_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        if network().contains("mainnet") {
            "https://near.lava.build".into()
        } else {
            "https://neart.lava.build".into()
        }
    }

    pub fn contract_id() -> String {
        std::env::var("WATCHER_CONTRACT_ID").unwrap_or_default()
    }

    pub fn fetch_debounce_ms() -> u64 {
        10_000
    }

    pub fn tick_interval_ms() -> u64 {
        2_000
    }
}
