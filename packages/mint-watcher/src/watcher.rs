//! Mint-count polling behind a fixed debounce window.

use std::time::{Duration, Instant};

use near_primitives::types::AccountId;
use tracing::{debug, info, warn};

use crate::rpc::RpcClient;
use crate::{Config, Error};

/// The two counters the watcher mirrors from the contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MintCounts {
    pub current: u64,
    pub max: u64,
}

/// Polls `total_supply`/`max_supply` at most once per debounce window.
pub struct MintWatcher {
    rpc: RpcClient,
    contract_id: Option<AccountId>,
    debounce: Duration,
    last_fetch: Option<Instant>,
    counts: MintCounts,
}

impl MintWatcher {
    pub fn new(config: &Config) -> Self {
        let contract_id = match config.contract_id.as_str() {
            "" => None,
            raw => match raw.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(contract_id = raw, "Invalid contract account id, watcher disabled");
                    None
                }
            },
        };
        Self {
            rpc: RpcClient::new(&config.rpc_url, &config.fallback_rpc_url),
            contract_id,
            debounce: Duration::from_millis(config.fetch_debounce_ms),
            last_fetch: None,
            counts: MintCounts::default(),
        }
    }

    /// The last successfully fetched counts (zeroes until the first fetch).
    pub fn counts(&self) -> MintCounts {
        self.counts
    }

    /// Debounced refresh. Inside the window this is a no-op; otherwise one
    /// fetch is attempted and the window restarts whether or not it worked.
    /// Errors are logged and swallowed, the cached counts stay as they were.
    pub async fn fetch_and_update(&mut self) {
        if !self.refresh_due() {
            return;
        }
        match self.fetch_counts().await {
            Ok(Some(counts)) => {
                if counts != self.counts {
                    info!(current = counts.current, max = counts.max, "Mint counts updated");
                }
                self.counts = counts;
            }
            Ok(None) => debug!("No contract configured, skipping mint count fetch"),
            Err(e) => warn!(error = %e, "Mint count fetch failed"),
        }
        self.last_fetch = Some(Instant::now());
    }

    fn refresh_due(&self) -> bool {
        self.last_fetch.map_or(true, |at| at.elapsed() > self.debounce)
    }

    async fn fetch_counts(&self) -> Result<Option<MintCounts>, Error> {
        let Some(contract_id) = &self.contract_id else {
            return Ok(None);
        };
        let current = self.view_u64(contract_id, "total_supply").await?;
        let max = self.view_u64(contract_id, "max_supply").await?;
        Ok(Some(MintCounts { current, max }))
    }

    async fn view_u64(&self, contract_id: &AccountId, method: &str) -> Result<u64, Error> {
        let bytes = self
            .rpc
            .view_function(contract_id, method, b"{}".to_vec())
            .await?;
        decode_u64(method, &bytes)
    }
}

// Supply views return `U64` values, JSON-encoded as decimal strings.
pub(crate) fn decode_u64(method: &str, bytes: &[u8]) -> Result<u64, Error> {
    let raw: String = serde_json::from_slice(bytes)
        .map_err(|e| Error::Decode(format!("{method} returned malformed JSON: {e}")))?;
    raw.parse()
        .map_err(|e| Error::Decode(format!("{method} returned a non-numeric count: {e}")))
}
