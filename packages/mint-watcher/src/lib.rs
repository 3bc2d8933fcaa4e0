//! Debounced mint-count poller for the epic-nft contract.
//!
//! Reads `total_supply`/`max_supply` view state over JSON-RPC at most once
//! per debounce window and caches the result locally. Read errors are logged,
//! never surfaced.

mod config;
mod error;
mod rpc;
mod watcher;

pub use config::Config;
pub use error::Error;
pub use rpc::RpcClient;
pub use watcher::{MintCounts, MintWatcher};
