//! Read-only view-call client with primary → fallback failover.
//!
//! One failover attempt per call, no retry loops; the watcher's debounce
//! window is the only pacing there is.

use near_jsonrpc_client::{JsonRpcClient, methods};
use near_primitives::types::{AccountId, BlockReference, Finality, FunctionArgs};
use near_primitives::views::QueryRequest;
use tracing::{info, warn};

use crate::Error;

/// JSON-RPC client pair for contract view calls.
pub struct RpcClient {
    primary: JsonRpcClient,
    fallback: JsonRpcClient,
    primary_url: String,
    fallback_url: String,
}

impl RpcClient {
    pub fn new(primary_url: &str, fallback_url: &str) -> Self {
        info!(
            primary = primary_url,
            fallback = fallback_url,
            "RPC client initialized with failover"
        );
        Self {
            primary: JsonRpcClient::connect(primary_url),
            fallback: JsonRpcClient::connect(fallback_url),
            primary_url: primary_url.to_string(),
            fallback_url: fallback_url.to_string(),
        }
    }

    /// The primary RPC URL.
    pub fn primary_url(&self) -> &str {
        &self.primary_url
    }

    pub fn fallback_url(&self) -> &str {
        &self.fallback_url
    }

    /// Call a view function against final state. Automatic failover.
    pub async fn view_function(
        &self,
        contract_id: &AccountId,
        method_name: &str,
        args: Vec<u8>,
    ) -> Result<Vec<u8>, Error> {
        let make_request = || methods::query::RpcQueryRequest {
            block_reference: BlockReference::Finality(Finality::Final),
            request: QueryRequest::CallFunction {
                account_id: contract_id.clone(),
                method_name: method_name.to_string(),
                args: FunctionArgs::from(args.clone()),
            },
        };

        let resp = match self.primary.call(make_request()).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, method = method_name, "Primary RPC view call failed, trying fallback");
                self.fallback.call(make_request()).await.map_err(|e2| {
                    Error::Rpc(format!(
                        "view call {method_name} failed on both RPCs: primary={e}, fallback={e2}"
                    ))
                })?
            }
        };

        match resp.kind {
            near_jsonrpc_primitives::types::query::QueryResponseKind::CallResult(result) => {
                Ok(result.result)
            }
            other => Err(Error::Rpc(format!("unexpected query response: {other:?}"))),
        }
    }
}
