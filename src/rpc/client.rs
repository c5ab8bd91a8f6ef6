//! Ledger RPC client: trait plus the JSON-RPC HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::errors::{MintError, Result};
use crate::guards::GuardDocument;
use crate::rpc::models::{MachineSnapshot, SignedSubmission, SubmissionReceipt};

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Confirmation polling: attempts and pause between polls.
const CONFIRM_ATTEMPTS: u32 = 30;
const CONFIRM_PAUSE: Duration = Duration::from_millis(500);

/// Remote-call surface the orchestration layer depends on.
///
/// One instance is bound to one endpoint; the endpoint pool rebuilds the
/// client whenever the failover ratchet advances.
#[async_trait]
pub trait LedgerRpc: Send + Sync {
    /// Endpoint this client is bound to.
    fn endpoint(&self) -> &str;

    /// Fetch the current machine state.
    async fn fetch_machine(&self, address: &str) -> Result<MachineSnapshot>;

    /// Fetch the guard document attached to a machine's mint authority.
    /// `Ok(None)` means the machine has none attached.
    async fn fetch_guard_document(&self, mint_authority: &str) -> Result<Option<GuardDocument>>;

    /// Submit a signed mint and await its confirmation.
    async fn submit(&self, submission: &SignedSubmission) -> Result<SubmissionReceipt>;
}

/// JSON-RPC client over HTTP.
pub struct HttpLedgerClient {
    client: Client,
    endpoint: String,
}

impl HttpLedgerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// One JSON-RPC call. Access denials (HTTP 401/403/429 or a rejection
    /// message in the RPC error) map to [`MintError::TransientEndpoint`] so
    /// the pool can fail over; everything else is terminal.
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        debug!("rpc {} -> {}", method, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": method,
                "params": params,
            }))
            .send()
            .await?;

        let status = response.status();
        if matches!(status.as_u16(), 401 | 403 | 407 | 429) {
            return Err(MintError::TransientEndpoint {
                endpoint: self.endpoint.clone(),
                message: format!("HTTP {}", status),
            });
        }
        if !status.is_success() {
            return Err(MintError::Rpc {
                endpoint: self.endpoint.clone(),
                message: format!("HTTP {}", status),
            });
        }

        let body: Value = response.json().await?;
        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown RPC error")
                .to_string();
            if MintError::is_rejection_message(&message) {
                return Err(MintError::TransientEndpoint {
                    endpoint: self.endpoint.clone(),
                    message,
                });
            }
            return Err(MintError::Rpc {
                endpoint: self.endpoint.clone(),
                message,
            });
        }

        Ok(body.get("result").cloned().unwrap_or(Value::Null))
    }

    fn rpc_error(&self, message: impl Into<String>) -> MintError {
        MintError::Rpc {
            endpoint: self.endpoint.clone(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl LedgerRpc for HttpLedgerClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_machine(&self, address: &str) -> Result<MachineSnapshot> {
        let result = self.call("getCandyMachine", json!([address])).await?;
        if result.is_null() {
            return Err(self.rpc_error(format!("machine {} not found", address)));
        }
        serde_json::from_value(result)
            .map_err(|e| self.rpc_error(format!("malformed machine state: {}", e)))
    }

    async fn fetch_guard_document(&self, mint_authority: &str) -> Result<Option<GuardDocument>> {
        let result = self.call("getCandyGuard", json!([mint_authority])).await?;
        if result.is_null() {
            return Ok(None);
        }
        serde_json::from_value(result)
            .map(Some)
            .map_err(|e| self.rpc_error(format!("malformed guard document: {}", e)))
    }

    async fn submit(&self, submission: &SignedSubmission) -> Result<SubmissionReceipt> {
        let result = self
            .call("submitMint", json!([submission]))
            .await
            .map_err(|e| match e {
                // Keep the failover classes; re-label the rest as submission
                // failures so the orchestrator aborts the remaining units.
                MintError::TransientEndpoint { .. } | MintError::Network(_) => e,
                other => MintError::SubmissionFailed(other.to_string()),
            })?;

        let signature = result
            .get("signature")
            .and_then(Value::as_str)
            .ok_or_else(|| MintError::SubmissionFailed("no signature returned".to_string()))?
            .to_string();

        for _ in 0..CONFIRM_ATTEMPTS {
            let status = self
                .call("getSignatureStatus", json!([signature]))
                .await?;
            match status.as_str() {
                Some("confirmed") | Some("finalized") => {
                    return Ok(SubmissionReceipt {
                        signature,
                        confirmed: true,
                    })
                }
                Some("failed") => {
                    return Err(MintError::SubmissionFailed(format!(
                        "transaction {} failed on chain",
                        signature
                    )))
                }
                _ => tokio::time::sleep(CONFIRM_PAUSE).await,
            }
        }
        Err(MintError::SubmissionFailed(format!(
            "confirmation timed out for {}",
            signature
        )))
    }
}
