//! Session/identity bridge between the wallet provider and the session store.

use std::sync::Arc;

use log::{debug, warn};

use crate::errors::{MintError, Result};
use crate::rpc::SubmissionRequest;
use crate::store::{HintSeverity, SessionStore};
use crate::wallet::provider::{WalletEventListener, WalletProvider};

/// Short-form address for display ("9mG7…TJtD").
pub fn abbr_address(address: &str) -> String {
    if address.len() > 8 {
        format!("{}…{}", &address[..4], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}

/// Identity adapted to the shape the remote-call layer expects: a stable
/// address plus signing for one or many pending submissions.
#[derive(Clone)]
pub struct SigningIdentity {
    provider: Arc<dyn WalletProvider>,
    pub address: String,
}

impl SigningIdentity {
    pub async fn sign(&self, request: &SubmissionRequest) -> Result<String> {
        self.provider.sign(request).await
    }

    /// Sign many submissions, preferring native batch signing and falling
    /// back to a sequence of individual signings.
    pub async fn sign_all(&self, requests: &[SubmissionRequest]) -> Result<Vec<String>> {
        match self.provider.sign_all(requests).await {
            Ok(signatures) if signatures.len() == requests.len() => return Ok(signatures),
            Ok(signatures) => {
                warn!(
                    "Provider batch signing returned {} signatures for {} requests, falling back",
                    signatures.len(),
                    requests.len()
                );
            }
            Err(e) => debug!("Batch signing unavailable ({}), signing sequentially", e),
        }
        let mut signatures = Vec::with_capacity(requests.len());
        for request in requests {
            signatures.push(self.provider.sign(request).await?);
        }
        Ok(signatures)
    }
}

/// Connects/disconnects the external identity and mirrors it into the store.
pub struct WalletBridge {
    provider: Option<Arc<dyn WalletProvider>>,
    store: Arc<SessionStore>,
}

impl WalletBridge {
    pub fn new(provider: Option<Arc<dyn WalletProvider>>, store: Arc<SessionStore>) -> Self {
        Self { provider, store }
    }

    fn available_provider(&self) -> Result<&Arc<dyn WalletProvider>> {
        match &self.provider {
            Some(provider) if provider.is_available() => Ok(provider),
            _ => Err(MintError::NoProvider),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.provider
            .as_ref()
            .and_then(|p| p.address())
            .is_some()
    }

    /// Request authorization from the provider, prompting if needed.
    pub async fn connect(&self) -> Result<String> {
        let provider = self.available_provider()?;
        let address = provider.connect(false).await?;
        self.adopt_address(&address);
        Ok(address)
    }

    /// Adopt an existing trusted session without prompting. Failure means "no
    /// trusted session", which is not an error.
    pub async fn try_silent_connect(&self) -> Option<String> {
        let provider = self.available_provider().ok()?;
        match provider.connect(true).await {
            Ok(address) => {
                self.adopt_address(&address);
                Some(address)
            }
            Err(e) => {
                debug!("No trusted wallet session: {}", e);
                None
            }
        }
    }

    /// Best-effort disconnect. Provider failures are logged, never propagated;
    /// local connected state is always cleared.
    pub async fn disconnect(&self) {
        if let Some(provider) = &self.provider {
            if let Err(e) = provider.disconnect().await {
                warn!("Provider disconnect failed: {}", e);
            }
        }
        self.store.update(|state| {
            state.connected = false;
            state.address_short = None;
            state.ready = false;
            state.set_hint(HintSeverity::Warn, "Wallet disconnected.");
        });
    }

    /// Adapt the connected identity for the remote-call layer.
    pub fn attach_identity(&self) -> Result<SigningIdentity> {
        let provider = self.available_provider()?;
        let address = provider.address().ok_or(MintError::NoProvider)?;
        Ok(SigningIdentity {
            provider: provider.clone(),
            address,
        })
    }

    /// Register for provider-pushed connection events, when supported.
    pub fn subscribe(&self, listener: Arc<dyn WalletEventListener>) {
        if let Some(provider) = &self.provider {
            provider.subscribe(listener);
        }
    }

    fn adopt_address(&self, address: &str) {
        let short = abbr_address(address);
        let cluster = self.store.snapshot().cluster;
        self.store.update(|state| {
            state.connected = true;
            state.address_short = Some(short.clone());
            state.set_hint(
                HintSeverity::Ok,
                format!("Connected: {} ({})", short, cluster),
            );
        });
    }
}
