//! Wallet provider capability trait.
//!
//! Any concrete wallet (a browser extension bridge, a hardware signer, a test
//! stub) is adapted to this trait at the boundary; nothing else in the crate
//! depends on a concrete provider shape.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::{MintError, Result};
use crate::rpc::SubmissionRequest;

/// Connection transitions a provider may report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletEvent {
    Connected { address: String },
    Disconnected,
    AccountChanged { address: Option<String> },
}

/// Trait for receiving wallet events pushed by the provider.
pub trait WalletEventListener: Send + Sync {
    fn on_event(&self, event: WalletEvent);
}

/// External signing identity capability.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Presence check; false means no usable provider is installed.
    fn is_available(&self) -> bool {
        true
    }

    /// Current wallet address, when connected.
    fn address(&self) -> Option<String>;

    /// Request authorization. With `only_if_trusted` the provider must not
    /// prompt and should fail quietly when no trusted session exists.
    async fn connect(&self, only_if_trusted: bool) -> Result<String>;

    async fn disconnect(&self) -> Result<()>;

    /// Sign a single submission, returning the wallet signature.
    async fn sign(&self, request: &SubmissionRequest) -> Result<String>;

    /// Sign a batch natively. Providers without batch support keep the
    /// default; callers fall back to sequential [`sign`](Self::sign) calls.
    async fn sign_all(&self, _requests: &[SubmissionRequest]) -> Result<Vec<String>> {
        Err(MintError::Provider(
            "batch signing not supported".to_string(),
        ))
    }

    /// Optional event subscription. Providers that cannot push events keep
    /// the no-op default.
    fn subscribe(&self, _listener: Arc<dyn WalletEventListener>) {}
}

/// Scriptable provider for tests.
#[derive(Default)]
pub struct MockWalletProvider {
    available: bool,
    trusted_address: Option<String>,
    address: Mutex<Option<String>>,
    fail_connect: bool,
    fail_disconnect: bool,
    supports_batch: bool,
    signed: Mutex<Vec<SubmissionRequest>>,
    listeners: Mutex<Vec<Arc<dyn WalletEventListener>>>,
}

impl MockWalletProvider {
    pub fn new(wallet_address: &str) -> Self {
        Self {
            available: true,
            trusted_address: Some(wallet_address.to_string()),
            ..Default::default()
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    pub fn failing_disconnect(mut self) -> Self {
        self.fail_disconnect = true;
        self
    }

    pub fn with_batch_signing(mut self) -> Self {
        self.supports_batch = true;
        self
    }

    /// Requests signed so far, in order.
    pub fn signed(&self) -> Vec<SubmissionRequest> {
        self.signed.lock().unwrap().clone()
    }

    /// Push an event to every subscribed listener.
    pub fn emit(&self, event: WalletEvent) {
        match &event {
            WalletEvent::Connected { address } => {
                *self.address.lock().unwrap() = Some(address.clone());
            }
            WalletEvent::Disconnected => {
                *self.address.lock().unwrap() = None;
            }
            WalletEvent::AccountChanged { address } => {
                *self.address.lock().unwrap() = address.clone();
            }
        }
        let listeners = self.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener.on_event(event.clone());
        }
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    fn is_available(&self) -> bool {
        self.available
    }

    fn address(&self) -> Option<String> {
        self.address.lock().unwrap().clone()
    }

    async fn connect(&self, _only_if_trusted: bool) -> Result<String> {
        if self.fail_connect {
            return Err(MintError::Provider("user rejected connection".to_string()));
        }
        let address = self
            .trusted_address
            .clone()
            .ok_or_else(|| MintError::Provider("no trusted session".to_string()))?;
        *self.address.lock().unwrap() = Some(address.clone());
        Ok(address)
    }

    async fn disconnect(&self) -> Result<()> {
        *self.address.lock().unwrap() = None;
        if self.fail_disconnect {
            return Err(MintError::Provider("provider disconnect failed".to_string()));
        }
        Ok(())
    }

    async fn sign(&self, request: &SubmissionRequest) -> Result<String> {
        self.signed.lock().unwrap().push(request.clone());
        Ok(format!("sig:{}", request.nft_mint))
    }

    async fn sign_all(&self, requests: &[SubmissionRequest]) -> Result<Vec<String>> {
        if !self.supports_batch {
            return Err(MintError::Provider(
                "batch signing not supported".to_string(),
            ));
        }
        let mut signatures = Vec::with_capacity(requests.len());
        for request in requests {
            signatures.push(self.sign(request).await?);
        }
        Ok(signatures)
    }

    fn subscribe(&self, listener: Arc<dyn WalletEventListener>) {
        self.listeners.lock().unwrap().push(listener);
    }
}
