//! Endpoint pool with one-way failover.
//!
//! The pool walks an ordered, fixed endpoint list. The active index only ever
//! moves forward within a session; a recovered endpoint earlier in the list is
//! never revisited. Each advance rebuilds the RPC client bound to the new
//! endpoint and emits an informational state update naming it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use log::warn;

use crate::constants::FAILOVER_PAUSE_MS;
use crate::errors::{FailoverClass, Result};
use crate::rpc::client::{HttpLedgerClient, LedgerRpc};
use crate::store::{HintSeverity, SessionStore};

/// Builds a client bound to one endpoint.
pub type ClientFactory = Box<dyn Fn(&str) -> Arc<dyn LedgerRpc> + Send + Sync>;

pub struct EndpointPool {
    endpoints: Vec<String>,
    active: Mutex<usize>,
    client: Mutex<Arc<dyn LedgerRpc>>,
    factory: ClientFactory,
    store: Arc<SessionStore>,
}

impl EndpointPool {
    /// Create a pool over a non-empty endpoint list.
    ///
    /// # Panics
    ///
    /// Panics if `endpoints` is empty; the endpoint list is build-time
    /// configuration, not user input.
    pub fn new(endpoints: Vec<String>, store: Arc<SessionStore>, factory: ClientFactory) -> Self {
        assert!(!endpoints.is_empty(), "endpoint list must not be empty");
        let client = Mutex::new(factory(&endpoints[0]));
        Self {
            endpoints,
            active: Mutex::new(0),
            client,
            factory,
            store,
        }
    }

    /// Pool backed by [`HttpLedgerClient`]s.
    pub fn http(endpoints: Vec<String>, store: Arc<SessionStore>) -> Self {
        Self::new(
            endpoints,
            store,
            Box::new(|endpoint| Arc::new(HttpLedgerClient::new(endpoint))),
        )
    }

    pub fn active_index(&self) -> usize {
        *self.active.lock().unwrap()
    }

    pub fn active_endpoint(&self) -> String {
        self.endpoints[self.active_index()].clone()
    }

    /// Client bound to the currently active endpoint.
    pub fn client(&self) -> Arc<dyn LedgerRpc> {
        self.client.lock().unwrap().clone()
    }

    /// Run `op` against the active endpoint, failing over on endpoint
    /// rejections and transport failures.
    ///
    /// Terminal errors propagate unchanged. Total attempts are bounded by the
    /// list length because every retry first advances the ratchet; once the
    /// last endpoint fails, the error propagates.
    pub async fn with_failover<T, F>(&self, op: F) -> Result<T>
    where
        F: Fn(Arc<dyn LedgerRpc>) -> BoxFuture<'static, Result<T>>,
    {
        loop {
            let client = self.client();
            let endpoint = client.endpoint().to_string();
            match op(client).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if err.failover_class() != FailoverClass::NextEndpoint {
                        return Err(err);
                    }
                    let Some(next) = self.advance() else {
                        return Err(err);
                    };
                    warn!(
                        "Endpoint {} rejected the request ({}), switching to {}",
                        endpoint, err, next
                    );
                    self.store.update(|state| {
                        state.endpoint = next.clone();
                        state.set_hint(
                            HintSeverity::Info,
                            format!("RPC endpoint unavailable, retrying via {}…", next),
                        );
                    });
                    tokio::time::sleep(Duration::from_millis(FAILOVER_PAUSE_MS)).await;
                }
            }
        }
    }

    /// Advance the ratchet and rebuild the client. `None` when already on the
    /// last endpoint.
    fn advance(&self) -> Option<String> {
        let mut active = self.active.lock().unwrap();
        if *active + 1 >= self.endpoints.len() {
            return None;
        }
        *active += 1;
        let endpoint = self.endpoints[*active].clone();
        *self.client.lock().unwrap() = (self.factory)(&endpoint);
        Some(endpoint)
    }
}
