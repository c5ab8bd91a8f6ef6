//! Session state model and snapshot types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::selection::Tier;

/// Severity class attached to the last hint message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintSeverity {
    Info,
    Ok,
    Warn,
    Error,
}

/// The single source of truth for everything a renderer shows.
///
/// Owned exclusively by [`SessionStore`](super::SessionStore); every other
/// component mutates it through the store and receives read-only clones.
#[derive(Clone, Debug, Serialize)]
pub struct SessionState {
    /// Cluster identifier ("devnet", "mainnet-beta").
    pub cluster: String,
    /// RPC endpoint currently targeted by the failover ratchet.
    pub endpoint: String,
    pub tier: Option<Tier>,
    /// Raw input the current tier was resolved from.
    pub tier_raw: Option<String>,
    pub machine_address: Option<String>,
    /// Guard group label matched during the last refresh, if any.
    pub matched_group: Option<String>,
    pub connected: bool,
    /// Short-form wallet address ("9mG7…TJtD").
    pub address_short: Option<String>,
    pub ready: bool,
    /// Unit price in SOL. `None` renders as a placeholder, never as zero.
    pub price_sol: Option<Decimal>,
    pub total_sol: Option<Decimal>,
    pub remaining: Option<u64>,
    pub available: Option<u64>,
    pub redeemed: Option<u64>,
    pub busy: bool,
    pub busy_label: Option<String>,
    pub hint: String,
    pub hint_severity: HintSeverity,
}

/// Immutable snapshot broadcast to observers. Cloning the state deep-copies
/// every owned field, so a snapshot never aliases store internals.
pub type SessionSnapshot = SessionState;

impl SessionState {
    pub fn new(cluster: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            endpoint: endpoint.into(),
            tier: None,
            tier_raw: None,
            machine_address: None,
            matched_group: None,
            connected: false,
            address_short: None,
            ready: false,
            price_sol: None,
            total_sol: None,
            remaining: None,
            available: None,
            redeemed: None,
            busy: false,
            busy_label: None,
            hint: "Select a tier and connect a wallet to mint.".to_string(),
            hint_severity: HintSeverity::Info,
        }
    }

    /// Replace the hint message and its severity.
    pub fn set_hint(&mut self, severity: HintSeverity, message: impl Into<String>) {
        self.hint = message.into();
        self.hint_severity = severity;
    }
}
