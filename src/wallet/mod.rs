//! Wallet capability interface and session/identity bridge.

mod bridge;
mod provider;

pub use bridge::{abbr_address, SigningIdentity, WalletBridge};
pub use provider::{MockWalletProvider, WalletEvent, WalletEventListener, WalletProvider};
