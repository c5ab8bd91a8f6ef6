//! Core mint orchestration for the TONFANS candy-machine storefront.
//!
//! The crate owns everything between a rendering layer and the chain: tier
//! selection, wallet session handling, RPC endpoint failover, guard-group
//! resolution, readiness/pricing derivation and the sequential mint flow.
//! A renderer drives it through [`MintService`] and observes progress through
//! [`SessionSnapshot`] broadcasts; it never talks to a provider or an RPC
//! endpoint directly.

pub mod constants;
pub mod errors;
pub mod guards;
pub mod orchestrator;
pub mod prefs;
pub mod pricing;
pub mod rpc;
pub mod selection;
pub mod service;
pub mod store;
pub mod wallet;

pub use errors::{FailoverClass, MintError, Result};
pub use service::MintService;
pub use store::{HintSeverity, SessionSnapshot, SnapshotObserver};
