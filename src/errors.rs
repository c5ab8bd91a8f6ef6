//! Error types and failover classification for mint orchestration.
//!
//! Every error is classified into a [`FailoverClass`] via
//! [`failover_class`](MintError::failover_class), which tells the endpoint
//! pool whether advancing to the next RPC endpoint can help.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MintError>;

/// Errors produced by mint orchestration.
#[derive(Error, Debug)]
pub enum MintError {
    /// No wallet provider is present at the boundary.
    #[error("No wallet provider detected")]
    NoProvider,

    /// The raw tier input did not resolve to a known tier.
    #[error("Unknown tier selection: {0}")]
    SelectionUnresolved(String),

    /// The machine exists but has no guard configuration attached.
    /// Distinct from a guard document that resolves to an empty set.
    #[error("Machine {0} has no guard configuration attached")]
    RuleDocumentMissing(String),

    /// All items have been redeemed.
    #[error("Sold out: no items remaining")]
    SoldOut,

    /// The machine is ready but a mint precondition is not met.
    #[error("Mint is not ready")]
    NotReady,

    /// The active endpoint rejected or blocked the request.
    /// Never surfaced to the user unless the endpoint list is exhausted.
    #[error("Endpoint {endpoint} rejected the request: {message}")]
    TransientEndpoint {
        /// The endpoint that rejected the request
        endpoint: String,
        /// The rejection message
        message: String,
    },

    /// The machine account carries no collection mint or update authority.
    #[error("Machine {0} is missing collection metadata")]
    MissingCollectionMetadata(String),

    /// A submission was sent but failed or was never confirmed.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// A mutating operation was started while another one holds the busy flag.
    #[error("Another operation is in progress: {0}")]
    OperationInProgress(String),

    /// The wallet provider returned an error.
    #[error("Wallet provider error: {0}")]
    Provider(String),

    /// The endpoint answered with a non-transient RPC error.
    #[error("RPC error from {endpoint}: {message}")]
    Rpc {
        /// The endpoint that returned the error
        endpoint: String,
        /// The error message
        message: String,
    },

    /// A transport-level failure occurred before any response arrived.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// How the endpoint pool should react to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailoverClass {
    /// Advance the endpoint ratchet and retry.
    NextEndpoint,
    /// Propagate unchanged; another endpoint cannot help.
    Terminal,
}

impl MintError {
    /// Returns the failover classification for this error.
    ///
    /// Endpoint rejections and transport failures are worth retrying against
    /// the next endpoint in the list; everything else is terminal.
    pub fn failover_class(&self) -> FailoverClass {
        match self {
            Self::TransientEndpoint { .. } | Self::Network(_) => FailoverClass::NextEndpoint,
            _ => FailoverClass::Terminal,
        }
    }

    /// True when an RPC rejection message names an access-denial condition.
    ///
    /// Used by the RPC client to decide between [`MintError::TransientEndpoint`]
    /// and [`MintError::Rpc`].
    pub fn is_rejection_message(message: &str) -> bool {
        let lower = message.to_ascii_lowercase();
        ["forbidden", "rejected", "blocked", "access denied", "rate limit"]
            .iter()
            .any(|needle| lower.contains(needle))
    }
}
