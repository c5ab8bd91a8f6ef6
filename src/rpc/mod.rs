//! Remote-call layer: wire models, JSON-RPC client, endpoint failover.

mod client;
mod endpoint;
mod models;

pub use client::{HttpLedgerClient, LedgerRpc};
pub use endpoint::{ClientFactory, EndpointPool};
pub use models::{MachineSnapshot, SignedSubmission, SubmissionReceipt, SubmissionRequest};
