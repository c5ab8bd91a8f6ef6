//! Wire models exchanged with the ledger RPC gateway.

use serde::{Deserialize, Serialize};

use crate::guards::MintLimit;

/// On-chain state of one candy machine, fetched per refresh/mint cycle.
/// Immutable once fetched; never cached across cycles.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSnapshot {
    pub address: String,
    pub items_available: u64,
    pub items_redeemed: u64,
    /// Authority controlling minting rules; guard documents hang off it.
    pub mint_authority: String,
    #[serde(default)]
    pub collection_mint: Option<String>,
    #[serde(default)]
    pub collection_update_authority: Option<String>,
}

impl MachineSnapshot {
    pub fn items_remaining(&self) -> u64 {
        self.items_available.saturating_sub(self.items_redeemed)
    }
}

/// One unsigned mint submission, bound to a machine and a fresh nft mint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub machine_address: String,
    /// Wallet paying for and receiving the mint.
    pub payer: String,
    /// Disposable signer address for the new nft mint account.
    pub nft_mint: String,
    pub collection_mint: String,
    pub collection_update_authority: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint_limit: Option<MintLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_destination: Option<String>,
    /// Compute-budget directive bundled ahead of the mint instruction.
    pub compute_unit_limit: u32,
}

/// A submission plus the signatures collected for it (disposable signer
/// first, then the wallet).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedSubmission {
    pub request: SubmissionRequest,
    pub signatures: Vec<String>,
}

/// Confirmation receipt for one submission.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub signature: String,
    pub confirmed: bool,
}
