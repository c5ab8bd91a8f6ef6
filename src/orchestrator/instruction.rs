//! Submission instruction construction.

use crate::constants::{COMPUTE_UNIT_LIMIT, TREASURY_DESTINATION};
use crate::errors::{MintError, Result};
use crate::guards::{payment_destination, payment_lamports, ResolvedGuards};
use crate::rpc::{MachineSnapshot, SubmissionRequest};

/// Build one mint submission bound to the machine, its collection authority
/// fields, the resolved group label and the mint-limit argument.
///
/// The machine must carry collection metadata; minting into a machine without
/// it would orphan the new nft.
pub fn build_submission(
    machine: &MachineSnapshot,
    payer: &str,
    nft_mint: &str,
    resolved: &ResolvedGuards,
) -> Result<SubmissionRequest> {
    let collection_mint = machine
        .collection_mint
        .clone()
        .ok_or_else(|| MintError::MissingCollectionMetadata(machine.address.clone()))?;
    let collection_update_authority = machine
        .collection_update_authority
        .clone()
        .ok_or_else(|| MintError::MissingCollectionMetadata(machine.address.clone()))?;

    // Only attach a payment argument when the guards actually charge one.
    let payment = payment_lamports(&resolved.guards).map(|_| {
        payment_destination(&resolved.guards).unwrap_or_else(|| TREASURY_DESTINATION.to_string())
    });

    Ok(SubmissionRequest {
        machine_address: machine.address.clone(),
        payer: payer.to_string(),
        nft_mint: nft_mint.to_string(),
        collection_mint,
        collection_update_authority,
        group_label: resolved.matched_label.clone(),
        mint_limit: resolved.mint_limit(),
        payment_destination: payment,
        compute_unit_limit: COMPUTE_UNIT_LIMIT,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::{GuardSet, MintLimit};
    use serde_json::json;

    fn make_machine(with_collection: bool) -> MachineSnapshot {
        MachineSnapshot {
            address: "Hr9Y".to_string(),
            items_available: 501,
            items_redeemed: 9,
            mint_authority: "Auth1".to_string(),
            collection_mint: with_collection.then(|| "Coll1".to_string()),
            collection_update_authority: with_collection.then(|| "Upd1".to_string()),
        }
    }

    fn make_resolved(label: Option<&str>) -> ResolvedGuards {
        let mut guards = GuardSet::new();
        guards.insert("solPayment".to_string(), json!(1_000_000_000u64));
        guards.insert("mintLimit".to_string(), json!({ "id": 1, "limit": 3 }));
        ResolvedGuards {
            guards,
            matched_label: label.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_collection_metadata_fails() {
        let machine = make_machine(false);
        let result = build_submission(&machine, "payer", "mint", &make_resolved(None));
        assert!(matches!(
            result,
            Err(MintError::MissingCollectionMetadata(address)) if address == "Hr9Y"
        ));
    }

    #[test]
    fn test_submission_binds_group_and_limit() {
        let machine = make_machine(true);
        let request = build_submission(&machine, "payer", "mint", &make_resolved(Some("vip")))
            .unwrap();
        assert_eq!(request.group_label.as_deref(), Some("vip"));
        assert_eq!(request.mint_limit, Some(MintLimit { id: 1, limit: 3 }));
        assert_eq!(request.compute_unit_limit, COMPUTE_UNIT_LIMIT);
        assert_eq!(
            request.payment_destination.as_deref(),
            Some(TREASURY_DESTINATION)
        );
    }

    #[test]
    fn test_free_mint_has_no_payment_destination() {
        let machine = make_machine(true);
        let resolved = ResolvedGuards::default();
        let request = build_submission(&machine, "payer", "mint", &resolved).unwrap();
        assert!(request.payment_destination.is_none());
        assert!(request.mint_limit.is_none());
    }

    #[test]
    fn test_explicit_destination_wins_over_treasury() {
        let machine = make_machine(true);
        let mut guards = GuardSet::new();
        guards.insert(
            "solPayment".to_string(),
            json!({ "value": 500_000_000u64, "destination": "CustomDest" }),
        );
        let resolved = ResolvedGuards {
            guards,
            matched_label: None,
        };
        let request = build_submission(&machine, "payer", "mint", &resolved).unwrap();
        assert_eq!(request.payment_destination.as_deref(), Some("CustomDest"));
    }
}
