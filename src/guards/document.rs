//! Guard document model and typed guard accessors.
//!
//! A guard document is the remote configuration attached to a machine: a base
//! guard set plus an ordered list of labeled groups, each overriding the base.
//! Guard values stay as raw JSON; the accessors below extract the handful of
//! values orchestration needs, tolerating the encodings different deployment
//! tools emit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One guard rule-set, keyed by guard name ("solPayment", "mintLimit", ...).
pub type GuardSet = BTreeMap<String, Value>;

/// Remote guard configuration: base set plus labeled override groups.
/// Immutable once fetched; discarded after each resolution cycle.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GuardDocument {
    #[serde(default)]
    pub default: GuardSet,
    #[serde(default)]
    pub groups: Vec<GuardGroup>,
}

/// A named override scope within a guard document.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GuardGroup {
    pub label: String,
    #[serde(default)]
    pub guards: GuardSet,
}

/// Per-wallet mint cap carried by a "mintLimit" guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintLimit {
    /// Guard id disambiguating multiple limits on one machine.
    pub id: u8,
    pub limit: u64,
}

/// Extract an integer lamport amount from a guard value.
///
/// Tolerated encodings: a bare number, a string-encoded integer, a
/// `{"value": n}` wrapper, and structured amounts carrying `lamports` or
/// `basisPoints` (possibly nested under `amount`). Arithmetic stays integral;
/// no float conversion happens here.
pub fn amount_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse::<u64>().ok(),
        Value::Object(map) => {
            for key in ["value", "lamports", "basisPoints"] {
                if let Some(found) = map.get(key).and_then(amount_from_value) {
                    return Some(found);
                }
            }
            map.get("amount").and_then(amount_from_value)
        }
        _ => None,
    }
}

/// Payment amount in lamports, if the set carries a payment guard with a
/// readable amount.
pub fn payment_lamports(guards: &GuardSet) -> Option<u64> {
    guards.get("solPayment").and_then(amount_from_value)
}

/// Explicit treasury destination on the payment guard, if present.
pub fn payment_destination(guards: &GuardSet) -> Option<String> {
    guards
        .get("solPayment")?
        .get("destination")?
        .as_str()
        .map(str::to_string)
}

/// Per-wallet mint limit, if the set carries one with both id and limit.
pub fn mint_limit(guards: &GuardSet) -> Option<MintLimit> {
    let guard = guards.get("mintLimit")?;
    let id = guard.get("id")?.as_u64()?;
    let limit = guard.get("limit")?.as_u64()?;
    Some(MintLimit {
        id: u8::try_from(id).ok()?,
        limit,
    })
}
