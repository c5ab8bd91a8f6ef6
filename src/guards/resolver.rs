//! Guard resolution: candidate-label generation and ordered matching.
//!
//! Candidates are scanned most-specific-first and the scan order is the
//! candidate order, not the document order. A specific label ("vip") wins even
//! when a generic fallback group ("default") appears earlier in the document.

use crate::constants::{DEFAULT_RECOMMENDED_LIMIT, FALLBACK_GROUP_LABEL};
use crate::guards::document::{mint_limit, GuardDocument, GuardSet, MintLimit};
use crate::selection::Tier;

/// Result of merging the base guard set with the first matching group.
#[derive(Clone, Debug, Default)]
pub struct ResolvedGuards {
    pub guards: GuardSet,
    pub matched_label: Option<String>,
}

impl ResolvedGuards {
    /// Per-wallet mint limit carried by the merged set, if any.
    pub fn mint_limit(&self) -> Option<MintLimit> {
        mint_limit(&self.guards)
    }

    /// Quantity cap for a single mint call: the guard limit when present,
    /// otherwise the default.
    pub fn recommended_limit(&self) -> u64 {
        self.mint_limit()
            .map(|limit| limit.limit)
            .unwrap_or(DEFAULT_RECOMMENDED_LIMIT)
    }
}

/// Build the ordered candidate-label list for guard-group matching.
///
/// Most specific first: the exact raw selection, its underscore-normalized
/// variant, the canonical tier key, then the universal fallback. Duplicates
/// are dropped while preserving first-seen order, so resolution is
/// deterministic for a given raw/tier pair.
pub fn candidate_labels(raw: Option<&str>, tier: Option<Tier>) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::with_capacity(4);
    let mut push = |label: String| {
        if !label.is_empty() && !candidates.contains(&label) {
            candidates.push(label);
        }
    };

    if let Some(raw) = raw {
        let trimmed = raw.trim();
        push(trimmed.to_string());
        push(trimmed.to_ascii_lowercase().replace('-', "_"));
    }
    if let Some(tier) = tier {
        push(tier.key().to_string());
    }
    push(FALLBACK_GROUP_LABEL.to_string());
    candidates
}

/// Resolve the applicable guard set for a candidate-label list.
///
/// Scans `candidates` in order and merges the base set with the first group
/// whose label exactly equals a candidate. The merge is shallow: an override
/// key replaces the base key entirely. No match returns the base set alone.
pub fn resolve_guards(document: &GuardDocument, candidates: &[String]) -> ResolvedGuards {
    for candidate in candidates {
        if let Some(group) = document.groups.iter().find(|g| &g.label == candidate) {
            let mut guards = document.default.clone();
            for (key, value) in &group.guards {
                guards.insert(key.clone(), value.clone());
            }
            return ResolvedGuards {
                guards,
                matched_label: Some(group.label.clone()),
            };
        }
    }
    ResolvedGuards {
        guards: document.default.clone(),
        matched_label: None,
    }
}
