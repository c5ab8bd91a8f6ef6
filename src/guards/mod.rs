//! Guard documents and guard-group resolution.

mod document;
mod resolver;

pub use document::{
    amount_from_value, mint_limit, payment_destination, payment_lamports, GuardDocument,
    GuardGroup, GuardSet, MintLimit,
};
pub use resolver::{candidate_labels, resolve_guards, ResolvedGuards};
