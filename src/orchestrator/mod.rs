//! Mint submission building blocks: disposable signers and instruction
//! construction. The sequencing itself lives in [`crate::service`].

mod instruction;
mod signer;

pub use instruction::build_submission;
pub use signer::EphemeralSigner;
