//! Tier selection and alias resolution.
//!
//! A tier is the user-facing name for one candy machine. Raw input arrives
//! from the rendering layer (button attributes, persisted preferences) and is
//! normalized through a fixed alias table; anything outside the table resolves
//! to `None`, never to a guessed tier.

use serde::{Deserialize, Serialize};

use crate::constants::{
    MACHINE_BIGGEN, MACHINE_BIGGEN_DIAMOND, MACHINE_LITTLEGEN, MACHINE_LITTLEGEN_DIAMOND,
};

/// The fixed set of mintable tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    LittleGen,
    BigGen,
    LittleGenDiamond,
    BigGenDiamond,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Tier::LittleGen,
        Tier::BigGen,
        Tier::LittleGenDiamond,
        Tier::BigGenDiamond,
    ];

    /// Canonical key, used as a guard-group candidate label.
    pub fn key(&self) -> &'static str {
        match self {
            Tier::LittleGen => "littlegen",
            Tier::BigGen => "biggen",
            Tier::LittleGenDiamond => "littlegen_diamond",
            Tier::BigGenDiamond => "biggen_diamond",
        }
    }

    /// Human-readable label for snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::LittleGen => "LittlGEN",
            Tier::BigGen => "BigGEN",
            Tier::LittleGenDiamond => "LittlGEN Diamond",
            Tier::BigGenDiamond => "BigGEN Diamond",
        }
    }

    /// Candy machine account backing this tier.
    pub fn machine_address(&self) -> &'static str {
        match self {
            Tier::LittleGen => MACHINE_LITTLEGEN,
            Tier::BigGen => MACHINE_BIGGEN,
            Tier::LittleGenDiamond => MACHINE_LITTLEGEN_DIAMOND,
            Tier::BigGenDiamond => MACHINE_BIGGEN_DIAMOND,
        }
    }
}

/// A resolved selection: canonical tier plus the raw input it came from.
///
/// The raw input is kept because guard-group labels may be keyed on the exact
/// string the storefront used, not the canonical key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub tier: Tier,
    pub raw: String,
    pub label: &'static str,
    pub machine_address: &'static str,
}

/// Resolve raw input into a [`Selection`].
///
/// Case-insensitive; tolerates underscore and dash separators and the legacy
/// "littlgen" spelling. Pure function, no side effects.
pub fn resolve(raw: &str) -> Option<Selection> {
    let normalized = raw.trim().to_ascii_lowercase();
    let tier = match normalized.as_str() {
        "littlgen" | "littlegen" => Tier::LittleGen,
        "biggen" => Tier::BigGen,
        "littlgen-diamond" | "littlegen-diamond" | "littlgen_diamond" | "littlegen_diamond" => {
            Tier::LittleGenDiamond
        }
        "biggen-diamond" | "biggen_diamond" => Tier::BigGenDiamond,
        _ => return None,
    };
    Some(Selection {
        tier,
        raw: raw.trim().to_string(),
        label: tier.label(),
        machine_address: tier.machine_address(),
    })
}
