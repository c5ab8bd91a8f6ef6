//! Readiness and pricing derivation.
//!
//! Lamport amounts stay integral until the single division by 10^9, done in
//! `Decimal` so large magnitudes keep full precision.

use rust_decimal::Decimal;

use crate::constants::LAMPORTS_PER_SOL;
use crate::guards::{payment_lamports, ResolvedGuards};

/// Price, readiness and the hint a renderer should show for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Readiness {
    /// Unit price in SOL. `None` when the guards carry no readable payment
    /// amount; downstream renders a placeholder, never zero.
    pub price_sol: Option<Decimal>,
    pub ready: bool,
    pub hint: String,
}

/// Exact lamports-to-SOL conversion.
pub fn lamports_to_sol(lamports: u64) -> Decimal {
    Decimal::from(lamports) / Decimal::from(LAMPORTS_PER_SOL)
}

/// Clamp a requested quantity to `[1, recommended_limit]`.
pub fn clamp_quantity(requested: u64, recommended_limit: u64) -> u64 {
    requested.clamp(1, recommended_limit.max(1))
}

/// Total cost for an effective quantity at a unit price.
pub fn total_sol(price_sol: Decimal, quantity: u64) -> Decimal {
    price_sol * Decimal::from(quantity)
}

/// Derive price and readiness from the remaining count and resolved guards.
///
/// Not ready when sold out (remaining is exactly zero) or when no usable
/// guard configuration was resolved. A present configuration without a
/// payment guard is still ready (a free mint), just without a price.
pub fn derive_readiness(remaining: u64, resolved: Option<&ResolvedGuards>) -> Readiness {
    let Some(resolved) = resolved else {
        return Readiness {
            price_sol: None,
            ready: false,
            hint: "No mint configuration found for this machine.".to_string(),
        };
    };

    let price_sol = payment_lamports(&resolved.guards).map(lamports_to_sol);

    if remaining == 0 {
        return Readiness {
            price_sol,
            ready: false,
            hint: "Sold out.".to_string(),
        };
    }

    let hint = match (&price_sol, &resolved.matched_label) {
        (Some(price), Some(label)) => format!("Ready: {} SOL each ({} phase).", price, label),
        (Some(price), None) => format!("Ready: {} SOL each.", price),
        (None, _) => "Ready. Price unavailable, check before minting.".to_string(),
    };

    Readiness {
        price_sol,
        ready: true,
        hint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guards::GuardSet;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn resolved_with_price(lamports: u64) -> ResolvedGuards {
        let mut guards = GuardSet::new();
        guards.insert("solPayment".to_string(), json!(lamports));
        ResolvedGuards {
            guards,
            matched_label: None,
        }
    }

    #[test]
    fn test_lamports_conversion_is_exact() {
        assert_eq!(lamports_to_sol(2_500_000_000), dec!(2.5));
        assert_eq!(lamports_to_sol(1), dec!(0.000000001));
        assert_eq!(lamports_to_sol(0), dec!(0));
    }

    #[test]
    fn test_large_magnitude_keeps_precision() {
        // u64::MAX lamports must not lose integer digits on the way through.
        let sol = lamports_to_sol(u64::MAX);
        assert_eq!(sol * Decimal::from(LAMPORTS_PER_SOL), Decimal::from(u64::MAX));
    }

    #[test]
    fn test_sold_out_is_never_ready() {
        let resolved = resolved_with_price(1_000_000_000);
        let readiness = derive_readiness(0, Some(&resolved));
        assert!(!readiness.ready);
        assert_eq!(readiness.price_sol, Some(dec!(1)));
    }

    #[test]
    fn test_remaining_with_price_is_ready() {
        let resolved = resolved_with_price(1_000_000_000);
        let readiness = derive_readiness(5, Some(&resolved));
        assert!(readiness.ready);
        assert_eq!(readiness.price_sol, Some(dec!(1)));
    }

    #[test]
    fn test_missing_configuration_is_not_ready() {
        let readiness = derive_readiness(5, None);
        assert!(!readiness.ready);
        assert!(readiness.price_sol.is_none());
    }

    #[test]
    fn test_missing_price_is_none_not_zero() {
        let resolved = ResolvedGuards::default();
        let readiness = derive_readiness(5, Some(&resolved));
        assert!(readiness.ready);
        assert_eq!(readiness.price_sol, None);
    }

    #[test]
    fn test_total_and_clamping() {
        assert_eq!(total_sol(dec!(1.0), clamp_quantity(3, 5)), dec!(3.0));
        // Requested 10 with a recommended limit of 3 uses 3.
        assert_eq!(clamp_quantity(10, 3), 3);
        assert_eq!(clamp_quantity(0, 3), 1);
        // A zero limit still permits a single unit.
        assert_eq!(clamp_quantity(2, 0), 1);
    }
}
