//! Property-based tests using `proptest` for the AMM invariants.
//!
//! 1. **Bounded output** — a priced swap always pays `0 < out < reserve_out`.
//! 2. **Invariant preservation** — `k` never decreases across a fee-bearing
//!    swap.
//! 3. **Determinism** — identical inputs price identically.
//! 4. **Impact monotonicity** — more input, strictly more price impact.
//! 5. **Round trip** — deposit then full withdrawal never pays out more
//!    than went in.
//! 6. **Exact-out sufficiency** — the computed input buys at least the
//!    requested output.

use proptest::prelude::*;
use rust_decimal::Decimal;
use teadex_types::Reserves;

use crate::liquidity::{lp_minted, withdrawal_amounts};
use crate::swap::{amount_in_for_exact_out, price_impact_pct, swap_exact_in};
use crate::DEFAULT_FEE_BPS;

/// Reserves large enough to quote against, small enough that cross
/// products stay far from the u128 edge.
fn reserve() -> impl Strategy<Value = u128> {
    1_000u128..1_000_000_000_000u128
}

fn trade_amount() -> impl Strategy<Value = u128> {
    1_000u128..1_000_000_000u128
}

proptest! {
    #[test]
    fn swap_output_is_bounded(
        amount_in in trade_amount(),
        r_in in reserve(),
        r_out in reserve(),
    ) {
        let quote = swap_exact_in(amount_in, r_in, r_out, DEFAULT_FEE_BPS);
        prop_assume!(quote.is_ok());
        let quote = quote.unwrap();
        prop_assert!(quote.amount_out > 0);
        prop_assert!(quote.amount_out < r_out);
    }

    #[test]
    fn swap_preserves_invariant(
        amount_in in trade_amount(),
        r_in in reserve(),
        r_out in reserve(),
    ) {
        let quote = swap_exact_in(amount_in, r_in, r_out, DEFAULT_FEE_BPS);
        prop_assume!(quote.is_ok());
        let quote = quote.unwrap();

        // The ranges above keep both products inside u128, so the check
        // is exact.
        let k_before = r_in * r_out;
        let k_after = (r_in + quote.net_in) * (r_out - quote.amount_out);
        prop_assert!(k_after >= k_before);
    }

    #[test]
    fn swap_is_deterministic(
        amount_in in trade_amount(),
        r_in in reserve(),
        r_out in reserve(),
    ) {
        let first = swap_exact_in(amount_in, r_in, r_out, DEFAULT_FEE_BPS);
        let second = swap_exact_in(amount_in, r_in, r_out, DEFAULT_FEE_BPS);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn impact_is_monotonic_in_trade_size(
        pct_of_pool in 1u128..100u128,
        r_in in 100_000_000u128..1_000_000_000_000u128,
        r_out in 100_000_000u128..1_000_000_000_000u128,
    ) {
        // Trade sizes scale with the pool (0.1%..10% of reserve_in) so the
        // true impact growth dwarfs integer-flooring noise.
        let amount_in = r_in * pct_of_pool / 1_000;
        let small = swap_exact_in(amount_in, r_in, r_out, DEFAULT_FEE_BPS);
        let large = swap_exact_in(amount_in * 2, r_in, r_out, DEFAULT_FEE_BPS);
        prop_assume!(small.is_ok() && large.is_ok());
        let small = small.unwrap();
        let large = large.unwrap();

        let small_impact =
            price_impact_pct(small.amount_in, small.amount_out, r_in, r_out).unwrap();
        let large_impact =
            price_impact_pct(large.amount_in, large.amount_out, r_in, r_out).unwrap();

        prop_assert!(small_impact >= Decimal::ZERO);
        prop_assert!(large_impact > small_impact);
    }

    #[test]
    fn deposit_withdraw_round_trip_never_overpays(
        amount_a in 1_000u128..1_000_000_000u128,
        amount_b in 1_000u128..1_000_000_000u128,
        r0 in reserve(),
        r1 in reserve(),
        supply in reserve(),
    ) {
        let reserves = Reserves::new(r0, r1, supply).unwrap();
        let minted = lp_minted(amount_a, amount_b, &reserves);
        prop_assume!(minted.is_ok());
        let minted = minted.unwrap();

        let after = Reserves::new(r0 + amount_a, r1 + amount_b, supply + minted).unwrap();
        let (out_a, out_b) = withdrawal_amounts(minted, &after).unwrap();
        prop_assert!(out_a <= amount_a);
        prop_assert!(out_b <= amount_b);
    }

    #[test]
    fn exact_out_input_is_sufficient(
        r_in in reserve(),
        r_out in reserve(),
        out_frac in 1u128..500u128,
    ) {
        // Request up to half the output reserve.
        let amount_out = r_out * out_frac / 1_000;
        prop_assume!(amount_out > 0);

        let inverse = amount_in_for_exact_out(amount_out, r_in, r_out, DEFAULT_FEE_BPS);
        prop_assume!(inverse.is_ok());
        let inverse = inverse.unwrap();

        let forward = swap_exact_in(inverse.amount_in, r_in, r_out, DEFAULT_FEE_BPS).unwrap();
        prop_assert!(forward.amount_out >= amount_out);
    }
}
