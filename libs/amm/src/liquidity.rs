//! Liquidity-provider share accounting.
//!
//! The first deposit into an empty pool mints `sqrt(amount_a * amount_b)`
//! LP tokens, fixing the initial exchange rate. Subsequent deposits mint
//! proportionally to the smaller side, `min(da * S / Ra, db * S / Rb)`, and
//! withdrawals pay out `reserve * lp / S` floored on both sides so the pool
//! is never overpaid from reserves.

use crate::error::AmmError;
use crate::BPS_DENOMINATOR;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use teadex_types::Reserves;

/// Integer square root via Newton's method.
pub fn isqrt(n: u128) -> u128 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// LP tokens minted by the pool-initializing deposit: the geometric mean
/// of the two amounts.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either amount is zero, or the deposit
///   is too small to mint a single LP unit.
/// - [`AmmError::Overflow`] if `amount_a * amount_b` exceeds `u128`.
pub fn initial_lp_minted(amount_a: u128, amount_b: u128) -> Result<u128, AmmError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::InvalidAmount("first deposit requires both tokens"));
    }
    let product = amount_a
        .checked_mul(amount_b)
        .ok_or(AmmError::Overflow("initial deposit product"))?;
    let minted = isqrt(product);
    if minted == 0 {
        return Err(AmmError::InvalidAmount("deposit too small to mint liquidity"));
    }
    Ok(minted)
}

/// LP tokens minted by a deposit into a live pool: proportional to the
/// smaller of the two sides, floored.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either amount is zero or the deposit
///   floors to zero LP units.
/// - [`AmmError::InsufficientLiquidity`] for an empty pool or one with a
///   drained side.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
pub fn proportional_lp_minted(
    amount_a: u128,
    amount_b: u128,
    reserves: &Reserves,
) -> Result<u128, AmmError> {
    if amount_a == 0 || amount_b == 0 {
        return Err(AmmError::InvalidAmount("deposit requires both tokens"));
    }
    // A drained side leaves no ratio to deposit against.
    if reserves.is_empty() || reserves.reserve0() == 0 || reserves.reserve1() == 0 {
        return Err(AmmError::InsufficientLiquidity);
    }

    let supply = reserves.total_supply();
    let share_a = amount_a
        .checked_mul(supply)
        .ok_or(AmmError::Overflow("deposit share numerator"))?
        / reserves.reserve0();
    let share_b = amount_b
        .checked_mul(supply)
        .ok_or(AmmError::Overflow("deposit share numerator"))?
        / reserves.reserve1();

    let minted = share_a.min(share_b);
    if minted == 0 {
        return Err(AmmError::InvalidAmount("deposit too small to mint liquidity"));
    }
    Ok(minted)
}

/// LP tokens minted by a deposit, dispatching on pool emptiness.
pub fn lp_minted(amount_a: u128, amount_b: u128, reserves: &Reserves) -> Result<u128, AmmError> {
    if reserves.is_empty() {
        initial_lp_minted(amount_a, amount_b)
    } else {
        proportional_lp_minted(amount_a, amount_b, reserves)
    }
}

/// Pool share owned after minting, as a percentage of the post-deposit
/// supply: `minted / (supply_before + minted) * 100`.
pub fn pool_share_pct(minted: u128, supply_before: u128) -> Result<Decimal, AmmError> {
    if minted == 0 {
        return Err(AmmError::InvalidAmount("no liquidity minted"));
    }
    let supply_after = supply_before
        .checked_add(minted)
        .ok_or(AmmError::Overflow("post-deposit supply"))?;

    let minted = i128::try_from(minted).map_err(|_| AmmError::Overflow("pool share"))?;
    let supply_after =
        i128::try_from(supply_after).map_err(|_| AmmError::Overflow("pool share"))?;

    let minted = Decimal::try_from_i128_with_scale(minted, 0)
        .map_err(|_| AmmError::Overflow("pool share"))?;
    let supply_after = Decimal::try_from_i128_with_scale(supply_after, 0)
        .map_err(|_| AmmError::Overflow("pool share"))?;

    Ok(minted / supply_after * dec!(100))
}

/// Deviation of a deposit's ratio from the pool's ratio, in basis points.
///
/// Compares the cross products `amount_a * reserve1` and `amount_b *
/// reserve0`; zero means the deposit matches the pool ratio exactly.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] for an empty pool (no ratio to
///   compare against).
/// - [`AmmError::Overflow`] if a cross product exceeds `u128`.
pub fn ratio_deviation_bps(
    amount_a: u128,
    amount_b: u128,
    reserves: &Reserves,
) -> Result<u128, AmmError> {
    if reserves.is_empty() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let lhs = amount_a
        .checked_mul(reserves.reserve1())
        .ok_or(AmmError::Overflow("ratio cross product"))?;
    let rhs = amount_b
        .checked_mul(reserves.reserve0())
        .ok_or(AmmError::Overflow("ratio cross product"))?;

    let (larger, diff) = if lhs >= rhs {
        (lhs, lhs - rhs)
    } else {
        (rhs, rhs - lhs)
    };
    if larger == 0 {
        return Err(AmmError::InvalidAmount("deposit requires both tokens"));
    }

    diff.checked_mul(BPS_DENOMINATOR)
        .map(|scaled| scaled / larger)
        .ok_or(AmmError::Overflow("ratio deviation"))
}

/// Token amounts returned for burning `lp_amount` LP tokens, floored on
/// both sides.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] for a zero burn.
/// - [`AmmError::InsufficientLiquidity`] for an empty pool or a burn
///   exceeding the outstanding supply.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
pub fn withdrawal_amounts(lp_amount: u128, reserves: &Reserves) -> Result<(u128, u128), AmmError> {
    if lp_amount == 0 {
        return Err(AmmError::InvalidAmount("burn amount is zero"));
    }
    if reserves.is_empty() || lp_amount > reserves.total_supply() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let supply = reserves.total_supply();
    let amount0 = reserves
        .reserve0()
        .checked_mul(lp_amount)
        .ok_or(AmmError::Overflow("withdrawal numerator"))?
        / supply;
    let amount1 = reserves
        .reserve1()
        .checked_mul(lp_amount)
        .ok_or(AmmError::Overflow("withdrawal numerator"))?
        / supply;

    Ok((amount0, amount1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live_pool() -> Reserves {
        Reserves::new(1_000, 2_000, 1_000).unwrap()
    }

    #[test]
    fn isqrt_matches_known_roots() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(40_000), 200);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(u128::MAX), (1 << 64) - 1);
    }

    #[test]
    fn first_deposit_mints_geometric_mean() {
        // sqrt(100 * 400) = 200, share = 100%.
        let minted = lp_minted(100, 400, &Reserves::EMPTY).unwrap();
        assert_eq!(minted, 200);
        assert_eq!(pool_share_pct(minted, 0).unwrap(), dec!(100));
    }

    #[test]
    fn proportional_deposit_mints_min_side() {
        // 10% of a 1000:2000 pool with supply 1000 -> 100 LP, ~9.09% share.
        let minted = lp_minted(100, 200, &live_pool()).unwrap();
        assert_eq!(minted, 100);

        let share = pool_share_pct(minted, 1_000).unwrap();
        assert!((share - dec!(9.0909)).abs() < dec!(0.001));
    }

    #[test]
    fn lopsided_deposit_mints_smaller_side() {
        // Excess token B is ignored by the min rule.
        let minted = lp_minted(100, 1_000, &live_pool()).unwrap();
        assert_eq!(minted, 100);
    }

    #[test]
    fn one_sided_reserves_reject_deposits_without_panicking() {
        // A drained side passes the constructor (supply can outlive one
        // reserve) but offers no ratio; minting must fail, not divide by
        // zero.
        let drained0 = Reserves::new(0, 1_500, 10).unwrap();
        let drained1 = Reserves::new(1_500, 0, 10).unwrap();
        assert_eq!(
            proportional_lp_minted(100, 200, &drained0),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            proportional_lp_minted(100, 200, &drained1),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            lp_minted(100, 200, &drained0),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn rejects_zero_amounts() {
        assert!(lp_minted(0, 400, &Reserves::EMPTY).is_err());
        assert!(lp_minted(100, 0, &live_pool()).is_err());
    }

    #[test]
    fn ratio_deviation_is_zero_for_matched_deposits() {
        assert_eq!(ratio_deviation_bps(100, 200, &live_pool()).unwrap(), 0);
        // 210 vs the expected 200 on side B: 210*1000 vs 200*1000 raw cross
        // products -> ~4.76% deviation.
        let dev = ratio_deviation_bps(100, 210, &live_pool()).unwrap();
        assert_eq!(dev, 476);
    }

    #[test]
    fn withdrawal_pays_proportional_floored_amounts() {
        let reserves = Reserves::new(1_000, 2_000, 1_000).unwrap();
        assert_eq!(withdrawal_amounts(100, &reserves).unwrap(), (100, 200));
        // Full burn drains the pool exactly.
        assert_eq!(withdrawal_amounts(1_000, &reserves).unwrap(), (1_000, 2_000));
        // Flooring: fractional shares round down on both sides.
        let odd = Reserves::new(1_000, 1_999, 999).unwrap();
        let (a, b) = withdrawal_amounts(100, &odd).unwrap();
        assert_eq!((a, b), (100, 200));
    }

    #[test]
    fn withdrawal_rejects_overdraw_and_empty_pool() {
        assert_eq!(
            withdrawal_amounts(1_001, &live_pool()),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            withdrawal_amounts(1, &Reserves::EMPTY),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            withdrawal_amounts(0, &live_pool()),
            Err(AmmError::InvalidAmount("burn amount is zero"))
        );
    }

    #[test]
    fn deposit_then_withdraw_never_overpays() {
        let reserves = live_pool();
        let minted = lp_minted(100, 200, &reserves).unwrap();

        let after = Reserves::new(
            reserves.reserve0() + 100,
            reserves.reserve1() + 200,
            reserves.total_supply() + minted,
        )
        .unwrap();

        let (out_a, out_b) = withdrawal_amounts(minted, &after).unwrap();
        assert!(out_a <= 100);
        assert!(out_b <= 200);
    }
}
