//! The quote facade: validation, orientation, and delegation.

use crate::config::{ConfigError, QuoterConfig};
use crate::error::QuoteError;
use crate::quotes::{DepositQuote, SwapQuote, WithdrawalQuote};
use crate::LP_TOKEN_DECIMALS;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use teadex_amm::{
    lp_minted, pool_share_pct, price_impact_pct, ratio_deviation_bps, swap_exact_in,
    withdrawal_amounts, AmmError, BPS_DENOMINATOR,
};
use teadex_state::ReserveStore;
use teadex_types::{format_amount, parse_amount, parse_balance, to_decimal, Pair, Token};
use tracing::{debug, warn};

/// Price impact above which a quote is logged as high, mirroring the
/// warning threshold the UI renders at.
const HIGH_IMPACT_PCT: Decimal = dec!(5);

/// The engine's single entry point for presentation code.
///
/// Holds the reserve store and configuration explicitly; cloning the
/// `Arc`-wrapped store is cheap, and a `Quoter` can be shared freely across
/// threads since every operation is a pure read.
#[derive(Debug)]
pub struct Quoter {
    store: Arc<ReserveStore>,
    config: QuoterConfig,
}

impl Quoter {
    /// Creates a quoter over the given store, validating the config.
    pub fn new(store: Arc<ReserveStore>, config: QuoterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { store, config })
    }

    pub const fn config(&self) -> &QuoterConfig {
        &self.config
    }

    fn resolve_slippage(&self, slippage_bps: Option<u32>) -> Result<u32, QuoteError> {
        let bps = slippage_bps.unwrap_or(self.config.default_slippage_bps);
        if bps > self.config.max_slippage_bps {
            return Err(QuoteError::InvalidSlippage(bps));
        }
        Ok(bps)
    }

    /// Quotes a swap of `amount_in` (a decimal string in the input token's
    /// precision) from `from` to `to`.
    ///
    /// `slippage_bps` bounds the minimum received; `None` uses the
    /// configured default.
    pub fn quote_swap(
        &self,
        from: &Token,
        to: &Token,
        amount_in: &str,
        slippage_bps: Option<u32>,
    ) -> Result<SwapQuote, QuoteError> {
        let slippage_bps = self.resolve_slippage(slippage_bps)?;
        let pair = Pair::new(from.clone(), to.clone())?;
        let amount_in_raw = parse_amount(amount_in, from.decimals())?;

        let reserves = self
            .store
            .get(&pair.key())
            .map_err(|_| QuoteError::PairNotFound(pair.key()))?;
        if reserves.is_empty() {
            return Err(QuoteError::InsufficientLiquidity);
        }

        let (reserve_in, reserve_out) = reserves.oriented(pair.is_token0(from.address()));
        let breakdown = swap_exact_in(amount_in_raw, reserve_in, reserve_out, self.config.fee_bps)?;

        let minimum_received = breakdown
            .amount_out
            .checked_mul(BPS_DENOMINATOR - u128::from(slippage_bps))
            .ok_or(QuoteError::Math(AmmError::Overflow("minimum received")))?
            / BPS_DENOMINATOR;

        let rate_err = |_| QuoteError::Math(AmmError::Overflow("rate conversion"));
        let in_dec = to_decimal(breakdown.amount_in, from.decimals()).map_err(rate_err)?;
        let out_dec = to_decimal(breakdown.amount_out, to.decimals()).map_err(rate_err)?;
        let reserve_in_dec = to_decimal(reserve_in, from.decimals()).map_err(rate_err)?;
        let reserve_out_dec = to_decimal(reserve_out, to.decimals()).map_err(rate_err)?;

        let effective_rate = out_dec / in_dec;
        let spot_rate = reserve_out_dec / reserve_in_dec;
        let price_impact =
            price_impact_pct(breakdown.amount_in, breakdown.amount_out, reserve_in, reserve_out)?;

        if price_impact > HIGH_IMPACT_PCT {
            warn!(
                from = from.symbol(),
                to = to.symbol(),
                %price_impact,
                "swap quote with high price impact"
            );
        }
        debug!(
            from = from.symbol(),
            to = to.symbol(),
            amount_in = breakdown.amount_in,
            amount_out = breakdown.amount_out,
            fee = breakdown.fee,
            "swap quoted"
        );

        Ok(SwapQuote {
            amount_in: breakdown.amount_in,
            amount_out: breakdown.amount_out,
            fee: breakdown.fee,
            minimum_received,
            slippage_bps,
            effective_rate,
            spot_rate,
            price_impact_pct: price_impact,
            amount_out_display: format_amount(breakdown.amount_out, to.decimals()),
            minimum_received_display: format_amount(minimum_received, to.decimals()),
        })
    }

    /// Quotes a liquidity deposit of `amount_a` of `token_a` and
    /// `amount_b` of `token_b` (decimal strings).
    ///
    /// The first deposit into an empty pool sets the exchange rate and
    /// skips the ratio check; later deposits must match the pool ratio
    /// within the configured tolerance.
    pub fn quote_deposit(
        &self,
        token_a: &Token,
        token_b: &Token,
        amount_a: &str,
        amount_b: &str,
    ) -> Result<DepositQuote, QuoteError> {
        let pair = Pair::new(token_a.clone(), token_b.clone())?;
        let amount_a_raw = parse_amount(amount_a, token_a.decimals())?;
        let amount_b_raw = parse_amount(amount_b, token_b.decimals())?;

        // Reorder into the pair's canonical orientation.
        let (amount0, amount1) = if pair.is_token0(token_a.address()) {
            (amount_a_raw, amount_b_raw)
        } else {
            (amount_b_raw, amount_a_raw)
        };

        let reserves = self
            .store
            .get(&pair.key())
            .map_err(|_| QuoteError::PairNotFound(pair.key()))?;

        let initializes_pool = reserves.is_empty();
        if !initializes_pool {
            let deviation_bps = ratio_deviation_bps(amount0, amount1, &reserves)?;
            if deviation_bps > u128::from(self.config.ratio_tolerance_bps) {
                return Err(QuoteError::RatioMismatch {
                    deviation_bps,
                    tolerance_bps: self.config.ratio_tolerance_bps,
                });
            }
        }

        let minted = lp_minted(amount0, amount1, &reserves)?;
        let share = pool_share_pct(minted, reserves.total_supply())?;

        debug!(
            pair = %pair,
            amount0,
            amount1,
            minted,
            %share,
            initializes_pool,
            "deposit quoted"
        );

        Ok(DepositQuote {
            amount0,
            amount1,
            lp_minted: minted,
            pool_share_pct: share,
            initializes_pool,
        })
    }

    /// Quotes a withdrawal burning `lp_amount` LP tokens out of the
    /// holder's `lp_balance` (both decimal strings at LP precision).
    pub fn quote_withdrawal(
        &self,
        token_a: &Token,
        token_b: &Token,
        lp_amount: &str,
        lp_balance: &str,
    ) -> Result<WithdrawalQuote, QuoteError> {
        let pair = Pair::new(token_a.clone(), token_b.clone())?;
        let lp_raw = parse_amount(lp_amount, LP_TOKEN_DECIMALS)?;
        let balance_raw = parse_balance(lp_balance, LP_TOKEN_DECIMALS)?;

        if lp_raw > balance_raw {
            return Err(QuoteError::InsufficientBalance {
                requested: lp_raw,
                available: balance_raw,
            });
        }

        let reserves = self
            .store
            .get(&pair.key())
            .map_err(|_| QuoteError::PairNotFound(pair.key()))?;
        let (amount0, amount1) = withdrawal_amounts(lp_raw, &reserves)?;

        debug!(
            pair = %pair,
            lp_burned = lp_raw,
            amount0,
            amount1,
            "withdrawal quoted"
        );

        Ok(WithdrawalQuote {
            lp_burned: lp_raw,
            amount0,
            amount1,
            amount0_display: format_amount(amount0, pair.token0().decimals()),
            amount1_display: format_amount(amount1, pair.token1().decimals()),
        })
    }
}
