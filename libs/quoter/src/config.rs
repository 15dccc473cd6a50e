//! Engine configuration.
//!
//! Loadable from TOML with every field optional; unset fields take the
//! documented defaults: 0.3% swap fee, 0.5% default slippage, 1%
//! deposit-ratio tolerance.

use serde::{Deserialize, Serialize};
use teadex_amm::{DEFAULT_FEE_BPS, BPS_DENOMINATOR};
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// TOML syntax or shape error.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Fee must stay below 100%.
    #[error("fee_bps {0} must be below 10000")]
    FeeOutOfRange(u32),

    /// Slippage bounds must satisfy `default <= max <= 10000`.
    #[error("slippage bounds invalid: default {default_bps} bps, max {max_bps} bps")]
    SlippageBounds { default_bps: u32, max_bps: u32 },

    /// Ratio tolerance must stay below 100% or the deposit gate is moot.
    #[error("ratio_tolerance_bps {0} must be below 10000")]
    RatioToleranceOutOfRange(u32),
}

/// Tunable constants for the quote facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuoterConfig {
    /// Proportional swap fee in basis points.
    pub fee_bps: u32,
    /// Slippage tolerance applied when the caller supplies none.
    pub default_slippage_bps: u32,
    /// Upper bound on caller-supplied slippage tolerance.
    pub max_slippage_bps: u32,
    /// Maximum deviation of a deposit from the pool ratio before the quote
    /// is rejected with a ratio mismatch.
    pub ratio_tolerance_bps: u32,
}

impl Default for QuoterConfig {
    fn default() -> Self {
        Self {
            fee_bps: DEFAULT_FEE_BPS,
            default_slippage_bps: 50,
            max_slippage_bps: BPS_DENOMINATOR as u32,
            ratio_tolerance_bps: 100,
        }
    }
}

impl QuoterConfig {
    /// Parses configuration from a TOML document and validates it.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks internal consistency of the bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if u128::from(self.fee_bps) >= BPS_DENOMINATOR {
            return Err(ConfigError::FeeOutOfRange(self.fee_bps));
        }
        if self.default_slippage_bps > self.max_slippage_bps
            || u128::from(self.max_slippage_bps) > BPS_DENOMINATOR
        {
            return Err(ConfigError::SlippageBounds {
                default_bps: self.default_slippage_bps,
                max_bps: self.max_slippage_bps,
            });
        }
        if u128::from(self.ratio_tolerance_bps) >= BPS_DENOMINATOR {
            return Err(ConfigError::RatioToleranceOutOfRange(self.ratio_tolerance_bps));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_documented_constants() {
        let config = QuoterConfig::default();
        assert_eq!(config.fee_bps, 30);
        assert_eq!(config.default_slippage_bps, 50);
        assert_eq!(config.ratio_tolerance_bps, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = QuoterConfig::from_toml_str("fee_bps = 25\n").unwrap();
        assert_eq!(config.fee_bps, 25);
        assert_eq!(config.default_slippage_bps, 50);
    }

    #[test]
    fn rejects_inconsistent_bounds() {
        assert!(matches!(
            QuoterConfig::from_toml_str("fee_bps = 10000\n"),
            Err(ConfigError::FeeOutOfRange(10_000))
        ));
        assert!(matches!(
            QuoterConfig::from_toml_str("default_slippage_bps = 600\nmax_slippage_bps = 500\n"),
            Err(ConfigError::SlippageBounds { .. })
        ));
        assert!(QuoterConfig::from_toml_str("unknown_field = 1\n").is_err());
        // A tolerance of 100%+ would wave every deposit through the ratio
        // gate.
        assert!(matches!(
            QuoterConfig::from_toml_str("ratio_tolerance_bps = 10000\n"),
            Err(ConfigError::RatioToleranceOutOfRange(10_000))
        ));
        assert!(QuoterConfig::from_toml_str("ratio_tolerance_bps = 9999\n").is_ok());
    }
}
