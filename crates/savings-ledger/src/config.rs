use savings_types::{Amount, BlockHeight, Result, SavingsError};
use serde::{Deserialize, Serialize};

/// Annual simple interest, in whole percent
pub const INTEREST_RATE_PERCENT: u64 = 5;

/// Approximate number of blocks in a year
pub const BLOCKS_PER_YEAR: u64 = 52_560;

/// Interest accrual parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestConfig {
    pub rate_percent: u64,      // Simple interest per period, whole percent
    pub blocks_per_period: u64, // Period length in blocks
}

impl Default for InterestConfig {
    fn default() -> Self {
        InterestConfig {
            rate_percent: INTEREST_RATE_PERCENT,
            blocks_per_period: BLOCKS_PER_YEAR,
        }
    }
}

impl InterestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.blocks_per_period == 0 {
            return Err(SavingsError::ConfigError(
                "blocks_per_period must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: InterestConfig = serde_json::from_str(json)
            .map_err(|e| SavingsError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// floor(balance * rate * blocks / (100 * blocks_per_period))
    pub fn interest_for(&self, balance: Amount, blocks_passed: BlockHeight) -> Result<Amount> {
        let numerator = (balance.units() as u128)
            .checked_mul(self.rate_percent as u128)
            .and_then(|n| n.checked_mul(blocks_passed as u128))
            .ok_or_else(|| {
                SavingsError::Overflow(format!(
                    "interest on {} over {} blocks",
                    balance, blocks_passed
                ))
            })?;
        let denominator = 100u128 * self.blocks_per_period as u128;
        if denominator == 0 {
            return Err(SavingsError::ConfigError(
                "blocks_per_period must be greater than zero".to_string(),
            ));
        }

        Amount::try_from_wide(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InterestConfig::default();
        assert_eq!(config.rate_percent, 5);
        assert_eq!(config.blocks_per_period, 52_560);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config =
            InterestConfig::from_json(r#"{"rate_percent": 12, "blocks_per_period": 100}"#).unwrap();
        assert_eq!(config.rate_percent, 12);
        assert_eq!(config.blocks_per_period, 100);
    }

    #[test]
    fn test_from_json_rejects_zero_period() {
        let err = InterestConfig::from_json(r#"{"rate_percent": 5, "blocks_per_period": 0}"#)
            .unwrap_err();
        assert!(matches!(err, SavingsError::ConfigError(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            InterestConfig::from_json("not json"),
            Err(SavingsError::ConfigError(_))
        ));
    }

    #[test]
    fn test_interest_full_period() {
        let config = InterestConfig::default();
        let interest = config.interest_for(Amount::new(1000), BLOCKS_PER_YEAR).unwrap();
        assert_eq!(interest, Amount::new(50));
    }

    #[test]
    fn test_interest_floors() {
        let config = InterestConfig::default();
        // 1000 * 5 * 100 / 5_256_000 = 0.095..
        assert_eq!(config.interest_for(Amount::new(1000), 100).unwrap(), Amount::ZERO);
        // half a period on 1001: 1001 * 5 * 26280 / 5_256_000 = 25.025
        assert_eq!(
            config.interest_for(Amount::new(1001), 26_280).unwrap(),
            Amount::new(25)
        );
    }

    #[test]
    fn test_interest_overflow() {
        let config = InterestConfig {
            rate_percent: u64::MAX,
            blocks_per_period: 1,
        };
        assert!(matches!(
            config.interest_for(Amount::new(u64::MAX), u64::MAX),
            Err(SavingsError::Overflow(_))
        ));
    }
}
