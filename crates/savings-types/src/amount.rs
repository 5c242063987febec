use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SavingsError};

/// Token amount in the ledger's smallest unit
/// Unsigned, so a balance or a goal target can never go negative
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn new(units: u64) -> Self {
        Amount(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn checked_add(&self, other: Self) -> Result<Self> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or_else(|| SavingsError::Overflow(format!("overflow in {} + {}", self.0, other.0)))
    }

    /// Checked subtraction; callers check sufficiency first
    pub fn checked_sub(&self, other: Self) -> Result<Self> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or_else(|| SavingsError::Overflow(format!("underflow in {} - {}", self.0, other.0)))
    }

    /// Narrow a wide intermediate back into an amount
    pub fn try_from_wide(value: u128) -> Result<Self> {
        u64::try_from(value)
            .map(Amount)
            .map_err(|_| SavingsError::Overflow(format!("{} does not fit in an amount", value)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Amount(units)
    }
}
