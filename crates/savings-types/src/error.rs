use thiserror::Error;

use crate::account::AccountId;
use crate::amount::Amount;
use crate::block::BlockHeight;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SavingsError {
    #[error("Amount must be greater than zero")]
    AmountZero,

    #[error("Insufficient balance: account={account}, balance={balance}, requested={requested}")]
    InsufficientBalance {
        account: AccountId,
        balance: Amount,
        requested: Amount,
    },

    #[error("Block regression: account={account}, checkpoint={checkpoint}, current={current}")]
    BlockRegression {
        account: AccountId,
        checkpoint: BlockHeight,
        current: BlockHeight,
    },

    #[error("Arithmetic out of range: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl SavingsError {
    /// Stable error tag, as reported by the savings contract
    pub fn code(&self) -> &'static str {
        match self {
            SavingsError::AmountZero => "ERR_AMOUNT_ZERO",
            SavingsError::InsufficientBalance { .. } => "ERR_INSUFFICIENT_BALANCE",
            SavingsError::BlockRegression { .. } => "ERR_BLOCK_REGRESSION",
            SavingsError::Overflow(_) => "ERR_OVERFLOW",
            SavingsError::ConfigError(_) => "ERR_CONFIG",
            SavingsError::SerializationError(_) => "ERR_SERIALIZATION",
        }
    }
}

impl From<serde_json::Error> for SavingsError {
    fn from(err: serde_json::Error) -> Self {
        SavingsError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SavingsError>;
