use ethers::types::{Address, H256};
use num_bigint::BigInt;
use thiserror::Error;

/// Failures raised by the helpers themselves rather than by a collaborator call.
#[derive(Debug, Error)]
pub enum PoolHelperError {
    #[error("{step}: transaction dropped from the mempool before a receipt was produced")]
    TransactionDropped { step: &'static str },

    #[error("{step}: transaction {tx_hash:?} reverted")]
    TransactionReverted { step: &'static str, tx_hash: H256 },

    #[error("no pool registered for {token0:?}/{token1:?} at fee {fee}")]
    PoolNotFound {
        token0: Address,
        token1: Address,
        fee: u32,
    },

    #[error("unsupported fee tier {0}")]
    UnknownFeeTier(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero: denominator amount is zero")]
    ZeroDenominator,

    #[error("tick {0} outside [MIN_TICK, MAX_TICK]")]
    TickOutOfRange(i32),

    #[error("sqrt ratio {0} outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)")]
    SqrtRatioOutOfRange(BigInt),

    #[error("value does not fit in 256 unsigned bits")]
    Overflow,
}
