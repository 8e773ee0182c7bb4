use ethers::types::U256;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, PoolHelperError};
use crate::math::sqrt_price_math::{
    bigint_to_u256, encode_sqrt_ratio_x96, price_from_sqrt_ratio_x96, u256_to_bigint,
};

/// Decoded `slot0()` tuple: (sqrtPriceX96, tick, observationIndex,
/// observationCardinality, observationCardinalityNext, feeProtocol, unlocked).
pub type Slot0 = (U256, i32, u16, u16, u16, u8, bool);

/// Live pool state: `liquidity()` plus the full `slot0()` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolState {
    pub liquidity: u128,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub observation_index: u16,
    pub observation_cardinality: u16,
    pub observation_cardinality_next: u16,
    pub fee_protocol: u8,
    pub unlocked: bool,
}

impl PoolState {
    pub fn from_slot0(liquidity: u128, slot0: Slot0) -> Self {
        let (
            sqrt_price_x96,
            tick,
            observation_index,
            observation_cardinality,
            observation_cardinality_next,
            fee_protocol,
            unlocked,
        ) = slot0;
        Self {
            liquidity,
            sqrt_price_x96,
            tick,
            observation_index,
            observation_cardinality,
            observation_cardinality_next,
            fee_protocol,
            unlocked,
        }
    }

    pub fn sqrt_price_x96_bigint(&self) -> BigInt {
        u256_to_bigint(self.sqrt_price_x96)
    }

    pub fn liquidity_bigint(&self) -> BigInt {
        BigInt::from(self.liquidity)
    }

    /// Raw token1 per token0 price. Lossy.
    pub fn price(&self) -> f64 {
        price_from_sqrt_ratio_x96(&self.sqrt_price_x96_bigint())
    }
}

/// Pool parameters plus the current liquidity and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDescriptor {
    pub tick_spacing: i32,
    pub fee: u32,
    pub liquidity: u128,
    pub sqrt_price_x96: U256,
    pub tick: i32,
}

impl PoolDescriptor {
    pub fn from_parts(tick_spacing: i32, fee: u32, liquidity: u128, slot0: Slot0) -> Self {
        Self {
            tick_spacing,
            fee,
            liquidity,
            sqrt_price_x96: slot0.0,
            tick: slot0.1,
        }
    }

    /// The registered fee tier, if the pool uses one of the standard tiers.
    pub fn fee_tier(&self) -> Option<FeeTier> {
        FeeTier::try_from(self.fee).ok()
    }
}

/// Factory-enabled fee tiers, in hundredths of a bip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeTier {
    Lowest, // 0.01%
    Low,    // 0.05%
    Medium, // 0.3%
    High,   // 1%
}

impl FeeTier {
    pub fn as_u32(&self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    /// Tick spacing the factory assigns to this tier.
    pub fn tick_spacing(&self) -> i32 {
        match self {
            FeeTier::Lowest => 1,
            FeeTier::Low => 10,
            FeeTier::Medium => 60,
            FeeTier::High => 200,
        }
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = PoolHelperError;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        match fee {
            100 => Ok(FeeTier::Lowest),
            500 => Ok(FeeTier::Low),
            3000 => Ok(FeeTier::Medium),
            10000 => Ok(FeeTier::High),
            other => Err(PoolHelperError::UnknownFeeTier(other)),
        }
    }
}

/// Reserve amounts keyed by pool side. `token0` must be the pool's token0
/// (the lower address), so the encoded price is token1 per token0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReserves {
    pub token0: U256,
    pub token1: U256,
}

impl SeedReserves {
    pub fn new(token0: U256, token1: U256) -> Self {
        Self { token0, token1 }
    }

    /// sqrt(token1 / token0) in Q64.96.
    pub fn sqrt_price_x96(&self) -> Result<BigInt, MathError> {
        encode_sqrt_ratio_x96(&u256_to_bigint(self.token1), &u256_to_bigint(self.token0))
    }

    pub fn sqrt_price_x96_u256(&self) -> Result<U256, MathError> {
        bigint_to_u256(&self.sqrt_price_x96()?)
    }
}
