// BigInt Q64.96 price encoding and SqrtPriceMath amount deltas.
// ------------------------------------------------------------
// Rounding semantics match Uniswap V3 (two-step ceil for token0).
// Amounts are magnitudes: callers decide which side pays.

use ethers::types::U256;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::error::MathError;

pub const Q96_SHIFT: usize = 96;

#[inline]
pub fn q96() -> BigInt {
    BigInt::one() << Q96_SHIFT
}

#[inline]
fn ceil_div(a: &BigInt, b: &BigInt) -> BigInt {
    // assumes a>=0, b>0
    if a.is_zero() {
        return BigInt::zero();
    }
    (a + (b - BigInt::one())) / b
}

#[inline]
fn sorted(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    if a < b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

/// encodeSqrtRatioX96: floor(sqrt((amount1 << 192) / amount0)).
///
/// Argument order is numerator first, as in the Uniswap SDK: the result is the
/// Q96 square root of `amount1 / amount0`, i.e. token1 per token0.
pub fn encode_sqrt_ratio_x96(amount1: &BigInt, amount0: &BigInt) -> Result<BigInt, MathError> {
    if amount0.is_zero() {
        return Err(MathError::ZeroDenominator);
    }
    if amount0.is_negative() || amount1.is_negative() {
        return Err(MathError::Overflow);
    }
    let ratio_x192 = (amount1 << (2 * Q96_SHIFT)) / amount0;
    Ok(ratio_x192.sqrt())
}

/// getAmount0Delta:
///   if round_up: ceil( ceil( (L << 96) * (sb - sa) / sb ) / sa )
///   else:        floor( floor( (L << 96) * (sb - sa) / sb ) / sa )
pub fn get_amount0_delta(
    sqrt_ratio_a_x96: &BigInt,
    sqrt_ratio_b_x96: &BigInt,
    liquidity: &BigInt,
    round_up: bool,
) -> Result<BigInt, MathError> {
    let (sa, sb) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if !sa.is_positive() {
        return Err(MathError::SqrtRatioOutOfRange(sa));
    }
    if liquidity.is_zero() || sa == sb {
        return Ok(BigInt::zero());
    }

    let numerator1 = liquidity << Q96_SHIFT;
    let numerator2 = &sb - &sa;

    if round_up {
        let t = ceil_div(&(&numerator1 * &numerator2), &sb);
        Ok(ceil_div(&t, &sa))
    } else {
        Ok(((&numerator1 * &numerator2) / &sb) / &sa)
    }
}

/// getAmount1Delta:
///   if round_up: ceil( L * (sb - sa) / Q96 )
///   else:        floor( L * (sb - sa) / Q96 )
pub fn get_amount1_delta(
    sqrt_ratio_a_x96: &BigInt,
    sqrt_ratio_b_x96: &BigInt,
    liquidity: &BigInt,
    round_up: bool,
) -> BigInt {
    let (sa, sb) = sorted(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if liquidity.is_zero() || sa == sb {
        return BigInt::zero();
    }

    let num = liquidity * (sb - sa);
    if round_up {
        ceil_div(&num, &q96())
    } else {
        num / q96()
    }
}

/// Raw token1/token0 price (no decimals adjustment). Lossy, for reporting.
pub fn price_from_sqrt_ratio_x96(sqrt_price_x96: &BigInt) -> f64 {
    let sqrt = sqrt_price_x96.to_f64().unwrap_or(0.0) / 2f64.powi(Q96_SHIFT as i32);
    sqrt * sqrt
}

pub fn u256_to_bigint(u: U256) -> BigInt {
    let mut buf = [0u8; 32];
    u.to_big_endian(&mut buf);
    BigInt::from_bytes_be(Sign::Plus, &buf)
}

pub fn bigint_to_u256(v: &BigInt) -> Result<U256, MathError> {
    let (sign, bytes) = v.to_bytes_be();
    if sign == Sign::Minus || bytes.len() > 32 {
        return Err(MathError::Overflow);
    }
    Ok(U256::from_big_endian(&bytes))
}
