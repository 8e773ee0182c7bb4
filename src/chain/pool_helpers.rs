// src/chain/pool_helpers.rs
//
// Pool test helpers: bootstrap a pool at a seeded price, read its state back,
// and size the token amounts needed to move it to a new price.

use ethers::abi::Detokenize;
use ethers::contract::ContractCall;
use ethers::prelude::*;
use num_bigint::BigInt;
use std::sync::Arc;

use crate::chain::contracts::{LiquidityProvider, MockErc20, UniswapV3Factory, UniswapV3Pool};
use crate::error::PoolHelperError;
use crate::math::sqrt_price_math::{get_amount0_delta, get_amount1_delta};
use crate::models::{FeeTier, PoolDescriptor, PoolState, SeedReserves};

/// Sends a state-changing call and waits for its receipt.
async fn send_and_confirm<M, D>(
    step: &'static str,
    call: ContractCall<M, D>,
) -> Result<TransactionReceipt, Box<dyn std::error::Error + Send + Sync>>
where
    M: Middleware + 'static,
    D: Detokenize,
{
    log::debug!("{}: sending", step);
    let pending = call.send().await?;
    let receipt = pending
        .await?
        .ok_or(PoolHelperError::TransactionDropped { step })?;

    if receipt.status == Some(U64::zero()) {
        return Err(PoolHelperError::TransactionReverted {
            step,
            tx_hash: receipt.transaction_hash,
        }
        .into());
    }
    log::debug!("{}: mined in {:?}", step, receipt.transaction_hash);
    Ok(receipt)
}

/// Funds the liquidity provider, creates the pool, initializes it at the
/// price implied by `seed` and mints the first position.
///
/// `seed.token0` / `seed.token1` must follow the same order as `token0` /
/// `token1`. The first failing step aborts the sequence; nothing is rolled back.
pub async fn create_pool_and_set_price<M: Middleware + 'static>(
    liquidity_provider: &LiquidityProvider<M>,
    factory: &UniswapV3Factory<M>,
    token0: &MockErc20<M>,
    token1: &MockErc20<M>,
    fee: FeeTier,
    seed: SeedReserves,
    operator: Arc<M>,
) -> Result<UniswapV3Pool<M>, Box<dyn std::error::Error + Send + Sync>> {
    let lp_address = liquidity_provider.address();
    let (token0_address, token1_address) = (token0.address(), token1.address());

    // 1) Fund the liquidity provider from the operator account
    let token0_from_operator = MockErc20::new(token0_address, operator.clone());
    let token1_from_operator = MockErc20::new(token1_address, operator);
    send_and_confirm(
        "token0 transfer",
        token0_from_operator.transfer(lp_address, seed.token0),
    )
    .await?;
    send_and_confirm(
        "token1 transfer",
        token1_from_operator.transfer(lp_address, seed.token1),
    )
    .await?;

    // 2) Register the pool
    send_and_confirm(
        "createPool",
        factory.create_pool(token0_address, token1_address, fee.as_u32()),
    )
    .await?;

    // 3) Initial price
    let sqrt_price_x96 = seed.sqrt_price_x96_u256()?;

    // 4) Resolve and initialize
    let pool_address = factory
        .get_pool(token0_address, token1_address, fee.as_u32())
        .call()
        .await?;
    if pool_address == Address::zero() {
        return Err(PoolHelperError::PoolNotFound {
            token0: token0_address,
            token1: token1_address,
            fee: fee.as_u32(),
        }
        .into());
    }
    log::debug!("Pool {:?} initializing at sqrtPriceX96 {}", pool_address, sqrt_price_x96);

    let pool = UniswapV3Pool::new(pool_address, factory.client());
    send_and_confirm("initialize", pool.initialize(sqrt_price_x96)).await?;

    // 5) First position
    send_and_confirm(
        "mintNewPositionWithParams",
        liquidity_provider.mint_new_position_with_params(
            token0_address,
            token1_address,
            seed.token0,
            seed.token1,
            fee.as_u32(),
        ),
    )
    .await?;

    log::info!(
        "Bootstrapped pool {:?} ({:?}/{:?}, fee {})",
        pool_address,
        token0_address,
        token1_address,
        fee.as_u32()
    );
    Ok(pool)
}

/// Current liquidity and slot0 of the pool at `pool_address`.
pub async fn get_pool_state<M: Middleware + 'static>(
    client: Arc<M>,
    pool_address: Address,
) -> Result<PoolState, Box<dyn std::error::Error + Send + Sync>> {
    let pool = UniswapV3Pool::new(pool_address, client);
    let liquidity = pool.liquidity().call().await?;
    let slot0 = pool.slot_0().call().await?;

    log::debug!("Pool {:?} state: tick {}, liquidity {}", pool_address, slot0.1, liquidity);
    Ok(PoolState::from_slot0(liquidity, slot0))
}

/// Tick spacing, fee, liquidity and price of a pool. The four reads run concurrently.
pub async fn get_pool_data<M: Middleware + 'static>(
    client: Arc<M>,
    pool_address: Address,
) -> Result<PoolDescriptor, Box<dyn std::error::Error + Send + Sync>> {
    let pool = UniswapV3Pool::new(pool_address, client);

    let tick_spacing_call = pool.tick_spacing();
    let fee_call = pool.fee();
    let liquidity_call = pool.liquidity();
    let slot0_call = pool.slot_0();

    let (tick_spacing, fee, liquidity, slot0) = tokio::try_join!(
        tick_spacing_call.call(),
        fee_call.call(),
        liquidity_call.call(),
        slot0_call.call(),
    )?;

    Ok(PoolDescriptor::from_parts(tick_spacing, fee, liquidity, slot0))
}

async fn current_and_target_prices<M: Middleware + 'static>(
    client: Arc<M>,
    pool_address: Address,
    new_token0_amount: U256,
    new_token1_amount: U256,
) -> Result<(PoolState, BigInt), Box<dyn std::error::Error + Send + Sync>> {
    let state = get_pool_state(client, pool_address).await?;
    let target = SeedReserves::new(new_token0_amount, new_token1_amount).sqrt_price_x96()?;
    Ok((state, target))
}

/// Token0 needed to move the pool from its current price to the price of
/// `new_token1_amount / new_token0_amount`. Rounded up.
pub async fn calculate_amount0_to_sale<M: Middleware + 'static>(
    client: Arc<M>,
    pool_address: Address,
    new_token0_amount: U256,
    new_token1_amount: U256,
) -> Result<BigInt, Box<dyn std::error::Error + Send + Sync>> {
    let (state, target) =
        current_and_target_prices(client, pool_address, new_token0_amount, new_token1_amount)
            .await?;
    let amount = get_amount0_delta(
        &state.sqrt_price_x96_bigint(),
        &target,
        &state.liquidity_bigint(),
        true,
    )?;
    Ok(amount)
}

/// Token1 counterpart of [`calculate_amount0_to_sale`]. Rounded up.
pub async fn calculate_amount1_to_sale<M: Middleware + 'static>(
    client: Arc<M>,
    pool_address: Address,
    new_token0_amount: U256,
    new_token1_amount: U256,
) -> Result<BigInt, Box<dyn std::error::Error + Send + Sync>> {
    let (state, target) =
        current_and_target_prices(client, pool_address, new_token0_amount, new_token1_amount)
            .await?;
    Ok(get_amount1_delta(
        &state.sqrt_price_x96_bigint(),
        &target,
        &state.liquidity_bigint(),
        true,
    ))
}
