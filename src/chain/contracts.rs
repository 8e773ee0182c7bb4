// Typed bindings for the contracts a pool harness drives.

use ethers::contract::abigen;

abigen!(
    UniswapV3Pool,
    r#"[
        function initialize(uint160 sqrtPriceX96) external
        function liquidity() external view returns (uint128)
        function slot0() external view returns (uint160 sqrtPriceX96, int24 tick, uint16 observationIndex, uint16 observationCardinality, uint16 observationCardinalityNext, uint8 feeProtocol, bool unlocked)
        function tickSpacing() external view returns (int24)
        function fee() external view returns (uint24)
    ]"#
);

abigen!(
    UniswapV3Factory,
    r#"[
        function createPool(address tokenA, address tokenB, uint24 fee) external returns (address pool)
        function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool)
    ]"#
);

abigen!(
    MockErc20,
    r#"[
        function transfer(address to, uint256 amount) external returns (bool)
        function balanceOf(address account) external view returns (uint256)
    ]"#
);

// Test-side periphery wrapper around the position manager.
abigen!(
    LiquidityProvider,
    r#"[
        function mintNewPositionWithParams(address token0, address token1, uint256 amount0ToMint, uint256 amount1ToMint, uint24 poolFee) external returns (uint256 tokenId, uint128 liquidity, uint256 amount0, uint256 amount1)
    ]"#
);
