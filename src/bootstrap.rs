use std::str::FromStr;
use std::sync::Arc;
use ethers::prelude::*;
use crate::config::HarnessConfig;
use crate::chain::contracts::{LiquidityProvider, MockErc20, UniswapV3Factory};
use crate::chain::providers::{self, SignerClient};

/// Signer client plus typed handles to every deployed collaborator.
pub struct Harness {
    pub client: Arc<SignerClient>,
    pub chain_id: u64,

    pub factory: UniswapV3Factory<SignerClient>,
    pub liquidity_provider: LiquidityProvider<SignerClient>,

    // Sorted so that token0 < token1, matching the pool's own ordering
    pub token0: MockErc20<SignerClient>,
    pub token1: MockErc20<SignerClient>,
}

impl Harness {
    pub fn new(config: &HarnessConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let provider = providers::create_provider(&config.rpc_url)?;
        let wallet = LocalWallet::from_str(&config.private_key)?;
        let client = providers::create_signer_client(provider, wallet, config.chain_id);

        let (token0, token1) = sort_tokens(
            Address::from_str(&config.token0_address)?,
            Address::from_str(&config.token1_address)?,
        );

        Ok(Harness {
            factory: UniswapV3Factory::new(Address::from_str(&config.factory_address)?, client.clone()),
            liquidity_provider: LiquidityProvider::new(
                Address::from_str(&config.liquidity_provider_address)?,
                client.clone(),
            ),
            token0: MockErc20::new(token0, client.clone()),
            token1: MockErc20::new(token1, client.clone()),
            chain_id: config.chain_id,
            client,
        })
    }

    /// The deployer account the harness signs with.
    pub fn operator(&self) -> Address {
        self.client.address()
    }

    /// A second signer on the same node, e.g. an unfunded account.
    pub fn client_for(&self, wallet: LocalWallet) -> Arc<SignerClient> {
        providers::create_signer_client(self.client.inner().clone(), wallet, self.chain_id)
    }
}

/// Pools order their tokens by address.
pub fn sort_tokens(a: Address, b: Address) -> (Address, Address) {
    if a < b {
        (a, b)
    } else {
        log::debug!("Swapping token order: {:?} < {:?}", b, a);
        (b, a)
    }
}
