use ethers::prelude::*;
use std::sync::Arc;

pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

pub fn create_provider(rpc_url: &str) -> Result<Provider<Http>, Box<dyn std::error::Error + Send + Sync>> {
    let provider = Provider::<Http>::try_from(rpc_url)?;
    Ok(provider)
}

/// Binds a wallet to the provider. The chain id goes on the wallet (EIP-155).
pub fn create_signer_client(
    provider: Provider<Http>,
    wallet: LocalWallet,
    chain_id: u64,
) -> Arc<SignerClient> {
    Arc::new(SignerMiddleware::new(provider, wallet.with_chain_id(chain_id)))
}
